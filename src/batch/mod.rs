pub mod country;
pub mod honorific;
pub mod short_name;
pub mod table;
