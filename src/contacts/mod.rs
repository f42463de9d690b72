pub mod honorific;
pub mod short_name;
