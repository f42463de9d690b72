pub mod batch;
pub mod contacts;
pub mod reference;
pub mod resolution;
pub mod utils;

pub use resolution::{global_resolver, CountryResolver, ResolutionLayer, ResolvedCountry};
