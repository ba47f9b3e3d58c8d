//! Shared plain-data types for the pinplate part generator: the input
//! parameter set, derived dimensions, and the validation/fit error taxonomy.

pub mod errors;
pub mod params;

pub use errors::*;
pub use params::*;
