//! Domain models for the crop advisor scoring core

mod catalog;
mod classification;
mod plan;
mod suitability;

pub use catalog::*;
pub use classification::*;
pub use plan::*;
pub use suitability::*;
