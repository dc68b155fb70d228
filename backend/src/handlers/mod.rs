//! HTTP handlers for the Crop Advisor API

mod crops;
mod health;
mod lookups;
mod plans;

pub use crops::*;
pub use health::*;
pub use lookups::*;
pub use plans::*;
