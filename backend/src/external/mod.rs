//! External API integrations

pub mod plan_generator;
pub mod weather;

pub use plan_generator::PlanGeneratorClient;
pub use weather::WeatherClient;
