//! Weather API client for current field conditions
//!
//! Integrates with the OpenWeatherMap current-weather endpoint. Only the
//! temperature and humidity feed the classifier.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Current conditions at a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub location_name: String,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    main: OWMMain,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(
            api_key,
            "https://api.openweathermap.org/data/2.5".to_string(),
        )
    }

    /// Create a new WeatherClient with custom base URL
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn current_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        )
    }

    /// Fetch current temperature and humidity by GPS coordinates
    pub async fn get_current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<WeatherReading> {
        let response = self
            .client
            .get(self.current_url(latitude, longitude))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMCurrentResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })?;

        Ok(convert_current_response(data))
    }
}

fn convert_current_response(data: OWMCurrentResponse) -> WeatherReading {
    WeatherReading {
        location_name: data.name,
        temperature_celsius: data.main.temp,
        humidity_percent: data.main.humidity,
    }
}
