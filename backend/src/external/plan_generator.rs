//! Farming plan generator client
//!
//! Sends the plan prompt to a hosted text-generation model and returns the
//! raw reply text. A single attempt is made; any failure is an error.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Client for the text-generation API
#[derive(Clone)]
pub struct PlanGeneratorClient {
    api_endpoint: String,
    api_key: String,
    model: String,
    http_client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl PlanGeneratorClient {
    /// Create a new plan generator client
    pub fn new(
        api_endpoint: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            api_endpoint: api_endpoint.trim_end_matches('/').to_string(),
            api_key,
            model,
            http_client,
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.api_endpoint, self.model, self.api_key
        )
    }

    /// Send a prompt and return the generated text
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http_client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::PlanGeneratorError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::PlanGeneratorError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::PlanGeneratorError(format!("Failed to parse response: {}", e)))?;

        extract_text(result)
    }
}

fn extract_text(response: GenerateResponse) -> AppResult<String> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AppError::PlanGeneratorError(
            "Generator returned no text".to_string(),
        ));
    }
    Ok(text)
}
