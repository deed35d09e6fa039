use crate::models::{RecommendationRequest, Recommendations};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, error};

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("HTTP error: {0}")] Http(String),
    #[error("backend returned status={status} body={body}")] Status { status: u16, body: String },
    #[error("parse error: {0}")] Parse(String),
    #[error("Other: {0}")] Other(String),
}

/// The single external call the page makes.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendations, RecommendationError>;
}

fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) { end -= 1; }
    format!("{}...[{} bytes]", &s[..end], s.len())
}

pub struct HttpRecommendationClient {
    client: Client,
    base_url: String,
}

impl HttpRecommendationClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RecommendationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecommendationError::Http(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn endpoint(&self) -> String { format!("{}/recommendations", self.base_url) }
}

#[async_trait]
impl RecommendationSource for HttpRecommendationClient {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendations, RecommendationError> {
        let url = self.endpoint();
        info!(request_id = %request.request_id, "🔗 Making request to: {}", url);
        info!("📤 Request body: {}", serde_json::to_string(request).unwrap_or_default());

        let response = self.client
            .post(&url)
            .header("X-Request-Id", request.request_id.to_string())
            .json(request)
            .send()
            .await
            .map_err(|e| RecommendationError::Http(e.to_string()))?;

        let status = response.status();
        info!("📥 Response status: {}", status);

        let body = response.text().await.map_err(|e| RecommendationError::Http(e.to_string()))?;
        if !status.is_success() {
            error!("❌ Backend error response: {}", truncate_for_log(&body, 500));
            return Err(RecommendationError::Status { status: status.as_u16(), body });
        }

        info!("📥 Raw backend response: {}", truncate_for_log(&body, 1000));
        serde_json::from_str(&body).map_err(|e| RecommendationError::Parse(e.to_string()))
    }
}

/// Offline stand-in used when no backend is configured.
pub struct DemoRecommendations;

#[async_trait]
impl RecommendationSource for DemoRecommendations {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendations, RecommendationError> {
        info!("Using demo mode - no backend call made");
        let piece = if request.color.trim().is_empty() {
            request.clothing_item.trim().to_string()
        } else {
            format!("{} {}", request.color.trim(), request.clothing_item.trim())
        };
        let styles = if request.styles.is_empty() { vec!["casual".to_string()] } else { request.styles.clone() };
        let (bottom, shoes) = match request.gender {
            crate::models::Gender::Men => ("dark wash jeans", "white sneakers"),
            crate::models::Gender::Women => ("high-waisted trousers", "loafers"),
        };
        let outfits: Vec<_> = styles.iter().map(|style| json!({
            "style": style,
            "items": [piece, bottom, shoes],
            "description": format!("A {style} look built around your {piece}."),
        })).collect();
        Ok(json!({ "outfits": outfits, "demo": true }))
    }
}
