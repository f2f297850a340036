use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde_json::{json, Value};
use tracing::debug;

use super::{parse_model_json, AiGateway};
use crate::config::AiConfig;
use crate::error::{AppError, AppResult};
use crate::models::{AIAnalysisResponse, AnalysisRequest, ParsedInvoice};

const ANALYSIS_PROMPT: &str = "You are an operations analyst for a restaurant. \
Given the JSON snapshot below, flag stock-out risks and margin problems and suggest actions. \
Return ONLY valid JSON with keys: analysis_summary (string), \
alerts (array of {type: STOCKOUT|MARGIN, item_name, severity: HIGH|MEDIUM, message, suggested_action}), \
procurement_list (array of {item_name, quantity, unit, supplier_name, reason}), \
quick_actions (array of {type: SUPPLIER_EMAIL, label, recipient, subject, body} \
or {type: PRICE_UPDATE, label, item_name, new_price}).";

const INVOICE_PROMPT: &str = "Read this supplier invoice. \
Return ONLY valid JSON: {\"supplierName\": string, \
\"items\": [{\"name\": string, \"qty\": number, \"unit\": string, \"unitPrice\": number}]}";

/// Google Gemini `generateContent` client.
pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiGateway {
    pub fn from_config(config: &AiConfig) -> AppResult<Self> {
        let api_key = config
            .resolved_api_key()
            .ok_or_else(|| AppError::Gateway("API key not set (ai.api_key or GEMINI_API_KEY)".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    async fn generate(&self, parts: Vec<Value>) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let res = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{ "parts": parts }],
                "generationConfig": { "responseMimeType": "application/json" }
            }))
            .send()
            .await
            // the URL carries the API key
            .map_err(|e| AppError::Http(e.without_url()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Gateway(format!("{status}: {body}")));
        }

        let body: Value = res.json().await.map_err(|e| AppError::Http(e.without_url()))?;
        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| AppError::MalformedResponse("no content in model reply".to_string()))?;

        debug!(bytes = text.len(), "Model replied");
        Ok(text.to_string())
    }
}

#[async_trait]
impl AiGateway for GeminiGateway {
    async fn analyze(&self, request: &AnalysisRequest) -> AppResult<AIAnalysisResponse> {
        let snapshot = serde_json::to_string(request)?;
        let text = self
            .generate(vec![json!({ "text": format!("{ANALYSIS_PROMPT}\n\n{snapshot}") })])
            .await?;
        parse_model_json(&text)
    }

    async fn parse_invoice(&self, image: &[u8], mime_type: &str) -> AppResult<ParsedInvoice> {
        let data = base64::engine::general_purpose::STANDARD.encode(image);
        let text = self
            .generate(vec![
                json!({ "text": INVOICE_PROMPT }),
                json!({ "inline_data": { "mime_type": mime_type, "data": data } }),
            ])
            .await?;
        parse_model_json(&text)
    }
}
