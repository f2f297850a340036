//! The remote model, seen as two black-box calls: dashboard analysis and
//! invoice parsing.

mod gemini;
mod json;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{AIAnalysisResponse, AnalysisRequest, ParsedInvoice};

pub use gemini::GeminiGateway;
pub use json::parse_model_json;

#[async_trait]
pub trait AiGateway: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> AppResult<AIAnalysisResponse>;

    async fn parse_invoice(&self, image: &[u8], mime_type: &str) -> AppResult<ParsedInvoice>;
}

/// Gateway front that allows at most one analysis in flight. A second request
/// while one is pending fails with [`AppError::AnalysisInProgress`] rather than
/// queueing.
pub struct Analyzer {
    gateway: Arc<dyn AiGateway>,
    in_flight: AtomicBool,
}

impl Analyzer {
    pub fn new(gateway: Arc<dyn AiGateway>) -> Self {
        Self {
            gateway,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn gateway(&self) -> &dyn AiGateway {
        self.gateway.as_ref()
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> AppResult<AIAnalysisResponse> {
        let _slot = InFlight::acquire(&self.in_flight).ok_or(AppError::AnalysisInProgress)?;

        info!(period = %request.period, "Requesting AI analysis");
        let result = self.gateway.analyze(request).await;
        match &result {
            Ok(response) => info!(
                alerts = response.alerts.len(),
                actions = response.quick_actions.len(),
                "AI analysis completed"
            ),
            Err(e) => warn!(error = %e, "AI analysis failed"),
        }
        result
    }
}

/// Clears the flag on drop, including when the request future is cancelled.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
