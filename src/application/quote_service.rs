use std::sync::Arc;

use tracing::{error, info};

use super::ml::predictor::ClaimPredictor;
use super::ml::smartcore_model::SmartcoreClaimModel;
use crate::config::Config;
use crate::domain::errors::QuoteError;
use crate::domain::pricing::{self, Quote};
use crate::domain::quote::QuoteRequest;

/// Outcome of the startup model load. A failed load keeps the reason around
/// so health checks and quote attempts can report it.
enum ModelState {
    Ready(Arc<dyn ClaimPredictor>),
    Failed(String),
}

/// Application service that turns validated quote requests into priced
/// quotes. Holds the claim model for the lifetime of the process.
pub struct QuoteService {
    model: ModelState,
}

impl QuoteService {
    /// Loads the claim model from the configured path. A load failure does
    /// not abort startup; the service comes up degraded and keeps answering
    /// health checks.
    pub fn from_config(config: &Config) -> Self {
        match SmartcoreClaimModel::load(&config.model_path) {
            Ok(model) => {
                info!(
                    "Loaded claim model '{}' from {:?}",
                    model.name(),
                    config.model_path
                );
                Self::with_predictor(Arc::new(model))
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                error!("Claim model unavailable, starting degraded: {}", reason);
                Self::unavailable(reason)
            }
        }
    }

    pub fn with_predictor(predictor: Arc<dyn ClaimPredictor>) -> Self {
        Self {
            model: ModelState::Ready(predictor),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            model: ModelState::Failed(reason.into()),
        }
    }

    pub fn model_loaded(&self) -> bool {
        matches!(self.model, ModelState::Ready(_))
    }

    /// Why the model failed to load, if it did.
    pub fn load_error(&self) -> Option<&str> {
        match &self.model {
            ModelState::Ready(_) => None,
            ModelState::Failed(reason) => Some(reason),
        }
    }

    /// Runs one request through the model and prices the predicted claim.
    pub fn quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
        let predictor = match &self.model {
            ModelState::Ready(predictor) => predictor,
            ModelState::Failed(reason) => {
                return Err(QuoteError::ModelUnavailable {
                    reason: reason.clone(),
                });
            }
        };

        let features = request.to_feature_vector();
        let claim = predictor
            .predict(&features)
            .map_err(|reason| QuoteError::Inference { reason })?;

        Ok(pricing::price_claim(claim))
    }
}
