mod guidance;
mod prediction_service;

pub use guidance::{Guidance, Severity, guidance_for};
pub use prediction_service::PredictionService;
