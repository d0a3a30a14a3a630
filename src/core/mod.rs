mod category;
mod distribution;
mod pollutant;
mod prediction;
mod reading;

pub use category::CategoryLabel;
pub use distribution::ProbabilityDistribution;
pub use pollutant::Pollutant;
pub use prediction::PredictionResult;
pub use reading::{FeatureRow, PollutantReading, ReadingError};
