use crate::core::pollutant::Pollutant;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::EnumCount as _;
use thiserror::Error;

/// A feature vector in canonical column order (see [`Pollutant`]).
pub type FeatureRow = [f64; Pollutant::COUNT];

#[derive(Debug, Error, PartialEq)]
pub enum ReadingError {
    #[error("{pollutant} concentration must be a finite number, got {value}")]
    NotFinite { pollutant: Pollutant, value: f64 },

    #[error("{pollutant} concentration cannot be negative, got {value}")]
    Negative { pollutant: Pollutant, value: f64 },
}

/// One set of pollutant concentration measurements.
///
/// Field order matches the canonical column order. The schema attributes
/// drive the input surface: the [0, 150] range and the per-field defaults
/// are read back out of the generated JSON Schema by `ui::fields`, so they
/// are surface conventions rather than core invariants. The core itself
/// only requires finite, non-negative values (see [`PollutantReading::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct PollutantReading {
    /// Fine road dust and smoke from vehicle exhaust.
    #[schemars(title = "PM10", range(min = 0, max = 150))]
    pub pm10: f64,

    /// Exhaust gas from industry and diesel vehicles.
    #[schemars(title = "SO2", range(min = 0, max = 150))]
    pub so2: f64,

    /// Toxic gas from incomplete combustion, mostly tailpipes.
    #[schemars(title = "CO", range(min = 0, max = 150))]
    pub co: f64,

    /// Formed when sunlight reacts with polluted air.
    #[schemars(title = "O3", range(min = 0, max = 150))]
    pub o3: f64,

    /// Released by burning fossil fuels.
    #[schemars(title = "NO2", range(min = 0, max = 150))]
    pub no2: f64,
}

impl Default for PollutantReading {
    fn default() -> Self {
        Self {
            pm10: 20.0,
            so2: 15.0,
            co: 10.0,
            o3: 30.0,
            no2: 5.0,
        }
    }
}

impl PollutantReading {
    pub fn new(pm10: f64, so2: f64, co: f64, o3: f64, no2: f64) -> Self {
        Self {
            pm10,
            so2,
            co,
            o3,
            no2,
        }
    }

    /// Builds a reading from a feature row in canonical column order.
    pub fn from_row(row: FeatureRow) -> Self {
        Self::new(row[0], row[1], row[2], row[3], row[4])
    }

    #[inline]
    pub fn value(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm10 => self.pm10,
            Pollutant::So2 => self.so2,
            Pollutant::Co => self.co,
            Pollutant::O3 => self.o3,
            Pollutant::No2 => self.no2,
        }
    }

    /// The feature vector handed to classifiers, in canonical column order.
    #[inline]
    pub fn feature_row(&self) -> FeatureRow {
        [self.pm10, self.so2, self.co, self.o3, self.no2]
    }

    /// Rejects measurements outside the model's domain.
    ///
    /// Concentrations must be finite and non-negative. The upper surface
    /// bound of 150 is deliberately not enforced here; readings above it
    /// are still valid model inputs.
    pub fn validate(&self) -> Result<(), ReadingError> {
        use strum::IntoEnumIterator;

        for pollutant in Pollutant::iter() {
            let value = self.value(pollutant);
            if !value.is_finite() {
                return Err(ReadingError::NotFinite { pollutant, value });
            }
            if value < 0.0 {
                return Err(ReadingError::Negative { pollutant, value });
            }
        }
        Ok(())
    }
}
