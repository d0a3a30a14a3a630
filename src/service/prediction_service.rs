use crate::classifiers::{ClassificationError, Classifier};
use crate::core::{PollutantReading, PredictionResult};
use crate::model::ModelArtifact;
use std::sync::Arc;

/// Stateless request/response facade over the loaded model.
///
/// Holds only a shared handle to the immutable artifact; every call is a
/// pure function of its input, so the service can be shared freely.
pub struct PredictionService {
    model: Arc<ModelArtifact>,
}

impl PredictionService {
    pub fn new(model: Arc<ModelArtifact>) -> Self {
        Self { model }
    }

    #[inline]
    pub fn model(&self) -> &ModelArtifact {
        &self.model
    }

    /// Classifies one reading: category prediction first, then the
    /// per-class confidence over the same feature row, combined into a
    /// single result.
    ///
    /// Out-of-domain readings are rejected up front instead of being
    /// handed to the classifier.
    pub fn classify(
        &self,
        reading: &PollutantReading,
    ) -> Result<PredictionResult, ClassificationError> {
        reading.validate()?;
        let row = reading.feature_row();
        let label = self.model.model.predict(&row)?;
        let probabilities = self.model.model.predict_proba(&row)?;
        debug_assert_eq!(
            Some(&label),
            probabilities.argmax().map(|(l, _)| l),
            "classifier broke argmax consistency"
        );
        Ok(PredictionResult {
            label,
            probabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReadingError;
    use crate::testing::dummies::reference_artifact;
    use rand::Rng;

    fn service() -> PredictionService {
        PredictionService::new(Arc::new(reference_artifact()))
    }

    #[test]
    fn default_reading_reproduces_the_golden_result() {
        let result = service().classify(&PollutantReading::default()).unwrap();

        assert_eq!(result.label.as_str(), "Good");
        let expected = [("Good", 0.75), ("Moderate", 0.25), ("Unhealthy", 0.0)];
        for (label, want) in expected {
            let got = result.probabilities.probability_of(&label.into()).unwrap();
            assert!(
                (got - want).abs() < 1e-9,
                "P({label}) = {got}, expected {want}"
            );
        }
    }

    #[test]
    fn classifying_twice_is_bit_identical() {
        let service = service();
        let reading = PollutantReading::default();
        assert_eq!(
            service.classify(&reading).unwrap(),
            service.classify(&reading).unwrap()
        );
    }

    #[test]
    fn domain_extremes_classify_without_error() {
        let service = service();
        for level in [0.0, 150.0] {
            let reading = PollutantReading::new(level, level, level, level, level);
            let result = service.classify(&reading).unwrap();
            assert!((result.probabilities.total() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn out_of_domain_readings_are_rejected() {
        let err = service()
            .classify(&PollutantReading::new(-3.0, 0.0, 0.0, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            ClassificationError::InvalidReading(ReadingError::Negative { .. })
        ));
    }

    #[test]
    fn invariants_hold_across_the_input_domain() {
        let service = service();
        let mut rng = rand::rng();
        for _ in 0..200 {
            let reading = PollutantReading::new(
                rng.random_range(0.0..=150.0),
                rng.random_range(0.0..=150.0),
                rng.random_range(0.0..=150.0),
                rng.random_range(0.0..=150.0),
                rng.random_range(0.0..=150.0),
            );
            let result = service.classify(&reading).unwrap();

            // The label is drawn from the distribution's key set and is its argmax.
            assert!(result.probabilities.probability_of(&result.label).is_some());
            assert_eq!(Some(&result.label), result.probabilities.argmax().map(|(l, _)| l));
            assert!((result.probabilities.total() - 1.0).abs() < 1e-6);
        }
    }
}
