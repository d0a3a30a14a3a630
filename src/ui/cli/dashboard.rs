use crate::core::{PollutantReading, PredictionResult};
use crate::service::{PredictionService, Severity, guidance_for};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::render;
use crate::ui::fields::{FieldSpec, reading_field_specs};
use anyhow::{Context, Result, ensure};
use strum::EnumCount as _;

/// The interactive analysis loop: collect a reading, classify it, show the
/// advisory and confidence chart, ask whether to go again.
pub struct Dashboard<'a, D: PromptDriver> {
    driver: &'a D,
    service: PredictionService,
}

impl<'a, D: PromptDriver> Dashboard<'a, D> {
    pub fn new(driver: &'a D, service: PredictionService) -> Self {
        Self { driver, service }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", render::banner(self.service.model()));
        println!();
        println!("{}", render::glossary());

        let specs = reading_field_specs()?;
        loop {
            let reading = self.collect_reading(&specs)?;
            let result = self
                .service
                .classify(&reading)
                .context("classification failed")?;
            self.present(&reading, &result);

            if !self.driver.ask_confirm("Analyse another reading?", true)? {
                break;
            }
        }
        Ok(())
    }

    fn collect_reading(&self, specs: &[FieldSpec]) -> Result<PollutantReading> {
        ensure!(
            specs.len() == crate::core::Pollutant::COUNT,
            "expected {} input fields, the schema produced {}",
            crate::core::Pollutant::COUNT,
            specs.len()
        );

        let mut row = [0.0; crate::core::Pollutant::COUNT];
        for (slot, spec) in row.iter_mut().zip(specs) {
            *slot = self
                .driver
                .ask_level(&spec.title, &spec.help, spec.default, spec.min, spec.max)?
                as f64;
        }
        Ok(PollutantReading::from_row(row))
    }

    fn present(&self, reading: &PollutantReading, result: &PredictionResult) {
        let guidance = guidance_for(&result.label);
        if guidance.severity == Severity::Unknown {
            log::warn!(
                "model produced category '{}', which has no advisory entry",
                result.label
            );
        }

        println!();
        println!("{}", render::headline(result.label.as_str(), guidance.severity));
        println!("{}", guidance.advice);
        println!();
        println!("{}", render::confidence_chart(&result.probabilities, 40));
        println!("{}", render::reading_table(reading));
        println!("{}", render::footer());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::reference_artifact;
    use crate::testing::stubs::ScriptedDriver;
    use std::sync::Arc;

    fn service() -> PredictionService {
        PredictionService::new(Arc::new(reference_artifact()))
    }

    #[test]
    fn collect_reading_maps_prompt_answers_in_canonical_order() {
        let driver = ScriptedDriver::new(vec![1, 2, 3, 4, 5], vec![]);
        let dashboard = Dashboard::new(&driver, service());
        let specs = reading_field_specs().unwrap();

        let reading = dashboard.collect_reading(&specs).unwrap();
        assert_eq!(reading.feature_row(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn a_full_session_runs_to_completion() {
        // Two analyses: defaults-ish answers, continue once, then stop.
        let driver = ScriptedDriver::new(
            vec![20, 15, 10, 30, 5, 150, 150, 150, 150, 150],
            vec![true, false],
        );
        let dashboard = Dashboard::new(&driver, service());
        dashboard.run().unwrap();
        assert!(driver.exhausted());
    }
}
