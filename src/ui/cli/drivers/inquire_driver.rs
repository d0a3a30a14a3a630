use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, validator::Validation};

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_level(&self, title: &str, help: &str, default: u64, min: u64, max: u64) -> Result<u64> {
        let level = CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &u64| {
                if *x >= min && *x <= max {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        format!("Must be between {min} and {max}").into(),
                    ))
                }
            })
            .prompt()?;
        Ok(level)
    }

    fn ask_confirm(&self, title: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title).with_default(default).prompt()?)
    }
}
