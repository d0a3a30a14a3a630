use anyhow::Result;

/// Seam between the dashboard loop and the terminal, so the loop can be
/// driven by a scripted stand-in under test.
pub trait PromptDriver {
    /// Asks for one pollutant concentration level within `[min, max]`.
    fn ask_level(&self, title: &str, help: &str, default: u64, min: u64, max: u64) -> Result<u64>;

    /// Asks a yes/no continuation question.
    fn ask_confirm(&self, title: &str, default: bool) -> Result<bool>;
}
