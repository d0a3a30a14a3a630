use anyhow::Result;
use std::path::PathBuf;
use udara::model::loader;
use udara::service::PredictionService;
use udara::ui::cli::{Dashboard, InquireDriver};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(loader::DEFAULT_MODEL_PATH));

    // A load failure is fatal to the session: report and stop, never retry.
    let model = loader::load_cached(&path)?;

    let driver = InquireDriver;
    Dashboard::new(&driver, PredictionService::new(model)).run()
}
