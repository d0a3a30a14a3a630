use crate::core::{PollutantReading, ProbabilityDistribution};
use crate::model::ModelArtifact;
use crate::service::{Severity, guidance_for};
use std::fmt::Write as _;
use strum::{EnumMessage, IntoEnumIterator};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Safe => GREEN,
        Severity::Caution => YELLOW,
        Severity::Hazard => RED,
        Severity::Unknown => DIM,
    }
}

pub fn banner(artifact: &ModelArtifact) -> String {
    let mut out = format!(
        "{BOLD}Air quality prediction · {}{RESET}\n",
        artifact.relation
    );
    let _ = write!(
        out,
        "{DIM}{} trees, {} categories",
        artifact.model.num_trees(),
        artifact.model.classes().len()
    );
    if let Some(trained_at) = artifact.trained_at {
        let _ = write!(out, ", trained {}", trained_at.format("%Y-%m-%d"));
    }
    out.push_str(RESET);
    out
}

/// The pollutant glossary the original surface kept in an expander.
pub fn glossary() -> String {
    let mut out = format!("{BOLD}What do these terms mean?{RESET}\n");
    for pollutant in crate::core::Pollutant::iter() {
        let label = pollutant.get_message().unwrap_or(pollutant.column_name());
        let explanation = pollutant.get_detailed_message().unwrap_or("");
        let _ = writeln!(out, "  {label}  {DIM}{explanation}{RESET}");
    }
    out
}

pub fn headline(headline: &str, severity: Severity) -> String {
    let color = severity_color(severity);
    format!("{color}{BOLD}=== {headline} ==={RESET}")
}

/// One bar per category in artifact class order, colored by the severity
/// of that category's advisory.
pub fn confidence_chart(distribution: &ProbabilityDistribution, width: usize) -> String {
    let label_width = distribution
        .labels()
        .map(|l| l.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = format!("{BOLD}How confident is the model?{RESET}\n");
    for (label, p) in distribution.iter() {
        let color = severity_color(guidance_for(label).severity);
        let filled = (p.clamp(0.0, 1.0) * width as f64).round() as usize;
        let _ = writeln!(
            out,
            "  {:<label_width$}  {color}{}{RESET}{} {:>5.1}%",
            label,
            "█".repeat(filled),
            " ".repeat(width - filled),
            p * 100.0,
        );
    }
    out
}

pub fn reading_table(reading: &PollutantReading) -> String {
    let mut out = format!("{BOLD}Your measurements{RESET}\n");
    for pollutant in crate::core::Pollutant::iter() {
        let _ = writeln!(
            out,
            "  {:<4} {:>6.0}",
            pollutant.column_name(),
            reading.value(pollutant)
        );
    }
    out
}

pub fn footer() -> String {
    format!(
        "{DIM}Analysed {} · Random Forest · Pollutant Standards Index Jogja 2020{RESET}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}
