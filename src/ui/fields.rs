use crate::core::PollutantReading;
use anyhow::{Context, Result};
use schemars::schema_for;
use serde_json::Value;

/// One prompt field on the input surface, read back out of the
/// [`PollutantReading`] JSON Schema so defaults and bounds live in exactly
/// one place.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub help: String,
    pub default: u64,
    pub min: u64,
    pub max: u64,
}

/// Field specs for the five pollutant prompts, in canonical column order.
pub fn reading_field_specs() -> Result<Vec<FieldSpec>> {
    let schema = schema_for!(PollutantReading);
    let root = schema.as_object().context("reading schema is not an object")?;
    let props = root
        .get("properties")
        .and_then(|v| v.as_object())
        .context("reading schema has no properties")?;

    let mut out = Vec::with_capacity(props.len());
    for (name, field) in props {
        let field = field
            .as_object()
            .with_context(|| format!("schema for '{name}' is not an object"))?;

        let title = field
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(name)
            .to_string();

        let help = field
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        let number = |key: &str| -> Result<f64> {
            field
                .get(key)
                .and_then(Value::as_f64)
                .with_context(|| format!("schema for '{name}' has no numeric '{key}'"))
        };

        out.push(FieldSpec {
            name: name.clone(),
            title,
            help,
            default: number("default")? as u64,
            min: number("minimum")? as u64,
            max: number("maximum")? as u64,
        });
    }
    Ok(out)
}
