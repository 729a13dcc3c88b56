use anyhow::{Context, Result};
use devbelt::schema::{check, infer_schema_document};
use serde_json::Value;
use std::process::ExitCode;

pub fn run(path: &str, validate: Option<&str>) -> Result<ExitCode> {
    let input = super::read_input(path)?;

    let Some(schema_path) = validate else {
        let document = infer_schema_document(&input)
            .with_context(|| format!("Failed to infer a schema from {}", path))?;
        println!("{}", document);
        return Ok(ExitCode::from(0));
    };

    let schema_text = super::read_input(schema_path)?;
    let schema: Value = serde_json::from_str(&schema_text)
        .with_context(|| format!("Schema file is not valid JSON: {}", schema_path))?;
    let instance: Value = serde_json::from_str(&input)
        .with_context(|| format!("Document is not valid JSON: {}", path))?;

    let issues = check(&schema, &instance)?;
    if issues.is_empty() {
        println!("Valid: {} conforms to {}", path, schema_path);
        Ok(ExitCode::from(0))
    } else {
        println!("{} violation(s):", issues.len());
        for issue in &issues {
            let location = if issue.path.is_empty() { "/" } else { &issue.path };
            println!("  {}: {}", location, issue.message);
        }
        Ok(ExitCode::from(1))
    }
}
