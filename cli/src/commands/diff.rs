use crate::output::{json, text, unified};
use crate::{InputLang, OutputFormat};
use anyhow::{Context, Result, bail};
use devbelt::format::{format_json, format_sql};
use devbelt::{DiffResult, FormatConfig, compute_diff};
use std::io;
use std::process::ExitCode;

pub fn run(
    left_path: &str,
    right_path: &str,
    lang: InputLang,
    format: OutputFormat,
    indent: Option<u8>,
    quiet: bool,
) -> Result<ExitCode> {
    if left_path == "-" && right_path == "-" {
        bail!("Only one side can read from stdin");
    }

    if quiet && format != OutputFormat::Text {
        bail!("Cannot use --quiet with --format=json or --format=unified");
    }

    let config = build_config(indent, false)?;
    let lang = resolve_lang(lang, left_path, right_path);

    let left_raw = super::read_input(left_path)?;
    let right_raw = super::read_input(right_path)?;

    let left = normalize(&left_raw, lang, &config)
        .with_context(|| format!("Failed to normalize left input: {}", left_path))?;
    let right = normalize(&right_raw, lang, &config)
        .with_context(|| format!("Failed to normalize right input: {}", right_path))?;

    tracing::debug!(lang = lang_name(lang), "comparing normalized inputs");
    let result = compute_diff(&left, &right);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            text::write_text_diff(&mut handle, &result, left_path, right_path, quiet)?;
        }
        OutputFormat::Json => {
            json::write_json_diff(&mut handle, &result)?;
        }
        OutputFormat::Unified => {
            unified::write_unified_diff(&mut handle, &left, &right, left_path, right_path)?;
        }
    }

    Ok(exit_code_from_result(&result))
}

pub(crate) fn build_config(indent: Option<u8>, uppercase: bool) -> Result<FormatConfig> {
    let mut config = FormatConfig::default();
    if let Some(width) = indent {
        config.indent_width = width;
    }
    config.uppercase_keywords = uppercase;
    config.validate()?;
    Ok(config)
}

fn resolve_lang(lang: InputLang, left_path: &str, right_path: &str) -> InputLang {
    if lang != InputLang::Auto {
        return lang;
    }
    if has_extension(left_path, "json") && has_extension(right_path, "json") {
        InputLang::Json
    } else if has_extension(left_path, "sql") && has_extension(right_path, "sql") {
        InputLang::Sql
    } else {
        InputLang::Text
    }
}

fn has_extension(path: &str, extension: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

fn normalize(input: &str, lang: InputLang, config: &FormatConfig) -> Result<String> {
    match lang {
        InputLang::Json => Ok(format_json(input, config)?),
        InputLang::Sql => Ok(format_sql(input, config)),
        InputLang::Text => Ok(input.to_string()),
        InputLang::Auto => unreachable!("auto resolves to a concrete language"),
    }
}

fn lang_name(lang: InputLang) -> &'static str {
    match lang {
        InputLang::Auto => "auto",
        InputLang::Json => "json",
        InputLang::Sql => "sql",
        InputLang::Text => "text",
    }
}

fn exit_code_from_result(result: &DiffResult) -> ExitCode {
    if result.has_changes() {
        ExitCode::from(1)
    } else {
        ExitCode::from(0)
    }
}
