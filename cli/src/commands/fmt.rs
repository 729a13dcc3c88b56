use crate::FmtLang;
use anyhow::{Context, Result, bail};
use devbelt::format::{format_json, format_sql, minify_json, minify_sql};
use std::process::ExitCode;

pub fn run(
    path: &str,
    lang: Option<FmtLang>,
    minify: bool,
    indent: Option<u8>,
    uppercase: bool,
    write: bool,
) -> Result<ExitCode> {
    if write && path == "-" {
        bail!("Cannot use --write with stdin input");
    }

    let lang = match lang {
        Some(lang) => lang,
        None => detect_lang(path)?,
    };
    let config = super::diff::build_config(indent, uppercase)?;

    let input = super::read_input(path)?;
    let output = match (lang, minify) {
        (FmtLang::Json, false) => format_json(&input, &config)
            .with_context(|| format!("Failed to format {}", path))?,
        (FmtLang::Json, true) => minify_json(&input)
            .with_context(|| format!("Failed to minify {}", path))?,
        (FmtLang::Sql, false) => format_sql(&input, &config),
        (FmtLang::Sql, true) => minify_sql(&input),
    };

    if write {
        std::fs::write(path, format!("{}\n", output))
            .with_context(|| format!("Failed to write file: {}", path))?;
    } else {
        println!("{}", output);
    }

    Ok(ExitCode::from(0))
}

fn detect_lang(path: &str) -> Result<FmtLang> {
    let extension = std::path::Path::new(path)
        .extension()
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FmtLang::Json),
        Some("sql") => Ok(FmtLang::Sql),
        _ => bail!(
            "Cannot infer the language of {}; pass --lang json or --lang sql",
            path
        ),
    }
}
