use anyhow::Result;
use devbelt::regex::{find_matches, highlight};
use std::process::ExitCode;

pub fn run(
    pattern: &str,
    input: Option<&str>,
    highlight_mode: bool,
    marker_start: &str,
    marker_end: &str,
) -> Result<ExitCode> {
    let haystack = super::read_input(input.unwrap_or("-"))?;
    let matches = find_matches(pattern, &haystack)?;

    if highlight_mode {
        let marked = highlight(pattern, &haystack, marker_start, marker_end)?;
        print!("{}", marked);
        if !marked.ends_with('\n') {
            println!();
        }
    } else if matches.is_empty() {
        println!("No match");
    } else {
        let texts: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
        println!("{}", texts.join(", "));
    }

    // Grep convention: no matches is a finding, not an error.
    if matches.is_empty() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::from(0))
    }
}
