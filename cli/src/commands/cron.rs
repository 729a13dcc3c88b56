use anyhow::Result;
use devbelt::cron::preview;
use std::process::ExitCode;

pub fn run(expression: &str, count: usize) -> Result<ExitCode> {
    let preview = preview(expression, count)?;

    println!("{}", preview.description);
    if preview.upcoming.is_empty() {
        println!("No upcoming runs.");
    } else {
        println!("Next {} runs (UTC):", preview.upcoming.len());
        for run in &preview.upcoming {
            println!("  {}", run.format("%Y-%m-%d %H:%M:%S"));
        }
    }

    Ok(ExitCode::from(0))
}
