use anyhow::{Context, Result, bail};
use devbelt::timestamp::{DISPLAY_FORMAT, from_unix, in_timezone, now_unix, to_unix};
use std::process::ExitCode;

pub fn run(value: Option<&str>, timezone: &str, now: bool) -> Result<ExitCode> {
    if now {
        if value.is_some() {
            bail!("Cannot combine --now with a value");
        }
        println!("{}", now_unix());
        return Ok(ExitCode::from(0));
    }

    let Some(value) = value else {
        bail!("Pass epoch seconds, a datetime, or --now");
    };

    if is_epoch(value) {
        let seconds: i64 = value
            .parse()
            .with_context(|| format!("Not a valid epoch value: {}", value))?;
        let utc = from_unix(seconds)?;
        println!("UTC: {}", utc.format(DISPLAY_FORMAT));
        if !timezone.eq_ignore_ascii_case("UTC") {
            let zoned = in_timezone(seconds, timezone)?;
            println!("{}: {}", timezone, zoned.format(DISPLAY_FORMAT));
        }
    } else {
        let seconds = to_unix(value)?;
        println!("{}", seconds);
    }

    Ok(ExitCode::from(0))
}

fn is_epoch(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
