use anyhow::{Context, Result};
use devbelt::jwt::decode_token;
use devbelt::timestamp::{DISPLAY_FORMAT, from_unix, now_unix};
use serde_json::Value;
use std::process::ExitCode;

pub fn run(token: Option<&str>) -> Result<ExitCode> {
    let input = match token {
        Some(token) => token.to_string(),
        None => super::read_input("-")?,
    };

    let decoded = decode_token(&input)?;

    println!("Header:");
    println!("{}", pretty(&decoded.header)?);
    println!();
    println!("Claims:");
    println!("{}", pretty(&decoded.claims)?);

    print_time_claims(&decoded.claims);

    println!();
    if decoded.has_signature() {
        println!("Signature: present (not verified)");
    } else {
        println!("Signature: none");
    }

    Ok(ExitCode::from(0))
}

fn pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to render segment as JSON")
}

/// Translate the registered time claims into readable datetimes.
fn print_time_claims(claims: &Value) {
    let labels = [
        ("iat", "Issued at"),
        ("nbf", "Not before"),
        ("exp", "Expires"),
    ];
    let mut printed_blank = false;
    for (claim, label) in labels {
        let Some(seconds) = claims.get(claim).and_then(Value::as_i64) else {
            continue;
        };
        let Ok(utc) = from_unix(seconds) else {
            continue;
        };
        if !printed_blank {
            println!();
            printed_blank = true;
        }
        let suffix = if claim == "exp" && seconds <= now_unix() {
            " (expired)"
        } else {
            ""
        };
        println!("{}: {} UTC{}", label, utc.format(DISPLAY_FORMAT), suffix);
    }
}
