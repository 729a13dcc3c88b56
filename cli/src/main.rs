mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "devbelt")]
#[command(about = "Everyday developer chores: diff, format, timestamps, cron, regex, schemas, JWTs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compare two files line by line")]
    Diff {
        #[arg(help = "Left-hand file, or - for stdin")]
        left: String,
        #[arg(help = "Right-hand file, or - for stdin")]
        right: String,
        #[arg(long, short, value_enum, default_value = "auto", help = "Normalize inputs as this language before comparing")]
        lang: InputLang,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, value_name = "SPACES", help = "Indent width used when normalizing")]
        indent: Option<u8>,
        #[arg(long, short, help = "Quiet mode: only show summary")]
        quiet: bool,
    },
    #[command(about = "Pretty-print or minify a JSON or SQL file")]
    Fmt {
        #[arg(help = "File to format, or - for stdin")]
        path: String,
        #[arg(long, short, value_enum, help = "Language (inferred from the extension when omitted)")]
        lang: Option<FmtLang>,
        #[arg(long, help = "Minify instead of pretty-printing")]
        minify: bool,
        #[arg(long, value_name = "SPACES", help = "Indent width")]
        indent: Option<u8>,
        #[arg(long, help = "Uppercase SQL keywords")]
        uppercase: bool,
        #[arg(long, short, help = "Rewrite the file in place instead of printing")]
        write: bool,
    },
    #[command(about = "Convert between Unix timestamps and datetimes")]
    Timestamp {
        #[arg(help = "Epoch seconds or a datetime (YYYY/MM/DD HH:MM:SS or RFC 3339)")]
        value: Option<String>,
        #[arg(long, short, default_value = "UTC", help = "Also render in this IANA timezone")]
        timezone: String,
        #[arg(long, help = "Print the current Unix timestamp")]
        now: bool,
    },
    #[command(about = "Describe a cron expression and preview its next runs")]
    Cron {
        #[arg(help = "Cron expression (5, 6, or 7 fields)")]
        expression: String,
        #[arg(long, short, default_value_t = 5, help = "How many upcoming runs to show")]
        count: usize,
    },
    #[command(about = "Test a regular expression against input text")]
    Regex {
        #[arg(help = "Regular expression pattern")]
        pattern: String,
        #[arg(help = "File to search, or - for stdin (default)")]
        input: Option<String>,
        #[arg(long, help = "Print the input with matches wrapped in markers")]
        highlight: bool,
        #[arg(long, default_value = "<mark>", value_name = "TEXT", help = "Opening marker for --highlight")]
        marker_start: String,
        #[arg(long, default_value = "</mark>", value_name = "TEXT", help = "Closing marker for --highlight")]
        marker_end: String,
    },
    #[command(about = "Infer a JSON Schema from a document, or validate against one")]
    Schema {
        #[arg(help = "JSON document, or - for stdin")]
        path: String,
        #[arg(long, value_name = "SCHEMA", help = "Validate the document against this schema file")]
        validate: Option<String>,
    },
    #[command(about = "Decode a JWT without verifying its signature")]
    Jwt {
        #[arg(help = "Token (read from stdin when omitted)")]
        token: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Unified,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum InputLang {
    Auto,
    Json,
    Sql,
    Text,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FmtLang {
    Json,
    Sql,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff {
            left,
            right,
            lang,
            format,
            indent,
            quiet,
        } => commands::diff::run(&left, &right, lang, format, indent, quiet),
        Commands::Fmt {
            path,
            lang,
            minify,
            indent,
            uppercase,
            write,
        } => commands::fmt::run(&path, lang, minify, indent, uppercase, write),
        Commands::Timestamp {
            value,
            timezone,
            now,
        } => commands::timestamp::run(value.as_deref(), &timezone, now),
        Commands::Cron { expression, count } => commands::cron::run(&expression, count),
        Commands::Regex {
            pattern,
            input,
            highlight,
            marker_start,
            marker_end,
        } => commands::regex::run(
            &pattern,
            input.as_deref(),
            highlight,
            &marker_start,
            &marker_end,
        ),
        Commands::Schema { path, validate } => commands::schema::run(&path, validate.as_deref()),
        Commands::Jwt { token } => commands::jwt::run(token.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
