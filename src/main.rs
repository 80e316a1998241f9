//! Purpose: `dataexplorer` CLI entry point and command dispatch.
//! Role: Binary crate root; parses args, runs commands, emits JSON on stdout.
//! Invariants: Commands emit stable stdout JSON envelopes (pretty on a TTY).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: Logs go to stderr only; filter comes from `RUST_LOG` (default `warn`).
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind,
};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

mod command_dispatch;
mod fetch;

use dataexplorer::api::{Error, ErrorKind, to_exit_code};
use dataexplorer::notice::{Notice, notice_json};
use fetch::{DEFAULT_MAX_BYTES, DEFAULT_TIMEOUT_MS, FetchConfig};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse_from(std::env::args_os().collect::<Vec<OsString>>()) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Run `dataexplorer --help` for usage."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    command_dispatch::dispatch_command(cli.command, color_mode).map_err(|err| (err, color_mode))
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_start_matches("error:").trim().to_string())
        .unwrap_or_else(|| "invalid arguments".to_string())
}

#[derive(Parser)]
#[command(
    name = "dataexplorer",
    version,
    about = "Resolve and sniff data sources for an embedded OLAP explorer",
    long_about = None,
    after_help = r#"EXAMPLES
  $ dataexplorer protocol https://example.com/titanic.parquet
  $ dataexplorer sniff ./data.json
  $ curl -s https://example.com/rows.json | dataexplorer sniff -
  $ dataexplorer canonical '{page: 2, source: "s3://bucket/a.csv"}'"#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Classify a locator as http, s3, or unknown",
        after_help = r#"NOTES
  - http:// and https:// match case-insensitively; s3:// must be lowercase
  - Anything else (paths, other schemes, empty input) prints "protocol": null"#
    )]
    Protocol {
        #[arg(help = "Resource locator to classify")]
        locator: String,
    },
    #[command(
        about = "Report whether content looks like and parses as a JSON5 object or array",
        after_help = r#"EXAMPLES
  $ dataexplorer sniff https://example.com/data.json
  $ dataexplorer sniff ./rows.json5
  $ dataexplorer sniff -f notes.txt
  $ echo '{a: 1,}' | dataexplorer sniff

NOTES
  - `looks_like_json` is a bracket check only; `parsable_json5` is a full parse
  - A shape that fails to parse emits a `shape-mismatch` notice on stderr
  - s3:// sources are not fetched; download them first"#
    )]
    Sniff {
        #[arg(help = "Source: http(s) URL, local path, or - for stdin")]
        source: Option<String>,
        #[arg(
            short = 'f',
            long = "file",
            help = "Read content from a local file",
            conflicts_with = "source",
            value_hint = ValueHint::FilePath
        )]
        file: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_MAX_BYTES, help = "Maximum bytes to read from the source")]
        max_bytes: u64,
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS, help = "HTTP request timeout in milliseconds")]
        timeout_ms: u64,
    },
    #[command(
        about = "Print the canonical (descending key order) encoding of a JSON5 object",
        after_help = r#"EXAMPLES
  $ dataexplorer canonical '{"a": 1, "b": 2}'    # {"b":2,"a":1}
  $ dataexplorer canonical -f params.json5"#
    )]
    Canonical {
        #[arg(help = "Inline JSON5 object")]
        data: Option<String>,
        #[arg(
            short = 'f',
            long = "file",
            help = "Input file path (use - for stdin)",
            conflicts_with = "data",
            value_hint = ValueHint::FilePath
        )]
        file: Option<String>,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
    #[command(about = "Print version info")]
    Version,
}

fn emit_json(value: Value) {
    let pretty = io::stdout().is_terminal();
    let json = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

fn emit_version_output() {
    if io::stdout().is_terminal() {
        println!("dataexplorer {}", env!("CARGO_PKG_VERSION"));
    } else {
        emit_json(json!({
            "name": "dataexplorer",
            "version": env!("CARGO_PKG_VERSION"),
        }));
    }
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn notice_time_now() -> Option<String> {
    use time::format_description::well_known::Rfc3339;
    let duration = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
    let ts = time::OffsetDateTime::from_unix_timestamp_nanos(duration.as_nanos() as i128).ok()?;
    ts.format(&Rfc3339).ok()
}

fn emit_notice(notice: &Notice, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        let label = colorize_label("notice:", color_mode.use_color(is_tty), AnsiColor::Yellow);
        eprintln!("{label} {} (source: {})", notice.message, notice.source);
        return;
    }

    let value = notice_json(notice);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"notice\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::NotFound => "not found".to_string(),
        ErrorKind::Permission => "permission denied".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
        ErrorKind::Unsupported => "unsupported source".to_string(),
        ErrorKind::Engine => "engine unavailable".to_string(),
        ErrorKind::Remote => "remote error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));
    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(cause) = error_causes(err).first() {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }
    lines.join("\n")
}
