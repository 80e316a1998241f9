//! Purpose: Hold top-level CLI command dispatch for `dataexplorer`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Command output envelopes and exit code semantics stay stable.
//! Invariants: Classification, sniffing, and encoding come from the library API only.

use super::*;
use dataexplorer::api::{
    FetchStrategy, SourcePlan, canonicalize_value, parse_json5, resolve_protocol, sniff,
};
use dataexplorer::notice::shape_mismatch_notice;

pub(super) fn dispatch_command(command: Command, color_mode: ColorMode) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "dataexplorer", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Version => {
            emit_version_output();
            Ok(RunOutcome::ok())
        }
        Command::Protocol { locator } => {
            let protocol = resolve_protocol(&locator);
            emit_json(json!({
                "locator": locator,
                "protocol": protocol,
            }));
            Ok(RunOutcome::ok())
        }
        Command::Sniff {
            source,
            file,
            max_bytes,
            timeout_ms,
        } => {
            let config = fetch_config(max_bytes, timeout_ms);
            let plan = match (source, file) {
                (_, Some(path)) => local_plan(path.to_string_lossy().to_string()),
                (Some(source), None) => SourcePlan::for_locator(source),
                (None, None) => local_plan("-".to_string()),
            };
            let content = fetch::read_source(&plan, config)?;
            let report = sniff(&content.text);
            if let Some(notice) = shape_mismatch_notice(
                &report,
                "sniff",
                &plan.locator,
                notice_time_now().unwrap_or_default(),
            ) {
                emit_notice(&notice, color_mode);
            }
            emit_json(json!({
                "source": plan.locator,
                "protocol": plan.protocol,
                "bytes": content.bytes,
                "lossy": content.lossy,
                "looks_like_json": report.looks_like_json,
                "parsable_json5": report.parsable_json5,
                "view": report.view(),
            }));
            Ok(RunOutcome::ok())
        }
        Command::Canonical { data, file } => {
            let text = match (data, file) {
                (Some(data), _) => data,
                (None, Some(path)) => {
                    fetch::read_source(&local_plan(path), FetchConfig::default())?.text
                }
                (None, None) => fetch::read_stdin(FetchConfig::default())?.text,
            };
            let value = parse_json5(&text)?;
            let canonical = canonicalize_value(&value)?;
            println!("{canonical}");
            Ok(RunOutcome::ok())
        }
    }
}

fn fetch_config(max_bytes: u64, timeout_ms: u64) -> FetchConfig {
    FetchConfig {
        max_bytes,
        timeout: Duration::from_millis(timeout_ms),
    }
}

// Explicit files and `-` bypass protocol resolution.
fn local_plan(locator: String) -> SourcePlan {
    SourcePlan {
        locator,
        protocol: None,
        strategy: FetchStrategy::Local,
    }
}
