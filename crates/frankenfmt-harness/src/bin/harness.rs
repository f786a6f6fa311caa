//! CLI entrypoint for the frankenfmt conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use frankenfmt_core::{DataModel, FormatFamily, data_model_from_env};
use frankenfmt_harness::structured_log::{
    LogEmitter, LogLevel, now_utc, validate_log_file,
};
use frankenfmt_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

/// Conformance tooling for frankenfmt.
#[derive(Debug, Parser)]
#[command(name = "frankenfmt-harness")]
#[command(about = "Conformance testing harness for frankenfmt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse one format string and print the result as JSON.
    Parse {
        /// `printf` or `scanf` (any member function name works, e.g. `sscanf`).
        #[arg(long)]
        family: String,
        /// The format string.
        #[arg(long)]
        format: String,
        /// Data model (`host`, `lp64`, `ilp32`, `llp64`); overrides FRANKENFMT_DATA_MODEL.
        #[arg(long)]
        data_model: Option<String>,
        /// Output path (if omitted, prints to stdout).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Verify the parser against fixture files.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; JSON is written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Default data model for cases that do not pin one.
        #[arg(long)]
        data_model: Option<String>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Validate a structured JSONL log against the schema.
    ValidateLog {
        /// JSONL log path.
        #[arg(long)]
        log: PathBuf,
    },
}

fn resolve_data_model(flag: Option<&str>) -> DataModel {
    flag.map_or_else(data_model_from_env, DataModel::from_str_loose)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            family,
            format,
            data_model,
            output,
        } => {
            let family = FormatFamily::from_name(&family)
                .ok_or_else(|| format!("Unknown family '{family}', expected printf|scanf"))?;
            let model = resolve_data_model(data_model.as_deref());

            let (body, failed) = match family.parse(&format, model.sizes()) {
                Ok((directives, arguments)) => {
                    let doc = serde_json::json!({
                        "family": family,
                        "format": format,
                        "data_model": model,
                        "directives": directives,
                        "arguments": arguments,
                        "signature": arguments.signature(),
                    });
                    (serde_json::to_string_pretty(&doc)?, false)
                }
                Err(err) => {
                    let doc = serde_json::json!({
                        "family": family,
                        "format": format,
                        "data_model": model,
                        "error": err.code(),
                        "message": err.to_string(),
                    });
                    (serde_json::to_string_pretty(&doc)?, true)
                }
            };

            if let Some(path) = output {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, format!("{body}\n"))?;
                eprintln!("Wrote parse result to {}", path.display());
            } else {
                println!("{body}");
            }

            if failed {
                return Err("Format string did not parse".into());
            }
        }
        Command::Verify {
            fixture,
            report,
            log,
            data_model,
            timestamp,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let fixture_sets = FixtureSet::load_path(&fixture)?;
            let model = resolve_data_model(data_model.as_deref());
            let runner = TestRunner::new("fixture-verify", model);

            let mut results = Vec::new();
            if let Some(log_path) = &log {
                let run_id = format!("run-{}", std::process::id());
                let mut emitter = LogEmitter::to_file(log_path, &run_id, &runner.campaign)?;
                emitter.emit(LogLevel::Info, "verify_start")?;
                for set in &fixture_sets {
                    results.extend(runner.run_logged(set, &mut emitter)?);
                }
                emitter.emit(LogLevel::Info, "verify_end")?;
                emitter.flush()?;
                eprintln!("Wrote structured log to {}", log_path.display());
            } else {
                for set in &fixture_sets {
                    results.extend(runner.run(set));
                }
            }

            // Stable ordering so reports diff cleanly between runs.
            results.sort_by(|a, b| {
                a.family
                    .cmp(&b.family)
                    .then_with(|| a.case_name.cmp(&b.case_name))
                    .then_with(|| a.data_model.cmp(&b.data_model))
            });

            let report_doc = ConformanceReport {
                title: String::from("frankenfmt Conformance Report"),
                data_model: model.as_str().to_string(),
                timestamp: timestamp.unwrap_or_else(now_utc),
                summary: VerificationSummary::from_results(results),
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!("FAIL {} ({:?})", failure.case_name, failure.format);
                if let Some(diff) = &failure.diff {
                    eprintln!("{diff}");
                }
            }

            if let Some(report_path) = report {
                if let Some(parent) = report_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                std::fs::write(report_path.with_extension("json"), report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!(
                "Validated {} line(s) in {}: {} error(s)",
                lines,
                log.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err(format!("Log validation failed: {} error(s)", errors.len()).into());
            }
        }
    }

    Ok(())
}
