//! CLI entrypoint for the Atto self-test and demonstration suites.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use atto_core::{Config, TestContext, atto_report};
use atto_harness::structured_log::{LogEmitter, now_utc};
use atto_harness::{RunReport, TestRunner, suites};

/// Runs the built-in Atto suites.
#[derive(Debug, Parser)]
#[command(name = "atto")]
#[command(about = "Microscopic unit-test assertions: self-test and example runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the self-test; succeeds when exactly the expected failures occur.
    Selftest(RunArgs),
    /// Run the demonstration suite; exits 1 because it fails on purpose.
    Example(RunArgs),
    /// List built-in suites and their cases.
    List {
        /// Only list this suite.
        #[arg(long)]
        suite: Option<String>,
    },
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Worker threads. Serial suites always run on one.
    #[arg(long, default_value_t = 1)]
    jobs: usize,
    /// Output report path (markdown).
    #[arg(long)]
    report: Option<PathBuf>,
    /// Output report path (JSON).
    #[arg(long)]
    json: Option<PathBuf>,
    /// Structured JSONL log path.
    #[arg(long)]
    log: Option<PathBuf>,
    /// Optional fixed timestamp string for deterministic report generation.
    #[arg(long)]
    timestamp: Option<String>,
    /// Reject invalid ATTO_* environment values instead of using defaults.
    #[arg(long)]
    strict_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Selftest(args) => run(suites::selftest::NAME, &args)?,
        Command::Example(args) => run(suites::example::NAME, &args)?,
        Command::List { suite } => {
            let listed = match suite {
                Some(name) => vec![suites::suite_by_name(&name)?],
                None => suites::all(),
            };
            for suite in listed {
                let mode = if suite.serial { "serial" } else { "parallel" };
                println!("{} ({} cases, {mode})", suite.name, suite.cases.len());
                for case in &suite.cases {
                    let marker = if case.expected_failure {
                        " [should fail]"
                    } else {
                        ""
                    };
                    println!("  {}{marker}", case.name);
                }
            }
            0
        }
    };

    std::process::exit(code);
}

fn run(suite_name: &str, args: &RunArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = if args.strict_config {
        Config::try_from_lookup(|key| std::env::var(key).ok())?
    } else {
        Config::from_env()
    };
    let suite = suites::suite_by_name(suite_name)?;
    let runner = TestRunner::new(suite_name).with_jobs(args.jobs);
    let timestamp = args.timestamp.clone().unwrap_or_else(now_utc);

    let mut ctx = TestContext::from_config(&config);
    let results = runner.run(&suite, &mut ctx);
    atto_report!(&ctx);
    ctx.sink().flush()?;

    let report = RunReport::new(
        format!("Atto {suite_name} run"),
        &runner.campaign,
        timestamp,
        results,
        ctx.state(),
    );
    let code = if suite_name == suites::selftest::NAME {
        report.summary.self_test_exit_code()
    } else {
        report.summary.exit_code()
    };

    if let Some(path) = &args.log {
        let run_id = format!("jobs-{}", runner.jobs());
        let mut emitter = LogEmitter::to_file(path, suite_name, &run_id)?;
        for case in &report.cases {
            emitter.emit_case(case)?;
        }
        emitter.emit_run(&report.summary, code)?;
        emitter.flush()?;
    }
    if let Some(path) = &args.report {
        std::fs::write(path, report.to_markdown())?;
        eprintln!("Report written to {}", path.display());
    }
    if let Some(path) = &args.json {
        std::fs::write(path, report.to_json())?;
        eprintln!("JSON report written to {}", path.display());
    }

    let summary = &report.summary;
    eprintln!(
        "{suite_name}: {} checked, {} failed, {}/{} cases as expected",
        summary.assertions_checked,
        summary.assertions_failed,
        summary.cases_total - summary.unexpected_outcomes,
        summary.cases_total
    );
    Ok(code)
}
