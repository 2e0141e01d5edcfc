//! Finaut CLI - Command line interface
//!
//! Loads an automaton specification and prints the verdict for each input.
//! Settings come from the command line, optionally layered over a JSON
//! project file.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::logging::LogFormat;
use crate::platform::print_error_with_source;
use finaut_api::{
    run, Evaluation, LogLevel, NativeFileSystem, ParsePolicy, ProjectConfig, RunConfig,
    VirtualFileSystem, DEFAULT_INPUTS, DEFAULT_SPEC_PATH,
};
use finaut_config::CLI_TARGET;

#[derive(Parser, Debug)]
#[command(
    name = "finaut",
    about = "Evaluate input strings against a symbol-class DFA",
    version
)]
struct Cli {
    /// Specification file (default: ./file.txt)
    #[arg(value_name = "SPEC")]
    spec: Option<PathBuf>,

    /// Input strings to evaluate (default: the built-in expression samples)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// JSON project file providing defaults for every option
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Reject malformed transition lines instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Log each step of every run
    #[arg(long)]
    trace: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,
}

/// 合并命令行与项目文件后的设置
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    spec: PathBuf,
    inputs: Vec<String>,
    run: RunConfig,
    log_level: Option<LogLevel>,
}

fn main() {
    let cli = Cli::parse();

    let project = match &cli.config {
        Some(path) => match read_project_config(path) {
            Ok(project) => Some(project),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => None,
    };

    let settings = match resolve_settings(&cli, project.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let log_config = LogConfig::new(settings.log_level, settings.run.trace);
    logging::init(&log_config, cli.log_format);

    tracing::debug!(
        target: CLI_TARGET,
        spec = %settings.spec.display(),
        inputs = settings.inputs.len(),
        policy = settings.run.loader.policy.as_str(),
        "starting"
    );

    let fs = NativeFileSystem::new();
    let evaluations = match run(&fs, &settings.spec, &settings.inputs, &settings.run) {
        Ok(evaluations) => evaluations,
        Err(e) => {
            if cli.json {
                eprintln!("{}", e.to_report().to_json());
            } else {
                let source = spec_source(&fs, &settings.spec);
                print_error_with_source(&e, source.as_deref());
            }
            process::exit(1);
        }
    };

    if cli.json {
        print_json(&evaluations);
    } else {
        for evaluation in &evaluations {
            println!("{}\n", evaluation.summary());
        }
    }
}

/// Re-read the specification through the same file system for error context
fn spec_source(fs: &impl VirtualFileSystem, path: &Path) -> Option<String> {
    fs.read_to_string(path).ok()
}

/// Read and parse the JSON project file
fn read_project_config(path: &Path) -> Result<ProjectConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("cannot parse '{}': {}", path.display(), e))
}

/// Command-line values win over project file values
fn resolve_settings(cli: &Cli, project: Option<&ProjectConfig>) -> Result<Settings, String> {
    let spec = match (&cli.spec, project.and_then(|p| p.spec.as_ref())) {
        (Some(spec), _) => spec.clone(),
        (None, Some(spec)) => resolve_relative(cli.config.as_deref(), spec),
        (None, None) => PathBuf::from(DEFAULT_SPEC_PATH),
    };

    let inputs = if !cli.inputs.is_empty() {
        cli.inputs.clone()
    } else if let Some(inputs) = project.and_then(|p| p.inputs.clone()) {
        inputs
    } else {
        DEFAULT_INPUTS.iter().map(|s| s.to_string()).collect()
    };

    let mut run = project.map(RunConfig::from).unwrap_or_default();
    if cli.strict {
        run.loader.policy = ParsePolicy::Strict;
    }
    run.trace |= cli.trace;

    let log_level = match &cli.log_level {
        Some(level) => Some(
            LogLevel::parse(level).ok_or_else(|| format!("unknown log level '{}'", level))?,
        ),
        None => project.and_then(|p| p.log_level),
    };

    Ok(Settings {
        spec,
        inputs,
        run,
        log_level,
    })
}

/// Resolve a path from the project file relative to that file's directory
fn resolve_relative(config_path: Option<&Path>, path: &Path) -> PathBuf {
    let base_dir = config_path
        .and_then(Path::parent)
        .unwrap_or(Path::new("."));
    base_dir.join(path)
}

fn print_json(evaluations: &[Evaluation]) {
    match serde_json::to_string_pretty(evaluations) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: cannot serialize results: {}", e);
            process::exit(1);
        }
    }
}
