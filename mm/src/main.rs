use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};

use mailmerge::cli::Cli;
use mailmerge::config::Config;

fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.map(|s| s.to_uppercase()) {
        None => LevelFilter::Info,
        Some(s) => match s.as_str() {
            "TRACE" => LevelFilter::Trace,
            "DEBUG" => LevelFilter::Debug,
            "INFO" => LevelFilter::Info,
            "WARN" | "WARNING" => LevelFilter::Warn,
            "ERROR" => LevelFilter::Error,
            "OFF" => LevelFilter::Off,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                LevelFilter::Info
            }
        },
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // CLI --log-level > config file > RUST_LOG > INFO
    let mut builder = env_logger::Builder::from_default_env();
    let explicit = cli_log_level.or(config_log_level);
    if explicit.is_some() || std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(parse_level(explicit));
    }
    builder.try_init().context("Failed to initialize logger")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_overrides(cli.csv, cli.template, cli.output);

    info!(
        "mailmerge starting: csv={} template={} output={}",
        config.csv_path.display(),
        config.template_path.display(),
        config.output_dir.display()
    );

    let report = mailmerge::run(&config).context("Merge run failed")?;

    let mark = if report.is_clean() { "✓".green() } else { "!".yellow() };
    println!(
        "{} Processing complete. {} file(s) generated in {}",
        mark,
        report.written.len().to_string().cyan(),
        config.output_dir.display()
    );
    if !report.skipped.is_empty() {
        let lines: Vec<String> = report.skipped.iter().map(|s| s.line.to_string()).collect();
        println!("  {} skipped line(s): {}", report.skipped.len().to_string().yellow(), lines.join(", "));
    }
    if !report.missing.is_empty() {
        println!("  {} missing placeholder warning(s)", report.missing.len().to_string().yellow());
    }
    if !report.write_failures.is_empty() {
        println!("  {} write failure(s)", report.write_failures.len().to_string().red());
    }
    if !report.reset.failed.is_empty() {
        println!("  {} file(s) could not be deleted", report.reset.failed.len().to_string().red());
    }

    Ok(())
}
