// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Labelwerk — barcode and QR label generator
//
// Entry point. Initialises logging, loads the configuration, and dispatches
// the subcommand against a fresh session.

mod args;
mod services;

use std::path::{Path, PathBuf};

use clap::Parser;
use labelwerk_core::error::Result;
use labelwerk_core::human_errors::{HumanError, Severity, humanize_error};
use labelwerk_core::{AppConfig, GeneratedArtifact, SheetPreset, Symbology};
use labelwerk_document::{Generator, Session, detect, layout, save_downloads, split_bulk_input};
use tracing::info;

use args::{Cli, Commands, OutputArgs, SheetArgs};
use services::config::{config_path, load_config, persist_config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        tracing::debug!(error = %err, "command failed");
        for line in error_report(&humanize_error(&err)) {
            eprintln!("{line}");
        }
        std::process::exit(1);
    }
}

/// Lines printed to stderr for a failed command, worded by severity.
fn error_report(human: &HumanError) -> Vec<String> {
    let heading = match human.severity {
        Severity::InputRejected => "Input rejected",
        Severity::ActionRequired => "Action required",
        Severity::Internal => "Internal error",
    };
    let mut lines = vec![
        format!("{heading}: {}", human.message),
        format!("  {}", human.suggestion),
    ];
    if human.severity == Severity::Internal {
        lines.push("  Run again with --verbose and include the output when reporting this.".into());
    }
    lines
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let path = config_path(cli.config.as_deref());
    let config = load_config(&path);

    match cli.command {
        Commands::Detect { text } => {
            println!("{}", detect(&text));
            Ok(())
        }
        Commands::Generate {
            text,
            symbology,
            sheet,
            output,
        } => handle_generate(&config, &text, symbology.as_deref(), &sheet, &output).await,
        Commands::Bulk {
            codes,
            settled,
            sheet,
            output,
        } => {
            if settled {
                handle_bulk_settled(&config, &codes, &sheet, &output).await
            } else {
                handle_bulk(&config, &codes, &sheet, &output).await
            }
        }
        Commands::Templates => {
            handle_templates();
            Ok(())
        }
        Commands::Config { init } => handle_config(&path, &config, init),
    }
}

async fn handle_generate(
    config: &AppConfig,
    text: &str,
    symbology: Option<&str>,
    sheet: &SheetArgs,
    output: &OutputArgs,
) -> Result<()> {
    let symbology = symbology.map(str::parse::<Symbology>).transpose()?;
    let mut session = Session::new(sheet.template(config.default_preset)?);
    let generator = Generator::new(config.render);

    let artifact = session.generate_one(&generator, text, symbology).await?;
    println!("{} -> {}", symbology.unwrap_or_else(|| detect(text)), artifact.mime_type());

    write_outputs(config, &session, output)
}

async fn handle_bulk(
    config: &AppConfig,
    codes: &str,
    sheet: &SheetArgs,
    output: &OutputArgs,
) -> Result<()> {
    let mut session = Session::new(sheet.template(config.default_preset)?);
    let generator = Generator::new(config.render);

    let artifacts = session.generate_many(&generator, codes).await?;
    println!("Generated {} codes", artifacts.len());

    write_outputs(config, &session, output)
}

/// Partial-success bulk: report failures per entry, keep the rest.
async fn handle_bulk_settled(
    config: &AppConfig,
    codes: &str,
    sheet: &SheetArgs,
    output: &OutputArgs,
) -> Result<()> {
    let template = sheet.template(config.default_preset)?;
    let codes = split_bulk_input(codes)?;
    let outcomes = Generator::new(config.render).generate_settled(codes.as_slice()).await;

    let mut artifacts: Vec<GeneratedArtifact> = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome.result {
            Ok(artifact) => {
                println!("{:>3}  {:<8} ok    {}", outcome.index + 1, outcome.symbology, outcome.text);
                artifacts.push(artifact);
            }
            Err(err) => {
                let human = humanize_error(&err);
                println!(
                    "{:>3}  {:<8} FAIL  {}: {}",
                    outcome.index + 1,
                    outcome.symbology,
                    outcome.text,
                    human.suggestion
                );
            }
        }
    }
    println!("Generated {} of {} codes", artifacts.len(), codes.len());

    let dir = output_dir(config, output);
    if !output.no_download && !artifacts.is_empty() {
        report_saved(&save_downloads(&dir, &artifacts)?);
    }
    if let Some(file) = &output.print {
        write_print_document(file, &layout(&template.resolve(), &artifacts).to_html())?;
    }
    Ok(())
}

fn handle_templates() {
    for preset in SheetPreset::ALL {
        let spec = preset.spec();
        println!(
            "{:<8} {:<14} {} x {}  ({} x {}, {} per sheet)",
            preset.slug(),
            preset.name(),
            spec.width,
            spec.height,
            spec.columns,
            spec.rows,
            spec.labels_per_sheet()
        );
    }
    println!("custom   Custom         --custom-width --custom-height --columns --rows");
}

fn handle_config(path: &Path, config: &AppConfig, init: bool) -> Result<()> {
    if init {
        persist_config(path, &AppConfig::default())?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }
    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

// -- Output helpers -----------------------------------------------------------

fn output_dir(config: &AppConfig, output: &OutputArgs) -> PathBuf {
    output
        .out_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Save the session's artifacts and, if asked, its print document.
fn write_outputs(config: &AppConfig, session: &Session, output: &OutputArgs) -> Result<()> {
    if !output.no_download {
        let dir = output_dir(config, output);
        report_saved(&save_downloads(&dir, session.artifacts())?);
    }
    if let Some(file) = &output.print {
        write_print_document(file, &session.print_document().to_html())?;
    }
    Ok(())
}

fn write_print_document(file: &Path, html: &str) -> Result<()> {
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file, html)?;
    info!(path = %file.display(), "Print document written");
    println!("Print sheet: {}", file.display());
    Ok(())
}

fn report_saved(paths: &[PathBuf]) {
    for path in paths {
        println!("Saved {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelwerk_core::LabelwerkError;

    fn output_to(dir: &Path, print: Option<PathBuf>) -> OutputArgs {
        OutputArgs {
            out_dir: Some(dir.to_path_buf()),
            no_download: false,
            print,
        }
    }

    #[tokio::test]
    async fn generate_writes_image_and_print_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet_file = tmp.path().join("print").join("sheet.html");
        let output = output_to(tmp.path(), Some(sheet_file.clone()));

        handle_generate(&AppConfig::default(), "ABC123", None, &SheetArgs::default(), &output)
            .await
            .unwrap();

        let saved: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("Barcode_"))
            .collect();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].ends_with(".png"));

        let html = std::fs::read_to_string(&sheet_file).unwrap();
        assert!(html.contains("repeat(3, 1fr)"));
    }

    #[tokio::test]
    async fn bulk_failure_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let output = output_to(tmp.path(), None);
        let result = handle_bulk(
            &AppConfig::default(),
            "ABC123,4221735075027",
            &SheetArgs::default(),
            &output,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn settled_bulk_keeps_successes() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet_file = tmp.path().join("sheet.html");
        let output = output_to(tmp.path(), Some(sheet_file.clone()));
        handle_bulk_settled(
            &AppConfig::default(),
            "ABC123,4221735075027,hello",
            &SheetArgs::default(),
            &output,
        )
        .await
        .unwrap();

        let html = std::fs::read_to_string(&sheet_file).unwrap();
        assert_eq!(html.matches("<img").count(), 2);
    }

    #[test]
    fn error_report_follows_severity() {
        let rejected = error_report(&humanize_error(&LabelwerkError::EmptyInput));
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0], "Input rejected: Please enter a valid input.");

        let action = error_report(&humanize_error(&LabelwerkError::UnknownSheet("letter".into())));
        assert!(action[0].starts_with("Action required: "));
        assert_eq!(action.len(), 2);

        let internal = error_report(&humanize_error(&LabelwerkError::Task("panicked".into())));
        assert!(internal[0].starts_with("Internal error: "));
        assert_eq!(internal.len(), 3);
        assert!(internal[2].contains("--verbose"));
    }

    #[tokio::test]
    async fn bad_symbology_name_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let output = output_to(tmp.path(), None);
        let err = handle_generate(
            &AppConfig::default(),
            "ABC123",
            Some("ITF"),
            &SheetArgs::default(),
            &output,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, LabelwerkError::UnknownSymbology(_)));
    }
}
