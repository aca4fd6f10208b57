// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use labelwerk_core::error::Result;
use labelwerk_core::{CustomSheet, SheetPreset, SheetTemplate};

#[derive(Parser, Debug)]
#[command(name = "labelwerk", version)]
#[command(about = "Generate barcodes and QR codes and lay them out on label sheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the one in the data directory
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the symbology that would be used for TEXT
    Detect { text: String },

    /// Generate a single barcode or QR code
    #[command(alias = "g")]
    Generate {
        /// Text to encode (encoded as typed, surrounding spaces included)
        text: String,

        /// Force a symbology instead of detecting one (CODE128, EAN13, UPC, EAN8, QR)
        #[arg(short, long)]
        symbology: Option<String>,

        #[command(flatten)]
        sheet: SheetArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate one code per comma-separated entry
    #[command(alias = "b")]
    Bulk {
        /// Codes separated by commas, e.g. "4221735075026,ABC123,https://example.com"
        codes: String,

        /// Keep the codes that succeed and report the ones that fail
        #[arg(long)]
        settled: bool,

        #[command(flatten)]
        sheet: SheetArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the label-sheet presets
    Templates,

    /// Show the configuration
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

/// Label-sheet selection: a preset, or the four custom fields.
#[derive(Args, Debug, Default, Clone)]
pub struct SheetArgs {
    /// Sheet preset (a4-65, a4-21, a4-10, a4-full)
    #[arg(long, value_name = "PRESET")]
    pub sheet: Option<String>,

    /// Custom label width, e.g. 2in or 50mm
    #[arg(long, value_name = "LENGTH")]
    pub custom_width: Option<String>,

    /// Custom label height
    #[arg(long, value_name = "LENGTH")]
    pub custom_height: Option<String>,

    /// Custom column count (anything but a positive integer means 1)
    #[arg(long, value_name = "N")]
    pub columns: Option<String>,

    /// Custom row count (anything but a positive integer means 1)
    #[arg(long, value_name = "N")]
    pub rows: Option<String>,
}

impl SheetArgs {
    fn is_custom(&self) -> bool {
        self.custom_width.is_some()
            || self.custom_height.is_some()
            || self.columns.is_some()
            || self.rows.is_some()
    }

    /// Resolve the selection. Any custom field selects a custom sheet, which
    /// then needs a valid width and height.
    pub fn template(&self, default: SheetPreset) -> Result<SheetTemplate> {
        if self.is_custom() {
            let field = |value: &Option<String>| value.clone().unwrap_or_default();
            let custom = CustomSheet::from_fields(
                &field(&self.custom_width),
                &field(&self.custom_height),
                &field(&self.columns),
                &field(&self.rows),
            )?;
            return Ok(SheetTemplate::Custom(custom));
        }
        match &self.sheet {
            Some(name) => Ok(SheetTemplate::Preset(name.parse()?)),
            None => Ok(SheetTemplate::Preset(default)),
        }
    }
}

/// Where results go.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Directory for downloaded images (overrides the config)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Do not save the images
    #[arg(long)]
    pub no_download: bool,

    /// Write the printable HTML label sheet to FILE
    #[arg(long, value_name = "FILE")]
    pub print: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelwerk_core::LabelwerkError;

    #[test]
    fn parses_generate_with_override() {
        let cli = Cli::try_parse_from([
            "labelwerk", "generate", "ABC123", "--symbology", "qr", "--sheet", "a4-10",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { text, symbology, sheet, .. } => {
                assert_eq!(text, "ABC123");
                assert_eq!(symbology.as_deref(), Some("qr"));
                assert_eq!(
                    sheet.template(SheetPreset::A4Labels65).unwrap(),
                    SheetTemplate::Preset(SheetPreset::A4Labels10)
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_bulk_with_custom_sheet() {
        let cli = Cli::try_parse_from([
            "labelwerk", "-v", "bulk", "A1,B2", "--settled", "--custom-width", "50mm",
            "--custom-height", "30mm", "--columns", "abc",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Bulk { settled, sheet, .. } = cli.command else {
            panic!("expected bulk");
        };
        assert!(settled);
        let SheetTemplate::Custom(custom) = sheet.template(SheetPreset::A4Labels65).unwrap() else {
            panic!("expected custom sheet");
        };
        assert_eq!(custom.columns, 1);
        assert_eq!(custom.rows, 1);
        assert_eq!(custom.width.to_string(), "50mm");
    }

    #[test]
    fn no_sheet_args_use_default() {
        let args = SheetArgs::default();
        assert_eq!(
            args.template(SheetPreset::A4Labels21).unwrap(),
            SheetTemplate::Preset(SheetPreset::A4Labels21)
        );
    }

    #[test]
    fn custom_sheet_without_width_is_invalid() {
        let args = SheetArgs {
            columns: Some("2".into()),
            ..SheetArgs::default()
        };
        assert!(matches!(
            args.template(SheetPreset::A4Labels65),
            Err(LabelwerkError::InvalidDimension(_))
        ));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let args = SheetArgs {
            sheet: Some("letter".into()),
            ..SheetArgs::default()
        };
        assert!(matches!(
            args.template(SheetPreset::A4Labels65),
            Err(LabelwerkError::UnknownSheet(_))
        ));
    }
}
