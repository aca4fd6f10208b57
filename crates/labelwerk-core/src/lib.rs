// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Labelwerk — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod sheet;
pub mod types;

pub use config::{AppConfig, RenderOptions};
pub use error::LabelwerkError;
pub use sheet::{CustomSheet, Length, LengthUnit, SheetPreset, SheetSpec, SheetTemplate};
pub use types::*;
