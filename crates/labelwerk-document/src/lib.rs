// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// labelwerk-document — Symbol generation and sheet layout for Labelwerk.
//
// Provides symbology detection, CODE128/EAN/UPC encoders with PNG rendering,
// QR rendering to SVG, async single and bulk generation, label-sheet layout
// with HTML print output, and file downloads.

pub mod detect;
pub mod download;
pub mod generator;
pub mod layout;
pub mod render;
pub mod session;
pub mod symbology;

// Re-export the primary entry points so callers can use `labelwerk_document::Generator` etc.
pub use detect::detect;
pub use download::{Download, save_downloads};
pub use generator::{BulkOutcome, Generator};
pub use layout::{LabelCell, PrintDocument, layout};
pub use render::render_artifact;
pub use session::{Session, split_bulk_input};
