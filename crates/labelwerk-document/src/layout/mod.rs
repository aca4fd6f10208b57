// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout engine — arrange artifacts on a label-sheet grid and render the
// result as a printable HTML document.

pub mod grid;
pub mod html;

pub use grid::{LabelCell, PrintDocument, layout};
