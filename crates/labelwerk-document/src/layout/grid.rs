// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grid placement of artifacts onto label cells.

use labelwerk_core::{ArtifactFormat, GeneratedArtifact, Length, SheetSpec};
use serde::Serialize;
use tracing::{debug, instrument};

/// Title of every print document.
pub const DOCUMENT_TITLE: &str = "Imprimir códigos de barras e etiquetas";

/// One artifact placed in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCell {
    /// Position in the artifact list.
    pub index: usize,
    pub row: u32,
    pub column: u32,
    pub width: Length,
    pub height: Length,
    /// Data URI of the artifact shown in this cell.
    pub src: String,
    pub format: ArtifactFormat,
}

/// A laid-out sheet, ready to be rendered with [`PrintDocument::to_html`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintDocument {
    pub title: String,
    pub sheet: SheetSpec,
    /// Grid columns (same as `sheet.columns`).
    pub columns: u32,
    /// Rows implied by the artifact count, `ceil(len / columns)`.
    pub rows: u32,
    pub cells: Vec<LabelCell>,
}

impl PrintDocument {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Physical sheets needed to print every cell.
    pub fn sheets_needed(&self) -> u32 {
        let per_sheet = self.sheet.labels_per_sheet().max(1);
        (self.cells.len() as u32).div_ceil(per_sheet)
    }
}

/// Place `artifacts` row-major on a grid of `sheet.columns` columns.
///
/// Every cell gets the sheet's label size. The row count is implied by the
/// number of artifacts; `sheet.rows` does not cap or paginate the grid.
#[instrument(skip_all, fields(sheet = %sheet.name, count = artifacts.len()))]
pub fn layout(sheet: &SheetSpec, artifacts: &[GeneratedArtifact]) -> PrintDocument {
    let columns = sheet.columns.max(1);

    let cells: Vec<LabelCell> = artifacts
        .iter()
        .enumerate()
        .map(|(index, artifact)| {
            let position = index as u32;
            LabelCell {
                index,
                row: position / columns,
                column: position % columns,
                width: sheet.width,
                height: sheet.height,
                src: artifact.data_uri().to_owned(),
                format: artifact.format(),
            }
        })
        .collect();

    let rows = (cells.len() as u32).div_ceil(columns);
    debug!(columns, rows, "Grid computed");

    PrintDocument {
        title: DOCUMENT_TITLE.to_owned(),
        sheet: sheet.clone(),
        columns,
        rows,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelwerk_core::SheetPreset;

    fn artifacts(n: usize) -> Vec<GeneratedArtifact> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    GeneratedArtifact::from_png_bytes(&[i as u8])
                } else {
                    GeneratedArtifact::from_svg_markup("<svg/>")
                }
            })
            .collect()
    }

    #[test]
    fn four_items_in_three_columns_take_two_rows() {
        let sheet = SheetPreset::A4Labels21.spec();
        let doc = layout(&sheet, &artifacts(4));
        assert_eq!(doc.columns, 3);
        assert_eq!(doc.rows, 2);
        let positions: Vec<_> = doc.cells.iter().map(|c| (c.row, c.column)).collect();
        assert_eq!(positions, [(0, 0), (0, 1), (0, 2), (1, 0)]);
        for cell in &doc.cells {
            assert_eq!(cell.width, sheet.width);
            assert_eq!(cell.height, sheet.height);
        }
    }

    #[test]
    fn cells_keep_artifact_order_and_format() {
        let items = artifacts(3);
        let doc = layout(&SheetPreset::A4Labels10.spec(), &items);
        for (cell, artifact) in doc.cells.iter().zip(&items) {
            assert_eq!(cell.src, artifact.data_uri());
            assert_eq!(cell.format, artifact.format());
        }
        assert_eq!(doc.cells[1].format, ArtifactFormat::Svg);
    }

    #[test]
    fn rows_flow_past_the_sheet_row_count() {
        let sheet = SheetPreset::A4FullPage.spec();
        let doc = layout(&sheet, &artifacts(3));
        assert_eq!(doc.rows, 3);
        assert_eq!(doc.sheets_needed(), 3);
    }

    #[test]
    fn empty_list_is_an_empty_grid() {
        let doc = layout(&SheetPreset::A4Labels65.spec(), &[]);
        assert!(doc.is_empty());
        assert_eq!(doc.rows, 0);
        assert_eq!(doc.sheets_needed(), 0);
        assert_eq!(doc.title, DOCUMENT_TITLE);
    }
}
