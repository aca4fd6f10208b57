// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTML rendering of a laid-out sheet for the browser print dialog.

use tracing::info;

use super::grid::PrintDocument;

/// Alt text of every label image.
pub const LABEL_ALT: &str = "Código de Barras";

impl PrintDocument {
    /// Render a complete, self-contained HTML document.
    ///
    /// Cells are fixed to the sheet's label size and images scale down to fit
    /// them without cropping. Print rules remove the page margin and pad the
    /// body by 0.5cm.
    pub fn to_html(&self) -> String {
        let payload: usize = self.cells.iter().map(|cell| cell.src.len() + 96).sum();
        let mut html = String::with_capacity(1024 + payload);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html += &format!("<title>{}</title>\n", escape_text(&self.title));
        html.push_str("<style>\n");
        html.push_str("body { margin: 0; padding: 0; }\n");
        html += &format!(
            ".label-container {{ display: grid; grid-template-columns: repeat({}, 1fr); grid-gap: 0; }}\n",
            self.columns
        );
        html += &format!(
            ".label {{ width: {}; height: {}; display: flex; justify-content: center; \
             align-items: center; page-break-inside: avoid; }}\n",
            self.sheet.width, self.sheet.height
        );
        html.push_str(".label img { max-width: 100%; max-height: 100%; }\n");
        html.push_str("@media print {\n  @page { margin: 0; }\n  body { margin: 0.5cm; }\n}\n");
        html.push_str("</style>\n</head>\n<body>\n<div class=\"label-container\">\n");

        for cell in &self.cells {
            html += &format!(
                "<div class=\"label\"><img src=\"{}\" alt=\"{LABEL_ALT}\"></div>\n",
                escape_attr(&cell.src)
            );
        }

        html.push_str("</div>\n</body>\n</html>\n");

        info!(cells = self.cells.len(), bytes = html.len(), "Print document rendered");
        html
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use labelwerk_core::{CustomSheet, GeneratedArtifact, SheetPreset, SheetTemplate};

    #[test]
    fn html_carries_grid_and_print_rules() {
        let artifacts = vec![
            GeneratedArtifact::from_png_bytes(b"png"),
            GeneratedArtifact::from_svg_markup("<svg/>"),
        ];
        let html = layout(&SheetPreset::A4Labels65.spec(), &artifacts).to_html();

        assert!(html.contains("<title>Imprimir códigos de barras e etiquetas</title>"));
        assert!(html.contains("grid-template-columns: repeat(3, 1fr)"));
        assert!(html.contains("width: 1.5in; height: 0.83in;"));
        assert!(html.contains("page-break-inside: avoid"));
        assert!(html.contains("max-width: 100%; max-height: 100%"));
        assert!(html.contains("@page { margin: 0; }"));
        assert!(html.contains("body { margin: 0.5cm; }"));
        assert_eq!(html.matches("<div class=\"label\">").count(), 2);
        assert!(html.contains(artifacts[1].data_uri()));
    }

    #[test]
    fn images_appear_in_artifact_order() {
        let artifacts: Vec<_> = (0u8..3)
            .map(|i| GeneratedArtifact::from_png_bytes(&[i, i, i]))
            .collect();
        let html = layout(&SheetPreset::A4Labels21.spec(), &artifacts).to_html();
        let positions: Vec<usize> = artifacts
            .iter()
            .map(|a| html.find(a.data_uri()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn custom_sheet_sizes_flow_into_css() {
        let custom = CustomSheet::from_fields("50mm", "30mm", "0", "x").unwrap();
        let sheet = SheetTemplate::Custom(custom).resolve();
        let html = layout(&sheet, &[GeneratedArtifact::from_png_bytes(b"x")]).to_html();
        assert!(html.contains("repeat(1, 1fr)"));
        assert!(html.contains("width: 50mm; height: 30mm;"));
    }

    #[test]
    fn empty_document_is_well_formed() {
        let html = layout(&SheetPreset::A4FullPage.spec(), &[]).to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div class=\"label-container\">\n</div>"));
        assert!(!html.contains("<img"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn one_rule_or_cell_per_line() {
        let artifacts = vec![
            GeneratedArtifact::from_png_bytes(b"a"),
            GeneratedArtifact::from_png_bytes(b"b"),
        ];
        let html = layout(&SheetPreset::A4Labels21.spec(), &artifacts).to_html();
        let lines: Vec<&str> = html.lines().collect();
        assert!(lines.contains(&"<title>Imprimir códigos de barras e etiquetas</title>"));
        assert!(lines.contains(&".label img { max-width: 100%; max-height: 100%; }"));
        let cells = lines.iter().filter(|l| l.starts_with("<div class=\"label\"><img")).count();
        assert_eq!(cells, 2);
    }

    #[test]
    fn attributes_are_escaped() {
        assert_eq!(escape_attr("a\"b<c>&"), "a&quot;b&lt;c&gt;&amp;");
    }
}
