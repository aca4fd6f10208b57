// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session state — the selected sheet template and the current artifact list,
// plus the single and bulk generation flows that replace it.

use labelwerk_core::error::{LabelwerkError, Result};
use labelwerk_core::{GeneratedArtifact, SheetTemplate, Symbology};
use tracing::{info, instrument};

use crate::detect::detect;
use crate::generator::Generator;
use crate::layout::{PrintDocument, layout};

/// Split comma-separated bulk text into trimmed, non-empty codes.
///
/// Commas cannot be escaped, so a code can never contain one.
pub fn split_bulk_input(raw: &str) -> Result<Vec<String>> {
    let codes: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
        .collect();
    if codes.is_empty() {
        return Err(LabelwerkError::MalformedBulkInput);
    }
    Ok(codes)
}

/// Working state of one labelling session.
///
/// `artifacts` is only ever replaced as a whole, and only by a generation that
/// fully succeeded.
#[derive(Debug, Clone, Default)]
pub struct Session {
    template: SheetTemplate,
    artifacts: Vec<GeneratedArtifact>,
}

impl Session {
    pub fn new(template: SheetTemplate) -> Self {
        Self {
            template,
            artifacts: Vec::new(),
        }
    }

    pub fn template(&self) -> &SheetTemplate {
        &self.template
    }

    pub fn set_template(&mut self, template: SheetTemplate) {
        info!(template = template.name(), "Sheet template selected");
        self.template = template;
    }

    pub fn artifacts(&self) -> &[GeneratedArtifact] {
        &self.artifacts
    }

    /// Generate one artifact from `input`.
    ///
    /// Blank input (empty after trimming) is rejected before generation. The
    /// untrimmed text is what gets encoded. `symbology` overrides detection.
    #[instrument(skip_all, fields(input_len = input.len()))]
    pub async fn generate_one(
        &mut self,
        generator: &Generator,
        input: &str,
        symbology: Option<Symbology>,
    ) -> Result<&GeneratedArtifact> {
        if input.trim().is_empty() {
            return Err(LabelwerkError::EmptyInput);
        }
        let symbology = symbology.unwrap_or_else(|| detect(input));
        let artifact = generator.generate(input, symbology).await?;

        self.artifacts = vec![artifact];
        Ok(&self.artifacts[0])
    }

    /// Generate every code in comma-separated `bulk_text`, all-or-nothing.
    #[instrument(skip_all, fields(text_len = bulk_text.len()))]
    pub async fn generate_many(
        &mut self,
        generator: &Generator,
        bulk_text: &str,
    ) -> Result<&[GeneratedArtifact]> {
        let codes = split_bulk_input(bulk_text)?;
        let artifacts = generator.generate_bulk(codes.as_slice()).await?;

        info!(count = artifacts.len(), "Session artifacts replaced");
        self.artifacts = artifacts;
        Ok(&self.artifacts)
    }

    /// Lay out the current artifacts on the current template.
    pub fn print_document(&self) -> PrintDocument {
        layout(&self.template.resolve(), &self.artifacts)
    }
}
