// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Code generator — asynchronous single and bulk artifact generation.
//
// Rendering runs on tokio's blocking pool; each call is one suspension point
// that resolves to a finished data URI. Bulk calls fan out one task per input
// and correlate results by input index, never by completion order.

use labelwerk_core::error::{LabelwerkError, Result};
use labelwerk_core::{GeneratedArtifact, RenderOptions, Symbology};
use tokio::task::JoinSet;
use tracing::{info, instrument, warn};

use crate::detect::detect;
use crate::render::render_artifact;

/// Per-item result of [`Generator::generate_settled`].
#[derive(Debug)]
pub struct BulkOutcome {
    /// Position of the input in the request.
    pub index: usize,
    pub text: String,
    pub symbology: Symbology,
    pub result: Result<GeneratedArtifact>,
}

/// Produces artifacts with a fixed set of render options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    options: RenderOptions,
}

impl Generator {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render `text` with the given symbology.
    ///
    /// Fails with [`LabelwerkError::Encoding`] when the text does not fit the
    /// linear encoder; no fallback format is substituted.
    #[instrument(skip_all, fields(symbology = %symbology, text_len = text.len()))]
    pub async fn generate(&self, text: &str, symbology: Symbology) -> Result<GeneratedArtifact> {
        let text = text.to_owned();
        let options = self.options;
        let artifact = tokio::task::spawn_blocking(move || {
            render_artifact(&text, symbology, &options)
        })
        .await
        .map_err(|err| LabelwerkError::Task(err.to_string()))??;

        info!(format = ?artifact.format(), "Artifact generated");
        Ok(artifact)
    }

    /// Detect the symbology of `text`, then render it.
    pub async fn generate_detected(&self, text: &str) -> Result<GeneratedArtifact> {
        self.generate(text, detect(text)).await
    }

    /// Generate every input, all-or-nothing.
    ///
    /// Output order matches input order. If any item fails the whole call
    /// fails; with several failures the lowest-index error is returned.
    #[instrument(skip_all, fields(count = texts.len()))]
    pub async fn generate_bulk<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<GeneratedArtifact>> {
        let artifacts = self
            .run_all(texts)
            .await
            .into_iter()
            .map(|outcome| outcome.result)
            .collect::<Result<Vec<_>>>()?;

        info!(count = artifacts.len(), "Bulk generation complete");
        Ok(artifacts)
    }

    /// Generate every input and report each outcome separately, in input order.
    #[instrument(skip_all, fields(count = texts.len()))]
    pub async fn generate_settled<S: AsRef<str>>(&self, texts: &[S]) -> Vec<BulkOutcome> {
        let outcomes = self.run_all(texts).await;
        for outcome in &outcomes {
            if let Err(err) = &outcome.result {
                warn!(index = outcome.index, error = %err, "Bulk item failed");
            }
        }
        outcomes
    }

    /// One task per input, results slotted back by index.
    async fn run_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<BulkOutcome> {
        let mut tasks = JoinSet::new();
        for (index, text) in texts.iter().enumerate() {
            let text = text.as_ref().to_owned();
            let generator = *self;
            tasks.spawn(async move { (index, generator.generate_detected(&text).await) });
        }

        let mut slots: Vec<Option<Result<GeneratedArtifact>>> =
            (0..texts.len()).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(err) => warn!(error = %err, "Generation task did not complete"),
            }
        }

        texts
            .iter()
            .zip(slots)
            .enumerate()
            .map(|(index, (text, slot))| {
                let text = text.as_ref().to_owned();
                let result = slot.unwrap_or_else(|| {
                    Err(LabelwerkError::Task(format!("item {index} did not complete")))
                });
                BulkOutcome {
                    index,
                    symbology: detect(&text),
                    text,
                    result,
                }
            })
            .collect()
    }
}
