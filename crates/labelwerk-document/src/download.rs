// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Downloads — turn artifacts into named files on disk.

use std::path::{Path, PathBuf};

use labelwerk_core::GeneratedArtifact;
use labelwerk_core::error::Result;
use tracing::{info, instrument};

/// File contents decoded from an artifact, with the name to save it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Download {
    /// `Barcode_<millis>.<ext>`, extension taken from the data-URI format.
    pub fn from_artifact(artifact: &GeneratedArtifact, millis: i64) -> Result<Self> {
        Ok(Self {
            file_name: format!("Barcode_{millis}.{}", artifact.file_extension()),
            bytes: artifact.decode_payload()?,
        })
    }

    /// Name every artifact from one timestamp. A single artifact keeps the
    /// plain name; several get `_<n>` (1-based) so none collide.
    pub fn batch(artifacts: &[GeneratedArtifact], millis: i64) -> Result<Vec<Self>> {
        if let [only] = artifacts {
            return Ok(vec![Self::from_artifact(only, millis)?]);
        }
        artifacts
            .iter()
            .enumerate()
            .map(|(i, artifact)| {
                Ok(Self {
                    file_name: format!("Barcode_{millis}_{}.{}", i + 1, artifact.file_extension()),
                    bytes: artifact.decode_payload()?,
                })
            })
            .collect()
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Write `artifacts` into `dir`, creating it if needed. Returns the paths in
/// artifact order.
#[instrument(skip(artifacts), fields(count = artifacts.len(), dir = %dir.display()))]
pub fn save_downloads(dir: &Path, artifacts: &[GeneratedArtifact]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let downloads = Download::batch(artifacts, now_millis())?;

    let mut paths = Vec::with_capacity(downloads.len());
    for download in downloads {
        let path = dir.join(&download.file_name);
        std::fs::write(&path, &download.bytes)?;
        info!(path = %path.display(), bytes = download.bytes.len(), "Download written");
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_follows_format() {
        let png = Download::from_artifact(&GeneratedArtifact::from_png_bytes(b"\x89PNG"), 1700000000000).unwrap();
        assert_eq!(png.file_name, "Barcode_1700000000000.png");
        assert_eq!(png.bytes, b"\x89PNG");

        let svg = Download::from_artifact(&GeneratedArtifact::from_svg_markup("<svg/>"), 42).unwrap();
        assert_eq!(svg.file_name, "Barcode_42.svg");
        assert_eq!(svg.bytes, b"<svg/>");
    }

    #[test]
    fn batch_names_are_unique() {
        let artifacts = vec![
            GeneratedArtifact::from_png_bytes(b"a"),
            GeneratedArtifact::from_svg_markup("b"),
        ];
        let names: Vec<_> = Download::batch(&artifacts, 7)
            .unwrap()
            .into_iter()
            .map(|d| d.file_name)
            .collect();
        assert_eq!(names, ["Barcode_7_1.png", "Barcode_7_2.svg"]);
    }

    #[test]
    fn files_land_in_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("labels");
        let artifacts = vec![
            GeneratedArtifact::from_svg_markup("<svg>1</svg>"),
            GeneratedArtifact::from_svg_markup("<svg>2</svg>"),
        ];
        let paths = save_downloads(&out, &artifacts).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(std::fs::read_to_string(&paths[1]).unwrap(), "<svg>2</svg>");
        assert!(paths[0].file_name().unwrap().to_string_lossy().ends_with("_1.svg"));
    }

    #[test]
    fn corrupt_payload_is_rejected() {
        let artifact = GeneratedArtifact::Png(format!("{}!!!", GeneratedArtifact::PNG_PREFIX));
        assert!(Download::from_artifact(&artifact, 1).is_err());
    }
}
