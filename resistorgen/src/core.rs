//! Artifact generation shared by the library API and the CLI.
//! No file-system access except through the `io` traits.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bands::{self, BandSet};
use crate::color::ColorBand;
use crate::domain::DomainError;
use crate::io::{ArtifactWriter, FsStore, TemplateReader};
use crate::naming::{self, DEFAULT_EXTENSION};
use crate::notation;
use crate::series;
use crate::template;
use crate::tolerance::{Tolerance, UnsupportedToleranceError};

#[derive(Debug, thiserror::Error)]
pub enum ResistorGenError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error(transparent)]
    UnsupportedTolerance(#[from] UnsupportedToleranceError),
    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    TemplateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{file} has unresolved placeholders: {}", tokens.join(", "))]
    UnresolvedPlaceholders { file: String, tokens: Vec<String> },
}

/// Options for a generation run (CLI or library).
#[derive(Clone, Debug)]
pub struct GenerationOptions {
    /// Values to render; empty means the whole E24 series.
    pub values: Vec<f64>,
    pub tolerances: Vec<Tolerance>,
    pub extension: String,
    /// Treat band tokens left in a rendered artifact as an error.
    pub strict_placeholders: bool,
    /// Stop at the first failing artifact instead of recording it.
    pub fail_fast: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            values: vec![],
            tolerances: vec![Tolerance::OnePercent],
            extension: DEFAULT_EXTENSION.to_string(),
            strict_placeholders: false,
            fail_fast: false,
        }
    }
}

impl GenerationOptions {
    /// Requested values, or the full series when none were given.
    pub fn resolved_values(&self) -> Vec<f64> {
        if self.values.is_empty() {
            series::generate()
        } else {
            self.values.clone()
        }
    }
}

/// Label, bands and file name of one value/tolerance pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Encoding {
    pub value: f64,
    pub tolerance: Tolerance,
    pub label: String,
    pub bands: BandSet,
    pub file_name: String,
}

impl Encoding {
    /// All five bands, tolerance last.
    pub fn colors(&self) -> [ColorBand; template::BAND_COUNT] {
        self.bands.with_tolerance(self.tolerance)
    }
}

/// A rendered artifact ready to be written.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub encoding: Encoding,
    pub content: String,
}

/// Record of one written artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactSummary {
    pub value: f64,
    pub label: String,
    pub tolerance: Tolerance,
    pub bands: [ColorBand; template::BAND_COUNT],
    pub path: PathBuf,
}

/// A value/tolerance pair that could not be generated.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationFailure {
    pub value: f64,
    pub tolerance: Tolerance,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub generated_at: DateTime<Utc>,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub artifacts: Vec<ArtifactSummary>,
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.artifacts.len() + self.failures.len()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Core generation API used by both the library and the CLI.
pub struct ResistorGenCore;

impl ResistorGenCore {
    /// Label, bands and file name for `value` at `tolerance`.
    pub fn encode(
        value: f64,
        tolerance: Tolerance,
        extension: &str,
    ) -> Result<Encoding, ResistorGenError> {
        let label = notation::format(value)?;
        let bands = bands::encode(value)?;
        let file_name = naming::file_name(&label, tolerance, extension);
        Ok(Encoding {
            value,
            tolerance,
            label,
            bands,
            file_name,
        })
    }

    /// Render one artifact from template text.
    pub fn render_artifact(
        template_text: &str,
        value: f64,
        tolerance: Tolerance,
        options: &GenerationOptions,
    ) -> Result<Artifact, ResistorGenError> {
        let encoding = Self::encode(value, tolerance, &options.extension)?;
        let content = template::substitute(template_text, &encoding.colors());

        let leftover = template::unresolved_placeholders(&content);
        if !leftover.is_empty() {
            if options.strict_placeholders {
                return Err(ResistorGenError::UnresolvedPlaceholders {
                    file: encoding.file_name,
                    tokens: leftover,
                });
            }
            tracing::warn!(
                "{} still contains placeholders: {}",
                encoding.file_name,
                leftover.join(", ")
            );
        }

        tracing::debug!(
            "Rendered {} with bands {:?}",
            encoding.file_name,
            encoding.colors()
        );
        Ok(Artifact { encoding, content })
    }

    /// Generate artifacts on the local file system.
    pub fn generate(
        template_path: &Path,
        output_dir: &Path,
        options: &GenerationOptions,
    ) -> Result<GenerationReport, ResistorGenError> {
        let store = FsStore::new();
        Self::generate_with(&store, &store, template_path, output_dir, options)
    }

    /// Generate one artifact per requested value and tolerance.
    ///
    /// A template that cannot be read aborts the run. Other failures abort
    /// only with `fail_fast`; otherwise they are collected in the report.
    pub fn generate_with(
        reader: &dyn TemplateReader,
        writer: &dyn ArtifactWriter,
        template_path: &Path,
        output_dir: &Path,
        options: &GenerationOptions,
    ) -> Result<GenerationReport, ResistorGenError> {
        let template_text =
            reader
                .read_template(template_path)
                .map_err(|source| ResistorGenError::TemplateRead {
                    path: template_path.to_path_buf(),
                    source,
                })?;

        let e24 = series::generate();
        for &value in &options.values {
            if !e24.contains(&value) {
                tracing::warn!("{} is not an E24 series value", value);
            }
        }

        let values = options.resolved_values();
        tracing::info!(
            "Generating {} artifacts from {}",
            values.len() * options.tolerances.len(),
            template_path.display()
        );

        let mut artifacts = Vec::new();
        let mut failures = Vec::new();
        for &value in &values {
            for &tolerance in &options.tolerances {
                let outcome = Self::render_artifact(&template_text, value, tolerance, options)
                    .and_then(|artifact| write_artifact(writer, output_dir, artifact));
                match outcome {
                    Ok(summary) => artifacts.push(summary),
                    Err(e) if options.fail_fast => return Err(e),
                    Err(e) => {
                        tracing::warn!("Skipping {} at {}: {}", value, tolerance, e);
                        failures.push(GenerationFailure {
                            value,
                            tolerance,
                            error: e.to_string(),
                        });
                    }
                }
            }
        }

        Ok(GenerationReport {
            generated_at: Utc::now(),
            template: template_path.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            artifacts,
            failures,
        })
    }
}

fn write_artifact(
    writer: &dyn ArtifactWriter,
    output_dir: &Path,
    artifact: Artifact,
) -> Result<ArtifactSummary, ResistorGenError> {
    let path = output_dir.join(&artifact.encoding.file_name);
    writer
        .write_artifact(&path, &artifact.content)
        .map_err(|source| ResistorGenError::TemplateWrite {
            path: path.clone(),
            source,
        })?;
    let bands = artifact.encoding.colors();
    let Encoding {
        value,
        tolerance,
        label,
        ..
    } = artifact.encoding;
    Ok(ArtifactSummary {
        value,
        label,
        tolerance,
        bands,
        path,
    })
}
