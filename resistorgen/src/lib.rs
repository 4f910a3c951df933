//! resistorgen - E24 resistor color bands and CAD model generation
//!
//! This library turns a resistance value into the colors of its bands and
//! an engineering-notation label, and fills those colors into a STEP
//! template so that one 3D part file can be produced per value and
//! tolerance.
//!
//! # Quick Start
//!
//! ```no_run
//! use resistorgen::{GenerationOptions, ResistorGenCore};
//! use std::path::Path;
//!
//! let report = ResistorGenCore::generate(
//!     Path::new("Template/Template.step"),
//!     Path::new("Output"),
//!     &GenerationOptions::default(),
//! ).unwrap();
//!
//! for artifact in &report.artifacts {
//!     println!("{}: {}", artifact.label, artifact.path.display());
//! }
//! ```
//!
//! # Features
//!
//! - **Series**: the 169 E24 values from 1 Ω to 10 MΩ
//! - **Notation**: labels such as `4K7`, `100R`, `1M`
//! - **Bands**: 3 digit bands + multiplier, gold/silver for ×0.1 and ×0.01
//! - **Templates**: `{{BAND_<n>_RED}}`-style token substitution

pub mod bands;
pub mod color;
pub mod core;
pub mod domain;
pub mod io;
pub mod naming;
pub mod notation;
pub mod series;
pub mod template;
pub mod tolerance;

// Re-export main types
pub use bands::BandSet;
pub use color::{ColorBand, RgbTriple};
pub use crate::core::{
    Artifact, ArtifactSummary, Encoding, GenerationFailure, GenerationOptions, GenerationReport,
    ResistorGenCore, ResistorGenError,
};
pub use domain::DomainError;
pub use io::{ArtifactWriter, FsStore, TemplateReader};
pub use tolerance::{ParseToleranceError, Tolerance, ToleranceSpec, UnsupportedToleranceError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        BandSet, ColorBand, GenerationOptions, GenerationReport, ResistorGenCore,
        ResistorGenError, Tolerance,
    };
}
