//! Template and artifact storage.
//!
//! Generation only needs to read one template and write finished
//! artifacts; both are behind traits so callers can swap the file system
//! for something else (tests use an in-memory store).

use std::path::Path;

/// Source of template text.
pub trait TemplateReader {
    fn read_template(&self, path: &Path) -> std::io::Result<String>;
}

/// Destination for rendered artifacts.
pub trait ArtifactWriter {
    fn write_artifact(&self, path: &Path, content: &str) -> std::io::Result<()>;
}

/// Local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateReader for FsStore {
    fn read_template(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl ArtifactWriter for FsStore {
    fn write_artifact(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
    }
}
