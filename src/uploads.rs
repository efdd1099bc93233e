//! Filesystem storage for uploaded client photos.
//!
//! Stored files get a random unique prefix so concurrent uploads of the same
//! original name never collide; the directory is served back over HTTP under
//! `/uploads`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Opens the store, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copies the bytes at `src` into the store under a collision-resistant
    /// name derived from `original_name`, returning the stored filename.
    pub fn store_file(&self, src: &Path, original_name: &str) -> io::Result<String> {
        // Keep only the basename; the client controls the original name.
        let original = Path::new(original_name)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("archivo");

        let stored_name = format!("{}-{}", Uuid::new_v4(), original);
        let dest = self.dir.join(&stored_name);
        fs::copy(src, &dest)?;
        info!("Stored upload at {}", dest.display());

        Ok(stored_name)
    }
}
