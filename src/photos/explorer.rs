//! Finds picture files under a directory tree.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{Error, Result};

/// Leading bytes of every JPEG file (SOI marker plus the next marker prefix).
const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Looks for JPEG pictures in a tree and returns them
pub struct TreeExplorer {
    directory: PathBuf,
}

impl TreeExplorer {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Paths to every JPEG file under the directory, sorted.
    ///
    /// Files are recognized by content, not extension. Entries that cannot
    /// be accessed, like broken symbolic links, are skipped with a warning.
    pub fn paths(&self) -> Result<Vec<PathBuf>> {
        if !self.directory.is_dir() {
            return Err(Error::InvalidDirectory(format!(
                "{} is not a directory",
                self.directory.display()
            )));
        }

        let walker = globwalk::GlobWalkerBuilder::from_patterns(&self.directory, &["**/*"])
            .follow_links(false)
            .build()?;

        let mut paths = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Unable to explore entry: {}", e);
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                debug!("Exploring {}...", entry.path().display());
                continue;
            }

            let path = entry.path();
            if !path.is_file() {
                warn!("Unable to access file: {:?}", path);
                continue;
            }

            if is_jpeg(path) {
                paths.push(path.to_path_buf());
            }
        }
        paths.sort();

        info!(
            "{} picture files found under {}",
            paths.len(),
            self.directory.display()
        );
        Ok(paths)
    }
}

/// Whether the file content starts with the JPEG signature.
pub fn is_jpeg(path: &Path) -> bool {
    let mut header = [0u8; 3];
    match File::open(path).and_then(|mut file| file.read_exact(&mut header)) {
        Ok(()) => header == JPEG_SIGNATURE,
        Err(e) => {
            debug!("Unable to read {:?}: {}", path, e);
            false
        }
    }
}
