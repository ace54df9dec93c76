use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while processing one target file.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("could not open `{}`", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not save `{}`", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl StripError {
    pub fn path(&self) -> &Path {
        match self {
            StripError::Open { path, .. } | StripError::Save { path, .. } => path,
        }
    }

    pub fn image_error(&self) -> &image::ImageError {
        match self {
            StripError::Open { source, .. } | StripError::Save { source, .. } => source,
        }
    }
}
