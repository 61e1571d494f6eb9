use std::path::PathBuf;

/// Result alias used across the crate.
pub type GraphicResult<T> = Result<T, GraphicError>;

/// Errors produced while composing or writing a feature graphic.
///
/// Two failure kinds are recognized by callers: [`GraphicError::DependencyMissing`] (the imaging
/// capability is not compiled in, nothing was drawn or written) and everything else, which is a
/// generic failure carrying its message.
#[derive(thiserror::Error, Debug)]
pub enum GraphicError {
    /// The raster encoder needed to produce output is not available in this build.
    #[error("dependency missing: {0}")]
    DependencyMissing(String),

    /// Rejected configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Drawing failure on the canvas.
    #[error("render error: {0}")]
    Render(String),

    /// Filesystem failure at a known path.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GraphicError {
    pub fn dependency_missing(msg: impl Into<String>) -> Self {
        Self::DependencyMissing(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` for the dependency-unavailable kind; every other variant is a generic failure.
    pub fn is_dependency_missing(&self) -> bool {
        matches!(self, Self::DependencyMissing(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
