use std::{fmt, io, path::PathBuf};

/// Fatal condition that aborts a report run.
///
/// Any of these discards the rows accumulated so far; no partial report is
/// ever returned.
#[derive(Debug)]
pub enum PipelineError {
    /// A catalog (or the folder listing) could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A catalog's header is missing or malformed, or an entry is broken.
    Format { path: PathBuf, reason: String },
}

impl PipelineError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            PipelineError::Io { path, .. } | PipelineError::Format { path, .. } => path,
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            PipelineError::Format { path, reason } => write!(f, "{}: {}", path.display(), reason),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Io { source, .. } => Some(source),
            PipelineError::Format { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = PipelineError::Format {
            path: PathBuf::from("translations/fr.po"),
            reason: "missing or malformed header".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "translations/fr.po: missing or malformed header"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = PipelineError::Io {
            path: PathBuf::from("fr.po"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.to_string(), "fr.po: permission denied");
        assert!(err.source().is_some());
        assert_eq!(err.path(), std::path::Path::new("fr.po"));
    }
}
