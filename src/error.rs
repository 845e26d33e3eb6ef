//! Error type for the fallible edges of the guide: configuration, export I/O
//! and window start-up. Rendering itself never fails.

use std::path::PathBuf;

pub type Result<T, E = GuideError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    /// Deployment base path that cannot be used as a `<base href>`
    #[error("invalid base path {value:?}: {reason}")]
    InvalidBasePath { value: String, reason: &'static str },

    #[error("invalid paper url {value:?}: {source}")]
    InvalidPaperUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// eframe failed to open the window
    #[error("window error: {0}")]
    Window(String),
}

impl GuideError {
    #[inline]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let e = GuideError::InvalidBasePath { value: "a b".into(), reason: "contains whitespace" };
        assert_eq!(e.to_string(), "invalid base path \"a b\": contains whitespace");

        let e = GuideError::io(
            "/tmp/site/index.html",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(e.to_string().starts_with("i/o error at /tmp/site/index.html"));
        assert!(std::error::Error::source(&e).is_some());
    }
}
