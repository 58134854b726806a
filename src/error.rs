//! Error types for scene loading and saving

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Errors that can occur while reading, parsing or writing a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to access scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize scene: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl SceneError {
    /// Byte range in the scene source the error points at, if known
    pub fn span(&self) -> Option<std::ops::Range<usize>> {
        match self {
            SceneError::Parse(e) => e.span(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne.
    ///
    /// Errors without a source location fall back to their display form.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (SceneError::Parse(err), Some(span)) = (self, self.span()) else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid scene file")
            .with_label(
                Label::new((filename, span))
                    .with_message(err.message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
