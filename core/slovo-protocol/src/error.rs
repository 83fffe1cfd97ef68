use alloc::string::String;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A dictionary code outside the closed set for its field.
    UnknownCode { kind: &'static str, code: String },
    /// A feature tuple whose shape does not belong to the part of speech.
    ShapeMismatch { part_of_speech: &'static str },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnknownCode { kind, code } => {
                write!(f, "unknown {} code '{}'", kind, code)
            }
            ProtocolError::ShapeMismatch { part_of_speech } => {
                write!(f, "feature tuple does not fit part of speech {}", part_of_speech)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}
