use slovo_protocol::{PartOfSpeech, ProtocolError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorphError {
    #[error("invalid value '{value}' for feature {field}")]
    InvalidFeature { field: String, value: String },

    #[error("unknown feature field '{0}'")]
    UnknownField(String),

    #[error("part of speech {part_of_speech} requires feature {field}")]
    MissingFeature {
        part_of_speech: PartOfSpeech,
        field: &'static str,
    },

    #[error("part of speech {0} has no flexions")]
    NotInflected(PartOfSpeech),
}

impl From<ProtocolError> for MorphError {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::UnknownCode { kind, code } => MorphError::InvalidFeature {
                field: kind.to_string(),
                value: code,
            },
            ProtocolError::ShapeMismatch { part_of_speech } => MorphError::InvalidFeature {
                field: PartOfSpeech::KIND.to_string(),
                value: part_of_speech.to_string(),
            },
        }
    }
}
