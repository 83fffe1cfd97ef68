use slovo_parser::DictionaryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("invalid lexicon archive: {0}")]
    Archive(String),

    #[error("lexicon archive version {found} is not supported (expected {expected})")]
    Version { found: u32, expected: u32 },
}
