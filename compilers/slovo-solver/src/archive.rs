use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::{AlignedVec, Deserialize};
use slovo_protocol::Lexicon;
use tracing::debug;

use crate::error::ProcessError;

/// Serializes a lexicon into a validated-on-load rkyv archive.
pub fn encode(lexicon: &Lexicon) -> Result<AlignedVec, ProcessError> {
    let mut serializer = AllocSerializer::<4096>::default();
    serializer
        .serialize_value(lexicon)
        .map_err(|e| ProcessError::Archive(e.to_string()))?;
    Ok(serializer.into_serializer().into_inner())
}

/// Checks and deserializes an archive produced by [`encode`]. The bytes are
/// copied into an aligned buffer first, so any slice is accepted.
pub fn decode(bytes: &[u8]) -> Result<Lexicon, ProcessError> {
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let archived = rkyv::check_archived_root::<Lexicon>(&aligned)
        .map_err(|e| ProcessError::Archive(e.to_string()))?;
    if archived.version != Lexicon::VERSION {
        return Err(ProcessError::Version { found: archived.version, expected: Lexicon::VERSION });
    }

    let lexicon: Lexicon = match archived.deserialize(&mut rkyv::Infallible) {
        Ok(lexicon) => lexicon,
        Err(never) => match never {},
    };
    debug!(bytes = bytes.len(), "lexicon archive loaded");
    Ok(lexicon)
}
