use std::fmt;
use std::sync::Arc;

use slovo_protocol::{
    ActantFrame, Case, Features, FlexionEntry, Government, RootEntry, RootTable, SemanticCategory,
    TokenId,
};

/// An entity occurrence filling an actant slot of the predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActantBinding {
    pub predicate: Arc<RootEntry>,
    /// The variant's own copy of the slot it fills.
    pub actant: ActantFrame,
    pub category: SemanticCategory,
    pub government: Government,
}

/// One candidate reading of one word occurrence.
///
/// Root and flexion are immutable shared handles into the lexical store; the
/// relational fields belong to this occurrence alone and are written at most
/// once per linking pass.
#[derive(Debug, Clone)]
pub struct Variant {
    pub word: String,
    pub root: Arc<RootEntry>,
    /// `None` for non-inflected words.
    pub flexion: Option<Arc<FlexionEntry>>,
    pub table: RootTable,
    pub actant: Option<ActantBinding>,
    /// Head noun this characteristic agrees with.
    pub characterized: Option<Arc<RootEntry>>,
}

impl Variant {
    pub fn new(word: &str, root: Arc<RootEntry>, flexion: Option<Arc<FlexionEntry>>) -> Self {
        Self {
            word: word.to_string(),
            table: root.table,
            root,
            flexion,
            actant: None,
            characterized: None,
        }
    }

    pub fn features(&self) -> Option<&Features> {
        self.flexion.as_ref().map(|f| &f.features)
    }

    pub fn case(&self) -> Option<Case> {
        self.features().and_then(Features::case)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        if let Some(flexion) = &self.flexion {
            write!(f, ", {}", flexion)?;
        }
        Ok(())
    }
}

/// A sentence position with every reading of its word.
#[derive(Debug, Clone)]
pub struct Lexeme {
    pub position: TokenId,
    pub word: String,
    pub variants: Vec<Variant>,
}

impl Lexeme {
    /// No table knows this word.
    pub fn is_unknown(&self) -> bool {
        self.variants.is_empty()
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return write!(f, "{}: unknown part of speech", self.word);
        }
        write!(f, "{}:", self.word)?;
        for variant in &self.variants {
            write!(f, "\n  {}", variant)?;
        }
        Ok(())
    }
}
