pub mod components;
pub mod systems;

use std::sync::Arc;

use slovo_morph::{analyze, LexicalStore};
use slovo_protocol::TokenId;
use tracing::debug;

pub use components::{ActantBinding, Lexeme, Variant};
pub use systems::actants::link_actants;
pub use systems::agreement::link_agreement;
pub use systems::predicate::select_predicate;

/// Lexemes of one sentence in their linear order. Position order is relied on by
/// preposition precedence and adjacency checks, so lexemes are never reordered.
#[derive(Debug, Clone, Default)]
pub struct Sentence {
    pub lexemes: Vec<Lexeme>,
}

impl Sentence {
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    pub fn words(&self) -> Vec<String> {
        self.lexemes.iter().map(|l| l.word.clone()).collect()
    }

    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.lexemes.iter().flat_map(|l| l.variants.iter())
    }
}

/// Turns a token sequence into lexemes, keeping every candidate reading.
pub struct SentenceAnalyzer<'s> {
    store: &'s LexicalStore,
}

impl<'s> SentenceAnalyzer<'s> {
    pub fn new(store: &'s LexicalStore) -> Self {
        Self { store }
    }

    pub fn analyze<S: AsRef<str>>(&self, tokens: &[S]) -> Sentence {
        let lexemes = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| self.analyze_token(TokenId::at(i), token.as_ref()))
            .collect();
        Sentence { lexemes }
    }

    fn analyze_token(&self, position: TokenId, word: &str) -> Lexeme {
        // Fixed forms first; they never go through decomposition.
        let variants = match self.store.non_inflected(word) {
            Some(entry) => vec![Variant::new(word, Arc::clone(entry), None)],
            None => analyze(self.store, word)
                .into_iter()
                .map(|a| Variant::new(word, a.root, Some(a.flexion)))
                .collect(),
        };
        if variants.is_empty() {
            debug!(word, at = %position, "unknown part of speech");
        }
        Lexeme { position, word: word.to_string(), variants }
    }
}
