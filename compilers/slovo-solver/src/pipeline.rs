use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use slovo_morph::LexicalStore;
use slovo_parser::{split_sentences, words, Preprocessor};
use slovo_sentence::{link_actants, link_agreement, select_predicate, Lexeme, SentenceAnalyzer};
use tracing::debug;

use crate::error::ProcessError;
use crate::triples::{emit, Triple};

/// Everything found in one sentence.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceReport {
    pub tokens: Vec<String>,
    #[serde(skip)]
    pub lexemes: Vec<Lexeme>,
    /// Canonical form of the selected predicate.
    pub predicate: Option<String>,
    pub triples: Vec<Triple>,
}

impl SentenceReport {
    pub fn unknown_words(&self) -> impl Iterator<Item = &str> {
        self.lexemes.iter().filter(|l| l.is_unknown()).map(|l| l.word.as_str())
    }
}

/// Runs the analysis and linking passes over sentences against one shared store.
pub struct Processor {
    store: Arc<LexicalStore>,
    preprocessor: Preprocessor,
}

impl Processor {
    pub fn new(store: Arc<LexicalStore>) -> Self {
        let preprocessor = Preprocessor::new(
            store.glued_expressions(),
            store.synonyms().map(|(synonym, canonical)| (synonym.to_string(), canonical.to_string())),
        );
        Self { store, preprocessor }
    }

    /// Loads text dictionaries from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ProcessError> {
        let lexicon = slovo_parser::load_dir(dir)?;
        Ok(Self::new(Arc::new(LexicalStore::new(lexicon))))
    }

    /// Loads a compiled lexicon archive.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, ProcessError> {
        let lexicon = crate::archive::decode(bytes)?;
        Ok(Self::new(Arc::new(LexicalStore::new(lexicon))))
    }

    /// Turns off glued-expression and synonym rewriting.
    pub fn without_preprocessing(mut self) -> Self {
        self.preprocessor = Preprocessor::default();
        self
    }

    pub fn store(&self) -> &Arc<LexicalStore> {
        &self.store
    }

    /// Analyses one already tokenised sentence. Tokens are used as given.
    pub fn process_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> SentenceReport {
        let mut sentence = SentenceAnalyzer::new(&self.store).analyze(tokens);

        link_agreement(&mut sentence);
        let predicate = select_predicate(&sentence);
        if let Some(predicate) = &predicate {
            link_actants(&mut sentence, predicate);
        }
        let triples = emit(&sentence);

        SentenceReport {
            tokens: sentence.words(),
            lexemes: sentence.lexemes,
            predicate: predicate.map(|p| p.canonical.clone()),
            triples,
        }
    }

    /// Splits `text` into sentences and processes them in parallel. Reports
    /// come back in sentence order.
    pub fn process_text(&self, text: &str) -> Vec<SentenceReport> {
        let reports: Vec<SentenceReport> = split_sentences(text)
            .par_iter()
            .map(|sentence| {
                let tokens = self.preprocessor.apply(&words(sentence));
                self.process_tokens(&tokens)
            })
            .filter(|report| !report.tokens.is_empty())
            .collect();
        debug!(sentences = reports.len(), "text processed");
        reports
    }
}
