use std::collections::HashMap;

use tracing::trace;

/// Rewrites a word sequence before analysis: multi-word expressions are glued
/// into single `_`-joined tokens, then synonyms are replaced by their
/// canonical word.
#[derive(Debug, Default, Clone)]
pub struct Preprocessor {
    /// Longest expression first.
    glued: Vec<Vec<String>>,
    synonyms: HashMap<String, String>,
}

impl Preprocessor {
    pub fn new<G, S>(glued: G, synonyms: S) -> Self
    where
        G: IntoIterator,
        G::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: Into<(String, String)>,
    {
        let mut glued: Vec<Vec<String>> = glued
            .into_iter()
            .map(|phrase| phrase.as_ref().split_whitespace().map(str::to_lowercase).collect::<Vec<_>>())
            .filter(|words| words.len() > 1)
            .collect();
        glued.sort_by(|a, b| b.len().cmp(&a.len()));

        Self {
            glued,
            synonyms: synonyms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.glued.is_empty() && self.synonyms.is_empty()
    }

    fn glue(&self, words: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(words.len());
        let mut i = 0;
        'outer: while i < words.len() {
            for phrase in &self.glued {
                let end = i + phrase.len();
                if end <= words.len() && words[i..end] == phrase[..] {
                    let joined = phrase.join("_");
                    trace!(glued = %joined, "expression glued");
                    out.push(joined);
                    i = end;
                    continue 'outer;
                }
            }
            out.push(words[i].clone());
            i += 1;
        }
        out
    }

    /// Glues, then substitutes whole-word synonyms.
    pub fn apply(&self, words: &[String]) -> Vec<String> {
        self.glue(words)
            .into_iter()
            .map(|word| match self.synonyms.get(&word) {
                Some(canonical) => canonical.clone(),
                None => word,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preprocessor() -> Preprocessor {
        Preprocessor::new(
            ["при помощи", "в течение", "в течение всего"],
            [("здание".to_string(), "дом".to_string())],
        )
    }

    fn rewrite(text: &str) -> String {
        preprocessor().apply(&crate::words(text)).join(" ")
    }

    #[test]
    fn test_glue_and_synonyms() {
        assert_eq!(
            rewrite("Строительство здания при помощи крана"),
            "строительство здания при_помощи крана"
        );
        assert_eq!(rewrite("здание и здание"), "дом и дом");
    }

    #[test]
    fn test_longest_expression_wins() {
        assert_eq!(rewrite("в течение всего дня"), "в_течение_всего дня");
        assert_eq!(rewrite("в течение дня"), "в_течение дня");
    }

    #[test]
    fn test_partial_phrase_is_left_alone() {
        assert_eq!(rewrite("при доме"), "при доме");
        // synonyms match whole words only
        assert_eq!(rewrite("зданием"), "зданием");
    }

    #[test]
    fn test_empty() {
        let empty = Preprocessor::default();
        assert!(empty.is_empty());
        let words = vec!["дом".to_string()];
        assert_eq!(empty.apply(&words), words);
    }
}
