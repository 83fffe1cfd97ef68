pub mod dictionary;
pub mod error;
pub mod loader;
pub mod parser;
pub mod preprocess;
pub mod token;

pub use crate::error::DictionaryError;
pub use crate::loader::{load_dir, Sources};
pub use crate::parser::split_sentences;
pub use crate::preprocess::Preprocessor;

use crate::parser::{parse_with_spans, RawToken};
use crate::token::{Token, TokenKind};

/// Text -> tokens with byte spans.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    parse_with_spans(input)
        .into_iter()
        .map(|(span, raw)| {
            let kind = match raw {
                RawToken::Word(_) => TokenKind::Word,
                RawToken::Number(_) => TokenKind::Number,
                RawToken::Punct(c) => TokenKind::Punctuation(c),
            };
            Token { span, text: &input[span.start..span.end], kind }
        })
        .collect()
}

/// The lowercased words of `input`, punctuation and numbers dropped.
pub fn words(input: &str) -> Vec<String> {
    tokenize(input)
        .into_iter()
        .filter(|t| t.kind == TokenKind::Word)
        .map(|t| t.text.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_integration() {
        let input = "Строительство дома из камня.";
        let tokens = tokenize(input);

        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].text, "Строительство");
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[4].kind, TokenKind::Punctuation('.'));
        assert_eq!(tokens[3].span.len(), "камня".len());
    }

    #[test]
    fn test_words_are_lowercased() {
        assert_eq!(
            words("Строительство ДОМА, 1999 из камня!"),
            vec!["строительство", "дома", "из", "камня"]
        );
    }

    #[test]
    fn test_sentences_then_words() {
        let text = "Строительство дома. Красного дома!";
        let sentences: Vec<Vec<String>> = split_sentences(text).into_iter().map(words).collect();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], vec!["красного", "дома"]);
    }
}
