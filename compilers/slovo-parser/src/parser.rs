use nom::{
    branch::alt,
    bytes::complete::{take_till, take_while, take_while1},
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{map, recognize},
    multi::many0,
    sequence::pair,
    IResult,
};
use crate::token::Span;

/// Letters of any script plus `_`, which joins glued expressions into one word.
fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

const PUNCTUATION: &str = ".,;:!?…-–—()\"«»'";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken<'a> {
    Word(&'a str),
    Number(&'a str),
    Punct(char),
}

/// A word with optional inner hyphens, e.g. "из-за". A lone hyphen is punctuation.
fn word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(is_word_char),
        many0(pair(char('-'), take_while1(is_word_char))),
    ))(input)
}

pub fn parse_with_spans(original_input: &str) -> Vec<(Span, RawToken)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        let parse_res: IResult<&str, RawToken> = alt((
            map(word, RawToken::Word),
            map(digit1, RawToken::Number),
            map(one_of(PUNCTUATION), RawToken::Punct),
        ))(input);

        match parse_res {
            Ok((next_input, token)) => {
                let len = input.len() - next_input.len();
                let start = input.as_ptr() as usize - original_input.as_ptr() as usize;

                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => {
                // skip one unrecognised char
                if let Some(c) = input.chars().next() {
                    input = &input[c.len_utf8()..];
                } else {
                    break;
                }
            }
        }
    }

    result
}

/// Splits text after runs of sentence terminators. Empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut rest = text;
    let mut sentences = Vec::new();

    while !rest.is_empty() {
        let res: IResult<&str, &str> =
            recognize(pair(take_till(is_terminator), take_while(is_terminator)))(rest);
        let Ok((next, sentence)) = res else { break };

        let sentence = sentence.trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        if next.len() == rest.len() {
            break;
        }
        rest = next;
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(input: &str) -> Vec<RawToken> {
        parse_with_spans(input).into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn test_cyrillic_words_and_punctuation() {
        assert_eq!(
            raw("Строительство дома, из камня."),
            vec![
                RawToken::Word("Строительство"),
                RawToken::Word("дома"),
                RawToken::Punct(','),
                RawToken::Word("из"),
                RawToken::Word("камня"),
                RawToken::Punct('.'),
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let input = "дом  из";
        let spans: Vec<Span> = parse_with_spans(input).into_iter().map(|(s, _)| s).collect();
        assert_eq!(&input[spans[0].start..spans[0].end], "дом");
        assert_eq!(&input[spans[1].start..spans[1].end], "из");
        assert_eq!(spans[1].start, "дом  ".len());
    }

    #[test]
    fn test_hyphens_and_glue() {
        assert_eq!(
            raw("из-за при_помощи - 12"),
            vec![
                RawToken::Word("из-за"),
                RawToken::Word("при_помощи"),
                RawToken::Punct('-'),
                RawToken::Number("12"),
            ]
        );
        // trailing hyphen is not part of the word
        assert_eq!(raw("дом-"), vec![RawToken::Word("дом"), RawToken::Punct('-')]);
    }

    #[test]
    fn test_unknown_symbols_are_skipped() {
        assert_eq!(raw("дом § ¤ дом"), vec![RawToken::Word("дом"), RawToken::Word("дом")]);
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("Строят дом. Из камня!  Где?.. "),
            vec!["Строят дом.", "Из камня!", "Где?.."]
        );
        assert_eq!(split_sentences("без точки"), vec!["без точки"]);
        assert!(split_sentences("  ").is_empty());
    }
}
