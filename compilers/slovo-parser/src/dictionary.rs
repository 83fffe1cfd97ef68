//! Record parsers for the line-oriented `.dct` dictionary files.
//!
//! Fields are separated by spaces. `_` stands for an empty flexion. Lists
//! are bracketed (`[ 1a 2a ]`) and predicate frames are nested in
//! parentheses, with `|` between alternatives:
//!
//! ```text
//! строительство ( ( O ( РП ) ( СТР ) ) ( L ( в ПП | на ПП ) ( МЕС ) ) )
//! ```

use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{take_till1, take_while1},
    character::complete::{char, space0},
    combinator::{all_consuming, map, map_res, opt, rest, verify},
    multi::{many0, many1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use slovo_protocol::{
    ActantFrame, ActantRole, Aspect, Case, CategoryRecord, Features, FlexionEntry, Gender,
    Government, InflectionClass, NonInflectedRecord, Number, ParameterRecord, PartOfSpeech, Person,
    PredicateRecord, RootRecord, SemanticCategory, SynonymSet, Tense, UnitRecord,
};

type Res<'a, T> = IResult<&'a str, T>;

fn is_field_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | '[' | ']' | '|')
}

fn field(input: &str) -> Res<&str> {
    preceded(space0, take_while1(is_field_char))(input)
}

fn symbol<'a>(c: char) -> impl FnMut(&'a str) -> Res<'a, char> {
    preceded(space0, char(c))
}

fn coded<T: FromStr>(input: &str) -> Res<T> {
    map_res(field, T::from_str)(input)
}

fn flexion_text(input: &str) -> Res<&str> {
    map(field, |f| if f == "_" { "" } else { f })(input)
}

fn class_list(input: &str) -> Res<Vec<InflectionClass>> {
    delimited(symbol('['), many1(map(field, InflectionClass::from)), symbol(']'))(input)
}

fn category_list(input: &str) -> Res<Vec<SemanticCategory>> {
    delimited(symbol('['), many0(map(field, SemanticCategory::from)), symbol(']'))(input)
}

fn feature_set(pos: PartOfSpeech, input: &str) -> Res<Features> {
    match pos {
        PartOfSpeech::ShortAdjective => map(pair(coded::<Gender>, coded::<Number>), |(gender, number)| {
            Features::Short { gender, number }
        })(input),
        PartOfSpeech::Participle => map(pair(coded::<Tense>, coded::<Aspect>), |(tense, aspect)| {
            Features::Participle { tense, aspect }
        })(input),
        PartOfSpeech::Verb => map(
            tuple((coded::<Tense>, coded::<Person>, coded::<Gender>, coded::<Number>, coded::<Aspect>)),
            |(tense, person, gender, number, aspect)| Features::Verbal { tense, person, gender, number, aspect },
        )(input),
        _ => map(
            tuple((coded::<Gender>, coded::<Case>, coded::<Number>)),
            |(gender, case, number)| Features::Nominal { gender, case, number },
        )(input),
    }
}

/// Runs `parser` over the whole line, reporting the unparsed remainder on failure.
fn complete<'a, T>(
    parser: impl FnMut(&'a str) -> Res<'a, T>,
    line: &'a str,
) -> Result<T, String> {
    match all_consuming(terminated(parser, space0))(line) {
        Ok((_, value)) => Ok(value),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
            Err(format!("unexpected input at '{}'", e.input.trim()))
        }
        Err(nom::Err::Incomplete(_)) => Err("incomplete record".to_string()),
    }
}

/// `suffix pos feature… [ class… ]`. Lines for non-inflected parts of
/// speech carry no usable flexion and yield `None`.
pub fn flexion_record(line: &str) -> Result<Option<FlexionEntry>, String> {
    let (after_pos, (suffix, pos)) =
        pair(flexion_text, coded::<PartOfSpeech>)(line).map_err(|_| format!("bad flexion head in '{}'", line))?;
    if !pos.is_inflected() {
        return Ok(None);
    }
    let (features, classes) = complete(pair(|i| feature_set(pos, i), class_list), after_pos)?;
    FlexionEntry::new(suffix, pos, features, classes)
        .map(Some)
        .map_err(|e| e.to_string())
}

/// `stem flexion pos class [ category… ]`. The category list is optional.
pub fn root_record(line: &str) -> Result<RootRecord, String> {
    complete(
        map(
            tuple((field, flexion_text, coded::<PartOfSpeech>, field, opt(category_list))),
            |(stem, flexion, part_of_speech, class, categories)| RootRecord {
                stem: stem.to_string(),
                flexion: flexion.to_string(),
                part_of_speech,
                inflection_class: InflectionClass::from(class),
                categories: categories.unwrap_or_default(),
            },
        ),
        line,
    )
}

pub fn non_inflected_record(line: &str) -> Result<NonInflectedRecord, String> {
    complete(
        map(pair(field, coded::<PartOfSpeech>), |(surface, part_of_speech)| NonInflectedRecord {
            surface: surface.to_string(),
            part_of_speech,
        }),
        line,
    )
}

/// `в ПП` or a bare case code.
fn government(input: &str) -> Res<Government> {
    alt((
        map(coded::<Case>, |case| Government { preposition: None, case }),
        map(pair(field, coded::<Case>), |(preposition, case)| Government {
            preposition: Some(preposition.to_string()),
            case,
        }),
    ))(input)
}

fn alternatives<'a, T>(item: impl FnMut(&'a str) -> Res<'a, T>) -> impl FnMut(&'a str) -> Res<'a, Vec<T>> {
    delimited(symbol('('), many1(terminated(item, opt(symbol('|')))), symbol(')'))
}

fn actant_frame(input: &str) -> Res<ActantFrame> {
    map(
        delimited(
            symbol('('),
            tuple((
                coded::<ActantRole>,
                alternatives(government),
                alternatives(map(field, SemanticCategory::from)),
            )),
            symbol(')'),
        ),
        |(role, governments, categories)| ActantFrame { role, governments, categories },
    )(input)
}

pub fn predicate_record(line: &str) -> Result<PredicateRecord, String> {
    complete(
        map(
            pair(field, delimited(symbol('('), many0(actant_frame), symbol(')'))),
            |(canonical, frames)| PredicateRecord { canonical: canonical.to_string(), frames },
        ),
        line,
    )
}

/// `canonical synonym…`
pub fn synonym_record(line: &str) -> Result<SynonymSet, String> {
    complete(
        map(pair(field, many1(field)), |(canonical, synonyms)| SynonymSet {
            canonical: canonical.to_string(),
            synonyms: synonyms.into_iter().map(str::to_string).collect(),
        }),
        line,
    )
}

/// A glued phrase, with `_` or spaces between its words. Stored space-separated.
pub fn glued_record(line: &str) -> Result<String, String> {
    let words: Vec<&str> = line.split(|c: char| c == '_' || c.is_whitespace()).filter(|w| !w.is_empty()).collect();
    if words.len() < 2 {
        return Err(format!("glued expression '{}' needs at least two words", line.trim()));
    }
    Ok(words.join(" "))
}

/// `CODE description…`
pub fn category_record(line: &str) -> Result<CategoryRecord, String> {
    complete(
        map(pair(field, preceded(space0, rest)), |(code, description): (&str, &str)| CategoryRecord {
            code: SemanticCategory::from(code),
            description: description.trim().to_string(),
        }),
        line,
    )
}

/// A non-blank, comma-free run, trimmed. Units and parameters are comma separated.
fn comma_field(input: &str) -> Res<&str> {
    verify(map(take_till1(|c: char| c == ','), str::trim), |f: &str| !f.is_empty())(input)
}

/// `atom, code, name`
pub fn unit_record(line: &str) -> Result<UnitRecord, String> {
    complete(
        map(
            tuple((comma_field, symbol(','), comma_field, symbol(','), comma_field)),
            |(atom, _, code, _, name)| UnitRecord {
                atom: atom.to_string(),
                code: code.to_string(),
                name: name.to_string(),
            },
        ),
        line,
    )
}

/// `atom, name`
pub fn parameter_record(line: &str) -> Result<ParameterRecord, String> {
    complete(
        map(tuple((comma_field, symbol(','), comma_field)), |(atom, _, name)| ParameterRecord {
            atom: atom.to_string(),
            name: name.to_string(),
        }),
        line,
    )
}
