use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use slovo_protocol::Lexicon;
use tracing::{debug, warn};

use crate::dictionary;
use crate::error::DictionaryError;

pub const FLEXIES: &str = "Flexies.dct";
pub const ENTITIES: &str = "Entities.dct";
pub const CHARACTERS: &str = "Characters.dct";
pub const VERBS: &str = "Verbs.dct";
pub const NON_INFLECTED: &str = "NoninflectedWords.dct";
pub const PREDICATES: &str = "Predicates.dct";
pub const SYNONYMS: &str = "Synonyms.dct";
pub const GLUED: &str = "GluedWords.dct";
pub const CATEGORIES: &str = "SemCat.dct";
pub const UNITS: &str = "Units.dct";
pub const PARAMETERS: &str = "Parameters.dct";

/// Raw contents of each dictionary file. Absent files are empty strings.
#[derive(Debug, Default, Clone)]
pub struct Sources {
    pub flexies: String,
    pub entities: String,
    pub characters: String,
    pub verbs: String,
    pub non_inflected: String,
    pub predicates: String,
    pub synonyms: String,
    pub glued: String,
    pub categories: String,
    pub units: String,
    pub parameters: String,
}

impl Sources {
    /// Reads a dictionary directory. Only the flexion table is required.
    pub fn read_dir(dir: &Path) -> Result<Self, DictionaryError> {
        let read = |name: &str, required: bool| -> Result<String, DictionaryError> {
            let path = dir.join(name);
            match fs::read_to_string(&path) {
                Ok(text) => Ok(text),
                Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                    debug!(file = name, "dictionary absent, loading as empty");
                    Ok(String::new())
                }
                Err(e) if e.kind() == ErrorKind::NotFound => Err(DictionaryError::Missing(name.to_string())),
                Err(source) => Err(DictionaryError::Io { path, source }),
            }
        };

        Ok(Sources {
            flexies: read(FLEXIES, true)?,
            entities: read(ENTITIES, false)?,
            characters: read(CHARACTERS, false)?,
            verbs: read(VERBS, false)?,
            non_inflected: read(NON_INFLECTED, false)?,
            predicates: read(PREDICATES, false)?,
            synonyms: read(SYNONYMS, false)?,
            glued: read(GLUED, false)?,
            categories: read(CATEGORIES, false)?,
            units: read(UNITS, false)?,
            parameters: read(PARAMETERS, false)?,
        })
    }

    pub fn parse(&self) -> Result<Lexicon, DictionaryError> {
        let lexicon = Lexicon {
            version: Lexicon::VERSION,
            flexions: parse_table(FLEXIES, &self.flexies, dictionary::flexion_record)?
                .into_iter()
                .flatten()
                .collect(),
            entities: parse_table(ENTITIES, &self.entities, dictionary::root_record)?,
            characters: parse_table(CHARACTERS, &self.characters, dictionary::root_record)?,
            verbs: parse_table(VERBS, &self.verbs, dictionary::root_record)?,
            non_inflected: parse_table(NON_INFLECTED, &self.non_inflected, dictionary::non_inflected_record)?,
            predicates: parse_table(PREDICATES, &self.predicates, dictionary::predicate_record)?,
            synonyms: parse_table(SYNONYMS, &self.synonyms, dictionary::synonym_record)?,
            glued: parse_table(GLUED, &self.glued, dictionary::glued_record)?,
            categories: parse_table(CATEGORIES, &self.categories, dictionary::category_record)?,
            units: parse_table(UNITS, &self.units, dictionary::unit_record)?,
            parameters: parse_table(PARAMETERS, &self.parameters, dictionary::parameter_record)?,
        };
        debug!(
            flexions = lexicon.flexions.len(),
            entities = lexicon.entities.len(),
            characters = lexicon.characters.len(),
            verbs = lexicon.verbs.len(),
            predicates = lexicon.predicates.len(),
            units = lexicon.units.len(),
            parameters = lexicon.parameters.len(),
            "dictionaries parsed"
        );
        Ok(lexicon)
    }
}

/// Parses every non-blank line of one file. `#` starts a comment line.
fn parse_table<T>(
    file: &str,
    text: &str,
    record: impl Fn(&str) -> Result<T, String>,
) -> Result<Vec<T>, DictionaryError> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parsed = record(line).map_err(|reason| DictionaryError::Malformed {
            file: file.to_string(),
            line: index + 1,
            reason,
        })?;
        records.push(parsed);
    }
    if records.is_empty() && !text.trim().is_empty() {
        warn!(file, "dictionary has content but no records");
    }
    Ok(records)
}

/// Reads and parses a dictionary directory into a lexicon.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Lexicon, DictionaryError> {
    Sources::read_dir(dir.as_ref())?.parse()
}
