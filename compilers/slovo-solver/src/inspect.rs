use std::fmt;

use slovo_morph::LexicalStore;
use slovo_protocol::{ParameterRecord, SemanticCategory, UnitRecord};
use slovo_sentence::{Lexeme, SentenceAnalyzer};

use crate::pipeline::Processor;

/// What the store knows about one word, beyond its readings.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub lexeme: Lexeme,
    /// Canonical word when this one is listed as a synonym.
    pub synonym_of: Option<String>,
    /// Categories of the entity readings, each with its description if one is loaded.
    pub categories: Vec<(SemanticCategory, Option<String>)>,
    pub unit: Option<UnitRecord>,
    pub parameter: Option<ParameterRecord>,
}

impl Inspection {
    fn new(store: &LexicalStore, lexeme: Lexeme) -> Self {
        let word = lexeme.word.as_str();
        // the word itself, then each reading's dictionary form
        let names: Vec<&str> = std::iter::once(word)
            .chain(lexeme.variants.iter().map(|v| v.root.canonical.as_str()))
            .collect();

        let mut categories: Vec<(SemanticCategory, Option<String>)> = Vec::new();
        for category in lexeme.variants.iter().flat_map(|v| v.root.categories()) {
            if categories.iter().all(|(known, _)| known != category) {
                let description = store.category_description(category).map(str::to_string);
                categories.push((category.clone(), description));
            }
        }

        let unit = names
            .iter()
            .find_map(|name| store.unit_by_name(name))
            .or_else(|| store.unit_by_atom(word))
            .cloned();
        let parameter = names.iter().find_map(|name| store.parameter(name)).cloned();

        Self {
            synonym_of: store.canonical_synonym(word).map(str::to_string),
            categories,
            unit,
            parameter,
            lexeme,
        }
    }
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_unknown() {
            write!(f, "{}: unknown part of speech", self.lexeme.word)?;
        } else {
            write!(f, "{}:", self.lexeme.word)?;
            for variant in &self.lexeme.variants {
                write!(f, "\n  {} ({})", variant, variant.table.name())?;
            }
        }
        if let Some(canonical) = &self.synonym_of {
            write!(f, "\n  synonym of {}", canonical)?;
        }
        for (category, description) in &self.categories {
            match description {
                Some(description) => write!(f, "\n  category {} ({})", category, description)?,
                None => write!(f, "\n  category {}", category)?,
            }
        }
        if let Some(unit) = &self.unit {
            write!(f, "\n  unit {}", unit)?;
        }
        if let Some(parameter) = &self.parameter {
            write!(f, "\n  parameter {}", parameter)?;
        }
        Ok(())
    }
}

impl Processor {
    /// Looks words up one by one, without linking. Words are lower-cased first.
    pub fn inspect<S: AsRef<str>>(&self, words: &[S]) -> Vec<Inspection> {
        let words: Vec<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        let store = self.store();
        SentenceAnalyzer::new(store)
            .analyze(&words)
            .lexemes
            .into_iter()
            .map(|lexeme| Inspection::new(store, lexeme))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use slovo_morph::fixtures;

    fn inspect(word: &str) -> Inspection {
        let processor = Processor::new(Arc::new(fixtures::store()));
        processor.inspect(&[word]).remove(0)
    }

    #[test]
    fn test_category_descriptions_are_shown() {
        let stone = inspect("Камня");
        assert_eq!(
            stone.categories,
            vec![(SemanticCategory::from("МАТ"), Some("материал".to_string()))]
        );
        assert_eq!(
            stone.to_string(),
            "камня:\n  камень, СУ, -ня СУ МР РП ЕЧ (entities)\n  category МАТ (материал)"
        );
    }

    #[test]
    fn test_categories_are_listed_once() {
        // nominative and accusative readings share one root
        let house = inspect("дом");
        assert_eq!(house.lexeme.variants.len(), 2);
        assert_eq!(house.categories.len(), 1);
    }

    #[test]
    fn test_synonym_is_reported() {
        let building = inspect("здание");
        assert!(building.lexeme.is_unknown());
        assert_eq!(building.synonym_of.as_deref(), Some("дом"));
        assert_eq!(building.to_string(), "здание: unknown part of speech\n  synonym of дом");
    }

    #[test]
    fn test_units_by_name_or_atom() {
        let by_name = inspect("метр");
        assert_eq!(by_name.unit.as_ref().map(|u| u.atom.as_str()), Some("m"));
        assert!(by_name.to_string().ends_with("\n  unit m м метр"));

        let by_atom = inspect("kg");
        assert_eq!(by_atom.unit.as_ref().map(|u| u.name.as_str()), Some("килограмм"));
    }

    #[test]
    fn test_parameter_is_reported() {
        let mass = inspect("масса");
        assert_eq!(mass.parameter.as_ref().map(|p| p.atom.as_str()), Some("mass"));
        assert!(mass.unit.is_none());
        assert!(mass.to_string().ends_with("\n  parameter mass масса"));
    }

    #[test]
    fn test_non_inflected_table_is_named() {
        assert_eq!(inspect("из").to_string(), "из:\n  из, ПР (non-inflected)");
    }
}
