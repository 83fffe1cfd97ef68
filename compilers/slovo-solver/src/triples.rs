use std::fmt;

use serde::Serialize;
use slovo_protocol::{ActantRole, Case, Gender, Government, Number, SemanticCategory};
use slovo_sentence::Sentence;

/// One fact read off a linked sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Triple {
    Predicate {
        canonical: String,
    },
    Actant {
        entity: String,
        role: ActantRole,
        predicate: String,
        category: SemanticCategory,
        government: Government,
    },
    Characterizes {
        character: String,
        entity: String,
        gender: Gender,
        number: Number,
        case: Case,
    },
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Triple::Predicate { canonical } => write!(f, "(:predicate {})", canonical),
            Triple::Actant { entity, role, predicate, category, .. } => {
                write!(f, "({} :{} of {}) ({})", entity, role.name(), predicate, category)
            }
            Triple::Characterizes { character, entity, gender, number, case } => {
                write!(f, "({} :characterizes {}) ({} {} {})", character, entity, gender, number, case)
            }
        }
    }
}

/// Projects the bindings of a linked sentence into triples, in lexeme order.
pub fn emit(sentence: &Sentence) -> Vec<Triple> {
    let mut triples = Vec::new();

    for variant in sentence.variants() {
        if variant.root.is_predicate() {
            triples.push(Triple::Predicate { canonical: variant.root.canonical.clone() });
        }

        if let Some(binding) = &variant.actant {
            triples.push(Triple::Actant {
                entity: variant.root.canonical.clone(),
                role: binding.actant.role,
                predicate: binding.predicate.canonical.clone(),
                category: binding.category.clone(),
                government: binding.government.clone(),
            });
        }

        if let (Some(entity), Some(features)) = (&variant.characterized, variant.features()) {
            if let (Some(gender), Some(number), Some(case)) =
                (features.gender(), features.number(), features.case())
            {
                triples.push(Triple::Characterizes {
                    character: variant.root.canonical.clone(),
                    entity: entity.canonical.clone(),
                    gender,
                    number,
                    case,
                });
            }
        }
    }
    triples
}

#[cfg(test)]
mod tests {
    use super::*;
    use slovo_morph::fixtures;
    use slovo_sentence::{link_actants, link_agreement, select_predicate, SentenceAnalyzer};

    fn linked(tokens: &[&str]) -> Sentence {
        let store = fixtures::store();
        let mut sentence = SentenceAnalyzer::new(&store).analyze(tokens);
        link_agreement(&mut sentence);
        if let Some(predicate) = select_predicate(&sentence) {
            link_actants(&mut sentence, &predicate);
        }
        sentence
    }

    #[test]
    fn test_construction_from_stone() {
        let triples = emit(&linked(&["строительство", "дома", "из", "камня"]));
        let rendered: Vec<String> = triples.iter().map(ToString::to_string).collect();

        // nominative and accusative readings of the predicate word
        assert_eq!(
            rendered,
            vec![
                "(:predicate строительство)",
                "(:predicate строительство)",
                "(дом :object of строительство) (СТР)",
                "(камень :material of строительство) (МАТ)",
            ]
        );
        match &triples[3] {
            Triple::Actant { government, .. } => assert_eq!(government.to_string(), "из РП"),
            other => panic!("expected an actant, got {}", other),
        }
    }

    #[test]
    fn test_characterizes() {
        let triples = emit(&linked(&["красного", "дома"]));
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].to_string(), "(красный :characterizes дом) (МР ЕЧ РП)");
    }

    #[test]
    fn test_nothing_bound_emits_nothing() {
        assert!(emit(&linked(&["дом", "из", "кошка"])).is_empty());
        assert!(emit(&Sentence::default()).is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let triple = Triple::Predicate { canonical: "строить".to_string() };
        let json = serde_json::to_value(&triple).unwrap();
        assert_eq!(json["kind"], "predicate");
        assert_eq!(json["canonical"], "строить");
    }
}
