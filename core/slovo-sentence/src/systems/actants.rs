use std::sync::Arc;

use slovo_protocol::{RootEntry, TokenId};
use tracing::trace;

use crate::components::ActantBinding;
use crate::Sentence;

/// An empty preposition always precedes; otherwise the preposition must occur
/// at an earlier position than `position`.
fn precedes(words: &[(TokenId, String)], preposition: Option<&str>, position: TokenId) -> bool {
    match preposition {
        None => true,
        Some(preposition) => words
            .iter()
            .any(|(at, word)| at.precedes(position) && word == preposition),
    }
}

/// Binds entity readings to the actant slots of `predicate`.
///
/// A reading fills a slot when it carries one of the slot's categories, its
/// case matches one of the slot's alternatives, and that alternative's
/// preposition occurs before it. Slots are not exclusive: several readings
/// may fill the same one. A reading keeps the first slot it fills.
/// Returns the number of bindings made.
pub fn link_actants(sentence: &mut Sentence, predicate: &Arc<RootEntry>) -> usize {
    let words: Vec<(TokenId, String)> = sentence
        .lexemes
        .iter()
        .map(|l| (l.position, l.word.clone()))
        .collect();
    let mut bound = 0;

    for frame in predicate.frames() {
        for lexeme in sentence.lexemes.iter_mut() {
            let position = lexeme.position;
            for variant in lexeme.variants.iter_mut() {
                if variant.root.id == predicate.id || !variant.root.is_entity() || variant.actant.is_some() {
                    continue;
                }
                let Some(category) = frame.shared_category(variant.root.categories()) else {
                    continue;
                };
                let Some(case) = variant.case() else {
                    continue;
                };
                let government = frame
                    .governments
                    .iter()
                    .find(|g| g.case == case && precedes(&words, g.preposition.as_deref(), position));

                if let Some(government) = government {
                    trace!(
                        word = %variant.word,
                        at = %position,
                        role = frame.role.name(),
                        predicate = %predicate.canonical,
                        "actant bound"
                    );
                    variant.actant = Some(ActantBinding {
                        predicate: Arc::clone(predicate),
                        actant: frame.clone(),
                        category: category.clone(),
                        government: government.clone(),
                    });
                    bound += 1;
                }
            }
        }
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{select_predicate, SentenceAnalyzer, Variant};
    use slovo_morph::{fixtures, LexicalStore};
    use slovo_protocol::{ActantFrame, ActantRole, Case, PredicateRecord, SemanticCategory};

    fn linked(tokens: &[&str]) -> crate::Sentence {
        let store = fixtures::store();
        let mut sentence = SentenceAnalyzer::new(&store).analyze(tokens);
        let predicate = select_predicate(&sentence).expect("predicate");
        link_actants(&mut sentence, &predicate);
        sentence
    }

    /// Fixture lexicon with "строительство" taking only `frame`, and "камень"
    /// carrying `stone` as its categories.
    fn linked_with(frame: ActantFrame, stone: &[&str], tokens: &[&str]) -> crate::Sentence {
        let mut lexicon = fixtures::lexicon();
        lexicon.predicates = vec![PredicateRecord {
            canonical: "строительство".to_string(),
            frames: vec![frame],
        }];
        for record in lexicon.entities.iter_mut().filter(|r| r.stem == "кам") {
            record.categories = stone.iter().map(|c| SemanticCategory::from(*c)).collect();
        }
        let store = LexicalStore::new(lexicon);
        let mut sentence = SentenceAnalyzer::new(&store).analyze(tokens);
        let predicate = select_predicate(&sentence).expect("predicate");
        link_actants(&mut sentence, &predicate);
        sentence
    }

    fn bound_roles(sentence: &crate::Sentence, position: usize) -> Vec<ActantRole> {
        sentence.lexemes[position]
            .variants
            .iter()
            .filter_map(|v: &Variant| v.actant.as_ref().map(|b| b.actant.role))
            .collect()
    }

    #[test]
    fn test_construction_from_stone() {
        let sentence = linked(&["строительство", "дома", "из", "камня"]);

        assert_eq!(bound_roles(&sentence, 1), vec![ActantRole::Object]);
        assert_eq!(bound_roles(&sentence, 3), vec![ActantRole::Material]);

        let stone = sentence.lexemes[3].variants[0].actant.as_ref().unwrap();
        assert_eq!(stone.predicate.canonical, "строительство");
        assert_eq!(stone.category.as_str(), "МАТ");
        assert_eq!(stone.government.preposition.as_deref(), Some("из"));
        assert_eq!(stone.government.case, Case::Genitive);
    }

    #[test]
    fn test_preposition_must_come_first() {
        let sentence = linked(&["строительство", "камня", "из"]);
        assert!(bound_roles(&sentence, 1).is_empty());
    }

    #[test]
    fn test_case_and_category_both_required() {
        // "дом" in the nominative/accusative is not the genitive object
        let sentence = linked(&["строительство", "дом"]);
        assert!(bound_roles(&sentence, 1).is_empty());

        // a place in the genitive has no slot without "в"/"на"
        let sentence = linked(&["строительство", "города"]);
        assert!(bound_roles(&sentence, 1).is_empty());
    }

    #[test]
    fn test_slot_is_not_exclusive() {
        let sentence = linked(&["строительство", "дома", "дома"]);
        assert_eq!(bound_roles(&sentence, 1), vec![ActantRole::Object]);
        assert_eq!(bound_roles(&sentence, 2), vec![ActantRole::Object]);
    }

    #[test]
    fn test_alternative_prepositions() {
        let sentence = linked(&["строительство", "на", "городе"]);
        assert_eq!(bound_roles(&sentence, 2), vec![ActantRole::Locative]);
        let binding = sentence.lexemes[2].variants[0].actant.as_ref().unwrap();
        assert_eq!(binding.government.preposition.as_deref(), Some("на"));
    }

    #[test]
    fn test_first_matching_alternative_is_recorded() {
        // ( РП | из РП ): the bare genitive is listed first and matches too
        let frame = fixtures::frame(
            ActantRole::Material,
            &[(None, Case::Genitive), (Some("из"), Case::Genitive)],
            &["МАТ"],
        );
        let sentence = linked_with(frame, &["МАТ"], &["строительство", "из", "камня"]);

        let binding = sentence.lexemes[2].variants[0].actant.as_ref().unwrap();
        assert_eq!(binding.government.preposition, None);
        assert_eq!(binding.government.case, Case::Genitive);
    }

    #[test]
    fn test_first_frame_category_is_recorded() {
        let frame =
            fixtures::frame(ActantRole::Material, &[(Some("из"), Case::Genitive)], &["МАТ", "СТР"]);
        // the entity lists the same categories in the other order
        let sentence = linked_with(frame, &["СТР", "МАТ"], &["строительство", "из", "камня"]);

        let binding = sentence.lexemes[2].variants[0].actant.as_ref().unwrap();
        assert_eq!(binding.category.as_str(), "МАТ");
    }

    #[test]
    fn test_each_occurrence_gets_its_own_copy() {
        let mut sentence = linked(&["строительство", "дома", "дома"]);
        if let Some(binding) = sentence.lexemes[1].variants[0].actant.as_mut() {
            binding.actant.categories.clear();
        }
        let other = sentence.lexemes[2].variants[0].actant.as_ref().unwrap();
        assert_eq!(other.actant.categories.len(), 1);
    }

    #[test]
    fn test_precedes() {
        let words: Vec<(TokenId, String)> = ["из", "камня"]
            .iter()
            .enumerate()
            .map(|(i, w)| (TokenId::at(i), w.to_string()))
            .collect();
        assert!(precedes(&words, None, TokenId::at(0)));
        assert!(precedes(&words, Some("из"), TokenId::at(1)));
        assert!(!precedes(&words, Some("из"), TokenId::at(0)));
        assert!(!precedes(&words, Some("в"), TokenId::at(1)));
    }
}
