use std::sync::Arc;

use slovo_protocol::Grammemes;
use tracing::trace;

use crate::components::Variant;
use crate::Sentence;

/// Gender, case and number concord between two noun-shaped readings.
pub fn agrees(character: &Variant, entity: &Variant) -> bool {
    match (character.features(), entity.features()) {
        (Some(a), Some(b)) if a.is_nominal() && b.is_nominal() => {
            a.grammemes() & Grammemes::AGREEMENT == b.grammemes() & Grammemes::AGREEMENT
        }
        _ => false,
    }
}

/// Binds each characteristic reading to the entity reading directly after it,
/// when the two agree. Nothing further away than the next position is tried.
/// Returns the number of bindings made.
pub fn link_agreement(sentence: &mut Sentence) -> usize {
    let mut bound = 0;

    for i in 1..sentence.lexemes.len() {
        let (left, right) = sentence.lexemes.split_at_mut(i);
        let (modifiers, heads) = (&mut left[i - 1], &right[0]);

        for character in modifiers.variants.iter_mut() {
            if !character.root.is_character() || character.characterized.is_some() {
                continue;
            }
            let head = heads
                .variants
                .iter()
                .filter(|v| v.root.is_entity())
                .find(|entity| agrees(character, entity));

            if let Some(head) = head {
                trace!(character = %character.word, entity = %head.word, "agreement bound");
                character.characterized = Some(Arc::clone(&head.root));
                bound += 1;
            }
        }
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SentenceAnalyzer;
    use slovo_morph::fixtures;

    fn linked(tokens: &[&str]) -> Sentence {
        let store = fixtures::store();
        let mut sentence = SentenceAnalyzer::new(&store).analyze(tokens);
        link_agreement(&mut sentence);
        sentence
    }

    fn heads(sentence: &Sentence, position: usize) -> Vec<String> {
        sentence.lexemes[position]
            .variants
            .iter()
            .filter_map(|v| v.characterized.as_ref().map(|e| e.canonical.clone()))
            .collect()
    }

    #[test]
    fn test_adjacent_agreeing_pair_binds() {
        let sentence = linked(&["красного", "дома"]);
        // only the masculine reading of "красного" agrees with "дома"
        assert_eq!(heads(&sentence, 0), vec!["дом".to_string()]);
        let bound = sentence.lexemes[0]
            .variants
            .iter()
            .find(|v| v.characterized.is_some())
            .and_then(|v| v.features().and_then(|f| f.gender()));
        assert_eq!(bound, Some(slovo_protocol::Gender::Masculine));
    }

    #[test]
    fn test_case_mismatch_does_not_bind() {
        let sentence = linked(&["красный", "дома"]);
        assert!(heads(&sentence, 0).is_empty());
    }

    #[test]
    fn test_only_adjacent_positions_are_considered() {
        let sentence = linked(&["красного", "из", "дома"]);
        assert!(heads(&sentence, 0).is_empty());
    }

    #[test]
    fn test_short_adjectives_never_agree() {
        // short forms have no case
        let sentence = linked(&["красна", "дома"]);
        assert!(heads(&sentence, 0).is_empty());
    }

    #[test]
    fn test_entity_must_follow_characteristic() {
        let sentence = linked(&["дом", "красный"]);
        assert!(heads(&sentence, 1).is_empty());
        assert!(heads(&sentence, 0).is_empty());
    }
}
