use std::sync::Arc;

use slovo_protocol::{PartOfSpeech, RootEntry};
use tracing::debug;

use crate::Sentence;

/// Whether `candidate` takes over from the current best predicate.
///
/// Priority is verb > noun > participle, but only two comparisons are made, so
/// for some mixed inputs the result depends on scan order.
fn replaces(current: PartOfSpeech, candidate: PartOfSpeech) -> bool {
    (current == PartOfSpeech::Participle && candidate != PartOfSpeech::Participle)
        || (current == PartOfSpeech::Noun && candidate == PartOfSpeech::Verb)
}

/// Picks the governing predicate among all predicate readings of the sentence.
pub fn select_predicate(sentence: &Sentence) -> Option<Arc<RootEntry>> {
    let mut best: Option<&Arc<RootEntry>> = None;

    for variant in sentence.variants().filter(|v| v.root.is_predicate()) {
        match best {
            None => best = Some(&variant.root),
            Some(current) if replaces(current.part_of_speech, variant.root.part_of_speech) => {
                best = Some(&variant.root)
            }
            Some(_) => {}
        }
    }

    if let Some(predicate) = best {
        debug!(canonical = %predicate.canonical, pos = %predicate.part_of_speech, "predicate selected");
    }
    best.cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SentenceAnalyzer;
    use slovo_morph::fixtures;

    fn predicate_pos(tokens: &[&str]) -> Option<PartOfSpeech> {
        let store = fixtures::store();
        let sentence = SentenceAnalyzer::new(&store).analyze(tokens);
        select_predicate(&sentence).map(|p| p.part_of_speech)
    }

    #[test]
    fn test_no_predicate() {
        assert_eq!(predicate_pos(&["красного", "дома"]), None);
        assert_eq!(predicate_pos(&[]), None);
    }

    #[test]
    fn test_verb_beats_earlier_noun() {
        assert_eq!(predicate_pos(&["строительство", "строит"]), Some(PartOfSpeech::Verb));
    }

    #[test]
    fn test_noun_beats_earlier_participle() {
        assert_eq!(predicate_pos(&["строя", "строительство"]), Some(PartOfSpeech::Noun));
    }

    #[test]
    fn test_verb_is_kept_over_later_participle() {
        assert_eq!(predicate_pos(&["строит", "строя"]), Some(PartOfSpeech::Verb));
    }

    #[test]
    fn test_rule_is_asymmetric() {
        assert!(replaces(PartOfSpeech::Participle, PartOfSpeech::Noun));
        assert!(replaces(PartOfSpeech::Noun, PartOfSpeech::Verb));
        assert!(!replaces(PartOfSpeech::Verb, PartOfSpeech::Noun));
        assert!(!replaces(PartOfSpeech::Noun, PartOfSpeech::Participle));
        // an adjective-headed predicate is never displaced
        assert!(!replaces(PartOfSpeech::FullAdjective, PartOfSpeech::Verb));
    }
}
