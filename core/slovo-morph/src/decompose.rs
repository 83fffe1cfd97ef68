use std::sync::Arc;

use slovo_protocol::{FlexionEntry, RootEntry, RootTable};
use tracing::trace;

use crate::store::LexicalStore;

/// Shortest quasi-stem tried, in characters.
pub const MIN_STEM_CHARS: usize = 2;

/// One stem + suffix reading of a surface word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub root: Arc<RootEntry>,
    pub flexion: Arc<FlexionEntry>,
}

impl Analysis {
    /// The surface form this analysis spells.
    pub fn surface(&self) -> String {
        let mut word = self.root.stem.clone();
        word.push_str(&self.flexion.suffix);
        word
    }
}

/// Splits `word` into a known stem and a known suffix.
///
/// Split points are tried from the whole word (empty suffix) down to a stem of
/// [`MIN_STEM_CHARS`] characters. Every root table is consulted at each split and
/// every compatible (root, flexion) pair is collected, but the search stops at
/// the first split point that produced anything: the longest known stem wins
/// over longer suffixes. An empty result means the word is unknown to the
/// inflected tables.
pub fn analyze(store: &LexicalStore, word: &str) -> Vec<Analysis> {
    // boundaries[k] is the byte offset after k characters
    let mut boundaries: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
    boundaries.push(word.len());
    let char_count = boundaries.len() - 1;

    let mut analyses = Vec::new();
    for stem_chars in (MIN_STEM_CHARS..=char_count).rev() {
        let (stem, suffix) = word.split_at(boundaries[stem_chars]);

        for table in RootTable::INFLECTED {
            for root in store.roots(table, stem) {
                let Some(class) = &root.inflection_class else {
                    continue;
                };
                for flexion in store.find(suffix, root.part_of_speech, class) {
                    analyses.push(Analysis {
                        root: Arc::clone(root),
                        flexion: Arc::clone(flexion),
                    });
                }
            }
        }

        if !analyses.is_empty() {
            trace!(word, stem, suffix, count = analyses.len(), "productive split");
            return analyses;
        }
    }

    trace!(word, "no stem/suffix split matched");
    analyses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use proptest::prelude::*;
    use slovo_protocol::{Case, Features, Gender, Number, PartOfSpeech};

    #[test]
    fn test_zero_suffix_is_tried_first() {
        let store = fixtures::store();
        let analyses = analyze(&store, "дом");

        assert_eq!(analyses.len(), 2);
        assert!(analyses.iter().all(|a| a.root.stem == "дом" && a.flexion.suffix.is_empty()));
        let cases: Vec<_> = analyses.iter().filter_map(|a| a.flexion.features.case()).collect();
        assert_eq!(cases, vec![Case::Nominative, Case::Accusative]);
    }

    #[test]
    fn test_longest_stem_shadows_shorter_split() {
        let store = fixtures::store();
        // "до" + "ма" is also a valid split, but "дом" + "а" is longer
        let analyses = analyze(&store, "дома");

        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].root.stem, "дом");
        assert_eq!(analyses[0].flexion.suffix, "а");
        assert_eq!(
            analyses[0].flexion.features,
            Features::Nominal { gender: Gender::Masculine, case: Case::Genitive, number: Number::Singular }
        );
    }

    #[test]
    fn test_homographs_across_tables_are_all_kept() {
        let store = fixtures::store();
        let analyses = analyze(&store, "красного");

        assert_eq!(analyses.len(), 2);
        assert!(analyses.iter().all(|a| a.root.part_of_speech == PartOfSpeech::FullAdjective));
        let genders: Vec<_> = analyses.iter().filter_map(|a| a.flexion.features.gender()).collect();
        assert_eq!(genders, vec![Gender::Masculine, Gender::Neuter]);
    }

    #[test]
    fn test_participle_and_verb_stems_share_a_spelling() {
        let store = fixtures::store();

        let verb = analyze(&store, "строит");
        assert_eq!(verb.len(), 1);
        assert_eq!(verb[0].root.part_of_speech, PartOfSpeech::Verb);
        assert!(verb[0].root.is_predicate());

        let participle = analyze(&store, "строя");
        assert_eq!(participle.len(), 1);
        assert_eq!(participle[0].root.part_of_speech, PartOfSpeech::Participle);
    }

    #[test]
    fn test_unknown_and_too_short_words() {
        let store = fixtures::store();
        assert!(analyze(&store, "кошка").is_empty());
        assert!(analyze(&store, "д").is_empty());
        assert!(analyze(&store, "").is_empty());
    }

    proptest! {
        #[test]
        fn test_analyses_reconstruct_the_word(
            word in "(дом|город|кам|строительств|красн|стро|до)(а|у|ом|е|ы|ов|ень|ня|ню|нем|не|о|ма|ый|ого|ое|ая|ит|ят|ил|ила|я)?"
        ) {
            let store = fixtures::store();
            for analysis in analyze(&store, &word) {
                prop_assert_eq!(analysis.surface(), word.clone());
                let class = analysis.root.inflection_class.clone().expect("inflected root");
                prop_assert!(analysis.flexion.classes.contains(&class));
                prop_assert_eq!(analysis.flexion.part_of_speech, analysis.root.part_of_speech);
            }
        }

        #[test]
        fn test_all_analyses_share_one_split(word in "[а-я]{0,12}") {
            let store = fixtures::store();
            let analyses = analyze(&store, &word);
            if let Some(first) = analyses.first() {
                let stem_len = first.root.stem.len();
                prop_assert!(analyses.iter().all(|a| a.root.stem.len() == stem_len));
                prop_assert!(first.root.stem.chars().count() >= MIN_STEM_CHARS);
            }
        }
    }
}
