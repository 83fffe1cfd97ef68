use std::collections::HashMap;
use std::sync::Arc;

use slovo_protocol::{
    ActantFrame, FlexionEntry, InflectionClass, Lexicon, ParameterRecord, PartOfSpeech, Role,
    RootEntry, RootId, RootTable, SemanticCategory, UnitRecord,
};
use tracing::debug;

/// The loaded lexical tables. Built once, read-only afterwards, and safe to share
/// between threads analysing different sentences.
#[derive(Debug, Default)]
pub struct LexicalStore {
    roots: Vec<Arc<RootEntry>>,
    entities: HashMap<String, Vec<Arc<RootEntry>>>,
    characters: HashMap<String, Vec<Arc<RootEntry>>>,
    verbs: HashMap<String, Vec<Arc<RootEntry>>>,
    non_inflected: HashMap<String, Arc<RootEntry>>,
    /// Load order, used where scan order must be deterministic.
    flexion_list: Vec<Arc<FlexionEntry>>,
    flexions: HashMap<String, Vec<Arc<FlexionEntry>>>,
    predicates: HashMap<String, Vec<ActantFrame>>,
    synonyms: HashMap<String, String>,
    glued: Vec<String>,
    categories: HashMap<SemanticCategory, String>,
    /// Keyed by full name.
    units: HashMap<String, UnitRecord>,
    parameters: HashMap<String, ParameterRecord>,
}

impl LexicalStore {
    pub fn new(lexicon: Lexicon) -> Self {
        let mut store = LexicalStore {
            predicates: lexicon
                .predicates
                .iter()
                .map(|p| (p.canonical.clone(), p.frames.clone()))
                .collect(),
            ..LexicalStore::default()
        };

        for table in RootTable::INFLECTED {
            for record in lexicon.records(table) {
                let canonical = record.canonical();
                let role = match store.predicates.get(&canonical) {
                    Some(frames) => Role::Predicate { frames: frames.clone() },
                    None => match table {
                        RootTable::Entities => Role::Entity { categories: record.categories.clone() },
                        RootTable::Characters => Role::Character,
                        _ => Role::Verb,
                    },
                };
                let entry = Arc::new(RootEntry {
                    id: RootId::at(store.roots.len()),
                    table,
                    stem: record.stem.clone(),
                    part_of_speech: record.part_of_speech,
                    inflection_class: Some(record.inflection_class.clone()),
                    canonical,
                    role,
                });
                store
                    .stem_index_mut(table)
                    .entry(entry.stem.clone())
                    .or_default()
                    .push(Arc::clone(&entry));
                store.roots.push(entry);
            }
        }

        for record in lexicon.non_inflected {
            let entry = Arc::new(RootEntry {
                id: RootId::at(store.roots.len()),
                table: RootTable::NonInflected,
                stem: record.surface.clone(),
                part_of_speech: record.part_of_speech,
                inflection_class: None,
                canonical: record.surface.clone(),
                role: Role::NonInflected,
            });
            store.non_inflected.insert(record.surface, Arc::clone(&entry));
            store.roots.push(entry);
        }

        for flexion in lexicon.flexions {
            let flexion = Arc::new(flexion);
            store
                .flexions
                .entry(flexion.suffix.clone())
                .or_default()
                .push(Arc::clone(&flexion));
            store.flexion_list.push(flexion);
        }

        for set in lexicon.synonyms {
            for synonym in set.synonyms {
                store.synonyms.insert(synonym, set.canonical.clone());
            }
        }

        store.glued = lexicon.glued;
        store.categories = lexicon
            .categories
            .into_iter()
            .map(|c| (c.code, c.description))
            .collect();
        store.units = lexicon.units.into_iter().map(|u| (u.name.clone(), u)).collect();
        store.parameters = lexicon
            .parameters
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();

        debug!(
            roots = store.roots.len(),
            flexions = store.flexion_list.len(),
            predicates = store.predicates.len(),
            synonyms = store.synonyms.len(),
            glued = store.glued.len(),
            units = store.units.len(),
            "lexical store loaded"
        );
        store
    }

    fn stem_index(&self, table: RootTable) -> Option<&HashMap<String, Vec<Arc<RootEntry>>>> {
        match table {
            RootTable::Entities => Some(&self.entities),
            RootTable::Characters => Some(&self.characters),
            RootTable::Verbs => Some(&self.verbs),
            RootTable::NonInflected => None,
        }
    }

    fn stem_index_mut(&mut self, table: RootTable) -> &mut HashMap<String, Vec<Arc<RootEntry>>> {
        match table {
            RootTable::Entities => &mut self.entities,
            RootTable::Characters => &mut self.characters,
            // non-inflected entries never reach the stem indexes
            RootTable::Verbs | RootTable::NonInflected => &mut self.verbs,
        }
    }

    /// Roots of one inflected table sharing a stem (homographs are kept apart).
    pub fn roots(&self, table: RootTable, stem: &str) -> &[Arc<RootEntry>] {
        self.stem_index(table)
            .and_then(|index| index.get(stem))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every loaded root, in load order.
    pub fn all_roots(&self) -> &[Arc<RootEntry>] {
        &self.roots
    }

    pub fn non_inflected(&self, surface: &str) -> Option<&Arc<RootEntry>> {
        self.non_inflected.get(surface)
    }

    /// Flexions spelled `suffix` that are valid for the part of speech and class.
    pub fn find<'a>(
        &'a self,
        suffix: &str,
        part_of_speech: PartOfSpeech,
        class: &'a InflectionClass,
    ) -> impl Iterator<Item = &'a Arc<FlexionEntry>> + 'a {
        self.flexions
            .get(suffix)
            .into_iter()
            .flatten()
            .filter(move |f| f.accepts(part_of_speech, class))
    }

    /// Every loaded flexion, in load order.
    pub fn all_flexions(&self) -> &[Arc<FlexionEntry>] {
        &self.flexion_list
    }

    /// Canonical form for a word listed as a synonym.
    pub fn canonical_synonym(&self, word: &str) -> Option<&str> {
        self.synonyms.get(word).map(String::as_str)
    }

    /// Every (synonym, canonical) pair.
    pub fn synonyms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.synonyms.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    pub fn glued_expressions(&self) -> &[String] {
        &self.glued
    }

    pub fn category_description(&self, code: &SemanticCategory) -> Option<&str> {
        self.categories.get(code).map(String::as_str)
    }

    pub fn unit_by_name(&self, name: &str) -> Option<&UnitRecord> {
        self.units.get(name)
    }

    /// Linear scan; the table is small and keyed by name.
    pub fn unit_by_atom(&self, atom: &str) -> Option<&UnitRecord> {
        self.units.values().find(|u| u.atom == atom)
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterRecord> {
        self.parameters.get(name)
    }
}
