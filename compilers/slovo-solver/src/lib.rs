pub mod archive;
pub mod error;
pub mod graph;
pub mod inspect;
pub mod pipeline;
pub mod triples;

pub use error::ProcessError;
pub use graph::{RelationGraph, Relation};
pub use inspect::Inspection;
pub use pipeline::{Processor, SentenceReport};
pub use triples::{emit, Triple};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use slovo_protocol::ActantRole;

    fn dictionaries() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/dictionaries")
    }

    #[test]
    fn test_sample_dictionaries_end_to_end() {
        let processor = Processor::from_dir(dictionaries()).unwrap();
        let reports = processor.process_text(
            "Строительство нового дома из камня. Строительство моста на городе при помощи кирпича.",
        );
        assert_eq!(reports.len(), 2);

        let first: Vec<String> = reports[0].triples.iter().map(ToString::to_string).collect();
        assert!(first.contains(&"(камень :material of строительство) (МАТ)".to_string()));
        assert!(first.contains(&"(дом :object of строительство) (СТР)".to_string()));
        assert!(first.contains(&"(новый :characterizes дом) (МР ЕЧ РП)".to_string()));

        let graph = RelationGraph::from_triples(reports.iter().flat_map(|r| r.triples.iter()));
        let actants = graph.actants_of("строительство");
        assert!(actants.contains(&(ActantRole::Object, "мост")));
        assert!(actants.contains(&(ActantRole::Locative, "город")));
        // glued into one non-inflected token, which no slot asks for
        assert_eq!(reports[1].tokens[4], "при_помощи");
        assert!(!actants.iter().any(|(_, entity)| *entity == "кирпич"));
        assert_eq!(graph.characteristics_of("дом"), vec!["новый"]);
    }

    #[test]
    fn test_sample_units_and_parameters() {
        let processor = Processor::from_dir(dictionaries()).unwrap();
        let store = processor.store();
        assert_eq!(store.unit_by_atom("m3").map(|u| u.name.as_str()), Some("кубический метр"));

        let found = processor.inspect(&["Тонна", "объём"]);
        assert_eq!(found[0].unit.as_ref().map(|u| u.code.as_str()), Some("т"));
        assert_eq!(found[1].parameter.as_ref().map(|p| p.atom.as_str()), Some("volume"));
    }

    #[test]
    fn test_compiled_archive_matches_text_dictionaries() {
        let lexicon = slovo_parser::load_dir(dictionaries()).unwrap();
        let bytes = archive::encode(&lexicon).unwrap();

        let from_text = Processor::from_dir(dictionaries()).unwrap();
        let from_archive = Processor::from_archive(&bytes).unwrap();

        let sentence = "Строительство здания из дерева.";
        let a = from_text.process_text(sentence);
        let b = from_archive.process_text(sentence);
        assert_eq!(a[0].triples, b[0].triples);
        assert!(a[0]
            .triples
            .contains(&Triple::Predicate { canonical: "строительство".to_string() }));
    }
}
