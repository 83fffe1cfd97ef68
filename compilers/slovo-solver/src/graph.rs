use std::collections::HashMap;
use std::fmt;

use petgraph::dot::Dot;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use slovo_protocol::ActantRole;

use crate::triples::Triple;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// predicate -> entity
    Actant(ActantRole),
    /// character -> entity
    Characterizes,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Actant(role) => f.write_str(role.name()),
            Relation::Characterizes => f.write_str("characterizes"),
        }
    }
}

/// Canonical forms joined by the relations found across one or more sentences.
#[derive(Debug, Default)]
pub struct RelationGraph {
    graph: Graph<String, Relation, Directed>,
    index_map: HashMap<String, NodeIndex>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_triples<'a>(triples: impl IntoIterator<Item = &'a Triple>) -> Self {
        let mut graph = Self::new();
        for triple in triples {
            graph.add_triple(triple);
        }
        graph
    }

    pub fn add_concept(&mut self, canonical: &str) -> NodeIndex {
        if let Some(idx) = self.index_map.get(canonical) {
            return *idx;
        }
        let idx = self.graph.add_node(canonical.to_string());
        self.index_map.insert(canonical.to_string(), idx);
        idx
    }

    /// Adds the edge unless the same relation already joins the two concepts.
    pub fn add_relation(&mut self, from: &str, to: &str, rel: Relation) {
        let from_idx = self.add_concept(from);
        let to_idx = self.add_concept(to);

        let exists = self
            .graph
            .edges_connecting(from_idx, to_idx)
            .any(|edge| *edge.weight() == rel);
        if !exists {
            self.graph.add_edge(from_idx, to_idx, rel);
        }
    }

    pub fn add_triple(&mut self, triple: &Triple) {
        match triple {
            Triple::Predicate { canonical } => {
                self.add_concept(canonical);
            }
            Triple::Actant { entity, role, predicate, .. } => {
                self.add_relation(predicate, entity, Relation::Actant(*role));
            }
            Triple::Characterizes { character, entity, .. } => {
                self.add_relation(character, entity, Relation::Characterizes);
            }
        }
    }

    pub fn concept_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Entities filling the predicate's slots, in insertion order.
    pub fn actants_of(&self, predicate: &str) -> Vec<(ActantRole, &str)> {
        let Some(idx) = self.index_map.get(predicate) else {
            return Vec::new();
        };
        let mut actants: Vec<_> = self
            .graph
            .edges_directed(*idx, Direction::Outgoing)
            .filter_map(|edge| match edge.weight() {
                Relation::Actant(role) => Some((edge.id(), *role, self.graph[edge.target()].as_str())),
                Relation::Characterizes => None,
            })
            .collect();
        actants.sort_by_key(|(id, _, _)| id.index());
        actants.into_iter().map(|(_, role, entity)| (role, entity)).collect()
    }

    /// Characteristics agreeing with the entity, in insertion order.
    pub fn characteristics_of(&self, entity: &str) -> Vec<&str> {
        let Some(idx) = self.index_map.get(entity) else {
            return Vec::new();
        };
        let mut characters: Vec<_> = self
            .graph
            .edges_directed(*idx, Direction::Incoming)
            .filter(|edge| *edge.weight() == Relation::Characterizes)
            .map(|edge| (edge.id(), self.graph[edge.source()].as_str()))
            .collect();
        characters.sort_by_key(|(id, _)| id.index());
        characters.into_iter().map(|(_, character)| character).collect()
    }

    /// Graphviz rendering.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slovo_protocol::{Case, Gender, Government, Number, SemanticCategory};

    fn actant(entity: &str, role: ActantRole, predicate: &str) -> Triple {
        Triple::Actant {
            entity: entity.to_string(),
            role,
            predicate: predicate.to_string(),
            category: SemanticCategory::from("МАТ"),
            government: Government { preposition: None, case: Case::Genitive },
        }
    }

    fn characterizes(character: &str, entity: &str) -> Triple {
        Triple::Characterizes {
            character: character.to_string(),
            entity: entity.to_string(),
            gender: Gender::Masculine,
            number: Number::Singular,
            case: Case::Genitive,
        }
    }

    #[test]
    fn test_relations_by_direction() {
        let triples = vec![
            Triple::Predicate { canonical: "строительство".to_string() },
            actant("дом", ActantRole::Object, "строительство"),
            actant("камень", ActantRole::Material, "строительство"),
            characterizes("красный", "дом"),
            characterizes("новый", "дом"),
        ];
        let graph = RelationGraph::from_triples(&triples);

        assert_eq!(graph.concept_count(), 5);
        assert_eq!(
            graph.actants_of("строительство"),
            vec![(ActantRole::Object, "дом"), (ActantRole::Material, "камень")]
        );
        assert_eq!(graph.characteristics_of("дом"), vec!["красный", "новый"]);
        assert!(graph.characteristics_of("камень").is_empty());
        assert!(graph.actants_of("строить").is_empty());
    }

    #[test]
    fn test_duplicate_relations_collapse() {
        let triples = vec![
            actant("дом", ActantRole::Object, "строительство"),
            actant("дом", ActantRole::Object, "строительство"),
        ];
        let graph = RelationGraph::from_triples(&triples);
        assert_eq!(graph.relation_count(), 1);
    }

    #[test]
    fn test_dot_export() {
        let graph = RelationGraph::from_triples(&[actant("камень", ActantRole::Material, "строительство")]);
        let dot = graph.to_dot();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("строительство"));
        assert!(dot.contains("material"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
