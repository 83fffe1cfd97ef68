use rkyv::{Archive, Deserialize, Serialize};
use crate::error::ProtocolError;
use crate::ids::RootId;
use crate::morphology::{Case, Features, PartOfSpeech};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Zaliznyak-style paradigm index (e.g. `1a`, `2*a`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[archive(check_bytes)]
pub struct InflectionClass(pub String);

/// Semantic category code (e.g. `МАТ` for materials).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[archive(check_bytes)]
pub struct SemanticCategory(pub String);

macro_rules! string_newtype {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(String::from(value))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_newtype!(InflectionClass);
string_newtype!(SemanticCategory);

coded_enum! {
    /// Semantic role of an argument slot in a valency frame.
    ActantRole as "actant role" {
        Agent => "A",
        Object => "O",
        Recipient => "R",
        Locative => "L",
        Instrument => "I",
        Material => "M",
        Source => "S",
        Goal => "G",
        Time => "T",
    }
}

impl ActantRole {
    pub const fn name(self) -> &'static str {
        match self {
            ActantRole::Agent => "agent",
            ActantRole::Object => "object",
            ActantRole::Recipient => "recipient",
            ActantRole::Locative => "locative",
            ActantRole::Instrument => "instrument",
            ActantRole::Material => "material",
            ActantRole::Source => "source",
            ActantRole::Goal => "goal",
            ActantRole::Time => "time",
        }
    }
}

/// One syntactic realisation of an actant: an optional preposition plus a case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Government {
    pub preposition: Option<String>,
    pub case: Case,
}

impl fmt::Display for Government {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.preposition {
            Some(preposition) => write!(f, "{} {}", preposition, self.case),
            None => write!(f, "{}", self.case),
        }
    }
}

/// An argument slot of a predicate's valency model.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ActantFrame {
    pub role: ActantRole,
    /// Alternatives are all tried; their order only matters for display.
    pub governments: Vec<Government>,
    pub categories: Vec<SemanticCategory>,
}

impl ActantFrame {
    /// First accepted category (in frame order) that the candidate carries.
    pub fn shared_category<'a>(&'a self, candidate: &[SemanticCategory]) -> Option<&'a SemanticCategory> {
        self.categories.iter().find(|c| candidate.contains(c))
    }
}

impl fmt::Display for ActantFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} ( ", self.role)?;
        for (i, government) in self.governments.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", government)?;
        }
        f.write_str(" ) ( ")?;
        for (i, category) in self.categories.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", category)?;
        }
        f.write_str(" ) )")
    }
}

/// Which root table an entry was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum RootTable {
    Entities = 0,
    Characters = 1,
    Verbs = 2,
    NonInflected = 3,
}

impl RootTable {
    /// Tables searched by stem decomposition, in lookup order.
    pub const INFLECTED: [RootTable; 3] = [RootTable::Entities, RootTable::Characters, RootTable::Verbs];

    pub const fn name(self) -> &'static str {
        match self {
            RootTable::Entities => "entities",
            RootTable::Characters => "characters",
            RootTable::Verbs => "verbs",
            RootTable::NonInflected => "non-inflected",
        }
    }
}

/// A stem record as written in a root dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct RootRecord {
    pub stem: String,
    /// Flexion of the dictionary form; empty for a zero ending.
    pub flexion: String,
    pub part_of_speech: PartOfSpeech,
    pub inflection_class: InflectionClass,
    /// Only entity records carry categories.
    pub categories: Vec<SemanticCategory>,
}

impl RootRecord {
    pub fn canonical(&self) -> String {
        let mut canonical = self.stem.clone();
        canonical.push_str(&self.flexion);
        canonical
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NonInflectedRecord {
    pub surface: String,
    pub part_of_speech: PartOfSpeech,
}

/// A dictionary-known suffix.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct FlexionEntry {
    pub suffix: String,
    pub part_of_speech: PartOfSpeech,
    pub features: Features,
    pub classes: Vec<InflectionClass>,
}

impl FlexionEntry {
    pub fn new(
        suffix: impl Into<String>,
        part_of_speech: PartOfSpeech,
        features: Features,
        classes: Vec<InflectionClass>,
    ) -> Result<Self, ProtocolError> {
        features.check(part_of_speech)?;
        Ok(Self { suffix: suffix.into(), part_of_speech, features, classes })
    }

    pub fn accepts(&self, part_of_speech: PartOfSpeech, class: &InflectionClass) -> bool {
        self.part_of_speech == part_of_speech && self.classes.contains(class)
    }
}

impl fmt::Display for FlexionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{} {} {}", self.suffix, self.part_of_speech, self.features)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct PredicateRecord {
    pub canonical: String,
    pub frames: Vec<ActantFrame>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct SynonymSet {
    pub canonical: String,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CategoryRecord {
    pub code: SemanticCategory,
    pub description: String,
}

/// A unit of measurement: knowledge-base atom, Russian abbreviation, full name.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct UnitRecord {
    pub atom: String,
    pub code: String,
    pub name: String,
}

impl fmt::Display for UnitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.atom, self.code, self.name)
    }
}

/// A measured parameter: knowledge-base atom and name.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ParameterRecord {
    pub atom: String,
    pub name: String,
}

impl fmt::Display for ParameterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.atom, self.name)
    }
}

/// Every table the engine reads, as loaded from the dictionary files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entities: Vec<RootRecord>,
    pub characters: Vec<RootRecord>,
    pub verbs: Vec<RootRecord>,
    pub flexions: Vec<FlexionEntry>,
    pub non_inflected: Vec<NonInflectedRecord>,
    pub predicates: Vec<PredicateRecord>,
    pub synonyms: Vec<SynonymSet>,
    /// Multi-word expressions, space separated.
    pub glued: Vec<String>,
    pub categories: Vec<CategoryRecord>,
    pub units: Vec<UnitRecord>,
    pub parameters: Vec<ParameterRecord>,
}

impl Lexicon {
    pub const VERSION: u32 = 2;

    pub fn records(&self, table: RootTable) -> &[RootRecord] {
        match table {
            RootTable::Entities => &self.entities,
            RootTable::Characters => &self.characters,
            RootTable::Verbs => &self.verbs,
            RootTable::NonInflected => &[],
        }
    }
}

/// Role-specific payload of a loaded root.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub enum Role {
    Entity { categories: Vec<SemanticCategory> },
    Character,
    Verb,
    Predicate { frames: Vec<ActantFrame> },
    NonInflected,
}

/// A root as held by the lexical store and copied into sentence variants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct RootEntry {
    pub id: RootId,
    pub table: RootTable,
    pub stem: String,
    pub part_of_speech: PartOfSpeech,
    /// `None` for non-inflected words.
    pub inflection_class: Option<InflectionClass>,
    pub canonical: String,
    pub role: Role,
}

impl RootEntry {
    pub fn is_predicate(&self) -> bool {
        matches!(self.role, Role::Predicate { .. })
    }

    pub fn is_entity(&self) -> bool {
        matches!(self.role, Role::Entity { .. })
    }

    pub fn is_character(&self) -> bool {
        matches!(self.role, Role::Character)
    }

    pub fn categories(&self) -> &[SemanticCategory] {
        match &self.role {
            Role::Entity { categories } => categories,
            _ => &[],
        }
    }

    pub fn frames(&self) -> &[ActantFrame] {
        match &self.role {
            Role::Predicate { frames } => frames,
            _ => &[],
        }
    }
}

impl fmt::Display for RootEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.canonical, self.part_of_speech)
    }
}
