//! A small hand-built lexicon covering nouns, adjectives, a verb with its
//! participle, prepositions and two predicates.

use slovo_protocol::{
    ActantFrame, ActantRole, Aspect, Case, CategoryRecord, Features, FlexionEntry, Gender,
    Government, InflectionClass, Lexicon, NonInflectedRecord, Number, PartOfSpeech, Person,
    ParameterRecord, PredicateRecord, RootRecord, SemanticCategory, SynonymSet, Tense, UnitRecord,
};

use crate::LexicalStore;

pub fn root(stem: &str, flexion: &str, pos: PartOfSpeech, class: &str, categories: &[&str]) -> RootRecord {
    RootRecord {
        stem: stem.to_string(),
        flexion: flexion.to_string(),
        part_of_speech: pos,
        inflection_class: InflectionClass::from(class),
        categories: categories.iter().map(|c| SemanticCategory::from(*c)).collect(),
    }
}

pub fn nominal(gender: Gender, case: Case, number: Number) -> Features {
    Features::Nominal { gender, case, number }
}

pub fn flexion(suffix: &str, pos: PartOfSpeech, features: Features, classes: &[&str]) -> FlexionEntry {
    FlexionEntry {
        suffix: suffix.to_string(),
        part_of_speech: pos,
        features,
        classes: classes.iter().map(|c| InflectionClass::from(*c)).collect(),
    }
}

pub fn frame(role: ActantRole, governments: &[(Option<&str>, Case)], categories: &[&str]) -> ActantFrame {
    ActantFrame {
        role,
        governments: governments
            .iter()
            .map(|(preposition, case)| Government {
                preposition: preposition.map(str::to_string),
                case: *case,
            })
            .collect(),
        categories: categories.iter().map(|c| SemanticCategory::from(*c)).collect(),
    }
}

fn noun_paradigm(class: &str, gender: Gender, endings: &[(&str, Case, Number)]) -> Vec<FlexionEntry> {
    endings
        .iter()
        .map(|(suffix, case, number)| {
            flexion(suffix, PartOfSpeech::Noun, nominal(gender, *case, *number), &[class])
        })
        .collect()
}

pub fn lexicon() -> Lexicon {
    use Case::*;
    use Gender::*;
    use Number::*;
    use PartOfSpeech::*;

    let mut flexions = Vec::new();
    flexions.extend(noun_paradigm(
        "1a",
        Masculine,
        &[
            ("", Nominative, Singular),
            ("", Accusative, Singular),
            ("а", Genitive, Singular),
            ("у", Dative, Singular),
            ("ом", Instrumental, Singular),
            ("е", Prepositional, Singular),
            ("ы", Nominative, Plural),
            ("ов", Genitive, Plural),
        ],
    ));
    flexions.extend(noun_paradigm(
        "2*a",
        Masculine,
        &[
            ("ень", Nominative, Singular),
            ("ень", Accusative, Singular),
            ("ня", Genitive, Singular),
            ("ню", Dative, Singular),
            ("нем", Instrumental, Singular),
            ("не", Prepositional, Singular),
        ],
    ));
    flexions.extend(noun_paradigm(
        "с1a",
        Neuter,
        &[
            ("о", Nominative, Singular),
            ("о", Accusative, Singular),
            ("а", Genitive, Singular),
            ("у", Dative, Singular),
            ("ом", Instrumental, Singular),
            ("е", Prepositional, Singular),
        ],
    ));
    // Only reachable through the shorter stem "до"; shadowed by "дом".
    flexions.push(flexion("ма", Noun, nominal(Masculine, Genitive, Singular), &["x"]));

    for (suffix, gender, case) in [
        ("ый", Masculine, Nominative),
        ("ого", Masculine, Genitive),
        ("ом", Masculine, Prepositional),
        ("ое", Neuter, Nominative),
        ("ого", Neuter, Genitive),
        ("ая", Feminine, Nominative),
    ] {
        flexions.push(flexion(suffix, FullAdjective, nominal(gender, case, Singular), &["п1a"]));
    }
    for (suffix, gender, number) in [
        ("", Masculine, Singular),
        ("а", Feminine, Singular),
        ("о", Neuter, Singular),
        ("ы", Common, Plural),
    ] {
        flexions.push(flexion(suffix, ShortAdjective, Features::Short { gender, number }, &["п1a"]));
    }
    for (suffix, tense, person, gender, number) in [
        ("ит", Tense::Present, Person::Third, Common, Singular),
        ("ят", Tense::Present, Person::Third, Common, Plural),
        ("ил", Tense::Past, Person::Unmarked, Masculine, Singular),
        ("ила", Tense::Past, Person::Unmarked, Feminine, Singular),
    ] {
        flexions.push(flexion(
            suffix,
            Verb,
            Features::Verbal { tense, person, gender, number, aspect: Aspect::Imperfective },
            &["4a"],
        ));
    }
    flexions.push(flexion(
        "я",
        Participle,
        Features::Participle { tense: Tense::Present, aspect: Aspect::Imperfective },
        &["4a"],
    ));

    Lexicon {
        version: Lexicon::VERSION,
        entities: vec![
            root("дом", "", Noun, "1a", &["СТР"]),
            root("город", "", Noun, "1a", &["МЕС"]),
            root("кам", "ень", Noun, "2*a", &["МАТ"]),
            root("строительств", "о", Noun, "с1a", &["ДЕЙ"]),
            root("до", "", Noun, "x", &["МЕС"]),
        ],
        characters: vec![
            root("красн", "ый", FullAdjective, "п1a", &[]),
            root("красн", "", ShortAdjective, "п1a", &[]),
        ],
        verbs: vec![
            root("стро", "ить", Verb, "4a", &[]),
            root("стро", "ить", Participle, "4a", &[]),
        ],
        flexions,
        non_inflected: ["из", "в", "на", "и"]
            .iter()
            .map(|w| NonInflectedRecord {
                surface: w.to_string(),
                part_of_speech: if *w == "и" { Conjunction } else { Preposition },
            })
            .collect(),
        predicates: vec![
            PredicateRecord {
                canonical: "строительство".to_string(),
                frames: vec![
                    frame(ActantRole::Object, &[(None, Genitive)], &["СТР"]),
                    frame(ActantRole::Material, &[(Some("из"), Genitive)], &["МАТ"]),
                    frame(
                        ActantRole::Locative,
                        &[(Some("в"), Prepositional), (Some("на"), Prepositional)],
                        &["МЕС"],
                    ),
                ],
            },
            PredicateRecord {
                canonical: "строить".to_string(),
                frames: vec![
                    frame(ActantRole::Object, &[(None, Accusative)], &["СТР"]),
                    frame(ActantRole::Material, &[(Some("из"), Genitive)], &["МАТ"]),
                ],
            },
        ],
        synonyms: vec![SynonymSet {
            canonical: "дом".to_string(),
            synonyms: vec!["здание".to_string()],
        }],
        glued: vec!["при помощи".to_string()],
        categories: vec![
            CategoryRecord { code: SemanticCategory::from("МАТ"), description: "материал".to_string() },
            CategoryRecord { code: SemanticCategory::from("СТР"), description: "строение".to_string() },
            CategoryRecord { code: SemanticCategory::from("МЕС"), description: "место".to_string() },
        ],
        units: [("kg", "кг", "килограмм"), ("m", "м", "метр")]
            .iter()
            .map(|(atom, code, name)| UnitRecord {
                atom: atom.to_string(),
                code: code.to_string(),
                name: name.to_string(),
            })
            .collect(),
        parameters: vec![ParameterRecord { atom: "mass".to_string(), name: "масса".to_string() }],
    }
}

pub fn store() -> LexicalStore {
    LexicalStore::new(lexicon())
}
