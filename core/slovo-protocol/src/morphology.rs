use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;
use core::fmt;

use crate::error::ProtocolError;

coded_enum! {
    PartOfSpeech as "part of speech" {
        Noun => "СУ",
        FullAdjective => "ПП",
        ShortAdjective => "КП",
        /// Adverbial participle.
        Participle => "ДЕ",
        Verb => "ГЛ",
        Preposition => "ПР",
        Conjunction => "СО",
        Adverb => "НА",
        Particle => "ЧА",
        Pronoun => "МС",
        Numeral => "ЧИ",
    }
}

impl PartOfSpeech {
    /// Parts of speech that take a flexion from the flexion table.
    pub const fn is_inflected(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun
                | PartOfSpeech::FullAdjective
                | PartOfSpeech::ShortAdjective
                | PartOfSpeech::Participle
                | PartOfSpeech::Verb
        )
    }
}

coded_enum! {
    Gender as "gender" {
        Masculine => "МР",
        Feminine => "ЖР",
        Neuter => "СР",
        /// Not distinguished (plural adjectives, present-tense verbs).
        Common => "НР",
    }
}

coded_enum! {
    Case as "case" {
        Nominative => "ИП",
        Genitive => "РП",
        Dative => "ДП",
        Accusative => "ВП",
        Instrumental => "ТП",
        Prepositional => "ПП",
    }
}

coded_enum! {
    Number as "number" {
        Singular => "ЕЧ",
        Plural => "МЧ",
    }
}

coded_enum! {
    Tense as "tense" {
        Past => "ПРШ",
        Present => "НСТ",
        Future => "БУД",
    }
}

coded_enum! {
    Person as "person" {
        First => "1Л",
        Second => "2Л",
        Third => "3Л",
        /// Past-tense forms carry no person.
        Unmarked => "НЛ",
    }
}

coded_enum! {
    Aspect as "aspect" {
        Perfective => "СВ",
        Imperfective => "НСВ",
    }
}

/// Morphological feature tuple of a flexion. The shape is fixed by the part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub enum Features {
    /// Nouns and full adjectives.
    Nominal { gender: Gender, case: Case, number: Number },
    /// Short adjectives.
    Short { gender: Gender, number: Number },
    Participle { tense: Tense, aspect: Aspect },
    Verbal {
        tense: Tense,
        person: Person,
        gender: Gender,
        number: Number,
        aspect: Aspect,
    },
}

impl Features {
    pub fn fits(&self, pos: PartOfSpeech) -> bool {
        matches!(
            (self, pos),
            (Features::Nominal { .. }, PartOfSpeech::Noun | PartOfSpeech::FullAdjective)
                | (Features::Short { .. }, PartOfSpeech::ShortAdjective)
                | (Features::Participle { .. }, PartOfSpeech::Participle)
                | (Features::Verbal { .. }, PartOfSpeech::Verb)
        )
    }

    pub fn check(&self, pos: PartOfSpeech) -> Result<(), ProtocolError> {
        if self.fits(pos) {
            Ok(())
        } else {
            Err(ProtocolError::ShapeMismatch { part_of_speech: pos.code() })
        }
    }

    pub fn case(&self) -> Option<Case> {
        match self {
            Features::Nominal { case, .. } => Some(*case),
            _ => None,
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        match self {
            Features::Nominal { gender, .. }
            | Features::Short { gender, .. }
            | Features::Verbal { gender, .. } => Some(*gender),
            Features::Participle { .. } => None,
        }
    }

    pub fn number(&self) -> Option<Number> {
        match self {
            Features::Nominal { number, .. }
            | Features::Short { number, .. }
            | Features::Verbal { number, .. } => Some(*number),
            Features::Participle { .. } => None,
        }
    }

    pub fn is_nominal(&self) -> bool {
        matches!(self, Features::Nominal { .. })
    }

    pub fn grammemes(&self) -> Grammemes {
        match *self {
            Features::Nominal { gender, case, number } => {
                Grammemes::from(gender) | Grammemes::from(case) | Grammemes::from(number)
            }
            Features::Short { gender, number } => Grammemes::from(gender) | Grammemes::from(number),
            Features::Participle { tense, aspect } => Grammemes::from(tense) | Grammemes::from(aspect),
            Features::Verbal { tense, person, gender, number, aspect } => {
                Grammemes::from(tense)
                    | Grammemes::from(person)
                    | Grammemes::from(gender)
                    | Grammemes::from(number)
                    | Grammemes::from(aspect)
            }
        }
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Features::Nominal { gender, case, number } => write!(f, "{} {} {}", gender, case, number),
            Features::Short { gender, number } => write!(f, "{} {}", gender, number),
            Features::Participle { tense, aspect } => write!(f, "{} {}", tense, aspect),
            Features::Verbal { tense, person, gender, number, aspect } => {
                write!(f, "{} {} {} {} {}", tense, person, gender, number, aspect)
            }
        }
    }
}

bitflags! {
    /// Flat grammeme mask. Used for concord checks, where only a projection of
    /// the feature tuple has to be compared.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct Grammemes: u32 {
        // Gender (Bits 0-3)
        const MASCULINE = 1;
        const FEMININE = 1 << 1;
        const NEUTER = 1 << 2;
        const COMMON_GENDER = 1 << 3;

        // Case (Bits 4-9)
        const NOMINATIVE = 1 << 4;
        const GENITIVE = 1 << 5;
        const DATIVE = 1 << 6;
        const ACCUSATIVE = 1 << 7;
        const INSTRUMENTAL = 1 << 8;
        const PREPOSITIONAL = 1 << 9;

        // Number (Bits 10-11)
        const SINGULAR = 1 << 10;
        const PLURAL = 1 << 11;

        // Person (Bits 12-15)
        const FIRST_PERSON = 1 << 12;
        const SECOND_PERSON = 1 << 13;
        const THIRD_PERSON = 1 << 14;
        const NO_PERSON = 1 << 15;

        // Tense (Bits 16-18)
        const PAST = 1 << 16;
        const PRESENT = 1 << 17;
        const FUTURE = 1 << 18;

        // Aspect (Bits 19-20)
        const PERFECTIVE = 1 << 19;
        const IMPERFECTIVE = 1 << 20;

        const GENDER = Self::MASCULINE.bits() | Self::FEMININE.bits() | Self::NEUTER.bits() | Self::COMMON_GENDER.bits();
        const CASE = Self::NOMINATIVE.bits() | Self::GENITIVE.bits() | Self::DATIVE.bits()
            | Self::ACCUSATIVE.bits() | Self::INSTRUMENTAL.bits() | Self::PREPOSITIONAL.bits();
        const NUMBER = Self::SINGULAR.bits() | Self::PLURAL.bits();

        /// Grammemes a modifier must share with its head noun.
        const AGREEMENT = Self::GENDER.bits() | Self::CASE.bits() | Self::NUMBER.bits();
    }
}

impl From<Gender> for Grammemes {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Masculine => Grammemes::MASCULINE,
            Gender::Feminine => Grammemes::FEMININE,
            Gender::Neuter => Grammemes::NEUTER,
            Gender::Common => Grammemes::COMMON_GENDER,
        }
    }
}

impl From<Case> for Grammemes {
    fn from(value: Case) -> Self {
        match value {
            Case::Nominative => Grammemes::NOMINATIVE,
            Case::Genitive => Grammemes::GENITIVE,
            Case::Dative => Grammemes::DATIVE,
            Case::Accusative => Grammemes::ACCUSATIVE,
            Case::Instrumental => Grammemes::INSTRUMENTAL,
            Case::Prepositional => Grammemes::PREPOSITIONAL,
        }
    }
}

impl From<Number> for Grammemes {
    fn from(value: Number) -> Self {
        match value {
            Number::Singular => Grammemes::SINGULAR,
            Number::Plural => Grammemes::PLURAL,
        }
    }
}

impl From<Person> for Grammemes {
    fn from(value: Person) -> Self {
        match value {
            Person::First => Grammemes::FIRST_PERSON,
            Person::Second => Grammemes::SECOND_PERSON,
            Person::Third => Grammemes::THIRD_PERSON,
            Person::Unmarked => Grammemes::NO_PERSON,
        }
    }
}

impl From<Tense> for Grammemes {
    fn from(value: Tense) -> Self {
        match value {
            Tense::Past => Grammemes::PAST,
            Tense::Present => Grammemes::PRESENT,
            Tense::Future => Grammemes::FUTURE,
        }
    }
}

impl From<Aspect> for Grammemes {
    fn from(value: Aspect) -> Self {
        match value {
            Aspect::Perfective => Grammemes::PERFECTIVE,
            Aspect::Imperfective => Grammemes::IMPERFECTIVE,
        }
    }
}
