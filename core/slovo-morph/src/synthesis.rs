use std::str::FromStr;

use slovo_protocol::{Aspect, Case, Features, Gender, Number, PartOfSpeech, Person, Tense};
use tracing::trace;

use crate::error::MorphError;
use crate::store::LexicalStore;

/// Generates a word form by combining a root's stem with the flexion whose
/// feature tuple matches `features` exactly. No nearest-match fallback.
pub fn synthesize(
    store: &LexicalStore,
    canonical: &str,
    part_of_speech: PartOfSpeech,
    features: &Features,
) -> Option<String> {
    let roots = store
        .all_roots()
        .iter()
        .filter(|r| r.canonical == canonical && r.part_of_speech == part_of_speech);

    for root in roots {
        let Some(class) = &root.inflection_class else {
            continue;
        };
        let flexion = store
            .all_flexions()
            .iter()
            .find(|f| f.accepts(part_of_speech, class) && f.features == *features);
        if let Some(flexion) = flexion {
            trace!(canonical, stem = %root.stem, suffix = %flexion.suffix, "synthesized");
            return Some(format!("{}{}", root.stem, flexion.suffix));
        }
    }
    None
}

/// Feature values given by name, as they arrive from a command line or a
/// caller that has not validated them yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureRequest {
    pub gender: Option<Gender>,
    pub case: Option<Case>,
    pub number: Option<Number>,
    pub tense: Option<Tense>,
    pub person: Option<Person>,
    pub aspect: Option<Aspect>,
}

impl FeatureRequest {
    /// Parses `field=value` pairs. Values are dictionary codes (`РП`, `ЕЧ`, ...).
    pub fn parse<'a, I>(fields: I) -> Result<Self, MorphError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = FeatureRequest::default();
        for (field, value) in fields {
            match field {
                f if f == Gender::KIND => request.gender = Some(Gender::from_str(value)?),
                f if f == Case::KIND => request.case = Some(Case::from_str(value)?),
                f if f == Number::KIND => request.number = Some(Number::from_str(value)?),
                f if f == Tense::KIND => request.tense = Some(Tense::from_str(value)?),
                f if f == Person::KIND => request.person = Some(Person::from_str(value)?),
                f if f == Aspect::KIND => request.aspect = Some(Aspect::from_str(value)?),
                other => return Err(MorphError::UnknownField(other.to_string())),
            }
        }
        Ok(request)
    }

    /// Builds the feature tuple of the shape `part_of_speech` requires.
    pub fn into_features(self, part_of_speech: PartOfSpeech) -> Result<Features, MorphError> {
        fn need<T>(value: Option<T>, pos: PartOfSpeech, field: &'static str) -> Result<T, MorphError> {
            value.ok_or(MorphError::MissingFeature { part_of_speech: pos, field })
        }
        let pos = part_of_speech;

        Ok(match pos {
            PartOfSpeech::Noun | PartOfSpeech::FullAdjective => Features::Nominal {
                gender: need(self.gender, pos, Gender::KIND)?,
                case: need(self.case, pos, Case::KIND)?,
                number: need(self.number, pos, Number::KIND)?,
            },
            PartOfSpeech::ShortAdjective => Features::Short {
                gender: need(self.gender, pos, Gender::KIND)?,
                number: need(self.number, pos, Number::KIND)?,
            },
            PartOfSpeech::Participle => Features::Participle {
                tense: need(self.tense, pos, Tense::KIND)?,
                aspect: need(self.aspect, pos, Aspect::KIND)?,
            },
            PartOfSpeech::Verb => Features::Verbal {
                tense: need(self.tense, pos, Tense::KIND)?,
                person: need(self.person, pos, Person::KIND)?,
                gender: need(self.gender, pos, Gender::KIND)?,
                number: need(self.number, pos, Number::KIND)?,
                aspect: need(self.aspect, pos, Aspect::KIND)?,
            },
            other => return Err(MorphError::NotInflected(other)),
        })
    }
}

/// Validating front end to [`synthesize`]. An unrecognised part of speech,
/// field or value is an error; a valid request with no matching flexion is
/// `Ok(None)`.
pub fn synthesize_request<'a, I>(
    store: &LexicalStore,
    canonical: &str,
    part_of_speech: &str,
    fields: I,
) -> Result<Option<String>, MorphError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let pos = PartOfSpeech::from_str(part_of_speech)?;
    let features = FeatureRequest::parse(fields)?.into_features(pos)?;
    Ok(synthesize(store, canonical, pos, &features))
}
