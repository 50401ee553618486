//! Maps Jisho part-of-speech labels to short Japanese grammar codes.
//!
//! Labels arrive as English strings such as `"Godan verb with 'ru' ending"` or
//! `"Transitive verb"`. All checks are plain substring tests against the
//! comma-joined label list, so unknown labels simply produce no code.

/// Grammar code attached to a sense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    IAdjective,
    Noun,
    Adverb,
    NaAdjective,
    GodanTransitive,
    GodanIntransitive,
    IchidanTransitive,
    IchidanIntransitive,
    OtherVerb,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::IAdjective => "イ形",
            PosTag::Noun => "名",
            PosTag::Adverb => "副",
            PosTag::NaAdjective => "ナ形",
            PosTag::GodanTransitive => "他五",
            PosTag::GodanIntransitive => "自五",
            PosTag::IchidanTransitive => "他一",
            PosTag::IchidanIntransitive => "自一",
            PosTag::OtherVerb => "三类",
        }
    }
}

// Order matters: output codes follow this table, not the input order.
const WORD_CLASSES: [(&str, PosTag); 4] = [
    ("I-adjective", PosTag::IAdjective),
    ("Noun", PosTag::Noun),
    ("Adverb", PosTag::Adverb),
    ("Na-adjective", PosTag::NaAdjective),
];

// First match wins.
const VERB_CLASSES: [(&str, &str, PosTag); 4] = [
    ("Godan verb", "Transitive verb", PosTag::GodanTransitive),
    ("Godan verb", "Intransitive verb", PosTag::GodanIntransitive),
    ("Ichidan verb", "Transitive verb", PosTag::IchidanTransitive),
    ("Ichidan verb", "Intransitive verb", PosTag::IchidanIntransitive),
];

/// Resolve every code that applies to a comma-joined label string
fn tags(labels: &str) -> Vec<PosTag> {
    let mut tags: Vec<PosTag> = WORD_CLASSES
        .iter()
        .filter(|(needle, _)| labels.contains(needle))
        .map(|(_, tag)| *tag)
        .collect();

    // Case-sensitive, so "Adverb" also lands here.
    if labels.contains("verb") {
        tags.push(verb_tag(labels));
    }

    tags
}

fn verb_tag(labels: &str) -> PosTag {
    VERB_CLASSES
        .iter()
        .find(|(conjugation, transitivity, _)| {
            labels.contains(conjugation) && labels.contains(transitivity)
        })
        .map(|(_, _, tag)| *tag)
        .unwrap_or(PosTag::OtherVerb)
}

/// Classify a comma-joined label string into comma-joined codes.
/// Returns an empty string when nothing matches.
pub fn classify(labels: &str) -> String {
    tags(labels)
        .iter()
        .map(PosTag::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Verb code for a label string, `三类` when no conjugation/transitivity pair matches
pub fn classify_verb(labels: &str) -> &'static str {
    verb_tag(labels).as_str()
}

/// Classify the raw label list of one sense
pub fn classify_labels(labels: &[String]) -> String {
    classify(&labels.join(","))
}
