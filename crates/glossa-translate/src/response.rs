//! Parser for the translation engine's word payload.
//!
//! The payload is a deeply nested, positionally-indexed array where most
//! positions may be null or missing. Every index the parser reads is wrapped
//! in a named accessor so no call site touches a bare number.

use glossa_types::{Candidate, SenseDefinition};
use serde_json::Value;

/// Everything the engine reports about one word.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationData {
    pub transcription: Option<String>,
    pub primary: String,
    pub definitions: Vec<SenseDefinition>,
    pub examples: Vec<String>,
    pub candidates: Vec<Candidate>,
}

/// Parse the engine's word payload.
///
/// `translated_text` is the engine's whole-response translation; lowercased
/// it becomes the primary translation. Returns `None` when the payload has
/// fewer than four top-level entries, which is how the engine signals an
/// unknown word — the single hard failure. Everything below that is best
/// effort: an absent block leaves its section empty.
pub fn parse_translate_payload(raw: &Value, translated_text: &str) -> Option<TranslationData> {
    let payload = Payload::new(raw)?;
    let primary = translated_text.to_lowercase();

    let details = payload.details();

    let definitions = details
        .as_ref()
        .and_then(Details::definition_block)
        .map(parse_definitions)
        .unwrap_or_default();

    let examples = details
        .as_ref()
        .and_then(Details::example_block)
        .map(parse_examples)
        .unwrap_or_default();

    let mut candidates = details
        .as_ref()
        .and_then(Details::candidate_block)
        .map(parse_candidates)
        .unwrap_or_default();

    // Responses for obscure words often skip the candidate block while
    // still carrying a usable main translation; promote it to a single
    // catch-all candidate.
    if candidates.is_empty() && !primary.is_empty() {
        candidates.push(candidate_from_primary(&primary));
    }

    Some(TranslationData {
        transcription: payload.transcription(),
        primary,
        definitions,
        examples,
        candidates,
    })
}

/// Named view over the payload's top-level positions.
struct Payload<'a>(&'a [Value]);

impl<'a> Payload<'a> {
    fn new(raw: &'a Value) -> Option<Self> {
        let entries = raw.as_array()?;
        (entries.len() >= 4).then_some(Self(entries))
    }

    /// Phonetic block at position 0; the transcription string at [0][0].
    fn transcription(&self) -> Option<String> {
        self.0[0].get(0)?.as_str().map(str::to_owned)
    }

    /// Word details (definitions, examples, candidates) at position 3.
    fn details(&self) -> Option<Details<'a>> {
        Some(Details(self.0[3].as_array()?))
    }
}

/// Named view over the details block's positions.
struct Details<'a>(&'a Vec<Value>);

impl<'a> Details<'a> {
    /// Definition groups at position 1.
    fn definition_block(&self) -> Option<&'a Value> {
        present(self.0.get(1))
    }

    /// Usage examples at position 2.
    fn example_block(&self) -> Option<&'a Value> {
        present(self.0.get(2))
    }

    /// Candidate translations at position 5.
    fn candidate_block(&self) -> Option<&'a Value> {
        present(self.0.get(5))
    }
}

/// A position may hold null or an empty container instead of being absent.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

/// Tags can be attached to the whole word, to a definition group, or to a
/// single definition. The first two kinds propagate down into every
/// definition they cover, so callers only ever deal with one flat tag list.
fn parse_definitions(block: &Value) -> Vec<SenseDefinition> {
    // Word-level tags at position 3.
    let word_tags = flatten_strings(block.get(3));

    list_at(block, 0)
        .iter()
        .flat_map(|group| parse_definition_group(group, &word_tags))
        .collect()
}

/// A definition group: part of speech at position 0, member definitions at
/// position 1, group tags at position 2.
fn parse_definition_group(group: &Value, word_tags: &[String]) -> Vec<SenseDefinition> {
    let part_of_speech = string_at(group, 0);
    let group_tags = flatten_strings(group.get(2));

    list_at(group, 1)
        .iter()
        .map(|definition| parse_definition(&part_of_speech, word_tags, &group_tags, definition))
        .collect()
}

/// One definition: text at position 0, example at position 1, extra tags at
/// position 4, synonym lists nested two levels down at position 5.
fn parse_definition(
    part_of_speech: &str,
    word_tags: &[String],
    group_tags: &[String],
    data: &Value,
) -> SenseDefinition {
    let mut tags: Vec<String> = word_tags.iter().chain(group_tags).cloned().collect();
    tags.extend(flatten_strings(data.get(4)));

    let synonyms = flatten_strings(data.get(5).and_then(|v| v.get(0)).and_then(|v| v.get(0)));

    SenseDefinition {
        part_of_speech: part_of_speech.to_string(),
        definition: string_at(data, 0),
        example: string_at(data, 1),
        tags,
        synonyms,
    }
}

/// Example sentences at [0][*][1]. The looked-up word comes highlighted with
/// literal bold markup; strip it by exact string removal, not HTML parsing.
fn parse_examples(block: &Value) -> Vec<String> {
    list_at(block, 0)
        .iter()
        .filter_map(|example| example.get(1)?.as_str())
        .map(strip_bold_tags)
        .collect()
}

fn strip_bold_tags(text: &str) -> String {
    text.replace("<b>", "").replace("</b>", "")
}

fn parse_candidates(block: &Value) -> Vec<Candidate> {
    list_at(block, 0).iter().flat_map(parse_candidate_group).collect()
}

/// One candidate group per part of speech (position 0); its members sit at
/// position 1.
fn parse_candidate_group(group: &Value) -> Vec<Candidate> {
    let part_of_speech = string_at(group, 0);

    list_at(group, 1)
        .iter()
        .map(|candidate| parse_candidate(&part_of_speech, candidate))
        .collect()
}

/// One candidate: translated text at position 0, reverse translations at
/// position 2, raw frequency rank at position 3.
fn parse_candidate(part_of_speech: &str, data: &Value) -> Candidate {
    let reverse_translations = list_at(data, 2)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect();

    Candidate {
        part_of_speech: part_of_speech.to_string(),
        translation: string_at(data, 0),
        reverse_translations,
        frequency: rank_frequency(data.get(3).and_then(Value::as_u64)),
    }
}

/// The engine ranks frequency 1 as common and 3 as rare; flip that so 1 is
/// rare and 3 is common. XOR with 2 swaps 1 and 3 and leaves 2 alone. A
/// missing or zero rank counts as 2.
pub fn rank_frequency(raw: Option<u64>) -> u8 {
    let raw = raw.filter(|v| *v != 0).unwrap_or(2);
    if raw == 2 { 2 } else { (raw ^ 2) as u8 }
}

fn candidate_from_primary(primary: &str) -> Candidate {
    Candidate {
        part_of_speech: String::new(),
        translation: primary.to_string(),
        reverse_translations: Vec::new(),
        frequency: 3,
    }
}

fn list_at(value: &Value, index: usize) -> &[Value] {
    value
        .get(index)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn string_at(value: &Value, index: usize) -> String {
    value
        .get(index)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Unwrap one level of nesting: each element sits inside its own
/// single-element list.
fn flatten_strings(value: Option<&Value>) -> Vec<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect()
}
