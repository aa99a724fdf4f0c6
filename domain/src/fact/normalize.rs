//! Normalization of remote responses into [`FactRecord`]s.
//!
//! Every remote variant funnels through here, whatever its wire format:
//!
//! 1. Structured facts (`[{title, content}]`) are validated and used directly
//! 2. Free text that is, or contains, a JSON array of fact objects is treated
//!    the same way (the array is located between the first `[` and last `]`)
//! 3. Numbered lists (`1. Title: content`) keep their titles
//! 4. Anything else is split into sentences; fragments under
//!    [`MIN_SENTENCE_CHARS`] characters are dropped
//!
//! Short results are padded with generic filler that mentions the country.

use super::entities::{FactRecord, MAX_FACTS, MIN_FACTS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fragments shorter than this are not considered facts
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Errors that make a remote response unusable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Response body was empty")]
    EmptyBody,

    #[error("No usable facts found in response")]
    NoUsableFacts,
}

/// A fact as it arrives from a remote source, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFact {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl RawFact {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

/// Raw payload returned by a remote fact source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResponse {
    /// Already-structured facts (e.g. a self-hosted backend)
    Structured(Vec<RawFact>),
    /// Model output text, possibly containing JSON
    Text(String),
}

/// Normalize a raw response into a batch of facts about `country`
pub fn normalize(raw: &RawResponse, country: &str) -> Result<Vec<FactRecord>, NormalizeError> {
    match raw {
        RawResponse::Structured(facts) => {
            let records = from_raw_facts(facts);
            if records.is_empty() {
                return Err(NormalizeError::NoUsableFacts);
            }
            Ok(fit(records, country, MAX_FACTS))
        }
        RawResponse::Text(body) => normalize_text(body, country),
    }
}

/// Normalize free text, trying JSON, then a numbered list, then sentences
pub fn normalize_text(body: &str, country: &str) -> Result<Vec<FactRecord>, NormalizeError> {
    if body.trim().is_empty() {
        return Err(NormalizeError::EmptyBody);
    }

    match extract_json_facts(body) {
        Some(records) if !records.is_empty() => return Ok(fit(records, country, MAX_FACTS)),
        Some(_) => return Err(NormalizeError::NoUsableFacts),
        None if is_json_array(body) => return Err(NormalizeError::NoUsableFacts),
        None => {}
    }

    let numbered = parse_numbered_facts(body);
    if !numbered.is_empty() {
        return Ok(fit(numbered, country, MIN_FACTS));
    }

    let sentences = split_sentences(body);
    if sentences.is_empty() {
        return Err(NormalizeError::NoUsableFacts);
    }
    Ok(fit(sentences, country, MIN_FACTS))
}

/// Validate raw facts: drop entries without content, default missing titles
pub fn from_raw_facts(facts: &[RawFact]) -> Vec<FactRecord> {
    let mut records = Vec::with_capacity(facts.len());
    for fact in facts {
        let content = fact.content.as_deref().map(str::trim).unwrap_or("");
        if content.is_empty() {
            continue;
        }
        let title = match fact.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => FactRecord::default_title(records.len() + 1),
        };
        records.push(FactRecord::new(title, content));
    }
    records
}

/// Locate and parse a JSON array of fact objects inside free text
pub fn extract_json_facts(text: &str) -> Option<Vec<FactRecord>> {
    let trimmed = text.trim();
    if let Ok(facts) = serde_json::from_str::<Vec<RawFact>>(trimmed) {
        return Some(from_raw_facts(&facts));
    }

    let start = trimmed.find('[')?;
    let end = trimmed.rfind(']')?;
    if start >= end {
        return None;
    }
    serde_json::from_str::<Vec<RawFact>>(&trimmed[start..=end])
        .ok()
        .map(|facts| from_raw_facts(&facts))
}

/// A body that is a JSON array of any shape, e.g. plain strings
fn is_json_array(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.starts_with('[') && serde_json::from_str::<Vec<serde_json::Value>>(trimmed).is_ok()
}

/// Parse `1. Title: content` style lists (at least two numbered lines)
pub fn parse_numbered_facts(text: &str) -> Vec<FactRecord> {
    let items: Vec<&str> = text.lines().filter_map(strip_list_number).collect();
    if items.len() < 2 {
        return Vec::new();
    }

    let mut records = Vec::new();
    for item in items {
        let item = item.replace("**", "");
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let (title, content) = match item.split_once(':') {
            Some((t, c)) if !t.trim().is_empty() && !c.trim().is_empty() => (
                t.trim().trim_matches(|c| c == '[' || c == ']').trim().to_string(),
                c.trim().to_string(),
            ),
            _ => (FactRecord::default_title(records.len() + 1), item.to_string()),
        };
        records.push(FactRecord::new(title, content));
        if records.len() == MIN_FACTS {
            break;
        }
    }
    records
}

/// Returns the text after a leading `N.` or `N)` marker, if any
fn strip_list_number(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    rest.strip_prefix('.')
        .or_else(|| rest.strip_prefix(')'))
        .map(str::trim)
}

/// Split free text into at most [`MIN_FACTS`] sentence facts titled "Fact N"
pub fn split_sentences(text: &str) -> Vec<FactRecord> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .take(MIN_FACTS)
        .enumerate()
        .map(|(i, s)| FactRecord::new(FactRecord::default_title(i + 1), format!("{}.", s)))
        .collect()
}

/// Pad `facts` with filler until it has at least `MIN_FACTS`, then cap at `max`
pub fn fit(mut facts: Vec<FactRecord>, country: &str, max: usize) -> Vec<FactRecord> {
    let mut filler = 0;
    while facts.len() < MIN_FACTS {
        facts.push(filler_fact(country, filler));
        filler += 1;
    }
    facts.truncate(max.max(MIN_FACTS));
    facts
}

/// Generic filler used when a source returns too few facts
pub fn filler_fact(country: &str, index: usize) -> FactRecord {
    match index % 3 {
        0 => FactRecord::new(
            format!("About {}", country),
            format!("{} has a rich history and culture worth exploring.", country),
        ),
        1 => FactRecord::new(
            format!("Discover {}", country),
            format!(
                "{} is home to traditions and landscapes that reward a closer look.",
                country
            ),
        ),
        _ => FactRecord::new(
            format!("More About {}", country),
            format!("{} has many stories that rarely make it into travel guides.", country),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_facts_used_directly() {
        let raw = RawResponse::Structured(vec![
            RawFact::new("One", "First fact content"),
            RawFact::new("Two", "Second fact content"),
            RawFact::new("Three", "Third fact content"),
            RawFact::new("Four", "Fourth fact content"),
            RawFact::new("Five", "Fifth fact content"),
        ]);
        let facts = normalize(&raw, "Peru").unwrap();
        assert_eq!(facts.len(), MAX_FACTS);
        assert_eq!(facts[0], FactRecord::new("One", "First fact content"));
        assert_eq!(facts[3].title, "Four");
    }

    #[test]
    fn test_structured_missing_title_defaults() {
        let raw = RawResponse::Structured(vec![
            RawFact {
                title: None,
                content: Some("Content without a title".to_string()),
            },
            RawFact {
                title: Some("  ".to_string()),
                content: Some("Another one".to_string()),
            },
        ]);
        let facts = normalize(&raw, "Peru").unwrap();
        assert_eq!(facts[0].title, "Fact 1");
        assert_eq!(facts[1].title, "Fact 2");
        // padded with filler
        assert_eq!(facts.len(), MIN_FACTS);
        assert!(facts[2].content.contains("Peru"));
    }

    #[test]
    fn test_structured_without_content_is_error() {
        let raw = RawResponse::Structured(vec![RawFact {
            title: Some("Only a title".to_string()),
            content: None,
        }]);
        assert_eq!(normalize(&raw, "Peru"), Err(NormalizeError::NoUsableFacts));
    }

    #[test]
    fn test_json_array_embedded_in_text() {
        let text = r#"Sure! Here are the facts:
[
  {"title": "Andes", "content": "Peru shares the Andes with six other countries."},
  {"title": "Potatoes", "content": "Thousands of potato varieties grow in Peru."},
  {"title": "Lines", "content": "The Nazca Lines are best seen from the air."},
  {"title": "Lake", "content": "Lake Titicaca sits on the border with Bolivia."}
]
Hope this helps."#;
        let facts = normalize_text(text, "Peru").unwrap();
        assert_eq!(facts.len(), 4);
        assert_eq!(facts[0].title, "Andes");
        assert_eq!(facts[3].title, "Lake");
    }

    #[test]
    fn test_invalid_json_falls_back_to_sentences() {
        let text = "[not json] Peru has one of the deepest canyons on Earth. Short. \
                    Machu Picchu was rediscovered by the wider world in 1911!";
        let facts = normalize_text(text, "Peru").unwrap();
        assert_eq!(facts.len(), 3);
        assert_eq!(facts[0].title, "Fact 1");
        assert!(facts[0].content.contains("deepest canyons"));
        assert!(facts[1].content.starts_with("Machu Picchu"));
    }

    #[test]
    fn test_json_without_fact_objects_is_unusable() {
        let wrong_keys = r#"[
            {"fact": "Japan has more than six thousand islands in total."},
            {"fact": "Japan has the oldest company still in operation."}
        ]"#;
        assert_eq!(
            normalize_text(wrong_keys, "Japan"),
            Err(NormalizeError::NoUsableFacts)
        );

        let strings = r#"["Japan has more than six thousand islands in total.",
                         "Japan has the oldest company still in operation."]"#;
        assert_eq!(
            normalize_text(strings, "Japan"),
            Err(NormalizeError::NoUsableFacts)
        );
    }

    #[test]
    fn test_numbered_list_keeps_titles() {
        let text = "1. **Salt Cathedral**: Colombia has a church carved inside a salt mine.\n\
                    2. [Emeralds]: Most of the world's emeralds come from Colombia.\n\
                    3. Flowers: Colombia is a major exporter of cut flowers.";
        let facts = normalize_text(text, "Colombia").unwrap();
        assert_eq!(facts.len(), 3);
        assert_eq!(facts[0].title, "Salt Cathedral");
        assert_eq!(facts[1].title, "Emeralds");
        assert_eq!(
            facts[2].content,
            "Colombia is a major exporter of cut flowers."
        );
    }

    #[test]
    fn test_single_numbered_line_is_not_a_list() {
        assert!(parse_numbered_facts("1. Only one item here").is_empty());
    }

    #[test]
    fn test_sentence_split_bounds() {
        let text = "  Iceland has no standing army and relies on NATO allies.   \
                    It runs almost entirely on renewable geothermal and hydro power? \
                    Yes. Icelanders often look up genealogy before a first date! \
                    Beer was banned there until the first of March, 1989.";
        let facts = split_sentences(text);
        assert_eq!(facts.len(), 3);
        for fact in &facts {
            assert!(!fact.content.is_empty());
            assert_eq!(fact.content, fact.content.trim());
        }
        assert_eq!(facts[2].title, "Fact 3");
    }

    #[test]
    fn test_short_fragments_discarded() {
        assert!(split_sentences("Too short. Also short! Tiny?").is_empty());
        assert_eq!(
            normalize_text("Too short. Also short!", "Chile"),
            Err(NormalizeError::NoUsableFacts)
        );
    }

    #[test]
    fn test_single_sentence_padded_with_filler() {
        let text = "Mongolia has more horses than people living in it. Ok.";
        let facts = normalize_text(text, "Mongolia").unwrap();
        assert_eq!(facts.len(), 3);
        assert_eq!(
            facts[0].content,
            "Mongolia has more horses than people living in it."
        );
        assert!(facts[1].content.contains("Mongolia"));
        assert!(facts[2].content.contains("Mongolia"));
        assert_ne!(facts[1], facts[2]);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(normalize_text("   \n", "Chile"), Err(NormalizeError::EmptyBody));
    }

    #[test]
    fn test_fit_truncates() {
        let facts: Vec<_> = (1..=6)
            .map(|i| FactRecord::new(format!("T{}", i), "c"))
            .collect();
        assert_eq!(fit(facts.clone(), "X", MIN_FACTS).len(), 3);
        assert_eq!(fit(facts, "X", MAX_FACTS).len(), 4);
    }
}
