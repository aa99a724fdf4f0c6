//! Sentence-template fact synthesizer

use crate::core::country::CountryQuery;
use crate::fact::FactRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One template: (title, content); `{country}` and `{trait}` are substituted
type Template = (&'static str, &'static str);

const CULTURE: &[Template] = &[
    (
        "Cultural Heritage",
        "{country} has a {trait} cultural heritage, with traditions passed down through generations of music, food and festivals.",
    ),
    (
        "Living Traditions",
        "Local customs in {country} reflect a {trait} blend of history and everyday life that visitors rarely forget.",
    ),
    (
        "Culinary Identity",
        "The cuisine of {country} tells a {trait} story of regional ingredients and family recipes.",
    ),
];

const GEOGRAPHY: &[Template] = &[
    (
        "Geographic Character",
        "The landscapes of {country} range across {trait} terrain that has shaped how its people live and travel.",
    ),
    (
        "Natural Wonders",
        "{country} is home to {trait} natural features that draw explorers and scientists alike.",
    ),
    (
        "Land and Climate",
        "Climate and geography in {country} have created {trait} ecosystems found in few other places.",
    ),
];

const HISTORY: &[Template] = &[
    (
        "Historical Contribution",
        "Over the centuries {country} has made {trait} contributions to art, science and trade in its region.",
    ),
    (
        "Crossroads of History",
        "The history of {country} is marked by {trait} moments that still influence its identity today.",
    ),
    (
        "Enduring Legacy",
        "Historians point to {country} as the source of {trait} ideas and inventions that spread far beyond its borders.",
    ),
];

const CATEGORIES: &[&[Template]] = &[CULTURE, GEOGRAPHY, HISTORY];

const TRAITS: &[&str] = &[
    "remarkable",
    "distinctive",
    "fascinating",
    "diverse",
    "rich",
    "surprising",
];

/// Fills fixed sentence templates with the country name.
///
/// Randomness comes from a seed mixed with the country key, so the same
/// synthesizer always produces the same facts for the same country.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSynthesizer {
    seed: u64,
}

impl TemplateSynthesizer {
    /// Reproducible synthesizer
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Synthesizer seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Exactly one fact per category, each containing the display name verbatim
    pub fn synthesize(&self, country: &CountryQuery) -> Vec<FactRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed ^ fnv1a(country.key()));
        CATEGORIES
            .iter()
            .map(|templates| {
                let (title, content) = templates[rng.gen_range(0..templates.len())];
                let descriptor = TRAITS[rng.gen_range(0..TRAITS.len())];
                FactRecord::new(
                    title,
                    content
                        .replace("{country}", country.display())
                        .replace("{trait}", descriptor),
                )
            })
            .collect()
    }
}

impl Default for TemplateSynthesizer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// FNV-1a, stable across runs (unlike `DefaultHasher`)
fn fnv1a(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(name: &str) -> CountryQuery {
        CountryQuery::parse(name).unwrap()
    }

    #[test]
    fn test_exactly_three_facts_mentioning_country() {
        for name in ["Wakanda", "Genovia", "Côte d'Ivoire", "Sokovia"] {
            let facts = TemplateSynthesizer::with_seed(7).synthesize(&query(name));
            assert_eq!(facts.len(), 3);
            for fact in &facts {
                assert!(fact.content.contains(name), "{:?}", fact);
                assert!(!fact.content.contains('{'));
            }
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let a = TemplateSynthesizer::with_seed(42).synthesize(&query("Wakanda"));
        let b = TemplateSynthesizer::with_seed(42).synthesize(&query("Wakanda"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_lookup_key_drives_selection() {
        let synth = TemplateSynthesizer::with_seed(1);
        let lower = synth.synthesize(&query("wakanda"));
        let upper = synth.synthesize(&query("WAKANDA"));
        let titles = |facts: &[FactRecord]| facts.iter().map(|f| f.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(&lower), titles(&upper));
        assert!(upper[0].content.contains("WAKANDA"));
    }

    #[test]
    fn test_one_fact_per_category() {
        let facts = TemplateSynthesizer::with_seed(3).synthesize(&query("Genovia"));
        assert!(CULTURE.iter().any(|(t, _)| *t == facts[0].title));
        assert!(GEOGRAPHY.iter().any(|(t, _)| *t == facts[1].title));
        assert!(HISTORY.iter().any(|(t, _)| *t == facts[2].title));
    }
}
