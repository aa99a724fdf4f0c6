//! Keyword-matched local knowledge

use crate::core::country::CountryQuery;

/// Source label for answers produced without a remote model
pub const LOCAL_SOURCE_LABEL: &str = "Local Knowledge";

/// Question categories, in matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionTopic {
    Capital,
    Language,
    Currency,
    Population,
}

impl QuestionTopic {
    pub const ALL: [QuestionTopic; 4] = [
        QuestionTopic::Capital,
        QuestionTopic::Language,
        QuestionTopic::Currency,
        QuestionTopic::Population,
    ];

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            QuestionTopic::Capital => &["capital"],
            QuestionTopic::Language => &["language", "speak", "spoken"],
            QuestionTopic::Currency => &["currency", "money"],
            QuestionTopic::Population => &["population", "people", "inhabitants"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionTopic::Capital => "capital",
            QuestionTopic::Language => "language",
            QuestionTopic::Currency => "currency",
            QuestionTopic::Population => "population",
        }
    }

    /// Whether a lowercased question mentions this topic
    pub fn matches(&self, question: &str) -> bool {
        self.keywords().iter().any(|k| question.contains(k))
    }

    /// Every topic the question mentions, in priority order
    pub fn detect(question: &str) -> Vec<QuestionTopic> {
        let question = question.to_lowercase();
        Self::ALL
            .into_iter()
            .filter(|t| t.matches(&question))
            .collect()
    }
}

/// (key, capital, language, currency, population)
type Entry = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const KNOWLEDGE: &[Entry] = &[
    ("japan", "Tokyo", "Japanese", "the Japanese yen", "about 124 million"),
    ("france", "Paris", "French", "the euro", "about 68 million"),
    ("italy", "Rome", "Italian", "the euro", "about 59 million"),
    ("brazil", "Brasília", "Portuguese", "the Brazilian real", "about 203 million"),
    ("australia", "Canberra", "English", "the Australian dollar", "about 27 million"),
    ("canada", "Ottawa", "English and French", "the Canadian dollar", "about 40 million"),
    ("egypt", "Cairo", "Arabic", "the Egyptian pound", "about 112 million"),
    ("india", "New Delhi", "Hindi and English", "the Indian rupee", "about 1.4 billion"),
    ("norway", "Oslo", "Norwegian", "the Norwegian krone", "about 5.5 million"),
    ("mexico", "Mexico City", "Spanish", "the Mexican peso", "about 130 million"),
    ("germany", "Berlin", "German", "the euro", "about 84 million"),
    ("spain", "Madrid", "Spanish", "the euro", "about 48 million"),
    ("china", "Beijing", "Mandarin Chinese", "the renminbi (yuan)", "about 1.4 billion"),
    ("united kingdom", "London", "English", "the pound sterling", "about 68 million"),
    ("united states", "Washington, D.C.", "English", "the US dollar", "about 335 million"),
];

/// Small built-in table of capital/language/currency/population facts
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeTable;

impl KnowledgeTable {
    pub fn new() -> Self {
        Self
    }

    /// Known value for one topic, if the country is covered
    pub fn lookup(&self, country: &CountryQuery, topic: QuestionTopic) -> Option<&'static str> {
        let entry = KNOWLEDGE.iter().find(|entry| entry.0 == country.key())?;
        Some(match topic {
            QuestionTopic::Capital => entry.1,
            QuestionTopic::Language => entry.2,
            QuestionTopic::Currency => entry.3,
            QuestionTopic::Population => entry.4,
        })
    }

    /// Answer a question from the table, never failing.
    ///
    /// The first topic (in priority order) that both matches the question and
    /// has a known value wins; otherwise a templated non-answer is returned.
    pub fn answer(&self, country: &CountryQuery, question: &str) -> String {
        let topics = QuestionTopic::detect(question);
        let name = country.display();

        for topic in &topics {
            if let Some(value) = self.lookup(country, *topic) {
                return match topic {
                    QuestionTopic::Capital => format!("The capital of {} is {}.", name, value),
                    QuestionTopic::Language => {
                        format!("The main language spoken in {} is {}.", name, value)
                    }
                    QuestionTopic::Currency => {
                        format!("The currency used in {} is {}.", name, value)
                    }
                    QuestionTopic::Population => {
                        format!("{} has a population of {} people.", name, value)
                    }
                };
            }
        }

        let topic = match topics.first() {
            Some(t) => t.as_str().to_string(),
            None => question.trim().trim_end_matches('?').to_lowercase(),
        };
        format!(
            "That's a great question about {} in {}! I don't have details on that yet, \
             but enabling a remote model can give you a fuller answer.",
            topic, name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(name: &str) -> CountryQuery {
        CountryQuery::parse(name).unwrap()
    }

    #[test]
    fn test_capital_of_france() {
        let answer = KnowledgeTable::new().answer(&query("France"), "what is the capital");
        assert!(answer.contains("Paris"));
    }

    #[test]
    fn test_priority_order() {
        // Both capital and language are mentioned; capital wins
        let answer = KnowledgeTable::new().answer(
            &query("Japan"),
            "What language do they speak in the capital?",
        );
        assert!(answer.contains("Tokyo"));
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(
            QuestionTopic::detect("Which CURRENCY is used?"),
            vec![QuestionTopic::Currency]
        );
        assert!(QuestionTopic::detect("tell me a joke").is_empty());
    }

    #[test]
    fn test_population_answer() {
        let answer = KnowledgeTable::new().answer(&query("norway"), "How many people live there?");
        assert_eq!(answer, "norway has a population of about 5.5 million people.");
    }

    #[test]
    fn test_unknown_country_non_answer() {
        let answer = KnowledgeTable::new().answer(&query("Wakanda"), "What is the capital?");
        assert!(answer.contains("Wakanda"));
        assert!(answer.contains("capital"));
    }

    #[test]
    fn test_no_keyword_non_answer_mentions_question() {
        let answer = KnowledgeTable::new().answer(&query("France"), "Best time to visit?");
        assert!(answer.contains("France"));
        assert!(answer.contains("best time to visit"));
    }
}
