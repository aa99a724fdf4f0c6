//! Prompt templates for remote fact sources

/// Templates for generating prompts for each remote variant
pub struct FactPromptTemplate;

impl FactPromptTemplate {
    /// System prompt for chat-completion style endpoints
    pub fn facts_system() -> &'static str {
        r#"You are a knowledgeable travel and geography guide.
You share surprising, accurate facts about countries in plain prose.
Keep every fact to one or two sentences."#
    }

    /// Prompt asking for a JSON array of facts (hosted inference endpoints)
    pub fn facts_json(country: &str, count: usize) -> String {
        format!(
            r#"Generate exactly {count} fascinating and unique facts about {country}.
Respond with ONLY a JSON array, no other text, in this format:
[{{"title": "Catchy Title", "content": "Interesting fact content"}}]
Focus on history, culture, geography, or unique characteristics."#
        )
    }

    /// Prompt asking for facts as prose (chat-completion endpoints)
    pub fn facts_prose(country: &str, count: usize) -> String {
        format!(
            r#"Tell me {count} interesting and lesser-known facts about {country}.
Write each fact as a complete sentence. Make each fact educational and entertaining."#
        )
    }

    /// System prompt for follow-up questions
    pub fn chat_system() -> &'static str {
        r#"You answer questions about countries briefly and accurately.
Answer in at most three sentences. If you are unsure, say so."#
    }

    /// User prompt for a follow-up question
    pub fn chat_question(country: &str, question: &str) -> String {
        format!(
            r#"We are talking about {country}.
Question: {question}"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facts_json_mentions_country_and_count() {
        let prompt = FactPromptTemplate::facts_json("Peru", 4);
        assert!(prompt.contains("exactly 4"));
        assert!(prompt.contains("Peru"));
        assert!(prompt.contains(r#"[{"title""#));
    }

    #[test]
    fn test_chat_question() {
        let prompt = FactPromptTemplate::chat_question("Chile", "What is the capital?");
        assert!(prompt.contains("Chile"));
        assert!(prompt.ends_with("What is the capital?"));
    }
}
