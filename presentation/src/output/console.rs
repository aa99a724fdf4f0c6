//! Console output formatter for fact batches and chat answers

use colored::Colorize;
use facts_domain::{ChatExchange, FactBatch, OutputFormat};
use serde_json::json;

/// Formats resolution results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a batch in the requested format
    pub fn format_batch(batch: &FactBatch, format: OutputFormat) -> String {
        match format {
            OutputFormat::Cards => Self::format_cards(batch),
            OutputFormat::Plain => Self::format_plain(batch),
            OutputFormat::Json => Self::format_json(batch),
        }
    }

    /// Numbered cards with a header and source footer
    pub fn format_cards(batch: &FactBatch) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Facts about {}", batch.country)));
        output.push('\n');

        for (i, fact) in batch.facts.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                format!("[{}]", i + 1).yellow().bold(),
                fact.title.bold(),
                Self::indent(&fact.content, "    ")
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Source:".dimmed(),
            batch.source.label().cyan()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// One line per fact, no decoration
    pub fn format_plain(batch: &FactBatch) -> String {
        let mut lines = vec![format!("{} ({})", batch.country, batch.source.label())];
        lines.extend(
            batch
                .facts
                .iter()
                .enumerate()
                .map(|(i, f)| format!("{}. {}: {}", i + 1, f.title, f.content)),
        );
        lines.join("\n")
    }

    /// Format as JSON
    pub fn format_json(batch: &FactBatch) -> String {
        let value = json!({
            "country": batch.country,
            "source": batch.source.label(),
            "facts": batch.facts,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a chat answer
    pub fn format_exchange(exchange: &ChatExchange, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => {
                let value = json!({
                    "question": exchange.question,
                    "answer": exchange.answer,
                    "source": exchange.source_label,
                });
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Plain => format!(
                "Q: {}\nA: {} ({})",
                exchange.question, exchange.answer, exchange.source_label
            ),
            OutputFormat::Cards => format!(
                "{} {}\n{}\n{}",
                "Q:".bold(),
                exchange.question,
                exchange.answer,
                format!("via {}", exchange.source_label).dimmed()
            ),
        }
    }

    /// Single-line error message
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message.red())
    }

    /// Suggestions for a partial country name
    pub fn format_suggestions(input: &str, names: &[String]) -> String {
        if names.is_empty() {
            return format!("No countries match '{}'", input).dimmed().to_string();
        }
        names
            .iter()
            .map(|n| format!("  {}", n))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
