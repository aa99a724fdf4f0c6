//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use crate::{ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig};
use colored::Colorize;
use facts_application::{
    AnswerQuestionUseCase, FactSession, NoProgress, ResolveFactsUseCase, SuggestCountriesUseCase,
};
use facts_domain::{FactBatch, FactSource};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive chat REPL
pub struct ChatRepl {
    resolver: ResolveFactsUseCase,
    answerer: AnswerQuestionUseCase,
    suggester: Option<Arc<SuggestCountriesUseCase>>,
    session: FactSession,
    output: OutputConfig,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(resolver: ResolveFactsUseCase, answerer: AnswerQuestionUseCase) -> Self {
        Self {
            resolver,
            answerer,
            suggester: None,
            session: FactSession::new(),
            output: OutputConfig::default(),
            config: ReplConfig::default(),
        }
    }

    /// Enable `/suggest` and "did you mean" hints
    pub fn with_suggestions(mut self, suggester: Arc<SuggestCountriesUseCase>) -> Self {
        self.suggester = Some(suggester);
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Start with a country already on screen
    pub async fn with_country(mut self, country: &str) -> Self {
        self.show_country(country).await;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self.config.history_path();

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(&self.prompt());

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(ReplCommand::parse(line)).await {
                            break;
                        }
                        continue;
                    }

                    match self.session.last_country().map(str::to_string) {
                        Some(country) => self.answer(&country, line).await,
                        None => self.show_country(line).await,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn prompt(&self) -> String {
        match self.session.last_country() {
            Some(country) => format!("{}> ", country),
            None => "country> ".to_string(),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         Country Facts - Chat Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        if let Some(name) = self.resolver.remote_name() {
            println!("Remote source: {}", name);
        }
        println!("Type a country name, then ask questions about it.");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /country <name>   - Show facts about another country");
        println!("  /suggest <prefix> - List matching country names");
        println!("  /source           - Show where the last facts came from");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Country(Some(name)) => self.show_country(&name).await,
            ReplCommand::Country(None) => match self.session.last_country() {
                Some(country) => println!("Current country: {}", country),
                None => println!("No country selected yet"),
            },
            ReplCommand::Suggest(prefix) => {
                let names = self.suggestions(&prefix).await;
                println!("{}", ConsoleFormatter::format_suggestions(&prefix, &names));
            }
            ReplCommand::Source => match self.session.last_source() {
                Some(source) => println!("Facts came from: {}", source.label()),
                None => println!("No facts shown yet"),
            },
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn show_country(&mut self, country: &str) {
        println!();

        let result = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.resolver.execute_with_progress(country, &progress).await
        } else {
            self.resolver.execute_with_progress(country, &NoProgress).await
        };

        match result {
            Ok(batch) => {
                println!("{}", ConsoleFormatter::format_batch(&batch, self.output.format));
                self.session.record(&batch);
                self.hint_similar(&batch).await;
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()));
            }
        }
        println!();
    }

    async fn answer(&self, country: &str, question: &str) {
        println!();
        match self.answerer.execute(country, question).await {
            Ok(exchange) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_exchange(&exchange, self.output.format)
                );
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()));
            }
        }
        println!();
    }

    async fn suggestions(&self, prefix: &str) -> Vec<String> {
        match &self.suggester {
            Some(suggester) => suggester.suggest(prefix, self.config.suggestion_limit).await,
            None => Vec::new(),
        }
    }

    /// Templated facts usually mean a typo; offer close names
    async fn hint_similar(&self, batch: &FactBatch) {
        let names = self.similar_names(batch).await;
        if !names.is_empty() {
            println!("{} {}", "Did you mean:".dimmed(), names.join(", "));
        }
    }

    async fn similar_names(&self, batch: &FactBatch) -> Vec<String> {
        if batch.source != FactSource::Template {
            return Vec::new();
        }
        self.suggestions(&batch.country)
            .await
            .into_iter()
            .filter(|n| !n.eq_ignore_ascii_case(&batch.country))
            .collect()
    }
}
