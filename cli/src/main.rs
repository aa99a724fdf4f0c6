//! CLI entrypoint for country-facts
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use facts_application::{
    AnswerQuestionUseCase, CountryCatalog, EmptyCatalog, ResolveFactsUseCase, SettingsStore,
    SuggestCountriesUseCase, load_or_default,
};
use facts_domain::{Settings, TemplateSynthesizer};
use facts_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, JsonSettingsStore, RemoteKind,
    RestCountriesCatalog, SelfHostedBackend, build_remote,
};
use facts_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig, SimpleProgress,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_logging(cli.verbose, &config.logging);
    info!("Starting country-facts");

    if let Some(kind) = &cli.remote {
        config
            .remote
            .override_kind(kind)
            .map_err(|e| anyhow::anyhow!("--remote: {}", e))?;
    }

    for issue in config.validate() {
        if issue.is_error() {
            bail!("Invalid configuration: {}", issue.message);
        }
        warn!("{}", issue.message);
    }
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Settings ===
    let store = JsonSettingsStore::at_default_location().ok();
    if cli.clear_settings {
        let Some(store) = &store else {
            bail!("Cannot clear settings: no settings location available");
        };
        store.clear()?;
        println!("Settings cleared ({})", store.path().display());
        return Ok(ExitCode::SUCCESS);
    }

    let settings = apply_settings_flags(&cli, store.as_ref())?;
    if cli.save_settings && cli.country_name().is_none() && !cli.chat {
        return Ok(ExitCode::SUCCESS);
    }

    let client = reqwest::Client::new();

    if cli.health {
        return check_health(&config, client).await;
    }

    // === Dependency Injection ===
    let (resolver, answerer) = build_use_cases(&cli, &config, &settings, client.clone());

    let catalog: Arc<dyn CountryCatalog> =
        if config.catalog.enabled && !config.catalog.url.trim().is_empty() {
            Arc::new(RestCountriesCatalog::new(client, config.catalog.url.clone()))
        } else {
            Arc::new(EmptyCatalog)
        };
    let suggester = Arc::new(SuggestCountriesUseCase::new(catalog));

    if let Some(prefix) = &cli.suggest {
        let names = suggester.suggest(prefix, config.repl.suggestion_limit).await;
        println!("{}", ConsoleFormatter::format_suggestions(prefix, &names));
        return Ok(ExitCode::SUCCESS);
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: !cli.no_color && config.output.color,
    };

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_file: config.repl.history_file.clone(),
            suggestion_limit: config.repl.suggestion_limit,
        };
        let mut repl = ChatRepl::new(resolver, answerer)
            .with_suggestions(suggester)
            .with_output(output)
            .with_config(repl_config);
        if let Some(country) = cli.country_name() {
            repl = repl.with_country(&country).await;
        }
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single country mode - country is required
    let Some(country) = cli.country_name() else {
        bail!("Country is required. Use --chat for interactive mode.");
    };

    let result = if cli.quiet {
        resolver.execute(&country).await
    } else if cli.verbose > 0 {
        resolver.execute_with_progress(&country, &SimpleProgress).await
    } else {
        let progress = ProgressReporter::new();
        resolver.execute_with_progress(&country, &progress).await
    };

    let batch = match result {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()));
            return Ok(ExitCode::FAILURE);
        }
    };
    println!("{}", ConsoleFormatter::format_batch(&batch, output.format));

    if let Some(question) = &cli.ask {
        match answerer.execute(&batch.country, question).await {
            Ok(exchange) => {
                println!();
                println!("{}", ConsoleFormatter::format_exchange(&exchange, output.format));
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()));
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level, `RUST_LOG` and `[logging]`.
///
/// The returned guard flushes the file log on drop.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => std::env::var("RUST_LOG")
            .ok()
            .or_else(|| logging.filter.clone())
            .and_then(|f| EnvFilter::try_new(f).ok())
            .unwrap_or_else(|| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match &logging.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "country-facts.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

/// Load persisted settings and apply `--token` / `--enable-remote` /
/// `--disable-remote`, saving them when `--save-settings` is given.
fn apply_settings_flags(cli: &Cli, store: Option<&JsonSettingsStore>) -> Result<Settings> {
    let mut settings = load_or_default(store.map(|s| s as &dyn SettingsStore));

    if let Some(token) = &cli.token {
        settings.api_token = Some(token.trim().to_string());
    }
    if let Some(enabled) = cli.remote_switch() {
        settings.remote_enabled = enabled;
    }

    if cli.save_settings {
        let Some(store) = store else {
            bail!("Cannot save settings: no settings location available");
        };
        store
            .save(&settings)
            .with_context(|| format!("Failed to save settings to {}", store.path().display()))?;
        println!("Settings saved ({})", store.path().display());
    }

    Ok(settings)
}

fn build_use_cases(
    cli: &Cli,
    config: &FileConfig,
    settings: &Settings,
    client: reqwest::Client,
) -> (ResolveFactsUseCase, AnswerQuestionUseCase) {
    let synthesizer = cli
        .seed
        .or(config.resolver.seed)
        .map(TemplateSynthesizer::with_seed)
        .unwrap_or_else(TemplateSynthesizer::from_entropy);

    let (mut resolver_config, _) = config.resolver.to_resolver_config();
    if !cli.order.is_empty() {
        resolver_config = resolver_config.with_order(cli.order.clone());
    }

    let mut resolver = ResolveFactsUseCase::new(synthesizer).with_config(resolver_config);
    let mut answerer = AnswerQuestionUseCase::new();

    if let Some(remote) = build_remote(&config.remote, settings, client) {
        info!("Remote source: {} ({})", remote.kind, remote.facts.name());
        resolver = resolver.with_remote(remote.facts);
        if let Some(chat) = remote.chat {
            answerer = answerer.with_remote(chat);
        }
    }

    (resolver, answerer)
}

async fn check_health(config: &FileConfig, client: reqwest::Client) -> Result<ExitCode> {
    let base_url = config.remote.base_url_for(RemoteKind::SelfHosted);
    let backend = SelfHostedBackend::new(client, base_url);

    match backend.health().await {
        Ok(health) => {
            println!("Backend:  {}", backend.base_url());
            println!("Status:   {}", health.status);
            println!("Model:    {}", health.model.as_deref().unwrap_or("unknown"));
            println!(
                "Model status: {}",
                health.model_status.as_deref().unwrap_or("unknown")
            );
            Ok(if health.is_ready() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(e) => {
            eprintln!(
                "{}",
                ConsoleFormatter::format_error(&format!("{} ({})", e.user_message(), e))
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
