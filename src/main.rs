//! sign-translate - translate spoken text into a sign language from the
//! command line

#![allow(missing_docs)]

use anyhow::{Context, bail};
use clap::Parser;
use sign_translate::utils::logging::{LogFormat, init_tracing};
use sign_translate::{
    Config, ManualConnectivity, Orchestrator, TranslateError, TranslationRequest,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::broadcast::error::TryRecvError;

#[derive(Debug, Parser)]
#[command(name = "sign-translate", version, about)]
struct Cli {
    /// Text to translate
    #[arg(required_unless_present = "languages")]
    text: Option<String>,

    /// Spoken source language
    #[arg(long = "from", default_value = "en")]
    source_language: String,

    /// Target sign language (aliases such as `asl` are accepted)
    #[arg(long = "to", default_value = "ase")]
    target_language: String,

    /// YAML configuration file
    #[arg(short, long, env = "SIGN_TRANSLATE_CONFIG")]
    config: Option<PathBuf>,

    /// Use the offline provider
    #[arg(long)]
    offline: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// List supported languages and exit
    #[arg(long)]
    languages: bool,

    /// Log output format (text or json)
    #[arg(long, default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.log_format, "warn") {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    }
    .with_env_overrides(|name| std::env::var(name).ok())?;

    let orchestrator = Orchestrator::builder(config)
        .connectivity(Arc::new(ManualConnectivity::new(!cli.offline)))
        .build()?;

    if cli.languages {
        return print_languages(&orchestrator, cli.json);
    }

    let Some(text) = cli.text else {
        bail!("no text to translate");
    };

    let mut updates = orchestrator.subscribe();
    let outcome = orchestrator
        .translate(TranslationRequest::new(
            text,
            cli.source_language,
            cli.target_language,
        ))
        .await;

    if !cli.json {
        loop {
            match updates.try_recv() {
                Ok(update) => eprintln!("[{}]", update.state),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }
    }

    match outcome {
        Ok(result) if cli.json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Ok(result) => {
            println!("{}", result.translated_text);
            println!("SignWriting: {}", result.sign_writing);
            if let Some(video) = &result.video_url {
                println!("Video: {}", video);
            }
            println!("Confidence: {:.2}", result.confidence);
            if let Some(warning) = &result.warning {
                println!("Warning: {}", warning);
            }
        }
        Err(err @ TranslateError::Validation(_)) => {
            for detail in err.details() {
                eprintln!("  - {}", detail);
            }
            bail!(err.user_message());
        }
        Err(err) => return Err(err).context("translation failed"),
    }

    Ok(())
}

fn print_languages(orchestrator: &Orchestrator, json: bool) -> anyhow::Result<()> {
    let languages = orchestrator.supported_languages();
    if json {
        println!("{}", serde_json::to_string_pretty(&languages)?);
        return Ok(());
    }

    println!("Spoken languages:");
    for language in &languages.spoken {
        println!("  {:<4} {}", language.code, language.name);
    }
    println!("Sign languages:");
    for language in &languages.sign {
        println!("  {:<4} {}", language.code, language.name);
    }
    println!("Aliases: asl -> ase, bsl -> bfi, gsl -> gsg");
    Ok(())
}
