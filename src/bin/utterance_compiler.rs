//! Utterance Compiler CLI
//!
//! Compiles the utterance templates of a project and writes one
//! `intents.json` per language below the build directory.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utterance_compiler::{
    CompilerConfig, CompilerError, GenericIntent, JsonIntentGenerator, StaticEntityCatalog,
    UtteranceCompiler,
};

#[derive(Debug, Parser)]
#[command(name = "utterance-compiler", version, about)]
struct Args {
    /// Compiler configuration (JSON)
    #[arg(long, env = "UTTERANCE_COMPILER_CONFIG")]
    config: Option<PathBuf>,

    /// Build root; one subdirectory is created per language
    #[arg(long, default_value = "build")]
    build_dir: PathBuf,

    /// Directory with one subdirectory per language (overrides the config)
    #[arg(long)]
    utterances: Option<PathBuf>,

    /// Entity catalog (JSON, overrides the config)
    #[arg(long)]
    entities: Option<PathBuf>,

    /// Additional explicit intent
    #[arg(long = "intent")]
    intents: Vec<String>,

    /// Additional generic intent (e.g. help, cancel)
    #[arg(long = "generic-intent")]
    generic_intents: Vec<GenericIntent>,

    /// Pretty-print the generated JSON
    #[arg(long)]
    pretty: bool,
}

fn load_config(args: &Args) -> Result<CompilerConfig, CompilerError> {
    let mut config = match (&args.config, &args.utterances) {
        (Some(path), _) => CompilerConfig::from_file(path)?,
        (None, Some(utterances)) => CompilerConfig::new(utterances),
        (None, None) => CompilerConfig::new("utterances"),
    };

    if let Some(utterances) = &args.utterances {
        config.utterance_path = utterances.clone();
    }
    if let Some(entities) = &args.entities {
        config.entities_path = Some(entities.clone());
    }
    config.intents.extend(args.intents.iter().cloned());
    config.generic_intents.extend(args.generic_intents.iter().copied());
    Ok(config)
}

fn run(args: &Args) -> Result<(), CompilerError> {
    let config = load_config(args)?;

    let catalog = match &config.entities_path {
        Some(path) => StaticEntityCatalog::from_file(path)?,
        None => StaticEntityCatalog::new(),
    };
    tracing::info!(
        utterances = %config.utterance_path.display(),
        entities = catalog.len(),
        "Configuration loaded"
    );

    let generator = if args.pretty {
        JsonIntentGenerator::pretty()
    } else {
        JsonIntentGenerator::new()
    };

    let report = UtteranceCompiler::new(&config, Arc::new(catalog))
        .with_platform_generator(generator)
        .execute(&args.build_dir)?;

    for language in &report.languages {
        println!(
            "{}: {} intents, {} utterances ({})",
            language.language, language.intents, language.utterances, language.fingerprint
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "utterance_compiler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = err.code(), guarantee = err.guarantee(), "{err}");
            eprintln!("error[{}]: {}", err.code(), err);
            ExitCode::FAILURE
        }
    }
}
