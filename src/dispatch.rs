//! Platform Dispatch
//!
//! Hands the assembled configurations of a language to every registered
//! platform generator. Each generator receives its own copy.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{CompilerError, PluginError};
use crate::intent::IntentConfiguration;

/// Backend turning intent configurations into platform-specific artifacts
pub trait PlatformGenerator: Send + Sync {
    fn name(&self) -> &str;

    fn execute(
        &self,
        language: &str,
        output_dir: &Path,
        configurations: Vec<IntentConfiguration>,
    ) -> Result<(), PluginError>;
}

/// Create `<build_root>/<language>` if missing
pub fn ensure_output_dir(build_root: &Path, language: &str) -> Result<PathBuf, CompilerError> {
    let dir = build_root.join(language);
    fs::create_dir_all(&dir).map_err(|e| CompilerError::io("create build directory", &dir, e))?;
    Ok(dir)
}

/// Run every generator for one language concurrently and wait for all of
/// them. Results are returned in generator order; nothing is cancelled.
pub fn dispatch(
    language: &str,
    output_dir: &Path,
    configurations: &[IntentConfiguration],
    generators: &[Box<dyn PlatformGenerator>],
) -> Vec<Result<(), CompilerError>> {
    info!(
        %language,
        generators = generators.len(),
        intents = configurations.len(),
        "Dispatching to platform generators"
    );

    generators
        .par_iter()
        .map(|generator| {
            debug!(generator = generator.name(), %language, "Running platform generator");
            generator
                .execute(language, output_dir, configurations.to_vec())
                .map_err(|source| CompilerError::PlatformGenerator {
                    generator: generator.name().to_string(),
                    language: language.to_string(),
                    source,
                })
        })
        .collect()
}

/// First failure in order, after every unit has finished
pub fn first_error(results: Vec<Result<(), CompilerError>>) -> Result<(), CompilerError> {
    results.into_iter().collect()
}
