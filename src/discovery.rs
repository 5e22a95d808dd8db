//! Discovery Module for the Utterance Compiler
//!
//! Scans the utterance directory for per-language template files and merges
//! in templates contributed by template services.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{CompilerError, PluginError};

/// Intent template key → raw template strings
pub type TemplateMap = BTreeMap<String, Vec<String>>;

// ═══════════════════════════════════════════════════════════════════════════════
// TEMPLATE STORE
// ═══════════════════════════════════════════════════════════════════════════════

/// Immutable snapshot of all templates, partitioned by language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateStore {
    languages: BTreeMap<String, TemplateMap>,
}

impl TemplateStore {
    pub fn from_languages(languages: BTreeMap<String, TemplateMap>) -> Self {
        Self { languages }
    }

    /// Load `<dir>/<language>/<file_name>` for every language subdirectory.
    /// Languages without a template file contribute nothing.
    pub fn load(dir: &Path, file_name: &str) -> Result<Self, CompilerError> {
        let mut languages = BTreeMap::new();

        for language_dir in find_language_dirs(dir)? {
            let Some(language) = language_dir
                .file_name()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
            else {
                warn!(path = %language_dir.display(), "Skipping non UTF-8 language directory");
                continue;
            };

            let template_path = language_dir.join(file_name);
            if !template_path.is_file() {
                debug!(%language, path = %template_path.display(), "No template file");
                continue;
            }

            let templates = parse_template_file(&template_path)?;
            debug!(%language, intents = templates.len(), "Loaded utterance templates");
            languages.insert(language, templates);
        }

        Ok(Self { languages })
    }

    pub fn languages(&self) -> &BTreeMap<String, TemplateMap> {
        &self.languages
    }

    pub fn templates_for(&self, language: &str) -> Option<&TemplateMap> {
        self.languages.get(language)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Direct subdirectories of `dir`, sorted by name
fn find_language_dirs(dir: &Path) -> Result<Vec<PathBuf>, CompilerError> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| CompilerError::Discovery {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }

    Ok(dirs)
}

fn parse_template_file(path: &Path) -> Result<TemplateMap, CompilerError> {
    let source =
        fs::read_to_string(path).map_err(|e| CompilerError::io("read template file", path, e))?;
    serde_json::from_str(&source).map_err(|source| CompilerError::TemplateFormat {
        path: path.to_path_buf(),
        source,
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEMPLATE SERVICES
// ═══════════════════════════════════════════════════════════════════════════════

/// Plugin contributing additional templates per language
pub trait UtteranceTemplateService: Send + Sync {
    fn name(&self) -> &str;

    fn utterances_for(&self, language: &str) -> Result<TemplateMap, PluginError>;
}

/// Fold every service's templates into a new map, concatenating per key.
/// `base` is left untouched.
pub fn merge_templates(
    base: &TemplateMap,
    services: &[Box<dyn UtteranceTemplateService>],
    language: &str,
) -> Result<TemplateMap, CompilerError> {
    services.iter().try_fold(base.clone(), |mut merged, service| {
        let contributed =
            service
                .utterances_for(language)
                .map_err(|source| CompilerError::TemplateService {
                    service: service.name().to_string(),
                    language: language.to_string(),
                    source,
                })?;

        debug!(
            service = service.name(),
            %language,
            intents = contributed.len(),
            "Merging contributed templates"
        );

        for (key, templates) in contributed {
            merged.entry(key).or_default().extend(templates);
        }
        Ok(merged)
    })
}
