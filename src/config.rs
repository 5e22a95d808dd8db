//! Compiler configuration, read from a JSON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CompilerError;
use crate::intent::{GenericIntent, Intent};

pub const DEFAULT_TEMPLATE_FILE_NAME: &str = "utterances.json";

fn default_template_file_name() -> String {
    DEFAULT_TEMPLATE_FILE_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    /// Directory holding one subdirectory per language
    pub utterance_path: PathBuf,
    #[serde(default = "default_template_file_name")]
    pub template_file_name: String,
    /// JSON entity catalog
    #[serde(default)]
    pub entities_path: Option<PathBuf>,
    /// Explicit intent names (template key `<name>Intent`)
    #[serde(default)]
    pub intents: Vec<String>,
    #[serde(default)]
    pub generic_intents: Vec<GenericIntent>,
}

impl CompilerConfig {
    pub fn new(utterance_path: impl Into<PathBuf>) -> Self {
        Self {
            utterance_path: utterance_path.into(),
            template_file_name: default_template_file_name(),
            entities_path: None,
            intents: Vec::new(),
            generic_intents: Vec::new(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CompilerError> {
        let source =
            fs::read_to_string(path).map_err(|e| CompilerError::io("read configuration", path, e))?;
        let mut config: CompilerConfig =
            serde_json::from_str(&source).map_err(|source| CompilerError::Config {
                path: path.to_path_buf(),
                source,
            })?;

        // Relative paths are resolved against the configuration file
        if let Some(base) = path.parent() {
            if config.utterance_path.is_relative() {
                config.utterance_path = base.join(&config.utterance_path);
            }
            if let Some(entities) = config.entities_path.as_mut() {
                if entities.is_relative() {
                    *entities = base.join(&*entities);
                }
            }
        }

        Ok(config)
    }

    /// Explicit intents first, then generic intents, each in declaration order
    pub fn declared_intents(&self) -> Vec<Intent> {
        self.intents
            .iter()
            .map(|name| Intent::Explicit(name.clone()))
            .chain(self.generic_intents.iter().map(|g| Intent::Generic(*g)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_from_file_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compiler.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "utterancePath": "locales",
                "entitiesPath": "entities.json",
                "intents": ["bookTable"],
                "genericIntents": ["help", "endSession"]
            }}"#
        )
        .unwrap();

        let config = CompilerConfig::from_file(&path).unwrap();
        assert_eq!(config.utterance_path, dir.path().join("locales"));
        assert_eq!(config.entities_path, Some(dir.path().join("entities.json")));
        assert_eq!(config.template_file_name, DEFAULT_TEMPLATE_FILE_NAME);
        assert_eq!(
            config.declared_intents(),
            vec![
                Intent::explicit("bookTable"),
                Intent::Generic(GenericIntent::Help),
                Intent::Generic(GenericIntent::EndSession),
            ]
        );
    }

    #[test]
    fn test_generic_intents_match_cli_spelling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compiler.json");
        fs::write(
            &path,
            r#"{ "utterancePath": "locales", "genericIntents": ["Help", "STOP"] }"#,
        )
        .unwrap();

        let config = CompilerConfig::from_file(&path).unwrap();
        assert_eq!(
            config.generic_intents,
            vec![GenericIntent::Help, GenericIntent::Stop]
        );

        fs::write(
            &path,
            r#"{ "utterancePath": "locales", "genericIntents": ["helpme"] }"#,
        )
        .unwrap();
        let err = CompilerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CompilerError::Config { .. }));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compiler.json");
        fs::write(&path, r#"{ "intents": [] }"#).unwrap();

        let err = CompilerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CompilerError::Config { .. }));
    }
}
