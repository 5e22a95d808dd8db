//! JSON Platform Generator
//!
//! Reference backend writing a language's intent configurations to
//! `<output_dir>/intents.json`, together with their fingerprint.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::dispatch::PlatformGenerator;
use crate::error::PluginError;
use crate::fingerprint::fingerprint;
use crate::intent::IntentConfiguration;

pub const INTENTS_FILE_NAME: &str = "intents.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentsManifest {
    pub language: String,
    pub fingerprint: String,
    pub intents: Vec<IntentConfiguration>,
}

#[derive(Debug, Clone, Default)]
pub struct JsonIntentGenerator {
    pretty: bool,
}

impl JsonIntentGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl PlatformGenerator for JsonIntentGenerator {
    fn name(&self) -> &str {
        "json"
    }

    fn execute(
        &self,
        language: &str,
        output_dir: &Path,
        configurations: Vec<IntentConfiguration>,
    ) -> Result<(), PluginError> {
        let manifest = IntentsManifest {
            language: language.to_string(),
            fingerprint: fingerprint(&configurations)?,
            intents: configurations,
        };

        let data = if self.pretty {
            serde_json::to_string_pretty(&manifest)?
        } else {
            serde_json::to_string(&manifest)?
        };

        let path = output_dir.join(INTENTS_FILE_NAME);
        fs::write(&path, data)?;
        info!(%language, path = %path.display(), intents = manifest.intents.len(), "Wrote intents");
        Ok(())
    }
}
