use std::path::PathBuf;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ERROR CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_UNMAPPED_ENTITY: &str = "UC-ERR-ENTITY-001";
pub const ERR_IO: &str = "UC-ERR-IO-001";
pub const ERR_DISCOVERY: &str = "UC-ERR-IO-002";
pub const ERR_TEMPLATE_FORMAT: &str = "UC-ERR-TEMPLATE-001";
pub const ERR_UNRESOLVED_PLACEHOLDER: &str = "UC-ERR-TEMPLATE-002";
pub const ERR_CONFIG: &str = "UC-ERR-CONFIG-001";
pub const ERR_PLATFORM_GENERATOR: &str = "UC-ERR-PLUGIN-001";
pub const ERR_TEMPLATE_SERVICE: &str = "UC-ERR-PLUGIN-002";
pub const ERR_SERIALIZE: &str = "UC-ERR-SERIALIZE-001";

/// Error type returned by plugins (platform generators, template services).
pub type PluginError = Box<dyn std::error::Error + Send + Sync>;

fn get_guarantee(code: &str) -> &'static str {
    match code {
        ERR_UNMAPPED_ENTITY => {
            "Every entity referenced by an utterance has a mapping in the entity catalog."
        }
        ERR_IO | ERR_DISCOVERY => "Template files and output directories are accessible.",
        ERR_TEMPLATE_FORMAT => "Template files map intent keys to lists of template strings.",
        ERR_UNRESOLVED_PLACEHOLDER => {
            "Utterances handed to platform generators contain no unresolved placeholders."
        }
        ERR_CONFIG => "Compiler configuration and entity catalog files are well-formed.",
        ERR_PLATFORM_GENERATOR => "Every platform generator completes for every language.",
        ERR_TEMPLATE_SERVICE => "Every template service contributes templates for every language.",
        ERR_SERIALIZE => "Intent configurations are serializable.",
        _ => "Unknown guarantee.",
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPILER ERROR
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum CompilerError {
    #[error(
        "Unknown entity '{entity}' found in utterances of intent '{intent}' (language '{language}'). \
         Either you misspelled your entity in one of the intents utterances or you did not define \
         a type mapping for it. Your configured entity mappings are: {known:?}"
    )]
    UnmappedEntity {
        entity: String,
        intent: String,
        language: String,
        known: Vec<String>,
    },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid utterance template file {}: {source}", path.display())]
    TemplateFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Unresolved placeholder in utterance '{utterance}' of intent '{intent}' (language '{language}'). \
         Slot groups need at least one alternative and entity names may only contain letters, \
         digits and underscores."
    )]
    UnresolvedPlaceholder {
        utterance: String,
        intent: String,
        language: String,
    },

    #[error("Invalid configuration file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Platform generator '{generator}' failed for language '{language}': {source}")]
    PlatformGenerator {
        generator: String,
        language: String,
        #[source]
        source: PluginError,
    },

    #[error("Utterance template service '{service}' failed for language '{language}': {source}")]
    TemplateService {
        service: String,
        language: String,
        #[source]
        source: PluginError,
    },

    #[error("Failed to serialize intent configurations: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CompilerError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompilerError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Stable code identifying the error kind
    pub fn code(&self) -> &'static str {
        match self {
            CompilerError::UnmappedEntity { .. } => ERR_UNMAPPED_ENTITY,
            CompilerError::Io { .. } => ERR_IO,
            CompilerError::Discovery { .. } => ERR_DISCOVERY,
            CompilerError::TemplateFormat { .. } => ERR_TEMPLATE_FORMAT,
            CompilerError::UnresolvedPlaceholder { .. } => ERR_UNRESOLVED_PLACEHOLDER,
            CompilerError::Config { .. } => ERR_CONFIG,
            CompilerError::PlatformGenerator { .. } => ERR_PLATFORM_GENERATOR,
            CompilerError::TemplateService { .. } => ERR_TEMPLATE_SERVICE,
            CompilerError::Serialize(_) => ERR_SERIALIZE,
        }
    }

    /// The build guarantee that was violated
    pub fn guarantee(&self) -> &'static str {
        get_guarantee(self.code())
    }
}
