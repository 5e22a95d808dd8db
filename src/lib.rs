//! # Utterance Template Compiler
//!
//! Turns per-language utterance templates into expanded, validated intent
//! configurations and hands them to platform generators.
//!
//! ## Template Syntax
//!
//! - `{table|seat}` is a slot group. Every alternative produces its own phrase.
//! - `{{partySize}}` references an entity. It is kept as a slot marker.
//! - `{{-|partySize}}` references an entity and enumerates its values and
//!   synonyms; each choice is written as `{{two|partySize}}`.
//!
//! ## Build Invariants
//!
//! 1. **Determinism**: identical templates and entity catalog produce identical,
//!    identically ordered intent configurations. The first slot varies slowest.
//!
//! 2. **Entity Coverage**: every entity referenced by an intent's utterances has a
//!    mapping in the catalog, otherwise the language fails with
//!    `UC-ERR-ENTITY-001`.
//!
//! 3. **No Dropped Intents**: a declared intent without templates is emitted with
//!    empty utterances and entities.
//!
//! 4. **Language Isolation**: languages are compiled independently and in
//!    parallel; a failing language does not stop the others, but fails the build.
//!
//! 5. **Copy Isolation**: every platform generator receives its own copy of the
//!    configurations.

mod assemble;
mod compiler;
mod config;
mod discovery;
mod dispatch;
mod emit;
mod entity;
mod error;
mod fingerprint;
mod intent;
mod resolver;
mod slots;
mod validate;

#[cfg(feature = "napi")]
mod native;


pub use assemble::assemble;
pub use compiler::{BuildReport, LanguageReport, UtteranceCompiler};
pub use config::{CompilerConfig, DEFAULT_TEMPLATE_FILE_NAME};
pub use discovery::{merge_templates, TemplateMap, TemplateStore, UtteranceTemplateService};
pub use dispatch::{dispatch, ensure_output_dir, PlatformGenerator};
pub use emit::{IntentsManifest, JsonIntentGenerator, INTENTS_FILE_NAME};
pub use entity::{EntityCatalog, EntityMapping, EntityValue, StaticEntityCatalog};
pub use error::*;
pub use fingerprint::fingerprint;
pub use intent::{GenericIntent, Intent, IntentConfiguration, ParseGenericIntentError};
pub use resolver::{
    expand_entities, expand_intent_templates, extract_entity_names, has_unresolved_placeholder,
    plain_text, ExpandedTemplates,
};
pub use slots::{expand_slots, expand_templates, parse_slots, Segment, SlotTemplate};
pub use validate::{validate_entities, validate_utterances};

#[cfg(feature = "napi")]
pub use native::{compile_language_native, expand_slots_native};
