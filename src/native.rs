//! Node bridge
//!
//! Exposes slot expansion and single-language compilation to JavaScript
//! build tooling. Only built with the `napi` feature.

use napi_derive::napi;
use std::sync::Arc;

use crate::config::CompilerConfig;
use crate::discovery::TemplateMap;
use crate::entity::StaticEntityCatalog;
use crate::intent::{GenericIntent, Intent};
use crate::slots::expand_slots;
use crate::UtteranceCompiler;

fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

#[napi]
pub fn expand_slots_native(template: String) -> Vec<String> {
    expand_slots(&template)
}

/// Compile one language from in-memory templates and entity mappings.
/// Returns the intent configurations as JSON.
#[napi]
pub fn compile_language_native(
    language: String,
    templates: serde_json::Value,
    entities: serde_json::Value,
    intents: Vec<String>,
    generic_intents: Vec<String>,
) -> napi::Result<serde_json::Value> {
    let templates: TemplateMap = serde_json::from_value(templates).map_err(to_napi_error)?;
    let catalog: StaticEntityCatalog = serde_json::from_value(entities).map_err(to_napi_error)?;

    let mut declared: Vec<Intent> = intents.into_iter().map(Intent::Explicit).collect();
    for name in &generic_intents {
        let generic: GenericIntent = name.parse().map_err(to_napi_error)?;
        declared.push(Intent::Generic(generic));
    }

    let compiler = UtteranceCompiler::new(&CompilerConfig::new("."), Arc::new(catalog))
        .with_intents(declared);
    let configurations = compiler
        .compile_language(&language, &templates)
        .map_err(to_napi_error)?;

    serde_json::to_value(configurations).map_err(to_napi_error)
}
