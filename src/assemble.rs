//! Intent Configuration Assembly
//!
//! Associates expanded utterances with the declared intents.

use std::collections::{BTreeMap, HashSet};
use tracing::warn;

use crate::entity::EntityCatalog;
use crate::error::CompilerError;
use crate::intent::{Intent, IntentConfiguration};
use crate::resolver::ExpandedTemplates;
use crate::validate::{validate_entities, validate_utterances};

/// One configuration per declared intent, in declaration order.
/// Intents without templates get an empty configuration.
pub fn assemble(
    intents: &[Intent],
    expanded: &BTreeMap<String, ExpandedTemplates>,
    language: &str,
    catalog: &dyn EntityCatalog,
) -> Result<Vec<IntentConfiguration>, CompilerError> {
    let mut configurations = Vec::with_capacity(intents.len());
    let mut consumed = HashSet::new();

    for intent in intents {
        let key = intent.template_key();
        let Some(templates) = expanded.get(&key) else {
            configurations.push(IntentConfiguration::empty(intent.clone()));
            continue;
        };
        consumed.insert(key);

        let entities = templates.entity_names();
        validate_entities(intent, language, &entities, catalog)?;
        validate_utterances(intent, language, &templates.utterances)?;

        configurations.push(IntentConfiguration {
            intent: intent.clone(),
            utterances: templates.utterances.clone(),
            entities,
        });
    }

    for key in expanded.keys().filter(|key| !consumed.contains(*key)) {
        warn!(%language, template_key = %key, "Templates not used by any declared intent");
    }

    Ok(configurations)
}
