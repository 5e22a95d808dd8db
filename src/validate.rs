//! Entity Validation
//!
//! Every entity referenced by an intent's utterances must have a mapping in
//! the entity catalog. The first unmapped name aborts the language.

use tracing::error;

use crate::entity::EntityCatalog;
use crate::error::CompilerError;
use crate::intent::Intent;
use crate::resolver::has_unresolved_placeholder;

pub fn validate_entities(
    intent: &Intent,
    language: &str,
    entities: &[String],
    catalog: &dyn EntityCatalog,
) -> Result<(), CompilerError> {
    let Some(unmapped) = entities.iter().find(|name| catalog.lookup(name).is_none()) else {
        return Ok(());
    };

    let mut known = catalog.known_names();
    known.sort();

    error!(
        entity = %unmapped,
        %intent,
        %language,
        "Unmapped entity referenced in utterances"
    );

    Err(CompilerError::UnmappedEntity {
        entity: unmapped.clone(),
        intent: intent.to_string(),
        language: language.to_string(),
        known,
    })
}

/// Rejects utterances with braces left over after both expansion passes
pub fn validate_utterances(
    intent: &Intent,
    language: &str,
    utterances: &[String],
) -> Result<(), CompilerError> {
    let Some(unresolved) = utterances.iter().find(|u| has_unresolved_placeholder(u)) else {
        return Ok(());
    };

    error!(
        utterance = %unresolved,
        %intent,
        %language,
        "Unresolved placeholder in utterance"
    );

    Err(CompilerError::UnresolvedPlaceholder {
        utterance: unresolved.clone(),
        intent: intent.to_string(),
        language: language.to_string(),
    })
}
