//! Entity Reference Resolver
//!
//! Second expansion pass over slot-expanded phrases. `{{-|name}}` asks for the
//! entity's values and synonyms to be enumerated; each choice is written back
//! as the annotated reference `{{choice|name}}`. Bare `{{name}}` references only
//! mark the entity's position and are never expanded.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use crate::entity::EntityCatalog;
use crate::slots::{combinations, expand_templates};

lazy_static! {
    static ref SYNONYM_REFERENCE_RE: Regex = Regex::new(r"\{\{-\|(\w+)\}\}").unwrap();
    /// Any double-brace reference; group 1 is the entity name after the last `|`
    static ref ENTITY_REFERENCE_RE: Regex =
        Regex::new(r"\{\{(?:[^{}]*\|)?(\w+)\}\}").unwrap();
    static ref ANNOTATED_REFERENCE_RE: Regex =
        Regex::new(r"\{\{(?:([^{}]*)\|)?(\w+)\}\}").unwrap();
}

enum Piece<'a> {
    Literal(&'a str),
    Fallback(&'a str),
    Entity { factor: usize, name: &'a str },
}

/// Expand every synonym-requesting reference in `phrase` for `language`
pub fn expand_entities(phrase: &str, language: &str, catalog: &dyn EntityCatalog) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut factors: Vec<Vec<&str>> = Vec::new();
    let mut last = 0;

    for cap in SYNONYM_REFERENCE_RE.captures_iter(phrase) {
        let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        pieces.push(Piece::Literal(&phrase[last..whole.start()]));
        last = whole.end();

        let name = name.as_str();
        match catalog
            .lookup(name)
            .and_then(|mapping| mapping.values_for(language))
        {
            Some(values) => {
                let merged = values
                    .iter()
                    .flat_map(|v| {
                        v.synonyms
                            .iter()
                            .map(String::as_str)
                            .chain(std::iter::once(v.value.as_str()))
                    })
                    .collect();
                pieces.push(Piece::Entity {
                    factor: factors.len(),
                    name,
                });
                factors.push(merged);
            }
            None => pieces.push(Piece::Fallback(name)),
        }
    }
    pieces.push(Piece::Literal(&phrase[last..]));

    combinations(&factors)
        .iter()
        .map(|choice| {
            pieces
                .iter()
                .map(|piece| match piece {
                    Piece::Literal(text) => text.to_string(),
                    Piece::Fallback(name) => format!("{{{{{}}}}}", name),
                    Piece::Entity { factor, name } => {
                        format!("{{{{{}|{}}}}}", choice[*factor], name)
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// Distinct entity names referenced by `phrases`, in first-appearance order
pub fn extract_entity_names<S: AsRef<str>>(phrases: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for phrase in phrases {
        for cap in ENTITY_REFERENCE_RE.captures_iter(phrase.as_ref()) {
            if let Some(name) = cap.get(1) {
                if seen.insert(name.as_str().to_string()) {
                    names.push(name.as_str().to_string());
                }
            }
        }
    }

    names
}

/// Render an utterance without entity annotations:
/// `{{two|partySize}}` → `two`, `{{partySize}}` → `partySize`
pub fn plain_text(utterance: &str) -> String {
    ANNOTATED_REFERENCE_RE
        .replace_all(utterance, |caps: &regex::Captures| match caps.get(1) {
            Some(value) => value.as_str().to_string(),
            None => caps[2].to_string(),
        })
        .into_owned()
}

/// True when braces remain outside well-formed `{{name}}` / `{{value|name}}`
/// references, e.g. `{}`, `{{home town}}` or `{{-|party-size}}`
pub fn has_unresolved_placeholder(utterance: &str) -> bool {
    let rest = ANNOTATED_REFERENCE_RE.replace_all(utterance, "");
    rest.contains('{') || rest.contains('}')
}

/// Templates of one intent key after both expansion passes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedTemplates {
    /// After slot expansion only; source of the referenced entity names
    pub phrases: Vec<String>,
    pub utterances: Vec<String>,
}

impl ExpandedTemplates {
    pub fn entity_names(&self) -> Vec<String> {
        extract_entity_names(&self.phrases)
    }
}

pub fn expand_intent_templates(
    templates: &[String],
    language: &str,
    catalog: &dyn EntityCatalog,
) -> ExpandedTemplates {
    let phrases = expand_templates(templates);
    let utterances: Vec<String> = phrases
        .iter()
        .flat_map(|phrase| expand_entities(phrase, language, catalog))
        .collect();

    debug!(
        %language,
        templates = templates.len(),
        phrases = phrases.len(),
        utterances = utterances.len(),
        "Expanded templates"
    );

    ExpandedTemplates {
        phrases,
        utterances,
    }
}
