//! Intent Module for the Utterance Compiler
//!
//! Declared intents, generic (platform-independent) intents and the
//! per-intent configuration handed to platform generators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Platform-independent built-in intents. Serialized in camelCase,
/// deserialized with the same case-insensitive rules as `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum GenericIntent {
    Invoke,
    EndSession,
    Unhandled,
    Unanswered,
    Yes,
    No,
    Help,
    Cancel,
    Stop,
}

impl GenericIntent {
    pub const ALL: [GenericIntent; 9] = [
        GenericIntent::Invoke,
        GenericIntent::EndSession,
        GenericIntent::Unhandled,
        GenericIntent::Unanswered,
        GenericIntent::Yes,
        GenericIntent::No,
        GenericIntent::Help,
        GenericIntent::Cancel,
        GenericIntent::Stop,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            GenericIntent::Invoke => "Invoke",
            GenericIntent::EndSession => "EndSession",
            GenericIntent::Unhandled => "Unhandled",
            GenericIntent::Unanswered => "Unanswered",
            GenericIntent::Yes => "Yes",
            GenericIntent::No => "No",
            GenericIntent::Help => "Help",
            GenericIntent::Cancel => "Cancel",
            GenericIntent::Stop => "Stop",
        }
    }

    /// `Help` → `helpGenericIntent`
    pub fn template_key(&self) -> String {
        lower_first(&format!("{}GenericIntent", self.display_name()))
    }
}

impl fmt::Display for GenericIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown generic intent '{0}'")]
pub struct ParseGenericIntentError(pub String);

impl FromStr for GenericIntent {
    type Err = ParseGenericIntentError;

    /// Case-insensitive match on the display name (`help`, `Help`, `endSession`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenericIntent::ALL
            .iter()
            .copied()
            .find(|g| g.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseGenericIntentError(s.to_string()))
    }
}

impl TryFrom<String> for GenericIntent {
    type Error = ParseGenericIntentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An intent declared by the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    Explicit(String),
    Generic(GenericIntent),
}

impl Intent {
    pub fn explicit(name: impl Into<String>) -> Self {
        Intent::Explicit(name.into())
    }

    /// Key under which the intent's templates are stored
    pub fn template_key(&self) -> String {
        match self {
            Intent::Explicit(name) => format!("{}Intent", name),
            Intent::Generic(generic) => generic.template_key(),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Explicit(name) => f.write_str(name),
            Intent::Generic(generic) => write!(f, "{}", generic),
        }
    }
}

impl From<GenericIntent> for Intent {
    fn from(generic: GenericIntent) -> Self {
        Intent::Generic(generic)
    }
}

/// Expanded, validated record for one intent in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentConfiguration {
    pub intent: Intent,
    pub utterances: Vec<String>,
    pub entities: Vec<String>,
}

impl IntentConfiguration {
    pub fn empty(intent: Intent) -> Self {
        Self {
            intent,
            utterances: Vec::new(),
            entities: Vec::new(),
        }
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_template_key() {
        assert_eq!(Intent::explicit("bookTable").template_key(), "bookTableIntent");
    }

    #[test]
    fn test_generic_template_key_lowercases_first_char() {
        assert_eq!(Intent::Generic(GenericIntent::Help).template_key(), "helpGenericIntent");
        assert_eq!(
            Intent::Generic(GenericIntent::EndSession).template_key(),
            "endSessionGenericIntent"
        );
    }

    #[test]
    fn test_generic_intent_from_str() {
        assert_eq!("help".parse::<GenericIntent>(), Ok(GenericIntent::Help));
        assert_eq!("EndSession".parse::<GenericIntent>(), Ok(GenericIntent::EndSession));
        assert!("dance".parse::<GenericIntent>().is_err());
    }

    #[test]
    fn test_generic_intent_deserialization_ignores_case() {
        for (json, expected) in [
            (r#""Help""#, GenericIntent::Help),
            (r#""ENDSESSION""#, GenericIntent::EndSession),
            (r#""endSession""#, GenericIntent::EndSession),
        ] {
            assert_eq!(serde_json::from_str::<GenericIntent>(json).unwrap(), expected);
        }
        let intent: Intent = serde_json::from_str(r#"{"generic":"Cancel"}"#).unwrap();
        assert_eq!(intent, Intent::Generic(GenericIntent::Cancel));
        assert!(serde_json::from_str::<GenericIntent>(r#""helpme""#).is_err());
    }

    #[test]
    fn test_intent_serialization() {
        let json = serde_json::to_string(&Intent::Generic(GenericIntent::Cancel)).unwrap();
        assert_eq!(json, r#"{"generic":"cancel"}"#);
        let json = serde_json::to_string(&Intent::explicit("order")).unwrap();
        assert_eq!(json, r#"{"explicit":"order"}"#);
    }
}
