//! Slot Expansion
//!
//! Expands `{alt1|alt2|...}` slot groups into the cartesian product of
//! concrete phrases. Double-brace entity references are left untouched.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Single-brace group with no nested braces
    static ref SLOT_GROUP_RE: Regex = Regex::new(r"\{([^{}]+)\}").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// Index into the recorded alternative lists
    Slot(usize),
}

/// A template split into literal text and positional slot groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTemplate {
    pub segments: Vec<Segment>,
    pub alternatives: Vec<Vec<String>>,
}

impl SlotTemplate {
    pub fn has_slots(&self) -> bool {
        !self.alternatives.is_empty()
    }

    fn render(&self, choice: &[&str]) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Slot(i) => choice[*i],
            })
            .collect()
    }
}

pub fn parse_slots(template: &str) -> SlotTemplate {
    let mut segments = Vec::new();
    let mut alternatives = Vec::new();
    let mut literal = String::new();
    let mut last = 0;

    for cap in SLOT_GROUP_RE.captures_iter(template) {
        let (Some(whole), Some(content)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        // `{{name}}` and `{{-|name}}` are entity references, not slot groups
        let preceded_by_brace = template[..whole.start()].ends_with('{');
        let followed_by_brace = template[whole.end()..].starts_with('}');
        if preceded_by_brace || followed_by_brace {
            continue;
        }

        literal.push_str(&template[last..whole.start()]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Slot(alternatives.len()));
        alternatives.push(content.as_str().split('|').map(str::to_string).collect());
        last = whole.end();
    }

    literal.push_str(&template[last..]);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    SlotTemplate {
        segments,
        alternatives,
    }
}

/// Cartesian product with the first factor varying slowest.
/// No factors yields one empty combination; any empty factor yields none.
pub fn combinations<T: AsRef<str>>(factors: &[Vec<T>]) -> Vec<Vec<&str>> {
    if factors.is_empty() {
        return vec![Vec::new()];
    }
    factors
        .iter()
        .map(|factor| factor.iter().map(|alt| alt.as_ref()))
        .multi_cartesian_product()
        .collect()
}

pub fn expand_slots(template: &str) -> Vec<String> {
    let parsed = parse_slots(template);
    if !parsed.has_slots() {
        return vec![template.to_string()];
    }

    combinations(&parsed.alternatives)
        .iter()
        .map(|choice| parsed.render(choice))
        .collect()
}

pub fn expand_templates<S: AsRef<str>>(templates: &[S]) -> Vec<String> {
    templates
        .iter()
        .flat_map(|template| expand_slots(template.as_ref()))
        .collect()
}
