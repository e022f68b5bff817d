//! Equation numbering
//!
//! After math reformatting every labelled equation carries an
//! `<a id="eq:..."></a>` anchor. Those anchors are numbered 1, 2, 3, ... in
//! document order and every reference to an `eq:` label is rewritten to show
//! its number. Link targets and anchor ids keep the raw label.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::Serialize;

lazy_static! {
    static ref EQUATION_ANCHOR: Regex =
        Regex::new(r#"(?m)^\s*<a\s+id="(eq:[^"]+)"></a>"#).unwrap();
    static ref LINKED_LABEL: Regex =
        Regex::new(r"\[eq:([^\]]+)\]\(#(eq:[^)]+)\)").unwrap();
    static ref DOUBLE_BRACKET_LABEL: Regex =
        Regex::new(r"\[\[eq:([^\]]+)\]\]\(#(eq:[^)]+)\)").unwrap();
    /// Bare `eq:label`; group 1 catches link targets and anchor ids.
    static ref BARE_LABEL: Regex =
        Regex::new(r#"(\(#|id=")?\beq:[A-Za-z0-9_.-]+\b"#).unwrap();
}

/// Equation label to display number, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EquationMap {
    numbers: IndexMap<String, String>,
}

impl EquationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `label` under the next free number. Returns `false` if the
    /// label was already numbered.
    pub fn insert(&mut self, label: &str) -> bool {
        if self.numbers.contains_key(label) {
            return false;
        }
        let number = (self.numbers.len() + 1).to_string();
        self.numbers.insert(label.to_string(), number);
        true
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.numbers.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.numbers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Number every `<a id="eq:..."></a>` anchor line in order of appearance.
pub fn collect_equation_numbers(text: &str) -> EquationMap {
    let mut map = EquationMap::new();
    for caps in EQUATION_ANCHOR.captures_iter(text) {
        map.insert(&caps[1]);
    }
    map
}

/// Replace equation references with their numbers.
///
/// Runs three rewrites in order: `[eq:x](#eq:y)`, `[[eq:x]](#eq:y)`, then
/// bare `eq:x`. Labels with no number are left alone.
pub fn substitute_equation_numbers(map: &EquationMap, text: &str) -> String {
    let text = LINKED_LABEL.replace_all(text, |caps: &Captures| {
        let target = &caps[2];
        match map.get(target) {
            Some(number) => format!("[{}](#{})", number, target),
            None => caps[0].to_string(),
        }
    });

    let text = DOUBLE_BRACKET_LABEL.replace_all(&text, |caps: &Captures| {
        let target = &caps[2];
        match map.get(target) {
            Some(number) => format!("[[{}]](#{})", number, target),
            None => caps[0].to_string(),
        }
    });

    BARE_LABEL
        .replace_all(&text, |caps: &Captures| {
            let whole = &caps[0];
            if caps.get(1).is_some() {
                return whole.to_string();
            }
            map.get(whole).unwrap_or(whole).to_string()
        })
        .into_owned()
}
