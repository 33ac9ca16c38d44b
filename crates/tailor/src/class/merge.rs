//! Conflict resolution for utility-class lists.

use std::collections::{HashMap, HashSet};

use super::group::{classify, overridden_by};
use super::parse::ParsedClass;

/// A class removed by [`explain_merge`], with the class that replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedClass {
    /// The removed token.
    pub class: String,
    /// The later token governing the same property.
    pub overridden_by: String,
}

/// Outcome of a merge, token by token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Surviving tokens, in their original relative order.
    pub kept: Vec<String>,
    /// Removed tokens, in their original relative order.
    pub dropped: Vec<DroppedClass>,
}

impl MergeReport {
    /// The merged class string.
    pub fn class_name(&self) -> String {
        self.kept.join(" ")
    }
}

struct Resolution<'a> {
    kept: Vec<&'a str>,
    dropped: Vec<(&'a str, &'a str)>,
}

/// Walks the tokens from last to first; the first token seen for a conflict
/// key wins and claims the keys of the narrower groups it overrides.
fn resolve(classes: &str) -> Resolution<'_> {
    let mut claimed: HashMap<String, &str> = HashMap::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept = Vec::new();
    let mut dropped = Vec::new();

    for token in classes.split_whitespace().rev() {
        if !seen.insert(token) {
            dropped.push((token, token));
            continue;
        }

        let parsed = ParsedClass::parse(token);
        let Some(group) = classify(parsed.base) else {
            kept.push(token);
            continue;
        };

        let scope = parsed.scope();
        let key = format!("{}{}", scope, group);
        if let Some(winner) = claimed.get(&key) {
            dropped.push((token, *winner));
            continue;
        }

        claimed.insert(key, token);
        for narrow in overridden_by(&group) {
            claimed
                .entry(format!("{}{}", scope, narrow))
                .or_insert(token);
        }
        kept.push(token);
    }

    kept.reverse();
    dropped.reverse();
    Resolution { kept, dropped }
}

/// Merges a class list so that later utilities win over earlier ones
/// governing the same property.
///
/// Classes that govern different properties are all kept, as are classes
/// that are not recognised utilities. Exact duplicates collapse to their last
/// occurrence.
///
/// # Example
///
/// ```rust
/// use tailor::class::merge_classes;
///
/// assert_eq!(merge_classes("px-2 py-1 bg-red-500 px-4"), "py-1 bg-red-500 px-4");
/// assert_eq!(merge_classes("text-sm text-white text-base"), "text-white text-base");
/// ```
pub fn merge_classes(classes: &str) -> String {
    resolve(classes).kept.join(" ")
}

/// Like [`merge_classes`], but reports which tokens were dropped and why.
pub fn explain_merge(classes: &str) -> MergeReport {
    let resolution = resolve(classes);
    MergeReport {
        kept: resolution.kept.iter().map(|t| t.to_string()).collect(),
        dropped: resolution
            .dropped
            .iter()
            .map(|(class, winner)| DroppedClass {
                class: class.to_string(),
                overridden_by: winner.to_string(),
            })
            .collect(),
    }
}
