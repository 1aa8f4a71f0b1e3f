//! Aggregate queries over a selection — the read side of prerequisite checks.
//!
//! All matching is case-insensitive. These functions are pure views over a
//! `&[Trait]` slice; the prerequisite interpreter in [`crate::prereq`] is
//! built entirely on top of them.

use serde::{Deserialize, Serialize};

use crate::trait_list::{trailing_level, Category, Trait};

/// How a condition matches trait names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamePattern {
    Exact(String),
    Prefix(String),
    Contains(String),
}

impl NamePattern {
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        match self {
            NamePattern::Exact(want) => name == want.to_lowercase(),
            NamePattern::Prefix(want) => name.starts_with(&want.to_lowercase()),
            NamePattern::Contains(want) => name.contains(&want.to_lowercase()),
        }
    }
}

/// Restricts a level check to entries with (or without) a note substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteFilter {
    Contains(String),
    Excludes(String),
}

impl NoteFilter {
    pub fn accepts(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        match self {
            NoteFilter::Contains(note) => name.contains(&note.to_lowercase()),
            NoteFilter::Excludes(note) => !name.contains(&note.to_lowercase()),
        }
    }
}

/// True if any selected trait name matches the pattern.
pub fn any_matching(selection: &[Trait], pattern: &NamePattern) -> bool {
    selection.iter().any(|t| pattern.matches(&t.name))
}

/// Number of selected traits whose name matches the pattern.
pub fn count_matching(selection: &[Trait], pattern: &NamePattern) -> usize {
    selection.iter().filter(|t| pattern.matches(&t.name)).count()
}

/// Number of distinct categories represented in the selection.
pub fn distinct_categories(selection: &[Trait]) -> usize {
    Category::ALL
        .iter()
        .filter(|cat| selection.iter().any(|t| t.category == **cat))
        .count()
}

/// Number of selected traits in one category.
pub fn category_count(selection: &[Trait], category: Category) -> usize {
    selection.iter().filter(|t| t.category == category).count()
}

/// Highest trailing level among selected traits whose name starts with
/// `prefix`, optionally filtered by a note substring.
///
/// Returns `None` when no matching trait is selected or none of the
/// matches carries a parseable level.
pub fn level_of(selection: &[Trait], prefix: &str, note: Option<&NoteFilter>) -> Option<i32> {
    let pattern = NamePattern::Prefix(prefix.to_string());
    selection
        .iter()
        .filter(|t| pattern.matches(&t.name))
        .filter(|t| note.map_or(true, |f| f.accepts(&t.name)))
        .filter_map(|t| trailing_level(&t.name))
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trait_list::Trait;

    fn sample() -> Vec<Trait> {
        vec![
            Trait::new("Magery 3", 35, Category::Power),
            Trait::new("Combat Reflexes", 15, Category::Advantage),
            Trait::new("Survival (Jungle)", 1, Category::Skill),
            Trait::new("Survival (Plains)", 1, Category::Skill),
            Trait::new("Light", 1, Category::Spell),
        ]
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let s = sample();
        assert!(any_matching(&s, &NamePattern::Exact("combat reflexes".into())));
        assert!(!any_matching(&s, &NamePattern::Exact("Combat".into())));
    }

    #[test]
    fn prefix_and_contains() {
        let s = sample();
        assert!(any_matching(&s, &NamePattern::Prefix("Survival".into())));
        assert!(any_matching(&s, &NamePattern::Contains("(jungle)".into())));
        assert!(!any_matching(&s, &NamePattern::Prefix("Jungle".into())));
    }

    #[test]
    fn count_matching_prefix() {
        let s = sample();
        assert_eq!(count_matching(&s, &NamePattern::Prefix("Survival".into())), 2);
        assert_eq!(count_matching(&s, &NamePattern::Exact("Light".into())), 1);
        assert_eq!(count_matching(&s, &NamePattern::Contains("zzz".into())), 0);
    }

    #[test]
    fn category_counters() {
        let s = sample();
        assert_eq!(distinct_categories(&s), 4);
        assert_eq!(category_count(&s, Category::Skill), 2);
        assert_eq!(category_count(&s, Category::Disadvantage), 0);
    }

    #[test]
    fn level_of_parses_trailing_level() {
        let s = sample();
        assert_eq!(level_of(&s, "Magery", None), Some(3));
        assert_eq!(level_of(&s, "Combat", None), None); // no level suffix
        assert_eq!(level_of(&s, "Karate", None), None); // not selected
    }

    #[test]
    fn level_of_takes_highest_match() {
        let s = vec![
            Trait::new("Hard to Kill 2", 4, Category::Advantage),
            Trait::new("Hard to Kill 5", 10, Category::Advantage),
        ];
        assert_eq!(level_of(&s, "Hard to Kill", None), Some(5));
    }

    #[test]
    fn level_of_honors_note_filter() {
        let s = vec![
            Trait::new("Power Investiture (Druidic) 3", 30, Category::Power),
            Trait::new("Power Investiture 2", 20, Category::Power),
        ];
        let druidic = NoteFilter::Contains("Druidic".into());
        let not_druidic = NoteFilter::Excludes("Druidic".into());
        assert_eq!(level_of(&s, "Power Investiture", Some(&druidic)), Some(3));
        assert_eq!(level_of(&s, "Power Investiture", Some(&not_druidic)), Some(2));
    }
}
