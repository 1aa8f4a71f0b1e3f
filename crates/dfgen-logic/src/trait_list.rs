//! Core trait types — names, point costs, categories, and leveled-name helpers.
//!
//! A character build is a flat list of [`Trait`] values. Every other module
//! operates on `&[Trait]` slices, keeping the whole pipeline unit-testable
//! with plain data.
//!
//! # Leveled names
//!
//! Many traits encode a level in their name: `"Magery 3"`, `"ST +2"`,
//! `"Acute Vision 4"`. [`trailing_level`] parses that suffix and
//! [`bare_name`] strips it, which is what the merge pass and the
//! prerequisite level checks build on.

use serde::{Deserialize, Serialize};

/// Broad category of a selectable trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Primary attributes (ST, DX, IQ, HT).
    Attribute,
    /// Secondary characteristics (Will, Per, FP, HP).
    SecondaryTrait,
    Advantage,
    Disadvantage,
    Skill,
    Spell,
    /// Granted special abilities (powers, divine gifts).
    Power,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Attribute,
        Category::SecondaryTrait,
        Category::Advantage,
        Category::Disadvantage,
        Category::Skill,
        Category::Spell,
        Category::Power,
    ];
}

/// One selected (or selectable) trait: a name, a signed point cost, and a category.
///
/// Points are negative for disadvantages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub name: String,
    pub points: i32,
    pub category: Category,
}

impl Trait {
    pub fn new(name: impl Into<String>, points: i32, category: Category) -> Self {
        Self {
            name: name.into(),
            points,
            category,
        }
    }
}

/// Sum of all point costs in a selection.
pub fn total_points(traits: &[Trait]) -> i32 {
    traits.iter().map(|t| t.points).sum()
}

/// True if the selection already contains `name` (case-insensitive).
pub fn contains_name(traits: &[Trait], name: &str) -> bool {
    traits.iter().any(|t| t.name.eq_ignore_ascii_case(name))
}

/// Parse a trailing numeric level from a trait name.
///
/// The level is the last whitespace-separated token when it is all digits,
/// optionally preceded by a `+`: `"Magery 3"` → 3, `"ST +2"` → 2.
/// Parenthesised suffixes like `"Gullibility (12)"` are not levels.
pub fn trailing_level(name: &str) -> Option<i32> {
    let last = name.split_whitespace().last()?;
    let digits = last.strip_prefix('+').unwrap_or(last);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// The name with any trailing numeric level removed.
///
/// `"Acute Vision 4"` → `"Acute Vision"`, `"ST +1"` → `"ST"`. Names without
/// a level suffix come back unchanged.
pub fn bare_name(name: &str) -> &str {
    if trailing_level(name).is_none() {
        return name;
    }
    match name.rfind(char::is_whitespace) {
        Some(idx) => name[..idx].trim_end(),
        None => name,
    }
}

/// Fold leveled duplicates into single display entries.
///
/// Traits sharing a bare name (case-insensitive) collapse into one entry
/// that keeps the name of the highest-level member and the *sum* of all
/// members' points, so the selection total is conserved. Output order is
/// first-appearance order. This is a cosmetic reduction for reports; the
/// selectors themselves never produce merged entries.
pub fn merge_traits(traits: &[Trait]) -> Vec<Trait> {
    let mut merged: Vec<Trait> = Vec::new();
    let mut index: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for t in traits {
        let key = bare_name(&t.name).to_lowercase();
        match index.get(&key) {
            Some(&i) => {
                let slot = &mut merged[i];
                slot.points += t.points;
                let old_level = trailing_level(&slot.name).unwrap_or(i32::MIN);
                let new_level = trailing_level(&t.name).unwrap_or(i32::MIN);
                if new_level > old_level {
                    slot.name = t.name.clone();
                }
            }
            None => {
                index.insert(key, merged.len());
                merged.push(t.clone());
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_level_plain_suffix() {
        assert_eq!(trailing_level("Magery 3"), Some(3));
        assert_eq!(trailing_level("Acute Vision 12"), Some(12));
    }

    #[test]
    fn trailing_level_plus_suffix() {
        assert_eq!(trailing_level("ST +2"), Some(2));
        assert_eq!(trailing_level("Per +6"), Some(6));
    }

    #[test]
    fn trailing_level_absent() {
        assert_eq!(trailing_level("Combat Reflexes"), None);
        assert_eq!(trailing_level("Gullibility (12)"), None);
        assert_eq!(trailing_level("Luck"), None);
    }

    #[test]
    fn bare_name_strips_level() {
        assert_eq!(bare_name("Magery 3"), "Magery");
        assert_eq!(bare_name("ST +1"), "ST");
        assert_eq!(bare_name("Hard to Kill 2"), "Hard to Kill");
    }

    #[test]
    fn bare_name_keeps_unleveled() {
        assert_eq!(bare_name("Combat Reflexes"), "Combat Reflexes");
        assert_eq!(bare_name("Phobia (Crowds) (12)"), "Phobia (Crowds) (12)");
    }

    #[test]
    fn total_points_sums_signed() {
        let traits = vec![
            Trait::new("Luck", 15, Category::Advantage),
            Trait::new("Gluttony (12)", -5, Category::Disadvantage),
        ];
        assert_eq!(total_points(&traits), 10);
    }

    #[test]
    fn merge_collapses_same_bare_name() {
        let traits = vec![
            Trait::new("Acute Vision 2", 4, Category::Advantage),
            Trait::new("Luck", 15, Category::Advantage),
            Trait::new("Acute Vision 3", 6, Category::Advantage),
        ];
        let merged = merge_traits(&traits);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "Acute Vision 3");
        assert_eq!(merged[0].points, 10);
        assert_eq!(merged[1].name, "Luck");
    }

    #[test]
    fn merge_conserves_total() {
        let traits = vec![
            Trait::new("ST +1", 9, Category::Attribute),
            Trait::new("ST +2", 18, Category::Attribute),
            Trait::new("Bow", 4, Category::Skill),
            Trait::new("Bow", 4, Category::Skill),
        ];
        let merged = merge_traits(&traits);
        assert_eq!(total_points(&merged), total_points(&traits));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_keeps_max_level_name() {
        let traits = vec![
            Trait::new("Magery 3", 35, Category::Power),
            Trait::new("Magery 1", 15, Category::Power),
        ];
        let merged = merge_traits(&traits);
        assert_eq!(merged[0].name, "Magery 3");
        assert_eq!(merged[0].points, 50);
    }

    #[test]
    fn merge_is_first_appearance_ordered() {
        let traits = vec![
            Trait::new("Bow", 4, Category::Skill),
            Trait::new("Climbing", 1, Category::Skill),
            Trait::new("Bow", 2, Category::Skill),
        ];
        let merged = merge_traits(&traits);
        assert_eq!(merged[0].name, "Bow");
        assert_eq!(merged[1].name, "Climbing");
    }

    #[test]
    fn contains_name_case_insensitive() {
        let traits = vec![Trait::new("Combat Reflexes", 15, Category::Advantage)];
        assert!(contains_name(&traits, "combat reflexes"));
        assert!(!contains_name(&traits, "Luck"));
    }
}
