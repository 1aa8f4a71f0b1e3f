//! Candidate pool construction — groups of mutually exclusive alternatives.
//!
//! A [`CandidateGroup`] holds trait alternatives that exclude each other
//! (picking one consumes the whole group). A [`CandidatePool`] is the set
//! of groups offered to one selection call. The builders here expand the
//! leveled-trait shorthand the template catalogs are written in.

use crate::trait_list::{Category, Trait};

/// Mutually exclusive trait alternatives; at most one is ever selected.
pub type CandidateGroup = Vec<Trait>;

/// The groups offered together to one exact-budget selection call.
pub type CandidatePool = Vec<CandidateGroup>;

/// A single-trait group.
pub fn single(name: &str, points: i32, category: Category) -> CandidateGroup {
    vec![Trait::new(name, points, category)]
}

/// A group built from `(name, points)` pairs sharing one category.
pub fn group(entries: &[(&str, i32)], category: Category) -> CandidateGroup {
    entries
        .iter()
        .map(|&(name, points)| Trait::new(name, points, category))
        .collect()
}

/// Expand a leveled trait into one alternative per level.
///
/// `template` contains a `{}` placeholder for the level number; the cost of
/// level N is `points_per_level * N`. `levels("Acute Hearing {}", 2, 3, ..)`
/// yields levels 1..=3 costing 2, 4, 6.
pub fn levels(
    template: &str,
    points_per_level: i32,
    num_levels: i32,
    category: Category,
) -> CandidateGroup {
    (1..=num_levels)
        .map(|level| {
            Trait::new(
                template.replace("{}", &level.to_string()),
                points_per_level * level,
                category,
            )
        })
        .collect()
}

/// Expand a self-control disadvantage into its four roll variants.
///
/// `base_points` is the cost at a self-control number of 12. The (15)
/// variant costs half, (9) one-and-a-half times, (6) double, with the
/// halves truncated toward zero.
pub fn self_control_levels(name: &str, base_points: i32, category: Category) -> CandidateGroup {
    vec![
        Trait::new(format!("{name} (15)"), base_points / 2, category),
        Trait::new(format!("{name} (12)"), base_points, category),
        Trait::new(format!("{name} (9)"), base_points * 3 / 2, category),
        Trait::new(format!("{name} (6)"), base_points * 2, category),
    ]
}

/// Two mutually exclusive self-control disadvantages in one group.
pub fn self_control_levels2(
    name1: &str,
    base_points1: i32,
    name2: &str,
    base_points2: i32,
    category: Category,
) -> CandidateGroup {
    let mut combined = self_control_levels(name1, base_points1, category);
    combined.extend(self_control_levels(name2, base_points2, category));
    combined
}
