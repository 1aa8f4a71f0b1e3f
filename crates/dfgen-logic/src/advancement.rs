//! Incremental trait improvement — spending a point budget on a fixed
//! roster of names with no mutual exclusion.
//!
//! Unlike the exact-budget selector, improvement never backtracks: each
//! step either buys a roster name at its base cost or raises an
//! already-selected one to the next point tier, until the budget runs out
//! or nothing affordable remains.

use rand::Rng;

use crate::trait_list::{Category, Trait};

/// Next step on the point-tier ladder: 0→1, 1→2, 2→4, then +4 per step.
///
/// The ladder is strictly increasing and unbounded: 1, 2, 4, 8, 12, 16, …
pub fn next_point_tier(points: i32) -> i32 {
    match points {
        p if p <= 0 => 1,
        1 => 2,
        2 => 4,
        p => p + 4,
    }
}

/// Spend `budget` improving traits drawn uniformly from `names`.
///
/// A name not yet in `selection` is appended at `base_points`; a name
/// already present is raised to its next tier, spending the new tier's
/// value. A candidate whose cost exceeds the remaining budget is dropped
/// from the roster for the rest of this call rather than retried, so the
/// loop cannot spin without progress.
pub fn improve_traits(
    names: &[&str],
    budget: i32,
    selection: &mut Vec<Trait>,
    base_points: i32,
    category: Category,
    rng: &mut impl Rng,
) {
    let mut roster: Vec<&str> = names.to_vec();
    let mut budget = budget;

    while !roster.is_empty() && budget > 0 {
        let idx = rng.gen_range(0..roster.len());
        let name = roster[idx];

        match selection
            .iter_mut()
            .find(|t| t.name.eq_ignore_ascii_case(name))
        {
            Some(existing) => {
                let tier = next_point_tier(existing.points);
                if tier <= budget {
                    budget -= tier;
                    existing.points = tier;
                } else {
                    roster.swap_remove(idx);
                }
            }
            None => {
                if base_points <= budget {
                    budget -= base_points;
                    selection.push(Trait::new(name, base_points, category));
                } else {
                    roster.swap_remove(idx);
                }
            }
        }
    }
}
