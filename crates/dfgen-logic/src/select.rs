//! Exact-budget random selection over candidate pools.
//!
//! The selector draws groups from the pool in uniform random order, then
//! scans each drawn group in uniform random order for an acceptable
//! alternative. A pass that ends with leftover points is discarded and the
//! whole selection restarts from a fresh copy of the pool — the caller's
//! pool is never mutated. Restarts are bounded by [`PickPolicy::max_attempts`]
//! so an unsatisfiable pool surfaces as an error instead of a hang.
//!
//! [`pick_exact_gated`] additionally consults a [`PrereqTable`]: a candidate
//! is only acceptable while its prerequisite holds against everything the
//! caller has already committed plus everything picked so far this call.

use rand::Rng;
use thiserror::Error;

use crate::catalog::CandidatePool;
use crate::prereq::PrereqTable;
use crate::trait_list::{contains_name, Trait};

/// Selection failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// No pass summed exactly to the target within the attempt budget.
    /// Either the pool cannot reach the target at all, or the prerequisite
    /// gating keeps closing off the paths that would.
    #[error("no selection summing exactly to {target} found in {attempts} attempts")]
    RetriesExhausted { target: i32, attempts: u32 },
}

/// Tunable selection behavior.
#[derive(Debug, Clone)]
pub struct PickPolicy {
    /// Full-restart passes to try before giving up. The original design
    /// retried forever; the bound turns a latent non-termination risk into
    /// a reported error.
    pub max_attempts: u32,
    /// Permit two picks with the same name in one run.
    pub allow_duplicates: bool,
}

impl Default for PickPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            allow_duplicates: false,
        }
    }
}

/// Pick traits from `pool` whose points sum exactly to `target`.
///
/// Each group yields at most one trait and each pass visits each group at
/// most once. A `target` of zero returns an empty selection.
pub fn pick_exact(
    pool: &CandidatePool,
    target: i32,
    policy: &PickPolicy,
    rng: &mut impl Rng,
) -> Result<Vec<Trait>, SelectError> {
    pick_exact_gated(pool, target, &PrereqTable::new(), &[], policy, rng)
}

/// [`pick_exact`] with prerequisite gating.
///
/// `committed` is whatever the caller has already accepted into the broader
/// build: prerequisites evaluate against `committed` plus the current
/// in-progress picks, and the duplicate-name check spans both. Traits with
/// no entry in `prereqs` are always eligible.
pub fn pick_exact_gated(
    pool: &CandidatePool,
    target: i32,
    prereqs: &PrereqTable,
    committed: &[Trait],
    policy: &PickPolicy,
    rng: &mut impl Rng,
) -> Result<Vec<Trait>, SelectError> {
    for attempt in 1..=policy.max_attempts {
        if let Some(picked) = attempt_pick(pool, target, prereqs, committed, policy, rng) {
            if attempt > 1 {
                log::debug!("target {target} reached on attempt {attempt}");
            }
            return Ok(picked);
        }
    }
    Err(SelectError::RetriesExhausted {
        target,
        attempts: policy.max_attempts,
    })
}

/// One selection pass. Returns `None` when the pool runs out with points
/// still unspent.
fn attempt_pick(
    pool: &CandidatePool,
    target: i32,
    prereqs: &PrereqTable,
    committed: &[Trait],
    policy: &PickPolicy,
    rng: &mut impl Rng,
) -> Option<Vec<Trait>> {
    let mut pool = pool.to_vec();
    // Prerequisites and duplicate checks see committed picks and this
    // pass's picks as one selection; only the suffix is returned.
    let mut selected = committed.to_vec();
    let mut points_left = target;

    while !pool.is_empty() && points_left != 0 {
        // The drawn group is consumed whether or not it yields a trait.
        let mut group = pool.swap_remove(rng.gen_range(0..pool.len()));
        while !group.is_empty() {
            let idx = rng.gen_range(0..group.len());
            if acceptable(&group[idx], points_left, &selected, prereqs, policy) {
                let picked = group.swap_remove(idx);
                points_left -= picked.points;
                selected.push(picked);
                break;
            }
            group.swap_remove(idx);
        }
    }

    if points_left == 0 {
        Some(selected.split_off(committed.len()))
    } else {
        None
    }
}

fn acceptable(
    candidate: &Trait,
    points_left: i32,
    selected: &[Trait],
    prereqs: &PrereqTable,
    policy: &PickPolicy,
) -> bool {
    if candidate.points.abs() > points_left.abs() {
        return false;
    }
    if !policy.allow_duplicates && contains_name(selected, &candidate.name) {
        return false;
    }
    prereqs.satisfied(&candidate.name, selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{group, single};
    use crate::prereq::{compile, PrereqTable, RawCondition};
    use crate::trait_list::{total_points, Category};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn only_exact_sum_path_is_taken() {
        // Pool [[A 5, B 9], [C 30]], target 30: the only exact-sum result
        // is [C] alone, whatever order the dice come up in.
        let pool = vec![
            group(&[("A", 5), ("B", 9)], Category::Advantage),
            single("C", 30, Category::Advantage),
        ];
        for seed in 0..50 {
            let picked = pick_exact(&pool, 30, &PickPolicy::default(), &mut rng(seed)).unwrap();
            assert_eq!(picked.len(), 1, "seed {seed}");
            assert_eq!(picked[0].name, "C");
        }
    }

    #[test]
    fn sums_are_exact_across_seeds() {
        let pool = vec![
            group(&[("ST +1", 9), ("ST +2", 18), ("ST +3", 27)], Category::Attribute),
            group(&[("Fit", 5), ("Very Fit", 15)], Category::Advantage),
            single("Combat Reflexes", 15, Category::Advantage),
            single("Weapon Bond", 1, Category::Advantage),
            group(&[("Luck", 15), ("Extraordinary Luck", 30)], Category::Advantage),
        ];
        for seed in 0..100 {
            let picked = pick_exact(&pool, 30, &PickPolicy::default(), &mut rng(seed)).unwrap();
            assert_eq!(total_points(&picked), 30, "seed {seed}");
        }
    }

    #[test]
    fn negative_target_spends_disadvantages() {
        let pool = vec![
            group(&[("Gluttony (15)", -2), ("Gluttony (12)", -5)], Category::Disadvantage),
            single("Stubbornness", -5, Category::Disadvantage),
            group(&[("Overweight", -1), ("Fat", -3)], Category::Disadvantage),
        ];
        for seed in 0..50 {
            let picked = pick_exact(&pool, -10, &PickPolicy::default(), &mut rng(seed)).unwrap();
            assert_eq!(total_points(&picked), -10, "seed {seed}");
        }
    }

    #[test]
    fn zero_target_picks_nothing() {
        let pool = vec![single("Luck", 15, Category::Advantage)];
        let picked = pick_exact(&pool, 0, &PickPolicy::default(), &mut rng(7)).unwrap();
        assert!(picked.is_empty());
    }

    #[test]
    fn at_most_one_trait_per_group() {
        let pool = vec![
            group(&[("Axe/Mace", 8), ("Broadsword", 8), ("Spear", 8)], Category::Skill),
            single("Shield", 8, Category::Skill),
        ];
        for seed in 0..50 {
            let picked = pick_exact(&pool, 16, &PickPolicy::default(), &mut rng(seed)).unwrap();
            assert_eq!(picked.len(), 2, "seed {seed}");
            let from_group = picked
                .iter()
                .filter(|t| ["Axe/Mace", "Broadsword", "Spear"].contains(&t.name.as_str()))
                .count();
            assert_eq!(from_group, 1, "seed {seed}");
        }
    }

    #[test]
    fn caller_pool_is_untouched() {
        let pool = vec![
            group(&[("A", 5), ("B", 9)], Category::Advantage),
            single("C", 30, Category::Advantage),
        ];
        let snapshot = pool.clone();
        pick_exact(&pool, 30, &PickPolicy::default(), &mut rng(3)).unwrap();
        assert_eq!(pool, snapshot);
    }

    #[test]
    fn unsatisfiable_target_reports_exhaustion() {
        let pool = vec![single("Luck", 15, Category::Advantage)];
        let policy = PickPolicy {
            max_attempts: 25,
            ..PickPolicy::default()
        };
        let err = pick_exact(&pool, 7, &policy, &mut rng(1)).unwrap_err();
        assert_eq!(
            err,
            SelectError::RetriesExhausted {
                target: 7,
                attempts: 25
            }
        );
    }

    #[test]
    fn duplicate_names_rejected_by_default() {
        // The same name in two groups can only be taken once, so the only
        // way to 2 is one "Ally" plus "Watchdog".
        let pool = vec![
            single("Ally", 1, Category::Advantage),
            single("Ally", 1, Category::Advantage),
            single("Watchdog", 1, Category::Advantage),
        ];
        for seed in 0..30 {
            let picked = pick_exact(&pool, 2, &PickPolicy::default(), &mut rng(seed)).unwrap();
            let allies = picked.iter().filter(|t| t.name == "Ally").count();
            assert_eq!(allies, 1, "seed {seed}");
        }
    }

    #[test]
    fn duplicates_allowed_when_policy_permits() {
        let pool = vec![
            single("Ally", 1, Category::Advantage),
            single("Ally", 1, Category::Advantage),
        ];
        let policy = PickPolicy {
            allow_duplicates: true,
            ..PickPolicy::default()
        };
        let picked = pick_exact(&pool, 2, &policy, &mut rng(11)).unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn duplicate_check_spans_committed_traits() {
        let committed = vec![Trait::new("Luck", 15, Category::Advantage)];
        let pool = vec![
            single("Luck", 15, Category::Advantage),
            single("Combat Reflexes", 15, Category::Advantage),
        ];
        for seed in 0..30 {
            let picked = pick_exact_gated(
                &pool,
                15,
                &PrereqTable::new(),
                &committed,
                &PickPolicy::default(),
                &mut rng(seed),
            )
            .unwrap();
            assert_eq!(picked[0].name, "Combat Reflexes", "seed {seed}");
        }
    }

    #[test]
    fn gated_pick_respects_prerequisites() {
        // "Continual Light" needs "Light" picked first, so any run that
        // takes both must order them Light-first.
        let mut table = PrereqTable::new();
        let raw: RawCondition = serde_json::from_str(r#"{"name": "Light"}"#).unwrap();
        table.insert("Continual Light", compile(&raw).unwrap());

        let pool = vec![
            single("Light", 1, Category::Spell),
            single("Continual Light", 1, Category::Spell),
            single("Lend Energy", 1, Category::Spell),
        ];
        for seed in 0..60 {
            let picked = pick_exact_gated(
                &pool,
                2,
                &table,
                &[],
                &PickPolicy::default(),
                &mut rng(seed),
            )
            .unwrap();
            assert_eq!(total_points(&picked), 2);
            if picked.iter().any(|t| t.name == "Continual Light") {
                let light_pos = picked.iter().position(|t| t.name == "Light");
                let cl_pos = picked.iter().position(|t| t.name == "Continual Light");
                assert!(light_pos < cl_pos, "seed {seed}: {picked:?}");
            }
        }
    }

    #[test]
    fn gated_pick_sees_committed_selection() {
        let mut table = PrereqTable::new();
        let raw: RawCondition =
            serde_json::from_str(r#"{"name_prefix": "Magery", "min_level": 2}"#).unwrap();
        table.insert("Fireball", compile(&raw).unwrap());

        let pool = vec![single("Fireball", 1, Category::Spell)];
        let magery = vec![Trait::new("Magery 3", 35, Category::Power)];

        let picked = pick_exact_gated(
            &pool,
            1,
            &table,
            &magery,
            &PickPolicy::default(),
            &mut rng(5),
        )
        .unwrap();
        assert_eq!(picked.len(), 1);

        // Without the committed Magery the same pick is unsatisfiable.
        let policy = PickPolicy {
            max_attempts: 10,
            ..PickPolicy::default()
        };
        assert!(pick_exact_gated(&pool, 1, &table, &[], &policy, &mut rng(5)).is_err());
    }

    #[test]
    fn deterministic_for_a_fixed_seed() {
        let pool = vec![
            group(&[("A", 5), ("B", 9)], Category::Advantage),
            group(&[("C", 5), ("D", 9)], Category::Advantage),
            single("E", 10, Category::Advantage),
        ];
        let a = pick_exact(&pool, 14, &PickPolicy::default(), &mut rng(42)).unwrap();
        let b = pick_exact(&pool, 14, &PickPolicy::default(), &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }
}
