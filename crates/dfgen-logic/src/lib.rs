//! Pure character-generation logic for dfgen.
//!
//! Everything here is deterministic given an RNG: callers inject
//! `&mut impl Rng`, so tests and reproducible builds just seed a `StdRng`.
//! No I/O happens in this crate; the prerequisite document is parsed from
//! whatever the caller hands to [`prereq::PrereqTable::compile`].
//!
//! Modules:
//! - [`trait_list`] — the `Trait` record, name/level parsing, merging
//! - [`catalog`] — candidate pool builders (leveled and self-control expansion)
//! - [`stats`] — aggregate queries over a selection
//! - [`prereq`] — prerequisite compiler and interpreter
//! - [`select`] — exact-budget random selection
//! - [`advancement`] — point-tier ladder and incremental improvement
//! - [`templates`] — the character templates and top-level generation

pub mod advancement;
pub mod catalog;
pub mod prereq;
pub mod select;
pub mod stats;
pub mod templates;
pub mod trait_list;

pub use prereq::{PrereqError, PrereqTable, RawCondition};
pub use select::{pick_exact, pick_exact_gated, PickPolicy, SelectError};
pub use templates::{generate, Template};
pub use trait_list::{merge_traits, total_points, Category, Trait};
