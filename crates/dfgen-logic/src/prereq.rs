//! Prerequisite compiler and evaluator.
//!
//! Prerequisites arrive as a declarative document (JSON in practice) mapping
//! a gated trait name to a [`RawCondition`] tree. [`compile`] turns a raw
//! tree into a typed [`Prereq`] that evaluates against a selection slice —
//! an interpreter over the tree, no runtime code generation.
//!
//! A raw node is a bag of optional fields; only specific field combinations
//! are meaningful. Compilation recognizes exactly those combinations and
//! fails loudly on anything else: a silently-permissive default would let an
//! ineligible trait into an exact-budget selection and corrupt the build.
//!
//! # Recognized leaf shapes
//!
//! | Fields | Meaning |
//! |--------|---------|
//! | `all` / `any` | conjunction / disjunction over child nodes |
//! | `name` \| `name_prefix` \| `name_contains` | the named pattern is selected |
//! | pattern + `absent: true` | no selected name matches the pattern |
//! | `name_prefix` + `min_level` (± `note` / `without_note`) | a selected trait with that prefix has a trailing level ≥ threshold |
//! | pattern + `min_count` | at least N selected names match |
//! | `stat: distinct_categories` + `min_count` | at least N categories represented |
//! | `stat: category_count` + `category` + `min_count` | at least N traits in a category |

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stats::{self, NamePattern, NoteFilter};
use crate::trait_list::{Category, Trait};

/// Aggregate statistic a count condition can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    DistinctCategories,
    CategoryCount,
}

/// One node of the declarative prerequisite document, before compilation.
///
/// Unknown fields are rejected at deserialization time; unrecognized field
/// *combinations* are rejected by [`compile`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RawCondition {
    pub all: Option<Vec<RawCondition>>,
    pub any: Option<Vec<RawCondition>>,
    pub name: Option<String>,
    pub name_prefix: Option<String>,
    pub name_contains: Option<String>,
    pub absent: Option<bool>,
    pub min_level: Option<i32>,
    pub note: Option<String>,
    pub without_note: Option<String>,
    pub min_count: Option<usize>,
    pub stat: Option<StatKind>,
    pub category: Option<Category>,
}

/// Fatal prerequisite configuration error.
#[derive(Debug, Error)]
pub enum PrereqError {
    /// The compiler has no recognized case for this field combination.
    #[error("unrecognized prerequisite condition: {0}")]
    UnrecognizedCondition(String),
    /// A named table entry failed to compile.
    #[error("invalid prerequisite for {name:?}")]
    InvalidEntry {
        name: String,
        #[source]
        source: Box<PrereqError>,
    },
}

/// What a count condition counts.
#[derive(Debug, Clone, PartialEq)]
pub enum CountSource {
    Matching(NamePattern),
    DistinctCategories,
    Category(Category),
}

/// A compiled prerequisite tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Prereq {
    All(Vec<Prereq>),
    Any(Vec<Prereq>),
    Present(NamePattern),
    Absent(NamePattern),
    LevelAtLeast {
        prefix: String,
        level: i32,
        note: Option<NoteFilter>,
    },
    CountAtLeast {
        source: CountSource,
        count: usize,
    },
}

impl Prereq {
    /// Evaluate this prerequisite against a selection.
    pub fn satisfied(&self, selection: &[Trait]) -> bool {
        match self {
            Prereq::All(children) => children.iter().all(|c| c.satisfied(selection)),
            Prereq::Any(children) => children.iter().any(|c| c.satisfied(selection)),
            Prereq::Present(pattern) => stats::any_matching(selection, pattern),
            Prereq::Absent(pattern) => !stats::any_matching(selection, pattern),
            Prereq::LevelAtLeast {
                prefix,
                level,
                note,
            } => stats::level_of(selection, prefix, note.as_ref())
                .is_some_and(|found| found >= *level),
            Prereq::CountAtLeast { source, count } => {
                let found = match source {
                    CountSource::Matching(pattern) => stats::count_matching(selection, pattern),
                    CountSource::DistinctCategories => stats::distinct_categories(selection),
                    CountSource::Category(cat) => stats::category_count(selection, *cat),
                };
                found >= *count
            }
        }
    }
}

/// Compile a raw condition tree into an evaluable [`Prereq`].
///
/// Every arm of the match below is one recognized shape; any other field
/// combination — including `absent: false`, a note filter without a level
/// check, or two name patterns on one node — is a configuration error
/// carrying the offending node.
pub fn compile(raw: &RawCondition) -> Result<Prereq, PrereqError> {
    let RawCondition {
        all,
        any,
        name,
        name_prefix,
        name_contains,
        absent,
        min_level,
        note,
        without_note,
        min_count,
        stat,
        category,
    } = raw;

    #[rustfmt::skip]
    let compiled = match (
        all, any, name, name_prefix, name_contains, absent,
        min_level, note, without_note, min_count, stat, category,
    ) {
        // Internal nodes
        (Some(children), None, None, None, None, None, None, None, None, None, None, None) => {
            Prereq::All(compile_children(children)?)
        }
        (None, Some(children), None, None, None, None, None, None, None, None, None, None) => {
            Prereq::Any(compile_children(children)?)
        }

        // Presence
        (None, None, Some(n), None, None, None, None, None, None, None, None, None) => {
            Prereq::Present(NamePattern::Exact(n.clone()))
        }
        (None, None, None, Some(p), None, None, None, None, None, None, None, None) => {
            Prereq::Present(NamePattern::Prefix(p.clone()))
        }
        (None, None, None, None, Some(s), None, None, None, None, None, None, None) => {
            Prereq::Present(NamePattern::Contains(s.clone()))
        }

        // Negated existence
        (None, None, Some(n), None, None, Some(true), None, None, None, None, None, None) => {
            Prereq::Absent(NamePattern::Exact(n.clone()))
        }
        (None, None, None, Some(p), None, Some(true), None, None, None, None, None, None) => {
            Prereq::Absent(NamePattern::Prefix(p.clone()))
        }
        (None, None, None, None, Some(s), Some(true), None, None, None, None, None, None) => {
            Prereq::Absent(NamePattern::Contains(s.clone()))
        }

        // Level threshold, optionally scoped by a note substring
        (None, None, None, Some(p), None, None, Some(level), None, None, None, None, None) => {
            Prereq::LevelAtLeast { prefix: p.clone(), level: *level, note: None }
        }
        (None, None, None, Some(p), None, None, Some(level), Some(n), None, None, None, None) => {
            Prereq::LevelAtLeast {
                prefix: p.clone(),
                level: *level,
                note: Some(NoteFilter::Contains(n.clone())),
            }
        }
        (None, None, None, Some(p), None, None, Some(level), None, Some(n), None, None, None) => {
            Prereq::LevelAtLeast {
                prefix: p.clone(),
                level: *level,
                note: Some(NoteFilter::Excludes(n.clone())),
            }
        }

        // Name-pattern counts
        (None, None, Some(n), None, None, None, None, None, None, Some(count), None, None) => {
            Prereq::CountAtLeast {
                source: CountSource::Matching(NamePattern::Exact(n.clone())),
                count: *count,
            }
        }
        (None, None, None, Some(p), None, None, None, None, None, Some(count), None, None) => {
            Prereq::CountAtLeast {
                source: CountSource::Matching(NamePattern::Prefix(p.clone())),
                count: *count,
            }
        }
        (None, None, None, None, Some(s), None, None, None, None, Some(count), None, None) => {
            Prereq::CountAtLeast {
                source: CountSource::Matching(NamePattern::Contains(s.clone())),
                count: *count,
            }
        }

        // Aggregate-statistic counts
        (None, None, None, None, None, None, None, None, None, Some(count), Some(StatKind::DistinctCategories), None) => {
            Prereq::CountAtLeast { source: CountSource::DistinctCategories, count: *count }
        }
        (None, None, None, None, None, None, None, None, None, Some(count), Some(StatKind::CategoryCount), Some(cat)) => {
            Prereq::CountAtLeast { source: CountSource::Category(*cat), count: *count }
        }

        _ => return Err(PrereqError::UnrecognizedCondition(format!("{raw:?}"))),
    };
    Ok(compiled)
}

fn compile_children(children: &[RawCondition]) -> Result<Vec<Prereq>, PrereqError> {
    children.iter().map(compile).collect()
}

/// Compiled prerequisites keyed by gated trait name.
///
/// Built once per generation run; traits without an entry are always
/// eligible.
#[derive(Debug, Clone, Default)]
pub struct PrereqTable {
    by_name: HashMap<String, Prereq>,
}

impl PrereqTable {
    /// An empty table: every trait is eligible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a whole declarative document. The first malformed entry
    /// aborts compilation, identified by trait name.
    pub fn compile(doc: &BTreeMap<String, RawCondition>) -> Result<Self, PrereqError> {
        let mut table = Self::new();
        for (name, raw) in doc {
            let prereq = compile(raw).map_err(|e| PrereqError::InvalidEntry {
                name: name.clone(),
                source: Box::new(e),
            })?;
            table.insert(name, prereq);
        }
        Ok(table)
    }

    pub fn insert(&mut self, name: &str, prereq: Prereq) {
        self.by_name.insert(name.to_lowercase(), prereq);
    }

    pub fn get(&self, name: &str) -> Option<&Prereq> {
        self.by_name.get(&name.to_lowercase())
    }

    /// Whether `name` is currently eligible against `selection`. Names with
    /// no compiled prerequisite are always eligible.
    pub fn satisfied(&self, name: &str, selection: &[Trait]) -> bool {
        self.get(name).map_or(true, |p| p.satisfied(selection))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
