//! uniclass: Unicode property resolution for regex character classes.
//!
//! Resolves property references as written inside character classes —
//! `Script=Greek`, `scx=Common`, `Any`, `Assigned`, `ASCII` — into
//! executable codepoint-classification predicates:
//! - names and values use Unicode loose matching, so `Script_Extensions`,
//!   `scx`, and `SCRIPT-EXTENSIONS` are all recognized as the same property
//! - invalid or unsupported references are rejected deterministically at
//!   resolution time, before any codepoint is tested
//! - a resolved [`Predicate`] is a small `Copy` value the matching engine
//!   can test against any codepoint, with the resolved constant captured
//!   inline
//!
//! The Unicode data itself (categories, scripts, script extensions) is
//! compiled in through ICU4X; this crate only does name resolution and
//! dispatch. The regex grammar and the matcher live with the caller: a
//! parser hands in a `(name, optional value)` pair and gets back a
//! predicate, or a [`Rejected`] outcome to turn into a pattern-compilation
//! failure. No partial or default predicate is ever substituted.
//!
//! ```
//! use uniclass::resolve;
//!
//! let greek = resolve("sc", Some("Greek")).unwrap();
//! assert!(greek.matches('α' as u32));
//! assert!(!greek.matches('A' as u32));
//!
//! assert!(resolve("NoSuchProperty", None).is_err());
//! ```
//!
//! Resolution is pure and stateless; it may run on any number of threads
//! with no coordination, and [`PropertyCache`] memoizes it where the same
//! references recur.

mod cache;
mod names;
pub mod oracle;
mod property;

pub use cache::PropertyCache;
pub use names::loose_eq;
pub use property::{build, classify, resolve, resolve_special, Predicate, PropertyKind};

// Oracle-owned enumerations, re-exported so callers can hold resolved
// constants without depending on icu_properties directly.
pub use icu_properties::props::{GeneralCategory, Script};

use std::fmt;

/// One Unicode scalar value, as tested by the matching engine.
pub type CodePoint = u32;

/// A property reference that is unrecognized or unsupported.
///
/// The single rejection outcome of this crate: unknown property name,
/// value lookup with no matching canonical entry, or a kind that requires
/// a value used without one. Carries no source location — the pattern
/// compiler owns the diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected;

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized or unsupported Unicode property")
    }
}

impl std::error::Error for Rejected {}
