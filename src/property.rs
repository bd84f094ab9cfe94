//! Property reference resolution.
//!
//! A property reference arrives from the pattern parser as a name plus an
//! optional value (`sc=Greek` carries a value, `Any` does not). Resolution
//! runs name → kind → value lookup and either produces a [`Predicate`] or
//! stops with [`Rejected`]; no partial state escapes. Each reference is
//! resolved independently, with no state carried between calls.

use icu_properties::props::{GeneralCategory, Script};

use crate::names::loose_eq;
use crate::oracle;
use crate::{CodePoint, Rejected};

/// The kind assigned to a property reference, exactly one per resolution
/// attempt. `Unknown` is terminal and always leads to rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Category,
    Script,
    ScriptExtension,
    SpecialAny,
    SpecialAssigned,
    SpecialAscii,
    Unknown,
}

/// A compiled codepoint-classification predicate.
///
/// The resolved constant is captured by value, so evaluation is one
/// exhaustive match plus a table lookup — cheap enough for the matching
/// engine to call per codepoint. Predicates are value-semantic and
/// referentially pure: two predicates resolved from the same reference
/// classify every codepoint identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// `category_of(cp) == category`
    Category(GeneralCategory),
    /// `script_of(cp) == script`
    Script(Script),
    /// `script ∈ script_extensions_of(cp)`
    ScriptExtension(Script),
    /// Every valid Unicode scalar value.
    Any,
    /// Every assigned codepoint.
    Assigned,
    /// The ASCII range.
    Ascii,
}

impl Predicate {
    /// Predicate for an already-resolved general category constant.
    ///
    /// Category constants come from the parser pre-resolved (or through
    /// [`crate::oracle::category_from_name`]); they never pass through
    /// [`classify`]/[`build`], which only handle script-valued references.
    pub fn category(category: GeneralCategory) -> Predicate {
        Predicate::Category(category)
    }

    /// Test one codepoint against this predicate.
    #[inline]
    pub fn matches(self, cp: CodePoint) -> bool {
        match self {
            Predicate::Category(category) => oracle::category_of(cp) == category,
            Predicate::Script(script) => oracle::script_of(cp) == script,
            // Linear membership scan; the extensions set has 0-4 entries
            // for almost every codepoint, and an empty set is simply a
            // non-match.
            Predicate::ScriptExtension(script) => oracle::script_extensions_of(cp).contains(&script),
            Predicate::Any => oracle::is_valid(cp),
            Predicate::Assigned => oracle::is_assigned(cp),
            Predicate::Ascii => oracle::is_ascii(cp),
        }
    }

    /// The kind this predicate was resolved under.
    pub fn kind(self) -> PropertyKind {
        match self {
            Predicate::Category(_) => PropertyKind::Category,
            Predicate::Script(_) => PropertyKind::Script,
            Predicate::ScriptExtension(_) => PropertyKind::ScriptExtension,
            Predicate::Any => PropertyKind::SpecialAny,
            Predicate::Assigned => PropertyKind::SpecialAssigned,
            Predicate::Ascii => PropertyKind::SpecialAscii,
        }
    }
}

/// Classify a value-bearing property name.
///
/// `script`/`sc` and `script_extension`/`script_extensions`/`scx` are the
/// only value-bearing names this resolver supports; everything else maps
/// to `Unknown`. Total and deterministic: every input maps to exactly one
/// kind.
pub fn classify(name: &str) -> PropertyKind {
    if loose_eq(name, "script") || loose_eq(name, "sc") {
        PropertyKind::Script
    } else if loose_eq(name, "script_extension")
        || loose_eq(name, "script_extensions")
        || loose_eq(name, "scx")
    {
        PropertyKind::ScriptExtension
    } else {
        PropertyKind::Unknown
    }
}

/// Resolve one of the special valueless properties `any`, `assigned`,
/// `ascii`. These are tried before [`classify`] in the pipeline because
/// they carry no value.
pub fn resolve_special(name: &str) -> Result<Predicate, Rejected> {
    if loose_eq(name, "any") {
        Ok(Predicate::Any)
    } else if loose_eq(name, "assigned") {
        Ok(Predicate::Assigned)
    } else if loose_eq(name, "ascii") {
        Ok(Predicate::Ascii)
    } else {
        Err(Rejected)
    }
}

/// Build a predicate from a classified kind and a value string.
///
/// Defined for the script-valued kinds only; any other kind rejects. The
/// value is resolved against the oracle's canonical script-name table with
/// loose matching, and a value that resolves to the `Script::Unknown`
/// sentinel rejects — an unrecognized script never becomes a
/// false-negative predicate.
pub fn build(kind: PropertyKind, value: &str) -> Result<Predicate, Rejected> {
    match kind {
        PropertyKind::Script | PropertyKind::ScriptExtension => {}
        _ => return Err(Rejected),
    }
    let script = oracle::script_from_name(value);
    if script == Script::Unknown {
        return Err(Rejected);
    }
    if kind == PropertyKind::Script {
        Ok(Predicate::Script(script))
    } else {
        Ok(Predicate::ScriptExtension(script))
    }
}

/// Resolve a complete `(name, optional value)` property reference.
///
/// This is the boundary the pattern parser calls. Valueless names are
/// checked against the special properties first, then against the
/// category-name table; value-bearing names go through [`classify`] and
/// [`build`]. Rejection is terminal — the caller turns it into a pattern
/// compilation failure.
pub fn resolve(name: &str, value: Option<&str>) -> Result<Predicate, Rejected> {
    match value {
        None => resolve_special(name).or_else(|_| {
            oracle::category_from_name(name)
                .map(Predicate::Category)
                .ok_or(Rejected)
        }),
        Some(value) => build(classify(name), value),
    }
}
