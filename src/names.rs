//! Loose property-name matching per UAX #44.
//!
//! Unicode property names and values are matched ignoring case and the
//! separator characters `_`, `-`, and whitespace, so `Script_Extensions`,
//! `SCRIPT-EXTENSIONS`, and ` script extensions ` all name the same
//! property. Property names are ASCII by specification, so an ASCII-range
//! case fold is sufficient.

/// Separator characters ignored by loose matching.
fn is_ignorable(b: u8) -> bool {
    matches!(b, b'_' | b'-') || b.is_ascii_whitespace()
}

/// Compare two property names or values using Unicode loose matching.
///
/// Two names are equivalent iff their separator-stripped, case-folded forms
/// are equal byte for byte. Implemented as a co-iteration over both inputs,
/// so no allocation takes place; cheap enough to call once per table entry
/// in a linear scan.
pub fn loose_eq(a: &str, b: &str) -> bool {
    let mut left = a.bytes().filter(|&b| !is_ignorable(b));
    let mut right = b.bytes().filter(|&b| !is_ignorable(b));
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(l), Some(r)) if l.eq_ignore_ascii_case(&r) => {}
            _ => return false,
        }
    }
}
