//! Adapter over the ICU4X Unicode database.
//!
//! Everything the resolver knows about actual codepoints comes through
//! here: codepoint→category and codepoint→script lookups, the
//! script-extensions relation, validity/assignment/ASCII tests, and the
//! canonical name tables for scripts and categories. The data is compiled
//! into the binary by `icu_properties` and immutable for the process
//! lifetime, so every function in this module is pure.

use icu_properties::props::{GeneralCategory, Script};
use icu_properties::script::ScriptWithExtensions;
use icu_properties::{CodePointMapData, PropertyParser};
use smallvec::SmallVec;

use crate::CodePoint;

/// General category of a codepoint. Out-of-range or surrogate codepoints
/// come back as `Unassigned`.
pub fn category_of(cp: CodePoint) -> GeneralCategory {
    CodePointMapData::<GeneralCategory>::new().get32(cp)
}

/// Primary script of a codepoint; `Script::Unknown` for codepoints the
/// database does not assign a script to.
pub fn script_of(cp: CodePoint) -> Script {
    ScriptWithExtensions::new().get_script_val32(cp)
}

/// The set of scripts a codepoint is commonly used with. Small (typically
/// 0–4 entries), unordered, duplicate-free.
pub fn script_extensions_of(cp: CodePoint) -> SmallVec<[Script; 4]> {
    ScriptWithExtensions::new()
        .get_script_extensions_val32(cp)
        .iter()
        .collect()
}

/// True iff `cp` is a Unicode scalar value (in range, not a surrogate).
pub fn is_valid(cp: CodePoint) -> bool {
    char::from_u32(cp).is_some()
}

/// True iff `cp` is a valid, assigned codepoint. Assigned is the
/// complement of the `Unassigned` general category.
pub fn is_assigned(cp: CodePoint) -> bool {
    is_valid(cp) && category_of(cp) != GeneralCategory::Unassigned
}

/// True iff `cp` is in the ASCII range.
pub fn is_ascii(cp: CodePoint) -> bool {
    cp <= 0x7F
}

/// Look up a script by name using Unicode loose matching, accepting both
/// long (`Greek`) and short (`Grek`) canonical spellings. Returns the
/// `Script::Unknown` sentinel when no canonical entry matches.
pub fn script_from_name(name: &str) -> Script {
    PropertyParser::<Script>::new()
        .get_loose(name)
        .unwrap_or(Script::Unknown)
}

/// Look up a general category by name using Unicode loose matching,
/// accepting both abbreviated (`Lu`) and long (`Uppercase_Letter`)
/// canonical spellings.
pub fn category_from_name(name: &str) -> Option<GeneralCategory> {
    PropertyParser::<GeneralCategory>::new().get_loose(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of() {
        assert_eq!(category_of('A' as u32), GeneralCategory::UppercaseLetter);
        assert_eq!(category_of('5' as u32), GeneralCategory::DecimalNumber);
        assert_eq!(category_of(0x0378), GeneralCategory::Unassigned);
    }

    #[test]
    fn test_script_of() {
        assert_eq!(script_of(0x03B1), Script::Greek); // α
        assert_eq!(script_of('A' as u32), Script::Latin);
        assert_eq!(script_of('0' as u32), Script::Common);
    }

    #[test]
    fn test_script_extensions_of() {
        // KATAKANA-HIRAGANA PROLONGED SOUND MARK: primary script Common,
        // extensions Hiragana and Katakana.
        let ext = script_extensions_of(0x30FC);
        assert!(ext.contains(&Script::Hiragana));
        assert!(ext.contains(&Script::Katakana));
        assert!(!ext.contains(&Script::Latin));

        assert!(script_extensions_of('0' as u32).contains(&Script::Common));
    }

    #[test]
    fn test_validity_tests() {
        assert!(is_valid(0x41));
        assert!(is_valid(0x10FFFF));
        assert!(!is_valid(0xD800)); // surrogate
        assert!(!is_valid(0x110000)); // out of range

        assert!(is_assigned('A' as u32));
        assert!(!is_assigned(0x0378));
        assert!(!is_assigned(0xD800));

        assert!(is_ascii(0x00));
        assert!(is_ascii(0x7F));
        assert!(!is_ascii(0x80));
    }

    #[test]
    fn test_script_from_name() {
        assert_eq!(script_from_name("Greek"), Script::Greek);
        assert_eq!(script_from_name("greek"), Script::Greek);
        assert_eq!(script_from_name("Grek"), Script::Greek);
        assert_eq!(script_from_name("NotAScript"), Script::Unknown);
    }

    #[test]
    fn test_category_from_name() {
        assert_eq!(
            category_from_name("Lu"),
            Some(GeneralCategory::UppercaseLetter)
        );
        assert_eq!(
            category_from_name("Uppercase_Letter"),
            Some(GeneralCategory::UppercaseLetter)
        );
        assert_eq!(category_from_name("NotACategory"), None);
    }
}
