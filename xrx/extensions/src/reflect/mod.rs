//! Structure type reflection over the registry snapshot this workspace
//! tracks.
//!
//! The tables live in `generated.rs` and are rewritten by `cargo xtask
//! gen-reflection`; everything else here is the hand-written surface over
//! them.

mod generated;

pub use generated::{ALIASES, STRUCTURE_TYPES};

use std::collections::HashMap;
use xrx_common::once_cell::sync::Lazy;

/// One member of `XrStructureType`: registry name, numeric value, the
/// extension that introduced it (empty for core members) and the cargo
/// feature its declarations are gated behind, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureTypeEntry {
    pub name: &'static str,
    pub value: i64,
    pub extension: &'static str,
    pub guard: Option<&'static str>,
}

impl StructureTypeEntry {
    pub fn is_core(&self) -> bool {
        self.extension.is_empty()
    }
}

static STRUCTURE_TYPE_BY_NAME: Lazy<HashMap<&str, &StructureTypeEntry>> =
    Lazy::new(|| STRUCTURE_TYPES.iter().map(|entry| (entry.name, entry)).collect());

static STRUCTURE_TYPE_BY_VALUE: Lazy<HashMap<i64, &StructureTypeEntry>> =
    Lazy::new(|| STRUCTURE_TYPES.iter().map(|entry| (entry.value, entry)).collect());

/// Registry name of a structure type value.
pub fn structure_type_name(value: i64) -> Option<&'static str> {
    STRUCTURE_TYPE_BY_VALUE.get(&value).map(|entry| entry.name)
}

/// Numeric value of a structure type name, following aliases.
pub fn structure_type_value(name: &str) -> Option<i64> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, target)| *target)
        .unwrap_or(name);

    STRUCTURE_TYPE_BY_NAME.get(canonical).map(|entry| entry.value)
}

/// Full entry for a structure type name. Aliases are not followed.
pub fn structure_type_entry(name: &str) -> Option<&'static StructureTypeEntry> {
    STRUCTURE_TYPE_BY_NAME.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! name_value_rows {
        ($(($ident:ident, $name:literal, $value:literal)),* $(,)?) => {
            &[$(($name, $value)),*]
        };
    }

    #[test]
    fn test_macro_rows_match_table() {
        let rows: &[(&str, i64)] = crate::for_each_structure_type!(name_value_rows);

        assert_eq!(rows.len(), STRUCTURE_TYPES.len());
        for (row, entry) in rows.iter().zip(STRUCTURE_TYPES) {
            assert_eq!(row.0, entry.name);
            assert_eq!(row.1, entry.value);
        }
    }

    #[test]
    fn test_values_are_unique() {
        for (index, entry) in STRUCTURE_TYPES.iter().enumerate() {
            for other in &STRUCTURE_TYPES[index + 1..] {
                assert_ne!(
                    entry.value, other.value,
                    "{} and {} share a value",
                    entry.name, other.name
                );
            }
        }
    }

    #[test]
    fn test_core_block_precedes_extensions() {
        let first_extension = STRUCTURE_TYPES
            .iter()
            .position(|entry| !entry.is_core())
            .unwrap();

        assert!(STRUCTURE_TYPES[..first_extension]
            .iter()
            .all(|entry| entry.is_core()));
        assert!(STRUCTURE_TYPES[first_extension..]
            .iter()
            .all(|entry| !entry.is_core()));
    }

    #[test]
    fn test_aliases_resolve() {
        for (alias, target) in ALIASES {
            assert!(
                structure_type_entry(target).is_some(),
                "{alias} aliases unknown member {target}"
            );
            assert_eq!(structure_type_value(alias), structure_type_value(target));
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(structure_type_value("XR_TYPE_UNKNOWN"), Some(0));
        assert_eq!(structure_type_name(0), Some("XR_TYPE_UNKNOWN"));
        assert_eq!(
            structure_type_name(1000209001),
            Some("XR_TYPE_HAPTIC_PCM_VIBRATION_FB")
        );
        assert_eq!(structure_type_value("XR_TYPE_BOGUS"), None);
        assert_eq!(structure_type_name(-1), None);

        let entry = structure_type_entry("XR_TYPE_HAPTIC_PCM_VIBRATION_FB").unwrap();
        assert_eq!(entry.extension, "XR_FB_haptic_pcm");
        assert_eq!(entry.guard, None);
        assert!(!entry.is_core());
    }

    #[test]
    fn test_experimental_rows_are_guarded() {
        let entry = structure_type_entry(
            "XR_TYPE_SYSTEM_SIMULTANEOUS_HANDS_AND_CONTROLLERS_PROPERTIES_META",
        )
        .unwrap();

        assert_eq!(entry.extension, "XR_META_simultaneous_hands_and_controllers");
        assert_eq!(entry.guard, Some("experimental"));
    }
}
