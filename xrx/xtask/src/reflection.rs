use anyhow::bail;
use std::{collections::HashSet, fmt::Write};
use xrx_registry::{Registry, ValueSpec};

const HEADER: &str = "\
// @generated by `cargo xtask gen-reflection`. Do not edit.
//
// Structure type reflection rows for the registry snapshot this workspace
// tracks. One row per `XrStructureType` member, in registry order.

use super::StructureTypeEntry;

";

struct Row<'a> {
    name: &'a str,
    value: i64,
    extension: &'a str,
    guard: Option<String>,
}

/// Renders the reflection tables and the `for_each_structure_type!` macro.
///
/// Core members come first, then extension members in declaration order.
/// Alias rows carry no value and go into a separate table.
pub fn render(registry: &Registry) -> anyhow::Result<String> {
    let mut rows = Vec::new();
    let mut aliases = Vec::new();

    for def in &registry.structure_types {
        rows.push(Row {
            name: &def.name,
            value: def.value,
            extension: "",
            guard: None,
        });
    }

    for extension in &registry.extensions {
        let guard = extension.guard_feature();
        for row in &extension.structure_types {
            if let ValueSpec::Alias(target) = &row.spec {
                aliases.push((row.name.as_str(), target.as_str()));
            } else {
                let value = extension
                    .enum_value(&row.spec)
                    .map_err(|e| anyhow::anyhow!("{}: {e}", row.name))?;
                rows.push(Row {
                    name: &row.name,
                    value,
                    extension: &extension.name,
                    guard: guard.clone(),
                });
            }
        }
    }

    let known: HashSet<&str> = rows.iter().map(|row| row.name).collect();
    for (alias, target) in &aliases {
        if !known.contains(target) {
            bail!("{alias} aliases unknown structure type {target}");
        }
    }

    let mut out = String::from(HEADER);

    out.push_str("pub static STRUCTURE_TYPES: &[StructureTypeEntry] = &[\n");
    for row in &rows {
        writeln!(out, "    StructureTypeEntry {{")?;
        writeln!(out, "        name: {:?},", row.name)?;
        writeln!(out, "        value: {},", row.value)?;
        writeln!(out, "        extension: {:?},", row.extension)?;
        match &row.guard {
            Some(guard) => writeln!(out, "        guard: Some({guard:?}),")?,
            None => writeln!(out, "        guard: None,")?,
        }
        writeln!(out, "    }},")?;
    }
    out.push_str("];\n\n");

    out.push_str("pub static ALIASES: &[(&str, &str)] = &[\n");
    for (alias, target) in &aliases {
        writeln!(out, "    ({alias:?}, {target:?}),")?;
    }
    out.push_str("];\n\n");

    out.push_str("/// Invokes `$callback` with one `(ident, name, value)` token row per\n");
    out.push_str("/// structure type, in registry order.\n");
    out.push_str("#[macro_export]\n");
    out.push_str("macro_rules! for_each_structure_type {\n");
    out.push_str("    ($callback:ident) => {\n");
    out.push_str("        $callback! {\n");
    for row in &rows {
        let ident = row.name.strip_prefix("XR_TYPE_").unwrap_or(row.name);
        writeln!(out, "            ({ident}, {:?}, {}),", row.name, row.value)?;
    }
    out.push_str("        }\n");
    out.push_str("    };\n");
    out.push_str("}\n");

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
<registry>
    <enums name="XrStructureType" type="enum">
        <enum value="0" name="XR_TYPE_UNKNOWN"/>
        <enum value="13" name="XR_TYPE_HAPTIC_VIBRATION"/>
    </enums>
    <extensions>
        <extension name="XR_TEST_widget" number="4" type="instance" supported="openxr">
            <require>
                <enum value="1" name="XR_TEST_widget_SPEC_VERSION"/>
                <enum offset="0" extends="XrStructureType" name="XR_TYPE_WIDGET_CREATE_INFO_TEST"/>
                <enum alias="XR_TYPE_WIDGET_CREATE_INFO_TEST" extends="XrStructureType" name="XR_TYPE_WIDGET_INFO_TEST"/>
            </require>
        </extension>
        <extension name="XR_TEST_experimental_widget" number="5" supported="openxr" provisional="true">
            <require>
                <enum offset="0" extends="XrStructureType" name="XR_TYPE_EXPERIMENTAL_WIDGET_TEST"/>
            </require>
        </extension>
    </extensions>
</registry>
"#;

    const EXPECTED: &str = r#"// @generated by `cargo xtask gen-reflection`. Do not edit.
//
// Structure type reflection rows for the registry snapshot this workspace
// tracks. One row per `XrStructureType` member, in registry order.

use super::StructureTypeEntry;

pub static STRUCTURE_TYPES: &[StructureTypeEntry] = &[
    StructureTypeEntry {
        name: "XR_TYPE_UNKNOWN",
        value: 0,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_HAPTIC_VIBRATION",
        value: 13,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_WIDGET_CREATE_INFO_TEST",
        value: 1000003000,
        extension: "XR_TEST_widget",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_EXPERIMENTAL_WIDGET_TEST",
        value: 1000004000,
        extension: "XR_TEST_experimental_widget",
        guard: Some("experimental"),
    },
];

pub static ALIASES: &[(&str, &str)] = &[
    ("XR_TYPE_WIDGET_INFO_TEST", "XR_TYPE_WIDGET_CREATE_INFO_TEST"),
];

/// Invokes `$callback` with one `(ident, name, value)` token row per
/// structure type, in registry order.
#[macro_export]
macro_rules! for_each_structure_type {
    ($callback:ident) => {
        $callback! {
            (UNKNOWN, "XR_TYPE_UNKNOWN", 0),
            (HAPTIC_VIBRATION, "XR_TYPE_HAPTIC_VIBRATION", 13),
            (WIDGET_CREATE_INFO_TEST, "XR_TYPE_WIDGET_CREATE_INFO_TEST", 1000003000),
            (EXPERIMENTAL_WIDGET_TEST, "XR_TYPE_EXPERIMENTAL_WIDGET_TEST", 1000004000),
        }
    };
}
"#;

    fn registry_from(fixture: &str) -> Registry {
        let (registry, errors) = xrx_registry::parse_stream(fixture.as_bytes()).unwrap();
        assert!(errors.is_empty(), "{errors:?}");
        registry
    }

    #[test]
    fn test_render_golden() {
        let rendered = render(&registry_from(FIXTURE)).unwrap();

        assert_eq!(rendered, EXPECTED);
    }

    #[test]
    fn test_render_rejects_dangling_alias() {
        let fixture = r#"
<registry>
    <extensions>
        <extension name="XR_TEST_widget" number="4" supported="openxr">
            <require>
                <enum alias="XR_TYPE_NOWHERE" extends="XrStructureType" name="XR_TYPE_WIDGET_INFO_TEST"/>
            </require>
        </extension>
    </extensions>
</registry>
"#;

        let error = render(&registry_from(fixture)).unwrap_err();
        assert!(error.to_string().contains("XR_TYPE_NOWHERE"));
    }
}
