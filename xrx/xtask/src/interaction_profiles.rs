use anyhow::{bail, Context};
use std::fmt::Write;
use xrx_registry::{ComponentType, InteractionProfile, Registry};

const HEADER: &str = "\
// @generated by `cargo xtask gen-interaction-profiles`. Do not edit.
//
// Interaction profile metadata rows for the registry snapshot this workspace
// tracks, in registry order.

use crate::{Availability, Component, ComponentType, InteractionProfile};
use xrx_common::ApiVersion;

";

/// Renders the `PROFILES` table, profiles and components in declaration
/// order.
pub fn render(registry: &Registry) -> anyhow::Result<String> {
    let mut out = String::from(HEADER);

    out.push_str("pub static PROFILES: &[InteractionProfile] = &[\n");
    for profile in &registry.interaction_profiles {
        render_profile(registry, profile, &mut out)
            .with_context(|| format!("profile {}", profile.path))?;
    }
    out.push_str("];\n");

    Ok(out)
}

fn render_profile(
    registry: &Registry,
    profile: &InteractionProfile,
    out: &mut String,
) -> anyhow::Result<()> {
    writeln!(out, "    InteractionProfile {{")?;
    writeln!(out, "        path: {:?},", profile.path)?;
    writeln!(out, "        title: {:?},", profile.title)?;

    let availability = match &profile.availability {
        Some(token) => availability_expr(registry, token)?,
        // Profiles that predate the availability attribute are core 1.0.
        None => "Availability::Core(ApiVersion::from_parts(1, 0, 0))".to_owned(),
    };
    writeln!(out, "        availability: {availability},")?;

    writeln!(out, "        user_paths: &[{}],", string_list(&profile.user_paths))?;

    writeln!(out, "        components: &[")?;
    for component in &profile.components {
        writeln!(out, "            Component {{")?;
        writeln!(out, "                subpath: {:?},", component.subpath)?;
        writeln!(
            out,
            "                ty: ComponentType::{},",
            type_variant(component.ty)
        )?;
        match &component.user_path {
            Some(user_path) => {
                writeln!(out, "                user_paths: Some(&[{user_path:?}]),")?
            }
            None => writeln!(out, "                user_paths: None,")?,
        }
        writeln!(out, "                system: {},", component.system)?;
        match &component.availability {
            Some(token) => writeln!(
                out,
                "                availability: Some({}),",
                availability_expr(registry, token)?
            )?,
            None => writeln!(out, "                availability: None,")?,
        }
        writeln!(out, "            }},")?;
    }
    writeln!(out, "        ],")?;
    writeln!(out, "    }},")?;

    Ok(())
}

fn availability_expr(registry: &Registry, token: &str) -> anyhow::Result<String> {
    if let Some(feature) = registry
        .api_versions
        .iter()
        .find(|feature| feature.name == token)
    {
        let number = feature.number;
        Ok(format!(
            "Availability::Core(ApiVersion::from_parts({}, {}, {}))",
            number.major(),
            number.minor(),
            number.patch()
        ))
    } else if registry
        .extensions
        .iter()
        .any(|extension| extension.name == token)
    {
        Ok(format!("Availability::Extension({token:?})"))
    } else {
        bail!("availability {token} names neither a feature nor an extension");
    }
}

fn type_variant(ty: ComponentType) -> &'static str {
    match ty {
        ComponentType::Boolean => "Boolean",
        ComponentType::Float => "Float",
        ComponentType::Vector2f => "Vector2f",
        ComponentType::Pose => "Pose",
        ComponentType::Vibration => "Vibration",
    }
}

fn string_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{item:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
<registry>
    <feature api="openxr" name="XR_VERSION_1_0" number="1.0"/>
    <feature api="openxr" name="XR_VERSION_1_1" number="1.1"/>
    <extensions>
        <extension name="XR_TEST_controller" number="9" supported="openxr">
            <require>
                <enum value="1" name="XR_TEST_controller_SPEC_VERSION"/>
            </require>
        </extension>
    </extensions>
    <interaction_profiles>
        <interaction_profile name="/interaction_profiles/test/gamepad" title="Test Gamepad" availability="XR_TEST_controller">
            <user_path path="/user/hand/left"/>
            <user_path path="/user/hand/right"/>
            <component subpath="/input/select/click" type="boolean"/>
            <component user_path="/user/hand/right" subpath="/input/system/click" type="boolean" system="true"/>
            <component subpath="/input/grip_surface/pose" type="pose" availability="XR_VERSION_1_1"/>
            <component subpath="/output/haptic" type="vibration"/>
        </interaction_profile>
    </interaction_profiles>
</registry>
"#;

    const EXPECTED: &str = r#"// @generated by `cargo xtask gen-interaction-profiles`. Do not edit.
//
// Interaction profile metadata rows for the registry snapshot this workspace
// tracks, in registry order.

use crate::{Availability, Component, ComponentType, InteractionProfile};
use xrx_common::ApiVersion;

pub static PROFILES: &[InteractionProfile] = &[
    InteractionProfile {
        path: "/interaction_profiles/test/gamepad",
        title: "Test Gamepad",
        availability: Availability::Extension("XR_TEST_controller"),
        user_paths: &["/user/hand/left", "/user/hand/right"],
        components: &[
            Component {
                subpath: "/input/select/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/system/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
                system: true,
                availability: None,
            },
            Component {
                subpath: "/input/grip_surface/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
                availability: Some(Availability::Core(ApiVersion::from_parts(1, 1, 0))),
            },
            Component {
                subpath: "/output/haptic",
                ty: ComponentType::Vibration,
                user_paths: None,
                system: false,
                availability: None,
            },
        ],
    },
];
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
    fn test_render_rejects_unknown_availability() {
        let fixture = r#"
<registry>
    <interaction_profiles>
        <interaction_profile name="/interaction_profiles/test/gamepad" title="Test" availability="XR_TEST_missing">
            <user_path path="/user/hand/left"/>
            <component subpath="/input/select/click" type="boolean"/>
        </interaction_profile>
    </interaction_profiles>
</registry>
"#;

        let error = render(&registry_from(fixture)).unwrap_err();
        assert!(format!("{error:#}").contains("XR_TEST_missing"));
    }
}
