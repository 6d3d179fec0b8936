use crate::types::*;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use xml::{
    attribute::OwnedAttribute,
    reader::{EventReader, XmlEvent},
};

/// Parses the registry document at `path`.
///
/// Recoverable problems are returned alongside the registry; see
/// [`parse_stream`].
pub fn parse_file(path: &Path) -> Result<(Registry, Vec<Error>), FatalError> {
    let file = BufReader::new(File::open(path)?);
    parse_stream(file)
}

/// Parses a registry document from `stream`.
///
/// Rows the parser cannot make sense of are recorded as [`Error`] values and
/// skipped. Only I/O failures, malformed XML and a document without a
/// `<registry>` root abort parsing.
pub fn parse_stream<R: Read>(stream: R) -> Result<(Registry, Vec<Error>), FatalError> {
    let mut ctx = Context {
        events: EventReader::new(stream),
        errors: Vec::new(),
    };

    loop {
        match ctx.events.next()? {
            XmlEvent::StartElement { name, .. } => {
                if name.local_name == "registry" {
                    let registry = parse_registry(&mut ctx)?;
                    return Ok((registry, ctx.errors));
                }
                ctx.unexpected("document", &name.local_name);
                ctx.skip_element()?;
            }
            XmlEvent::EndDocument => return Err(FatalError::MissingRegistryElement),
            _ => (),
        }
    }
}

struct Context<R: Read> {
    events: EventReader<R>,
    errors: Vec<Error>,
}

impl<R: Read> Context<R> {
    /// Consumes events until the end tag matching the start tag that was just
    /// read.
    fn skip_element(&mut self) -> Result<(), FatalError> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.events.next()? {
                XmlEvent::StartElement { .. } => depth += 1,
                XmlEvent::EndElement { .. } => depth -= 1,
                XmlEvent::EndDocument => break,
                _ => (),
            }
        }
        Ok(())
    }

    fn unexpected(&mut self, context: &str, name: &str) {
        self.errors.push(Error::UnexpectedElement {
            context: context.to_owned(),
            name: name.to_owned(),
        });
    }

    /// Looks up a mandatory attribute, recording an error when absent.
    fn require(
        &mut self,
        attributes: &[OwnedAttribute],
        element: &str,
        name: &str,
    ) -> Option<String> {
        let value = attr(attributes, name);
        if value.is_none() {
            self.errors.push(Error::MissingAttribute {
                element: element.to_owned(),
                attribute: name.to_owned(),
            });
        }
        value.map(str::to_owned)
    }

    fn invalid_value(&mut self, element: &str, attribute: &str, value: &str) {
        self.errors.push(Error::InvalidAttributeValue {
            element: element.to_owned(),
            attribute: attribute.to_owned(),
            value: value.to_owned(),
        });
    }
}

fn attr<'a>(attributes: &'a [OwnedAttribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attribute| attribute.name.local_name == name)
        .map(|attribute| attribute.value.as_str())
}

fn parse_registry<R: Read>(ctx: &mut Context<R>) -> Result<Registry, FatalError> {
    let mut registry = Registry::default();

    loop {
        match ctx.events.next()? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => match name.local_name.as_str() {
                "tags" => parse_tags(ctx, &mut registry.tags)?,
                "feature" => parse_feature(ctx, &attributes, &mut registry.api_versions)?,
                "enums" => parse_enums(ctx, &attributes, &mut registry.structure_types)?,
                "extensions" => parse_extensions(ctx, &mut registry.extensions)?,
                "interaction_profiles" => {
                    parse_interaction_profiles(ctx, &mut registry.interaction_profiles)?
                }
                // Sections the model does not track.
                "comment" | "types" | "commands" => ctx.skip_element()?,
                other => {
                    ctx.unexpected("registry", other);
                    ctx.skip_element()?;
                }
            },
            XmlEvent::EndElement { .. } | XmlEvent::EndDocument => return Ok(registry),
            _ => (),
        }
    }
}

fn parse_tags<R: Read>(ctx: &mut Context<R>, tags: &mut Vec<Tag>) -> Result<(), FatalError> {
    loop {
        match ctx.events.next()? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                if name.local_name == "tag" {
                    let tag_name = ctx.require(&attributes, "tag", "name");
                    let author = ctx.require(&attributes, "tag", "author");
                    let contact = ctx.require(&attributes, "tag", "contact");
                    if let (Some(name), Some(author), Some(contact)) = (tag_name, author, contact) {
                        tags.push(Tag {
                            name,
                            author,
                            contact,
                        });
                    }
                } else {
                    ctx.unexpected("tags", &name.local_name);
                }
                ctx.skip_element()?;
            }
            XmlEvent::EndElement { .. } | XmlEvent::EndDocument => return Ok(()),
            _ => (),
        }
    }
}

fn parse_feature<R: Read>(
    ctx: &mut Context<R>,
    attributes: &[OwnedAttribute],
    features: &mut Vec<Feature>,
) -> Result<(), FatalError> {
    // Features of other APIs sharing the document are not an error.
    if attr(attributes, "api").is_some_and(|api| api.split(',').all(|api| api != "openxr")) {
        return ctx.skip_element();
    }

    let name = ctx.require(attributes, "feature", "name");
    let number = ctx.require(attributes, "feature", "number");
    if let (Some(name), Some(number)) = (name, number) {
        match number.parse() {
            Ok(number) => features.push(Feature { name, number }),
            Err(_) => ctx.invalid_value("feature", "number", &number),
        }
    }

    ctx.skip_element()
}

fn parse_enums<R: Read>(
    ctx: &mut Context<R>,
    attributes: &[OwnedAttribute],
    defs: &mut Vec<StructureTypeDef>,
) -> Result<(), FatalError> {
    // Only the XrStructureType block is modeled; XrResult, API constants and
    // the rest are skipped.
    if attr(attributes, "name") != Some("XrStructureType") {
        return ctx.skip_element();
    }

    loop {
        match ctx.events.next()? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                if name.local_name == "enum" {
                    let member = ctx.require(&attributes, "enum", "name");
                    let value = ctx.require(&attributes, "enum", "value");
                    if let (Some(member), Some(value)) = (member, value) {
                        match value.parse() {
                            Ok(value) => defs.push(StructureTypeDef {
                                name: member,
                                value,
                                comment: attr(&attributes, "comment").map(str::to_owned),
                            }),
                            Err(_) => ctx.invalid_value("enum", "value", &value),
                        }
                    }
                } else {
                    ctx.unexpected("enums", &name.local_name);
                }
                ctx.skip_element()?;
            }
            XmlEvent::EndElement { .. } | XmlEvent::EndDocument => return Ok(()),
            _ => (),
        }
    }
}

fn parse_extensions<R: Read>(
    ctx: &mut Context<R>,
    extensions: &mut Vec<Extension>,
) -> Result<(), FatalError> {
    loop {
        match ctx.events.next()? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                if name.local_name == "extension" {
                    if let Some(extension) = parse_extension(ctx, &attributes)? {
                        extensions.push(extension);
                    }
                } else {
                    ctx.unexpected("extensions", &name.local_name);
                    ctx.skip_element()?;
                }
            }
            XmlEvent::EndElement { .. } | XmlEvent::EndDocument => return Ok(()),
            _ => (),
        }
    }
}

fn parse_extension<R: Read>(
    ctx: &mut Context<R>,
    attributes: &[OwnedAttribute],
) -> Result<Option<Extension>, FatalError> {
    let name = ctx.require(attributes, "extension", "name");
    let number = ctx.require(attributes, "extension", "number");
    let (Some(name), Some(number)) = (name, number) else {
        ctx.skip_element()?;
        return Ok(None);
    };
    let Ok(number) = number.parse() else {
        ctx.invalid_value("extension", "number", &number);
        ctx.skip_element()?;
        return Ok(None);
    };

    let mut extension = Extension {
        name,
        number,
        ty: attr(attributes, "type").map(str::to_owned),
        supported: attr(attributes, "supported").map(str::to_owned),
        revision: 1,
        protect: attr(attributes, "protect").map(str::to_owned),
        provisional: attr(attributes, "provisional") == Some("true"),
        requires: attr(attributes, "requires")
            .map(|requires| requires.split(',').map(str::to_owned).collect())
            .unwrap_or_default(),
        structure_types: Vec::new(),
        commands: Vec::new(),
    };

    loop {
        match ctx.events.next()? {
            XmlEvent::StartElement { name, .. } => match name.local_name.as_str() {
                "require" => parse_extension_require(ctx, &mut extension)?,
                other => {
                    ctx.unexpected("extension", other);
                    ctx.skip_element()?;
                }
            },
            XmlEvent::EndElement { .. } | XmlEvent::EndDocument => return Ok(Some(extension)),
            _ => (),
        }
    }
}

fn parse_extension_require<R: Read>(
    ctx: &mut Context<R>,
    extension: &mut Extension,
) -> Result<(), FatalError> {
    loop {
        match ctx.events.next()? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                match name.local_name.as_str() {
                    "enum" => parse_require_enum(ctx, &attributes, extension),
                    "command" => {
                        if let Some(name) = ctx.require(&attributes, "command", "name") {
                            extension.commands.push(name);
                        }
                    }
                    "type" | "comment" | "interaction_profile" => (),
                    other => ctx.unexpected("require", other),
                }
                ctx.skip_element()?;
            }
            XmlEvent::EndElement { .. } | XmlEvent::EndDocument => return Ok(()),
            _ => (),
        }
    }
}

fn parse_require_enum<R: Read>(
    ctx: &mut Context<R>,
    attributes: &[OwnedAttribute],
    extension: &mut Extension,
) {
    let Some(name) = ctx.require(attributes, "enum", "name") else {
        return;
    };

    match attr(attributes, "extends") {
        Some("XrStructureType") => {
            let spec = if let Some(target) = attr(attributes, "alias") {
                ValueSpec::Alias(target.to_owned())
            } else if let Some(value) = attr(attributes, "value") {
                match value.parse() {
                    Ok(value) => ValueSpec::Value(value),
                    Err(_) => return ctx.invalid_value("enum", "value", value),
                }
            } else if let Some(offset) = attr(attributes, "offset") {
                let Ok(offset) = offset.parse() else {
                    return ctx.invalid_value("enum", "offset", offset);
                };
                let extnumber = match attr(attributes, "extnumber") {
                    Some(raw) => match raw.parse() {
                        Ok(extnumber) => Some(extnumber),
                        Err(_) => return ctx.invalid_value("enum", "extnumber", raw),
                    },
                    None => None,
                };
                ValueSpec::Offset {
                    offset,
                    extnumber,
                    negative: attr(attributes, "dir") == Some("-"),
                }
            } else {
                ctx.errors.push(Error::Schema {
                    desc: format!(
                        "enum {name} extends XrStructureType without value, offset or alias"
                    ),
                });
                return;
            };

            extension.structure_types.push(ExtensionEnum {
                name,
                spec,
                comment: attr(attributes, "comment").map(str::to_owned),
            });
        }
        // Rows extending enum blocks the model does not track.
        Some(_) => (),
        None => {
            // Standalone constants. Only the revision is of interest; the
            // EXTENSION_NAME string constant is implied by the declaration.
            if name.ends_with("_SPEC_VERSION") {
                if let Some(Ok(revision)) = attr(attributes, "value").map(str::parse) {
                    extension.revision = revision;
                }
            }
        }
    }
}

fn parse_interaction_profiles<R: Read>(
    ctx: &mut Context<R>,
    profiles: &mut Vec<InteractionProfile>,
) -> Result<(), FatalError> {
    loop {
        match ctx.events.next()? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                if name.local_name == "interaction_profile" {
                    if let Some(profile) = parse_interaction_profile(ctx, &attributes)? {
                        profiles.push(profile);
                    }
                } else {
                    ctx.unexpected("interaction_profiles", &name.local_name);
                    ctx.skip_element()?;
                }
            }
            XmlEvent::EndElement { .. } | XmlEvent::EndDocument => return Ok(()),
            _ => (),
        }
    }
}

fn parse_interaction_profile<R: Read>(
    ctx: &mut Context<R>,
    attributes: &[OwnedAttribute],
) -> Result<Option<InteractionProfile>, FatalError> {
    let path = ctx.require(attributes, "interaction_profile", "name");
    let title = ctx.require(attributes, "interaction_profile", "title");
    let (Some(path), Some(title)) = (path, title) else {
        ctx.skip_element()?;
        return Ok(None);
    };

    let mut profile = InteractionProfile {
        path,
        title,
        availability: attr(attributes, "availability").map(str::to_owned),
        user_paths: Vec::new(),
        components: Vec::new(),
    };

    loop {
        match ctx.events.next()? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                match name.local_name.as_str() {
                    "user_path" => {
                        if let Some(path) = ctx.require(&attributes, "user_path", "path") {
                            profile.user_paths.push(path);
                        }
                    }
                    "component" => parse_profile_component(ctx, &attributes, &mut profile),
                    other => ctx.unexpected("interaction_profile", other),
                }
                ctx.skip_element()?;
            }
            XmlEvent::EndElement { .. } | XmlEvent::EndDocument => return Ok(Some(profile)),
            _ => (),
        }
    }
}

fn parse_profile_component<R: Read>(
    ctx: &mut Context<R>,
    attributes: &[OwnedAttribute],
    profile: &mut InteractionProfile,
) {
    let subpath = ctx.require(attributes, "component", "subpath");
    let ty = ctx.require(attributes, "component", "type");
    let (Some(subpath), Some(ty)) = (subpath, ty) else {
        return;
    };
    let Some(ty) = ComponentType::from_attr(&ty) else {
        return ctx.invalid_value("component", "type", &ty);
    };

    profile.components.push(ProfileComponent {
        user_path: attr(attributes, "user_path").map(str::to_owned),
        subpath,
        ty,
        system: attr(attributes, "system") == Some("true"),
        availability: attr(attributes, "availability").map(str::to_owned),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<registry>
    <comment>Trimmed for testing</comment>
    <tags>
        <tag name="FB" author="Facebook Technologies" contact="ignored"/>
        <tag name="META" author="Meta Platforms" contact="ignored"/>
    </tags>
    <types>
        <type category="basetype">typedef uint64_t <name>XrVersion</name>;</type>
    </types>
    <feature api="openxr" name="XR_VERSION_1_0" number="1.0"/>
    <feature api="openxr" name="XR_VERSION_1_1" number="1.1"/>
    <feature api="vulkan" name="VK_VERSION_1_0" number="1.0"/>
    <enums name="XrResult" type="enum">
        <enum value="0" name="XR_SUCCESS"/>
    </enums>
    <enums name="XrStructureType" type="enum">
        <enum value="0" name="XR_TYPE_UNKNOWN"/>
        <enum value="13" name="XR_TYPE_HAPTIC_VIBRATION" comment="XrHapticVibration"/>
    </enums>
    <extensions>
        <extension name="XR_FB_haptic_pcm" number="210" type="instance" supported="openxr" requires="XR_EXT_uuid">
            <require>
                <enum value="1" name="XR_FB_haptic_pcm_SPEC_VERSION"/>
                <enum value="&quot;XR_FB_haptic_pcm&quot;" name="XR_FB_HAPTIC_PCM_EXTENSION_NAME"/>
                <enum value="4000" name="XR_MAX_HAPTIC_PCM_BUFFER_SIZE_FB"/>
                <enum offset="1" extends="XrStructureType" name="XR_TYPE_HAPTIC_PCM_VIBRATION_FB"/>
                <enum offset="2" extends="XrStructureType" name="XR_TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB"/>
                <enum alias="XR_TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB" extends="XrStructureType" name="XR_TYPE_DEVICE_PCM_SAMPLE_RATE_GET_INFO_FB"/>
                <enum offset="3" extends="XrResult" name="XR_ERROR_NOT_PCM"/>
                <command name="xrGetDeviceSampleRateFB"/>
            </require>
        </extension>
        <extension name="XR_META_simultaneous_hands_and_controllers" number="533" supported="openxr" provisional="true">
            <require>
                <enum value="1" name="XR_META_simultaneous_hands_and_controllers_SPEC_VERSION"/>
                <enum offset="1" extends="XrStructureType" dir="-" name="XR_TYPE_NEGATED_TEST_META"/>
            </require>
        </extension>
    </extensions>
    <interaction_profiles>
        <interaction_profile name="/interaction_profiles/test/gamepad" title="Test Gamepad" availability="XR_VERSION_1_0">
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

    fn parse_fixture() -> (Registry, Vec<Error>) {
        parse_stream(FIXTURE.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_sections() {
        let (registry, errors) = parse_fixture();

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(registry.tags.len(), 2);
        assert_eq!(registry.tags[0].name, "FB");

        // the vulkan feature is filtered out
        assert_eq!(registry.api_versions.len(), 2);
        assert_eq!(registry.api_versions[1].name, "XR_VERSION_1_1");
        assert_eq!(
            registry.api_versions[1].number,
            xrx_common::ApiVersion::from_parts(1, 1, 0)
        );

        // only the XrStructureType block is kept
        assert_eq!(registry.structure_types.len(), 2);
        assert_eq!(registry.structure_types[1].value, 13);
        assert_eq!(registry.structure_types[1].comment.as_deref(), Some("XrHapticVibration"));
    }

    #[test]
    fn test_parse_extensions() {
        let (registry, _) = parse_fixture();

        assert_eq!(registry.extensions.len(), 2);

        let pcm = &registry.extensions[0];
        assert_eq!(pcm.name, "XR_FB_haptic_pcm");
        assert_eq!(pcm.number, 210);
        assert_eq!(pcm.ty.as_deref(), Some("instance"));
        assert_eq!(pcm.revision, 1);
        assert_eq!(pcm.requires, vec!["XR_EXT_uuid".to_owned()]);
        assert_eq!(pcm.commands, vec!["xrGetDeviceSampleRateFB".to_owned()]);
        assert!(!pcm.provisional);

        // the XrResult row and the string constants are not structure types
        assert_eq!(pcm.structure_types.len(), 3);
        assert_eq!(pcm.enum_value(&pcm.structure_types[0].spec), Ok(1000209001));
        assert_eq!(
            pcm.structure_types[2].spec,
            ValueSpec::Alias("XR_TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB".to_owned())
        );

        let simultaneous = &registry.extensions[1];
        assert!(simultaneous.provisional);
        assert_eq!(
            simultaneous.enum_value(&simultaneous.structure_types[0].spec),
            Ok(-1000532001)
        );
    }

    #[test]
    fn test_parse_interaction_profiles() {
        let (registry, _) = parse_fixture();

        assert_eq!(registry.interaction_profiles.len(), 1);
        let profile = &registry.interaction_profiles[0];

        assert_eq!(profile.path, "/interaction_profiles/test/gamepad");
        assert_eq!(profile.title, "Test Gamepad");
        assert_eq!(profile.availability.as_deref(), Some("XR_VERSION_1_0"));
        assert_eq!(
            profile.user_paths,
            vec!["/user/hand/left".to_owned(), "/user/hand/right".to_owned()]
        );
        assert_eq!(profile.components.len(), 4);

        let system = &profile.components[1];
        assert_eq!(system.user_path.as_deref(), Some("/user/hand/right"));
        assert!(system.system);
        assert_eq!(system.ty, ComponentType::Boolean);

        let grip_surface = &profile.components[2];
        assert_eq!(grip_surface.availability.as_deref(), Some("XR_VERSION_1_1"));
        assert_eq!(grip_surface.ty, ComponentType::Pose);

        assert!(registry.validate().is_empty());
    }

    #[test]
    fn test_recoverable_errors() {
        let fixture = r#"
<registry>
    <gadgets/>
    <enums name="XrStructureType">
        <enum name="XR_TYPE_NO_VALUE"/>
        <enum value="nine" name="XR_TYPE_BAD_VALUE"/>
        <enum value="7" name="XR_TYPE_GOOD"/>
    </enums>
</registry>
"#;
        let (registry, errors) = parse_stream(fixture.as_bytes()).unwrap();

        assert_eq!(registry.structure_types.len(), 1);
        assert_eq!(registry.structure_types[0].name, "XR_TYPE_GOOD");

        assert_eq!(
            errors,
            vec![
                Error::UnexpectedElement {
                    context: "registry".to_owned(),
                    name: "gadgets".to_owned(),
                },
                Error::MissingAttribute {
                    element: "enum".to_owned(),
                    attribute: "value".to_owned(),
                },
                Error::InvalidAttributeValue {
                    element: "enum".to_owned(),
                    attribute: "value".to_owned(),
                    value: "nine".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_registry_element() {
        assert!(matches!(
            parse_stream("<other/>".as_bytes()),
            Err(FatalError::MissingRegistryElement)
        ));
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serialize_round_trip() {
        let (registry, _) = parse_fixture();

        let json = serde_json::to_string(&registry).unwrap();
        let restored: Registry = serde_json::from_str(&json).unwrap();

        assert_eq!(registry, restored);
    }
}
