#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};
use xrx_common::ApiVersion;

/// Base of the enum value block reserved for extensions. Every extension owns
/// a [`EXTENSION_ENUM_RANGE`]-wide slice of it, keyed by extension number.
pub const EXTENSION_ENUM_BASE: i64 = 1_000_000_000;
pub const EXTENSION_ENUM_RANGE: i64 = 1_000;

/// The registry sections tracked by this workspace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Registry {
    /// Vendor author tags.
    pub tags: Vec<Tag>,
    /// Core feature levels, `XR_VERSION_1_0` and up.
    pub api_versions: Vec<Feature>,
    /// Core members of the `XrStructureType` enum block.
    pub structure_types: Vec<StructureTypeDef>,
    pub extensions: Vec<Extension>,
    pub interaction_profiles: Vec<InteractionProfile>,
}

impl Registry {
    /// True when `token` names a core feature level or an extension declared
    /// by this registry. Availability attributes must satisfy this.
    pub fn resolves_availability(&self, token: &str) -> bool {
        self.api_versions.iter().any(|feature| feature.name == token)
            || self.extensions.iter().any(|extension| extension.name == token)
    }

    /// Cross-checks the parsed registry, one error per problem found.
    ///
    /// An empty vector means the document is internally consistent and safe
    /// to generate from.
    pub fn validate(&self) -> Vec<Error> {
        let mut errors = Vec::new();

        let mut by_value: HashMap<i64, &str> = HashMap::new();
        let mut by_name: HashMap<&str, i64> = HashMap::new();

        for def in &self.structure_types {
            record_member(&def.name, def.value, &mut by_value, &mut by_name, &mut errors);
        }
        for extension in &self.extensions {
            for row in &extension.structure_types {
                if let Ok(value) = extension.enum_value(&row.spec) {
                    record_member(&row.name, value, &mut by_value, &mut by_name, &mut errors);
                }
            }
        }

        for extension in &self.extensions {
            for row in &extension.structure_types {
                if let ValueSpec::Alias(target) = &row.spec {
                    if !by_name.contains_key(target.as_str()) {
                        errors.push(Error::Schema {
                            desc: format!(
                                "structure type {} aliases unknown member {target}",
                                row.name
                            ),
                        });
                    }
                }
            }
        }

        for profile in &self.interaction_profiles {
            if profile.user_paths.is_empty() {
                errors.push(Error::Schema {
                    desc: format!("interaction profile {} has no user paths", profile.path),
                });
            }
            if profile.components.is_empty() {
                errors.push(Error::Schema {
                    desc: format!("interaction profile {} has no components", profile.path),
                });
            }

            let availabilities = profile.availability.iter().chain(
                profile
                    .components
                    .iter()
                    .filter_map(|component| component.availability.as_ref()),
            );
            for token in availabilities {
                if !self.resolves_availability(token) {
                    errors.push(Error::Schema {
                        desc: format!(
                            "availability {token} of profile {} names neither a feature nor an extension",
                            profile.path
                        ),
                    });
                }
            }

            for component in &profile.components {
                if let Some(user_path) = &component.user_path {
                    if !profile.user_paths.contains(user_path) {
                        errors.push(Error::Schema {
                            desc: format!(
                                "component {} of profile {} is restricted to unknown user path {user_path}",
                                component.subpath, profile.path
                            ),
                        });
                    }
                }
            }
        }

        errors
    }
}

fn record_member<'a>(
    name: &'a str,
    value: i64,
    by_value: &mut HashMap<i64, &'a str>,
    by_name: &mut HashMap<&'a str, i64>,
    errors: &mut Vec<Error>,
) {
    if let Some(previous) = by_value.insert(value, name) {
        errors.push(Error::Schema {
            desc: format!("structure types {previous} and {name} share value {value}"),
        });
    }
    if by_name.insert(name, value).is_some() {
        errors.push(Error::Schema {
            desc: format!("structure type {name} is declared twice"),
        });
    }
}

/// Vendor author tag, `<tag name="FB" .../>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Tag {
    pub name: String,
    pub author: String,
    pub contact: String,
}

/// Core feature level, `<feature api="openxr" name="XR_VERSION_1_0" .../>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Feature {
    pub name: String,
    pub number: ApiVersion,
}

/// Core member of the `XrStructureType` block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct StructureTypeDef {
    pub name: String,
    pub value: i64,
    pub comment: Option<String>,
}

/// One `<extension>` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Extension {
    pub name: String,
    /// Registry-assigned extension number, the key into the enum value block.
    pub number: i64,
    /// `instance` or `system`.
    pub ty: Option<String>,
    pub supported: Option<String>,
    /// Current revision, from the `*_SPEC_VERSION` constant.
    pub revision: i64,
    /// Platform guard macro, `XR_KHX_EXTENSION_NAME`-style extensions only.
    pub protect: Option<String>,
    pub provisional: bool,
    /// Extensions that must be enabled alongside this one.
    pub requires: Vec<String>,
    /// Members this extension adds to `XrStructureType`.
    pub structure_types: Vec<ExtensionEnum>,
    pub commands: Vec<String>,
}

impl Extension {
    /// Resolves an enum row of this extension to its numeric value.
    ///
    /// `Alias` rows carry no number of their own and must be resolved against
    /// the member they alias instead.
    pub fn enum_value(&self, spec: &ValueSpec) -> Result<i64, Error> {
        match spec {
            ValueSpec::Value(value) => Ok(*value),
            ValueSpec::Offset {
                offset,
                extnumber,
                negative,
            } => {
                let number = extnumber.unwrap_or(self.number);
                let value = EXTENSION_ENUM_BASE + (number - 1) * EXTENSION_ENUM_RANGE + offset;
                Ok(if *negative { -value } else { value })
            }
            ValueSpec::Alias(target) => Err(Error::UnresolvedAlias {
                target: target.clone(),
            }),
        }
    }

    /// Cargo feature gating this extension's declarations, if any.
    ///
    /// `protect="XR_FOO"` maps to feature `foo`; provisional extensions
    /// without a protect macro fall under `experimental`.
    pub fn guard_feature(&self) -> Option<String> {
        if let Some(protect) = &self.protect {
            let name = protect.strip_prefix("XR_").unwrap_or(protect);
            Some(name.to_ascii_lowercase())
        } else if self.provisional {
            Some("experimental".to_owned())
        } else {
            None
        }
    }
}

/// Enum member added by an extension `<require>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct ExtensionEnum {
    pub name: String,
    pub spec: ValueSpec,
    pub comment: Option<String>,
}

/// How an extension enum row states its value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum ValueSpec {
    /// Literal `value` attribute.
    Value(i64),
    /// `offset` attribute, relative to the extension's value block.
    /// `extnumber` redirects into another extension's block.
    Offset {
        offset: i64,
        extnumber: Option<i64>,
        negative: bool,
    },
    /// `alias` attribute naming another member.
    Alias(String),
}

/// One `<interaction_profile>` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct InteractionProfile {
    /// `/interaction_profiles/<vendor>/<name>` path.
    pub path: String,
    pub title: String,
    /// Feature or extension this profile comes from. Absent means core 1.0.
    pub availability: Option<String>,
    pub user_paths: Vec<String>,
    pub components: Vec<ProfileComponent>,
}

/// One input or output component of an interaction profile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct ProfileComponent {
    /// Restricts the component to one of the profile's user paths. Absent
    /// means it exists on all of them.
    pub user_path: Option<String>,
    pub subpath: String,
    pub ty: ComponentType,
    /// System components may be queried but not suggested for bindings.
    pub system: bool,
    /// Overrides the profile availability for this component.
    pub availability: Option<String>,
}

/// Data type of a profile component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ComponentType {
    Boolean,
    Float,
    Vector2f,
    Pose,
    Vibration,
}

impl ComponentType {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "boolean" => Some(Self::Boolean),
            "float" => Some(Self::Float),
            "vector2f" => Some(Self::Vector2f),
            "pose" => Some(Self::Pose),
            "vibration" => Some(Self::Vibration),
            _ => None,
        }
    }
}

/// Errors the parser cannot recover from.
#[derive(Debug)]
#[non_exhaustive]
pub enum FatalError {
    Io(std::io::Error),
    Xml(xml::reader::Error),
    /// The document contains no `<registry>` root element.
    MissingRegistryElement,
}

impl From<std::io::Error> for FatalError {
    fn from(e: std::io::Error) -> Self {
        FatalError::Io(e)
    }
}

impl From<xml::reader::Error> for FatalError {
    fn from(e: xml::reader::Error) -> Self {
        FatalError::Xml(e)
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::Io(e) => write!(f, "{e}"),
            FatalError::Xml(e) => write!(f, "{e}"),
            FatalError::MissingRegistryElement => {
                write!(f, "document has no <registry> root element")
            }
        }
    }
}

impl std::error::Error for FatalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FatalError::Io(e) => Some(e),
            FatalError::Xml(e) => Some(e),
            FatalError::MissingRegistryElement => None,
        }
    }
}

/// Problems the parser records and skips past instead of aborting on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Error {
    UnexpectedElement { context: String, name: String },
    MissingAttribute { element: String, attribute: String },
    InvalidAttributeValue {
        element: String,
        attribute: String,
        value: String,
    },
    /// An alias row was resolved as if it carried a value.
    UnresolvedAlias { target: String },
    Schema { desc: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnexpectedElement { context, name } => {
                write!(f, "unexpected element <{name}> in <{context}>")
            }
            Error::MissingAttribute { element, attribute } => {
                write!(f, "<{element}> is missing attribute {attribute}")
            }
            Error::InvalidAttributeValue {
                element,
                attribute,
                value,
            } => write!(f, "<{element}> has invalid {attribute}={value:?}"),
            Error::UnresolvedAlias { target } => {
                write!(f, "alias of {target} has no value of its own")
            }
            Error::Schema { desc } => write!(f, "{desc}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    fn extension(number: i64) -> Extension {
        Extension {
            name: "XR_TEST_widget".into(),
            number,
            revision: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_enum_value_offsets() {
        let ext = extension(210);

        let spec = ValueSpec::Offset {
            offset: 1,
            extnumber: None,
            negative: false,
        };
        assert_eq!(ext.enum_value(&spec), Ok(1000209001));

        let redirected = ValueSpec::Offset {
            offset: 3,
            extnumber: Some(90),
            negative: false,
        };
        assert_eq!(ext.enum_value(&redirected), Ok(1000089003));

        let negated = ValueSpec::Offset {
            offset: 0,
            extnumber: None,
            negative: true,
        };
        assert_eq!(ext.enum_value(&negated), Ok(-1000209000));

        assert_eq!(ext.enum_value(&ValueSpec::Value(42)), Ok(42));
        assert!(ext.enum_value(&ValueSpec::Alias("XR_TYPE_X".into())).is_err());
    }

    #[test]
    fn test_guard_feature() {
        let mut ext = extension(533);
        assert_eq!(ext.guard_feature(), None);

        ext.provisional = true;
        assert_eq!(ext.guard_feature(), Some("experimental".into()));

        ext.protect = Some("XR_KHX_EXTENSION".into());
        assert_eq!(ext.guard_feature(), Some("khx_extension".into()));
    }

    #[test]
    fn test_validate_reports_duplicates() {
        let mut registry = Registry::default();
        registry.structure_types.push(StructureTypeDef {
            name: "XR_TYPE_UNKNOWN".into(),
            value: 0,
            comment: None,
        });

        let mut ext = extension(1);
        ext.structure_types.push(ExtensionEnum {
            name: "XR_TYPE_COLLIDING".into(),
            spec: ValueSpec::Value(0),
            comment: None,
        });
        registry.extensions.push(ext);

        let errors = registry.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("share value 0"));
    }

    #[test]
    fn test_validate_checks_profiles() {
        let mut registry = Registry::default();
        registry.interaction_profiles.push(InteractionProfile {
            path: "/interaction_profiles/test/gamepad".into(),
            title: "Test".into(),
            availability: Some("XR_TEST_missing".into()),
            user_paths: vec!["/user/hand/left".into()],
            components: vec![ProfileComponent {
                user_path: Some("/user/hand/right".into()),
                subpath: "/input/select/click".into(),
                ty: ComponentType::Boolean,
                system: false,
                availability: None,
            }],
        });

        let errors = registry.validate();
        let descs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();

        assert_eq!(errors.len(), 2, "{descs:?}");
        assert!(descs[0].contains("names neither a feature nor an extension"));
        assert!(descs[1].contains("unknown user path"));
    }
}
