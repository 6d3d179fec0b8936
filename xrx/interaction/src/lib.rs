//! Interaction profile metadata for input conformance checks.
//!
//! [`PROFILES`] mirrors the interaction profile declarations of the registry
//! snapshot this workspace tracks and is rewritten by `cargo xtask
//! gen-interaction-profiles`. The types and the binding path checks are the
//! hand-written surface a test harness drives.

mod generated;

pub use generated::PROFILES;

use std::{collections::HashMap, fmt};
use xrx_common::{once_cell::sync::Lazy, ApiVersion};

macro_rules! user_paths {
    ($(($name:ident, $path:expr),)*) => {
        paste::paste! {
            $(
                pub const [<$name _PATH>]: &str = $path;
            )*
        }
    };
}

user_paths! {
    (USER_HEAD, "/user/head"),
    (USER_HAND_LEFT, "/user/hand/left"),
    (USER_HAND_RIGHT, "/user/hand/right"),
    (USER_EYES, "/user/eyes_ext"),
    (USER_GAMEPAD, "/user/gamepad"),
}

/// Data type of one profile control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Boolean,
    Float,
    Vector2f,
    Pose,
    Vibration,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Boolean => "boolean",
            ComponentType::Float => "float",
            ComponentType::Vector2f => "vector2f",
            ComponentType::Pose => "pose",
            ComponentType::Vibration => "vibration",
        }
    }
}

/// When a profile or control becomes usable: from a core version on, or with
/// an extension enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Core(ApiVersion),
    Extension(&'static str),
}

impl Availability {
    pub fn satisfied_by(&self, api_version: ApiVersion, enabled_extensions: &[&str]) -> bool {
        match self {
            Availability::Core(version) => api_version >= *version,
            Availability::Extension(name) => enabled_extensions.contains(name),
        }
    }
}

/// One control of an interaction profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    pub subpath: &'static str,
    pub ty: ComponentType,
    /// `None` means the control exists on every user path of the profile.
    pub user_paths: Option<&'static [&'static str]>,
    /// System controls may be queried but must not be suggested for
    /// application bindings.
    pub system: bool,
    /// Overrides the profile availability for this control alone.
    pub availability: Option<Availability>,
}

impl Component {
    /// Whether this control exists on `user_path`.
    pub fn valid_on(&self, user_path: &str) -> bool {
        match self.user_paths {
            Some(paths) => paths.contains(&user_path),
            None => true,
        }
    }

    /// The control's identifier path: the subpath with its component part
    /// removed. `/input/trigger/value` becomes `/input/trigger`; subpaths
    /// without a component part are their own identifier.
    pub fn identifier(&self) -> &'static str {
        match self.subpath.rsplit_once('/') {
            Some((identifier, _))
                if !identifier.is_empty()
                    && identifier != "/input"
                    && identifier != "/output" =>
            {
                identifier
            }
            _ => self.subpath,
        }
    }
}

/// Why a suggested binding path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingError {
    /// The path does not start with one of the profile's user paths.
    UnknownUserPath,
    /// The user path is fine but no control matches the remainder.
    UnknownInput,
    /// The path is not a well-formed binding path.
    Malformed,
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::UnknownUserPath => write!(f, "binding path has an unknown user path"),
            BindingError::UnknownInput => write!(f, "binding path matches no control"),
            BindingError::Malformed => write!(f, "binding path is malformed"),
        }
    }
}

impl std::error::Error for BindingError {}

/// One interaction profile of the registry snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionProfile {
    pub path: &'static str,
    pub title: &'static str,
    pub availability: Availability,
    pub user_paths: &'static [&'static str],
    pub components: &'static [Component],
}

impl InteractionProfile {
    pub fn is_available(&self, api_version: ApiVersion, enabled_extensions: &[&str]) -> bool {
        self.availability.satisfied_by(api_version, enabled_extensions)
    }

    /// Controls that exist on `user_path`, in declaration order.
    pub fn components_for<'a>(
        &'a self,
        user_path: &'a str,
    ) -> impl Iterator<Item = &'static Component> + 'a {
        let known = self.user_paths.contains(&user_path);
        self.components
            .iter()
            .filter(move |component| known && component.valid_on(user_path))
    }

    /// Checks a suggested binding path against this profile.
    ///
    /// The path must start with one of the profile's user paths and the
    /// remainder must either equal a control subpath or name a control
    /// identifier. The first matching control in declaration order is
    /// returned; the caller decides what to do about `system` controls.
    pub fn validate_binding(&self, path: &str) -> Result<&'static Component, BindingError> {
        if !path.starts_with('/') {
            return Err(BindingError::Malformed);
        }

        let Some(user_path) = self.user_paths.iter().copied().find(|user_path| {
            path == *user_path
                || path
                    .strip_prefix(user_path)
                    .is_some_and(|rest| rest.starts_with('/'))
        }) else {
            return Err(BindingError::UnknownUserPath);
        };

        let subpath = &path[user_path.len()..];
        if subpath.is_empty() {
            return Err(BindingError::Malformed);
        }

        self.components
            .iter()
            .find(|component| {
                component.valid_on(user_path)
                    && (component.subpath == subpath || component.identifier() == subpath)
            })
            .ok_or(BindingError::UnknownInput)
    }
}

static PROFILE_BY_PATH: Lazy<HashMap<&str, &InteractionProfile>> =
    Lazy::new(|| PROFILES.iter().map(|profile| (profile.path, profile)).collect());

/// Profile declared for an interaction profile path.
pub fn profile_by_path(path: &str) -> Option<&'static InteractionProfile> {
    PROFILE_BY_PATH.get(path).copied()
}

/// Profiles usable at `api_version` with `enabled_extensions` enabled.
pub fn available_profiles<'a>(
    api_version: ApiVersion,
    enabled_extensions: &'a [&'a str],
) -> impl Iterator<Item = &'static InteractionProfile> + 'a {
    PROFILES
        .iter()
        .filter(move |profile| profile.is_available(api_version, enabled_extensions))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple() -> &'static InteractionProfile {
        profile_by_path("/interaction_profiles/khr/simple_controller").unwrap()
    }

    fn touch() -> &'static InteractionProfile {
        profile_by_path("/interaction_profiles/oculus/touch_controller").unwrap()
    }

    #[test]
    fn test_tables_are_consistent() {
        for profile in PROFILES {
            assert!(!profile.user_paths.is_empty(), "{}", profile.path);
            assert!(!profile.components.is_empty(), "{}", profile.path);

            for component in profile.components {
                for user_path in component.user_paths.unwrap_or_default() {
                    assert!(
                        profile.user_paths.contains(user_path),
                        "{} restricts {} to foreign user path {user_path}",
                        profile.path,
                        component.subpath,
                    );
                }
            }
        }
    }

    #[test]
    fn test_profile_lookup() {
        assert_eq!(simple().title, "Khronos Simple Controller");
        assert_eq!(
            simple().user_paths,
            &[USER_HAND_LEFT_PATH, USER_HAND_RIGHT_PATH]
        );
        assert!(profile_by_path("/interaction_profiles/khr/bogus").is_none());
    }

    #[test]
    fn test_availability() {
        let extensions = &["XR_EXT_eye_gaze_interaction"];

        assert!(simple().is_available(ApiVersion::CORE_1_0, &[]));

        let eye_gaze = profile_by_path("/interaction_profiles/ext/eye_gaze_interaction").unwrap();
        assert!(!eye_gaze.is_available(ApiVersion::CORE_1_1, &[]));
        assert!(eye_gaze.is_available(ApiVersion::CORE_1_0, extensions));

        let listed: Vec<&str> = available_profiles(ApiVersion::CORE_1_0, extensions)
            .map(|profile| profile.path)
            .collect();
        assert!(listed.contains(&eye_gaze.path));
        assert!(listed.contains(&simple().path));
        assert!(!listed.contains(&"/interaction_profiles/facebook/touch_controller_pro"));
    }

    #[test]
    fn test_component_availability_override() {
        let grip_surface = touch()
            .components
            .iter()
            .find(|component| component.subpath == "/input/grip_surface/pose")
            .unwrap();

        assert_eq!(
            grip_surface.availability,
            Some(Availability::Core(ApiVersion::CORE_1_1))
        );
        assert!(grip_surface.availability.unwrap().satisfied_by(ApiVersion::CORE_1_1, &[]));
        assert!(!grip_surface.availability.unwrap().satisfied_by(ApiVersion::CORE_1_0, &[]));
    }

    #[test]
    fn test_components_for_user_path() {
        let left: Vec<&str> = touch()
            .components_for(USER_HAND_LEFT_PATH)
            .map(|component| component.subpath)
            .collect();
        let right: Vec<&str> = touch()
            .components_for(USER_HAND_RIGHT_PATH)
            .map(|component| component.subpath)
            .collect();

        assert!(left.contains(&"/input/x/click"));
        assert!(!right.contains(&"/input/x/click"));
        assert!(right.contains(&"/input/a/click"));
        assert!(!left.contains(&"/input/a/click"));
        assert!(left.contains(&"/input/trigger/value"));
        assert!(right.contains(&"/input/trigger/value"));

        assert_eq!(touch().components_for("/user/gamepad").count(), 0);
    }

    #[test]
    fn test_validate_binding_exact() {
        let component = simple()
            .validate_binding("/user/hand/left/input/select/click")
            .unwrap();
        assert_eq!(component.subpath, "/input/select/click");
        assert_eq!(component.ty, ComponentType::Boolean);
    }

    #[test]
    fn test_validate_binding_by_identifier() {
        // suggesting the identifier without a component part is allowed
        let select = simple().validate_binding("/user/hand/left/input/select").unwrap();
        assert_eq!(select.subpath, "/input/select/click");

        let haptic = simple().validate_binding("/user/hand/right/output/haptic").unwrap();
        assert_eq!(haptic.ty, ComponentType::Vibration);

        // the first matching component in declaration order wins
        let trigger = touch().validate_binding("/user/hand/left/input/trigger").unwrap();
        assert_eq!(trigger.subpath, "/input/trigger/value");
    }

    #[test]
    fn test_validate_binding_user_path_restrictions() {
        assert_eq!(
            touch().validate_binding("/user/hand/right/input/x/click"),
            Err(BindingError::UnknownInput)
        );
        assert!(touch().validate_binding("/user/hand/left/input/x/click").is_ok());

        let system = touch()
            .validate_binding("/user/hand/right/input/system/click")
            .unwrap();
        assert!(system.system);
    }

    #[test]
    fn test_validate_binding_rejections() {
        assert_eq!(
            simple().validate_binding("/user/gamepad/input/select/click"),
            Err(BindingError::UnknownUserPath)
        );
        assert_eq!(
            simple().validate_binding("/user/hand/lefty/input/select/click"),
            Err(BindingError::UnknownUserPath)
        );
        assert_eq!(
            simple().validate_binding("/user/hand/left/input/squeeze/value"),
            Err(BindingError::UnknownInput)
        );
        assert_eq!(
            simple().validate_binding("/user/hand/left"),
            Err(BindingError::Malformed)
        );
        assert_eq!(
            simple().validate_binding("user/hand/left/input/select/click"),
            Err(BindingError::Malformed)
        );
    }

    #[test]
    fn test_identifier_derivation() {
        let thumbstick = touch()
            .components
            .iter()
            .find(|component| component.subpath == "/input/thumbstick")
            .unwrap();
        assert_eq!(thumbstick.identifier(), "/input/thumbstick");

        let click = touch()
            .components
            .iter()
            .find(|component| component.subpath == "/input/thumbstick/click")
            .unwrap();
        assert_eq!(click.identifier(), "/input/thumbstick");
    }

    #[test]
    fn test_touch_pro_profile_matches_extension_constants() {
        let profile = profile_by_path(xrx_extensions::TOUCH_CONTROLLER_PRO_PROFILE_PATH).unwrap();

        assert_eq!(
            profile.availability,
            Availability::Extension(xrx_extensions::FB_TOUCH_CONTROLLER_PRO_EXTENSION_NAME)
        );

        for subpath in xrx_extensions::TOUCH_CONTROLLER_PRO_EXTRA_SUBPATHS {
            assert!(
                profile
                    .components
                    .iter()
                    .any(|component| component.subpath == *subpath),
                "Touch Pro table is missing {subpath}"
            );
        }
    }
}
