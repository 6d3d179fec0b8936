// @generated by `cargo xtask gen-interaction-profiles`. Do not edit.
//
// Interaction profile metadata rows for the registry snapshot this workspace
// tracks, in registry order.

use crate::{Availability, Component, ComponentType, InteractionProfile};
use xrx_common::ApiVersion;

pub static PROFILES: &[InteractionProfile] = &[
    InteractionProfile {
        path: "/interaction_profiles/khr/simple_controller",
        title: "Khronos Simple Controller",
        availability: Availability::Core(ApiVersion::from_parts(1, 0, 0)),
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
                subpath: "/input/menu/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/grip/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/aim/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
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
    InteractionProfile {
        path: "/interaction_profiles/oculus/touch_controller",
        title: "Oculus Touch Controller",
        availability: Availability::Core(ApiVersion::from_parts(1, 0, 0)),
        user_paths: &["/user/hand/left", "/user/hand/right"],
        components: &[
            Component {
                subpath: "/input/x/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/x/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/y/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/y/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/menu/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/a/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/a/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/b/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/b/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
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
                subpath: "/input/squeeze/value",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/value",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick",
                ty: ComponentType::Vector2f,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/x",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/y",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbrest/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/grip/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/aim/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
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
    InteractionProfile {
        path: "/interaction_profiles/htc/vive_controller",
        title: "HTC Vive Controller",
        availability: Availability::Core(ApiVersion::from_parts(1, 0, 0)),
        user_paths: &["/user/hand/left", "/user/hand/right"],
        components: &[
            Component {
                subpath: "/input/system/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: true,
                availability: None,
            },
            Component {
                subpath: "/input/squeeze/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/menu/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/value",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trackpad",
                ty: ComponentType::Vector2f,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trackpad/x",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trackpad/y",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trackpad/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trackpad/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/grip/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/aim/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
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
    InteractionProfile {
        path: "/interaction_profiles/valve/index_controller",
        title: "Valve Index Controller",
        availability: Availability::Core(ApiVersion::from_parts(1, 0, 0)),
        user_paths: &["/user/hand/left", "/user/hand/right"],
        components: &[
            Component {
                subpath: "/input/system/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: true,
                availability: None,
            },
            Component {
                subpath: "/input/system/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: true,
                availability: None,
            },
            Component {
                subpath: "/input/a/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/a/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/b/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/b/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/squeeze/value",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/squeeze/force",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/value",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick",
                ty: ComponentType::Vector2f,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/x",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/y",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trackpad",
                ty: ComponentType::Vector2f,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trackpad/x",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trackpad/y",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trackpad/force",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trackpad/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/grip/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/aim/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
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
    InteractionProfile {
        path: "/interaction_profiles/ext/eye_gaze_interaction",
        title: "Eye Gaze Interaction",
        availability: Availability::Extension("XR_EXT_eye_gaze_interaction"),
        user_paths: &["/user/eyes_ext"],
        components: &[
            Component {
                subpath: "/input/gaze_ext/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
                availability: None,
            },
        ],
    },
    InteractionProfile {
        path: "/interaction_profiles/facebook/touch_controller_pro",
        title: "Meta Quest Touch Pro Controller",
        availability: Availability::Extension("XR_FB_touch_controller_pro"),
        user_paths: &["/user/hand/left", "/user/hand/right"],
        components: &[
            Component {
                subpath: "/input/x/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/x/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/y/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/y/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/menu/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/a/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/a/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/b/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/b/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
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
                subpath: "/input/squeeze/value",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/value",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick",
                ty: ComponentType::Vector2f,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/x",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/y",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbrest/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbrest/force",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/curl_fb",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/slide_fb",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/proximity_fb",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumb_fb/proximity_fb",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/stylus_fb/force",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/grip/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/aim/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
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
            Component {
                subpath: "/output/trigger_haptic_fb",
                ty: ComponentType::Vibration,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/output/thumb_haptic_fb",
                ty: ComponentType::Vibration,
                user_paths: None,
                system: false,
                availability: None,
            },
        ],
    },
    InteractionProfile {
        path: "/interaction_profiles/meta/touch_controller_plus",
        title: "Meta Quest Touch Plus Controller",
        availability: Availability::Extension("XR_META_touch_controller_plus"),
        user_paths: &["/user/hand/left", "/user/hand/right"],
        components: &[
            Component {
                subpath: "/input/x/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/x/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/y/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/y/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/menu/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/left"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/a/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/a/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/b/click",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/b/touch",
                ty: ComponentType::Boolean,
                user_paths: Some(&["/user/hand/right"]),
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
                subpath: "/input/squeeze/value",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/value",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick",
                ty: ComponentType::Vector2f,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/x",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/y",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/click",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbstick/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumbrest/touch",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/curl_meta",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/slide_meta",
                ty: ComponentType::Float,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/trigger/proximity_meta",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/thumb_meta/proximity_meta",
                ty: ComponentType::Boolean,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/grip/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
                availability: None,
            },
            Component {
                subpath: "/input/aim/pose",
                ty: ComponentType::Pose,
                user_paths: None,
                system: false,
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
