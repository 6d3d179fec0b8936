// @generated by `cargo xtask gen-reflection`. Do not edit.
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
        name: "XR_TYPE_API_LAYER_PROPERTIES",
        value: 1,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_EXTENSION_PROPERTIES",
        value: 2,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_INSTANCE_CREATE_INFO",
        value: 3,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SYSTEM_GET_INFO",
        value: 4,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SYSTEM_PROPERTIES",
        value: 5,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_VIEW_LOCATE_INFO",
        value: 6,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_VIEW",
        value: 7,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SESSION_CREATE_INFO",
        value: 8,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SWAPCHAIN_CREATE_INFO",
        value: 9,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SESSION_BEGIN_INFO",
        value: 10,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_VIEW_STATE",
        value: 11,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_FRAME_END_INFO",
        value: 12,
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
        name: "XR_TYPE_EVENT_DATA_BUFFER",
        value: 16,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_EVENT_DATA_INSTANCE_LOSS_PENDING",
        value: 17,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_EVENT_DATA_SESSION_STATE_CHANGED",
        value: 18,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_ACTION_STATE_BOOLEAN",
        value: 23,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_ACTION_STATE_FLOAT",
        value: 24,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_ACTION_STATE_VECTOR2F",
        value: 25,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_ACTION_STATE_POSE",
        value: 27,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_ACTION_SET_CREATE_INFO",
        value: 28,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_ACTION_CREATE_INFO",
        value: 29,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_INSTANCE_PROPERTIES",
        value: 32,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_FRAME_WAIT_INFO",
        value: 33,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_COMPOSITION_LAYER_PROJECTION",
        value: 35,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_COMPOSITION_LAYER_QUAD",
        value: 36,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_REFERENCE_SPACE_CREATE_INFO",
        value: 37,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_ACTION_SPACE_CREATE_INFO",
        value: 38,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_EVENT_DATA_REFERENCE_SPACE_CHANGE_PENDING",
        value: 40,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_VIEW_CONFIGURATION_VIEW",
        value: 41,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SPACE_LOCATION",
        value: 42,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SPACE_VELOCITY",
        value: 43,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_FRAME_STATE",
        value: 44,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_VIEW_CONFIGURATION_PROPERTIES",
        value: 45,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_FRAME_BEGIN_INFO",
        value: 46,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_COMPOSITION_LAYER_PROJECTION_VIEW",
        value: 48,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_EVENT_DATA_EVENTS_LOST",
        value: 49,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_INTERACTION_PROFILE_SUGGESTED_BINDING",
        value: 51,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_EVENT_DATA_INTERACTION_PROFILE_CHANGED",
        value: 52,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_INTERACTION_PROFILE_STATE",
        value: 53,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SWAPCHAIN_IMAGE_ACQUIRE_INFO",
        value: 55,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SWAPCHAIN_IMAGE_WAIT_INFO",
        value: 56,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SWAPCHAIN_IMAGE_RELEASE_INFO",
        value: 57,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_ACTION_STATE_GET_INFO",
        value: 58,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_HAPTIC_ACTION_INFO",
        value: 59,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SESSION_ACTION_SETS_ATTACH_INFO",
        value: 60,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_ACTIONS_SYNC_INFO",
        value: 61,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_BOUND_SOURCES_FOR_ACTION_ENUMERATE_INFO",
        value: 62,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_INPUT_SOURCE_LOCALIZED_NAME_GET_INFO",
        value: 63,
        extension: "",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SYSTEM_EYE_GAZE_INTERACTION_PROPERTIES_EXT",
        value: 1000030000,
        extension: "XR_EXT_eye_gaze_interaction",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_EYE_GAZE_SAMPLE_TIME_EXT",
        value: 1000030001,
        extension: "XR_EXT_eye_gaze_interaction",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_HAPTIC_AMPLITUDE_ENVELOPE_VIBRATION_FB",
        value: 1000173001,
        extension: "XR_FB_haptic_amplitude_envelope",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_HAPTIC_PCM_VIBRATION_FB",
        value: 1000209001,
        extension: "XR_FB_haptic_pcm",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB",
        value: 1000209002,
        extension: "XR_FB_haptic_pcm",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_LOCAL_DIMMING_FRAME_END_INFO_META",
        value: 1000216000,
        extension: "XR_META_local_dimming",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SPACE_USER_CREATE_INFO_FB",
        value: 1000241001,
        extension: "XR_FB_spatial_entity_user",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SYSTEM_HEADSET_ID_PROPERTIES_META",
        value: 1000245000,
        extension: "XR_META_headset_id",
        guard: None,
    },
    StructureTypeEntry {
        name: "XR_TYPE_SYSTEM_SIMULTANEOUS_HANDS_AND_CONTROLLERS_PROPERTIES_META",
        value: 1000532001,
        extension: "XR_META_simultaneous_hands_and_controllers",
        guard: Some("experimental"),
    },
    StructureTypeEntry {
        name: "XR_TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_RESUME_INFO_META",
        value: 1000532002,
        extension: "XR_META_simultaneous_hands_and_controllers",
        guard: Some("experimental"),
    },
    StructureTypeEntry {
        name: "XR_TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_PAUSE_INFO_META",
        value: 1000532003,
        extension: "XR_META_simultaneous_hands_and_controllers",
        guard: Some("experimental"),
    },
];

pub static ALIASES: &[(&str, &str)] = &[
    ("XR_TYPE_DEVICE_PCM_SAMPLE_RATE_GET_INFO_FB", "XR_TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB"),
];

/// Invokes `$callback` with one `(ident, name, value)` token row per
/// structure type, in registry order.
#[macro_export]
macro_rules! for_each_structure_type {
    ($callback:ident) => {
        $callback! {
            (UNKNOWN, "XR_TYPE_UNKNOWN", 0),
            (API_LAYER_PROPERTIES, "XR_TYPE_API_LAYER_PROPERTIES", 1),
            (EXTENSION_PROPERTIES, "XR_TYPE_EXTENSION_PROPERTIES", 2),
            (INSTANCE_CREATE_INFO, "XR_TYPE_INSTANCE_CREATE_INFO", 3),
            (SYSTEM_GET_INFO, "XR_TYPE_SYSTEM_GET_INFO", 4),
            (SYSTEM_PROPERTIES, "XR_TYPE_SYSTEM_PROPERTIES", 5),
            (VIEW_LOCATE_INFO, "XR_TYPE_VIEW_LOCATE_INFO", 6),
            (VIEW, "XR_TYPE_VIEW", 7),
            (SESSION_CREATE_INFO, "XR_TYPE_SESSION_CREATE_INFO", 8),
            (SWAPCHAIN_CREATE_INFO, "XR_TYPE_SWAPCHAIN_CREATE_INFO", 9),
            (SESSION_BEGIN_INFO, "XR_TYPE_SESSION_BEGIN_INFO", 10),
            (VIEW_STATE, "XR_TYPE_VIEW_STATE", 11),
            (FRAME_END_INFO, "XR_TYPE_FRAME_END_INFO", 12),
            (HAPTIC_VIBRATION, "XR_TYPE_HAPTIC_VIBRATION", 13),
            (EVENT_DATA_BUFFER, "XR_TYPE_EVENT_DATA_BUFFER", 16),
            (EVENT_DATA_INSTANCE_LOSS_PENDING, "XR_TYPE_EVENT_DATA_INSTANCE_LOSS_PENDING", 17),
            (EVENT_DATA_SESSION_STATE_CHANGED, "XR_TYPE_EVENT_DATA_SESSION_STATE_CHANGED", 18),
            (ACTION_STATE_BOOLEAN, "XR_TYPE_ACTION_STATE_BOOLEAN", 23),
            (ACTION_STATE_FLOAT, "XR_TYPE_ACTION_STATE_FLOAT", 24),
            (ACTION_STATE_VECTOR2F, "XR_TYPE_ACTION_STATE_VECTOR2F", 25),
            (ACTION_STATE_POSE, "XR_TYPE_ACTION_STATE_POSE", 27),
            (ACTION_SET_CREATE_INFO, "XR_TYPE_ACTION_SET_CREATE_INFO", 28),
            (ACTION_CREATE_INFO, "XR_TYPE_ACTION_CREATE_INFO", 29),
            (INSTANCE_PROPERTIES, "XR_TYPE_INSTANCE_PROPERTIES", 32),
            (FRAME_WAIT_INFO, "XR_TYPE_FRAME_WAIT_INFO", 33),
            (COMPOSITION_LAYER_PROJECTION, "XR_TYPE_COMPOSITION_LAYER_PROJECTION", 35),
            (COMPOSITION_LAYER_QUAD, "XR_TYPE_COMPOSITION_LAYER_QUAD", 36),
            (REFERENCE_SPACE_CREATE_INFO, "XR_TYPE_REFERENCE_SPACE_CREATE_INFO", 37),
            (ACTION_SPACE_CREATE_INFO, "XR_TYPE_ACTION_SPACE_CREATE_INFO", 38),
            (EVENT_DATA_REFERENCE_SPACE_CHANGE_PENDING, "XR_TYPE_EVENT_DATA_REFERENCE_SPACE_CHANGE_PENDING", 40),
            (VIEW_CONFIGURATION_VIEW, "XR_TYPE_VIEW_CONFIGURATION_VIEW", 41),
            (SPACE_LOCATION, "XR_TYPE_SPACE_LOCATION", 42),
            (SPACE_VELOCITY, "XR_TYPE_SPACE_VELOCITY", 43),
            (FRAME_STATE, "XR_TYPE_FRAME_STATE", 44),
            (VIEW_CONFIGURATION_PROPERTIES, "XR_TYPE_VIEW_CONFIGURATION_PROPERTIES", 45),
            (FRAME_BEGIN_INFO, "XR_TYPE_FRAME_BEGIN_INFO", 46),
            (COMPOSITION_LAYER_PROJECTION_VIEW, "XR_TYPE_COMPOSITION_LAYER_PROJECTION_VIEW", 48),
            (EVENT_DATA_EVENTS_LOST, "XR_TYPE_EVENT_DATA_EVENTS_LOST", 49),
            (INTERACTION_PROFILE_SUGGESTED_BINDING, "XR_TYPE_INTERACTION_PROFILE_SUGGESTED_BINDING", 51),
            (EVENT_DATA_INTERACTION_PROFILE_CHANGED, "XR_TYPE_EVENT_DATA_INTERACTION_PROFILE_CHANGED", 52),
            (INTERACTION_PROFILE_STATE, "XR_TYPE_INTERACTION_PROFILE_STATE", 53),
            (SWAPCHAIN_IMAGE_ACQUIRE_INFO, "XR_TYPE_SWAPCHAIN_IMAGE_ACQUIRE_INFO", 55),
            (SWAPCHAIN_IMAGE_WAIT_INFO, "XR_TYPE_SWAPCHAIN_IMAGE_WAIT_INFO", 56),
            (SWAPCHAIN_IMAGE_RELEASE_INFO, "XR_TYPE_SWAPCHAIN_IMAGE_RELEASE_INFO", 57),
            (ACTION_STATE_GET_INFO, "XR_TYPE_ACTION_STATE_GET_INFO", 58),
            (HAPTIC_ACTION_INFO, "XR_TYPE_HAPTIC_ACTION_INFO", 59),
            (SESSION_ACTION_SETS_ATTACH_INFO, "XR_TYPE_SESSION_ACTION_SETS_ATTACH_INFO", 60),
            (ACTIONS_SYNC_INFO, "XR_TYPE_ACTIONS_SYNC_INFO", 61),
            (BOUND_SOURCES_FOR_ACTION_ENUMERATE_INFO, "XR_TYPE_BOUND_SOURCES_FOR_ACTION_ENUMERATE_INFO", 62),
            (INPUT_SOURCE_LOCALIZED_NAME_GET_INFO, "XR_TYPE_INPUT_SOURCE_LOCALIZED_NAME_GET_INFO", 63),
            (SYSTEM_EYE_GAZE_INTERACTION_PROPERTIES_EXT, "XR_TYPE_SYSTEM_EYE_GAZE_INTERACTION_PROPERTIES_EXT", 1000030000),
            (EYE_GAZE_SAMPLE_TIME_EXT, "XR_TYPE_EYE_GAZE_SAMPLE_TIME_EXT", 1000030001),
            (HAPTIC_AMPLITUDE_ENVELOPE_VIBRATION_FB, "XR_TYPE_HAPTIC_AMPLITUDE_ENVELOPE_VIBRATION_FB", 1000173001),
            (HAPTIC_PCM_VIBRATION_FB, "XR_TYPE_HAPTIC_PCM_VIBRATION_FB", 1000209001),
            (DEVICE_PCM_SAMPLE_RATE_STATE_FB, "XR_TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB", 1000209002),
            (LOCAL_DIMMING_FRAME_END_INFO_META, "XR_TYPE_LOCAL_DIMMING_FRAME_END_INFO_META", 1000216000),
            (SPACE_USER_CREATE_INFO_FB, "XR_TYPE_SPACE_USER_CREATE_INFO_FB", 1000241001),
            (SYSTEM_HEADSET_ID_PROPERTIES_META, "XR_TYPE_SYSTEM_HEADSET_ID_PROPERTIES_META", 1000245000),
            (SYSTEM_SIMULTANEOUS_HANDS_AND_CONTROLLERS_PROPERTIES_META, "XR_TYPE_SYSTEM_SIMULTANEOUS_HANDS_AND_CONTROLLERS_PROPERTIES_META", 1000532001),
            (SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_RESUME_INFO_META, "XR_TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_RESUME_INFO_META", 1000532002),
            (SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_PAUSE_INFO_META, "XR_TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_PAUSE_INFO_META", 1000532003),
        }
    };
}
