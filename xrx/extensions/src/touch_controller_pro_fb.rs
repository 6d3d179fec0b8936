//! `XR_FB_touch_controller_pro` declares no structures or commands, only the
//! Touch Pro interaction profile and the controls it adds over the base
//! Touch profile.

pub const FB_TOUCH_CONTROLLER_PRO_EXTENSION_NAME: &str = "XR_FB_touch_controller_pro";

pub const TOUCH_CONTROLLER_PRO_PROFILE_PATH: &str =
    "/interaction_profiles/facebook/touch_controller_pro";

pub const TRIGGER_CURL_FB_SUBPATH: &str = "/input/trigger/curl_fb";
pub const TRIGGER_SLIDE_FB_SUBPATH: &str = "/input/trigger/slide_fb";
pub const TRIGGER_PROXIMITY_FB_SUBPATH: &str = "/input/trigger/proximity_fb";
pub const THUMB_PROXIMITY_FB_SUBPATH: &str = "/input/thumb_fb/proximity_fb";
pub const STYLUS_FORCE_FB_SUBPATH: &str = "/input/stylus_fb/force";
pub const TRIGGER_HAPTIC_FB_SUBPATH: &str = "/output/trigger_haptic_fb";
pub const THUMB_HAPTIC_FB_SUBPATH: &str = "/output/thumb_haptic_fb";

/// Controls Touch Pro adds over the base Touch profile.
pub const TOUCH_CONTROLLER_PRO_EXTRA_SUBPATHS: &[&str] = &[
    TRIGGER_CURL_FB_SUBPATH,
    TRIGGER_SLIDE_FB_SUBPATH,
    TRIGGER_PROXIMITY_FB_SUBPATH,
    THUMB_PROXIMITY_FB_SUBPATH,
    STYLUS_FORCE_FB_SUBPATH,
    TRIGGER_HAPTIC_FB_SUBPATH,
    THUMB_HAPTIC_FB_SUBPATH,
];
