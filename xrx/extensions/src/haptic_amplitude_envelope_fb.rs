use openxr::{self as xr, sys};
use std::{ffi::c_void, ptr};
use xrx_common::once_cell::sync::Lazy;

pub const FB_HAPTIC_AMPLITUDE_ENVELOPE_EXTENSION_NAME: &str = "XR_FB_haptic_amplitude_envelope";

pub static TYPE_HAPTIC_AMPLITUDE_ENVELOPE_VIBRATION_FB: Lazy<xr::StructureType> =
    Lazy::new(|| xr::StructureType::from_raw(1000173001));

#[repr(C)]
pub struct HapticAmplitudeEnvelopeVibrationFB {
    pub ty: xr::StructureType,
    pub next: *const c_void,
    pub duration: xr::Duration,
    pub amplitude_count: u32,
    pub amplitudes: *const f32,
}

/// Plays `amplitudes` spread evenly over `duration` on the haptic actuator
/// bound to `action`.
pub fn apply_amplitude_envelope<G>(
    session: &xr::Session<G>,
    action: &xr::Action<xr::Haptic>,
    subaction_path: xr::Path,
    duration: xr::Duration,
    amplitudes: &[f32],
) -> xr::Result<()> {
    let vibration = HapticAmplitudeEnvelopeVibrationFB {
        ty: *TYPE_HAPTIC_AMPLITUDE_ENVELOPE_VIBRATION_FB,
        next: ptr::null(),
        duration,
        amplitude_count: amplitudes.len() as u32,
        amplitudes: amplitudes.as_ptr(),
    };

    let info = sys::HapticActionInfo {
        ty: sys::HapticActionInfo::TYPE,
        next: ptr::null(),
        action: action.as_raw(),
        subaction_path,
    };

    let instance = session.instance();
    unsafe {
        super::xr_res((instance.fp().apply_haptic_feedback)(
            session.as_raw(),
            &info,
            (&vibration as *const HapticAmplitudeEnvelopeVibrationFB).cast(),
        ))
    }
}
