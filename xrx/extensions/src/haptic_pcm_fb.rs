use crate::get_instance_proc;
use openxr::{self as xr, sys};
use std::{ffi::c_void, ptr};
use xrx_common::once_cell::sync::Lazy;

pub const FB_HAPTIC_PCM_EXTENSION_NAME: &str = "XR_FB_haptic_pcm";

/// Largest sample count the runtime accepts in one submission.
pub const MAX_HAPTIC_PCM_BUFFER_SIZE_FB: u32 = 4000;

pub static TYPE_HAPTIC_PCM_VIBRATION_FB: Lazy<xr::StructureType> =
    Lazy::new(|| xr::StructureType::from_raw(1000209001));
pub static TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB: Lazy<xr::StructureType> =
    Lazy::new(|| xr::StructureType::from_raw(1000209002));
pub static TYPE_DEVICE_PCM_SAMPLE_RATE_GET_INFO_FB: Lazy<xr::StructureType> =
    Lazy::new(|| *TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB);

#[repr(C)]
pub struct HapticPcmVibrationFB {
    pub ty: xr::StructureType,
    pub next: *const c_void,
    pub buffer_size: u32,
    pub buffer: *const f32,
    pub sample_rate: f32,
    pub append: sys::Bool32,
    pub samples_consumed: *mut u32,
}

#[repr(C)]
pub struct DevicePcmSampleRateStateFB {
    pub ty: xr::StructureType,
    pub next: *const c_void,
    pub sample_rate: f32,
}

/// The get-info struct is layout-identical to the state struct and its
/// structure type value is an alias.
pub type DevicePcmSampleRateGetInfoFB = DevicePcmSampleRateStateFB;

type GetDeviceSampleRateFB = unsafe extern "system" fn(
    sys::Session,
    *const sys::HapticActionInfo,
    *mut DevicePcmSampleRateStateFB,
) -> sys::Result;

pub struct HapticPcmContext {
    session: xr::Session<xr::AnyGraphics>,
    get_device_sample_rate: GetDeviceSampleRateFB,
}

impl HapticPcmContext {
    pub fn new<G>(session: xr::Session<G>, extra_extensions: &[String]) -> xr::Result<Self> {
        if !extra_extensions.contains(&FB_HAPTIC_PCM_EXTENSION_NAME.to_owned()) {
            return Err(sys::Result::ERROR_EXTENSION_NOT_PRESENT);
        }

        let get_device_sample_rate = get_instance_proc(&session, "xrGetDeviceSampleRateFB")?;

        Ok(Self {
            session: session.into_any_graphics(),
            get_device_sample_rate,
        })
    }

    /// Sample rate of the haptic device currently bound to `action`.
    pub fn device_sample_rate(
        &self,
        action: &xr::Action<xr::Haptic>,
        subaction_path: xr::Path,
    ) -> xr::Result<f32> {
        let info = sys::HapticActionInfo {
            ty: sys::HapticActionInfo::TYPE,
            next: ptr::null(),
            action: action.as_raw(),
            subaction_path,
        };

        let mut state = DevicePcmSampleRateStateFB {
            ty: *TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB,
            next: ptr::null(),
            sample_rate: 0.0,
        };

        unsafe {
            super::xr_res((self.get_device_sample_rate)(
                self.session.as_raw(),
                &info,
                &mut state,
            ))?;
        }

        Ok(state.sample_rate)
    }

    /// Queues `samples` on the actuator bound to `action` and reports how
    /// many of them the runtime consumed. With `append` the buffer is added
    /// behind the samples still playing instead of replacing them.
    pub fn apply_pcm(
        &self,
        action: &xr::Action<xr::Haptic>,
        subaction_path: xr::Path,
        samples: &[f32],
        sample_rate: f32,
        append: bool,
    ) -> xr::Result<u32> {
        let mut samples_consumed = 0;

        let vibration = HapticPcmVibrationFB {
            ty: *TYPE_HAPTIC_PCM_VIBRATION_FB,
            next: ptr::null(),
            buffer_size: samples.len() as u32,
            buffer: samples.as_ptr(),
            sample_rate,
            append: append.into(),
            samples_consumed: &mut samples_consumed,
        };

        let info = sys::HapticActionInfo {
            ty: sys::HapticActionInfo::TYPE,
            next: ptr::null(),
            action: action.as_raw(),
            subaction_path,
        };

        let instance = self.session.instance();
        unsafe {
            super::xr_res((instance.fp().apply_haptic_feedback)(
                self.session.as_raw(),
                &info,
                (&vibration as *const HapticPcmVibrationFB).cast(),
            ))?;
        }

        Ok(samples_consumed)
    }
}
