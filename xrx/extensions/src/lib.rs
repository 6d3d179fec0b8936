//! Wrappers for OpenXR vendor extensions that `openxr` does not expose.
//!
//! Each module declares the raw ABI of one extension (structure types,
//! handles, function pointer typedefs) and a safe wrapper over it. Structure
//! type values are cross-checked against the registry snapshot through
//! [`reflect`], which `cargo xtask gen-reflection` keeps up to date.

mod haptic_amplitude_envelope_fb;
mod haptic_pcm_fb;
mod headset_id_meta;
mod local_dimming_meta;
pub mod reflect;
#[cfg(feature = "experimental")]
mod simultaneous_hands_and_controllers_meta;
mod spatial_entity_user_fb;
mod touch_controller_pro_fb;

pub use haptic_amplitude_envelope_fb::*;
pub use haptic_pcm_fb::*;
pub use headset_id_meta::*;
pub use local_dimming_meta::*;
#[cfg(feature = "experimental")]
pub use simultaneous_hands_and_controllers_meta::*;
pub use spatial_entity_user_fb::*;
pub use touch_controller_pro_fb::*;

use openxr::{self as xr, sys};
use std::{ffi::CString, mem};
use xrx_common::anyhow;

fn xr_res(result: sys::Result) -> xr::Result<()> {
    if result.into_raw() >= 0 {
        Ok(())
    } else {
        Err(result)
    }
}

fn to_any(result: sys::Result) -> anyhow::Result<()> {
    Ok(xr_res(result)?)
}

fn get_instance_proc<G, T: Copy>(session: &xr::Session<G>, name: &str) -> xr::Result<T> {
    let instance = session.instance();
    let name = CString::new(name).unwrap();

    let mut function = None;
    unsafe {
        xr_res((instance.fp().get_instance_proc_addr)(
            instance.as_raw(),
            name.as_ptr(),
            &mut function,
        ))?;

        function
            .map(|pfn| mem::transmute_copy(&pfn))
            .ok_or(sys::Result::ERROR_EXTENSION_NOT_PRESENT)
    }
}

fn get_props<G, T>(
    session: &xr::Session<G>,
    system: xr::SystemId,
    default_struct: T,
) -> xr::Result<T> {
    let instance = session.instance();

    let mut props = default_struct;
    let mut system_properties = sys::SystemProperties::out((&mut props as *mut T).cast());
    let result = unsafe {
        (instance.fp().get_system_properties)(
            instance.as_raw(),
            system,
            system_properties.as_mut_ptr(),
        )
    };

    xr_res(result).map(|_| props)
}

#[cfg(test)]
mod tests {
    use crate::reflect;

    macro_rules! type_value_tests {
        ($(($constant:ident, $name:literal),)*) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<$constant:lower _matches_reflection>]() {
                        assert_eq!(
                            reflect::structure_type_value($name),
                            Some(crate::$constant.into_raw() as i64),
                        );
                    }
                )*
            }
        };
    }

    type_value_tests! {
        (TYPE_HAPTIC_AMPLITUDE_ENVELOPE_VIBRATION_FB, "XR_TYPE_HAPTIC_AMPLITUDE_ENVELOPE_VIBRATION_FB"),
        (TYPE_HAPTIC_PCM_VIBRATION_FB, "XR_TYPE_HAPTIC_PCM_VIBRATION_FB"),
        (TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB, "XR_TYPE_DEVICE_PCM_SAMPLE_RATE_STATE_FB"),
        (TYPE_DEVICE_PCM_SAMPLE_RATE_GET_INFO_FB, "XR_TYPE_DEVICE_PCM_SAMPLE_RATE_GET_INFO_FB"),
        (TYPE_SPACE_USER_CREATE_INFO_FB, "XR_TYPE_SPACE_USER_CREATE_INFO_FB"),
        (TYPE_LOCAL_DIMMING_FRAME_END_INFO_META, "XR_TYPE_LOCAL_DIMMING_FRAME_END_INFO_META"),
        (TYPE_SYSTEM_HEADSET_ID_PROPERTIES_META, "XR_TYPE_SYSTEM_HEADSET_ID_PROPERTIES_META"),
    }

    #[cfg(feature = "experimental")]
    type_value_tests! {
        (TYPE_SYSTEM_SIMULTANEOUS_HANDS_AND_CONTROLLERS_PROPERTIES_META, "XR_TYPE_SYSTEM_SIMULTANEOUS_HANDS_AND_CONTROLLERS_PROPERTIES_META"),
        (TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_RESUME_INFO_META, "XR_TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_RESUME_INFO_META"),
        (TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_PAUSE_INFO_META, "XR_TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_PAUSE_INFO_META"),
    }

    #[test]
    fn extension_rows_are_guarded_consistently() {
        for entry in reflect::STRUCTURE_TYPES {
            if entry.is_core() {
                assert_eq!(entry.guard, None, "{} is core but guarded", entry.name);
            }
        }
    }
}
