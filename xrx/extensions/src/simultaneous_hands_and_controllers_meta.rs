use crate::get_instance_proc;
use openxr::{self as xr, sys};
use std::{ffi::c_void, ptr};
use xrx_common::once_cell::sync::Lazy;

pub const SIMULTANEOUS_HANDS_AND_CONTROLLERS_EXPERIMENTAL_VERSION: u32 = 1;

pub const META_SIMULTANEOUS_HANDS_AND_CONTROLLERS_EXTENSION_NAME: &str =
    "XR_META_simultaneous_hands_and_controllers";
pub const META_DETACHED_CONTROLLERS_EXTENSION_NAME: &str = "XR_META_detached_controllers";

pub static TYPE_SYSTEM_SIMULTANEOUS_HANDS_AND_CONTROLLERS_PROPERTIES_META: Lazy<
    xr::StructureType,
> = Lazy::new(|| xr::StructureType::from_raw(1000532001));
pub static TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_RESUME_INFO_META: Lazy<
    xr::StructureType,
> = Lazy::new(|| xr::StructureType::from_raw(1000532002));
pub static TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_PAUSE_INFO_META: Lazy<
    xr::StructureType,
> = Lazy::new(|| xr::StructureType::from_raw(1000532003));

#[repr(C)]
struct SystemSimultaneousHandsAndControllersPropertiesMETA {
    ty: xr::StructureType,
    next: *const c_void,
    supports_simultaneous_hands_and_controllers: sys::Bool32,
}

#[repr(C)]
struct SimultaneousHandsAndControllersTrackingResumeInfoMETA {
    ty: xr::StructureType,
    next: *const c_void,
}

#[repr(C)]
struct SimultaneousHandsAndControllersTrackingPauseInfoMETA {
    ty: xr::StructureType,
    next: *const c_void,
}

type ResumeSimultaneousHandsAndControllersTrackingMETA = unsafe extern "system" fn(
    sys::Session,
    *const SimultaneousHandsAndControllersTrackingResumeInfoMETA,
) -> sys::Result;

type PauseSimultaneousHandsAndControllersTrackingMETA = unsafe extern "system" fn(
    sys::Session,
    *const SimultaneousHandsAndControllersTrackingPauseInfoMETA,
) -> sys::Result;

pub struct SimultaneousHandsAndControllers {
    session: xr::Session<xr::AnyGraphics>,
    resume_simultaneous_hands_and_controllers_tracking:
        ResumeSimultaneousHandsAndControllersTrackingMETA,
    pause_simultaneous_hands_and_controllers_tracking:
        PauseSimultaneousHandsAndControllersTrackingMETA,
}

impl SimultaneousHandsAndControllers {
    pub fn new<G>(
        session: xr::Session<G>,
        extra_extensions: &[String],
        system: xr::SystemId,
    ) -> xr::Result<Self> {
        let available = extra_extensions
            .contains(&META_SIMULTANEOUS_HANDS_AND_CONTROLLERS_EXTENSION_NAME.to_owned())
            && extra_extensions.contains(&META_DETACHED_CONTROLLERS_EXTENSION_NAME.to_owned());
        if !available {
            return Err(sys::Result::ERROR_EXTENSION_NOT_PRESENT);
        }

        let resume_simultaneous_hands_and_controllers_tracking = get_instance_proc(
            &session,
            "xrResumeSimultaneousHandsAndControllersTrackingMETA",
        )?;
        let pause_simultaneous_hands_and_controllers_tracking = get_instance_proc(
            &session,
            "xrPauseSimultaneousHandsAndControllersTrackingMETA",
        )?;

        let props = super::get_props(
            &session,
            system,
            SystemSimultaneousHandsAndControllersPropertiesMETA {
                ty: *TYPE_SYSTEM_SIMULTANEOUS_HANDS_AND_CONTROLLERS_PROPERTIES_META,
                next: ptr::null(),
                supports_simultaneous_hands_and_controllers: sys::FALSE,
            },
        )?;

        if props.supports_simultaneous_hands_and_controllers.into() {
            Ok(Self {
                session: session.into_any_graphics(),
                resume_simultaneous_hands_and_controllers_tracking,
                pause_simultaneous_hands_and_controllers_tracking,
            })
        } else {
            Err(sys::Result::ERROR_FEATURE_UNSUPPORTED)
        }
    }

    pub fn resume(&self) -> xr::Result<()> {
        let info = SimultaneousHandsAndControllersTrackingResumeInfoMETA {
            ty: *TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_RESUME_INFO_META,
            next: ptr::null(),
        };
        unsafe {
            super::xr_res((self.resume_simultaneous_hands_and_controllers_tracking)(
                self.session.as_raw(),
                &info,
            ))
        }
    }

    pub fn pause(&self) -> xr::Result<()> {
        let info = SimultaneousHandsAndControllersTrackingPauseInfoMETA {
            ty: *TYPE_SIMULTANEOUS_HANDS_AND_CONTROLLERS_TRACKING_PAUSE_INFO_META,
            next: ptr::null(),
        };
        unsafe {
            super::xr_res((self.pause_simultaneous_hands_and_controllers_tracking)(
                self.session.as_raw(),
                &info,
            ))
        }
    }
}
