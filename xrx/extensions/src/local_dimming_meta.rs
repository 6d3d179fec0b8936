use openxr as xr;
use std::{ffi::c_void, ptr};
use xrx_common::once_cell::sync::Lazy;

pub const META_LOCAL_DIMMING_EXTENSION_NAME: &str = "XR_META_local_dimming";

pub static TYPE_LOCAL_DIMMING_FRAME_END_INFO_META: Lazy<xr::StructureType> =
    Lazy::new(|| xr::StructureType::from_raw(1000216000));

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LocalDimmingModeMETA(i32);

impl LocalDimmingModeMETA {
    pub const OFF: LocalDimmingModeMETA = Self(0i32);
    pub const ON: LocalDimmingModeMETA = Self(1i32);
}

/// Chained to `XrFrameEndInfo` to request local dimming for one frame.
#[repr(C)]
pub struct LocalDimmingFrameEndInfoMETA {
    pub ty: xr::StructureType,
    pub next: *const c_void,
    pub local_dimming_mode: LocalDimmingModeMETA,
}

impl LocalDimmingFrameEndInfoMETA {
    pub fn new(local_dimming_mode: LocalDimmingModeMETA) -> Self {
        Self {
            ty: *TYPE_LOCAL_DIMMING_FRAME_END_INFO_META,
            next: ptr::null(),
            local_dimming_mode,
        }
    }
}

/// True when local dimming can be requested on this session.
pub fn supports_local_dimming(extra_extensions: &[String]) -> bool {
    extra_extensions.contains(&META_LOCAL_DIMMING_EXTENSION_NAME.to_owned())
}
