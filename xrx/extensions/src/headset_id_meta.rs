use openxr::{self as xr, sys};
use std::{ffi::c_void, ptr};
use xrx_common::once_cell::sync::Lazy;

pub const META_HEADSET_ID_EXTENSION_NAME: &str = "XR_META_headset_id";
pub const EXT_UUID_EXTENSION_NAME: &str = "XR_EXT_uuid";

pub static TYPE_SYSTEM_HEADSET_ID_PROPERTIES_META: Lazy<xr::StructureType> =
    Lazy::new(|| xr::StructureType::from_raw(1000245000));

#[repr(C)]
struct SystemHeadsetIdPropertiesMETA {
    ty: xr::StructureType,
    next: *const c_void,
    id: sys::UuidEXT,
}

/// UUID the runtime reports for the headset backing `system`.
///
/// Returns `None` when the extension is not enabled or the runtime answers
/// with the all-zero UUID.
pub fn headset_id<G>(
    session: &xr::Session<G>,
    system: xr::SystemId,
    extra_extensions: &[String],
) -> Option<sys::UuidEXT> {
    if !extra_extensions.contains(&META_HEADSET_ID_EXTENSION_NAME.to_owned()) {
        return None;
    }

    super::get_props(
        session,
        system,
        SystemHeadsetIdPropertiesMETA {
            ty: *TYPE_SYSTEM_HEADSET_ID_PROPERTIES_META,
            next: ptr::null(),
            id: sys::UuidEXT { data: [0; 16] },
        },
    )
    .ok()
    .map(|props| props.id)
    .filter(|id| id.data != [0; 16])
}
