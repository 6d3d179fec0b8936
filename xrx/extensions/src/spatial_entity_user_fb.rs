use crate::get_instance_proc;
use openxr::{self as xr, sys};
use std::{ffi::c_void, ptr};
use xrx_common::{anyhow::Result, once_cell::sync::Lazy};

pub const FB_SPATIAL_ENTITY_USER_EXTENSION_NAME: &str = "XR_FB_spatial_entity_user";

pub static TYPE_SPACE_USER_CREATE_INFO_FB: Lazy<xr::StructureType> =
    Lazy::new(|| xr::StructureType::from_raw(1000241001));

/// Application-chosen identifier for a user known to the runtime.
pub type SpaceUserIdFB = u64;

#[repr(transparent)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SpaceUserFB(u64);

impl SpaceUserFB {
    pub const NULL: SpaceUserFB = Self(0);
}

#[repr(C)]
struct SpaceUserCreateInfoFB {
    ty: xr::StructureType,
    next: *const c_void,
    user_id: SpaceUserIdFB,
}

type CreateSpaceUserFB = unsafe extern "system" fn(
    sys::Session,
    *const SpaceUserCreateInfoFB,
    *mut SpaceUserFB,
) -> sys::Result;

type GetSpaceUserIdFB = unsafe extern "system" fn(SpaceUserFB, *mut SpaceUserIdFB) -> sys::Result;

type DestroySpaceUserFB = unsafe extern "system" fn(SpaceUserFB) -> sys::Result;

pub struct SpaceUser {
    handle: SpaceUserFB,
    get_space_user_id: GetSpaceUserIdFB,
    destroy_space_user: DestroySpaceUserFB,
}

impl SpaceUser {
    pub fn create<G>(
        session: &xr::Session<G>,
        extra_extensions: &[String],
        user_id: SpaceUserIdFB,
    ) -> Result<Self> {
        if !extra_extensions.contains(&FB_SPATIAL_ENTITY_USER_EXTENSION_NAME.to_owned()) {
            return Err(sys::Result::ERROR_EXTENSION_NOT_PRESENT.into());
        }

        let create_space_user: CreateSpaceUserFB =
            get_instance_proc(session, "xrCreateSpaceUserFB")?;
        let get_space_user_id = get_instance_proc(session, "xrGetSpaceUserIdFB")?;
        let destroy_space_user = get_instance_proc(session, "xrDestroySpaceUserFB")?;

        let info = SpaceUserCreateInfoFB {
            ty: *TYPE_SPACE_USER_CREATE_INFO_FB,
            next: ptr::null(),
            user_id,
        };

        let mut handle = SpaceUserFB::NULL;
        unsafe {
            super::to_any(create_space_user(session.as_raw(), &info, &mut handle))?;
        }

        Ok(Self {
            handle,
            get_space_user_id,
            destroy_space_user,
        })
    }

    pub fn handle(&self) -> SpaceUserFB {
        self.handle
    }

    /// The user id this handle was created for, as reported by the runtime.
    pub fn id(&self) -> Result<SpaceUserIdFB> {
        let mut user_id = 0;
        unsafe {
            super::to_any((self.get_space_user_id)(self.handle, &mut user_id))?;
        }

        Ok(user_id)
    }
}

impl Drop for SpaceUser {
    fn drop(&mut self) {
        unsafe {
            (self.destroy_space_user)(self.handle);
        }
    }
}
