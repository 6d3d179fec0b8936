use std::{fmt, str::FromStr};

/// Version the registry snapshot in this workspace was taken from.
pub const CURRENT_API_VERSION: ApiVersion = ApiVersion::from_parts(1, 1, 36);

/// OpenXR packed version number.
///
/// Major and minor live in the top 16 bits each, the patch number in the low
/// 32, so comparing raw values orders versions the obvious way.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApiVersion(u64);

impl ApiVersion {
    pub const CORE_1_0: ApiVersion = ApiVersion::from_parts(1, 0, 0);
    pub const CORE_1_1: ApiVersion = ApiVersion::from_parts(1, 1, 0);

    pub const fn from_parts(major: u16, minor: u16, patch: u32) -> Self {
        Self(((major as u64) << 48) | ((minor as u64) << 32) | patch as u64)
    }

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn into_raw(self) -> u64 {
        self.0
    }

    pub const fn major(self) -> u16 {
        (self.0 >> 48) as u16
    }

    pub const fn minor(self) -> u16 {
        (self.0 >> 32) as u16
    }

    pub const fn patch(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidApiVersion(pub String);

impl fmt::Display for InvalidApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid API version string: {:?}", self.0)
    }
}

impl std::error::Error for InvalidApiVersion {}

impl FromStr for ApiVersion {
    type Err = InvalidApiVersion;

    // "1.0" and "1.1.36" are both accepted; the registry writes feature
    // numbers without a patch component.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidApiVersion(s.to_owned());

        let mut parts = s.split('.');
        let major = parts.next().ok_or_else(invalid)?;
        let minor = parts.next().ok_or_else(invalid)?;
        let patch = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(ApiVersion::from_parts(
            major.parse().map_err(|_| invalid())?,
            minor.parse().map_err(|_| invalid())?,
            match patch {
                Some(patch) => patch.parse().map_err(|_| invalid())?,
                None => 0,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_packing() {
        let version = ApiVersion::from_parts(1, 1, 36);

        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 1);
        assert_eq!(version.patch(), 36);
        assert_eq!(version.into_raw(), (1 << 48) | (1 << 32) | 36);
        assert_eq!(ApiVersion::from_raw(version.into_raw()), version);
    }

    #[test]
    fn test_version_ordering() {
        assert!(ApiVersion::CORE_1_0 < ApiVersion::CORE_1_1);
        assert!(ApiVersion::CORE_1_1 < ApiVersion::from_parts(1, 1, 36));
        assert!(ApiVersion::from_parts(1, 1, 36) < ApiVersion::from_parts(2, 0, 0));
    }

    #[test]
    fn test_version_parsing() {
        assert_eq!("1.0".parse(), Ok(ApiVersion::CORE_1_0));
        assert_eq!("1.1.36".parse(), Ok(ApiVersion::from_parts(1, 1, 36)));
        assert_eq!(ApiVersion::from_parts(1, 1, 36).to_string(), "1.1.36");

        assert!("".parse::<ApiVersion>().is_err());
        assert!("1".parse::<ApiVersion>().is_err());
        assert!("1.x".parse::<ApiVersion>().is_err());
        assert!("1.0.0.0".parse::<ApiVersion>().is_err());
    }
}
