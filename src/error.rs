//! Error classification shared by the glue and its host collaborators.

use crate::phy::PhyInterfaceMode;

/// Kernel errno values used by this driver.
pub mod errno {
    /// No such file or directory
    pub const ENOENT: i32 = 2;
    /// Out of memory
    pub const ENOMEM: i32 = 12;
    /// No such device
    pub const ENODEV: i32 = 19;
    /// Invalid argument
    pub const EINVAL: i32 = 22;
    /// Driver requests probe retry
    pub const EPROBE_DEFER: i32 = 517;
}

/// Driver error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Missing or malformed configuration.
    InvalidArgument,
    /// Allocation failed.
    NoMemory,
    /// Device or resource is absent.
    NoDevice,
    /// Named resource not found.
    NotFound,
    /// A supplier is not ready yet, the host should retry the probe later.
    ProbeDefer,
    /// The PHY interface mode cannot be muxed by this MAC.
    UnsupportedInterface(PhyInterfaceMode),
    /// Any other host error. The sign of the errno is ignored.
    Errno(i32),
}

impl Error {
    /// Negative errno as returned from a kernel probe routine.
    pub fn to_errno(self) -> i32 {
        let e = match self {
            Error::InvalidArgument | Error::UnsupportedInterface(_) => errno::EINVAL,
            Error::NoMemory => errno::ENOMEM,
            Error::NoDevice => errno::ENODEV,
            Error::NotFound => errno::ENOENT,
            Error::ProbeDefer => errno::EPROBE_DEFER,
            Error::Errno(e) => match e.checked_abs() {
                Some(0) | None => errno::EINVAL,
                Some(e) => e,
            },
        };
        -e
    }

    /// Classify an errno reported by the host. Both signs are accepted.
    ///
    /// Zero and values with no positive counterpart are not errnos and map to
    /// [`Error::InvalidArgument`].
    pub fn from_errno(errno: i32) -> Self {
        let Ok(code) = i32::try_from(errno.unsigned_abs()) else {
            return Error::InvalidArgument;
        };
        match code {
            0 | errno::EINVAL => Error::InvalidArgument,
            errno::ENOMEM => Error::NoMemory,
            errno::ENODEV => Error::NoDevice,
            errno::ENOENT => Error::NotFound,
            errno::EPROBE_DEFER => Error::ProbeDefer,
            e => Error::Errno(e),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::NoMemory => f.write_str("out of memory"),
            Error::NoDevice => f.write_str("no such device"),
            Error::NotFound => f.write_str("not found"),
            Error::ProbeDefer => f.write_str("probe deferred"),
            Error::UnsupportedInterface(mode) => write!(f, "unsupported interface {}", mode),
            Error::Errno(e) => write!(f, "errno {}", e),
        }
    }
}

impl core::error::Error for Error {}
