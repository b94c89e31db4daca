//! # Directory Access Checks
//!
//! Asks the platform whether the current principal may read or write a
//! path. Standalone utility; nothing in the report pipeline calls it.

use std::path::Path;

use tracing::warn;

/// The access right to test for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessRight {
    Read,
    Write,
}

pub fn readable(path: &Path) -> bool {
    has_permission(path, AccessRight::Read)
}

pub fn writable(path: &Path) -> bool {
    has_permission(path, AccessRight::Write)
}

/// Checks `right` on `path` for the effective user.
///
/// Errors never escape: a path that cannot be checked at all is
/// reported as not permitted.
#[cfg(unix)]
pub fn has_permission(path: &Path, right: AccessRight) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let mode: libc::c_int = match right {
        AccessRight::Read => libc::R_OK,
        AccessRight::Write => libc::W_OK,
    };

    let raw: CString = match CString::new(path.as_os_str().as_bytes()) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("cannot check access on {}: {err}", path.display());
            return false;
        }
    };

    // SAFETY: `raw` is a valid NUL-terminated string for the duration
    // of the call.
    let granted: bool = unsafe { libc::access(raw.as_ptr(), mode) == 0 };
    if !granted {
        warn!(
            "no {right:?} access on {}: {}",
            path.display(),
            std::io::Error::last_os_error()
        );
    }
    granted
}

/// Metadata fallback for platforms without `access(2)`.
#[cfg(not(unix))]
pub fn has_permission(path: &Path, right: AccessRight) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => match right {
            AccessRight::Read => true,
            AccessRight::Write => !meta.permissions().readonly(),
        },
        Err(err) => {
            warn!("cannot check access on {}: {err}", path.display());
            false
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
