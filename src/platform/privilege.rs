//! Startup privilege check.

use thiserror::Error;

/// Error type for the administrator check.
#[derive(Debug, Error)]
pub enum PrivilegeError {
    /// The process is not running elevated.
    #[error("Application requires to be executed as administrator")]
    NotElevated,

    /// The elevation state could not be queried.
    #[cfg(windows)]
    #[error("Failed to query process elevation: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// DNS switching relies on `netsh`, which only exists on Windows.
    #[error("Unsupported platform '{0}': netsh is only available on Windows")]
    UnsupportedPlatform(&'static str),
}

/// Verifies that the process may change adapter DNS settings.
///
/// # Errors
///
/// Returns [`PrivilegeError::NotElevated`] if the process token is not
/// elevated, or another [`PrivilegeError`] if elevation cannot be determined.
#[cfg(windows)]
pub fn ensure_elevated() -> Result<(), PrivilegeError> {
    if is_elevated()? {
        Ok(())
    } else {
        Err(PrivilegeError::NotElevated)
    }
}

/// Verifies that the process may change adapter DNS settings.
///
/// # Errors
///
/// Always returns [`PrivilegeError::UnsupportedPlatform`] off Windows.
#[cfg(not(windows))]
pub const fn ensure_elevated() -> Result<(), PrivilegeError> {
    Err(PrivilegeError::UnsupportedPlatform(std::env::consts::OS))
}

/// Reads the `TokenElevation` flag of the current process token.
#[cfg(windows)]
fn is_elevated() -> Result<bool, windows::core::Error> {
    use windows::Win32::Foundation::{CloseHandle, HANDLE};
    use windows::Win32::Security::{
        GetTokenInformation, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation,
    };
    use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

    let mut token = HANDLE::default();
    // SAFETY: GetCurrentProcess returns a pseudo-handle that needs no cleanup;
    // `token` is a valid out-pointer for the duration of the call.
    unsafe { OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &raw mut token)? };

    let mut elevation = TOKEN_ELEVATION::default();
    let mut returned = 0u32;
    #[allow(clippy::cast_possible_truncation)]
    let size = std::mem::size_of::<TOKEN_ELEVATION>() as u32;

    // SAFETY: `elevation` is a properly sized and aligned TOKEN_ELEVATION and
    // `token` was opened with TOKEN_QUERY above.
    let result = unsafe {
        GetTokenInformation(
            token,
            TokenElevation,
            Some((&raw mut elevation).cast()),
            size,
            &raw mut returned,
        )
    };

    // SAFETY: `token` is a handle we own and close exactly once.
    unsafe {
        let _ = CloseHandle(token);
    }

    result?;
    Ok(elevation.TokenIsElevated != 0)
}
