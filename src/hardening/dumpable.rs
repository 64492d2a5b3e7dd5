/// Dumpable-flag control.
///
/// On Linux this is the real `PR_SET_DUMPABLE` attribute: clearing it stops
/// the kernel writing a core file and blocks non-root ptrace attach. Other
/// Unix systems have no such flag, so the core-file size limit is zeroed
/// instead.
use super::errors::HardeningError;

/// Mark the current process as non-dumpable.
///
/// # Errors
///
/// Returns `HardeningError::Os` if the syscall fails, or
/// `HardeningError::Unsupported` on platforms without an equivalent.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn disable_dumpable() -> Result<(), HardeningError> {
    let off: libc::c_ulong = 0;
    // SAFETY: PR_SET_DUMPABLE takes a single unsigned long argument and
    // touches no caller memory.
    let rc = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, off) };
    if rc == -1 {
        return Err(HardeningError::last_os_error("prctl(PR_SET_DUMPABLE)"));
    }
    Ok(())
}

/// Report whether the current process is dumpable.
///
/// # Errors
///
/// Returns `HardeningError::Os` if the query fails.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn is_dumpable() -> Result<bool, HardeningError> {
    // SAFETY: PR_GET_DUMPABLE takes no arguments and returns the flag.
    let rc = unsafe { libc::prctl(libc::PR_GET_DUMPABLE) };
    if rc == -1 {
        return Err(HardeningError::last_os_error("prctl(PR_GET_DUMPABLE)"));
    }
    // 1 = SUID_DUMP_USER, 2 = SUID_DUMP_ROOT; both still produce a dump.
    Ok(rc != 0)
}

#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub fn disable_dumpable() -> Result<(), HardeningError> {
    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    // SAFETY: `limit` is a valid, initialized rlimit that outlives the call.
    let rc = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &raw const limit) };
    if rc == -1 {
        return Err(HardeningError::last_os_error("setrlimit(RLIMIT_CORE)"));
    }
    Ok(())
}

#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub fn is_dumpable() -> Result<bool, HardeningError> {
    let mut limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    // SAFETY: `limit` is a valid, writable rlimit that outlives the call.
    let rc = unsafe { libc::getrlimit(libc::RLIMIT_CORE, &raw mut limit) };
    if rc == -1 {
        return Err(HardeningError::last_os_error("getrlimit(RLIMIT_CORE)"));
    }
    Ok(limit.rlim_cur != 0)
}

#[cfg(not(unix))]
pub fn disable_dumpable() -> Result<(), HardeningError> {
    Err(HardeningError::Unsupported)
}

#[cfg(not(unix))]
pub fn is_dumpable() -> Result<bool, HardeningError> {
    Err(HardeningError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_disable_clears_flag() {
        disable_dumpable().expect("disable_dumpable");
        assert!(!is_dumpable().expect("is_dumpable"));
    }

    #[cfg(unix)]
    #[test]
    fn test_disable_is_idempotent() {
        disable_dumpable().expect("first call");
        disable_dumpable().expect("second call");
        assert!(!is_dumpable().expect("is_dumpable"));
    }

    #[cfg(not(unix))]
    #[test]
    fn test_unsupported_platform() {
        assert!(matches!(
            disable_dumpable(),
            Err(HardeningError::Unsupported)
        ));
    }
}
