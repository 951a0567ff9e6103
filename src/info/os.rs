//! Operating system identification

use sysinfo::System;

use crate::info::host_info;
use crate::types::HostInfo;

/// Canonical kernel name for the compile target, falling back to what the
/// runtime reports for targets outside the recognized set
fn kernel_sysname() -> String {
    if cfg!(target_os = "linux") {
        "Linux".to_string()
    } else if cfg!(target_os = "macos") {
        "Darwin".to_string()
    } else if cfg!(target_os = "windows") {
        "Windows_NT".to_string()
    } else if cfg!(target_os = "freebsd") {
        "FreeBSD".to_string()
    } else {
        System::name().unwrap_or_else(|| std::env::consts::OS.to_string())
    }
}

/// Collect the host identity snapshot
pub(crate) fn collect_host_info() -> HostInfo {
    let machine = std::env::consts::ARCH.to_string();

    HostInfo {
        sysname: kernel_sysname(),
        bits: super::bits::machine_bits(&machine),
        machine,
        os_name: System::name(),
        os_version: System::os_version(),
        kernel_version: System::kernel_version(),
        hostname: System::host_name(),
    }
}

/// Get the kernel name of the host (e.g., "Linux", "Darwin", "Windows_NT")
pub fn sysname() -> &'static str {
    &host_info().sysname
}

/// Get the hardware architecture of the host (e.g., "x86_64", "aarch64")
pub fn machine() -> &'static str {
    &host_info().machine
}

/// Whether the host runs Windows
pub fn is_windows() -> bool {
    sysname() == "Windows_NT"
}

/// Whether the host runs Linux
pub fn is_linux() -> bool {
    sysname() == "Linux"
}

/// Whether the host runs macOS
pub fn is_macos() -> bool {
    sysname() == "Darwin"
}

/// Whether the host is Unix-like (Linux or macOS)
pub fn is_posix() -> bool {
    is_linux() || is_macos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sysname_is_non_empty() {
        assert!(!sysname().is_empty());
    }

    #[test]
    fn machine_matches_compile_target() {
        assert_eq!(machine(), std::env::consts::ARCH);
    }

    #[test]
    fn at_most_one_family_matches() {
        let matched = [is_windows(), is_linux(), is_macos()];
        assert!(matched.iter().filter(|&&m| m).count() <= 1);
    }

    #[test]
    fn posix_follows_unix_families() {
        assert_eq!(is_posix(), is_linux() || is_macos());
    }
}
