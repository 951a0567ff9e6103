//! Host identity snapshot type

use serde::{Deserialize, Serialize};

/// Identity of the host, collected once per process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    /// Kernel name (e.g., "Linux", "Darwin", "Windows_NT")
    pub sysname: String,
    /// Hardware architecture (e.g., "x86_64", "aarch64")
    pub machine: String,
    /// Native machine word size in bits (32 or 64)
    pub bits: u32,
    /// OS name as reported by the runtime (e.g., "Ubuntu", "Windows")
    pub os_name: Option<String>,
    /// OS version
    pub os_version: Option<String>,
    /// Kernel version
    pub kernel_version: Option<String>,
    /// Hostname
    pub hostname: Option<String>,
}
