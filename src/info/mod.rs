//! Host identity collection modules

pub mod bits;
pub mod os;

use std::sync::OnceLock;

use crate::types::HostInfo;

static HOST_INFO: OnceLock<HostInfo> = OnceLock::new();

/// Get the host identity snapshot, collected on first access and cached
/// for the lifetime of the process
pub fn host_info() -> &'static HostInfo {
    HOST_INFO.get_or_init(|| {
        let info = os::collect_host_info();
        tracing::debug!(
            sysname = %info.sysname,
            machine = %info.machine,
            bits = info.bits,
            "collected host identity snapshot"
        );
        info
    })
}
