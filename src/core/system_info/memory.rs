use crate::core::system_info::types::MemoryInfo;
use crate::error::Result;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

pub fn collect() -> Result<MemoryInfo> {
    let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::everything());
    let sys = System::new_with_specifics(refresh);

    Ok(MemoryInfo {
        total_bytes: sys.total_memory(),
        used_bytes: sys.used_memory(),
        swap_total_bytes: sys.total_swap(),
        swap_used_bytes: sys.used_swap(),
    })
}
