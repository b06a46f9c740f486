use crate::core::system_info::types::OsInfo;
use crate::error::Result;
use sysinfo::{ProcessRefreshKind, RefreshKind, System};

pub fn collect() -> Result<OsInfo> {
    let refresh = RefreshKind::nothing().with_processes(ProcessRefreshKind::nothing());
    let sys = System::new_with_specifics(refresh);

    Ok(OsInfo {
        name: System::long_os_version()
            .or_else(System::name)
            .unwrap_or_else(|| "Unknown".to_string()),
        kernel_version: System::kernel_version(),
        host_name: System::host_name(),
        uptime_secs: System::uptime(),
        process_count: sys.processes().len(),
    })
}

pub fn get_fallback() -> OsInfo {
    OsInfo {
        name: "Unknown".to_string(),
        ..Default::default()
    }
}
