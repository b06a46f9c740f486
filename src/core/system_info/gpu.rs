use crate::core::system_info::types::GpuInfo;
use crate::error::{Result, StrikerError};
use crate::platform::nvidia_nvml;

/// First GPU found; NVIDIA only
pub fn collect_primary() -> Result<GpuInfo> {
    nvidia_nvml::get_nvidia_gpus()?
        .into_iter()
        .next()
        .ok_or_else(|| StrikerError::gpu_not_available("No NVIDIA GPU found"))
}
