use crate::core::system_info::types::GpuInfo;
use crate::error::{Result, StrikerError};

#[cfg(feature = "nvml")]
use nvml_wrapper::enum_wrappers::device::TemperatureSensor;
#[cfg(feature = "nvml")]
use nvml_wrapper::Nvml;
#[cfg(feature = "nvml")]
use once_cell::sync::Lazy;

/// Singleton - NVML must be initialized ONCE only
#[cfg(feature = "nvml")]
static NVML: Lazy<Option<Nvml>> = Lazy::new(|| Nvml::init().ok());

/// Memory, load and temperature for every NVIDIA GPU NVML can see
#[cfg(feature = "nvml")]
pub fn get_nvidia_gpus() -> Result<Vec<GpuInfo>> {
    let nvml = NVML.as_ref().ok_or_else(|| {
        StrikerError::gpu_not_available(
            "NVML not available (NVIDIA driver not installed or incompatible)",
        )
    })?;

    let count = nvml.device_count().map_err(|e| {
        StrikerError::metric_collection(format!("Failed to count NVIDIA devices: {}", e))
    })?;

    let mut gpus = Vec::with_capacity(count as usize);
    for index in 0..count {
        let device = nvml.device_by_index(index).map_err(|e| {
            StrikerError::metric_collection(format!(
                "Failed to get NVIDIA device {}: {}",
                index, e
            ))
        })?;

        let memory = device.memory_info().ok();
        gpus.push(GpuInfo {
            name: device
                .name()
                .unwrap_or_else(|_| format!("NVIDIA GPU {}", index)),
            memory_total_bytes: memory.as_ref().map(|m| m.total),
            memory_used_bytes: memory.as_ref().map(|m| m.used),
            memory_free_bytes: memory.as_ref().map(|m| m.free),
            load_percent: device.utilization_rates().ok().map(|u| u.gpu),
            temperature_celsius: device.temperature(TemperatureSensor::Gpu).ok(),
        });
    }

    Ok(gpus)
}

#[cfg(not(feature = "nvml"))]
pub fn get_nvidia_gpus() -> Result<Vec<GpuInfo>> {
    Err(StrikerError::gpu_not_available(
        "built without NVML support (enable the `nvml` feature)",
    ))
}
