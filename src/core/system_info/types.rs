use serde::{Deserialize, Serialize};

/// CPU Information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuInfo {
    pub model: String,
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
    pub frequency_mhz: u64,
    pub min_frequency_mhz: Option<u64>,
    pub max_frequency_mhz: Option<u64>,
    pub usage_percent: f32,
    pub per_core_usage: Vec<f32>,
    /// Per-core sensor readings in °C, ordered by core number
    pub core_temperatures: Vec<f32>,
}

impl CpuInfo {
    pub fn average_temperature(&self) -> Option<f32> {
        if self.core_temperatures.is_empty() {
            return None;
        }
        Some(self.core_temperatures.iter().sum::<f32>() / self.core_temperatures.len() as f32)
    }
}

/// RAM and swap usage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub swap_total_bytes: u64,
    pub swap_used_bytes: u64,
}

impl MemoryInfo {
    pub fn usage_percent(&self) -> f64 {
        percent(self.used_bytes, self.total_bytes)
    }

    pub fn swap_percent(&self) -> f64 {
        percent(self.swap_used_bytes, self.swap_total_bytes)
    }
}

/// Space on the filesystem holding a mount point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub mount_point: String,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

impl DiskUsage {
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.available_bytes)
    }

    pub fn usage_percent(&self) -> f64 {
        percent(self.used_bytes(), self.total_bytes)
    }
}

/// Byte counters for one interface over a short sample
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkTraffic {
    pub interface: String,
    pub total_received: u64,
    pub total_transmitted: u64,
    pub received_per_sec: u64,
    pub transmitted_per_sec: u64,
}

/// Operating System Information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OsInfo {
    pub name: String,
    pub kernel_version: Option<String>,
    pub host_name: Option<String>,
    pub uptime_secs: u64,
    pub process_count: usize,
}

/// GPU Information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpuInfo {
    pub name: String,
    pub memory_total_bytes: Option<u64>,
    pub memory_used_bytes: Option<u64>,
    pub memory_free_bytes: Option<u64>,
    pub load_percent: Option<u32>,
    pub temperature_celsius: Option<u32>,
}

impl GpuInfo {
    pub fn memory_percent(&self) -> Option<f64> {
        match (self.memory_used_bytes, self.memory_total_bytes) {
            (Some(used), Some(total)) if total > 0 => Some(percent(used, total)),
            _ => None,
        }
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
