// Platform-specific code module

pub mod cpufreq;
pub mod nvidia_nvml;
