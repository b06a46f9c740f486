use crate::core::system_info::types::CpuInfo;
use crate::error::Result;
use crate::platform::cpufreq;
use sysinfo::{Components, CpuRefreshKind, RefreshKind, System};

pub fn collect() -> Result<CpuInfo> {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::everything());
    let mut sys = System::new_with_specifics(refresh);

    // Usage is a delta between two refreshes
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu_all();

    let cpus = sys.cpus();
    if cpus.is_empty() {
        return Ok(get_fallback());
    }

    let (min_frequency_mhz, max_frequency_mhz) = cpufreq::frequency_limits_mhz();

    Ok(CpuInfo {
        model: cpus[0].brand().trim().to_string(),
        physical_cores: System::physical_core_count(),
        logical_cores: cpus.len(),
        frequency_mhz: cpus[0].frequency(),
        min_frequency_mhz,
        max_frequency_mhz,
        usage_percent: sys.global_cpu_usage(),
        per_core_usage: cpus.iter().map(|cpu| cpu.cpu_usage()).collect(),
        core_temperatures: core_temperatures(),
    })
}

pub fn get_fallback() -> CpuInfo {
    CpuInfo {
        model: "Unknown".to_string(),
        ..Default::default()
    }
}

/// Model name only, without sampling usage
pub fn model_name() -> String {
    let sys = System::new_with_specifics(
        RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()),
    );
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_default()
}

fn core_temperatures() -> Vec<f32> {
    let components = Components::new_with_refreshed_list();
    let readings: Vec<(String, f32)> = components
        .list()
        .iter()
        .filter_map(|c| c.temperature().map(|t| (c.label().to_string(), t)))
        .collect();

    select_core_temperatures(&readings)
}

/// Keeps the `Core N` sensors, ordered by core number
pub fn select_core_temperatures(readings: &[(String, f32)]) -> Vec<f32> {
    let mut cores: Vec<(u32, f32)> = readings
        .iter()
        .filter_map(|(label, temp)| {
            let (_, rest) = label.split_once("Core ")?;
            let index = rest.split_whitespace().next()?.parse().ok()?;
            Some((index, *temp))
        })
        .collect();

    cores.sort_by_key(|(index, _)| *index);
    cores.into_iter().map(|(_, temp)| temp).collect()
}
