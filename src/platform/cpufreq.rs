//! CPU frequency limits from the Linux cpufreq sysfs interface.

#[cfg(target_os = "linux")]
const CPUFREQ_DIR: &str = "/sys/devices/system/cpu/cpu0/cpufreq";

/// (min, max) in MHz, when the platform exposes them
#[cfg(target_os = "linux")]
pub fn frequency_limits_mhz() -> (Option<u64>, Option<u64>) {
    let dir = std::path::Path::new(CPUFREQ_DIR);
    (
        read_khz(&dir.join("cpuinfo_min_freq")).map(khz_to_mhz),
        read_khz(&dir.join("cpuinfo_max_freq")).map(khz_to_mhz),
    )
}

#[cfg(not(target_os = "linux"))]
pub fn frequency_limits_mhz() -> (Option<u64>, Option<u64>) {
    (None, None)
}

#[cfg(target_os = "linux")]
fn read_khz(path: &std::path::Path) -> Option<u64> {
    std::fs::read_to_string(path).ok()?.trim().parse().ok()
}

pub fn khz_to_mhz(khz: u64) -> u64 {
    khz / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_khz_to_mhz() {
        assert_eq!(khz_to_mhz(4_700_000), 4700);
        assert_eq!(khz_to_mhz(999), 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_read_khz_parses_sysfs_format() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("cpuinfo_max_freq");
        std::fs::write(&path, "5100000\n").unwrap();
        assert_eq!(read_khz(&path), Some(5_100_000));
        assert_eq!(read_khz(&temp.path().join("missing")), None);
    }
}
