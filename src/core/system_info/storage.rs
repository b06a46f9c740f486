use crate::core::system_info::types::DiskUsage;
use crate::error::{Result, StrikerError};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use sysinfo::Disks;

/// Mount points listed one per line; a missing file means just `/`
pub fn read_mount_points(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        debug!("No mountpoints file at {}, using /", path.display());
        return Ok(vec!["/".to_string()]);
    }

    let data = fs::read_to_string(path)?;
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Usage for each requested mount point, in request order
pub fn collect(mount_points: &[String]) -> Vec<(String, Result<DiskUsage>)> {
    let disks = Disks::new_with_refreshed_list();
    let mounted: Vec<(PathBuf, u64, u64)> = disks
        .list()
        .iter()
        .map(|disk| {
            (
                disk.mount_point().to_path_buf(),
                disk.total_space(),
                disk.available_space(),
            )
        })
        .collect();

    mount_points
        .iter()
        .map(|target| (target.clone(), usage_for(&mounted, target)))
        .collect()
}

/// Resolves `target` to the filesystem that holds it: the mounted path that is
/// its longest ancestor
pub fn usage_for(mounted: &[(PathBuf, u64, u64)], target: &str) -> Result<DiskUsage> {
    let target_path = Path::new(target);

    mounted
        .iter()
        .filter(|(mount, _, _)| target_path.starts_with(mount))
        .max_by_key(|(mount, _, _)| mount.components().count())
        .map(|(_, total, available)| DiskUsage {
            mount_point: target.to_string(),
            total_bytes: *total,
            available_bytes: *available,
        })
        .ok_or_else(|| StrikerError::metric_collection(format!("No filesystem holds {}", target)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn mounted() -> Vec<(PathBuf, u64, u64)> {
        vec![
            (PathBuf::from("/"), 100, 40),
            (PathBuf::from("/mnt/synology/volume1"), 1000, 900),
        ]
    }

    #[test]
    fn test_usage_for_exact_and_nested_paths() {
        let volume = usage_for(&mounted(), "/mnt/synology/volume1").unwrap();
        assert_eq!(volume.total_bytes, 1000);

        let home = usage_for(&mounted(), "/home").unwrap();
        assert_eq!(home.mount_point, "/home");
        assert_eq!(home.total_bytes, 100);
        assert_eq!(home.used_bytes(), 60);
    }

    #[test]
    fn test_usage_for_unmounted_target() {
        let only_mnt = vec![(PathBuf::from("/mnt/data"), 1, 1)];
        assert!(usage_for(&only_mnt, "/home").is_err());
    }

    #[test]
    fn test_read_mount_points() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mountpoints.txt");
        assert_eq!(read_mount_points(&path).unwrap(), vec!["/"]);

        fs::write(&path, "/\n\n  /home  \n# backup\n/mnt/synology/volume2\n").unwrap();
        assert_eq!(
            read_mount_points(&path).unwrap(),
            vec!["/", "/home", "/mnt/synology/volume2"]
        );
    }
}
