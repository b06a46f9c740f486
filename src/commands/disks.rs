use crate::core::system_info::{storage, DiskUsage};
use crate::core::units::bytes_to_gb;
use crate::core::Config;
use crate::error::Result as StrikerResult;
use crate::ui::format_grouped_width;
use crate::ui::markup::{self, color_percent, error_line, line_align_right};
use anyhow::{Context, Result};

pub fn execute(config: &Config) -> Result<()> {
    let paths = config.paths();
    let body = storage::read_mount_points(&paths.mountpoints)
        .with_context(|| format!("Failed to read {}", paths.mountpoints.display()))
        .map(|mounts| render(&storage::collect(&mounts)));

    super::print_widget(&markup::section_title("Disks", ""), body);
    Ok(())
}

/// One line per mount point; a mount that cannot be read gets a red line
pub fn render(disks: &[(String, StrikerResult<DiskUsage>)]) -> String {
    let lines: Vec<String> = disks
        .iter()
        .map(|(mount, usage)| match usage {
            Ok(usage) => usage_line(usage),
            Err(e) => error_line(&format!("{}: {}", mount, e)),
        })
        .collect();

    format!("${{font}}{}", lines.join("\n"))
}

fn usage_line(usage: &DiskUsage) -> String {
    let total = bytes_to_gb(usage.total_bytes);
    let used = bytes_to_gb(usage.used_bytes());
    let percent = usage.usage_percent();

    line_align_right(
        &usage.mount_point,
        &format!(
            "${{color {}}}Size: {} GB | Free: {} GB | Used: {} GB ({:3.0}%)",
            color_percent(percent),
            format_grouped_width(total, 0, 5),
            format_grouped_width(total - used, 0, 5),
            format_grouped_width(used, 0, 5),
            percent
        ),
    )
}
