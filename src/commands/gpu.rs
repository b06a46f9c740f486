use crate::core::system_info::{gpu, GpuInfo};
use crate::error::StrikerError;
use crate::ui::format_grouped_width;
use crate::ui::markup::{self, color_percent, line_align_right};
use anyhow::Result;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub fn execute() -> Result<()> {
    match gpu::collect_primary() {
        Ok(info) => super::print_widget(&markup::section_title("GPU", &info.name), Ok(render(&info))),
        Err(StrikerError::GpuNotAvailable(reason)) => {
            log::debug!("GPU widget idle: {}", reason);
            super::print_widget(&markup::section_title("GPU", ""), Ok(render_unavailable()))
        }
        Err(e) => super::print_widget(&markup::section_title("GPU", ""), Err(e.into())),
    }
    Ok(())
}

pub fn render(info: &GpuInfo) -> String {
    let percent = info.memory_percent().unwrap_or(0.0);
    let load = info.load_percent.unwrap_or(0);

    format!(
        "${{font}}{}\n{}",
        line_align_right(
            "Memory",
            &format!(
                "Size: {} MB | Free: {} MB | Used: {} MB ({:3.0}%)",
                megabytes(info.memory_total_bytes),
                megabytes(info.memory_free_bytes),
                megabytes(info.memory_used_bytes),
                percent
            )
        ),
        line_align_right(
            "Metrics",
            &format!(
                "${{color {}}}Load: {}% | ${{color white}}Temperature: {}",
                color_percent(f64::from(load)),
                load,
                info.temperature_celsius
                    .map(|t| format!("{}°C", t))
                    .unwrap_or_else(|| "-".to_string())
            )
        )
    )
}

pub fn render_unavailable() -> String {
    line_align_right("GPU", "${color gray}No NVIDIA GPU detected")
}

fn megabytes(bytes: Option<u64>) -> String {
    match bytes {
        Some(bytes) => format_grouped_width(bytes as f64 / BYTES_PER_MB, 0, 5),
        None => format!("{:>5}", "-"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_gpu() {
        let mb = 1024 * 1024;
        let info = GpuInfo {
            name: "NVIDIA GeForce RTX 4070".to_string(),
            memory_total_bytes: Some(12_282 * mb),
            memory_used_bytes: Some(1_228 * mb),
            memory_free_bytes: Some(11_054 * mb),
            load_percent: Some(65),
            temperature_celsius: Some(48),
        };

        let out = render(&info);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].ends_with("Size: 12,282 MB | Free: 11,054 MB | Used: 1,228 MB ( 10%)"));
        assert!(lines[1].ends_with("${color yellow}Load: 65% | ${color white}Temperature: 48°C"));
    }

    #[test]
    fn test_render_gpu_without_readings() {
        let out = render(&GpuInfo::default());
        assert!(out.contains("Size:     - MB"));
        assert!(out.contains("${color white}Load: 0%"));
        assert!(out.ends_with("Temperature: -"));
    }

    #[test]
    fn test_render_unavailable() {
        assert!(render_unavailable().ends_with("No NVIDIA GPU detected"));
    }
}
