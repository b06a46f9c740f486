use crate::core::system_info::{cpu, CpuInfo};
use crate::ui::markup::{self, color_percent};
use anyhow::Result;

const CORES_PER_ROW: usize = 8;

pub fn execute() -> Result<()> {
    let body = cpu::collect().map(|info| render(&info)).map_err(Into::into);
    super::print_widget(&markup::section_title("CPU", &cpu::model_name()), body);
    Ok(())
}

pub fn render(info: &CpuInfo) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "${{font}}${{goto 20}}${{color cyan}}Frequency: ${{alignr}}${{color white}}Min: {} MHz | Max: {} MHz | Current: {} MHz",
        mhz(info.min_frequency_mhz),
        mhz(info.max_frequency_mhz),
        info.frequency_mhz
    ));

    let physical = info
        .physical_cores
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    lines.push(format!(
        "${{goto 20}}${{color cyan}}Cores: (temperatures in °C)${{alignr}}${{color white}}Physical: {} | Logical: {} | Usage: {:.0}% | ${{color}}Temperature: {:.0}°C${{voffset 6}}",
        physical,
        info.logical_cores,
        info.usage_percent,
        info.average_temperature().unwrap_or(0.0)
    ));

    for (row, usages) in info.per_core_usage.chunks(CORES_PER_ROW).enumerate() {
        let first = row * CORES_PER_ROW;
        let last = first + usages.len() - 1;
        let mut line = format!("${{goto 40}}${{color cyan}}{:>2} - {:>2}: ${{alignc}}", first, last);

        for (offset, usage) in usages.iter().enumerate() {
            let temperature = match info.core_temperatures.get(first + offset) {
                Some(temp) => format!(
                    "${{color {}}}{:2.0}°",
                    color_percent(f64::from(*temp)),
                    temp
                ),
                None => "${color grey}---".to_string(),
            };
            line.push_str(&format!(
                "${{color {}}}{:>7.0}%/{}",
                color_percent(f64::from(*usage)),
                usage,
                temperature
            ));
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn mhz(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
