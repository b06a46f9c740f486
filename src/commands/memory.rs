use crate::core::system_info::{memory, MemoryInfo};
use crate::core::units::bytes_to_gb;
use crate::ui::format_grouped_width;
use crate::ui::markup::{self, color_percent, line_align_right};
use anyhow::Result;

pub fn execute() -> Result<()> {
    let body = memory::collect().map(|info| render(&info)).map_err(Into::into);
    super::print_widget(&markup::section_title("Memory", ""), body);
    Ok(())
}

pub fn render(info: &MemoryInfo) -> String {
    format!(
        "${{font}}{}\n{}",
        usage_line("Memory", info.total_bytes, info.used_bytes, info.usage_percent()),
        usage_line("Swap", info.swap_total_bytes, info.swap_used_bytes, info.swap_percent())
    )
}

fn usage_line(label: &str, total: u64, used: u64, percent: f64) -> String {
    let size = bytes_to_gb(total);
    let used = bytes_to_gb(used);
    line_align_right(
        label,
        &format!(
            "${{color {}}}Size: {} GB | Free: {} GB | Used: {} GB ({:3.0}%)",
            color_percent(percent),
            format_grouped_width(size, 0, 5),
            format_grouped_width(size - used, 0, 5),
            format_grouped_width(used, 0, 5),
            percent
        ),
    )
}
