use crate::core::system_info::{os, OsInfo};
use crate::ui::formatters::format_uptime;
use crate::ui::markup::{self, line_align_right};
use anyhow::Result;

pub fn execute() -> Result<()> {
    let info = os::collect().unwrap_or_else(|e| {
        log::warn!("Falling back to placeholder OS info: {}", e);
        os::get_fallback()
    });

    let host = info.host_name.as_deref().unwrap_or("${nodename}");
    super::print_widget(&markup::section_title("System", host), Ok(render(&info)));
    Ok(())
}

pub fn render(info: &OsInfo) -> String {
    let kernel = info.kernel_version.as_deref().unwrap_or("${kernel}");

    format!(
        "${{font}}{}\n{}",
        line_align_right(
            "OS | Kernel",
            &format!("{} running on Kernel {}", info.name, kernel)
        ),
        line_align_right(
            "Uptime | Processes",
            &format!(
                "${{color green}}{}${{color}} with ${{color green}}{}${{color}} processes running",
                format_uptime(info.uptime_secs),
                info.process_count
            )
        )
    )
}
