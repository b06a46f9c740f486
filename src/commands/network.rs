use crate::core::system_info::{network, NetworkTraffic};
use crate::core::Config;
use crate::error::Result as StrikerResult;
use crate::ui::format_size;
use crate::ui::markup::{self, error_line, line_align_right};
use anyhow::Result;
use std::time::Duration;

const RATE_SAMPLE: Duration = Duration::from_secs(1);

/// Conky evaluates these on every refresh
const PUBLIC_IP_EXEC: &str = "${exec curl -s ifconfig.me}";
const LOCAL_IP_EXEC: &str = "${exec hostname -I | awk '{print $1}'}";
const GATEWAY_EXEC: &str = "${exec ip route | awk '/default/ {print $3}'}";

pub fn execute(config: &Config) -> Result<()> {
    let connected = network::is_connected();
    let traffic = network::collect(&config.network_interface, RATE_SAMPLE);

    super::print_widget(
        &markup::section_title("Network", &config.network_interface),
        Ok(render(config.public_ip.as_deref(), connected, &traffic)),
    );
    Ok(())
}

pub fn render(
    expected_public_ip: Option<&str>,
    connected: bool,
    traffic: &StrikerResult<NetworkTraffic>,
) -> String {
    let mut lines = vec![addresses_line(expected_public_ip)];

    lines.push(line_align_right(
        "Internet",
        if connected {
            "${color green}Connected"
        } else {
            "${color red}Offline"
        },
    ));

    lines.push(match traffic {
        Ok(traffic) => traffic_line(traffic),
        Err(e) => error_line(&e.to_string()),
    });

    format!("${{font}}{}", lines.join("\n"))
}

/// Public address turns red when it differs from the expected one
fn addresses_line(expected_public_ip: Option<&str>) -> String {
    match expected_public_ip {
        Some(expected) => line_align_right(
            &format!("Public (expected: {}) | Local | Gateway", expected),
            &format!(
                "${{if_match \"{public}\" != \"{expected}\"}}${{color red}}${{else}}${{color green}}${{endif}}{public} | {local} | {gateway}",
                public = PUBLIC_IP_EXEC,
                expected = expected,
                local = LOCAL_IP_EXEC,
                gateway = GATEWAY_EXEC
            ),
        ),
        None => line_align_right(
            "Public | Local | Gateway",
            &format!("{} | {} | {}", PUBLIC_IP_EXEC, LOCAL_IP_EXEC, GATEWAY_EXEC),
        ),
    }
}

fn traffic_line(traffic: &NetworkTraffic) -> String {
    line_align_right(
        "Total(speed) Download | Upload",
        &format!(
            "{}({}/s) | {}({}/s)",
            format_size(traffic.total_received),
            format_size(traffic.received_per_sec),
            format_size(traffic.total_transmitted),
            format_size(traffic.transmitted_per_sec)
        ),
    )
}
