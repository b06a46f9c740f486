use crate::core::system_info::types::NetworkTraffic;
use crate::error::{Result, StrikerError};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;
use sysinfo::Networks;

/// Well-known resolver used to test for a route to the internet
const PROBE_ADDR: ([u8; 4], u16) = ([8, 8, 8, 8], 53);
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Counters for `interface`, with rates measured over `sample`
pub fn collect(interface: &str, sample: Duration) -> Result<NetworkTraffic> {
    let mut networks = Networks::new_with_refreshed_list();
    if !networks.list().contains_key(interface) {
        let mut known: Vec<&str> = networks.list().keys().map(String::as_str).collect();
        known.sort_unstable();
        return Err(StrikerError::metric_collection(format!(
            "Network interface '{}' not found (available: {})",
            interface,
            known.join(", ")
        )));
    }

    std::thread::sleep(sample);
    networks.refresh(true);

    let data = networks.list().get(interface).ok_or_else(|| {
        StrikerError::metric_collection(format!("Network interface '{}' went away", interface))
    })?;

    let secs = sample.as_secs_f64().max(f64::EPSILON);
    Ok(NetworkTraffic {
        interface: interface.to_string(),
        total_received: data.total_received(),
        total_transmitted: data.total_transmitted(),
        received_per_sec: (data.received() as f64 / secs) as u64,
        transmitted_per_sec: (data.transmitted() as f64 / secs) as u64,
    })
}

pub fn is_connected() -> bool {
    let addr = SocketAddr::from(PROBE_ADDR);
    TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_ok()
}
