//! Unit conversions used by the weather and sky widgets.

/// Bytes in one gibibyte
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

const METERS_PER_MILE: f64 = 1609.344;
const MILLIMETERS_PER_INCH: f64 = 25.4;

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - 273.15) * 9.0 / 5.0 + 32.0
}

/// Magnus approximation of the dew point.
///
/// Humidity is a percentage in `(0, 100]`. Zero humidity has no dew point and
/// yields negative infinity.
pub fn dew_point_celsius(temp_celsius: f64, humidity_percent: f64) -> f64 {
    const A: f64 = 17.62;
    const B: f64 = 243.12;

    let gamma = (A * temp_celsius) / (B + temp_celsius) + (humidity_percent / 100.0).ln();
    (B * gamma) / (A - gamma)
}

pub fn hectopascals_to_inches_of_mercury(hectopascals: f64) -> f64 {
    hectopascals * 0.02953
}

pub fn meters_per_second_to_miles_per_hour(meters_per_second: f64) -> f64 {
    meters_per_second * 2.23694
}

pub fn kilometers_to_miles(km: f64) -> f64 {
    km * 0.621371
}

pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

pub fn millimeters_to_inches(millimeters: f64) -> f64 {
    millimeters / MILLIMETERS_PER_INCH
}
