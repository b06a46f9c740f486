//! Stellar classification helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static SPECTRAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([OBAFGKM])(\d)?([IV]+)?").expect("spectral type pattern is valid")
});

/// Parsed Morgan–Keenan spectral type, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralInfo {
    /// Spectral class letter, or "-"
    pub class: String,
    /// Colour name, e.g. "Blue-White"
    pub color: String,
    /// Approximate surface temperature in Kelvin
    pub temperature: Option<u32>,
    /// Luminosity class name, e.g. "Giant"
    pub size: String,
    /// Conky colour used to render the colour name
    pub color_code: String,
}

impl SpectralInfo {
    fn unknown() -> Self {
        Self {
            class: "-".to_string(),
            color: "-".to_string(),
            temperature: None,
            size: "-".to_string(),
            color_code: "gray".to_string(),
        }
    }
}

/// (colour name, base temperature K, Conky colour)
fn class_properties(class: char) -> (&'static str, f64, &'static str) {
    match class {
        'O' => ("Blue", 40000.0, "blue"),
        'B' => ("Blue-White", 20000.0, "lightblue"),
        'A' => ("White", 8500.0, "white"),
        'F' => ("Yellow-White", 6500.0, "lightyellow"),
        'G' => ("Yellow", 5800.0, "yellow"),
        'K' => ("Orange", 4500.0, "orange"),
        'M' => ("Red", 3200.0, "red"),
        _ => ("Unknown", 0.0, "gray"),
    }
}

pub fn luminosity_class_name(class: &str) -> &'static str {
    match class {
        "I" => "Supergiant",
        "II" => "Bright Giant",
        "III" => "Giant",
        "IV" => "Sub-giant",
        "V" => "Main Sequence",
        "VI" => "Sub-dwarf",
        "VII" => "White-dwarf",
        _ => "Unknown",
    }
}

/// Parses strings like `"K1.5IIIFe-0.5"`, `"A0Va"` or `"M2Iab"`.
///
/// A missing subclass counts as 5 and a missing luminosity class as V.
/// The temperature drops by 5% of the class base per subclass step.
pub fn parse_spectral_type(spectral_type: &str) -> SpectralInfo {
    let Some(caps) = SPECTRAL_PATTERN.captures(spectral_type.trim()) else {
        return SpectralInfo::unknown();
    };

    let class = caps
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .unwrap_or('?');
    let subclass: f64 = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(5.0);
    let luminosity = caps.get(3).map(|m| m.as_str()).unwrap_or("V");

    let (color, base_temp, color_code) = class_properties(class);
    let temperature = (base_temp - subclass * base_temp * 0.05) as u32;

    SpectralInfo {
        class: class.to_string(),
        color: color.to_string(),
        temperature: Some(temperature),
        size: luminosity_class_name(luminosity).to_string(),
        color_code: color_code.to_string(),
    }
}

/// Rough planet category by mass in Earth masses.
pub fn classify_world_type(mass_earth: Option<f64>) -> &'static str {
    match mass_earth {
        None => "Unknown",
        Some(m) if m < 2.0 => "Terrestrial",
        Some(m) if m < 10.0 => "Super-Earth",
        Some(m) if m < 50.0 => "Mini-Neptune",
        Some(m) if m < 100.0 => "Ice Giant",
        Some(_) => "Gas Giant",
    }
}
