//! Conky markup building blocks shared by every widget.

/// Bold yellow section heading followed by a horizontal rule
pub fn section_title(label: &str, tag: &str) -> String {
    format!("${{goto 10}}${{color yellow}}${{font3}}{} {} ${{hr 2}}${{font}}", label, tag)
}

/// `label:` in cyan with the value starting at a fixed tab stop
pub fn line_align_left(label: &str, data: &str) -> String {
    format!(
        "${{goto 20}}${{color cyan}}${{font}}{}:${{goto 140}}${{color white}}{}",
        label, data
    )
}

/// Like [`line_align_left`] but with room for longer labels
pub fn line_align_left_wide(label: &str, data: &str) -> String {
    format!(
        "${{goto 20}}${{color cyan}}${{font}}{}:${{goto 180}}${{color white}}{}",
        label, data
    )
}

/// Label on the left, value flush against the right edge
pub fn line_align_right(label: &str, data: &str) -> String {
    format!(
        "${{goto 20}}${{color cyan}}${{font}}{}${{alignr}}${{color white}}{}",
        label, data
    )
}

/// Yellow column header row for a table whose first column starts at `offset`
pub fn table_header(offset: u32, first_column: &str, columns: &str) -> String {
    format!(
        "${{color yellow}}${{goto {}}}{}${{alignr}}{}",
        offset, first_column, columns
    )
}

/// Thin gray rule tucked under a table header
pub fn table_rule(offset: u32) -> String {
    format!("${{goto {}}}${{voffset -8}}${{color gray}}${{hr 1}}${{voffset -5}}", offset)
}

pub fn error_line(message: &str) -> String {
    format!("${{goto 20}}${{color red}}{}", message)
}

/// Placeholder for a widget whose catalog is empty
pub fn nothing_to_display(what: &str) -> String {
    format!("${{goto 20}}${{color gray}}No {} to display", what)
}

/// Traffic-light colour for a usage percentage
pub fn color_percent(value: f64) -> &'static str {
    if value == 0.0 {
        "white"
    } else if value > 80.0 {
        "red"
    } else if value > 60.0 {
        "yellow"
    } else {
        "green"
    }
}

/// Green for objects above the horizon, gray below
pub fn visibility_color(altitude_deg: f64) -> &'static str {
    if altitude_deg > 0.0 {
        "green"
    } else {
        "lightgray"
    }
}
