//! Human-readable byte sizes for the viewer metadata line.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
const STEP: f64 = 1024.0;

/// Format a byte count as `B`/`KB`/`MB`/`GB`.
///
/// Non-finite and non-positive inputs render as an empty string. The unit is
/// the largest power of 1024 not exceeding the value, capped at `GB`. Bytes
/// print as whole numbers; larger units keep one decimal unless it is `.0`.
pub fn format_bytes(bytes: f64) -> String {
    if !bytes.is_finite() || bytes <= 0.0 {
        return String::new();
    }

    let mut value = bytes;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    if unit == 0 {
        return format!("{value:.0} {}", UNITS[0]);
    }
    let rendered = format!("{value:.1}");
    let trimmed = rendered.strip_suffix(".0").unwrap_or(&rendered);
    format!("{trimmed} {}", UNITS[unit])
}
