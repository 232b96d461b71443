//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Absolute balance plus the label telling whether it is left or exceeded.
pub fn balance_label(remaining: i64) -> (u64, &'static str) {
    if remaining >= 0 {
        (remaining.unsigned_abs(), "kcal remaining")
    } else {
        (remaining.unsigned_abs(), "kcal over")
    }
}

/// Delta against the target as shown in the trend view: `+N` when over,
/// `-N` otherwise.
pub fn signed_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        format!("-{}", delta.unsigned_abs())
    }
}

/// `[#######-------------]  35%`
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled)),
        (fraction * 100.0).round() as u32
    )
}

/// Horizontal bar of `value` scaled against `max` over `width` cells.
pub fn scaled_bar(value: u64, max: u64, width: usize, fill: char) -> String {
    if max == 0 || value == 0 || width == 0 {
        return String::new();
    }
    let cells = ((value as f64 / max as f64) * width as f64).ceil() as usize;
    fill.to_string().repeat(cells.min(width))
}

pub fn minutes_label(duration: Option<u32>) -> String {
    match duration {
        Some(m) => format!("{} min", m),
        None => String::new(),
    }
}
