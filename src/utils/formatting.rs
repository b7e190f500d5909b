//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Remove ANSI escapes before measuring a padded cell
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

pub fn mins2readable(mins: i64, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;
    let sign = if mins < 0 { "-" } else { "" };

    if short {
        // es: 02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: 02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Percentage of `part` over `whole`, guarded against division by zero.
pub fn percent_of(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
