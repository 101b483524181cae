use std::time::Duration;

/// Shortest readable form of a chart value: `20`, `1.5`, `0.33`.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        trim_zeros(format!("{:.2}", value))
    }
}

/// `850ms`, `1.25s`, `2s`.
pub fn format_latency(latency: Duration) -> String {
    let millis = latency.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{}s", trim_zeros(format!("{:.2}", latency.as_secs_f64())))
    }
}

fn trim_zeros(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
