pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Rating on the 0-5 scale; zero reads as unrated.
pub fn format_rating(value: f64) -> String {
    if value <= 0.0 {
        "unrated".to_string()
    } else if value.fract() == 0.0 {
        format!("{:.0}/5", value)
    } else {
        format!("{:.1}/5", value)
    }
}

/// Ten-character bar for a 0-100 share; overfull values fill the bar.
pub fn fill_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 10.0).round()) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}
