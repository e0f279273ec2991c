pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Placeholder for an absent attribute in tables.
pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// "1 cigar", "3 cigars".
pub fn plural(count: impl Into<u64>, singular: &str, plural: &str) -> String {
    let count = count.into();
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Padron 1964 Anniversary", 10), "Padron ...");
        assert_eq!(truncate("Acid", 10), "Acid");
        assert_eq!(truncate("Davidoff", 3), "Dav");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1u32, "cigar", "cigars"), "1 cigar");
        assert_eq!(plural(0u32, "cigar", "cigars"), "0 cigars");
    }
}
