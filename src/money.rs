//! Money Formatting
//!
//! Amounts are plain integers in KES; grouping is a display concern.

/// Group digits with commas: 1250000 -> "1,250,000"
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Display form used across the tables: "Ksh1,250,000"
pub fn ksh(n: u64) -> String {
    format!("Ksh{}", group_digits(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(150_000), "150,000");
        assert_eq!(group_digits(1_250_000), "1,250,000");
    }

    #[test]
    fn test_ksh_prefix() {
        assert_eq!(ksh(150_000), "Ksh150,000");
    }
}
