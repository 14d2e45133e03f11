/// Inserts `separator` every three digits, counting from the right.
/// `digits` must be a plain run of ASCII digits.
pub fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Whole-unit count with thousands separators (`19,687,000`).
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let digits = format!("{:.0}", value.abs());
    let sign = if value <= -0.5 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&digits, ','))
}

/// Signed percentage with two decimals (`+1.25%`, `-0.40%`).
pub fn format_pct_change(value: f64) -> String {
    format!("{:+.2}%", value)
}
