/// Whole-dollar amount with thousands separators, e.g. `$6,800,000` or `$-50,000`.
pub(crate) fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }

    let rounded = format!("{:.0}", amount.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (index, digit) in rounded.chars().enumerate() {
        if index > 0 && (rounded.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount.is_sign_negative() {
        format!("$-{grouped}")
    } else {
        format!("${grouped}")
    }
}
