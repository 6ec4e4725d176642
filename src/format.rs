//! Display formatting for dashboard figures
//!
//! Pure functions only. Negative inputs are not special-cased: they fall
//! through to the sub-thousand branch of each tier.
//!
//! Every fixed-decimal rendering goes through [`to_fixed`], which rounds exact
//! ties away from zero (`1.125` → `1.13`) rather than to even.

use chrono::NaiveTime;

/// Compact number: `2.50M`, `1.50K`, or the en-US rendering below 1000.
pub fn format_number(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{}M", to_fixed(n / 1_000_000.0, 2))
    } else if n >= 1_000.0 {
        format!("{}K", to_fixed(n / 1_000.0, 2))
    } else {
        format_locale(n)
    }
}

/// Compact dollar amount: `$1.50B`, `$2.50M`, `$1.50K`, or `$500.00`.
pub fn format_currency(n: f64) -> String {
    if n >= 1_000_000_000.0 {
        format!("${}B", to_fixed(n / 1_000_000_000.0, 2))
    } else if n >= 1_000_000.0 {
        format!("${}M", to_fixed(n / 1_000_000.0, 2))
    } else if n >= 1_000.0 {
        format!("${}K", to_fixed(n / 1_000.0, 2))
    } else {
        format!("${}", to_fixed(n, 2))
    }
}

/// Token price with four decimals
pub fn format_price(n: f64) -> String {
    format!("${}", to_fixed(n, 4))
}

/// Signed percentage change, `+1.23%` / `-0.50%`. Zero counts as positive.
pub fn format_change(n: f64, decimals: usize) -> String {
    let sign = if n >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", to_fixed(n, decimals))
}

/// CSS class for a signed value
pub fn sign_class(n: f64) -> &'static str {
    if n >= 0.0 { "positive" } else { "negative" }
}

/// Signed count, `+12` / `-3`
pub fn format_signed_count(n: f64) -> String {
    let sign = if n >= 0.0 { "+" } else { "" };
    format!("{sign}{n}")
}

/// Compact amount followed by the token symbol
pub fn format_token_amount(n: f64, symbol: &str) -> String {
    format!("{} {symbol}", format_number(n))
}

/// Share of supply that is staked, in percent. Zero when supply is not positive.
pub fn staking_ratio(total_staked: f64, total_supply: f64) -> f64 {
    if total_supply > 0.0 {
        total_staked / total_supply * 100.0
    } else {
        0.0
    }
}

/// Plain percentage with two decimals
pub fn format_percent(n: f64) -> String {
    format!("{}%", to_fixed(n, 2))
}

/// Wall clock as `HH:MM:SS`
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// en-US locale rendering: grouped thousands, up to three fraction digits.
pub fn format_locale(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = to_fixed(n.abs(), 3);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if n < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Render `n` with exactly `decimals` fraction digits.
///
/// Matches JavaScript's `toFixed`: the nearest decimal wins, an exact tie goes
/// to the larger magnitude, and any negative input keeps its minus sign.
pub fn to_fixed(n: f64, decimals: usize) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let mut magnitude = n.abs();
    if is_tie(magnitude, decimals) {
        // Next representable value up; plain formatting then rounds away from the tie.
        magnitude = f64::from_bits(magnitude.to_bits() + 1);
    }

    let sign = if n < 0.0 { "-" } else { "" };
    format!("{sign}{magnitude:.decimals$}")
}

/// Whether `magnitude` sits exactly halfway between two `decimals`-digit values.
///
/// That holds iff `magnitude * 2 * 10^decimals` is an odd integer, which for a
/// binary float means `magnitude * 2^(decimals + 1)` is an odd integer. Scaling
/// by a power of two is exact.
fn is_tie(magnitude: f64, decimals: usize) -> bool {
    let exp = i32::try_from(decimals + 1).unwrap_or(i32::MAX);
    let scaled = magnitude * 2f64.powi(exp);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_tiers() {
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1500.0), "1.50K");
        assert_eq!(format_number(2_500_000.0), "2.50M");
        assert_eq!(format_number(1_000.0), "1.00K");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_locale_branch() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(0.123_456), "0.123");
        assert_eq!(format_number(-5_000.0), "-5,000");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_format_currency_tiers() {
        assert_eq!(format_currency(500.0), "$500.00");
        assert_eq!(format_currency(1_500_000_000.0), "$1.50B");
        assert_eq!(format_currency(2_500_000.0), "$2.50M");
        assert_eq!(format_currency(1_234.0), "$1.23K");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-42.0), "$-42.00");
    }

    #[test]
    fn test_format_price_and_change() {
        assert_eq!(format_price(0.0), "$0.0000");
        assert_eq!(format_price(0.012_34), "$0.0123");
        assert_eq!(format_change(0.0, 2), "+0.00%");
        assert_eq!(format_change(3.456, 2), "+3.46%");
        assert_eq!(format_change(-12.34, 1), "-12.3%");
        assert_eq!(sign_class(0.0), "positive");
        assert_eq!(sign_class(-0.01), "negative");
    }

    #[test]
    fn test_signed_count_and_token_amount() {
        assert_eq!(format_signed_count(0.0), "+0");
        assert_eq!(format_signed_count(12.0), "+12");
        assert_eq!(format_signed_count(-3.0), "-3");
        assert_eq!(format_token_amount(50_000_000.0, "TREVEE"), "50.00M TREVEE");
    }

    #[test]
    fn test_staking_ratio_guards_zero_supply() {
        assert_eq!(format_percent(staking_ratio(0.0, 0.0)), "0.00%");
        assert_eq!(format_percent(staking_ratio(5.0, 0.0)), "0.00%");
        assert_eq!(format_percent(staking_ratio(12_500_000.0, 50_000_000.0)), "25.00%");
    }

    #[test]
    fn test_format_clock() {
        let time = NaiveTime::from_hms_opt(9, 5, 7).expect("valid time");
        assert_eq!(format_clock(time), "09:05:07");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_number(1_125.0), "1.13K");
        assert_eq!(format_number(2_125_000.0), "2.13M");
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(1_125_000_000.0), "$1.13B");
        assert_eq!(format_change(0.125, 2), "+0.13%");
        assert_eq!(format_change(-0.125, 2), "-0.13%");
        assert_eq!(format_change(0.25, 1), "+0.3%");
        assert_eq!(format_percent(12.375), "12.38%");
        assert_eq!(format_number(0.0625), "0.063");
    }

    #[test]
    fn test_to_fixed_uses_exact_value() {
        // 1.005 is stored just below the tie, so it rounds down.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(3.5, 0), "4");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(1_234.567, 2), "1234.57");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
