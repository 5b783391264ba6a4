/// The largest number of digits that `toFixed` accepts
pub const MAX_FIXED_DIGITS: usize = 100;

/// Formats `value` with exactly `digits` digits after the decimal point, the same way the
/// `toFixed` method of JavaScript numbers does. Where `toFixed` would throw because `digits`
/// exceeds `MAX_FIXED_DIGITS`, this uses `MAX_FIXED_DIGITS` digits instead.
///
/// This differs from `format!("{:.2}", value)` in a few places that matter when the result ends up
/// in a form that used to be filled by JavaScript:
/// - a value exactly halfway between two candidates is rounded away from zero (`format!` rounds
///   such ties to even)
/// - negative zero is written without a sign
/// - non-finite values are written as `NaN`, `Infinity` and `-Infinity`
/// - values of at least 1e21 (in magnitude) are written in exponent notation, like `1e+21`
pub fn to_fixed(value: f64, digits: usize) -> String {
    let digits = digits.min(MAX_FIXED_DIGITS);
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return format!("{:.*}", digits, 0.0);
    }
    if value.abs() >= 1e21 {
        // JavaScript falls back to the shortest round-trip representation here
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;

    // Only exact ties need special treatment. The fused multiply-add yields the rounding error of
    // the multiplication, which rejects values that merely became a tie because of that rounding.
    // This is only reliable while the scale itself is exact, which holds up to 10^22.
    if digits <= 22
        && scaled.is_finite()
        && scaled.fract().abs() == 0.5
        && value.mul_add(scale, -scaled) == 0.0
    {
        return format!("{:.*}", digits, scaled.round() / scale);
    }

    format!("{:.*}", digits, value)
}
