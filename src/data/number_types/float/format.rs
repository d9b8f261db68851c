//! Formatting of floating point numbers to a number of significant digits.
//!
//! Matrices and vectors are written in the style of the C `printf` conversion `%g`: the shortest
//! of the fixed and the scientific notation, without trailing zeros.
use num_traits::Float;

/// Format a value with `digits` significant digits, as `%1.<digits>g` does.
///
/// # Arguments
///
/// * `value`: Value to format.
/// * `digits`: Number of significant digits, at least one is always written.
///
/// # Return value
///
/// Fixed notation when the decimal exponent is at least `-4` and smaller than `digits`,
/// scientific notation with a signed, two digit exponent otherwise.
pub fn significant<F: Float>(value: F, digits: usize) -> String {
    let value = value.to_f64().unwrap_or(f64::NAN);
    let precision = digits.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0_f64 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0_f64 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the precision first determines the exponent, e.g. 99999.9 becomes 1e+05.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{:e}", value);
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{:e}", value);
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Remove zeros after the decimal point, and the point itself if nothing follows it.
fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
