//! Number formatting for attribute tokens.

use glam::DVec3;

/// Decimal places kept when formatting.
pub const PRECISION: usize = 6;

/// Format a number with at most [`PRECISION`] decimals and no trailing zeros.
///
/// ```
/// use bodyscene::layout::fmt_scalar;
/// assert_eq!(fmt_scalar(4.0), "4");
/// assert_eq!(fmt_scalar(-1.9 + 1.01), "-0.89");
/// ```
pub fn fmt_scalar(v: f64) -> String {
    let s = format!("{:.*}", PRECISION, v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

/// Space-separated tokens, e.g. an axis-angle quad.
pub fn fmt_tokens(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| fmt_scalar(v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space-separated `x y z` triple.
pub fn fmt_vec3(v: DVec3) -> String {
    fmt_tokens(&[v.x, v.y, v.z])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_scalar_trims() {
        assert_eq!(fmt_scalar(0.0), "0");
        assert_eq!(fmt_scalar(-0.0), "0");
        assert_eq!(fmt_scalar(10.0), "10");
        assert_eq!(fmt_scalar(-22.5), "-22.5");
        assert_eq!(fmt_scalar(0.42 * 3.0), "1.26");
        assert_eq!(fmt_scalar(-0.0000001), "0");
    }

    #[test]
    fn test_fmt_scalar_rounds_float_noise() {
        assert_eq!(fmt_scalar(-1.9 + 1.01), "-0.89");
        assert_eq!(fmt_scalar(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_fmt_vec3() {
        assert_eq!(fmt_vec3(DVec3::new(-22.5, 4.0, -0.89)), "-22.5 4 -0.89");
    }

    #[test]
    fn test_fmt_tokens() {
        assert_eq!(fmt_tokens(&[0.0, -1.0, 0.0, 0.5]), "0 -1 0 0.5");
        assert_eq!(fmt_tokens(&[]), "");
    }
}
