//! Polynomial evaluation via Horner's method.

/// Evaluate a polynomial given coefficients in descending-power order.
///
/// Given coefficients `[c_0, c_1, ..., c_n]` where `c_0` multiplies the
/// highest power, computes `c_0*x^n + c_1*x^(n-1) + ... + c_n` by the
/// Horner recurrence `p = p*x + c_i`, accumulating left to right from
/// 0.0. An empty slice yields 0.0.
///
/// The accumulation order is part of the contract: the coefficient
/// tables in this workspace reproduce published worked examples only
/// under this exact floating-point evaluation order.
pub fn poly_eval(coeffs: &[f64], x: f64) -> f64 {
    let mut p = 0.0;
    for &c in coeffs {
        p = p * x + c;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-14;

    #[test]
    fn empty_coefficients() {
        assert_eq!(poly_eval(&[], 0.5), 0.0);
    }

    #[test]
    fn constant_polynomial() {
        assert!((poly_eval(&[7.0], 123.456) - 7.0).abs() < EPS);
    }

    #[test]
    fn quadratic_worked_example() {
        // x^2 - 0.5x + 3 at x = 2 → 4 - 1 + 3 = 6
        assert_eq!(poly_eval(&[1.0, -0.5, 3.0], 2.0), 6.0);
    }

    #[test]
    fn evaluation_at_zero_returns_constant_term() {
        assert_eq!(poly_eval(&[4.0, -2.0, 9.5], 0.0), 9.5);
    }

    #[test]
    fn negative_argument() {
        // 2x^3 + x at x = -1 → -3
        assert!((poly_eval(&[2.0, 0.0, 1.0, 0.0], -1.0) + 3.0).abs() < EPS);
    }
}
