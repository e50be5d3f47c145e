use crate::modules::error::{PolynomialError, Result};
use crate::modules::univariate_poly::Polynomial;
use std::ops;
use log::{debug, warn};

/**
 * division.rs implements euclidean (long) division of polynomials. for a
 * dividend p and non-zero divisor q it finds quot and rem with
 * p = quot * q + rem and deg(rem) < deg(q), or rem zero.
 */

impl Polynomial {

    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::UndefinedOperation`] if `divisor` is the
    /// zero polynomial.
    pub fn divide(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {

        // ensure denominator is not the zero polynomial
        if divisor.is_zero() {
            warn!("rejected division of degree {} polynomial by zero polynomial", self.degree());
            return Err(PolynomialError::UndefinedOperation("division by the zero polynomial"));
        }

        let num_degree = self.degree();
        let denom_degree = divisor.degree();
        debug!("dividing degree {} polynomial by degree {} polynomial", num_degree, denom_degree);

        // divisor outranks dividend, nothing to divide
        if num_degree < denom_degree {
            return Ok((Polynomial::zero(), self.clone()));
        }

        let denom = divisor.coefficients();
        let lead = divisor.leading_coefficient();
        let mut num: Vec<f64> = self.coefficients().to_vec();
        let mut quotient: Vec<f64> = vec![0.0; num_degree - denom_degree + 1];

        // perform polynomial long division from the highest quotient term down
        for i in (0..quotient.len()).rev() {
            let value = num[i + denom_degree] / lead;
            quotient[i] = value;

            // subtract value * x^i * divisor from the working numerator
            for (j, denom_coeff) in denom.iter().enumerate() {
                num[i + j] -= value * denom_coeff;
            }
        }

        // entries at or above deg(q) were eliminated, keep only what lies below
        let remainder = if denom_degree == 0 {
            Polynomial::zero()
        } else {
            num.truncate(denom_degree);
            Polynomial::from_raw(num)
        };

        Ok((Polynomial::from_raw(quotient), remainder))
    }

    // quotient of euclidean division
    pub fn quotient(&self, divisor: &Polynomial) -> Result<Polynomial> {
        self.divide(divisor).map(|(quotient, _)| quotient)
    }

    // remainder of euclidean division
    pub fn remainder(&self, divisor: &Polynomial) -> Result<Polynomial> {
        self.divide(divisor).map(|(_, remainder)| remainder)
    }
}

/// # Panics
///
/// Panics if the divisor is the zero polynomial. Use
/// [`Polynomial::quotient`] to handle that case.
impl ops::Div for Polynomial {
    type Output = Polynomial;

    fn div(self, rhs: Polynomial) -> Polynomial {
        match self.quotient(&rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

/// # Panics
///
/// Panics if the divisor is the zero polynomial. Use
/// [`Polynomial::remainder`] to handle that case.
impl ops::Rem for Polynomial {
    type Output = Polynomial;

    fn rem(self, rhs: Polynomial) -> Polynomial {
        match self.remainder(&rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

// tests
#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn poly(coeffs: &[f64]) -> Polynomial {
        Polynomial::try_from(coeffs).unwrap()
    }

    #[test]
    fn test_difference_of_squares() {
        // (x^2 - 1) / (x + 1) = x - 1
        let (quot, rem) = poly(&[-1.0, 0.0, 1.0]).divide(&poly(&[1.0, 1.0])).unwrap();
        assert_eq!(quot, poly(&[-1.0, 1.0]));
        assert!(rem.is_zero());
    }

    #[test]
    fn test_div_with_remainder() {
        // x^3 + 2x + 5 = (x^2 + x + 3)(x - 1) + 8
        let p = poly(&[5.0, 2.0, 0.0, 1.0]);
        let q = poly(&[-1.0, 1.0]);
        assert_eq!(p.quotient(&q).unwrap(), poly(&[3.0, 1.0, 1.0]));
        assert_eq!(p.remainder(&q).unwrap(), 8.0);
    }

    #[test]
    fn test_div_non_monic() {
        // (4x^3 - 2x + 7) / (2x^2 + 1) = 2x, remainder -4x + 7
        let p = poly(&[7.0, -2.0, 0.0, 4.0]);
        let q = poly(&[1.0, 0.0, 2.0]);
        let (quot, rem) = p.divide(&q).unwrap();
        assert_eq!(quot, poly(&[0.0, 2.0]));
        assert_eq!(rem, poly(&[7.0, -4.0]));
        assert!(rem.degree() < q.degree());
    }

    #[test]
    fn test_div_round_trip() {
        // setup
        let a = poly(&[2.0, 1.0]);
        let b = poly(&[1.0, 1.0]);
        let c = &a * &b;

        // division
        assert_eq!(c.clone() / a.clone(), b);
        assert_eq!(c.clone() / b.clone(), a);
        assert!((c % a).is_zero());
    }

    #[test]
    fn test_div_lower_degree_dividend() {
        let p = poly(&[1.0, 2.0]);
        let q = poly(&[0.0, 0.0, 1.0]);
        let (quot, rem) = p.divide(&q).unwrap();
        assert!(quot.is_zero());
        assert_eq!(rem, p);
    }

    #[test]
    fn test_div_by_constant() {
        let p = poly(&[2.0, 4.0, 6.0]);
        let (quot, rem) = p.divide(&poly(&[2.0])).unwrap();
        assert_eq!(quot, poly(&[1.0, 2.0, 3.0]));
        assert!(rem.is_zero());
    }

    #[test]
    fn test_div_zero_dividend() {
        let (quot, rem) = Polynomial::zero().divide(&poly(&[1.0, 1.0])).unwrap();
        assert!(quot.is_zero());
        assert!(rem.is_zero());
    }

    #[test]
    fn test_div_by_zero_polynomial() {
        let p = poly(&[1.0, 2.0]);
        let err = PolynomialError::UndefinedOperation("division by the zero polynomial");
        assert_eq!(p.divide(&Polynomial::zero()).unwrap_err(), err);
        assert_eq!(p.quotient(&poly(&[0.0, 0.0])).unwrap_err(), err);
        assert_eq!(p.remainder(&Polynomial::zero()).unwrap_err(), err);
    }

    #[test]
    #[should_panic(expected = "division by the zero polynomial")]
    fn test_div_operator_panics_on_zero() {
        let _ = poly(&[1.0, 2.0]) / Polynomial::zero();
    }

    #[test]
    fn test_vanishing_polynomial_divides() {
        let roots = [1.0, -2.0, 3.0, 0.5];
        let vanish = Polynomial::from_roots(&roots);
        for root in roots {
            let (quot, rem) = vanish.divide(&poly(&[-root, 1.0])).unwrap();
            assert!(rem.is_zero());
            assert_eq!(quot.degree(), 3);
        }
    }

    #[test]
    fn test_division_invariant_fuzz() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let p_degree = rng.gen_range(0..8);
            let q_degree = rng.gen_range(0..5);
            let p_coeffs: Vec<f64> = (0..=p_degree).map(|_| rng.gen_range(-10.0..10.0)).collect();
            let mut q_coeffs: Vec<f64> = (0..=q_degree).map(|_| rng.gen_range(-10.0..10.0)).collect();

            // keep the divisor's leading term away from zero
            q_coeffs[q_degree] = rng.gen_range(1.0..4.0);

            let p = Polynomial::new(p_coeffs).unwrap();
            let q = Polynomial::new(q_coeffs).unwrap();
            let (quot, rem) = p.divide(&q).unwrap();

            assert!(rem.is_zero() || rem.degree() < q.degree());

            // rounding grows with the size of the quotient
            let max_abs = |poly: &Polynomial| poly.coefficients().iter().fold(0.0_f64, |m, c| m.max(c.abs()));
            let tolerance = 1e-9 * (1.0 + max_abs(&quot) * max_abs(&q) + max_abs(&p));
            assert!((&(&quot * &q) + &rem).approx_eq(&p, tolerance));
        }
    }
}
