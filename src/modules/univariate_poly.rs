use crate::modules::error::{PolynomialError, Result};
use std::fmt;
use std::ops;
use serde::{Serialize, Deserialize};
use log::trace;


/**
 * univariate_poly.rs implements a dense polynomial over f64 coefficients:
 * canonical construction, addition, subtraction, scaling, convolution
 * multiplication, exponentiation, equality and display.
 *
 * evaluation lives in eval.rs and long division in division.rs.
 */

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Polynomial {
    // coefficients stored lowest to highest degree, never with trailing zeros
    pub(crate) coeffs: Vec<f64>,
}

// polynomial constructors
impl Polynomial {

    /// Builds a polynomial from coefficients ordered lowest power first.
    ///
    /// Trailing (high power) zeros are trimmed, so `[1.0, 0.0]` and `[1.0]`
    /// build the same polynomial. An all zero sequence becomes the zero
    /// polynomial `[0.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidArgument`] if `coeffs` is empty.
    pub fn new(coeffs: Vec<f64>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(PolynomialError::InvalidArgument("coefficient sequence is empty"));
        }
        Ok(Polynomial::from_raw(coeffs))
    }

    // canonicalize a non-empty raw coefficient buffer
    pub(crate) fn from_raw(mut coeffs: Vec<f64>) -> Self {
        debug_assert!(!coeffs.is_empty());

        // scan down for the first non-zero coefficient, stopping at degree 0
        let degree = coeffs.iter().rposition(|c| *c != 0.0).unwrap_or(0);
        coeffs.truncate(degree + 1);

        // store the zero polynomial as +0.0 regardless of how it was reached
        if degree == 0 && coeffs[0] == 0.0 {
            coeffs[0] = 0.0;
        }
        Polynomial { coeffs }
    }

    pub fn zero() -> Self {
        Polynomial { coeffs: vec![0.0] }
    }

    pub fn one() -> Self {
        Polynomial { coeffs: vec![1.0] }
    }

    // degree 0 polynomial holding a single value
    pub fn constant(value: f64) -> Self {
        Polynomial::from_raw(vec![value])
    }

    // constructs a monomial coefficient * x^degree
    pub fn monomial(degree: usize, coefficient: f64) -> Self {
        let mut coeffs = vec![0.0; degree + 1];
        coeffs[degree] = coefficient;
        Polynomial::from_raw(coeffs)
    }

    // vanishing polynomial (x - r_1)(x - r_2) . . . (x - r_n)
    pub fn from_roots(roots: &[f64]) -> Self {
        roots.iter().fold(Polynomial::one(), |acc, root| {
            acc.multiply(&Polynomial::from_raw(vec![-root, 1.0]))
        })
    }
}

// accessors
impl Polynomial {

    /// Index of the highest non-zero coefficient, `0` for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    // coefficient of x^power, zero past the degree
    pub fn coefficient(&self, power: usize) -> f64 {
        self.coeffs.get(power).copied().unwrap_or(0.0)
    }

    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs[self.degree()]
    }

    // checks for zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 0.0
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coeffs
    }
}

// equality
impl Polynomial {

    /// Exact comparison: same degree and every coefficient pair `==`.
    ///
    /// No tolerance is applied, so results of different rounding paths may
    /// compare unequal. Use [`Polynomial::approx_eq`] where that matters.
    pub fn equals(&self, other: &Polynomial) -> bool {
        self.degree() == other.degree()
            && self.coeffs.iter().zip(other.coeffs.iter()).all(|(a, b)| a == b)
    }

    // a polynomial equals a scalar only when it is that constant
    pub fn equals_scalar(&self, value: f64) -> bool {
        self.degree() == 0 && self.coeffs[0] == value
    }

    /// Coefficient-wise comparison within an absolute tolerance `epsilon`.
    ///
    /// Degrees may differ as long as the extra coefficients are themselves
    /// within `epsilon` of zero.
    pub fn approx_eq(&self, other: &Polynomial, epsilon: f64) -> bool {
        let len = self.coeffs.len().max(other.coeffs.len());
        (0..len).all(|i| (self.coefficient(i) - other.coefficient(i)).abs() <= epsilon)
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Polynomial) -> bool {
        self.equals(other)
    }
}

impl PartialEq<f64> for Polynomial {
    fn eq(&self, other: &f64) -> bool {
        self.equals_scalar(*other)
    }
}

impl PartialEq<Polynomial> for f64 {
    fn eq(&self, other: &Polynomial) -> bool {
        other.equals_scalar(*self)
    }
}

// arithmetic
impl Polynomial {

    // add a scalar into the constant term
    pub fn add_scalar(&self, value: f64) -> Polynomial {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] += value;
        Polynomial::from_raw(coeffs)
    }

    // subtract a scalar from the constant term
    pub fn subtract_scalar(&self, value: f64) -> Polynomial {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] -= value;
        Polynomial::from_raw(coeffs)
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {

        // result is as long as the higher degree operand
        let (max_poly, min_poly) = if self.degree() >= other.degree() { (self, other) } else { (other, self) };

        // shared degrees are summed, higher degrees copied from max poly
        let mut res: Vec<f64> = max_poly.coeffs.clone();
        for (coeff, other_coeff) in res.iter_mut().zip(min_poly.coeffs.iter()) {
            *coeff += other_coeff;
        }

        // leading terms may cancel
        Polynomial::from_raw(res)
    }

    // p1 - p2 is p1 + (-1 * p2)
    pub fn subtract(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.scale(-1.0))
    }

    // scales all coefficients of the polynomial by a scalar
    pub fn scale(&self, factor: f64) -> Polynomial {
        Polynomial::from_raw(self.coeffs.iter().map(|coeff| factor * coeff).collect())
    }

    pub fn multiply(&self, other: &Polynomial) -> Polynomial {

        // result holds deg1 + deg2 + 1 coefficients
        let mut res: Vec<f64> = vec![0.0; self.coeffs.len() + other.coeffs.len() - 1];

        // multiply polynomials by convolution
        for (i, c1) in self.coeffs.iter().enumerate() {
            for (j, c2) in other.coeffs.iter().enumerate() {
                res[i + j] += c1 * c2;
            }
        }

        Polynomial::from_raw(res)
    }

    /// Raises the polynomial to the power `n`.
    ///
    /// The result buffer is allocated once at its final size `n * degree + 1`
    /// and convolved against `self` in place `n - 1` times. Each pass fills
    /// positions from the highest index down, so the lower entries it still
    /// reads belong to the previous pass. The result is identical to
    /// multiplying by `self` `n - 1` times.
    ///
    /// `power(0)` is `1`, including for the zero polynomial.
    ///
    /// # Panics
    ///
    /// Panics if the result degree `n * degree` overflows `usize`.
    pub fn power(&self, n: u32) -> Polynomial {
        if n == 0 { return Polynomial::one(); }

        // constants multiply the scalar in the same order as multiply()
        let degree = self.degree();
        if degree == 0 {
            let c = self.coeffs[0];
            return Polynomial::constant((1..n).fold(c, |acc, _| acc * c));
        }

        let n = n as usize;
        let final_degree = power_degree(degree, n);
        trace!("raising degree {} polynomial to power {}, result degree {}", degree, n, final_degree);

        let mut buf: Vec<f64> = vec![0.0; final_degree + 1];
        buf[..=degree].copy_from_slice(&self.coeffs);

        let mut current = degree;
        for _ in 1..n {
            let next = current + degree;

            // buf[k] only depends on buf[i] with i <= k
            for k in (0..=next).rev() {
                let lo = k.saturating_sub(degree);
                let hi = k.min(current);

                let mut value = 0.0;
                for i in lo..=hi {
                    value += buf[i] * self.coeffs[k - i];
                }
                buf[k] = value;
            }
            current = next;
        }

        Polynomial::from_raw(buf)
    }
}

// degree of p^n, panicking instead of wrapping on overflow
fn power_degree(degree: usize, n: usize) -> usize {
    degree.checked_mul(n).expect("power result degree overflows usize")
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = PolynomialError;

    fn try_from(coeffs: Vec<f64>) -> Result<Self> {
        Polynomial::new(coeffs)
    }
}

impl TryFrom<&[f64]> for Polynomial {
    type Error = PolynomialError;

    fn try_from(coeffs: &[f64]) -> Result<Self> {
        Polynomial::new(coeffs.to_vec())
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(poly: Polynomial) -> Vec<f64> {
        poly.coeffs
    }
}

// operators forward to the named methods for owned and borrowed operands
macro_rules! forward_binop {
    ($trait:ident, $op:ident, $method:ident) => {
        impl ops::$trait<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $op(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$method(&self, &rhs)
            }
        }

        impl<'a, 'b> ops::$trait<&'b Polynomial> for &'a Polynomial {
            type Output = Polynomial;

            fn $op(self, rhs: &'b Polynomial) -> Polynomial {
                Polynomial::$method(self, rhs)
            }
        }
    };
}

macro_rules! forward_scalar_op {
    ($trait:ident, $op:ident, $method:ident) => {
        impl ops::$trait<f64> for Polynomial {
            type Output = Polynomial;

            fn $op(self, rhs: f64) -> Polynomial {
                Polynomial::$method(&self, rhs)
            }
        }

        impl<'a> ops::$trait<f64> for &'a Polynomial {
            type Output = Polynomial;

            fn $op(self, rhs: f64) -> Polynomial {
                Polynomial::$method(self, rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);

forward_scalar_op!(Add, add, add_scalar);
forward_scalar_op!(Sub, sub, subtract_scalar);
forward_scalar_op!(Mul, mul, scale);

// scalar on the left for the commutative operators
impl ops::Add<Polynomial> for f64 {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        rhs.add_scalar(self)
    }
}

impl ops::Mul<Polynomial> for f64 {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        rhs.scale(self)
    }
}

// negation
impl ops::Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl<'a> ops::Neg for &'a Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl num_traits::Pow<u32> for Polynomial {
    type Output = Polynomial;

    fn pow(self, n: u32) -> Polynomial {
        self.power(n)
    }
}

impl<'a> num_traits::Pow<u32> for &'a Polynomial {
    type Output = Polynomial;

    fn pow(self, n: u32) -> Polynomial {
        self.power(n)
    }
}

impl num_traits::Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl num_traits::One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}

// prints polynomial in ascending powers, e.g. 5 + 6x - 4x^2
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() { return write!(f, "0"); }

        let mut first = true;
        for (power, coeff) in self.coeffs.iter().enumerate() {
            if *coeff == 0.0 { continue; }

            // no separator before the first term, only its sign
            let negative = *coeff < 0.0;
            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            let magnitude = coeff.abs();
            if power == 0 || magnitude != 1.0 {
                write!(f, "{}", magnitude)?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
        }
        Ok(())
    }
}
