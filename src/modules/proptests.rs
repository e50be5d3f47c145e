//! Property-based tests for polynomial arithmetic.
//!
//! Coefficients are mostly small integers (or dyadic fractions for divisors)
//! so ring identities hold exactly under `f64` and can use exact equality.
//! The power properties also run on fractional coefficients, where
//! `power` must round exactly like repeated `multiply`.
