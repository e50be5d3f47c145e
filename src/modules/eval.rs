use crate::modules::univariate_poly::Polynomial;

/**
 * eval.rs evaluates a polynomial at a point. three accumulation orders are
 * kept side by side since they round differently and cost differently:
 * horner, a running power of x, and a fresh x^i per term.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvalStrategy {
    /// `value = value * x + c` from the highest power down.
    #[default]
    Horner,
    /// `value += c * q; q *= x` from the lowest power up.
    RunningPower,
    /// `value += c * x^i` with the power recomputed for every term.
    DirectPower,
}

impl Polynomial {

    // evaluate at x with the chosen strategy
    pub fn eval(&self, x: f64, strategy: EvalStrategy) -> f64 {
        match strategy {
            EvalStrategy::Horner => self.eval_horner(x),
            EvalStrategy::RunningPower => self.eval_running_power(x),
            EvalStrategy::DirectPower => self.eval_direct_power(x),
        }
    }

    /// Horner's method: `degree` multiplications and additions.
    pub fn eval_horner(&self, x: f64) -> f64 {
        let mut value = 0.0;
        for coeff in self.coeffs.iter().rev() {
            value = value * x + coeff;
        }
        value
    }

    pub fn eval_running_power(&self, x: f64) -> f64 {
        let mut value = 0.0;
        let mut q = 1.0;
        for coeff in self.coeffs.iter() {
            value += coeff * q;
            q *= x;
        }
        value
    }

    // naive baseline, no reuse of powers between terms
    pub fn eval_direct_power(&self, x: f64) -> f64 {
        let mut value = 0.0;
        for (i, coeff) in self.coeffs.iter().enumerate() {
            value += coeff * x.powf(i as f64);
        }
        value
    }

    // evaluate over a domain of points
    pub fn eval_domain(&self, domain: &[f64]) -> Vec<f64> {
        domain.iter().map(|x| self.eval_horner(*x)).collect()
    }
}
