use poly_algebra::modules::eval::EvalStrategy;
use poly_algebra::modules::univariate_poly::Polynomial;
use poly_algebra::modules::error::Result;


fn main() -> Result<()> {

    // 5 + 6x - 4x^2 + 2x^3 - 3x^4
    let p = Polynomial::new(vec![5.0, 6.0, -4.0, 2.0, -3.0])?;
    println!("\nP: {}", p);
    println!("Degree: {}", p.degree());

    // all three strategies at x = 1
    for strategy in [EvalStrategy::Horner, EvalStrategy::RunningPower, EvalStrategy::DirectPower] {
        println!("{:?} P(1): {}", strategy, p.eval(1.0, strategy));
    }

    // trailing zeros are trimmed on construction
    let a = Polynomial::new(vec![1.0, 0.0])?;
    println!("\n[1, 0] == [1]: {}", a == Polynomial::new(vec![1.0])?);

    // x^2 * x
    let x = Polynomial::monomial(1, 1.0);
    println!("x^2 * x = {}", x.power(2).multiply(&x));

    // (x^2 - 1) / (x + 1)
    let (quot, rem) = Polynomial::new(vec![-1.0, 0.0, 1.0])?.divide(&Polynomial::new(vec![1.0, 1.0])?)?;
    println!("(x^2 - 1) / (x + 1) = {}, remainder {}", quot, rem);

    Ok(())
}
