use series_ac::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    // 120 V mains across 100 Ω in series with 1 µF.
    let c = parse_quantity::<Farad>("1 µF")?;
    let solution = solve(120.0, 100.0, Some(c.value()), None, Some(60.0), CircuitType::RC)?;

    println!("{solution}");
    println!();
    println!("{}", calculation_steps(&solution));
    Ok(())
}
