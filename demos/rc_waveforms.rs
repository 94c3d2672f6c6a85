use series_ac::prelude::*;

fn main() -> Result<()> {
    let solution = solve(10.0, 100.0, Some(1.0e-6), None, Some(1.0e3), CircuitType::RC)?;
    let w = waveforms(&solution, &WaveformConfig::new(2.0, 40))?;

    println!("t(s), v_s(V), i(A), v_R(V), v_C(V)");
    for k in 0..w.len() {
        println!(
            "{:.6e}, {:.6e}, {:.6e}, {:.6e}, {:.6e}",
            w.times[k], w.source[k], w.current[k], w.resistor[k], w.reactive[k]
        );
    }

    let d = phasor_diagram(&solution);
    for (label, p) in [("V_S", d.source), ("I", d.current), ("V_R", d.resistor), ("V_C", d.reactive)] {
        println!("{label}: {:.4} ∠ {:.2}°", p.magnitude, p.angle_degrees());
    }
    Ok(())
}
