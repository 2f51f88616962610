use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use num_complex::Complex;
use rlc_circuits::prelude::*;

#[test]
fn resistor_is_frequency_invariant() {
    let mut r = Component::resistor("R1", 220.0).unwrap();
    for f in [1.0, 60.0, 1.0e3, 1.0e9] {
        r.set_frequency(f).unwrap();
        assert_eq!(r.impedance().unwrap(), Complex::new(220.0, 0.0));
    }
}

#[test]
fn capacitor_and_inductor_magnitudes_follow_reactance() {
    for (c, l, f) in [(1e-6, 1e-3, 50.0), (4.7e-9, 0.5, 1.0e4), (1e-12, 1e-9, 1.0e8)] {
        let mut cap = Component::capacitor("C1", c).unwrap();
        let mut ind = Component::inductor("L1", l).unwrap();
        cap.set_frequency(f).unwrap();
        ind.set_frequency(f).unwrap();
        assert_relative_eq!(cap.impedance_magnitude().unwrap(), 1.0 / (2.0 * PI * f * c), max_relative = 1.0e-12);
        assert_relative_eq!(ind.impedance_magnitude().unwrap(), 2.0 * PI * f * l, max_relative = 1.0e-12);
        assert_eq!(cap.phase_difference().unwrap(), -FRAC_PI_2);
        assert_eq!(ind.phase_difference().unwrap(), FRAC_PI_2);
    }
}

#[test]
fn series_sum_is_order_independent() {
    let build = |order: &[usize]| {
        let parts = [
            Component::resistor("R1", 47.0).unwrap(),
            Component::capacitor("C1", 2.2e-6).unwrap(),
            Component::inductor("L1", 3.3e-3).unwrap(),
        ];
        let mut circuit = Circuit::new("series", ConnectionKind::Series);
        for &i in order {
            circuit.add_component_in_series(parts[i].clone()).unwrap();
        }
        circuit.set_frequency(2_000.0).unwrap();
        circuit.total_impedance().unwrap()
    };
    let a = build(&[0, 1, 2]);
    let b = build(&[2, 0, 1]);
    assert_relative_eq!(a.re, b.re, max_relative = 1.0e-12);
    assert_relative_eq!(a.im, b.im, max_relative = 1.0e-12);

    let expected = Complex::new(47.0, 2.0 * PI * 2_000.0 * 3.3e-3 - 1.0 / (2.0 * PI * 2_000.0 * 2.2e-6));
    assert_relative_eq!(a.re, expected.re, max_relative = 1.0e-12);
    assert_relative_eq!(a.im, expected.im, max_relative = 1.0e-12);
}

#[test]
fn series_rc_at_one_kilohertz() {
    let mut circuit = Circuit::new("rc", ConnectionKind::Series);
    let r = circuit.add_component_in_series(Component::resistor("R1", 100.0).unwrap()).unwrap();
    let c = circuit.add_component_in_series(Component::capacitor("C1", 1e-6).unwrap()).unwrap();
    circuit.set_frequency(1_000.0).unwrap();

    let zc = circuit.component(c).unwrap().impedance().unwrap();
    assert_relative_eq!(zc.im, -159.154_943_091_895_35, max_relative = 1.0e-12);
    assert_eq!(circuit.component(r).unwrap().impedance().unwrap(), Complex::new(100.0, 0.0));

    let z = circuit.total_impedance().unwrap();
    assert_relative_eq!(z.re, 100.0, max_relative = 1.0e-12);
    assert_relative_eq!(z.im, -159.154_943_091_895_35, max_relative = 1.0e-12);
    assert_relative_eq!(circuit.total_impedance_magnitude().unwrap(), 187.963_549_420_052_3, max_relative = 1.0e-12);
    assert_relative_eq!(circuit.phase_difference().unwrap(), -1.009_814_210_686_273, max_relative = 1.0e-12);
}

#[test]
fn parallel_rl_matches_hand_division() {
    let mut circuit = Circuit::new("rl", ConnectionKind::Parallel);
    circuit.add_component_in_parallel(Component::resistor("R1", 50.0).unwrap()).unwrap();
    let l = circuit.add_component_in_parallel(Component::inductor("L1", 0.01).unwrap()).unwrap();
    circuit.set_frequency(500.0).unwrap();

    let zl = circuit.component(l).unwrap().impedance().unwrap();
    assert_relative_eq!(zl.im, 31.415_926_535_897_93, max_relative = 1.0e-12);

    // 1 / (1/50 + 1/(jX)) = 50·jX / (50 + jX)
    let x = zl.im;
    let expected = Complex::new(50.0 * x * x, 2_500.0 * x) / (2_500.0 + x * x);
    let z = circuit.total_impedance().unwrap();
    assert_relative_eq!(z.re, expected.re, max_relative = 1.0e-12);
    assert_relative_eq!(z.im, expected.im, max_relative = 1.0e-12);
    assert_relative_eq!(z.re, 14.152_159_983_755_11, max_relative = 1.0e-9);
    assert_relative_eq!(z.im, 22.523_862_168_419_43, max_relative = 1.0e-9);
}

#[test]
fn equal_parallel_impedances_halve() {
    let mut circuit = Circuit::new("pair", ConnectionKind::Parallel);
    circuit.add_component_in_parallel(Component::inductor("L1", 1e-3).unwrap()).unwrap();
    circuit.add_component_in_parallel(Component::inductor("L2", 1e-3).unwrap()).unwrap();
    circuit.set_frequency(10_000.0).unwrap();
    let single = circuit.components().next().unwrap().impedance().unwrap();
    let z = circuit.total_impedance().unwrap();
    assert_relative_eq!(z.im, single.im / 2.0, max_relative = 1.0e-12);
    assert_relative_eq!(z.re, 0.0, epsilon = 1.0e-12);
}

#[test]
fn inductor_at_zero_frequency_shorts_parallel_circuit() {
    let mut circuit = Circuit::new("rl", ConnectionKind::Parallel);
    circuit.add_component_in_parallel(Component::resistor("R1", 50.0).unwrap()).unwrap();
    circuit.add_component_in_parallel(Component::inductor("L1", 0.01).unwrap()).unwrap();
    assert_eq!(circuit.set_frequency(0.0), Err(DomainError::ZeroImpedance("L1".into())));
    assert!(circuit.total_impedance().is_err());
}

#[test]
fn fresh_and_reused_components_agree() {
    let mut reused = Component::capacitor("C1", 3.3e-7).unwrap();
    reused.set_frequency(120.0).unwrap();
    reused.set_frequency(7_500.0).unwrap();
    let mut fresh = Component::capacitor("C1", 3.3e-7).unwrap();
    fresh.set_frequency(7_500.0).unwrap();
    assert_eq!(reused, fresh);
}

#[test]
fn sweep_of_series_rlc_bottoms_out_at_resonance() {
    let values = ParameterValues {
        resistance: Some(10.0),
        capacitance: Some(1e-6),
        inductance: Some(1e-3),
    };
    let circuit = AnalysisConfig::new(Topology::SeriesRlc, 1_000.0, values)
        .build_circuit()
        .unwrap();
    let resonance = 1.0 / (2.0 * PI * (1e-3_f64 * 1e-6).sqrt());
    let points = sweep_circuit_impedance(&circuit, linspace(resonance / 2.0, resonance * 1.5, 3)).unwrap();
    assert_relative_eq!(points[1].magnitude(), 10.0, max_relative = 1.0e-9);
    assert!(points[0].magnitude() > 10.0 && points[2].magnitude() > 10.0);
}
