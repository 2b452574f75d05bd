// tests/simulation_tests.rs

// Quantum math, circuit, and judging behavior of the puzzle core.

use blochdash::{judge, BlochVector, Circuit, Gate, QubitState};

const TEST_TOLERANCE: f64 = 1e-9;

// Helper: two states are the same physical state when their fidelity is 1
// (global phase is invisible to the game, so this is the right equality).
fn assert_same_state(actual: &QubitState, expected: &QubitState, context: &str) {
    let fidelity = actual.fidelity(expected);
    assert!(
        (fidelity - 1.0).abs() < TEST_TOLERANCE,
        "states differ (fidelity {}) - actual {}, expected {}, context: {}",
        fidelity,
        actual,
        expected,
        context
    );
}

#[test]
fn construction_normalizes_arbitrary_amplitudes() {
    let state = QubitState::new(
        blochdash::Amplitude::new(3.0, -4.0),
        blochdash::Amplitude::new(1.0, 2.0),
    );
    let norm_sq = state.alpha().norm_sqr() + state.beta().norm_sqr();
    assert!((norm_sq - 1.0).abs() < TEST_TOLERANCE, "norm² was {}", norm_sq);
}

#[test]
fn zero_length_input_falls_back_to_ket_zero() {
    let state = QubitState::new(
        blochdash::Amplitude::new(0.0, 0.0),
        blochdash::Amplitude::new(0.0, 0.0),
    );
    assert_same_state(&state, &QubitState::zero(), "degenerate construction");
}

#[test]
fn probabilities_follow_the_born_rule() {
    let plus = QubitState::plus();
    assert!((plus.probability_zero() - 0.5).abs() < TEST_TOLERANCE);
    assert!((plus.probability_one() - 0.5).abs() < TEST_TOLERANCE);

    let zero = QubitState::zero();
    assert!((zero.probability_zero() - 1.0).abs() < TEST_TOLERANCE);
    assert!(zero.probability_one() < TEST_TOLERANCE);
}

#[test]
fn fidelity_is_bounded_symmetric_and_reflexive() {
    let states = QubitState::cardinals();
    for a in &states {
        assert!(
            (a.fidelity(a) - 1.0).abs() < TEST_TOLERANCE,
            "fidelity(a, a) must be 1 for {}",
            a
        );
        for b in &states {
            let ab = a.fidelity(b);
            let ba = b.fidelity(a);
            assert!((0.0..=1.0 + TEST_TOLERANCE).contains(&ab), "fidelity {} out of bounds", ab);
            assert!(
                (ab - ba).abs() < TEST_TOLERANCE,
                "fidelity must be symmetric: {} vs {}",
                ab,
                ba
            );
        }
    }
}

#[test]
fn orthogonal_pairs_have_zero_fidelity() {
    // The three axis pairs of the Bloch sphere.
    let pairs = [
        (QubitState::zero(), QubitState::one()),
        (QubitState::plus(), QubitState::minus()),
        (QubitState::plus_i(), QubitState::minus_i()),
    ];
    for (a, b) in pairs {
        assert!(a.fidelity(&b) < TEST_TOLERANCE, "{} vs {} should be orthogonal", a, b);
    }
}

#[test]
fn x_gate_flips_zero_to_one() {
    // Scenario: X applied to |0⟩ yields |1⟩.
    let result = Gate::X.apply(&QubitState::zero());
    assert_same_state(&result, &QubitState::one(), "X|0⟩");
}

#[test]
fn h_gate_builds_equal_superposition() {
    // Scenario: H applied to |0⟩ yields |+⟩ with α = β = 1/√2.
    let result = Gate::H.apply(&QubitState::zero());
    assert_same_state(&result, &QubitState::plus(), "H|0⟩");
    assert!((result.alpha().re - std::f64::consts::FRAC_1_SQRT_2).abs() < TEST_TOLERANCE);
    assert!((result.beta().re - std::f64::consts::FRAC_1_SQRT_2).abs() < TEST_TOLERANCE);
}

#[test]
fn involutory_gates_square_to_identity() {
    // X, Y, Z, H applied twice restore any state (up to global phase for Y,
    // which fidelity ignores).
    let probes = [
        QubitState::zero(),
        QubitState::plus(),
        QubitState::plus_i(),
        QubitState::from_bloch_angles(1.1, 0.7),
    ];
    for gate in [Gate::X, Gate::Y, Gate::Z, Gate::H] {
        for probe in &probes {
            let twice = probe.applying(&[gate, gate]);
            assert_same_state(&twice, probe, &format!("{}² on {}", gate, probe));
        }
    }
}

#[test]
fn phase_gates_cycle_back_to_identity() {
    let probe = QubitState::from_bloch_angles(0.9, 0.4);
    let s_four = probe.applying(&[Gate::S; 4]);
    assert_same_state(&s_four, &probe, "S⁴");
    let t_eight = probe.applying(&[Gate::T; 8]);
    assert_same_state(&t_eight, &probe, "T⁸");
    // And T·T behaves exactly like S.
    let tt = probe.applying(&[Gate::T, Gate::T]);
    let s = probe.applying(&[Gate::S]);
    assert_same_state(&tt, &s, "T·T = S");
}

#[test]
fn applying_folds_left_to_right() {
    // First gate in the list acts first: H then S carries |0⟩ to |i⟩.
    let result = QubitState::zero().applying(&[Gate::H, Gate::S]);
    assert_same_state(&result, &QubitState::plus_i(), "S(H|0⟩)");
}

#[test]
fn circuit_capacity_is_never_exceeded() {
    let capacity = 4;
    let mut circuit = Circuit::new(capacity);
    for n in 0..capacity {
        assert!(circuit.add_gate(Gate::ALL[n % Gate::ALL.len()]), "add {} should fit", n);
    }
    assert!(circuit.is_full());
    let snapshot = circuit.gates().to_vec();
    assert!(!circuit.add_gate(Gate::X), "add past capacity must be rejected");
    assert_eq!(circuit.gates(), &snapshot[..], "rejected add must leave the circuit unchanged");
    assert_eq!(circuit.gate_count(), capacity);
}

#[test]
fn circuit_apply_matches_manual_fold() {
    let mut circuit = Circuit::new(6);
    for gate in [Gate::H, Gate::T, Gate::H, Gate::S] {
        circuit.add_gate(gate);
    }
    let via_circuit = circuit.apply(&QubitState::zero());
    let manual = QubitState::zero().applying(circuit.gates());
    assert_same_state(&via_circuit, &manual, "circuit fold");
    // apply() must not consume or mutate the circuit.
    assert_eq!(circuit.gate_count(), 4);
}

#[test]
fn bloch_projection_tracks_gate_motion() {
    // H carries the north pole to +x; S then rotates +x to +y.
    let after_h = BlochVector::from_state(&Gate::H.apply(&QubitState::zero()));
    assert!(after_h.distance(&BlochVector::plus()) < TEST_TOLERANCE);

    let after_hs = BlochVector::from_state(&QubitState::zero().applying(&[Gate::H, Gate::S]));
    assert!(after_hs.distance(&BlochVector::plus_i()) < TEST_TOLERANCE);
}

#[test]
fn judging_accepts_exact_solution_only() {
    // Scenario: circuit [H] from |0⟩ judged against |+⟩ is correct.
    let mut circuit = Circuit::new(4);
    circuit.add_gate(Gate::H);
    let judgment = judge(&circuit, &QubitState::zero(), &QubitState::plus());
    assert!(judgment.is_correct, "H from |0⟩ to |+⟩, fidelity {}", judgment.fidelity);

    // The same circuit against an unrelated target fails.
    let wrong = judge(&circuit, &QubitState::zero(), &QubitState::minus_i());
    assert!(!wrong.is_correct);
    assert!(wrong.fidelity < 1.0 - 1e-6);
}

#[test]
fn longer_reference_sequences_judge_correct_when_replayed() {
    let sequence = [Gate::H, Gate::T, Gate::X, Gate::S, Gate::H];
    let start = QubitState::minus_i();
    let target = start.applying(&sequence);

    let mut circuit = Circuit::new(6);
    for gate in sequence {
        assert!(circuit.add_gate(gate));
    }
    let judgment = judge(&circuit, &start, &target);
    assert!(judgment.is_correct, "replay fidelity {}", judgment.fidelity);
}
