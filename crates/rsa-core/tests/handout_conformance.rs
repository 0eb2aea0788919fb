use rsa_core::scenarios::{find_scenario, handout_scenarios};
use rsa_core::LabeledMatrix;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const FLOAT_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Deserialize)]
struct Fixture {
    slug: String,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    literal_listener: Vec<Vec<f64>>,
    speaker: Vec<Vec<f64>>,
    listener: Vec<Vec<f64>>,
}

fn load_fixtures() -> Vec<Fixture> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/handout_scenarios.json");
    let bytes = fs::read(&path).expect("read fixtures");
    serde_json::from_slice(&bytes).expect("parse fixtures")
}

fn assert_matrix(label: &str, actual: &LabeledMatrix, expected: &[Vec<f64>]) {
    assert_eq!(actual.values.len(), expected.len(), "{label}: row count");
    for (r, (a_row, e_row)) in actual.values.iter().zip(expected).enumerate() {
        assert_eq!(a_row.len(), e_row.len(), "{label}: row {r} width");
        for (c, (a, e)) in a_row.iter().zip(e_row).enumerate() {
            assert!(
                (a - e).abs() <= FLOAT_TOLERANCE,
                "{label}[{r}][{c}]: actual={a} expected={e}"
            );
        }
    }
}

#[test]
fn every_handout_scenario_has_a_fixture() {
    let fixtures = load_fixtures();
    let mut slugs: Vec<&str> = fixtures.iter().map(|f| f.slug.as_str()).collect();
    slugs.sort_unstable();
    let mut expected: Vec<&str> = handout_scenarios().iter().map(|s| s.slug).collect();
    expected.sort_unstable();
    assert_eq!(slugs, expected);
}

#[test]
fn handout_scenarios_match_reference_values() {
    for fixture in load_fixtures() {
        let scenario = find_scenario(&fixture.slug).expect("scenario");
        let report = scenario.game.solve().expect("solve");
        assert_matrix(
            &format!("{}/literal_listener", fixture.slug),
            &report.literal_listener,
            &fixture.expected.literal_listener,
        );
        assert_matrix(
            &format!("{}/speaker", fixture.slug),
            &report.speaker,
            &fixture.expected.speaker,
        );
        assert_matrix(
            &format!("{}/listener", fixture.slug),
            &report.listener,
            &fixture.expected.listener,
        );
    }
}

#[test]
fn hat_is_always_resolved_to_r2() {
    for scenario in handout_scenarios() {
        let report = scenario.game.solve().expect("solve");
        let p = report.listener.get("hat", "r2").expect("cell");
        assert!((p - 1.0).abs() <= FLOAT_TOLERANCE, "{}", scenario.slug);
        let q = report.speaker.get("r1", "glasses").expect("cell");
        assert!((q - 1.0).abs() <= FLOAT_TOLERANCE, "{}", scenario.slug);
    }
}
