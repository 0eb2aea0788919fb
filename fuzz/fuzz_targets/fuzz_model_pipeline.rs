#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use rsa_core::RsaModel;

#[derive(Debug, Arbitrary)]
struct Input {
    messages: u8,
    states: u8,
    lexicon: Vec<f64>,
    prior: Vec<f64>,
    costs: Vec<f64>,
    alpha_raw: f64,
}

fn non_negative(x: f64) -> f64 {
    if x.is_finite() {
        x.abs().min(1e6)
    } else {
        0.0
    }
}

fn normalize_alpha(x: f64) -> f64 {
    if !x.is_finite() {
        return 1.0;
    }
    x.abs().clamp(1e-3, 16.0)
}

fn row_ok(row: ndarray::ArrayView1<'_, f64>) -> bool {
    let sum: f64 = row.sum();
    row.iter().all(|v| v.is_nan()) || (sum - 1.0).abs() < 1e-6
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = Input::arbitrary(&mut u) else {
        return;
    };

    let messages = usize::from(input.messages % 6) + 1;
    let states = usize::from(input.states % 6) + 1;
    let lexicon: Vec<Vec<f64>> = (0..messages)
        .map(|m| {
            (0..states)
                .map(|s| non_negative(input.lexicon.get(m * states + s).copied().unwrap_or(0.0)))
                .collect()
        })
        .collect();
    let prior: Vec<f64> = (0..states)
        .map(|s| non_negative(input.prior.get(s).copied().unwrap_or(1.0)))
        .collect();
    let costs: Vec<f64> = (0..messages)
        .map(|m| {
            input
                .costs
                .get(m)
                .copied()
                .filter(|c| c.is_finite())
                .unwrap_or(0.0)
                .clamp(-20.0, 20.0)
        })
        .collect();

    let model = RsaModel::from_rows(&lexicon, &prior, &costs)
        .expect("lengths are derived from the same shape")
        .with_alpha(normalize_alpha(input.alpha_raw));

    let lit = model.literal_listener();
    let spk = model.speaker();
    let lis = model.listener();
    assert_eq!(lit.dim(), (messages, states));
    assert_eq!(spk.dim(), (states, messages));
    assert_eq!(lis.dim(), (messages, states));
    for row in lit.outer_iter() {
        assert!(row_ok(row));
    }
    assert_eq!(model.literal_listener().mapv(f64::to_bits), lit.mapv(f64::to_bits));
});
