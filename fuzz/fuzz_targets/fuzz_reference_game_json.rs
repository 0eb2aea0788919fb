#![no_main]

use libfuzzer_sys::fuzz_target;
use rsa_core::ReferenceGame;

fuzz_target!(|data: &[u8]| {
    let Ok(game) = ReferenceGame::from_json(data) else {
        return;
    };
    let report = game.solve().expect("validated game must solve");
    assert_eq!(report.literal_listener.values.len(), game.messages.len());
    assert_eq!(report.speaker.values.len(), game.states.len());
    assert_eq!(report.listener.row_labels, game.messages);
});
