use crate::board::board::Board;
use crate::events::{Event, TRANSFORM};
use crate::keymap::KeyDef;
use crate::sound::sound::Sound;
use crate::trigger::trigger::{KeyTrigger, WireError};

/// Recording stand-in for a rodio slot: remembers every call in order.
#[derive(Default)]
struct FakeSound {
    calls: Vec<&'static str>,
}

impl Sound for FakeSound {
    fn rewind(&mut self) {
        self.calls.push("rewind");
    }

    fn play(&mut self) {
        self.calls.push("play");
    }
}

fn def(key_code: u32, label: char) -> KeyDef {
    KeyDef {
        key_code,
        label,
        midi: 60,
    }
}

/// Two caps and two slots: A (65) and S (83), like a two-key page.
fn wired() -> KeyTrigger<FakeSound> {
    let board = Board::new(&[def(65, 'A'), def(83, 'S')]);
    let sounds = vec![(65, FakeSound::default()), (83, FakeSound::default())];
    KeyTrigger::wire(board, sounds).unwrap()
}

#[test]
fn mapped_key_down_plays_and_marks_playing() {
    let mut t = wired();
    t.dispatch(&Event::KeyDown { key_code: 65 });

    assert_eq!(t.sounds[0].calls, ["rewind", "play"]);
    assert!(t.board.caps[0].playing);

    // the other pair is untouched
    assert!(t.sounds[1].calls.is_empty());
    assert!(!t.board.caps[1].playing);
}

#[test]
fn unmapped_key_down_is_silently_ignored() {
    let mut t = wired();
    t.dispatch(&Event::KeyDown { key_code: 90 }); // Z

    assert!(t.sounds.iter().all(|s| s.calls.is_empty()));
    assert!(t.board.caps.iter().all(|c| !c.playing));
}

#[test]
fn key_up_resets_every_cap() {
    let mut t = wired();
    t.dispatch(&Event::KeyDown { key_code: 65 });
    t.dispatch(&Event::KeyDown { key_code: 83 });
    assert!(t.board.caps.iter().all(|c| c.playing));

    t.dispatch(&Event::KeyUp);
    assert!(t.board.caps.iter().all(|c| !c.playing));
}

#[test]
fn transition_end_clears_only_its_target() {
    let mut t = wired();
    t.dispatch(&Event::KeyDown { key_code: 65 });
    t.dispatch(&Event::KeyDown { key_code: 83 });

    t.dispatch(&Event::TransitionEnd {
        key: 0,
        property: TRANSFORM,
    });
    assert!(!t.board.caps[0].playing);
    assert!(t.board.caps[1].playing);
}

#[test]
fn transition_end_does_not_filter_on_property() {
    let mut t = wired();
    t.dispatch(&Event::KeyDown { key_code: 65 });

    t.dispatch(&Event::TransitionEnd {
        key: 0,
        property: "border-color",
    });
    assert!(!t.board.caps[0].playing);
}

#[test]
fn click_matches_key_down_behavior() {
    let mut t = wired();
    t.dispatch(&Event::Click { key: 1 });

    assert_eq!(t.sounds[1].calls, ["rewind", "play"]);
    assert!(t.board.caps[1].playing);
    assert!(t.sounds[0].calls.is_empty());
}

#[test]
fn repeated_key_down_restarts_the_clip() {
    let mut t = wired();
    t.dispatch(&Event::KeyDown { key_code: 65 });
    t.dispatch(&Event::KeyDown { key_code: 65 });

    assert_eq!(t.sounds[0].calls, ["rewind", "play", "rewind", "play"]);
    assert!(t.board.caps[0].playing);
}

#[test]
fn press_release_unmapped_scenario() {
    let mut t = wired();

    // key-down 65: A plays and lights up, S is unaffected
    t.dispatch(&Event::KeyDown { key_code: 65 });
    assert_eq!(t.sounds[0].calls, ["rewind", "play"]);
    assert!(t.board.caps[0].playing);
    assert!(!t.board.caps[1].playing);

    // key-up (any key): A no longer playing
    t.dispatch(&Event::KeyUp);
    assert!(!t.board.caps[0].playing);

    // key-down 90: no class changes, no play calls
    t.dispatch(&Event::KeyDown { key_code: 90 });
    assert_eq!(t.sounds[0].calls.len(), 2);
    assert!(t.sounds[1].calls.is_empty());
    assert!(t.board.caps.iter().all(|c| !c.playing));
}

#[test]
fn wire_rejects_duplicate_cap_codes() {
    let board = Board::new(&[def(65, 'A'), def(65, 'B')]);
    let sounds = vec![(65, FakeSound::default())];
    assert!(matches!(
        KeyTrigger::wire(board, sounds),
        Err(WireError::DuplicateCap(65))
    ));
}

#[test]
fn wire_rejects_duplicate_sound_codes() {
    let board = Board::new(&[def(65, 'A')]);
    let sounds = vec![(65, FakeSound::default()), (65, FakeSound::default())];
    assert!(matches!(
        KeyTrigger::wire(board, sounds),
        Err(WireError::DuplicateSound(65))
    ));
}

#[test]
fn unpaired_codes_behave_as_unmapped() {
    // cap 83 has no sound slot; slot 90 has no cap
    let board = Board::new(&[def(65, 'A'), def(83, 'S')]);
    let sounds = vec![(65, FakeSound::default()), (90, FakeSound::default())];
    let mut t = KeyTrigger::wire(board, sounds).unwrap();

    t.dispatch(&Event::KeyDown { key_code: 83 });
    t.dispatch(&Event::KeyDown { key_code: 90 });
    assert!(t.sounds.iter().all(|s| s.calls.is_empty()));
    assert!(t.board.caps.iter().all(|c| !c.playing));

    // the intact pair still works
    t.dispatch(&Event::KeyDown { key_code: 65 });
    assert_eq!(t.sounds[0].calls, ["rewind", "play"]);
    assert!(t.board.caps[0].playing);
}
