//! Integration tests for the virtual console and the replay pipeline

use vcon::ansi::AnsiStripper;
use vcon::asciicast::AsciicastFile;
use vcon::replay::{replay, Replayer};
use vcon::{consolify, VirtualConsole};

use crate::helpers::load_fixture;

#[test]
fn spinner_frames_collapse_to_last() {
    let mut console = VirtualConsole::new();
    for frame in ['|', '/', '-', '\\'] {
        console.submit(&format!("{} working", frame));
        console.submit("\r");
    }
    console.submit("done     \n");
    assert_eq!(console.to_string(), "done     \n");
}

#[test]
fn backspace_driven_counter() {
    // Some tools erase digits one by one instead of returning to column 0
    let mut console = VirtualConsole::new();
    console.submit("count: 9");
    console.submit("\u{8}10");
    console.submit("\u{8}\u{8}11");
    assert_eq!(console.to_string(), "count: 11");
}

#[test]
fn chunk_boundaries_do_not_matter() {
    let stream = "step 1/3\rstep 2/3\rstep 3/3\nok\u{8}K\n";
    let whole = consolify(stream);

    let mut console = VirtualConsole::new();
    for c in stream.chars() {
        console.submit(&c.to_string());
    }
    assert_eq!(console.to_string(), whole);
    assert_eq!(whole, "step 3/3\noK\n");
}

#[test]
fn text_without_controls_is_a_fixed_point() {
    for text in ["", "plain", "with spaces and unicode: ✓ ✗", "tabs\tstay"] {
        assert_eq!(consolify(text), text);
        assert_eq!(consolify(&consolify(text)), consolify(text));
    }
}

#[test]
fn stripper_feeds_console_across_chunks() {
    let mut stripper = AnsiStripper::new();
    let mut console = VirtualConsole::new();
    for chunk in ["\x1b[1", "mbold\x1b[", "0m\rBO", "LD\n"] {
        console.submit(&stripper.push(chunk.as_bytes()));
    }
    assert_eq!(console.to_string(), "BOLD\n");
}

#[test]
fn replay_fixture_matches_incremental_feed() {
    let cast = AsciicastFile::parse_str(&load_fixture("progress.cast")).unwrap();

    let mut replayer = Replayer::new(true);
    for event in &cast.events {
        replayer.feed(event);
    }

    assert_eq!(replayer.render(), replay(&cast, None, true));
    assert!((replayer.elapsed() - cast.duration()).abs() < 1e-9);
    assert!(replayer.render().contains("[##########] 100%"));
    assert!(!replayer.render().contains("20%"));
}
