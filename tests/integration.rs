//! Integration tests for the public decode pipeline.

use ::keyscribe::{
    capture::Capture,
    input::keyboard::{ControlKey, Layout, Token},
    render::{write_report, Transcript},
};
use ::pretty_assertions::assert_eq;

#[test]
fn typed_sentence_with_enter() {
    // "Hi there\n" typed on a keyboard reporting key-first, with release
    // reports (keycode 0x00) between each press.
    let capture = [
        0x0B, 0x02, 0x00, 0x00, // H
        0x0C, 0x00, 0x00, 0x00, // i
        0x2C, 0x00, 0x00, 0x00, // space
        0x17, 0x00, 0x0B, 0x00, 0x08, 0x00, 0x15, 0x00, 0x08, 0x00, // there
        0x28, 0x20, 0x00, 0x00, // enter, right shift held
    ];

    let transcript = Transcript::new(&capture, Layout::KeyFirst);
    assert_eq!(transcript.reconstructed(), "Hi there[<ENTER>]");
    assert_eq!(
        transcript.tokens().last(),
        Some(Token::Control(ControlKey::Enter))
    );
}

#[test]
fn modifier_first_capture_reads_cleanly_only_in_its_own_layout() {
    let capture = [0x02, 0x0B, 0x00, 0x0C, 0x02, 0x1E];

    let own = Transcript::new(&capture, Layout::ModifierFirst);
    assert_eq!(own.reconstructed(), "Hi!");

    let other = Transcript::new(&capture, Layout::KeyFirst);
    assert_eq!(other.reconstructed(), "[<KC_02>][<KC_02>]");
}

#[test]
fn report_lists_both_layouts_in_order() {
    let capture = Capture::from_bytes("capture.bin", vec![0x04, 0x00]);
    let mut out = Vec::new();
    write_report(&mut out, &capture).expect("writing to a Vec never fails");
    let text = String::from_utf8(out).expect("report is valid UTF-8");

    let key_first = text
        .find("Decoded as (low-byte = key, high-byte = modifier)")
        .expect("key-first section");
    let mod_first = text
        .find("Decoded as (high-byte = key, low-byte = modifier)")
        .expect("modifier-first section");
    assert!(key_first < mod_first);
}
