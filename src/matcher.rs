//! Streaming byte-pattern matcher.
//!
//! Consumes the serial stream one byte at a time and watches zero or more
//! candidate slots, each configured with a frame size and two predicates: a
//! cheap structural check (sentinel positions) and a command classification.
//! When a full window satisfies both, the slot latches the captured frame
//! until it is drained with [`PatternMatcher::take_frame`]. A window that
//! fails either predicate slides forward by a single byte, so worst-case
//! resynchronization after noise is one byte per rejected attempt and the
//! matcher never stalls.

use std::collections::VecDeque;

/// Predicate over a candidate window of exactly the slot's frame size.
pub type FramePredicate = fn(&[u8]) -> bool;

struct PatternSlot {
    size: usize,
    /// Structural validity, checked first
    check: FramePredicate,
    /// Command classification, checked only when `check` passes
    catch: FramePredicate,
    window: VecDeque<u8>,
    captured: Option<Vec<u8>>,
}

/// Matcher over a set of candidate frame patterns sharing one byte stream.
#[derive(Default)]
pub struct PatternMatcher {
    slots: Vec<PatternSlot>,
}

impl PatternMatcher {
    pub fn new() -> Self {
        PatternMatcher { slots: Vec::new() }
    }

    /// Register a candidate pattern: frames of `size` bytes accepted by
    /// `check` (structure) then `catch` (command).
    pub fn add_slot(&mut self, size: usize, check: FramePredicate, catch: FramePredicate) {
        self.slots.push(PatternSlot {
            size,
            check,
            catch,
            window: VecDeque::with_capacity(size),
            captured: None,
        });
    }

    /// Feed one byte from the stream into every open slot.
    pub fn push(&mut self, byte: u8) {
        for slot in &mut self.slots {
            // A latched frame holds the slot closed until drained.
            if slot.captured.is_some() {
                continue;
            }
            if slot.window.len() == slot.size {
                slot.window.pop_front();
            }
            slot.window.push_back(byte);
            if slot.window.len() == slot.size {
                let candidate: Vec<u8> = slot.window.iter().copied().collect();
                if (slot.check)(&candidate) && (slot.catch)(&candidate) {
                    slot.captured = Some(candidate);
                    slot.window.clear();
                }
            }
        }
    }

    /// Drain one captured frame, if any slot has latched one. Clearing the
    /// latch reopens the slot for the next frame.
    pub fn take_frame(&mut self) -> Option<Vec<u8>> {
        self.slots.iter_mut().find_map(|slot| slot.captured.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REQUEST_BYTES;
    use crate::frame::{is_recognized_command, is_structurally_valid};

    fn request_matcher() -> PatternMatcher {
        let mut matcher = PatternMatcher::new();
        matcher.add_slot(REQUEST_BYTES, is_structurally_valid, is_recognized_command);
        matcher
    }

    fn feed(matcher: &mut PatternMatcher, bytes: &[u8]) -> Vec<Vec<u8>> {
        let mut frames = Vec::new();
        for &byte in bytes {
            matcher.push(byte);
            if let Some(frame) = matcher.take_frame() {
                frames.push(frame);
            }
        }
        frames
    }

    #[test]
    fn captures_clean_frame() {
        let mut matcher = request_matcher();
        let frames = feed(&mut matcher, b"@C000505000I001000#");
        assert_eq!(frames, vec![b"@C000505000I001000#".to_vec()]);
    }

    #[test]
    fn captures_frame_after_leading_noise() {
        let mut matcher = request_matcher();
        let frames = feed(&mut matcher, b"\x00garbage##@@C000505000I001000#");
        assert_eq!(frames, vec![b"@C000505000I001000#".to_vec()]);
    }

    #[test]
    fn partial_frame_is_not_captured() {
        let mut matcher = request_matcher();
        assert!(feed(&mut matcher, b"@C000505000I").is_empty());
        assert!(matcher.take_frame().is_none());
    }

    #[test]
    fn unknown_command_rejected_then_resynchronizes() {
        let mut matcher = request_matcher();
        // A structurally valid frame with command 'X' must be dropped, and
        // the valid frame right behind it still captured.
        let mut stream = b"@X000505000I001000#".to_vec();
        stream.extend_from_slice(b"@C000505000I001000#");
        let frames = feed(&mut matcher, &stream);
        assert_eq!(frames, vec![b"@C000505000I001000#".to_vec()]);
    }

    #[test]
    fn back_to_back_frames_capture_individually() {
        let mut matcher = request_matcher();
        let mut stream = b"@P000000000R000000#".to_vec();
        stream.extend_from_slice(b"@C000505000I001000#");
        let frames = feed(&mut matcher, &stream);
        assert_eq!(
            frames,
            vec![
                b"@P000000000R000000#".to_vec(),
                b"@C000505000I001000#".to_vec(),
            ]
        );
    }

    #[test]
    fn latched_frame_holds_until_taken() {
        let mut matcher = request_matcher();
        for &byte in b"@C000505000I001000#" {
            matcher.push(byte);
        }
        // More traffic arrives before the loop drains the latch.
        for &byte in b"@@@" {
            matcher.push(byte);
        }
        assert_eq!(matcher.take_frame().unwrap(), b"@C000505000I001000#");
        assert!(matcher.take_frame().is_none());
    }
}
