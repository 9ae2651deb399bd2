//! Timing layer: turns a frame into the sequence of line states the CM17A
//! decodes.
//!
//! The dongle is powered and clocked entirely from the two serial control
//! lines (active levels below, as driven at 0/+5 V without a MAX232):
//!
//! | State   | RTS  | DTR  | Meaning                      |
//! |---------|------|------|------------------------------|
//! | Reset   | low  | low  | power off / resync point     |
//! | Standby | high | high | powered, idle                |
//! | One     | high | low  | bit value 1                  |
//! | Zero    | low  | high | bit value 0                  |
//!
//! Each transmitted bit is a (data, standby) pair of equal dwell, which is
//! what lets the dongle self-clock off the edges instead of needing a clock
//! line. At least one line stays high throughout a message to keep it
//! powered.

use std::time::Duration;

use crate::frame::Frame;

/// Electrical level of one control line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    High,
}

/// One of the four defined states of the (RTS, DTR) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineState {
    Reset,
    Standby,
    One,
    Zero,
}

impl LineState {
    /// The (RTS, DTR) levels for this state.
    pub fn levels(self) -> (Level, Level) {
        match self {
            LineState::Reset => (Level::Low, Level::Low),
            LineState::Standby => (Level::High, Level::High),
            LineState::One => (Level::High, Level::Low),
            LineState::Zero => (Level::Low, Level::High),
        }
    }
}

/// Minimum dwell for the data and standby phases of a bit-cell.
pub const MIN_BIT_DELAY: Duration = Duration::from_micros(500);

/// Settle time after powering the dongle up, before the first bit. Longer
/// than a bit dwell; the dongle will not sample edges reliably sooner.
pub const SETTLE_TIME: Duration = Duration::from_millis(35);

/// Quiet period the dongle requires after a message before it accepts
/// another.
pub const GUARD_TIME: Duration = Duration::from_millis(1000);

/// Number of line-state changes in one transmission.
pub const STEPS_PER_FRAME: usize = 2 + Frame::LEN * 8 * 2;

/// The full timed drive sequence for one frame: reset, powered settle, then
/// 40 bit-cells MSB-first. Each entry is a state change followed by its hold
/// time; the trailing guard period is merged into the final standby hold so
/// the list is exactly the sequence of state changes.
pub fn steps(frame: &Frame, bit_delay: Duration) -> Vec<(LineState, Duration)> {
    let bit_delay = bit_delay.max(MIN_BIT_DELAY);
    let mut steps = Vec::with_capacity(STEPS_PER_FRAME);

    steps.push((LineState::Reset, bit_delay));
    steps.push((LineState::Standby, SETTLE_TIME));

    for byte in frame.to_bytes() {
        for bit in (0..8).rev() {
            let state = if byte & (1 << bit) != 0 {
                LineState::One
            } else {
                LineState::Zero
            };
            steps.push((state, bit_delay));
            steps.push((LineState::Standby, bit_delay));
        }
    }

    // Lines are already in standby after the last bit-cell; only the hold
    // gets longer.
    if let Some(last) = steps.last_mut() {
        last.1 += GUARD_TIME;
    }

    steps
}
