//! Macroquad presentation layer: drawing, sounds and key polling.

pub mod audio;
pub mod draw;
pub mod input;

use macroquad::prelude::get_time;

use crate::clock::Clock;

/// Clock backed by macroquad's frame timer.
pub struct MacroquadClock;

impl Clock for MacroquadClock {
    fn now_ms(&self) -> u64 {
        (get_time() * 1000.0) as u64
    }
}
