#![cfg(target_os = "windows")]

//! Windows backend.
//!
//! - **key state**: `GetKeyState` / `GetAsyncKeyState` / `GetKeyboardState`
//! - **injection**: `SendInput` with one `INPUT` per [`InputRecord`]
//!
//! Most users should not touch this module directly; [`Keyboard::discover`]
//! picks it up automatically on Windows.
//!
//! [`InputRecord`]: crate::input::InputRecord
//! [`Keyboard::discover`]: crate::Keyboard::discover

mod key_state;
mod send_input;

use crate::backend::KeyboardBackend;
use crate::config::QueryMode;
use crate::error::Result;
use crate::input::InputRecord;
use crate::state::{KeyState, KeyboardState};
use crate::vkey::VirtualKey;

/// Native backend over the Win32 keyboard-and-mouse API.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsBackend {
    mode: QueryMode,
}

impl WindowsBackend {
    pub fn new(mode: QueryMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }
}

impl KeyboardBackend for WindowsBackend {
    fn name(&self) -> &str {
        "windows"
    }

    fn key_state(&self, vk: VirtualKey) -> Result<KeyState> {
        Ok(key_state::key_state(vk, self.mode))
    }

    fn keyboard_state(&self) -> Result<KeyboardState> {
        key_state::keyboard_state()
    }

    fn send_input(&mut self, records: &[InputRecord]) -> Result<u32> {
        send_input::send(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips() {
        assert_eq!(WindowsBackend::new(QueryMode::Async).mode(), QueryMode::Async);
        assert_eq!(WindowsBackend::default().mode(), QueryMode::Sync);
        assert_eq!(WindowsBackend::default().name(), "windows");
    }

    #[test]
    fn keyboard_state_is_readable() {
        let backend = WindowsBackend::new(QueryMode::Sync);
        assert!(backend.keyboard_state().is_ok());
        assert!(backend.key_state(VirtualKey::CAPITAL).is_ok());
    }
}
