//! Key state values.
//!
//! [`KeyState`] is the state of one key at query time. [`KeyboardState`] is an
//! **owned**, read-only snapshot of all 256 virtual keys, as returned by
//! `GetKeyboardState` on Windows.
//!
//! # Bit conventions
//! - A raw `SHORT` from `GetKeyState`: high bit = down, low bit = toggled.
//! - A byte in the 256-entry keyboard buffer: `0x80` = down, `0x01` = toggled.
//!
//! Toggling is tracked by the OS for every key, but is only meaningful for
//! lock keys (Caps Lock, Num Lock, Scroll Lock).
//!
//! # Example
//! ```no_run
//! use keyprobe::Keyboard;
//!
//! let kb = Keyboard::discover();
//! let snap = kb.keyboard_state().expect("keyboard state");
//! for vk in snap.pressed() {
//!     println!("{vk} is down");
//! }
//! ```

use crate::vkey::VirtualKey;

pub(crate) const DOWN_BIT: u8 = 0x80;
pub(crate) const TOGGLED_BIT: u8 = 0x01;

/// Down/up state of a single virtual key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub down: bool,
    pub toggled: bool,
}

impl KeyState {
    pub const UP: KeyState = KeyState {
        down: false,
        toggled: false,
    };

    /// Decode the `SHORT` returned by `GetKeyState` / `GetAsyncKeyState`.
    #[inline]
    pub fn from_raw(raw: i16) -> Self {
        Self {
            down: raw < 0,
            toggled: raw & 1 != 0,
        }
    }

    /// Decode one byte of the 256-entry keyboard buffer.
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        Self {
            down: byte & DOWN_BIT != 0,
            toggled: byte & TOGGLED_BIT != 0,
        }
    }

    #[inline]
    pub fn to_byte(self) -> u8 {
        let mut b = 0;
        if self.down {
            b |= DOWN_BIT;
        }
        if self.toggled {
            b |= TOGGLED_BIT;
        }
        b
    }

    #[inline]
    pub fn is_up(self) -> bool {
        !self.down
    }

    /// `1` if down, `0` if up.
    #[inline]
    pub fn as_flag(self) -> u8 {
        self.down as u8
    }
}

/// Owned snapshot of all 256 virtual key states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardState([u8; 256]);

impl Default for KeyboardState {
    fn default() -> Self {
        Self([0; 256])
    }
}

impl KeyboardState {
    /// Wrap a raw `GetKeyboardState` buffer.
    #[inline]
    pub fn from_bytes(bytes: [u8; 256]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn get(&self, vk: VirtualKey) -> KeyState {
        KeyState::from_byte(self.0[vk.index()])
    }

    #[inline]
    pub fn is_down(&self, vk: VirtualKey) -> bool {
        self.get(vk).down
    }

    /// Iterate `(key, state)` for every code `0..=255`.
    pub fn iter(&self) -> impl Iterator<Item = (VirtualKey, KeyState)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &b)| (VirtualKey(i as u8), KeyState::from_byte(b)))
    }

    /// Keys currently held down, in code order.
    pub fn pressed(&self) -> impl Iterator<Item = VirtualKey> + '_ {
        self.iter().filter(|(_, s)| s.down).map(|(vk, _)| vk)
    }

    /// One value per key: `1` if down, `0` if up.
    pub fn to_flags(&self) -> [u8; 256] {
        let mut out = [0u8; 256];
        for (slot, &b) in out.iter_mut().zip(self.0.iter()) {
            *slot = (b & DOWN_BIT != 0) as u8;
        }
        out
    }

    /// Consume the snapshot and return the raw buffer.
    #[inline]
    pub fn into_inner(self) -> [u8; 256] {
        self.0
    }
}
