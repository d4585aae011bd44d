//! In-memory keyboard backend.
//!
//! [`VirtualKeyboard`] keeps its own 256-key state and applies injected
//! records to it the way the OS would:
//! - key down/up updates the key; a left/right modifier also updates its
//!   generic counterpart (`lshift` → `shift`), and the generic key stays down
//!   while it or either side is held,
//! - every up→down transition flips the key's toggle bit,
//! - mouse button flags update the button keys (`lbutton`, `xbutton1`, ...),
//! - `KEYEVENTF_UNICODE`, `KEYEVENTF_SCANCODE` and hardware records are
//!   recorded but change no state (the OS ignores `wVk` for the first two).
//!
//! Every record is kept in order so callers can inspect exactly what was sent.

use crate::backend::KeyboardBackend;
use crate::error::Result;
use crate::input::{
    InputRecord, MouseButton, KEYEVENTF_KEYUP, KEYEVENTF_SCANCODE, KEYEVENTF_UNICODE,
};
use crate::state::{KeyState, KeyboardState, DOWN_BIT, TOGGLED_BIT};
use crate::vkey::VirtualKey;

/// Keyboard backend that lives entirely in memory.
#[derive(Debug)]
pub struct VirtualKeyboard {
    name: String,
    keys: [u8; 256],
    /// Generic modifiers (`shift`/`control`/`menu`) pressed as themselves.
    held_generic: [bool; 3],
    sent: Vec<InputRecord>,
}

impl Default for VirtualKeyboard {
    fn default() -> Self {
        Self::new("virtual")
    }
}

impl VirtualKeyboard {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            keys: [0; 256],
            held_generic: [false; 3],
            sent: Vec::new(),
        }
    }

    /// Press a key directly, without recording an injected record.
    pub fn press(&mut self, vk: VirtualKey) {
        self.set_down(vk, true);
    }

    pub fn release(&mut self, vk: VirtualKey) {
        self.set_down(vk, false);
    }

    /// Force the toggle bit (e.g. start with Caps Lock on).
    pub fn set_toggled(&mut self, vk: VirtualKey, toggled: bool) {
        let slot = &mut self.keys[vk.index()];
        if toggled {
            *slot |= TOGGLED_BIT;
        } else {
            *slot &= !TOGGLED_BIT;
        }
    }

    /// Records received through [`KeyboardBackend::send_input`], oldest first.
    pub fn sent(&self) -> &[InputRecord] {
        &self.sent
    }

    /// Drain the recorded records.
    pub fn take_sent(&mut self) -> Vec<InputRecord> {
        std::mem::take(&mut self.sent)
    }

    fn set_down(&mut self, vk: VirtualKey, down: bool) {
        let slot = &mut self.keys[vk.index()];
        let was_down = *slot & DOWN_BIT != 0;
        if down {
            if !was_down {
                *slot ^= TOGGLED_BIT;
            }
            *slot |= DOWN_BIT;
        } else {
            *slot &= !DOWN_BIT;
        }

        if let Some(slot) = generic_slot(vk) {
            self.held_generic[slot] = down;
            self.refresh_generic(vk);
        } else if let Some(generic) = vk.generic_modifier() {
            self.refresh_generic(generic);
        }
    }

    /// Generic modifier is down while it was pressed directly or either side is held.
    fn refresh_generic(&mut self, generic: VirtualKey) {
        let (slot, left, right) = match generic {
            VirtualKey::SHIFT => (0, VirtualKey::LSHIFT, VirtualKey::RSHIFT),
            VirtualKey::CONTROL => (1, VirtualKey::LCONTROL, VirtualKey::RCONTROL),
            _ => (2, VirtualKey::LMENU, VirtualKey::RMENU),
        };
        let sides = (self.keys[left.index()] | self.keys[right.index()]) & DOWN_BIT != 0;
        let key = &mut self.keys[generic.index()];
        if self.held_generic[slot] || sides {
            *key |= DOWN_BIT;
        } else {
            *key &= !DOWN_BIT;
        }
    }

    fn apply(&mut self, record: &InputRecord) {
        match *record {
            InputRecord::Keyboard(k) => {
                if k.flags & (KEYEVENTF_UNICODE | KEYEVENTF_SCANCODE) != 0
                    || k.vk == 0
                    || k.vk > 0xFF
                {
                    return;
                }
                self.set_down(VirtualKey(k.vk as u8), k.flags & KEYEVENTF_KEYUP == 0);
            }
            InputRecord::Mouse(m) => {
                for (button, pressed) in MouseButton::transitions(m.flags, m.mouse_data) {
                    self.set_down(button.virtual_key(), pressed);
                }
            }
            InputRecord::Hardware(_) => {}
        }
    }
}

fn generic_slot(vk: VirtualKey) -> Option<usize> {
    match vk {
        VirtualKey::SHIFT => Some(0),
        VirtualKey::CONTROL => Some(1),
        VirtualKey::MENU => Some(2),
        _ => None,
    }
}

impl KeyboardBackend for VirtualKeyboard {
    fn name(&self) -> &str {
        &self.name
    }

    fn key_state(&self, vk: VirtualKey) -> Result<KeyState> {
        Ok(KeyState::from_byte(self.keys[vk.index()]))
    }

    fn keyboard_state(&self) -> Result<KeyboardState> {
        Ok(KeyboardState::from_bytes(self.keys))
    }

    fn send_input(&mut self, records: &[InputRecord]) -> Result<u32> {
        for record in records {
            self.apply(record);
            self.sent.push(*record);
        }
        Ok(records.len() as u32)
    }
}
