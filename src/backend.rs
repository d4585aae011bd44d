use crate::error::Result;
use crate::input::InputRecord;
use crate::state::{KeyState, KeyboardState};
use crate::vkey::VirtualKey;

/// The single seam between keyprobe and the host input system.
///
/// Implementations answer state queries and forward synthetic input. They do
/// no name resolution; [`Keyboard`](crate::Keyboard) hands them resolved
/// [`VirtualKey`]s.
pub trait KeyboardBackend {
    /// Short backend label for logs (`"windows"`, `"virtual"`, ...).
    fn name(&self) -> &str;

    fn key_state(&self, vk: VirtualKey) -> Result<KeyState>;

    fn keyboard_state(&self) -> Result<KeyboardState>;

    /// Forward records in order. Returns the number the host accepted.
    fn send_input(&mut self, records: &[InputRecord]) -> Result<u32>;
}

impl<B: KeyboardBackend + ?Sized> KeyboardBackend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn key_state(&self, vk: VirtualKey) -> Result<KeyState> {
        (**self).key_state(vk)
    }

    fn keyboard_state(&self) -> Result<KeyboardState> {
        (**self).keyboard_state()
    }

    fn send_input(&mut self, records: &[InputRecord]) -> Result<u32> {
        (**self).send_input(records)
    }
}
