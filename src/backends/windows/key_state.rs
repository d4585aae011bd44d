use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    GetAsyncKeyState, GetKeyState, GetKeyboardState,
};

use crate::config::QueryMode;
use crate::error::{Error, Result};
use crate::state::{KeyState, KeyboardState};
use crate::vkey::VirtualKey;

/// Down bit from the configured call; toggle bit always from `GetKeyState`.
///
/// `GetAsyncKeyState`'s low bit means "pressed since the last call", not toggled.
pub(super) fn key_state(vk: VirtualKey, mode: QueryMode) -> KeyState {
    let code = vk.code() as i32;
    let queued = unsafe { GetKeyState(code) };
    match mode {
        QueryMode::Sync => KeyState::from_raw(queued),
        QueryMode::Async => merge_async(queued, unsafe { GetAsyncKeyState(code) }),
    }
}

fn merge_async(queued: i16, physical: i16) -> KeyState {
    KeyState {
        down: KeyState::from_raw(physical).down,
        toggled: KeyState::from_raw(queued).toggled,
    }
}

pub(super) fn keyboard_state() -> Result<KeyboardState> {
    let mut buf = [0u8; 256];
    let ok = unsafe { GetKeyboardState(buf.as_mut_ptr()) };
    if ok == 0 {
        let code = unsafe { GetLastError() };
        log::warn!("GetKeyboardState failed (os error {code})");
        return Err(Error::Os {
            call: "GetKeyboardState",
            code,
        });
    }
    Ok(KeyboardState::from_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn async_down_comes_from_physical_state() {
        // Physically held, queue not yet caught up.
        assert_eq!(
            merge_async(0, i16::MIN),
            KeyState { down: true, toggled: false }
        );
        // Queue says down, physical key already released.
        assert_eq!(merge_async(i16::MIN, 0), KeyState::UP);
    }

    #[test]
    fn async_pressed_since_last_call_bit_is_not_toggle() {
        // Low bit of GetAsyncKeyState only: not toggled.
        assert_eq!(merge_async(0, 1), KeyState::UP);
        // Low bit of GetKeyState: toggled, regardless of the async value.
        assert_eq!(
            merge_async(1, 0),
            KeyState { down: false, toggled: true }
        );
        assert_eq!(
            merge_async(1, 0xFF81u16 as i16),
            KeyState { down: true, toggled: true }
        );
    }

    #[test]
    fn live_queries_do_not_panic() {
        for mode in [QueryMode::Sync, QueryMode::Async] {
            let _ = key_state(VirtualKey::SHIFT, mode);
        }
    }
}
