//! Keyboard backends for `keyprobe`.
//!
//! Implementations of [`KeyboardBackend`] for concrete input sources.
//!
//! # Feature flags
//! - **`native`** enables the Windows backend (default in this build).
//! - **`debug-log`** traces every record handed to `SendInput`.
//!
//! On hosts without a native backend, [`default_backend`] returns
//! [`UnsupportedBackend`]. Use [`virtual_input::VirtualKeyboard`] for tests
//! and headless runs.

use crate::backend::KeyboardBackend;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::InputRecord;
use crate::state::{KeyState, KeyboardState};
use crate::vkey::VirtualKey;

pub mod virtual_input;

#[cfg(all(feature = "native", target_os = "windows"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "native", target_os = "windows"))))]
pub mod windows;

/// Backend that rejects every operation with [`Error::Unsupported`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedBackend;

impl KeyboardBackend for UnsupportedBackend {
    fn name(&self) -> &str {
        "unsupported"
    }

    fn key_state(&self, _vk: VirtualKey) -> Result<KeyState> {
        Err(Error::Unsupported("key state query"))
    }

    fn keyboard_state(&self) -> Result<KeyboardState> {
        Err(Error::Unsupported("keyboard state query"))
    }

    fn send_input(&mut self, _records: &[InputRecord]) -> Result<u32> {
        Err(Error::Unsupported("input injection"))
    }
}

/// Best native backend for this build and host.
pub fn default_backend(config: &Config) -> Box<dyn KeyboardBackend> {
    #[cfg(all(feature = "native", target_os = "windows"))]
    {
        log::info!("using windows keyboard backend ({:?} queries)", config.query);
        Box::new(windows::WindowsBackend::new(config.query))
    }

    #[cfg(not(all(feature = "native", target_os = "windows")))]
    {
        let _ = config;
        log::info!("no native keyboard backend for this platform");
        Box::new(UnsupportedBackend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_backend_reports_each_operation() {
        let mut b = UnsupportedBackend;
        assert!(matches!(
            b.key_state(VirtualKey::SHIFT),
            Err(Error::Unsupported("key state query"))
        ));
        assert!(matches!(b.keyboard_state(), Err(Error::Unsupported(_))));
        assert!(matches!(b.send_input(&[]), Err(Error::Unsupported(_))));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn default_backend_off_windows_is_unsupported() {
        assert_eq!(default_backend(&Config::default()).name(), "unsupported");
    }
}
