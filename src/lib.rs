//! keyprobe: virtual-key state queries for Rust.
//!
//! A thin layer over the host's native keyboard and mouse API:
//! - **state**: is a key or mouse button down, is a lock key toggled,
//!   a snapshot of all 256 virtual keys,
//! - **lookup**: a static, case-insensitive table mapping key names to
//!   virtual-key codes and back,
//! - **injection**: forward raw mouse / keyboard / hardware records to the
//!   OS (`SendInput` on Windows).
//!
//! Start with [`Keyboard::discover`]. For tests and headless hosts, wrap a
//! [`backends::virtual_input::VirtualKeyboard`] with [`Keyboard::new`].

pub mod backend;
pub mod backends;
pub mod config;
pub mod error;
pub mod input;
pub mod keyboard;
pub mod state;
pub mod table;
pub mod vkey;

pub use backend::KeyboardBackend;
pub use config::{Config, QueryMode};
pub use error::{Error, Result};
pub use input::{InputRecord, MouseButton};
pub use keyboard::Keyboard;
pub use state::{KeyState, KeyboardState};
pub use table::{get_key_code, get_key_name, virtual_key_codes, virtual_key_codes2, virtual_key_names};
pub use vkey::{Key, VirtualKey};
