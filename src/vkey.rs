//! Virtual-key identifiers.
//!
//! A key can be named two ways:
//! - by numeric code (`0..=255`, the Windows `VK_*` values), or
//! - by a case-insensitive name from the lookup table (see [`crate::table`]).
//!
//! [`VirtualKey`] is the resolved form. [`Key`] is what callers hand in before
//! resolution; every public query accepts `impl Into<Key>`, so `"shift"`, `0x10`
//! and `VirtualKey::SHIFT` are interchangeable.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::table;

/// A resolved virtual-key code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualKey(pub u8);

impl VirtualKey {
    pub const LBUTTON: Self = Self(0x01);
    pub const RBUTTON: Self = Self(0x02);
    pub const MBUTTON: Self = Self(0x04);
    pub const XBUTTON1: Self = Self(0x05);
    pub const XBUTTON2: Self = Self(0x06);
    pub const BACK: Self = Self(0x08);
    pub const TAB: Self = Self(0x09);
    pub const RETURN: Self = Self(0x0D);
    pub const SHIFT: Self = Self(0x10);
    pub const CONTROL: Self = Self(0x11);
    pub const MENU: Self = Self(0x12);
    pub const CAPITAL: Self = Self(0x14);
    pub const ESCAPE: Self = Self(0x1B);
    pub const SPACE: Self = Self(0x20);
    pub const NUMLOCK: Self = Self(0x90);
    pub const SCROLL: Self = Self(0x91);
    pub const LSHIFT: Self = Self(0xA0);
    pub const RSHIFT: Self = Self(0xA1);
    pub const LCONTROL: Self = Self(0xA2);
    pub const RCONTROL: Self = Self(0xA3);
    pub const LMENU: Self = Self(0xA4);
    pub const RMENU: Self = Self(0xA5);

    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Canonical table name, if the code is defined.
    pub fn name(self) -> Option<&'static str> {
        table::get_key_name(self.0 as u32)
    }

    /// Whether this code names a mouse button rather than a keyboard key.
    pub fn is_mouse_button(self) -> bool {
        matches!(self.0, 0x01 | 0x02 | 0x04 | 0x05 | 0x06)
    }

    /// Generic modifier (`SHIFT` / `CONTROL` / `MENU`) for a left/right variant.
    pub fn generic_modifier(self) -> Option<VirtualKey> {
        match self {
            Self::LSHIFT | Self::RSHIFT => Some(Self::SHIFT),
            Self::LCONTROL | Self::RCONTROL => Some(Self::CONTROL),
            Self::LMENU | Self::RMENU => Some(Self::MENU),
            _ => None,
        }
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

impl FromStr for VirtualKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        table::get_key_code(s)
            .map(VirtualKey)
            .ok_or_else(|| Error::UnknownKey(s.to_string()))
    }
}

impl From<u8> for VirtualKey {
    fn from(code: u8) -> Self {
        VirtualKey(code)
    }
}

/// Unresolved key argument: a numeric code or a symbolic name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Code(i64),
    Name(String),
}

impl Key {
    /// Numeric codes are range-checked here; names go through `lookup`.
    pub(crate) fn resolve_with(
        &self,
        lookup: impl FnOnce(&str) -> Option<u8>,
    ) -> Result<VirtualKey> {
        match self {
            Key::Code(code) => u8::try_from(*code)
                .map(VirtualKey)
                .map_err(|_| Error::InvalidCode(*code)),
            Key::Name(name) => lookup(name)
                .map(VirtualKey)
                .ok_or_else(|| Error::UnknownKey(name.clone())),
        }
    }

    /// Resolve against the static table only.
    pub fn resolve(&self) -> Result<VirtualKey> {
        self.resolve_with(table::get_key_code)
    }
}

impl From<VirtualKey> for Key {
    fn from(vk: VirtualKey) -> Self {
        Key::Code(vk.0 as i64)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Name(name.clone())
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Name(c.to_string())
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Key {
            fn from(code: $t) -> Self {
                Key::Code(code as i64)
            }
        })*
    };
}

key_from_int!(u8, u16, u32, i32, i64);
