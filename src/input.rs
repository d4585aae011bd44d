//! Synthetic input records.
//!
//! These mirror the native `INPUT` union members field for field:
//! - [`MouseInput`] ↔ `MOUSEINPUT`
//! - [`KeyboardInput`] ↔ `KEYBDINPUT`
//! - [`HardwareInput`] ↔ `HARDWAREINPUT`
//!
//! Values are passed through untouched. In particular `dx`/`dy` are relative
//! mickeys unless [`MOUSEEVENTF_ABSOLUTE`] is set, in which case they are
//! normalized `0..=65535` screen coordinates. No conversion happens here.
//!
//! Injecting input from inside an input callback (a low-level hook, a
//! `WM_KEYDOWN` handler, ...) re-enters the OS input queue and is best avoided.

use crate::vkey::VirtualKey;

pub const MOUSEEVENTF_MOVE: u32 = 0x0001;
pub const MOUSEEVENTF_LEFTDOWN: u32 = 0x0002;
pub const MOUSEEVENTF_LEFTUP: u32 = 0x0004;
pub const MOUSEEVENTF_RIGHTDOWN: u32 = 0x0008;
pub const MOUSEEVENTF_RIGHTUP: u32 = 0x0010;
pub const MOUSEEVENTF_MIDDLEDOWN: u32 = 0x0020;
pub const MOUSEEVENTF_MIDDLEUP: u32 = 0x0040;
pub const MOUSEEVENTF_XDOWN: u32 = 0x0080;
pub const MOUSEEVENTF_XUP: u32 = 0x0100;
pub const MOUSEEVENTF_WHEEL: u32 = 0x0800;
pub const MOUSEEVENTF_HWHEEL: u32 = 0x1000;
pub const MOUSEEVENTF_MOVE_NOCOALESCE: u32 = 0x2000;
pub const MOUSEEVENTF_VIRTUALDESK: u32 = 0x4000;
pub const MOUSEEVENTF_ABSOLUTE: u32 = 0x8000;

/// `mouse_data` bits that select the X button for `XDOWN`/`XUP`.
pub const XBUTTON1: i32 = 0x0001;
pub const XBUTTON2: i32 = 0x0002;

/// One wheel notch.
pub const WHEEL_DELTA: i32 = 120;

pub const KEYEVENTF_EXTENDEDKEY: u32 = 0x0001;
pub const KEYEVENTF_KEYUP: u32 = 0x0002;
pub const KEYEVENTF_UNICODE: u32 = 0x0004;
pub const KEYEVENTF_SCANCODE: u32 = 0x0008;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseInput {
    pub dx: i32,
    pub dy: i32,
    /// Wheel delta for `WHEEL`/`HWHEEL`, X button bits for `XDOWN`/`XUP`.
    pub mouse_data: i32,
    /// `MOUSEEVENTF_*` bits.
    pub flags: u32,
    /// Timestamp in ms; `0` lets the OS supply one.
    pub time: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardInput {
    /// Virtual key code; ignored by the OS when `KEYEVENTF_UNICODE` is set.
    pub vk: u16,
    pub scan: u16,
    /// `KEYEVENTF_*` bits.
    pub flags: u32,
    pub time: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HardwareInput {
    pub msg: u32,
    pub w_param_l: u16,
    pub w_param_h: u16,
}

/// A single record handed to the injection backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputRecord {
    Mouse(MouseInput),
    Keyboard(KeyboardInput),
    Hardware(HardwareInput),
}

impl InputRecord {
    pub fn mouse(dx: i32, dy: i32, mouse_data: i32, flags: u32, time: u32) -> Self {
        InputRecord::Mouse(MouseInput {
            dx,
            dy,
            mouse_data,
            flags,
            time,
        })
    }

    pub fn keyboard(vk: u16, scan: u16, flags: u32, time: u32) -> Self {
        InputRecord::Keyboard(KeyboardInput {
            vk,
            scan,
            flags,
            time,
        })
    }

    pub fn hardware(msg: u32, w_param_l: u16, w_param_h: u16) -> Self {
        InputRecord::Hardware(HardwareInput {
            msg,
            w_param_l,
            w_param_h,
        })
    }

    pub fn key_down(vk: VirtualKey) -> Self {
        Self::keyboard(vk.code() as u16, 0, 0, 0)
    }

    pub fn key_up(vk: VirtualKey) -> Self {
        Self::keyboard(vk.code() as u16, 0, KEYEVENTF_KEYUP, 0)
    }

    pub fn button_down(button: MouseButton) -> Self {
        Self::mouse(0, 0, button.mouse_data(), button.down_flag(), 0)
    }

    pub fn button_up(button: MouseButton) -> Self {
        Self::mouse(0, 0, button.mouse_data(), button.up_flag(), 0)
    }
}

/// Mouse buttons addressable through both state queries and injection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    X1,
    X2,
}

impl MouseButton {
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::X1,
        MouseButton::X2,
    ];

    pub fn virtual_key(self) -> VirtualKey {
        match self {
            MouseButton::Left => VirtualKey::LBUTTON,
            MouseButton::Right => VirtualKey::RBUTTON,
            MouseButton::Middle => VirtualKey::MBUTTON,
            MouseButton::X1 => VirtualKey::XBUTTON1,
            MouseButton::X2 => VirtualKey::XBUTTON2,
        }
    }

    pub fn down_flag(self) -> u32 {
        match self {
            MouseButton::Left => MOUSEEVENTF_LEFTDOWN,
            MouseButton::Right => MOUSEEVENTF_RIGHTDOWN,
            MouseButton::Middle => MOUSEEVENTF_MIDDLEDOWN,
            MouseButton::X1 | MouseButton::X2 => MOUSEEVENTF_XDOWN,
        }
    }

    pub fn up_flag(self) -> u32 {
        match self {
            MouseButton::Left => MOUSEEVENTF_LEFTUP,
            MouseButton::Right => MOUSEEVENTF_RIGHTUP,
            MouseButton::Middle => MOUSEEVENTF_MIDDLEUP,
            MouseButton::X1 | MouseButton::X2 => MOUSEEVENTF_XUP,
        }
    }

    pub fn mouse_data(self) -> i32 {
        match self {
            MouseButton::X1 => XBUTTON1,
            MouseButton::X2 => XBUTTON2,
            _ => 0,
        }
    }

    /// Button transitions encoded in one `MOUSEINPUT`, as `(button, pressed)`.
    ///
    /// Downs are listed before ups so a combined down|up record reads as a click.
    pub fn transitions(flags: u32, mouse_data: i32) -> Vec<(MouseButton, bool)> {
        let mut out = Vec::new();
        for pressed in [true, false] {
            for button in MouseButton::ALL {
                let flag = if pressed {
                    button.down_flag()
                } else {
                    button.up_flag()
                };
                if flags & flag == 0 {
                    continue;
                }
                let data = button.mouse_data();
                if data != 0 && mouse_data & data == 0 {
                    continue;
                }
                out.push((button, pressed));
            }
        }
        out
    }
}
