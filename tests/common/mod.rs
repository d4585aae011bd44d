use keyprobe::backends::virtual_input::VirtualKeyboard;
use keyprobe::{Config, Keyboard};

/// Keyboard over a fresh in-memory backend.
pub fn virtual_keyboard() -> Keyboard<VirtualKeyboard> {
    Keyboard::new(VirtualKeyboard::new("test"))
}

/// Keyboard over a fresh in-memory backend with a TOML config applied.
#[allow(dead_code)]
pub fn configured_keyboard(toml: &str) -> Keyboard<VirtualKeyboard> {
    let config = Config::from_toml_str(toml).expect("valid test config");
    Keyboard::with_config(VirtualKeyboard::new("test"), &config).expect("aliases resolve")
}
