//! High-level keyboard facade.
//!
//! [`Keyboard`] resolves key names (static table plus configured aliases) and
//! forwards to a [`KeyboardBackend`]. It holds no key state of its own. Every
//! query goes to the backend at call time.
//!
//! ```no_run
//! use keyprobe::Keyboard;
//!
//! let mut kb = Keyboard::discover();
//! if kb.ctrl_down()? && kb.key_down("s")? {
//!     println!("save chord held");
//! }
//! kb.tap_key("f5")?;
//! # Ok::<(), keyprobe::Error>(())
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::backend::KeyboardBackend;
use crate::backends::default_backend;
use crate::config::Config;
use crate::error::Result;
use crate::input::{InputRecord, MouseButton};
use crate::state::{KeyState, KeyboardState};
use crate::table;
use crate::vkey::{Key, VirtualKey};

/// Generates `_down` / `_up` predicate pairs (plus optional aliases) for fixed keys.
macro_rules! key_shortcuts {
    ($($label:literal, $vk:expr => $down:ident / $up:ident $(, $down_alias:ident / $up_alias:ident)?;)*) => {
        $(
            #[doc = concat!("Whether ", $label, " is down.")]
            pub fn $down(&self) -> Result<bool> {
                self.vk_down($vk)
            }

            #[doc = concat!("Whether ", $label, " is up.")]
            pub fn $up(&self) -> Result<bool> {
                self.vk_down($vk).map(|down| !down)
            }

            $(
                #[doc = concat!("Alias of [`Self::", stringify!($down), "`].")]
                pub fn $down_alias(&self) -> Result<bool> {
                    self.$down()
                }

                #[doc = concat!("Alias of [`Self::", stringify!($up), "`].")]
                pub fn $up_alias(&self) -> Result<bool> {
                    self.$up()
                }
            )?
        )*
    };
}

/// Name-resolving front end over a [`KeyboardBackend`].
#[derive(Debug)]
pub struct Keyboard<B = Box<dyn KeyboardBackend>> {
    backend: B,
    aliases: HashMap<String, u8>,
    log_injections: bool,
}

impl Keyboard<Box<dyn KeyboardBackend>> {
    /// Keyboard over the best native backend with default settings.
    pub fn discover() -> Self {
        Self::new(default_backend(&Config::default()))
    }

    /// Keyboard over the best native backend, configured by `config`.
    pub fn discover_with(config: &Config) -> Result<Self> {
        Self::with_config(default_backend(config), config)
    }
}

impl<B: KeyboardBackend> Keyboard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            aliases: HashMap::new(),
            log_injections: true,
        }
    }

    /// Apply aliases and logging settings. The query mode is a backend concern
    /// and is read when the backend is built (see [`Self::discover_with`]).
    pub fn with_config(backend: B, config: &Config) -> Result<Self> {
        Ok(Self {
            backend,
            aliases: config.resolve_aliases()?,
            log_injections: config.log_injections,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }

    // ---- lookup ------------------------------------------------------------

    /// Resolve a code or name (aliases first, then the static table).
    pub fn resolve(&self, key: impl Into<Key>) -> Result<VirtualKey> {
        key.into().resolve_with(|name| self.lookup(name))
    }

    fn lookup(&self, name: &str) -> Option<u8> {
        let normalized = table::normalize(name)?;
        self.aliases
            .get(&normalized)
            .copied()
            .or_else(|| table::get_key_code(name))
    }

    /// Code for a key name, or `None` if unrecognised.
    pub fn get_key_code(&self, name: &str) -> Option<u8> {
        self.lookup(name)
    }

    /// Canonical name for a code, or `None` if undefined or above 255.
    pub fn get_key_name(&self, code: u32) -> Option<&'static str> {
        table::get_key_name(code)
    }

    pub fn virtual_key_codes(&self) -> &'static HashMap<&'static str, u8> {
        table::virtual_key_codes()
    }

    pub fn virtual_key_codes2(&self) -> &'static HashMap<&'static str, u8> {
        table::virtual_key_codes2()
    }

    pub fn virtual_key_names(&self) -> &'static BTreeMap<u8, &'static str> {
        table::virtual_key_names()
    }

    // ---- state -------------------------------------------------------------

    pub fn state(&self, key: impl Into<Key>) -> Result<KeyState> {
        let vk = self.resolve(key)?;
        self.backend.key_state(vk)
    }

    /// `1` if the key is down, `0` if up.
    pub fn get_key_state(&self, key: impl Into<Key>) -> Result<u8> {
        self.state(key).map(KeyState::as_flag)
    }

    /// Alias of [`Self::get_key_state`].
    pub fn key(&self, key: impl Into<Key>) -> Result<u8> {
        self.get_key_state(key)
    }

    /// 256 values, `1` for each key that is down.
    pub fn get_keyboard_state(&self) -> Result<[u8; 256]> {
        self.keyboard_state().map(|snap| snap.to_flags())
    }

    /// Full snapshot including toggle bits.
    pub fn keyboard_state(&self) -> Result<KeyboardState> {
        self.backend.keyboard_state()
    }

    pub fn key_toggled(&self, key: impl Into<Key>) -> Result<bool> {
        self.state(key).map(|s| s.toggled)
    }

    pub fn key_down(&self, key: impl Into<Key>) -> Result<bool> {
        self.state(key).map(|s| s.down)
    }

    pub fn key_up(&self, key: impl Into<Key>) -> Result<bool> {
        self.state(key).map(KeyState::is_up)
    }

    /// `true` when every key is down. All keys are resolved before any query,
    /// so an unknown name fails even if an earlier key is already up.
    pub fn keys_down<I>(&self, keys: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        self.all_keys(keys, true)
    }

    /// `true` when every key is up.
    pub fn keys_up<I>(&self, keys: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        self.all_keys(keys, false)
    }

    fn all_keys<I>(&self, keys: I, want_down: bool) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let vks = keys
            .into_iter()
            .map(|k| self.resolve(k))
            .collect::<Result<Vec<_>>>()?;
        for vk in vks {
            if self.backend.key_state(vk)?.down != want_down {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn vk_down(&self, vk: VirtualKey) -> Result<bool> {
        self.backend.key_state(vk).map(|s| s.down)
    }

    pub fn button_down(&self, button: MouseButton) -> Result<bool> {
        self.vk_down(button.virtual_key())
    }

    pub fn button_up(&self, button: MouseButton) -> Result<bool> {
        self.button_down(button).map(|down| !down)
    }

    key_shortcuts! {
        "ALT", VirtualKey::MENU => menu_down / menu_up, alt_down / alt_up;
        "CTRL", VirtualKey::CONTROL => control_down / control_up, ctrl_down / ctrl_up;
        "SHIFT", VirtualKey::SHIFT => shift_down / shift_up;
        "the left SHIFT key", VirtualKey::LSHIFT => lshift_down / lshift_up;
        "the right SHIFT key", VirtualKey::RSHIFT => rshift_down / rshift_up;
        "the left CTRL key", VirtualKey::LCONTROL => lcontrol_down / lcontrol_up, lctrl_down / lctrl_up;
        "the right CTRL key", VirtualKey::RCONTROL => rcontrol_down / rcontrol_up, rctrl_down / rctrl_up;
        "the left ALT key", VirtualKey::LMENU => lmenu_down / lmenu_up, lalt_down / lalt_up;
        "the right ALT key", VirtualKey::RMENU => rmenu_down / rmenu_up, ralt_down / ralt_up;
        "the left mouse button", VirtualKey::LBUTTON => lbutton_down / lbutton_up;
        "the right mouse button", VirtualKey::RBUTTON => rbutton_down / rbutton_up;
        "the middle mouse button", VirtualKey::MBUTTON => mbutton_down / mbutton_up;
        "the X1 mouse button", VirtualKey::XBUTTON1 => xbutton1_down / xbutton1_up;
        "the X2 mouse button", VirtualKey::XBUTTON2 => xbutton2_down / xbutton2_up;
    }

    // ---- injection ---------------------------------------------------------
    //
    // Avoid calling these from inside input callbacks: the records go straight
    // back into the input queue being processed.

    /// Send one `MOUSEINPUT`. Returns the number of records the host accepted.
    ///
    /// ```no_run
    /// use keyprobe::input::{MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP};
    /// # let mut kb = keyprobe::Keyboard::discover();
    /// // Left click at the centre of the primary screen.
    /// let flags = MOUSEEVENTF_ABSOLUTE | MOUSEEVENTF_LEFTDOWN | MOUSEEVENTF_LEFTUP;
    /// kb.send_mouse_input(32768, 32768, 0, flags, 0)?;
    /// # Ok::<(), keyprobe::Error>(())
    /// ```
    pub fn send_mouse_input(
        &mut self,
        dx: i32,
        dy: i32,
        mouse_data: i32,
        flags: u32,
        time: u32,
    ) -> Result<u32> {
        self.send_inputs(&[InputRecord::mouse(dx, dy, mouse_data, flags, time)])
    }

    /// Send one `KEYBDINPUT`.
    pub fn send_keyboard_input(&mut self, vk: u16, scan: u16, flags: u32, time: u32) -> Result<u32> {
        self.send_inputs(&[InputRecord::keyboard(vk, scan, flags, time)])
    }

    /// Send one `HARDWAREINPUT`.
    pub fn send_hardware_input(&mut self, msg: u32, w_param_l: u16, w_param_h: u16) -> Result<u32> {
        self.send_inputs(&[InputRecord::hardware(msg, w_param_l, w_param_h)])
    }

    /// Send a batch in a single backend call.
    pub fn send_inputs(&mut self, records: &[InputRecord]) -> Result<u32> {
        if self.log_injections {
            log::debug!(
                "injecting {} record(s) via {} backend",
                records.len(),
                self.backend.name()
            );
        }
        self.backend.send_input(records)
    }

    pub fn press_key(&mut self, key: impl Into<Key>) -> Result<u32> {
        let vk = self.resolve(key)?;
        self.send_inputs(&[InputRecord::key_down(vk)])
    }

    pub fn release_key(&mut self, key: impl Into<Key>) -> Result<u32> {
        let vk = self.resolve(key)?;
        self.send_inputs(&[InputRecord::key_up(vk)])
    }

    /// Press and release in one batch.
    pub fn tap_key(&mut self, key: impl Into<Key>) -> Result<u32> {
        let vk = self.resolve(key)?;
        self.send_inputs(&[InputRecord::key_down(vk), InputRecord::key_up(vk)])
    }

    /// Button down and up in one batch, at the current cursor position.
    pub fn click(&mut self, button: MouseButton) -> Result<u32> {
        self.send_inputs(&[InputRecord::button_down(button), InputRecord::button_up(button)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::VirtualKeyboard;
    use crate::backends::UnsupportedBackend;
    use crate::error::Error;

    fn keyboard() -> Keyboard<VirtualKeyboard> {
        Keyboard::new(VirtualKeyboard::default())
    }

    #[test]
    fn debug_output_names_the_backend() {
        let kb = Keyboard::new(VirtualKeyboard::new("dbg"));
        let text = format!("{kb:?}");
        assert!(text.starts_with("Keyboard"));
        assert!(text.contains("\"dbg\""));
    }

    #[test]
    fn aliases_shadow_the_table() {
        let cfg = Config::from_toml_str("[aliases]\nfire = \"lbutton\"\nesc = \"f1\"\n").unwrap();
        let kb = Keyboard::with_config(VirtualKeyboard::default(), &cfg).unwrap();

        assert_eq!(kb.resolve("Fire").unwrap(), VirtualKey::LBUTTON);
        assert_eq!(kb.get_key_code("ESC"), Some(0x70));
        // The static table is untouched.
        assert_eq!(table::get_key_code("esc"), Some(0x1B));
        assert_eq!(kb.get_key_name(0x1B), Some("escape"));
    }

    #[test]
    fn modifier_aliases_agree() {
        let mut kb = keyboard();
        kb.backend_mut().press(VirtualKey::RMENU);

        assert!(kb.menu_down().unwrap());
        assert!(kb.alt_down().unwrap());
        assert!(kb.ralt_down().unwrap());
        assert!(kb.lalt_up().unwrap());
        assert!(kb.ctrl_up().unwrap());
    }

    #[test]
    fn unknown_key_in_list_fails_before_querying() {
        let kb = keyboard();
        assert!(matches!(
            kb.keys_up(["a", "bogus"]),
            Err(Error::UnknownKey(name)) if name == "bogus"
        ));
        assert!(kb.keys_up(Vec::<&str>::new()).unwrap());
    }

    #[test]
    fn unsupported_backend_surfaces_errors() {
        let mut kb = Keyboard::new(UnsupportedBackend);
        assert!(matches!(kb.shift_down(), Err(Error::Unsupported(_))));
        assert!(matches!(kb.tap_key("a"), Err(Error::Unsupported(_))));
        // Name resolution fails first.
        assert!(matches!(kb.key_down("nope"), Err(Error::UnknownKey(_))));
    }
}
