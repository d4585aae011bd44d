//! Static virtual-key name table.
//!
//! The table is built once, on first use, and never changes afterwards. It has
//! three views:
//! - **general names**: one canonical lowercase name per defined code. These are
//!   the Windows `VK_*` constants without the prefix (`lbutton`, `return`,
//!   `oem_plus`, `a`, `0`, ...).
//! - **extended names**: friendlier aliases (`ctrl`, `enter`, `pageup`, `;`, ...).
//!   An alias never reuses a general name.
//! - **names by code**: code → canonical general name.
//!
//! Lookups are case-insensitive and accept an optional `vk_` prefix, so
//! `"VK_SHIFT"`, `"Shift"` and `"shift"` all resolve to `0x10`.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

/// Canonical names, ordered by code.
const GENERAL: &[(&str, u8)] = &[
    ("lbutton", 0x01),
    ("rbutton", 0x02),
    ("cancel", 0x03),
    ("mbutton", 0x04),
    ("xbutton1", 0x05),
    ("xbutton2", 0x06),
    ("back", 0x08),
    ("tab", 0x09),
    ("clear", 0x0C),
    ("return", 0x0D),
    ("shift", 0x10),
    ("control", 0x11),
    ("menu", 0x12),
    ("pause", 0x13),
    ("capital", 0x14),
    ("kana", 0x15),
    ("ime_on", 0x16),
    ("junja", 0x17),
    ("final", 0x18),
    ("kanji", 0x19),
    ("ime_off", 0x1A),
    ("escape", 0x1B),
    ("convert", 0x1C),
    ("nonconvert", 0x1D),
    ("accept", 0x1E),
    ("modechange", 0x1F),
    ("space", 0x20),
    ("prior", 0x21),
    ("next", 0x22),
    ("end", 0x23),
    ("home", 0x24),
    ("left", 0x25),
    ("up", 0x26),
    ("right", 0x27),
    ("down", 0x28),
    ("select", 0x29),
    ("print", 0x2A),
    ("execute", 0x2B),
    ("snapshot", 0x2C),
    ("insert", 0x2D),
    ("delete", 0x2E),
    ("help", 0x2F),
    ("0", 0x30),
    ("1", 0x31),
    ("2", 0x32),
    ("3", 0x33),
    ("4", 0x34),
    ("5", 0x35),
    ("6", 0x36),
    ("7", 0x37),
    ("8", 0x38),
    ("9", 0x39),
    ("a", 0x41),
    ("b", 0x42),
    ("c", 0x43),
    ("d", 0x44),
    ("e", 0x45),
    ("f", 0x46),
    ("g", 0x47),
    ("h", 0x48),
    ("i", 0x49),
    ("j", 0x4A),
    ("k", 0x4B),
    ("l", 0x4C),
    ("m", 0x4D),
    ("n", 0x4E),
    ("o", 0x4F),
    ("p", 0x50),
    ("q", 0x51),
    ("r", 0x52),
    ("s", 0x53),
    ("t", 0x54),
    ("u", 0x55),
    ("v", 0x56),
    ("w", 0x57),
    ("x", 0x58),
    ("y", 0x59),
    ("z", 0x5A),
    ("lwin", 0x5B),
    ("rwin", 0x5C),
    ("apps", 0x5D),
    ("sleep", 0x5F),
    ("numpad0", 0x60),
    ("numpad1", 0x61),
    ("numpad2", 0x62),
    ("numpad3", 0x63),
    ("numpad4", 0x64),
    ("numpad5", 0x65),
    ("numpad6", 0x66),
    ("numpad7", 0x67),
    ("numpad8", 0x68),
    ("numpad9", 0x69),
    ("multiply", 0x6A),
    ("add", 0x6B),
    ("separator", 0x6C),
    ("subtract", 0x6D),
    ("decimal", 0x6E),
    ("divide", 0x6F),
    ("f1", 0x70),
    ("f2", 0x71),
    ("f3", 0x72),
    ("f4", 0x73),
    ("f5", 0x74),
    ("f6", 0x75),
    ("f7", 0x76),
    ("f8", 0x77),
    ("f9", 0x78),
    ("f10", 0x79),
    ("f11", 0x7A),
    ("f12", 0x7B),
    ("f13", 0x7C),
    ("f14", 0x7D),
    ("f15", 0x7E),
    ("f16", 0x7F),
    ("f17", 0x80),
    ("f18", 0x81),
    ("f19", 0x82),
    ("f20", 0x83),
    ("f21", 0x84),
    ("f22", 0x85),
    ("f23", 0x86),
    ("f24", 0x87),
    ("numlock", 0x90),
    ("scroll", 0x91),
    ("lshift", 0xA0),
    ("rshift", 0xA1),
    ("lcontrol", 0xA2),
    ("rcontrol", 0xA3),
    ("lmenu", 0xA4),
    ("rmenu", 0xA5),
    ("browser_back", 0xA6),
    ("browser_forward", 0xA7),
    ("browser_refresh", 0xA8),
    ("browser_stop", 0xA9),
    ("browser_search", 0xAA),
    ("browser_favorites", 0xAB),
    ("browser_home", 0xAC),
    ("volume_mute", 0xAD),
    ("volume_down", 0xAE),
    ("volume_up", 0xAF),
    ("media_next_track", 0xB0),
    ("media_prev_track", 0xB1),
    ("media_stop", 0xB2),
    ("media_play_pause", 0xB3),
    ("launch_mail", 0xB4),
    ("launch_media_select", 0xB5),
    ("launch_app1", 0xB6),
    ("launch_app2", 0xB7),
    ("oem_1", 0xBA),
    ("oem_plus", 0xBB),
    ("oem_comma", 0xBC),
    ("oem_minus", 0xBD),
    ("oem_period", 0xBE),
    ("oem_2", 0xBF),
    ("oem_3", 0xC0),
    ("oem_4", 0xDB),
    ("oem_5", 0xDC),
    ("oem_6", 0xDD),
    ("oem_7", 0xDE),
    ("oem_8", 0xDF),
    ("oem_102", 0xE2),
    ("processkey", 0xE5),
    ("packet", 0xE7),
    ("attn", 0xF6),
    ("crsel", 0xF7),
    ("exsel", 0xF8),
    ("ereof", 0xF9),
    ("play", 0xFA),
    ("zoom", 0xFB),
    ("noname", 0xFC),
    ("pa1", 0xFD),
    ("oem_clear", 0xFE),
];

/// Aliases. Several share a code with each other (`ctrl`/`control` style
/// pairs live here, not in `GENERAL`).
const EXTENDED: &[(&str, u8)] = &[
    ("lmb", 0x01),
    ("rmb", 0x02),
    ("mmb", 0x04),
    ("backspace", 0x08),
    ("enter", 0x0D),
    ("ctrl", 0x11),
    ("alt", 0x12),
    ("capslock", 0x14),
    ("hangul", 0x15),
    ("hangeul", 0x15),
    ("hanja", 0x19),
    ("esc", 0x1B),
    ("pageup", 0x21),
    ("pagedown", 0x22),
    ("printscreen", 0x2C),
    ("ins", 0x2D),
    ("del", 0x2E),
    ("win", 0x5B),
    ("lwindows", 0x5B),
    ("rwindows", 0x5C),
    ("scrolllock", 0x91),
    ("lctrl", 0xA2),
    ("rctrl", 0xA3),
    ("lalt", 0xA4),
    ("ralt", 0xA5),
    (";", 0xBA),
    ("semicolon", 0xBA),
    ("=", 0xBB),
    ("plus", 0xBB),
    (",", 0xBC),
    ("comma", 0xBC),
    ("-", 0xBD),
    ("minus", 0xBD),
    (".", 0xBE),
    ("period", 0xBE),
    ("/", 0xBF),
    ("slash", 0xBF),
    ("`", 0xC0),
    ("grave", 0xC0),
    ("[", 0xDB),
    ("\\", 0xDC),
    ("backslash", 0xDC),
    ("]", 0xDD),
    ("'", 0xDE),
    ("quote", 0xDE),
];

/// Process-wide lookup table. Use [`table()`] to get at it.
#[derive(Debug)]
pub struct KeyTable {
    general: HashMap<&'static str, u8>,
    extended: HashMap<&'static str, u8>,
    names: BTreeMap<u8, &'static str>,
}

static TABLE: Lazy<KeyTable> = Lazy::new(KeyTable::build);

/// The shared table, built on first access.
pub fn table() -> &'static KeyTable {
    &TABLE
}

impl KeyTable {
    fn build() -> Self {
        let general: HashMap<_, _> = GENERAL.iter().copied().collect();
        let names = GENERAL.iter().map(|&(name, code)| (code, name)).collect();
        let extended = EXTENDED
            .iter()
            .copied()
            .filter(|(name, _)| !general.contains_key(name))
            .collect();

        log::debug!(
            "virtual key table ready: {} general, {} extended names",
            GENERAL.len(),
            EXTENDED.len()
        );

        Self {
            general,
            extended,
            names,
        }
    }

    /// Look up a general or extended name.
    pub fn code(&self, name: &str) -> Option<u8> {
        let key = normalize(name)?;
        self.general
            .get(key.as_str())
            .or_else(|| self.extended.get(key.as_str()))
            .copied()
    }

    /// Canonical name for a code; `None` when undefined or above 255.
    pub fn name(&self, code: u32) -> Option<&'static str> {
        let code = u8::try_from(code).ok()?;
        self.names.get(&code).copied()
    }

    pub fn general(&self) -> &HashMap<&'static str, u8> {
        &self.general
    }

    pub fn extended(&self) -> &HashMap<&'static str, u8> {
        &self.extended
    }

    pub fn names(&self) -> &BTreeMap<u8, &'static str> {
        &self.names
    }
}

/// Lowercase, trim, and strip an optional `vk_` prefix.
///
/// Returns `None` for input that cannot name anything (empty after stripping).
pub(crate) fn normalize(name: &str) -> Option<String> {
    let trimmed = name.trim();
    let lower = trimmed.to_ascii_lowercase();
    let bare = match lower.strip_prefix("vk_") {
        Some(rest) => rest.to_string(),
        None => lower,
    };
    // A lone space names the space bar; `trim` above would otherwise drop it.
    if bare.is_empty() {
        return (name == " ").then(|| "space".to_string());
    }
    Some(bare)
}

/// Virtual key code for a name, or `None` when unrecognised.
pub fn get_key_code(name: &str) -> Option<u8> {
    table().code(name)
}

/// Canonical virtual key name for a code, or `None` when undefined.
pub fn get_key_name(code: u32) -> Option<&'static str> {
    table().name(code)
}

/// General names and their codes.
pub fn virtual_key_codes() -> &'static HashMap<&'static str, u8> {
    table().general()
}

/// Extended (alias) names and their codes.
pub fn virtual_key_codes2() -> &'static HashMap<&'static str, u8> {
    table().extended()
}

/// Codes and their canonical names.
pub fn virtual_key_names() -> &'static BTreeMap<u8, &'static str> {
    table().names()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn general_names_round_trip() {
        for (&name, &code) in virtual_key_codes() {
            assert_eq!(get_key_code(name), Some(code), "{name}");
            assert_eq!(get_key_name(code as u32), Some(name), "0x{code:02X}");
        }
    }

    #[test]
    fn every_code_has_one_canonical_name() {
        let codes: HashSet<u8> = GENERAL.iter().map(|&(_, c)| c).collect();
        assert_eq!(codes.len(), GENERAL.len());
        assert_eq!(virtual_key_names().len(), GENERAL.len());
    }

    #[test]
    fn aliases_point_at_defined_codes() {
        for (&alias, &code) in virtual_key_codes2() {
            assert!(!virtual_key_codes().contains_key(alias), "{alias} shadows a general name");
            assert!(get_key_name(code as u32).is_some(), "{alias} -> undefined 0x{code:02X}");
        }
        // No alias was dropped for colliding with a general name.
        assert_eq!(virtual_key_codes2().len(), EXTENDED.len());
    }

    #[test]
    fn names_are_stored_lowercase() {
        for name in virtual_key_codes().keys().chain(virtual_key_codes2().keys()) {
            assert_eq!(*name, name.to_ascii_lowercase());
        }
    }

    #[test]
    fn lookup_ignores_case_and_prefix() {
        assert_eq!(get_key_code("SHIFT"), Some(0x10));
        assert_eq!(get_key_code("vk_Shift"), Some(0x10));
        assert_eq!(get_key_code("  Ctrl "), Some(0x11));
        assert_eq!(get_key_code("PageDown"), Some(0x22));
        assert_eq!(get_key_code(" "), Some(0x20));
        assert_eq!(get_key_code(""), None);
        assert_eq!(get_key_code("vk_"), None);
        assert_eq!(get_key_code("nope"), None);
    }

    #[test]
    fn undefined_and_out_of_range_codes_have_no_name() {
        assert_eq!(get_key_name(0x00), None);
        assert_eq!(get_key_name(0x07), None);
        assert_eq!(get_key_name(0xFF), None);
        assert_eq!(get_key_name(256), None);
        assert_eq!(get_key_name(u32::MAX), None);
    }
}
