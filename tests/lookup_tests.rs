use keyprobe::{get_key_code, get_key_name, virtual_key_codes, virtual_key_codes2, virtual_key_names};
use pretty_assertions::assert_eq;

#[test]
fn well_known_codes() {
    let cases = [
        ("lbutton", 0x01),
        ("back", 0x08),
        ("return", 0x0D),
        ("shift", 0x10),
        ("control", 0x11),
        ("menu", 0x12),
        ("capital", 0x14),
        ("escape", 0x1B),
        ("space", 0x20),
        ("left", 0x25),
        ("0", 0x30),
        ("9", 0x39),
        ("a", 0x41),
        ("z", 0x5A),
        ("numpad5", 0x65),
        ("f1", 0x70),
        ("f24", 0x87),
        ("lshift", 0xA0),
        ("rmenu", 0xA5),
        ("oem_plus", 0xBB),
        ("oem_clear", 0xFE),
    ];
    for (name, code) in cases {
        assert_eq!(get_key_code(name), Some(code), "{name}");
        assert_eq!(get_key_name(code as u32), Some(name), "{name}");
    }
}

#[test]
fn extended_names_resolve_to_general_codes() {
    let cases = [
        ("enter", "return"),
        ("Ctrl", "control"),
        ("ALT", "menu"),
        ("esc", "escape"),
        ("pageup", "prior"),
        ("PageDown", "next"),
        ("backspace", "back"),
        ("del", "delete"),
        ("lctrl", "lcontrol"),
        ("ralt", "rmenu"),
        (";", "oem_1"),
        ("[", "oem_4"),
        ("\\", "oem_5"),
    ];
    for (alias, canonical) in cases {
        let code = get_key_code(alias).unwrap_or_else(|| panic!("{alias} unresolved"));
        assert_eq!(get_key_name(code as u32), Some(canonical), "{alias}");
    }
}

#[test]
fn exported_views_are_consistent() {
    let general = virtual_key_codes();
    let names = virtual_key_names();

    assert_eq!(general.len(), names.len());
    for (&code, &name) in names {
        assert_eq!(general.get(name), Some(&code));
    }
    for (&alias, &code) in virtual_key_codes2() {
        assert!(names.contains_key(&code), "{alias}");
    }
}

#[test]
fn undefined_codes_have_no_name() {
    for code in [0x00, 0x07, 0x0A, 0x3A, 0x40, 0x5E, 0x88, 0xE0, 0xFF, 0x100, 0xFFFF] {
        assert_eq!(get_key_name(code), None, "0x{code:X}");
    }
}
