use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, HARDWAREINPUT, INPUT, INPUT_0, INPUT_HARDWARE, INPUT_KEYBOARD, INPUT_MOUSE,
    KEYBDINPUT, MOUSEINPUT,
};

use crate::error::Result;
use crate::input::InputRecord;

fn to_native(record: &InputRecord) -> INPUT {
    match *record {
        InputRecord::Mouse(m) => INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: m.dx,
                    dy: m.dy,
                    mouseData: m.mouse_data as _,
                    dwFlags: m.flags as _,
                    time: m.time,
                    dwExtraInfo: 0,
                },
            },
        },
        InputRecord::Keyboard(k) => INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: k.vk as _,
                    wScan: k.scan,
                    dwFlags: k.flags as _,
                    time: k.time,
                    dwExtraInfo: 0,
                },
            },
        },
        InputRecord::Hardware(h) => INPUT {
            r#type: INPUT_HARDWARE,
            Anonymous: INPUT_0 {
                hi: HARDWAREINPUT {
                    uMsg: h.msg,
                    wParamL: h.w_param_l,
                    wParamH: h.w_param_h,
                },
            },
        },
    }
}

/// Forward records to `SendInput` and return its raw count.
///
/// A short count is not turned into an error: UIPI blocking and a busy input
/// desktop both surface as `0`, and callers asked for the raw value.
pub(super) fn send(records: &[InputRecord]) -> Result<u32> {
    if records.is_empty() {
        return Ok(0);
    }

    let inputs: Vec<INPUT> = records.iter().map(to_native).collect();

    #[cfg(feature = "debug-log")]
    for r in records {
        log::trace!("[SENDINPUT] {r:?}");
    }

    let sent = unsafe {
        SendInput(
            inputs.len() as u32,
            inputs.as_ptr(),
            core::mem::size_of::<INPUT>() as i32,
        )
    };

    if (sent as usize) < inputs.len() {
        let code = unsafe { GetLastError() };
        log::warn!(
            "SendInput inserted {sent} of {} record(s) (os error {code})",
            inputs.len()
        );
    }
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, MOUSEEVENTF_HWHEEL, MOUSEEVENTF_WHEEL,
    };

    #[test]
    fn mouse_record_copies_every_field() {
        let native = to_native(&InputRecord::mouse(-15, 42, -240, MOUSEEVENTF_WHEEL, 99));
        assert_eq!(native.r#type, INPUT_MOUSE);
        let mi = unsafe { native.Anonymous.mi };
        assert_eq!(mi.dx, -15);
        assert_eq!(mi.dy, 42);
        assert_eq!(mi.mouseData as i32, -240);
        assert_eq!(mi.dwFlags as u32, MOUSEEVENTF_WHEEL);
        assert_eq!(mi.time, 99);
        assert_eq!(mi.dwExtraInfo, 0);
    }

    #[test]
    fn positive_wheel_delta_keeps_its_sign() {
        let native = to_native(&InputRecord::mouse(0, 0, 120, MOUSEEVENTF_HWHEEL, 0));
        let mi = unsafe { native.Anonymous.mi };
        assert_eq!(mi.mouseData as i32, 120);
        assert_eq!(mi.dwFlags as u32, MOUSEEVENTF_HWHEEL);
    }

    #[test]
    fn keyboard_record_copies_every_field() {
        let flags = KEYEVENTF_EXTENDEDKEY | KEYEVENTF_KEYUP;
        let native = to_native(&InputRecord::keyboard(0xA3, 0x1D, flags, 7));
        assert_eq!(native.r#type, INPUT_KEYBOARD);
        let ki = unsafe { native.Anonymous.ki };
        assert_eq!(ki.wVk as u16, 0xA3);
        assert_eq!(ki.wScan, 0x1D);
        assert_eq!(ki.dwFlags as u32, flags);
        assert_eq!(ki.time, 7);
        assert_eq!(ki.dwExtraInfo, 0);
    }

    #[test]
    fn hardware_record_keeps_param_order() {
        let native = to_native(&InputRecord::hardware(0x0100, 0x1111, 0x2222));
        assert_eq!(native.r#type, INPUT_HARDWARE);
        let hi = unsafe { native.Anonymous.hi };
        assert_eq!(hi.uMsg, 0x0100);
        assert_eq!(hi.wParamL, 0x1111);
        assert_eq!(hi.wParamH, 0x2222);
    }

    #[test]
    fn empty_batch_skips_sendinput() {
        assert_eq!(send(&[]).unwrap(), 0);
    }
}
