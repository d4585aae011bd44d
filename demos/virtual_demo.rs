use keyprobe::backends::virtual_input::VirtualKeyboard;
use keyprobe::{Keyboard, MouseButton};

fn main() -> keyprobe::Result<()> {
    env_logger::init();

    // A keyboard backed by an in-memory device instead of the OS
    let mut kb = Keyboard::new(VirtualKeyboard::new("demo"));

    // Inject some sample input
    kb.press_key("lshift")?;
    kb.tap_key("capslock")?;
    kb.send_mouse_input(0, 0, 0, keyprobe::input::MOUSEEVENTF_LEFTDOWN, 0)?;

    println!("(Virtual) shift down: {}", kb.shift_down()?);
    println!("(Virtual) caps lock toggled: {}", kb.key_toggled("capital")?);
    println!("(Virtual) left button down: {}", kb.button_down(MouseButton::Left)?);

    for vk in kb.keyboard_state()?.pressed() {
        println!("(Virtual) {vk} (0x{:02X}) is down", vk.code());
    }

    for record in kb.backend().sent() {
        println!("(Virtual) sent {record:?}");
    }
    Ok(())
}
