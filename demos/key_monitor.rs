use std::collections::BTreeSet;
use std::time::Duration;

use keyprobe::{Config, Keyboard, QueryMode, VirtualKey};

fn main() -> keyprobe::Result<()> {
    env_logger::init();

    // Optional config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config {
            query: QueryMode::Async,
            ..Config::default()
        },
    };
    let kb = Keyboard::discover_with(&config)?;

    println!("Watching keys (hold ESC to quit)");
    let mut held: BTreeSet<VirtualKey> = BTreeSet::new();

    loop {
        // Per-key queries: a console thread has no message queue for GetKeyboardState to track
        let mut now = BTreeSet::new();
        for code in 1..=255u8 {
            if kb.key_down(code)? {
                now.insert(VirtualKey(code));
            }
        }

        for vk in now.difference(&held) {
            println!("+{vk}");
        }
        for vk in held.difference(&now) {
            println!("-{vk}");
        }
        held = now;

        if kb.key_down("escape")? {
            break;
        }

        // Keep CPU usage sane
        std::thread::sleep(Duration::from_millis(10));
    }
    Ok(())
}
