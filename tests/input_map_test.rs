use crossterm::event::{KeyCode, KeyEvent};

use falling_blocks::input::{solo_command, versus_command};
use falling_blocks::types::{Command, PlayerSlot};

#[test]
fn every_command_has_a_solo_key() {
    let keys = ['a', 'd', 's', 'w', 'z', 'x', 'q'];
    let mapped: Vec<_> = keys
        .iter()
        .filter_map(|&c| solo_command(KeyEvent::from(KeyCode::Char(c))))
        .collect();
    for command in Command::ALL {
        assert!(mapped.contains(&command), "{:?} has no key", command);
    }
}

#[test]
fn versus_layouts_mirror_each_other() {
    for (one, two) in "adswqe".chars().zip("jlkiuo".chars()) {
        let (slot_one, cmd_one) = versus_command(KeyEvent::from(KeyCode::Char(one))).unwrap();
        let (slot_two, cmd_two) = versus_command(KeyEvent::from(KeyCode::Char(two))).unwrap();
        assert_eq!(slot_one, PlayerSlot::One);
        assert_eq!(slot_two, PlayerSlot::Two);
        assert_eq!(cmd_one, cmd_two, "{} vs {}", one, two);
    }
}
