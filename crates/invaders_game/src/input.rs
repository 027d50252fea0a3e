use invaders_common::Key;

/// Held state of the two movement keys. A flag stays set until the
/// matching key-up arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub left: bool,
    pub right: bool,
}

impl MoveFlags {
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.left = pressed,
            Key::Right => self.right = pressed,
            Key::None => {}
        }
    }
}
