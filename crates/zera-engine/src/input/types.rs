/// Keyboard key identifier.
///
/// Escape is the only key the loop reacts to; everything else is carried as
/// `Unknown` with the platform key code so held-key bookkeeping stays accurate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}
