use bitflags::bitflags;

/// Discrete commands raised by a key press (or the window closing) during a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    MenuUp,
    MenuDown,
    Confirm,
}

bitflags! {
    /// Logical actions whose keys are currently held down.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HeldActions: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP = 1 << 2;
        const CONFIRM = 1 << 3;
    }
}
