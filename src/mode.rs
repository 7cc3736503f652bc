//! The fixed, cyclically selectable set of pad modes.

/// Operating modes for the button pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Free play: a press toggles its own LED.
    Free,
    /// Lights-Out puzzle: a press inverts the cell and its neighbors.
    Game,
    /// Addition practice: light as many cells as the displayed sum.
    Add,
    /// Subtraction practice: light as many cells as the displayed difference.
    Sub,
}

impl Mode {
    /// Returns the next mode in the cycle (period 4, no terminal state).
    pub fn next(self) -> Self {
        match self {
            Mode::Free => Mode::Game,
            Mode::Game => Mode::Add,
            Mode::Add => Mode::Sub,
            Mode::Sub => Mode::Free,
        }
    }

    /// Fixed 4-character display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Free => "FREE",
            Mode::Game => "GAME",
            Mode::Add => "ADD ",
            Mode::Sub => "SUB ",
        }
    }
}
