//! Collaborator traits at the peripheral boundary.
//!
//! The engine never touches hardware directly: grid input, LED/display
//! output, randomness, and delays all arrive through the traits in this
//! module. Implement them for your board's drivers; the provided mocks in
//! the test suite implement them for the host.

use heapless::Vec;

use crate::grid::GRID_CELLS;

/// Width of the alphanumeric display in characters.
///
/// Text passed to [`OutputSink::render_text`] may be longer; the boundary
/// implementation truncates, never the core.
pub const DISPLAY_WIDTH: usize = 4;

/// A failed bus transaction at the peripheral boundary.
///
/// The core propagates these to the tick boundary, where the controller
/// drops the remainder of the tick and the loop retries next period. See
/// [`PadController::tick`](crate::controller::PadController::tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralError {
    /// Reading the button matrix failed.
    Read,
    /// Writing an LED or display register failed.
    Write,
}

impl core::fmt::Display for PeripheralError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PeripheralError::Read => write!(f, "button matrix read failed"),
            PeripheralError::Write => write!(f, "LED or display write failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PeripheralError {}

/// Press and release edges observed on the grid during one tick.
///
/// Both lists hold cell indices in `0..16`, in ascending order, and are
/// disjoint: a cell cannot be pressed and released within one sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridEdges {
    /// Cells that went down this tick.
    pub pressed: Vec<usize, GRID_CELLS>,
    /// Cells that came up this tick.
    pub released: Vec<usize, GRID_CELLS>,
}

impl GridEdges {
    /// Returns true when no edges were observed.
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty() && self.released.is_empty()
    }
}

/// Source of grid press/release edges, backed by the button-matrix driver.
pub trait InputSource {
    /// Reads the edges observed since the previous call.
    ///
    /// Called exactly once per tick.
    fn read_edges(&mut self) -> Result<GridEdges, PeripheralError>;
}

/// Sink for LED state and display text, backed by the LED driver and
/// segment-display peripheral.
///
/// All writes are idempotent; there is no acknowledgment beyond
/// success/failure.
pub trait OutputSink {
    /// Sets one grid LED.
    fn set_led(&mut self, idx: usize, on: bool) -> Result<(), PeripheralError>;

    /// Sets all 16 grid LEDs at once.
    fn set_leds_bulk(&mut self, on: bool) -> Result<(), PeripheralError>;

    /// Renders text on the display, truncating beyond [`DISPLAY_WIDTH`].
    fn render_text(&mut self, text: &str) -> Result<(), PeripheralError>;
}

/// Source of uniform random integers for puzzle generation.
///
/// Supplied as a seam so board scrambles and arithmetic problems are
/// reproducible in tests. [`SmallRngSource`](crate::random::SmallRngSource)
/// is the provided hardware-free implementation.
pub trait RandomSource {
    /// Returns a uniformly random integer in the closed interval `lo..=hi`.
    fn uniform(&mut self, lo: u8, hi: u8) -> u8;
}

/// Blocking, bounded pause between peripheral-facing animation steps.
///
/// Only used to pace the Game-mode board scramble; never load-bearing for
/// mode logic.
pub trait DelaySource {
    /// Blocks for `millis` milliseconds.
    fn delay_ms(&mut self, millis: u32);
}
