//! Mode state machine for the button pad.
//!
//! Provides [`ModeEngine`] which owns the LED grid and the per-mode
//! transient state, and dispatches each tick's press/release edges to the
//! active mode's logic. All mode logic is pure in-memory computation; the
//! only errors it can return are propagated peripheral failures from the
//! output sink.

use core::fmt::Write as _;

use heapless::String;

use crate::grid::{GRID_CELLS, GridState, neighborhood};
use crate::io::{DelaySource, GridEdges, OutputSink, PeripheralError, RandomSource};
use crate::mode::Mode;

/// Scramble presses drawn for a fresh Game board, inclusive bounds.
const SCRAMBLE_PRESSES_MIN: u8 = 8;
const SCRAMBLE_PRESSES_MAX: u8 = 12;

/// Pause between scramble presses so the player can watch the board build.
const SCRAMBLE_PAUSE_MS: u32 = 200;

/// Largest text the engine ever renders ("10+6=" is 5 chars).
const TEXT_CAPACITY: usize = 8;

/// The mode state machine.
///
/// Owns the [`GridState`], the current [`Mode`], and the arithmetic goal,
/// and mirrors every grid mutation to the output sink. Switching or
/// restarting a mode goes through [`init`](ModeEngine::init), which resets
/// the grid and the mode's transient state deterministically from the
/// supplied [`RandomSource`].
///
/// # Type Parameters
/// * `O` - Output sink implementation (LED driver + display)
/// * `R` - Random source for puzzle generation
/// * `D` - Delay source for scramble pacing
pub struct ModeEngine<O: OutputSink, R: RandomSource, D: DelaySource> {
    grid: GridState,
    mode: Mode,
    /// Target active-cell count; meaningful only in Add and Sub.
    goal: u8,
    sink: O,
    rng: R,
    delay: D,
}

impl<O: OutputSink, R: RandomSource, D: DelaySource> ModeEngine<O, R, D> {
    /// Creates an engine in Free mode with a cleared grid.
    ///
    /// No peripheral I/O happens here; call [`init`](ModeEngine::init) (or
    /// [`PadController::start`](crate::controller::PadController::start))
    /// to bring the hardware in sync.
    pub fn new(sink: O, rng: R, delay: D) -> Self {
        Self {
            grid: GridState::new(),
            mode: Mode::Free,
            // Full-grid sentinel: an uninitialized Add/Sub tick cannot win
            // on an empty board.
            goal: GRID_CELLS as u8,
            sink,
            rng,
            delay,
        }
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current LED grid.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Returns the arithmetic goal (valid in Add and Sub).
    pub fn goal(&self) -> u8 {
        self.goal
    }

    /// Advances to the next mode in the cycle.
    ///
    /// Does not initialize the new mode; the control surface calls
    /// [`init`](ModeEngine::init) once selection is confirmed.
    pub fn select_next(&mut self) {
        self.mode = self.mode.next();
    }

    /// Renders the active mode's 4-character label on the display.
    pub fn render_mode_label(&mut self) -> Result<(), PeripheralError> {
        self.sink.render_text(self.mode.label())
    }

    /// Initializes the active mode, resetting grid and transient state.
    pub fn init(&mut self) -> Result<(), PeripheralError> {
        match self.mode {
            Mode::Free => self.fill(false),
            Mode::Game => self.init_game(),
            Mode::Add => self.init_add(),
            Mode::Sub => self.init_sub(),
        }
    }

    /// Feeds one tick's grid edges to the active mode's logic.
    pub fn tick(&mut self, edges: &GridEdges) -> Result<(), PeripheralError> {
        match self.mode {
            Mode::Free => self.tick_free(edges),
            Mode::Game => self.tick_game(edges),
            Mode::Add | Mode::Sub => self.tick_arithmetic(edges),
        }
    }

    /// Free play: each newly pressed cell toggles its own LED.
    fn tick_free(&mut self, edges: &GridEdges) -> Result<(), PeripheralError> {
        for &idx in &edges.pressed {
            self.toggle_cell(idx)?;
        }
        Ok(())
    }

    /// Builds a fresh, solvable Lights-Out board.
    ///
    /// Fills the grid, then "presses" 8-12 random cells with the neighbor
    /// operator. Every board reachable by presses is solvable by presses.
    /// The press counter is rendered after each step with a short pause so
    /// the scramble reads as an animation.
    fn init_game(&mut self) -> Result<(), PeripheralError> {
        self.fill(true)?;
        let presses = self
            .rng
            .uniform(SCRAMBLE_PRESSES_MIN, SCRAMBLE_PRESSES_MAX);
        for press in 0..presses {
            let idx = usize::from(self.rng.uniform(0, (GRID_CELLS - 1) as u8));
            self.press_with_neighbors(idx)?;
            self.render_fmt(format_args!("{press:4}"))?;
            self.delay.delay_ms(SCRAMBLE_PAUSE_MS);
        }
        Ok(())
    }

    /// Lights-Out play: each newly pressed cell inverts itself and its
    /// in-bounds up/down/left/right neighbors.
    fn tick_game(&mut self, edges: &GridEdges) -> Result<(), PeripheralError> {
        for &idx in &edges.pressed {
            self.press_with_neighbors(idx)?;
        }
        #[cfg(feature = "game-win")]
        if !edges.pressed.is_empty() && self.grid.active_count() == 0 {
            self.sink.render_text("WIN ")?;
        }
        Ok(())
    }

    /// Draws a fresh addition problem.
    ///
    /// `a` is drawn from `1..=10` and `b` from `1..=min(9, 16 - a)`, so the
    /// goal `a + b` never exceeds the 16 available cells and `b` stays a
    /// single digit.
    fn init_add(&mut self) -> Result<(), PeripheralError> {
        self.fill(false)?;
        let a = self.rng.uniform(1, 10);
        let b = self.rng.uniform(1, (16 - a).min(9));
        self.goal = a + b;
        self.render_fmt(format_args!("{a}+{b}="))
    }

    /// Draws a fresh subtraction problem.
    ///
    /// `a` is drawn from `1..=10` and `b` from `0..=a`, so the goal `a - b`
    /// is never negative.
    fn init_sub(&mut self) -> Result<(), PeripheralError> {
        self.fill(false)?;
        let a = self.rng.uniform(1, 10);
        let b = self.rng.uniform(0, a);
        self.goal = a - b;
        self.render_fmt(format_args!("{a}-{b}="))
    }

    /// Arithmetic play: toggle pressed cells, then check the answer.
    ///
    /// When the active-cell count equals the goal, the answer is rendered
    /// and the whole grid inverts as a win flash. The check re-fires on
    /// every tick while the count still matches; there is no one-shot
    /// latch. That mirrors the shipped controller behavior: holding the
    /// winning count re-inverts the board each tick.
    fn tick_arithmetic(&mut self, edges: &GridEdges) -> Result<(), PeripheralError> {
        for &idx in &edges.pressed {
            self.toggle_cell(idx)?;
        }

        if self.grid.active_count() == usize::from(self.goal) {
            let goal = self.goal;
            self.render_fmt(format_args!(" ={:2}", goal))?;
            self.invert_all()?;
        }
        Ok(())
    }

    /// Toggles one cell and mirrors it to the sink.
    fn toggle_cell(&mut self, idx: usize) -> Result<(), PeripheralError> {
        self.grid.toggle(idx);
        self.sink.set_led(idx, self.grid.get(idx))
    }

    /// Applies the Lights-Out neighbor operator at `idx`.
    fn press_with_neighbors(&mut self, idx: usize) -> Result<(), PeripheralError> {
        for cell in neighborhood(idx) {
            self.toggle_cell(cell)?;
        }
        Ok(())
    }

    /// Sets all cells and LEDs to `value`.
    fn fill(&mut self, value: bool) -> Result<(), PeripheralError> {
        self.grid.fill(value);
        self.sink.set_leds_bulk(value)
    }

    /// Inverts every cell (win flash).
    fn invert_all(&mut self) -> Result<(), PeripheralError> {
        for idx in 0..GRID_CELLS {
            self.toggle_cell(idx)?;
        }
        Ok(())
    }

    /// Formats into a fixed buffer and renders it.
    fn render_fmt(&mut self, args: core::fmt::Arguments<'_>) -> Result<(), PeripheralError> {
        let mut text: String<TEXT_CAPACITY> = String::new();
        // Capacity covers every format this engine renders.
        let _ = text.write_fmt(args);
        self.sink.render_text(&text)
    }
}
