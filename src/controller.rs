//! Tick-level control surface wiring the engine to its peripherals.
//!
//! [`PadController`] is the body of the firmware's fixed-period poll loop:
//! the firmware samples the two control pins and sleeps; mode cycling,
//! re-initialization, grid edge dispatch, and the dropped-tick error
//! policy all happen here.

use crate::button::EdgeButton;
use crate::engine::ModeEngine;
use crate::io::{DelaySource, InputSource, OutputSink, PeripheralError, RandomSource};

/// Drives the [`ModeEngine`] from raw control-button levels and the grid
/// input source, once per poll tick.
///
/// # Type Parameters
/// * `I` - Grid input source (button matrix)
/// * `O` - Output sink implementation (LED driver + display)
/// * `R` - Random source for puzzle generation
/// * `D` - Delay source for scramble pacing
pub struct PadController<I: InputSource, O: OutputSink, R: RandomSource, D: DelaySource> {
    engine: ModeEngine<O, R, D>,
    input: I,
    mode_button: EdgeButton,
    select_button: EdgeButton,
}

impl<I: InputSource, O: OutputSink, R: RandomSource, D: DelaySource> PadController<I, O, R, D> {
    /// Creates a controller; no peripheral I/O happens until
    /// [`start`](PadController::start).
    pub fn new(
        engine: ModeEngine<O, R, D>,
        input: I,
        mode_button: EdgeButton,
        select_button: EdgeButton,
    ) -> Self {
        Self {
            engine,
            input,
            mode_button,
            select_button,
        }
    }

    /// Returns the engine for state inspection.
    pub fn engine(&self) -> &ModeEngine<O, R, D> {
        &self.engine
    }

    /// Initializes the starting mode and shows its label.
    pub fn start(&mut self) -> Result<(), PeripheralError> {
        self.engine.init()?;
        self.engine.render_mode_label()
    }

    /// Runs one poll tick from the raw control-button levels.
    ///
    /// Control buttons are evaluated before any grid logic:
    /// - While the mode button is held, a release edge on select advances
    ///   the mode and the label is (re)rendered each tick.
    /// - While the mode button is not held, a release edge on either button
    ///   re-initializes the current mode.
    /// - Grid edges are read and dispatched only when no mode transition
    ///   fired, so a mode switch and a grid edit never apply in the same
    ///   tick.
    ///
    /// A [`PeripheralError`] aborts the remainder of the tick and is
    /// returned after being logged; the loop simply ticks again next
    /// period. A dropped tick shows stale LED/display state until the next
    /// successful tick. The control buttons still advance on a failed tick,
    /// since they are sampled before any I/O.
    pub fn tick(&mut self, mode_raw: bool, select_raw: bool) -> Result<(), PeripheralError> {
        self.mode_button.update(mode_raw);
        self.select_button.update(select_raw);

        let result = self.tick_inner();
        if let Err(_error) = result {
            #[cfg(feature = "defmt")]
            defmt::warn!("{}; tick skipped", _error);
        }
        result
    }

    fn tick_inner(&mut self) -> Result<(), PeripheralError> {
        if self.mode_button.is_pressed() {
            let advanced = self.select_button.just_released();
            if advanced {
                self.engine.select_next();
            }
            self.engine.render_mode_label()?;
            if advanced {
                return Ok(());
            }
        } else if self.mode_button.just_released() || self.select_button.just_released() {
            self.engine.init()?;
            return Ok(());
        }

        let edges = self.input.read_edges()?;
        self.engine.tick(&edges)
    }
}
