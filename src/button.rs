//! Debounced edge detection for the control-surface buttons.

/// Electrical polarity of a button line.
///
/// A button wired with a pull-up resistor reads low while pressed
/// (`ActiveLow`); one with a pull-down reads high (`ActiveHigh`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Raw high level means pressed.
    ActiveHigh,
    /// Raw low level means pressed (pull-up wiring).
    ActiveLow,
}

/// A single physical button with one-sample edge detection.
///
/// Call [`update`](EdgeButton::update) once per poll tick with the raw pin
/// level; the edge queries then answer for exactly that tick. There is no
/// time-based debounce beyond the one-sample hysteresis; the fixed poll
/// period is the implicit debounce window. A stuck or disconnected line
/// simply yields a constant state.
#[derive(Debug, Clone, Copy)]
pub struct EdgeButton {
    polarity: Polarity,
    state: bool,
    last_state: bool,
}

impl EdgeButton {
    /// Creates a released button with the given polarity.
    pub fn new(polarity: Polarity) -> Self {
        Self {
            polarity,
            state: false,
            last_state: false,
        }
    }

    /// Samples the raw pin level and advances the edge state.
    pub fn update(&mut self, raw_level: bool) {
        self.last_state = self.state;
        self.state = match self.polarity {
            Polarity::ActiveHigh => raw_level,
            Polarity::ActiveLow => !raw_level,
        };
    }

    /// Returns true while the button is held.
    pub fn is_pressed(&self) -> bool {
        self.state
    }

    /// Returns true only on the tick where the button went down.
    pub fn just_pressed(&self) -> bool {
        self.state && !self.last_state
    }

    /// Returns true only on the tick where the button came up.
    pub fn just_released(&self) -> bool {
        !self.state && self.last_state
    }
}
