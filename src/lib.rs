#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`EdgeButton`**: Debounced press/release edge detection for one physical button
//! - **`GridState`**: The 16-cell (4x4) boolean LED/button grid
//! - **`Mode`**: The fixed, cyclically selectable set of behaviors (Free, Game, Add, Sub)
//! - **`ModeEngine`**: The mode state machine dispatching `init` and `tick` per mode
//! - **`PadController`**: The per-tick control surface (mode cycling, error-skip policy)
//! - **`InputSource` / `OutputSink`**: Traits to implement for your button-matrix and
//!   LED/display hardware
//! - **`RandomSource` / `DelaySource`**: Traits supplying randomness and pacing, so
//!   puzzle generation stays deterministic under test
//!
//! One call to [`PadController::tick`] is one iteration of the firmware's
//! fixed-period (~100ms) poll loop; the poll period doubles as the button
//! debounce window.

pub mod button;
pub mod controller;
pub mod engine;
pub mod grid;
pub mod io;
pub mod mode;
pub mod random;

pub use button::{EdgeButton, Polarity};
pub use controller::PadController;
pub use engine::ModeEngine;
pub use grid::{GRID_CELLS, GRID_DIM, GridState, neighborhood};
pub use io::{
    DISPLAY_WIDTH, DelaySource, GridEdges, InputSource, OutputSink, PeripheralError, RandomSource,
};
pub use mode::Mode;
pub use random::SmallRngSource;
