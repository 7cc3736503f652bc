//! Shared test infrastructure for pad-engine integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::RefCell;
use std::rc::Rc;

use pad_engine::{
    DelaySource, GRID_CELLS, GridEdges, InputSource, OutputSink, PeripheralError, RandomSource,
};

// ============================================================================
// Recording output sink
// ============================================================================

#[derive(Default)]
struct SinkLog {
    leds: [bool; GRID_CELLS],
    texts: Vec<String>,
    fail_writes: bool,
}

/// Output sink recording LED state and rendered text into a shared log.
///
/// Clone one handle into the engine and keep the other to inspect what the
/// hardware would have shown. `set_fail_writes` makes every subsequent
/// write fail, for dropped-tick tests.
#[derive(Clone, Default)]
pub struct SharedSink {
    log: Rc<RefCell<SinkLog>>,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leds(&self) -> [bool; GRID_CELLS] {
        self.log.borrow().leds
    }

    pub fn texts(&self) -> Vec<String> {
        self.log.borrow().texts.clone()
    }

    pub fn last_text(&self) -> String {
        self.log
            .borrow()
            .texts
            .last()
            .expect("no text rendered")
            .clone()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.log.borrow_mut().fail_writes = fail;
    }
}

impl OutputSink for SharedSink {
    fn set_led(&mut self, idx: usize, on: bool) -> Result<(), PeripheralError> {
        let mut log = self.log.borrow_mut();
        if log.fail_writes {
            return Err(PeripheralError::Write);
        }
        log.leds[idx] = on;
        Ok(())
    }

    fn set_leds_bulk(&mut self, on: bool) -> Result<(), PeripheralError> {
        let mut log = self.log.borrow_mut();
        if log.fail_writes {
            return Err(PeripheralError::Write);
        }
        log.leds = [on; GRID_CELLS];
        Ok(())
    }

    fn render_text(&mut self, text: &str) -> Result<(), PeripheralError> {
        let mut log = self.log.borrow_mut();
        if log.fail_writes {
            return Err(PeripheralError::Write);
        }
        log.texts.push(text.to_string());
        Ok(())
    }
}

// ============================================================================
// Scripted randomness
// ============================================================================

/// Random source replaying a scripted list of draws.
///
/// Panics if a scripted value falls outside the requested interval, so a
/// bad script fails loudly instead of producing a nonsense board.
pub struct ScriptRng {
    values: Vec<u8>,
    pos: usize,
}

impl ScriptRng {
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for ScriptRng {
    fn uniform(&mut self, lo: u8, hi: u8) -> u8 {
        let value = self.values[self.pos];
        self.pos += 1;
        assert!(
            (lo..=hi).contains(&value),
            "scripted draw {value} outside {lo}..={hi}"
        );
        value
    }
}

/// Random source always answering the lower bound.
pub struct FixedRng;

impl RandomSource for FixedRng {
    fn uniform(&mut self, lo: u8, _hi: u8) -> u8 {
        lo
    }
}

// ============================================================================
// Delay and input
// ============================================================================

/// Delay source counting calls into a shared counter.
#[derive(Clone, Default)]
pub struct CountingDelay {
    calls: Rc<RefCell<usize>>,
}

impl CountingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

impl DelaySource for CountingDelay {
    fn delay_ms(&mut self, _millis: u32) {
        *self.calls.borrow_mut() += 1;
    }
}

/// Input source replaying one scripted result per tick, then empty edges.
pub struct ScriptInput {
    ticks: Vec<Result<GridEdges, PeripheralError>>,
}

impl ScriptInput {
    pub fn new(ticks: Vec<Result<GridEdges, PeripheralError>>) -> Self {
        Self { ticks }
    }

    pub fn empty() -> Self {
        Self { ticks: Vec::new() }
    }
}

impl InputSource for ScriptInput {
    fn read_edges(&mut self) -> Result<GridEdges, PeripheralError> {
        if self.ticks.is_empty() {
            Ok(GridEdges::default())
        } else {
            self.ticks.remove(0)
        }
    }
}

// ============================================================================
// Edge helpers
// ============================================================================

/// Builds a `GridEdges` with the given pressed indices.
pub fn edges_pressed(indices: &[usize]) -> GridEdges {
    let mut edges = GridEdges::default();
    for &idx in indices {
        edges.pressed.push(idx).unwrap();
    }
    edges
}
