//! Application state for the HTTP server.

use crate::state::{self as model_state, ModelSlot};
use crate::time::DayOffsetMode;

/// Shared application state passed to all handlers.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Slot holding the model; empty if loading failed
    pub model: &'static ModelSlot,
    /// How the departure date becomes a day offset
    pub day_offset: DayOffsetMode,
}

impl AppState {
    pub fn new(model: &'static ModelSlot, day_offset: DayOffsetMode) -> Self {
        Self { model, day_offset }
    }

    /// State backed by the process-wide model slot.
    pub fn global(day_offset: DayOffsetMode) -> Self {
        Self::new(model_state::global(), day_offset)
    }
}
