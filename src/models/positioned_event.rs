use super::event::Event;
use serde::Serialize;

/// An event placed on the day timeline. Derived, never persisted.
///
/// Horizontal geometry is expressed as fractions of the day column width,
/// vertical geometry in timeline units (minutes scaled by the configured
/// pixels-per-minute).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedEvent {
    pub event: Event,
    pub column: usize,
    /// Open-column records still live when the event starts.
    pub overlap_count: usize,
    pub width_fraction: f64,
    pub left_fraction: f64,
    pub top_offset: f64,
    pub height: f64,
}
