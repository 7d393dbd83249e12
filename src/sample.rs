use serde::{Deserialize, Serialize};

/// One observed 3D gaze point captured during a tracking session.
///
/// Samples are plain values. The session container stores and returns them
/// without reading their fields, and nothing here constrains their contents:
/// whatever the capture device reported is what gets kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GazeSample {
    /// Device timestamp in microseconds on the tracker clock.
    pub time_us: u64,
    /// Gaze point x coordinate.
    pub x: f64,
    /// Gaze point y coordinate.
    pub y: f64,
    /// Gaze point z coordinate.
    pub z: f64,
}

impl GazeSample {
    #[must_use]
    pub fn new(time_us: u64, x: f64, y: f64, z: f64) -> Self {
        Self { time_us, x, y, z }
    }
}
