//! Render configuration. `Default` is the reference setup: 320x240 raster,
//! 60 degree 4:3 projection over 1..300, radius-100 orbit.

use crate::render::projection::Projection;
use crate::render::transform::Viewport;
use crate::scene::camera::OrbitConfig;

/// Frames between periodic statistics summaries.
pub const DEFAULT_LOG_INTERVAL: u32 = 600;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub viewport: Viewport,
    pub projection: Projection,
    pub orbit: OrbitConfig,
    /// Emit an `info!` summary every this many frames; 0 disables it.
    pub log_interval: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            projection: Projection::default(),
            orbit: OrbitConfig::default(),
            log_interval: DEFAULT_LOG_INTERVAL,
        }
    }
}
