//! Triangle processing types and the per-frame pipeline.

pub mod frame;
pub mod mesh;
pub mod projection;
pub mod transform;

use ::fixed::types::I8F24;

/// Screen-space vertex after perspective divide and viewport mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenVertex {
    /// Pixel column, 0 = left edge.
    pub x: u16,
    /// Pixel row, 0 = top edge.
    pub y: u16,
    /// NDC depth scaled by 255.
    pub z: i16,
}

/// A triangle accepted by the processor, ready for packing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessedTriangle {
    pub vertices: [ScreenVertex; 3],
    /// RRRGGGBB, copied from the mesh.
    pub color: u8,
    /// `|2 / A2|` in Q8.24, where A2 is the signed double area in pixels.
    pub inv_area: I8F24,
}

/// Why a triangle produced no packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CullReason {
    /// All vertices have `x < -w`.
    Left,
    /// All vertices have `x > w`.
    Right,
    /// All vertices have `y < -w`.
    Bottom,
    /// All vertices have `y > w`.
    Top,
    /// All vertices have `z < 0` (behind the camera).
    Near,
    /// All vertices have `z > w`.
    Far,
    /// Some vertex has `w <= MIN_CLIP_W`.
    DegenerateW,
    /// The quantized screen triangle has zero area.
    ZeroArea,
}

impl CullReason {
    /// True for the six clip-plane rejections.
    pub fn is_frustum(self) -> bool {
        !matches!(self, CullReason::DegenerateW | CullReason::ZeroArea)
    }
}

/// Triangle counters, per frame or summed over a run.
///
/// Totals accumulate over unbounded runs, hence 64-bit counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Mesh triangles examined.
    pub processed: u64,
    /// Packets written to the sink.
    pub emitted: u64,
    /// Rejected wholly outside one clip plane.
    pub culled_frustum: u64,
    /// Rejected for a near-zero or negative w.
    pub culled_w: u64,
    /// Rejected for zero screen-space area.
    pub culled_area: u64,
}

impl FrameStats {
    /// Count one rejection.
    pub fn record_cull(&mut self, reason: CullReason) {
        match reason {
            CullReason::DegenerateW => self.culled_w += 1,
            CullReason::ZeroArea => self.culled_area += 1,
            _ => self.culled_frustum += 1,
        }
    }

    /// Total rejections of any kind.
    pub fn culled(&self) -> u64 {
        self.culled_frustum + self.culled_w + self.culled_area
    }

    /// Fold another frame's counters into this one.
    pub fn accumulate(&mut self, other: &FrameStats) {
        self.processed += other.processed;
        self.emitted += other.emitted;
        self.culled_frustum += other.culled_frustum;
        self.culled_w += other.culled_w;
        self.culled_area += other.culled_area;
    }
}
