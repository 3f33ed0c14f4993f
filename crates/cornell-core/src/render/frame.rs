//! Per-frame pipeline and the frame loop.
//!
//! Single-threaded and run-to-completion: one camera tick, one
//! projection * view product, then every mesh triangle in order, each
//! accepted triangle emitted before the next is processed.

use cornell_hal::StopSignal;
use glam::Mat4;

use crate::config::RenderConfig;
use crate::gpu::driver::PacketSink;
use crate::math::matrix;
use crate::render::mesh::MeshTriangle;
use crate::render::transform::{process_triangle, Viewport};
use crate::render::FrameStats;
use crate::scene::camera::CameraState;
use crate::scene::Scene;

/// Frame-invariant pipeline state.
pub struct Pipeline {
    viewport: Viewport,
    projection: Mat4,
}

impl Pipeline {
    /// Derive the projection matrix once.
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            viewport: config.viewport,
            projection: config.projection.matrix(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Combined projection * view for this frame.
    pub fn projection_view(&self, camera: &CameraState) -> Mat4 {
        matrix::multiply(&self.projection, &camera.view_matrix())
    }

    /// Process every mesh triangle from one camera pose and emit the
    /// accepted ones.
    pub fn render_frame<S: PacketSink>(
        &self,
        camera: &CameraState,
        mesh: &[MeshTriangle],
        sink: &mut S,
    ) -> Result<FrameStats, S::Error> {
        let projection_view = self.projection_view(camera);
        let mut stats = FrameStats::default();

        for tri in mesh {
            stats.processed += 1;
            match process_triangle(tri, &projection_view, &self.viewport) {
                Ok(processed) => {
                    sink.emit(&processed)?;
                    stats.emitted += 1;
                }
                Err(reason) => stats.record_cull(reason),
            }
        }

        Ok(stats)
    }
}

/// Owns the scene and the sink and drives frames until told to stop.
pub struct FrameLoop<'a, S: PacketSink> {
    pipeline: Pipeline,
    scene: Scene<'a>,
    sink: S,
    log_interval: u32,
    frame: u64,
    totals: FrameStats,
}

impl<'a, S: PacketSink> FrameLoop<'a, S> {
    pub fn new(config: &RenderConfig, mesh: &'a [MeshTriangle], sink: S) -> Self {
        Self {
            pipeline: Pipeline::new(config),
            scene: Scene::new(config.orbit, mesh),
            sink,
            log_interval: config.log_interval,
            frame: 0,
            totals: FrameStats::default(),
        }
    }

    /// Tick the camera, then render one frame.
    pub fn step(&mut self) -> Result<FrameStats, S::Error> {
        self.scene.advance();
        let stats = self
            .pipeline
            .render_frame(&self.scene.camera, self.scene.mesh, &mut self.sink)?;

        self.frame += 1;
        self.totals.accumulate(&stats);

        log::debug!(
            "frame={} emitted={} culled(frustum={}, w={}, area={})",
            self.frame,
            stats.emitted,
            stats.culled_frustum,
            stats.culled_w,
            stats.culled_area
        );
        if self.log_interval != 0 && self.frame % self.log_interval as u64 == 0 {
            log::info!(
                "frame={} theta={:.3} yaw={:.3} emitted/frame={} total_emitted={}",
                self.frame,
                self.scene.camera.theta,
                self.scene.camera.yaw,
                stats.emitted,
                self.totals.emitted
            );
        }

        Ok(stats)
    }

    /// Run frames until `stop` reports true at a frame boundary. Returns the
    /// number of frames rendered by this call.
    pub fn run<T: StopSignal>(&mut self, mut stop: T) -> Result<u64, S::Error> {
        let start = self.frame;
        while !stop.should_stop(self.frame) {
            self.step()?;
        }
        Ok(self.frame - start)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn camera(&self) -> &CameraState {
        &self.scene.camera
    }

    /// Counters summed over all frames so far.
    pub fn totals(&self) -> &FrameStats {
        &self.totals
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
