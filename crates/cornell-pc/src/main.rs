//! PC host for the Cornell box geometry pipeline.
//!
//! Streams frames into an in-memory register mirror (the peripheral stand-in)
//! or renders one fixed-camera frame with the software reference renderer.

mod error;
mod reference;
mod transport;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use glam::Vec3;

use cornell_core::assets::cornell_box::CORNELL_BOX;
use cornell_core::gpu::RegisterSink;
use cornell_core::{CameraState, FrameLoop, Pipeline, RenderConfig};
use cornell_hal::{FrameBudget, RunForever};

use error::HostError;
use reference::Framebuffer;
use transport::TraceBus;

/// Camera pose used for reference snapshots.
const SNAPSHOT_POSITION: Vec3 = Vec3::new(127.5, 127.5, -20.0);
const SNAPSHOT_YAW: f32 = core::f32::consts::PI / 12.0;

#[derive(Parser, Debug)]
#[command(name = "cornell-pc")]
#[command(about = "Cornell box geometry host: register trace and reference renderer")]
struct Args {
    /// Frames to stream before exiting (0 = run until killed)
    #[arg(long, default_value_t = 0)]
    frames: u64,

    /// Render one frame from the fixed snapshot camera and print it
    #[arg(long)]
    snapshot: bool,

    /// Also write the snapshot as a binary PPM (implies --snapshot)
    #[arg(long)]
    ppm: Option<PathBuf>,

    /// Orbit angle step per frame, radians
    #[arg(long)]
    theta_step: Option<f32>,

    /// Orbit radius in model units
    #[arg(long)]
    radius: Option<f32>,

    /// Frames between statistics summaries (0 disables)
    #[arg(long)]
    log_interval: Option<u32>,
}

impl Args {
    fn render_config(&self) -> Result<RenderConfig, HostError> {
        let mut config = RenderConfig::default();

        if let Some(step) = self.theta_step {
            if !step.is_finite() {
                return Err(HostError::InvalidArgument(format!(
                    "--theta-step must be finite, got {step}"
                )));
            }
            config.orbit.theta_step = step;
        }
        if let Some(radius) = self.radius {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(HostError::InvalidArgument(format!(
                    "--radius must be positive, got {radius}"
                )));
            }
            config.orbit.radius = radius;
        }
        if let Some(interval) = self.log_interval {
            config.log_interval = interval;
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), HostError> {
    let config = args.render_config()?;
    log::info!("cornell-pc: {:?}", config);

    if args.snapshot || args.ppm.is_some() {
        snapshot(&config, args.ppm.as_deref())
    } else {
        stream(&config, args.frames)
    }
}

/// Run the orbiting frame loop against the register mirror.
fn stream(config: &RenderConfig, frames: u64) -> Result<(), HostError> {
    let sink = RegisterSink::new(TraceBus::new());
    let mut frame_loop = FrameLoop::new(config, &CORNELL_BOX, sink);

    let result = if frames == 0 {
        log::info!("Streaming until interrupted");
        frame_loop.run(RunForever)
    } else {
        frame_loop.run(FrameBudget(frames))
    };
    let rendered = result.map_err(|e| HostError::Bus(format!("{e:?}")))?;

    let totals = frame_loop.totals();
    let bus = frame_loop.sink().bus();
    log::info!(
        "Streamed {} frames: {} packets ({} words), {} culled",
        rendered,
        bus.packets_latched(),
        bus.words_written(),
        totals.culled()
    );
    log::debug!("Last packet words: {:08X?}", bus.mirror());
    Ok(())
}

/// Render one frame from the snapshot camera with the reference renderer.
fn snapshot(config: &RenderConfig, ppm: Option<&Path>) -> Result<(), HostError> {
    let pipeline = Pipeline::new(config);
    let camera = CameraState::looking_from(SNAPSHOT_POSITION, SNAPSHOT_YAW);

    let viewport = pipeline.viewport();
    let mut fb = Framebuffer::new(viewport.width as usize, viewport.height as usize);
    let stats = fb.draw_frame(&pipeline, &camera, &CORNELL_BOX);

    println!("3D Renderer Test");
    println!("================");
    println!(
        "Camera: ({:.1}, {:.1}, {:.1}), Yaw: {:.2} rad\n",
        camera.position.x, camera.position.y, camera.position.z, camera.yaw
    );
    print!("{}", fb.ascii_preview());
    println!("\nStatistics:");
    println!("  Triangles rendered: {}", stats.emitted);
    println!("  Triangles culled: {}", stats.culled());
    println!("  Total triangles: {}", stats.processed);

    if let Some(path) = ppm {
        fb.write_ppm(path)?;
    }
    Ok(())
}
