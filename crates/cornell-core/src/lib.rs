//! Platform-agnostic geometry host for the Cornell box raster peripheral.
//!
//! Per frame: advance the orbit camera, build projection * view, push every
//! mesh triangle through clip-space culling, perspective divide and screen
//! mapping, and emit the accepted ones as six-word register packets.
#![no_std]

pub mod assets;
pub mod config;
pub mod gpu;
pub mod math;
pub mod render;
pub mod scene;

pub use config::RenderConfig;
pub use gpu::{PacketSink, RegisterSink};
pub use render::frame::{FrameLoop, Pipeline};
pub use scene::camera::CameraState;
