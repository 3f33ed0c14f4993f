//! Packet emission to the raster peripheral.

pub mod capture;
pub mod driver;
pub mod mmio;
pub mod packet;

pub use capture::{CaptureFull, CaptureSink};
pub use driver::{EmitError, PacketSink, RegisterSink};
pub use mmio::{MmioBus, MmioError};
pub use packet::TrianglePacket;
