//! Packet sinks: where processed triangles go.
//!
//! `RegisterSink` is the hardware path, generic over a `RegisterBus`.
//! Tests and the reference renderer use other sinks.

use cornell_hal::RegisterBus;

use super::packet::TrianglePacket;
use crate::render::ProcessedTriangle;

/// Consumer of accepted triangles, one call per triangle.
pub trait PacketSink {
    type Error: core::fmt::Debug;

    fn emit(&mut self, tri: &ProcessedTriangle) -> Result<(), Self::Error>;
}

impl<S: PacketSink + ?Sized> PacketSink for &mut S {
    type Error = S::Error;

    fn emit(&mut self, tri: &ProcessedTriangle) -> Result<(), Self::Error> {
        (**self).emit(tri)
    }
}

/// Error type for register emission, generic over bus errors.
#[derive(Debug)]
pub enum EmitError<E: core::fmt::Debug> {
    /// The bus rejected a word write.
    Transport(E),
}

impl<E: core::fmt::Debug> From<E> for EmitError<E> {
    fn from(e: E) -> Self {
        EmitError::Transport(e)
    }
}

/// Packs triangles and writes them to the peripheral's register window.
///
/// There is no completion handshake: words are written in order and the
/// next triangle follows immediately.
pub struct RegisterSink<B: RegisterBus> {
    bus: B,
    /// Packets written since construction.
    packets: u64,
}

impl<B: RegisterBus> RegisterSink<B> {
    pub fn new(bus: B) -> Self {
        Self { bus, packets: 0 }
    }

    /// Write one already-packed triangle.
    pub fn write_packet(&mut self, packet: &TrianglePacket) -> Result<(), EmitError<B::Error>> {
        for (&offset, &word) in raster_registers::WORD_OFFSETS.iter().zip(&packet.words) {
            self.bus.write_word(offset, word)?;
        }
        self.packets += 1;
        Ok(())
    }

    /// Packets written so far.
    pub fn packets(&self) -> u64 {
        self.packets
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn into_bus(self) -> B {
        self.bus
    }
}

impl<B: RegisterBus> PacketSink for RegisterSink<B> {
    type Error = EmitError<B::Error>;

    fn emit(&mut self, tri: &ProcessedTriangle) -> Result<(), Self::Error> {
        self.write_packet(&TrianglePacket::encode(tri))
    }
}
