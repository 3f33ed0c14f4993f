//! Fixed-capacity recording sink.

use heapless::Vec;

use super::driver::PacketSink;
use crate::render::ProcessedTriangle;

/// Returned when a `CaptureSink` is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureFull;

/// Records processed triangles instead of writing registers.
///
/// Feeds the software reference renderer and lets frames be inspected
/// without a peripheral.
#[derive(Debug, Default)]
pub struct CaptureSink<const N: usize> {
    triangles: Vec<ProcessedTriangle, N>,
}

impl<const N: usize> CaptureSink<N> {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn triangles(&self) -> &[ProcessedTriangle] {
        &self.triangles
    }

    /// Drop everything captured so far.
    pub fn clear(&mut self) {
        self.triangles.clear();
    }
}

impl<const N: usize> PacketSink for CaptureSink<N> {
    type Error = CaptureFull;

    fn emit(&mut self, tri: &ProcessedTriangle) -> Result<(), Self::Error> {
        self.triangles.push(*tri).map_err(|_| CaptureFull)
    }
}
