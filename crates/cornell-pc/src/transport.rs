//! Register bus for the PC host: mirrors the packet window in memory and
//! traces every completed packet.

use cornell_core::gpu::TrianglePacket;
use cornell_hal::RegisterBus;
use raster_registers::{PACKET_SIZE, PACKET_WORDS, WORD5_OFFSET};

/// Trace bus error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceBusError {
    /// Offset is unaligned or past the end of the packet window.
    OutOfWindow { offset: u32 },
}

/// In-memory stand-in for the raster peripheral.
///
/// The last word of a packet acts as the latch: when it lands, the mirror
/// is decoded and logged at trace level.
#[derive(Debug, Default)]
pub struct TraceBus {
    mirror: [u32; PACKET_WORDS],
    words_written: u64,
    packets_latched: u64,
}

impl TraceBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current register window contents.
    pub fn mirror(&self) -> &[u32; PACKET_WORDS] {
        &self.mirror
    }

    pub fn words_written(&self) -> u64 {
        self.words_written
    }

    pub fn packets_latched(&self) -> u64 {
        self.packets_latched
    }
}

impl RegisterBus for TraceBus {
    type Error = TraceBusError;

    fn write_word(&mut self, offset: u32, data: u32) -> Result<(), Self::Error> {
        if offset % 4 != 0 || offset as usize >= PACKET_SIZE {
            return Err(TraceBusError::OutOfWindow { offset });
        }
        self.mirror[offset as usize / 4] = data;
        self.words_written += 1;

        if offset == WORD5_OFFSET {
            self.packets_latched += 1;
            if log::log_enabled!(log::Level::Trace) {
                let tri = TrianglePacket { words: self.mirror }.decode();
                log::trace!(
                    "packet {}: words={:08X?} tri={:?}",
                    self.packets_latched,
                    self.mirror,
                    tri
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_on_last_word() {
        let mut bus = TraceBus::new();
        for (i, offset) in raster_registers::WORD_OFFSETS.iter().enumerate() {
            bus.write_word(*offset, i as u32 + 1).unwrap();
        }
        assert_eq!(bus.mirror(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(bus.words_written(), 6);
        assert_eq!(bus.packets_latched(), 1);
    }

    #[test]
    fn rejects_offsets_outside_window() {
        let mut bus = TraceBus::new();
        assert_eq!(
            bus.write_word(0x18, 0),
            Err(TraceBusError::OutOfWindow { offset: 0x18 })
        );
        assert_eq!(
            bus.write_word(0x02, 0),
            Err(TraceBusError::OutOfWindow { offset: 0x02 })
        );
        assert_eq!(bus.words_written(), 0);
    }
}
