//! Memory-mapped register window.

use cornell_hal::RegisterBus;

/// Bus error for the MMIO window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmioError {
    /// Offset is unaligned or past the end of the packet window.
    OutOfWindow { offset: u32 },
}

/// Volatile 32-bit writes into the peripheral's AXI window.
pub struct MmioBus {
    base: *mut u32,
}

impl MmioBus {
    /// Wrap the peripheral base address.
    ///
    /// # Safety
    ///
    /// `base` must be 4-byte aligned and valid for volatile writes of
    /// `raster_registers::PACKET_SIZE` bytes for the lifetime of the bus,
    /// with no other writer.
    pub unsafe fn new(base: *mut u32) -> Self {
        Self { base }
    }

    pub fn base(&self) -> *mut u32 {
        self.base
    }
}

impl RegisterBus for MmioBus {
    type Error = MmioError;

    fn write_word(&mut self, offset: u32, data: u32) -> Result<(), Self::Error> {
        if offset % 4 != 0 || offset as usize >= raster_registers::PACKET_SIZE {
            return Err(MmioError::OutOfWindow { offset });
        }
        // Safety: offset checked against the window `new` was given.
        unsafe {
            self.base.add(offset as usize / 4).write_volatile(data);
        }
        Ok(())
    }
}
