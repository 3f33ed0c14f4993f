#![no_std]

/// Abstracts the 32-bit register window of the raster peripheral.
///
/// Offsets are byte offsets from the peripheral base. Writes are
/// fire-and-forget: the receiver exposes no ready or done signal, so
/// implementations must not wait for one.
pub trait RegisterBus {
    type Error: core::fmt::Debug;

    /// Write one 32-bit word at `offset` bytes from the base.
    fn write_word(&mut self, offset: u32, data: u32) -> Result<(), Self::Error>;
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    type Error = B::Error;

    fn write_word(&mut self, offset: u32, data: u32) -> Result<(), Self::Error> {
        (**self).write_word(offset, data)
    }
}

/// Decides when the frame loop stops. Checked once per frame boundary.
pub trait StopSignal {
    /// Returns true once no further frames should be produced.
    fn should_stop(&mut self, frame: u64) -> bool;
}

/// Never stops; the bare-metal target runs forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunForever;

impl StopSignal for RunForever {
    fn should_stop(&mut self, _frame: u64) -> bool {
        false
    }
}

/// Stops after a fixed number of frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameBudget(pub u64);

impl StopSignal for FrameBudget {
    fn should_stop(&mut self, frame: u64) -> bool {
        frame >= self.0
    }
}

impl StopSignal for &core::sync::atomic::AtomicBool {
    fn should_stop(&mut self, _frame: u64) -> bool {
        self.load(core::sync::atomic::Ordering::Relaxed)
    }
}
