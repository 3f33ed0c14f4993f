//! Register trait shared by all packet word types.

/// A fixed-width hardware register value.
pub trait Register: Copy + Default {
    /// Raw storage type of the register.
    type Regwidth: Copy;

    /// Construct from a raw value without checking reserved bits.
    ///
    /// # Safety
    ///
    /// Reserved fields must be zero, as the receiver treats them as
    /// must-be-zero.
    unsafe fn from_raw(val: Self::Regwidth) -> Self;

    /// Raw bits for the bus write.
    fn to_raw(self) -> Self::Regwidth;
}
