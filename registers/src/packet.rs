//! Packet word types.
//!
//! Words 0-3 each carry two 16-bit vertex fields, word 4 carries the last
//! vertex field plus the color byte, word 5 carries the inverse double area.

/// Two 16-bit vertex fields in one word (words 0-3).
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct FieldPairWord(u32);

impl core::default::Default for FieldPairWord {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for FieldPairWord {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl FieldPairWord {
    pub const LO_OFFSET: usize = 0;
    pub const LO_WIDTH: usize = 16;
    pub const LO_MASK: u32 = 0xFFFF;

    pub const HI_OFFSET: usize = 16;
    pub const HI_WIDTH: usize = 16;
    pub const HI_MASK: u32 = 0xFFFF;

    /// Build from the low (earlier) and high (later) vertex fields.
    #[inline(always)]
    #[must_use]
    pub fn new(lo: u16, hi: u16) -> Self {
        let mut word = Self::default();
        word.set_lo(lo);
        word.set_hi(hi);
        word
    }

    /// Earlier vertex field, bits [15:0].
    #[inline(always)]
    #[must_use]
    pub fn lo(&self) -> u16 {
        ((self.0 >> Self::LO_OFFSET) & Self::LO_MASK) as u16
    }

    #[inline(always)]
    pub fn set_lo(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::LO_MASK << Self::LO_OFFSET))
            | ((val & Self::LO_MASK) << Self::LO_OFFSET);
    }

    /// Later vertex field, bits [31:16].
    #[inline(always)]
    #[must_use]
    pub fn hi(&self) -> u16 {
        ((self.0 >> Self::HI_OFFSET) & Self::HI_MASK) as u16
    }

    #[inline(always)]
    pub fn set_hi(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::HI_MASK << Self::HI_OFFSET))
            | ((val & Self::HI_MASK) << Self::HI_OFFSET);
    }
}

impl core::fmt::Debug for FieldPairWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldPairWord")
            .field("lo", &self.lo())
            .field("hi", &self.hi())
            .finish()
    }
}

/// Last vertex field and color byte (word 4).
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DepthColorWord(u32);

impl core::default::Default for DepthColorWord {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DepthColorWord {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl DepthColorWord {
    pub const DEPTH_OFFSET: usize = 0;
    pub const DEPTH_WIDTH: usize = 16;
    pub const DEPTH_MASK: u32 = 0xFFFF;

    pub const COLOR_OFFSET: usize = 16;
    pub const COLOR_WIDTH: usize = 8;
    pub const COLOR_MASK: u32 = 0xFF;

    pub const RSVD_OFFSET: usize = 24;
    pub const RSVD_WIDTH: usize = 8;
    pub const RSVD_MASK: u32 = 0xFF;

    #[inline(always)]
    #[must_use]
    pub fn new(depth: u16, color: u8) -> Self {
        let mut word = Self::default();
        word.set_depth(depth);
        word.set_color(color);
        word
    }

    /// Vertex 2 depth field, bits [15:0].
    #[inline(always)]
    #[must_use]
    pub fn depth(&self) -> u16 {
        ((self.0 >> Self::DEPTH_OFFSET) & Self::DEPTH_MASK) as u16
    }

    #[inline(always)]
    pub fn set_depth(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::DEPTH_MASK << Self::DEPTH_OFFSET))
            | ((val & Self::DEPTH_MASK) << Self::DEPTH_OFFSET);
    }

    /// RRRGGGBB color, bits [23:16].
    #[inline(always)]
    #[must_use]
    pub fn color(&self) -> u8 {
        ((self.0 >> Self::COLOR_OFFSET) & Self::COLOR_MASK) as u8
    }

    #[inline(always)]
    pub fn set_color(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::COLOR_MASK << Self::COLOR_OFFSET))
            | ((val & Self::COLOR_MASK) << Self::COLOR_OFFSET);
    }

    /// Reserved, must be zero.
    #[inline(always)]
    #[must_use]
    pub fn rsvd(&self) -> u8 {
        ((self.0 >> Self::RSVD_OFFSET) & Self::RSVD_MASK) as u8
    }
}

impl core::fmt::Debug for DepthColorWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DepthColorWord")
            .field("depth", &self.depth())
            .field("color", &self.color())
            .field("rsvd", &self.rsvd())
            .finish()
    }
}

/// Inverse double area in signed Q8.24 (word 5).
///
/// The rasterizer multiplies its edge-function numerators by this value to
/// get barycentric weights without a per-pixel divide.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct InvAreaWord(u32);

impl core::default::Default for InvAreaWord {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for InvAreaWord {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl InvAreaWord {
    pub const INV_AREA_OFFSET: usize = 0;
    pub const INV_AREA_WIDTH: usize = 32;

    #[inline(always)]
    #[must_use]
    pub fn new(bits: i32) -> Self {
        Self(bits as u32)
    }

    /// Raw Q8.24 bits.
    #[inline(always)]
    #[must_use]
    pub fn inv_area(&self) -> i32 {
        self.0 as i32
    }

    #[inline(always)]
    pub fn set_inv_area(&mut self, bits: i32) {
        self.0 = bits as u32;
    }
}

impl core::fmt::Debug for InvAreaWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InvAreaWord")
            .field("inv_area", &self.inv_area())
            .finish()
    }
}
