//! Triangle packet register map for the raster peripheral.
//!
//! One accepted triangle is delivered as six consecutive 32-bit words at a
//! fixed AXI base address. Word types here carry the field offsets, widths
//! and masks; the host packs into them and never hand-shifts bits.
#![no_std]
#![allow(clippy::identity_op)]
#![allow(clippy::unnecessary_cast)]

pub mod packet;
pub mod reg;

pub use packet::{DepthColorWord, FieldPairWord, InvAreaWord};
pub use reg::Register;

/// Number of 32-bit words in one triangle packet.
pub const PACKET_WORDS: usize = 6;

/// Byte size of one triangle packet.
pub const PACKET_SIZE: usize = PACKET_WORDS * 4;

/// Byte offset of packet word 0 (v0.y : v0.x).
pub const WORD0_OFFSET: u32 = 0x00;
/// Byte offset of packet word 1 (v1.x : v0.z).
pub const WORD1_OFFSET: u32 = 0x04;
/// Byte offset of packet word 2 (v1.z : v1.y).
pub const WORD2_OFFSET: u32 = 0x08;
/// Byte offset of packet word 3 (v2.y : v2.x).
pub const WORD3_OFFSET: u32 = 0x0C;
/// Byte offset of packet word 4 (color : v2.z).
pub const WORD4_OFFSET: u32 = 0x10;
/// Byte offset of packet word 5 (inverse double area, Q8.24).
pub const WORD5_OFFSET: u32 = 0x14;

/// Word offsets in the order the receiver latches them.
pub const WORD_OFFSETS: [u32; PACKET_WORDS] = [
    WORD0_OFFSET,
    WORD1_OFFSET,
    WORD2_OFFSET,
    WORD3_OFFSET,
    WORD4_OFFSET,
    WORD5_OFFSET,
];

/// Raster target width in pixels.
pub const SCREEN_WIDTH: u16 = 320;
/// Raster target height in pixels.
pub const SCREEN_HEIGHT: u16 = 240;

/// Fractional bits of the inverse-area field.
pub const INV_AREA_FRAC_BITS: u32 = 24;
