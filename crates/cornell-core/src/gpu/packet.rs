//! Bit packing of a processed triangle into the six-word register layout.
//!
//! Vertex fields are flattened as `[x0, y0, z0, x1, y1, z1, x2, y2, z2]`
//! and paired low-then-high into words 0-3; the ninth field shares word 4
//! with the color. Depth is written as 16-bit two's complement.

use ::fixed::types::I8F24;
use raster_registers::{DepthColorWord, FieldPairWord, InvAreaWord, Register, PACKET_WORDS};

use crate::render::{ProcessedTriangle, ScreenVertex};

/// One triangle as written to the peripheral, in write order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrianglePacket {
    pub words: [u32; PACKET_WORDS],
}

impl TrianglePacket {
    /// Pack a processed triangle.
    pub fn encode(tri: &ProcessedTriangle) -> Self {
        let f = flatten(&tri.vertices);

        Self {
            words: [
                FieldPairWord::new(f[0], f[1]).to_raw(),
                FieldPairWord::new(f[2], f[3]).to_raw(),
                FieldPairWord::new(f[4], f[5]).to_raw(),
                FieldPairWord::new(f[6], f[7]).to_raw(),
                DepthColorWord::new(f[8], tri.color).to_raw(),
                InvAreaWord::new(tri.inv_area.to_bits()).to_raw(),
            ],
        }
    }

    /// Recover the triangle from raw words, as the receiver sees it.
    pub fn decode(&self) -> ProcessedTriangle {
        // Reserved bits of word 4 are ignored on receive.
        let rsvd = DepthColorWord::RSVD_MASK << DepthColorWord::RSVD_OFFSET;
        let tail_bits = self.words[4] & !rsvd;

        // Safety: word 4's reserved field is cleared above; the other words
        // have no reserved bits.
        let pairs = [0usize, 1, 2, 3].map(|i| unsafe { FieldPairWord::from_raw(self.words[i]) });
        let tail = unsafe { DepthColorWord::from_raw(tail_bits) };
        let area = unsafe { InvAreaWord::from_raw(self.words[5]) };

        let mut f = [0u16; 9];
        for (i, pair) in pairs.iter().enumerate() {
            f[2 * i] = pair.lo();
            f[2 * i + 1] = pair.hi();
        }
        f[8] = tail.depth();

        let vertex = |i: usize| ScreenVertex {
            x: f[3 * i],
            y: f[3 * i + 1],
            z: f[3 * i + 2] as i16,
        };

        ProcessedTriangle {
            vertices: [vertex(0), vertex(1), vertex(2)],
            color: tail.color(),
            inv_area: I8F24::from_bits(area.inv_area()),
        }
    }
}

fn flatten(vertices: &[ScreenVertex; 3]) -> [u16; 9] {
    let mut f = [0u16; 9];
    for (i, v) in vertices.iter().enumerate() {
        f[3 * i] = v.x;
        f[3 * i + 1] = v.y;
        f[3 * i + 2] = v.z as u16;
    }
    f
}
