//! Software reference renderer.
//!
//! Draws accepted triangles as wireframes into a character framebuffer,
//! then previews it in the terminal or writes a binary PPM. Outlines use
//! unclamped screen coordinates and are clipped per cell, so edges that
//! leave the raster are cut off rather than folded onto the border.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use cornell_core::assets::cornell_box::{GREEN, RED};
use cornell_core::render::mesh::MeshTriangle;
use cornell_core::render::transform::screen_outline;
use cornell_core::render::FrameStats;
use cornell_core::{CameraState, Pipeline};
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{Rgb, RgbImage};

use crate::error::HostError;

/// Empty cell.
pub const BLANK: u8 = b' ';

/// Preview keeps every 4th row and every 2nd column (80x60 for 320x240).
const PREVIEW_ROW_STEP: usize = 4;
const PREVIEW_COL_STEP: usize = 2;

/// Cell character for a packed color: red and green walls get letters,
/// everything else is drawn as `*`.
pub fn glyph_for(color: u8) -> u8 {
    match color {
        RED => b'R',
        GREEN => b'G',
        _ => b'*',
    }
}

/// RGB for a cell character.
fn cell_rgb(cell: u8) -> Rgb<u8> {
    match cell {
        BLANK => Rgb([0, 0, 0]),
        b'R' => Rgb([255, 0, 0]),
        b'G' => Rgb([0, 255, 0]),
        _ => Rgb([200, 200, 200]),
    }
}

/// Character framebuffer, row-major, origin top-left.
pub struct Framebuffer {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    /// Cell at (x, y), or `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Set a cell; writes outside the buffer are dropped.
    pub fn set(&mut self, x: i32, y: i32, cell: u8) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.cells[y as usize * self.width + x as usize] = cell;
        }
    }

    /// Bresenham line, both endpoints inclusive.
    pub fn draw_line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, cell: u8) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.set(x0, y0, cell);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Wireframe outline of one triangle in signed screen coordinates.
    pub fn draw_outline(&mut self, outline: &[[i32; 2]; 3], color: u8) {
        let cell = glyph_for(color);
        let [[ax, ay], [bx, by], [cx, cy]] = *outline;
        self.draw_line(ax, ay, bx, by, cell);
        self.draw_line(bx, by, cx, cy, cell);
        self.draw_line(cx, cy, ax, ay, cell);
    }

    /// Run the mesh through the pipeline's accept/reject decisions from one
    /// camera pose and draw every accepted triangle.
    pub fn draw_frame(
        &mut self,
        pipeline: &Pipeline,
        camera: &CameraState,
        mesh: &[MeshTriangle],
    ) -> FrameStats {
        let projection_view = pipeline.projection_view(camera);
        let mut stats = FrameStats::default();

        for tri in mesh {
            stats.processed += 1;
            match screen_outline(tri, &projection_view, pipeline.viewport()) {
                Ok(outline) => {
                    self.draw_outline(&outline, tri.color);
                    stats.emitted += 1;
                }
                Err(reason) => stats.record_cull(reason),
            }
        }
        stats
    }

    /// Downsampled text preview, one line per kept row.
    pub fn ascii_preview(&self) -> String {
        let cols = self.width.div_ceil(PREVIEW_COL_STEP);
        let mut out = String::with_capacity((cols + 1) * self.height.div_ceil(PREVIEW_ROW_STEP));
        for y in (0..self.height).step_by(PREVIEW_ROW_STEP) {
            let row = &self.cells[y * self.width..(y + 1) * self.width];
            out.extend(row.iter().step_by(PREVIEW_COL_STEP).map(|&c| c as char));
            out.push('\n');
        }
        out
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            cell_rgb(self.cells[y as usize * self.width + x as usize])
        })
    }

    /// Write a binary (P6) PPM.
    pub fn write_ppm(&self, path: &Path) -> Result<(), HostError> {
        let file = BufWriter::new(File::create(path)?);
        let encoder =
            PnmEncoder::new(file).with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
        self.to_rgb_image().write_with_encoder(encoder)?;
        log::info!("Saved reference frame to {}", path.display());
        Ok(())
    }
}
