// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Readback buffer planning for texture captures.

use super::Dimensions;
use super::row_padding::{RowLayout, compute_row_layout};
use super::unpack::unpack;
use crate::error::Error;
use crate::pixel_formats::TextureFormat;
use crate::pixel_formats::png_support::encode_png;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Parameters for the texture->buffer copy command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CopyRegion {
    pub bytes_per_row: u32,
    /// Zero means "use `extent.height`", following the copy API convention.
    pub rows_per_image: u32,
    pub extent: Dimensions,
}

impl CopyRegion {
    /// `rows_per_image` for APIs that take an optional value.
    pub const fn rows_per_image(&self) -> Option<u32> {
        if self.rows_per_image == 0 {
            None
        } else {
            Some(self.rows_per_image)
        }
    }
}

/// Everything needed to size a readback buffer and record a copy into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapturePlan {
    pub row_layout: RowLayout,
    pub total_buffer_bytes: u64,
    pub copy_region: CopyRegion,
}

/// Plans a capture of `dims` pixels of `bytes_per_pixel` bytes.
pub fn plan_capture(dims: Dimensions, bytes_per_pixel: u32) -> CapturePlan {
    let row_layout = compute_row_layout(dims.width, bytes_per_pixel);
    CapturePlan {
        row_layout,
        total_buffer_bytes: row_layout.padded_bytes as u64 * dims.height as u64,
        copy_region: CopyRegion {
            bytes_per_row: row_layout.padded_bytes,
            rows_per_image: 0,
            extent: dims,
        },
    }
}

/// [`plan_capture`] for 4-byte pixels, the common color target case.
pub fn plan_capture_rgba8(dims: Dimensions) -> CapturePlan {
    plan_capture(dims, 4)
}

impl CapturePlan {
    /// Plans a capture using the pixel size from the format table.
    ///
    /// Block-compressed formats have no per-pixel size and are rejected.
    pub fn for_format(dims: Dimensions, format: TextureFormat) -> Result<Self, Error> {
        let bytes_per_pixel = format
            .bytes_per_pixel()
            .ok_or(Error::CompressedCapture(format))?;
        Ok(plan_capture(dims, bytes_per_pixel))
    }

    /// Length of the tightly packed image once padding is stripped.
    pub fn unpacked_bytes(&self) -> u64 {
        self.row_layout.unpadded_bytes as u64 * self.copy_region.extent.height as u64
    }
}

/// Tightly packed pixels read back from a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub dimensions: Dimensions,
    pub format: TextureFormat,
    /// Row-major, `dimensions.width * bytes_per_pixel` bytes per row.
    pub pixels: Vec<u8>,
}

impl CapturedImage {
    /// Strips the row padding from a completed readback.
    ///
    /// # Panics
    /// If `plan` was not made for `format`, or `padded` is shorter than the plan.
    pub fn from_readback(plan: &CapturePlan, format: TextureFormat, padded: &[u8]) -> Result<Self, Error> {
        let bytes_per_pixel = format
            .bytes_per_pixel()
            .ok_or(Error::CompressedCapture(format))?;
        assert_eq!(
            plan.row_layout,
            compute_row_layout(plan.copy_region.extent.width, bytes_per_pixel),
            "Capture plan was not made for {}",
            format
        );
        Ok(CapturedImage {
            dimensions: plan.copy_region.extent,
            format,
            pixels: unpack(padded, plan.copy_region.extent, bytes_per_pixel),
        })
    }

    /// The bytes of the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return None;
        }
        let bytes_per_pixel = self.format.bytes_per_pixel()? as usize;
        let start = (y as usize * self.dimensions.width as usize + x as usize) * bytes_per_pixel;
        self.pixels.get(start..start + bytes_per_pixel)
    }

    pub fn encode_png<W: Write>(&self, writer: W) -> Result<(), Error> {
        encode_png(writer, &self.pixels, self.dimensions, self.format)
    }

    /// Encodes the capture as a PNG file at `path`.
    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.encode_png(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CapturePlan, CapturedImage, plan_capture, plan_capture_rgba8};
    use crate::layout::Dimensions;
    use crate::pixel_formats::TextureFormat;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn plan_100x100() {
        let plan = plan_capture_rgba8(Dimensions::new(100, 100));
        assert_eq!(plan.row_layout.padded_bytes, 512);
        assert_eq!(plan.total_buffer_bytes, 51_200);
        assert_eq!(plan.copy_region.bytes_per_row, 512);
        assert_eq!(plan.copy_region.rows_per_image, 0);
        assert_eq!(plan.copy_region.rows_per_image(), None);
        assert_eq!(plan.copy_region.extent, Dimensions::new(100, 100));
        assert_eq!(plan.unpacked_bytes(), 40_000);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn total_does_not_overflow_u32() {
        let plan = plan_capture(Dimensions::new(16384, 16384), 16);
        assert_eq!(plan.total_buffer_bytes, 16384 * 16 * 16384);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn degenerate() {
        let plan = plan_capture(Dimensions::new(0, 10), 4);
        assert_eq!(plan.total_buffer_bytes, 0);
        let plan = plan_capture(Dimensions::new(10, 0), 4);
        assert_eq!(plan.total_buffer_bytes, 0);
        assert_eq!(plan.row_layout.padded_bytes, 256);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn by_format() {
        let dims = Dimensions::new(3, 2);
        let plan = CapturePlan::for_format(dims, TextureFormat::Rgba16Float).unwrap();
        assert_eq!(plan.row_layout.unpadded_bytes, 24);
        assert!(matches!(
            CapturePlan::for_format(dims, TextureFormat::Bc1RgbaUnorm),
            Err(crate::Error::CompressedCapture(TextureFormat::Bc1RgbaUnorm))
        ));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn captured_image_from_readback() {
        let dims = Dimensions::new(2, 2);
        let plan = plan_capture_rgba8(dims);
        let mut readback = vec![0xAA; plan.total_buffer_bytes as usize];
        readback[..8].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        readback[256..264].copy_from_slice(&[9, 10, 11, 12, 13, 14, 15, 16]);
        let image = CapturedImage::from_readback(&plan, TextureFormat::Rgba8Unorm, &readback).unwrap();
        assert_eq!(image.dimensions, dims);
        assert_eq!(image.pixels, (1..=16).collect::<Vec<u8>>());
        assert_eq!(image.pixel(1, 1), Some(&[13, 14, 15, 16][..]));
        assert_eq!(image.pixel(2, 0), None);

        let mut png = Vec::new();
        image.encode_png(&mut png).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    #[should_panic(expected = "was not made for")]
    fn mismatched_plan() {
        let plan = plan_capture(Dimensions::new(3, 1), 2);
        let _ = CapturedImage::from_readback(&plan, TextureFormat::Rgba8Unorm, &[0; 256]);
    }
}
