// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! PNG encoding of tightly packed captures.

use crate::error::Error;
use crate::layout::Dimensions;
use crate::pixel_formats::TextureFormat;
use png::{BitDepth, ColorType};
use std::borrow::Cow;
use std::io::Write;

/// How a format's pixels map onto a PNG color type.
fn png_layout(format: TextureFormat) -> Option<(ColorType, BitDepth)> {
    match format {
        TextureFormat::R8Unorm | TextureFormat::Stencil8 => Some((ColorType::Grayscale, BitDepth::Eight)),
        TextureFormat::Rgba8Unorm
        | TextureFormat::Rgba8UnormSrgb
        | TextureFormat::Bgra8Unorm
        | TextureFormat::Bgra8UnormSrgb
        | TextureFormat::Rgba16Float
        | TextureFormat::Rgba32Float => Some((ColorType::Rgba, BitDepth::Eight)),
        TextureFormat::Depth16Unorm => Some((ColorType::Grayscale, BitDepth::Sixteen)),
        _ => None,
    }
}

fn unorm8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts tightly packed pixels to the byte order PNG expects.
fn png_bytes(format: TextureFormat, pixels: &[u8]) -> Cow<'_, [u8]> {
    match format {
        TextureFormat::Bgra8Unorm | TextureFormat::Bgra8UnormSrgb => Cow::Owned(
            pixels
                .chunks_exact(4)
                .flat_map(|bgra| [bgra[2], bgra[1], bgra[0], bgra[3]])
                .collect(),
        ),
        TextureFormat::Rgba16Float => Cow::Owned(
            pixels
                .chunks_exact(2)
                .map(|c| unorm8(half::f16::from_le_bytes([c[0], c[1]]).to_f32()))
                .collect(),
        ),
        TextureFormat::Rgba32Float => Cow::Owned(
            pixels
                .chunks_exact(4)
                .map(|c| unorm8(f32::from_le_bytes([c[0], c[1], c[2], c[3]])))
                .collect(),
        ),
        //PNG stores 16-bit samples big-endian
        TextureFormat::Depth16Unorm => Cow::Owned(
            pixels
                .chunks_exact(2)
                .flat_map(|c| [c[1], c[0]])
                .collect(),
        ),
        _ => Cow::Borrowed(pixels),
    }
}

/// True when [`encode_png`] accepts `format`.
pub fn is_png_encodable(format: TextureFormat) -> bool {
    png_layout(format).is_some()
}

/// Writes `pixels` (tightly packed, row-major) as a PNG.
///
/// Float formats are clamped to `[0, 1]` and quantized to 8 bits.
///
/// # Panics
/// If `pixels` is not exactly `dims` pixels of `format`.
pub fn encode_png<W: Write>(
    writer: W,
    pixels: &[u8],
    dims: Dimensions,
    format: TextureFormat,
) -> Result<(), Error> {
    let (color_type, bit_depth) = png_layout(format).ok_or(Error::UnsupportedPngFormat(format))?;
    let bytes_per_pixel = format
        .bytes_per_pixel()
        .ok_or(Error::UnsupportedPngFormat(format))?;
    assert_eq!(
        pixels.len(),
        dims.width as usize * dims.height as usize * bytes_per_pixel as usize,
        "Pixel data does not match {}x{} {}",
        dims.width,
        dims.height,
        format
    );
    let mut encoder = png::Encoder::new(writer, dims.width, dims.height);
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&png_bytes(format, pixels))?;
    png_writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{encode_png, is_png_encodable, png_bytes};
    use crate::layout::Dimensions;
    use crate::pixel_formats::TextureFormat;

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let (width, height) = (reader.info().width, reader.info().height);
        //only used for RGBA8 images
        let mut buf = vec![0; width as usize * height as usize * 4];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn rgba8_round_trips_through_png() {
        let dims = Dimensions::new(2, 2);
        let pixels: Vec<u8> = (0..16).collect();
        let mut out = Vec::new();
        encode_png(&mut out, &pixels, dims, TextureFormat::Rgba8UnormSrgb).unwrap();
        let (info, decoded) = decode(&out);
        assert_eq!((info.width, info.height), (2, 2));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(decoded, pixels);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn bgra_is_swizzled() {
        let bytes = png_bytes(TextureFormat::Bgra8Unorm, &[1, 2, 3, 4]);
        assert_eq!(&*bytes, &[3, 2, 1, 4]);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn half_floats_are_quantized() {
        let mut pixels = Vec::new();
        for value in [0.0f32, 0.5, 1.0, 2.0] {
            pixels.extend_from_slice(&half::f16::from_f32(value).to_le_bytes());
        }
        let bytes = png_bytes(TextureFormat::Rgba16Float, &pixels);
        assert_eq!(&*bytes, &[0, 128, 255, 255]);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn unsupported_formats() {
        assert!(!is_png_encodable(TextureFormat::Bc1RgbaUnorm));
        assert!(!is_png_encodable(TextureFormat::Rg8Uint));
        let err = encode_png(Vec::new(), &[0; 2], Dimensions::new(1, 1), TextureFormat::Rg8Uint)
            .unwrap_err();
        assert!(matches!(err, crate::Error::UnsupportedPngFormat(TextureFormat::Rg8Uint)));
    }
}
