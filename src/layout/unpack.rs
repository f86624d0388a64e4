// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Moving pixel rows between padded and tightly packed buffers.
//!
//! [`unpack`] strips the row padding a GPU copy was required to insert, leaving
//! row-major pixels ready for an encoder.  [`pad_rows`] goes the other way, for
//! staging tightly packed data through a buffer copy.
//!
//! Only call [`unpack`] once the copy that filled the buffer has completed and
//! the buffer is host visible.

use super::Dimensions;
use super::row_padding::compute_row_layout;

/// Returns the tightly packed rows of a padded readback buffer.
///
/// The result is `width * bytes_per_pixel * height` bytes long.
///
/// # Panics
/// If `padded` is shorter than the layout `plan_capture` computes for `dims`.
pub fn unpack(padded: &[u8], dims: Dimensions, bytes_per_pixel: u32) -> Vec<u8> {
    let row = compute_row_layout(dims.width, bytes_per_pixel);
    let mut out = vec![0; row.unpadded_bytes as usize * dims.height as usize];
    unpack_into(padded, dims, bytes_per_pixel, &mut out);
    out
}

/// Like [`unpack`], writing into `out`.
///
/// # Panics
/// If `padded` is shorter than the planned layout, or `out` is not exactly
/// the unpacked length.
pub fn unpack_into(padded: &[u8], dims: Dimensions, bytes_per_pixel: u32, out: &mut [u8]) {
    let row = compute_row_layout(dims.width, bytes_per_pixel);
    let unpadded = row.unpadded_bytes as usize;
    let stride = row.padded_bytes as usize;
    let height = dims.height as usize;
    assert!(
        padded.len() >= stride * height,
        "Readback buffer ({}) is shorter than {} rows of {} bytes",
        padded.len(),
        height,
        stride
    );
    assert_eq!(
        out.len(),
        unpadded * height,
        "Output buffer must hold exactly {} rows of {} bytes",
        height,
        unpadded
    );
    if unpadded == 0 {
        return;
    }
    for (i, dst) in out.chunks_exact_mut(unpadded).enumerate() {
        let offset = i * stride;
        dst.copy_from_slice(&padded[offset..offset + unpadded]);
    }
}

/// Inserts row padding into tightly packed rows.  Pad bytes are zero.
///
/// # Panics
/// If `tight` is not exactly `width * bytes_per_pixel * height` bytes.
pub fn pad_rows(tight: &[u8], dims: Dimensions, bytes_per_pixel: u32) -> Vec<u8> {
    let row = compute_row_layout(dims.width, bytes_per_pixel);
    let unpadded = row.unpadded_bytes as usize;
    let stride = row.padded_bytes as usize;
    assert_eq!(
        tight.len(),
        unpadded * dims.height as usize,
        "Source must hold exactly {} rows of {} bytes",
        dims.height,
        unpadded
    );
    let mut padded = vec![0; stride * dims.height as usize];
    if unpadded == 0 {
        return padded;
    }
    for (src, dst) in tight.chunks_exact(unpadded).zip(padded.chunks_exact_mut(stride)) {
        dst[..unpadded].copy_from_slice(src);
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::{pad_rows, unpack, unpack_into};
    use crate::layout::Dimensions;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn strips_padding() {
        //3 pixels of 4 bytes: 12 bytes of data, 244 bytes of padding per row
        let dims = Dimensions::new(3, 2);
        let mut padded = vec![0xEE; 512];
        padded[..12].copy_from_slice(&[1; 12]);
        padded[256..268].copy_from_slice(&[2; 12]);
        let tight = unpack(&padded, dims, 4);
        assert_eq!(tight.len(), 24);
        assert_eq!(&tight[..12], &[1; 12]);
        assert_eq!(&tight[12..], &[2; 12]);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn aligned_rows_copy_through() {
        let dims = Dimensions::new(64, 3);
        let padded: Vec<u8> = (0..768).map(|i| (i % 251) as u8).collect();
        assert_eq!(unpack(&padded, dims, 4), padded);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn pad_then_unpack() {
        let dims = Dimensions::new(5, 7);
        let tight: Vec<u8> = (0..5 * 3 * 7).map(|i| i as u8).collect();
        let padded = pad_rows(&tight, dims, 3);
        assert_eq!(padded.len(), 256 * 7);
        assert!(padded[15..256].iter().all(|b| *b == 0));
        assert_eq!(unpack(&padded, dims, 3), tight);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn longer_source_is_fine() {
        //mapped ranges may be rounded up by the backend
        let dims = Dimensions::new(1, 1);
        let padded = vec![9; 1024];
        let mut out = [0; 4];
        unpack_into(&padded, dims, 4, &mut out);
        assert_eq!(out, [9; 4]);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn degenerate() {
        assert!(unpack(&[], Dimensions::new(0, 4), 4).is_empty());
        assert!(unpack(&[], Dimensions::new(4, 0), 4).is_empty());
        assert_eq!(pad_rows(&[], Dimensions::new(0, 2), 4).len(), 0);
    }

    #[test]
    #[should_panic(expected = "shorter than")]
    fn short_source_fails_fast() {
        let dims = Dimensions::new(100, 2);
        //one byte short of 2 * 512
        unpack(&[0; 1023], dims, 4);
    }
}
