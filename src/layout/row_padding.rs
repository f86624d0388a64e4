// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Row strides for buffer<->texture copies.

use super::COPY_BYTES_PER_ROW_ALIGNMENT;

/// The tight and hardware-padded byte length of one row.
///
/// `padded_bytes` is always a multiple of [`COPY_BYTES_PER_ROW_ALIGNMENT`] and
/// never less than `unpadded_bytes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowLayout {
    pub unpadded_bytes: u32,
    pub padded_bytes: u32,
}

impl RowLayout {
    /// Bytes of padding at the end of each row.
    pub const fn padding_bytes(&self) -> u32 {
        self.padded_bytes - self.unpadded_bytes
    }
}

/// Computes the row layout for `width_pixels` pixels of `bytes_per_pixel` bytes.
///
/// Rows already on an alignment boundary get no padding; a zero width gives a
/// zero-sized layout.
///
/// ```
/// use rows_and_levels::layout::row_padding::compute_row_layout;
/// let layout = compute_row_layout(100, 4);
/// assert_eq!((layout.unpadded_bytes, layout.padded_bytes), (400, 512));
/// ```
///
/// # Panics
/// If the padded row does not fit in `u32`.
pub fn compute_row_layout(width_pixels: u32, bytes_per_pixel: u32) -> RowLayout {
    let unpadded_bytes = width_pixels
        .checked_mul(bytes_per_pixel)
        .expect("row byte length overflows u32");
    let align = COPY_BYTES_PER_ROW_ALIGNMENT;
    //the outer modulo keeps an aligned row from growing a whole extra step
    let padding = (align - unpadded_bytes % align) % align;
    let padded_bytes = unpadded_bytes
        .checked_add(padding)
        .expect("padded row byte length overflows u32");
    RowLayout {
        unpadded_bytes,
        padded_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::compute_row_layout;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn width_100() {
        let layout = compute_row_layout(100, 4);
        assert_eq!(layout.unpadded_bytes, 400);
        assert_eq!(layout.padded_bytes, 512);
        assert_eq!(layout.padding_bytes(), 112);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn already_aligned() {
        let layout = compute_row_layout(64, 4);
        assert_eq!(layout.unpadded_bytes, 256);
        assert_eq!(layout.padded_bytes, 256);
        assert_eq!(compute_row_layout(128, 4).padded_bytes, 512);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn zero_width() {
        let layout = compute_row_layout(0, 4);
        assert_eq!(layout.unpadded_bytes, 0);
        assert_eq!(layout.padded_bytes, 0);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn odd_widths() {
        assert_eq!(compute_row_layout(63, 4).padded_bytes, 256);
        assert_eq!(compute_row_layout(150, 4).padded_bytes, 768);
        assert_eq!(compute_row_layout(1, 1).padded_bytes, 256);
        assert_eq!(compute_row_layout(17, 16).padded_bytes, 512);
    }

    #[test]
    #[should_panic(expected = "overflows u32")]
    fn overflow_fails_fast() {
        compute_row_layout(u32::MAX, 4);
    }
}
