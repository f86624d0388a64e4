// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Byte-layout planning for texture and buffer copies.

GPU copies between buffers and textures have alignment rules the host side has
to honor:

* every row of a buffer<->texture copy starts at a multiple of
  [`COPY_BYTES_PER_ROW_ALIGNMENT`] bytes,
* buffer sizes are non-zero multiples of [`COPY_BUFFER_ALIGNMENT`],
* block-compressed formats are copied in whole blocks.

The submodules plan copies around those rules:

| Module                     | Plans                                                  |
|----------------------------|--------------------------------------------------------|
| [`row_padding`]            | unpadded and padded row strides                        |
| [`buffer_packing`]         | padded allocation for an arbitrary blob                |
| [`capture`]                | readback buffer size and copy region for a capture     |
| [`unpack`]                 | stripping (or inserting) row padding                   |
| [`mip_chain`]              | per-layer, per-level regions of a flat mip chain blob  |

Everything here is pure: no allocation of GPU resources, no I/O, no shared
state.  Plans are plain values, so they may be computed on any thread.

```
use rows_and_levels::layout::{Dimensions, capture::plan_capture, unpack::unpack};

let dims = Dimensions::new(100, 2);
let plan = plan_capture(dims, 4);
assert_eq!(plan.row_layout.unpadded_bytes, 400);
assert_eq!(plan.row_layout.padded_bytes, 512);
assert_eq!(plan.total_buffer_bytes, 1024);

// pretend the GPU wrote this
let readback = vec![7u8; plan.total_buffer_bytes as usize];
let pixels = unpack(&readback, dims, 4);
assert_eq!(pixels.len(), 800);
```
*/

pub mod buffer_packing;
pub mod capture;
pub mod mip_chain;
pub mod row_padding;
pub mod unpack;

/// Rows of a buffer<->texture copy must start at a multiple of this many bytes.
pub const COPY_BYTES_PER_ROW_ALIGNMENT: u32 = 256;

/// Buffer sizes (and copy sizes) must be a multiple of this many bytes.
pub const COPY_BUFFER_ALIGNMENT: u32 = 4;

/// Logical pixel extent of an image or one texture level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Dimensions { width, height }
    }

    /// True when either side is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Rounds `value` up to a multiple of `alignment`.
///
/// # Panics
/// If the result does not fit in `u32`.
pub(crate) fn align_up(value: u32, alignment: u32) -> u32 {
    let remainder = value % alignment;
    if remainder == 0 {
        value
    } else {
        value
            .checked_add(alignment - remainder)
            .expect("aligned size overflows u32")
    }
}

#[cfg(test)]
mod tests {
    use super::align_up;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn align() {
        assert_eq!(align_up(0, 4), 0);
        assert_eq!(align_up(1, 4), 4);
        assert_eq!(align_up(4, 4), 4);
        assert_eq!(align_up(257, 256), 512);
        assert_eq!(align_up(6, 5), 10);
    }
}
