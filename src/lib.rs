// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! rows_and_levels computes the byte layouts that host code needs when it moves
image data in and out of a GPU.

GPU copy APIs don't accept arbitrary memory layouts.  Rows in a buffer<->texture
copy start on 256-byte boundaries, buffers are multiples of 4 bytes, and
block-compressed formats move in whole blocks.  The layout has to be worked out on
the host before anything is recorded, and undone after a readback:

| Task                                   | Where                                   |
|----------------------------------------|-----------------------------------------|
| padded row stride for a copy           | [`layout::row_padding`]                 |
| buffer size for an arbitrary blob      | [`layout::buffer_packing`]              |
| readback buffer for a capture          | [`layout::capture`]                     |
| stripping row padding after readback   | [`layout::unpack`]                      |
| per-level regions of a mip chain blob  | [`layout::mip_chain`]                   |
| format block sizes and capabilities    | [`pixel_formats`]                       |
| usage flags and texture configuration  | [`visible_to`]                          |

The planners are pure and backend independent.  With the default
`backend_wgpu` feature, the `headless` module adds a thin offscreen driver on
top of [wgpu](https://wgpu.rs) that captures render targets, uploads mip chains
and writes PNGs, so the plans can be checked against a real device.

```
use rows_and_levels::layout::row_padding::compute_row_layout;

let row = compute_row_layout(100, 4);
assert_eq!((row.unpadded_bytes, row.padded_bytes), (400, 512));
```
*/

mod error;
#[cfg(feature = "backend_wgpu")]
pub mod headless;
mod imp;
pub mod layout;
pub mod pixel_formats;
pub mod visible_to;

pub use error::Error;
