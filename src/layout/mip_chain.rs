// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Slicing a flat mip chain blob into per-level upload regions.

Container formats for block-compressed textures store every level of every
layer back to back in one blob.  The planner walks the same order the blob is
written in, layer-major and then mip level ascending:

```text
layer 0: level 0 | level 1 | ... | level n-1
layer 1: level 0 | level 1 | ... | level n-1
...
```

and emits one [`MipLevelRegion`] per step with its block-aligned size, row
stride and byte range.  The order is part of the contract with whatever produced
the blob; don't reorder the iteration.

```
use rows_and_levels::layout::Dimensions;
use rows_and_levels::layout::mip_chain::plan_mip_chain;
use rows_and_levels::pixel_formats::TextureFormat;

let bc1 = TextureFormat::Bc1RgbaUnorm.descriptor();
let regions: Vec<_> = plan_mip_chain(bc1, Dimensions::new(128, 128), 2, 1, false).collect();
// 32 rows of 32 blocks, 8 bytes each
assert_eq!(regions[0].source_byte_length, 8192);
assert_eq!(regions[1].source_byte_offset, 8192);
assert_eq!(regions[1].bytes_per_row, 128);
```

# 3D textures

A 3D texture has one "layer" whose depth shrinks with the mip level.  With
`is_3d` set, `array_layer_count` is read as the base depth and each level is a
single region covering all of its depth slices.
*/

use super::{Dimensions, align_up};
use crate::error::Error;
use crate::pixel_formats::TextureFormatDescriptor;

/// One level of one layer within a flat source blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MipLevelRegion {
    pub layer: u32,
    pub mip_level: u32,
    /// Logical size of the level.
    pub level_width: u32,
    pub level_height: u32,
    /// Level size rounded up to whole blocks, the extent of a copy into the level.
    pub physical_width: u32,
    pub physical_height: u32,
    pub bytes_per_row: u32,
    /// Rows of blocks per depth slice.
    pub rows_per_image: u32,
    /// Depth slices covered; 1 except for 3D textures.
    pub depth: u32,
    pub source_byte_offset: u64,
    pub source_byte_length: u64,
}

impl MipLevelRegion {
    /// The region's bytes within `blob`.
    ///
    /// # Panics
    /// If the region does not lie within `blob`.
    pub fn slice<'a>(&self, blob: &'a [u8]) -> &'a [u8] {
        let start = self.source_byte_offset as usize;
        let end = start + self.source_byte_length as usize;
        &blob[start..end]
    }
}

/// Logical size of `level` in a chain whose level 0 is `base`.
///
/// Each side halves per level and stops at 1.
pub fn mip_level_size(base: Dimensions, level: u32) -> Dimensions {
    Dimensions {
        width: halve(base.width, level),
        height: halve(base.height, level),
    }
}

/// Number of levels in a complete chain down to 1x1.
pub fn full_mip_level_count(base: Dimensions) -> u32 {
    base.width.max(base.height).max(1).ilog2() + 1
}

fn halve(extent: u32, level: u32) -> u32 {
    extent.checked_shr(level).unwrap_or(0).max(1)
}

/// Plans the regions of a mip chain.
///
/// The returned iterator yields `array_layer_count * mip_level_count` regions
/// for 2D textures (`mip_level_count` for 3D).  Planning is pure; call again to
/// restart.
pub fn plan_mip_chain(
    format: &TextureFormatDescriptor,
    base: Dimensions,
    mip_level_count: u32,
    array_layer_count: u32,
    is_3d: bool,
) -> MipChain {
    let (layers, base_depth) = if is_3d {
        (1, array_layer_count)
    } else {
        (array_layer_count, 1)
    };
    MipChain {
        block_width: format.block_width,
        block_height: format.block_height,
        block_size_bytes: format.block_size_bytes,
        base,
        base_depth,
        is_3d,
        layers,
        mip_level_count,
        next_layer: 0,
        next_level: 0,
        offset: 0,
    }
}

/// Ordered iterator over the regions of a mip chain.  See [`plan_mip_chain`].
#[derive(Debug, Clone)]
pub struct MipChain {
    block_width: u32,
    block_height: u32,
    block_size_bytes: u32,
    base: Dimensions,
    base_depth: u32,
    is_3d: bool,
    layers: u32,
    mip_level_count: u32,
    next_layer: u32,
    next_level: u32,
    offset: u64,
}

impl MipChain {
    fn region(&self, layer: u32, mip_level: u32, offset: u64) -> MipLevelRegion {
        let level = mip_level_size(self.base, mip_level);
        let depth = if self.is_3d {
            halve(self.base_depth, mip_level)
        } else {
            1
        };
        let physical_width = align_up(level.width, self.block_width);
        let physical_height = align_up(level.height, self.block_height);
        let width_blocks = physical_width / self.block_width;
        let height_blocks = physical_height / self.block_height;
        let bytes_per_row = width_blocks
            .checked_mul(self.block_size_bytes)
            .expect("mip level row overflows u32");
        let source_byte_length = bytes_per_row as u64 * height_blocks as u64 * depth as u64;
        MipLevelRegion {
            layer,
            mip_level,
            level_width: level.width,
            level_height: level.height,
            physical_width,
            physical_height,
            bytes_per_row,
            rows_per_image: height_blocks,
            depth,
            source_byte_offset: offset,
            source_byte_length,
        }
    }

    fn remaining(&self) -> usize {
        if self.mip_level_count == 0 || self.next_layer >= self.layers {
            return 0;
        }
        let full_layers_left = (self.layers - self.next_layer - 1) as usize;
        full_layers_left * self.mip_level_count as usize
            + (self.mip_level_count - self.next_level) as usize
    }

    /// Bytes the whole chain spans, independent of iteration progress.
    pub fn total_bytes(&self) -> u64 {
        let mut restarted = self.clone();
        restarted.next_layer = 0;
        restarted.next_level = 0;
        restarted.offset = 0;
        restarted.map(|r| r.source_byte_length).sum()
    }

    /// Splits `blob` into the remaining regions.
    ///
    /// Bytes past the end of the chain are ignored.
    pub fn split(self, blob: &[u8]) -> Result<Vec<(MipLevelRegion, &[u8])>, Error> {
        let needed = self.total_bytes();
        if (blob.len() as u64) < needed {
            return Err(Error::SourceTooShort {
                needed,
                actual: blob.len() as u64,
            });
        }
        Ok(self.map(|region| (region, region.slice(blob))).collect())
    }
}

impl Iterator for MipChain {
    type Item = MipLevelRegion;

    fn next(&mut self) -> Option<MipLevelRegion> {
        if self.remaining() == 0 {
            return None;
        }
        let region = self.region(self.next_layer, self.next_level, self.offset);
        self.offset += region.source_byte_length;
        self.next_level += 1;
        if self.next_level == self.mip_level_count {
            self.next_level = 0;
            self.next_layer += 1;
        }
        Some(region)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MipChain {}

impl std::iter::FusedIterator for MipChain {}
