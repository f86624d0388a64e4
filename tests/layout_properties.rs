//! Property sweeps over the layout planners.
//!
//! These run the planners over grids of inputs rather than single cases, and
//! check the relationships that every plan has to satisfy.

use rows_and_levels::layout::buffer_packing::{pack, packed_size};
use rows_and_levels::layout::capture::plan_capture;
use rows_and_levels::layout::mip_chain::{full_mip_level_count, mip_level_size, plan_mip_chain};
use rows_and_levels::layout::row_padding::compute_row_layout;
use rows_and_levels::layout::unpack::{pad_rows, unpack};
use rows_and_levels::layout::{COPY_BUFFER_ALIGNMENT, COPY_BYTES_PER_ROW_ALIGNMENT, Dimensions};
use rows_and_levels::pixel_formats::TextureFormat;

const BYTES_PER_PIXEL: [u32; 6] = [1, 2, 4, 8, 12, 16];

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn padded_rows_are_aligned_and_minimal() {
    for bytes_per_pixel in BYTES_PER_PIXEL {
        for width in 0..600 {
            let row = compute_row_layout(width, bytes_per_pixel);
            assert_eq!(row.unpadded_bytes, width * bytes_per_pixel);
            assert_eq!(row.padded_bytes % COPY_BYTES_PER_ROW_ALIGNMENT, 0);
            assert!(row.padded_bytes >= row.unpadded_bytes);
            //never a whole extra alignment unit
            assert!(row.padded_bytes - row.unpadded_bytes < COPY_BYTES_PER_ROW_ALIGNMENT);
            if row.unpadded_bytes % COPY_BYTES_PER_ROW_ALIGNMENT == 0 {
                assert_eq!(row.padded_bytes, row.unpadded_bytes);
            }
        }
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn known_rows() {
    let row = compute_row_layout(100, 4);
    assert_eq!((row.unpadded_bytes, row.padded_bytes), (400, 512));
    let row = compute_row_layout(64, 4);
    assert_eq!((row.unpadded_bytes, row.padded_bytes), (256, 256));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn packed_sizes() {
    for n in 0..2048 {
        let size = packed_size(n);
        assert!(size >= 4);
        assert_eq!(size % COPY_BUFFER_ALIGNMENT, 0);
        assert!(size >= n);
        assert!(size - n < COPY_BUFFER_ALIGNMENT || n == 0);
    }
    assert_eq!(packed_size(14), 16);
    assert_eq!(pack(&[0xFF; 14]).len(), 16);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn pad_then_unpack_is_identity() {
    for bytes_per_pixel in BYTES_PER_PIXEL {
        for (width, height) in [(1, 1), (3, 5), (63, 2), (64, 2), (65, 3), (100, 4), (257, 1)] {
            let dims = Dimensions::new(width, height);
            let tight: Vec<u8> = (0..width * bytes_per_pixel * height)
                .map(|i| (i % 253) as u8)
                .collect();
            let padded = pad_rows(&tight, dims, bytes_per_pixel);
            let plan = plan_capture(dims, bytes_per_pixel);
            assert_eq!(padded.len() as u64, plan.total_buffer_bytes);
            assert_eq!(unpack(&padded, dims, bytes_per_pixel), tight);
        }
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn single_region_chains() {
    for format in TextureFormat::all() {
        let descriptor = format.descriptor();
        for (width, height) in [(1, 1), (4, 4), (13, 7), (128, 64)] {
            let regions: Vec<_> =
                plan_mip_chain(descriptor, Dimensions::new(width, height), 1, 1, false).collect();
            assert_eq!(regions.len(), 1, "{format}");
            let region = regions[0];
            assert_eq!(region.source_byte_offset, 0);
            let height_blocks = height.div_ceil(descriptor.block_height);
            assert_eq!(
                region.source_byte_length,
                region.bytes_per_row as u64 * height_blocks as u64,
                "{format}"
            );
        }
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn regions_partition_the_blob() {
    for format in TextureFormat::all() {
        let descriptor = format.descriptor();
        for (width, height, layers) in [(1, 1, 1), (37, 100, 2), (256, 16, 6)] {
            let base = Dimensions::new(width, height);
            let levels = full_mip_level_count(base);
            let chain = plan_mip_chain(descriptor, base, levels, layers, false);
            assert_eq!(chain.len(), (levels * layers) as usize);
            let total = chain.total_bytes();
            let mut cursor = 0;
            for region in chain {
                assert_eq!(region.source_byte_offset, cursor, "{format}");
                assert!(region.source_byte_length > 0);
                assert_eq!(region.physical_width % descriptor.block_width, 0);
                assert_eq!(region.physical_height % descriptor.block_height, 0);
                assert_eq!(
                    Dimensions::new(region.level_width, region.level_height),
                    mip_level_size(base, region.mip_level)
                );
                cursor += region.source_byte_length;
            }
            assert_eq!(cursor, total, "{format}");
        }
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn bc1_chain() {
    let regions: Vec<_> = plan_mip_chain(
        TextureFormat::Bc1RgbaUnorm.descriptor(),
        Dimensions::new(128, 128),
        2,
        1,
        false,
    )
    .map(|r| {
        (
            r.physical_width,
            r.physical_height,
            r.bytes_per_row,
            r.source_byte_length,
            r.source_byte_offset,
        )
    })
    .collect();
    assert_eq!(regions, vec![(128, 128, 256, 8192, 0), (64, 64, 128, 2048, 8192)]);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn format_identifiers_round_trip() {
    for format in TextureFormat::all() {
        let parsed: TextureFormat = format.name().parse().unwrap();
        assert_eq!(parsed, format);
        assert_eq!(format.is_compressed(), format.bytes_per_pixel().is_none());
    }
    assert!("not-a-format".parse::<TextureFormat>().is_err());
}
