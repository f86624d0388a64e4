//! Uploads a complete mip chain from one flat blob, then reads every level back.
//!
//! The blob is laid out the way texture containers store chains: every level
//! of layer 0, then every level of layer 1.  Each level is filled with its own
//! color so a misplaced region is obvious in the output PNGs.
//!
//! If the device supports BC compression, a BC1 chain is uploaded as well.
//! Its base is 100x36, since compressed textures must start at whole blocks.  Compressed levels can't be captured per pixel, so that part
//! only checks that every region is accepted.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example mip_upload -- [output_dir]
//! ```

use rows_and_levels::Error;
use rows_and_levels::headless::{
    HeadlessDevice, create_texture, encode_capture_level, upload_mip_chain,
};
use rows_and_levels::layout::mip_chain::plan_mip_chain;
use rows_and_levels::pixel_formats::{Capability, TextureFormat};
use rows_and_levels::visible_to::{TextureConfig, TextureUsage};
use std::path::PathBuf;

const LEVEL_COLORS: [[u8; 4]; 8] = [
    [255, 0, 0, 255],
    [0, 255, 0, 255],
    [0, 0, 255, 255],
    [255, 255, 0, 255],
    [0, 255, 255, 255],
    [255, 0, 255, 255],
    [255, 255, 255, 255],
    [0, 0, 0, 255],
];

/// A flat RGBA8 chain with every level painted in its own color.
fn rgba8_blob(config: &TextureConfig<'_>) -> Vec<u8> {
    let chain = plan_mip_chain(
        config.format.descriptor(),
        config.extent(),
        config.mip_level_count,
        config.array_layer_count,
        config.is_3d(),
    );
    let mut blob = vec![0; chain.total_bytes() as usize];
    for region in chain {
        let color = LEVEL_COLORS[region.mip_level as usize % LEVEL_COLORS.len()];
        let start = region.source_byte_offset as usize;
        let end = start + region.source_byte_length as usize;
        for pixel in blob[start..end].chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }
    blob
}

/// A flat BC1 chain of solid-color blocks.
fn bc1_blob(config: &TextureConfig<'_>) -> Vec<u8> {
    let chain = plan_mip_chain(
        config.format.descriptor(),
        config.extent(),
        config.mip_level_count,
        config.array_layer_count,
        config.is_3d(),
    );
    println!("BC1 regions:");
    println!("layer level  logical  physical  row bytes    offset    length");
    let mut blob = Vec::with_capacity(chain.total_bytes() as usize);
    for region in chain {
        println!(
            "{:>5} {:>5} {:>4}x{:<4}{:>4}x{:<4}{:>10}{:>10}{:>10}",
            region.layer,
            region.mip_level,
            region.level_width,
            region.level_height,
            region.physical_width,
            region.physical_height,
            region.bytes_per_row,
            region.source_byte_offset,
            region.source_byte_length
        );
        //both endpoints pure red in RGB565, all indices 0
        let block = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0];
        for _ in 0..region.source_byte_length / 8 {
            blob.extend_from_slice(&block);
        }
    }
    blob
}

async fn run(output_dir: PathBuf) -> Result<(), Error> {
    let device = HeadlessDevice::new("mip_upload").await?;

    let config = TextureConfig::new(100, 37, TextureFormat::Rgba8Unorm)
        .with_usage(TextureUsage::COPY_DST | TextureUsage::COPY_SRC | TextureUsage::TEXTURE_BINDING)
        .with_full_mip_chain()
        .with_array_layers(2)
        .with_debug_name("rgba8 chain");
    let texture = create_texture(&device, &config)?;
    upload_mip_chain(&device, &texture, &config, &rgba8_blob(&config))?;

    let mut encoder = device
        .device()
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("mip readback"),
        });
    let mut pending = Vec::new();
    for layer in 0..config.array_layer_count {
        for level in 0..config.mip_level_count {
            let capture = encode_capture_level(&device, &mut encoder, &texture, &config, level, layer)?;
            pending.push((layer, level, capture));
        }
    }
    device.queue().submit(std::iter::once(encoder.finish()));
    for (layer, level, capture) in pending {
        let image = capture.read(&device).await?;
        let expected = LEVEL_COLORS[level as usize % LEVEL_COLORS.len()];
        let matches = image.pixels.chunks_exact(4).all(|p| p == expected);
        let path = output_dir.join(format!("layer{layer}_mip{level}.png"));
        image.write_png(&path)?;
        println!(
            "layer {layer} level {level}: {}x{} {} -> {}",
            image.dimensions.width,
            image.dimensions.height,
            if matches { "ok" } else { "MISMATCH" },
            path.display()
        );
    }

    let bc1 = TextureConfig::new(100, 36, TextureFormat::Bc1RgbaUnorm)
        .with_usage(TextureUsage::COPY_DST | TextureUsage::TEXTURE_BINDING)
        .with_full_mip_chain()
        .with_debug_name("bc1 chain");
    let blob = bc1_blob(&bc1);
    if device.supports(Capability::TextureCompressionBc) {
        let texture = create_texture(&device, &bc1)?;
        upload_mip_chain(&device, &texture, &bc1, &blob)?;
        println!("uploaded {} BC1 bytes", blob.len());
    } else {
        println!("device lacks {}, skipping BC1 upload", Capability::TextureCompressionBc);
    }
    Ok(())
}

fn main() {
    let output_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    if let Err(err) = test_executors::sleep_on(run(output_dir)) {
        eprintln!("mip_upload: {err}");
        std::process::exit(1);
    }
}
