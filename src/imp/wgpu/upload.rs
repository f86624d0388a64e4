// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use super::device::HeadlessDevice;
use crate::error::Error;
use crate::layout::buffer_packing::{PackedAllocation, place_into};
use crate::layout::mip_chain::plan_mip_chain;
use crate::visible_to::{BufferUsage, TextureConfig};

/// Creates a buffer holding `contents`, padded to a valid allocation size.
///
/// The buffer is mapped at creation, filled, and unmapped before returning.
///
/// # Panics
/// If `contents` is longer than `u32::MAX` bytes.
pub fn create_packed_buffer(
    device: &HeadlessDevice,
    label: &str,
    usage: BufferUsage,
    contents: &[u8],
) -> wgpu::Buffer {
    let source_bytes: u32 = contents
        .len()
        .try_into()
        .expect("buffer contents longer than u32::MAX");
    let allocation = PackedAllocation::for_source(source_bytes);
    logwise::trace_sync!(
        "Packed buffer {source} -> {allocated} bytes",
        source = allocation.source_bytes,
        allocated = allocation.allocated_bytes
    );
    let buffer = device.device().create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: allocation.allocated_bytes as u64,
        usage: usage.wgpu_usage(),
        mapped_at_creation: true,
    });
    {
        let mut mapped = buffer.slice(..).get_mapped_range_mut();
        place_into(&mut mapped, contents);
    }
    buffer.unmap();
    buffer
}

/// Creates a texture described by `config`.
///
/// Fails if the format needs a capability the device was not created with, or
/// if a block-compressed size is not whole blocks.
pub fn create_texture(device: &HeadlessDevice, config: &TextureConfig<'_>) -> Result<wgpu::Texture, Error> {
    if let Some(capability) = config.format.descriptor().required_capability
        && !device.supports(capability)
    {
        return Err(Error::MissingCapability(capability));
    }
    config.check_block_alignment()?;
    Ok(device.device().create_texture(&wgpu::TextureDescriptor {
        label: Some(config.debug_name),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: config.array_layer_count,
        },
        mip_level_count: config.mip_level_count,
        sample_count: 1,
        dimension: config.dimension.wgpu_dimension(),
        format: config.format.wgpu_format(),
        usage: config.usage.wgpu_usage(),
        view_formats: &[],
    }))
}

/// Uploads every level of every layer of `texture` from one flat blob.
///
/// `blob` holds the levels in the order [`plan_mip_chain`] plans them, which
/// is how texture containers store them.  `texture` must have `COPY_DST` usage.
pub fn upload_mip_chain(
    device: &HeadlessDevice,
    texture: &wgpu::Texture,
    config: &TextureConfig<'_>,
    blob: &[u8],
) -> Result<(), Error> {
    let descriptor = config.format.descriptor();
    if let Some(capability) = descriptor.required_capability
        && !device.supports(capability)
    {
        return Err(Error::MissingCapability(capability));
    }
    let chain = plan_mip_chain(
        descriptor,
        config.extent(),
        config.mip_level_count,
        config.array_layer_count,
        config.is_3d(),
    );
    for (region, bytes) in chain.split(blob)? {
        logwise::trace_sync!(
            "Uploading layer {layer} level {level}: {length} bytes at {offset}",
            layer = region.layer,
            level = region.mip_level,
            length = region.source_byte_length,
            offset = region.source_byte_offset
        );
        device.queue().write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: region.mip_level,
                origin: wgpu::Origin3d {
                    x: 0,
                    y: 0,
                    z: region.layer,
                },
                aspect: config.format.copy_aspect(),
            },
            bytes,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(region.bytes_per_row),
                rows_per_image: Some(region.rows_per_image),
            },
            //copies of compressed levels cover whole blocks
            wgpu::Extent3d {
                width: region.physical_width,
                height: region.physical_height,
                depth_or_array_layers: region.depth,
            },
        );
    }
    Ok(())
}
