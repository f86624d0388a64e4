// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Texture -> buffer -> host readback.
//!
//! A capture is recorded into a caller's encoder and completed once that
//! encoder has been submitted.  The readback buffer is sized and strided by
//! [`CapturePlan`], so its rows are padded and [`CapturedImage::from_readback`]
//! strips them again.

use super::device::HeadlessDevice;
use crate::error::Error;
use crate::layout::capture::{CapturePlan, CapturedImage};
use crate::layout::mip_chain::mip_level_size;
use crate::pixel_formats::TextureFormat;
use crate::visible_to::{BufferUsage, TextureConfig};
use wgpu::MapMode;

/// A copy that has been recorded but not yet read back.
#[derive(Debug)]
#[must_use = "call read() after submitting the encoder"]
pub struct PendingCapture {
    /// `None` for zero-sized captures, which record no copy.
    buffer: Option<wgpu::Buffer>,
    plan: CapturePlan,
    format: TextureFormat,
}

/// Records a copy of mip level 0, layer 0 of `texture` into a new readback buffer.
pub fn encode_capture(
    device: &HeadlessDevice,
    encoder: &mut wgpu::CommandEncoder,
    texture: &wgpu::Texture,
    config: &TextureConfig<'_>,
) -> Result<PendingCapture, Error> {
    encode_capture_level(device, encoder, texture, config, 0, 0)
}

/// Records a copy of one level of one layer (or 3D slice) of `texture`.
pub fn encode_capture_level(
    device: &HeadlessDevice,
    encoder: &mut wgpu::CommandEncoder,
    texture: &wgpu::Texture,
    config: &TextureConfig<'_>,
    mip_level: u32,
    layer: u32,
) -> Result<PendingCapture, Error> {
    let dims = mip_level_size(config.extent(), mip_level);
    let plan = CapturePlan::for_format(dims, config.format)?;
    if dims.is_empty() || plan.total_buffer_bytes == 0 {
        logwise::warn_sync!(
            "Skipping zero-sized capture of {name}",
            name = logwise::privacy::LogIt(&config.debug_name)
        );
        return Ok(PendingCapture {
            buffer: None,
            plan,
            format: config.format,
        });
    }
    logwise::trace_sync!(
        "Capturing level {level} layer {layer}, {bytes} readback bytes",
        level = mip_level,
        layer = layer,
        bytes = plan.total_buffer_bytes
    );
    let buffer = device.device().create_buffer(&wgpu::BufferDescriptor {
        label: Some("capture readback"),
        size: plan.total_buffer_bytes,
        usage: BufferUsage::READBACK.wgpu_usage(),
        mapped_at_creation: false,
    });
    let region = plan.copy_region;
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level,
            origin: wgpu::Origin3d { x: 0, y: 0, z: layer },
            aspect: config.format.copy_aspect(),
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &buffer,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(region.bytes_per_row),
                rows_per_image: region.rows_per_image(),
            },
        },
        wgpu::Extent3d {
            width: region.extent.width,
            height: region.extent.height,
            depth_or_array_layers: 1,
        },
    );
    Ok(PendingCapture {
        buffer: Some(buffer),
        plan,
        format: config.format,
    })
}

impl PendingCapture {
    pub fn plan(&self) -> &CapturePlan {
        &self.plan
    }

    /// Maps the readback buffer and unpacks it.
    ///
    /// The encoder the copy was recorded into must already be submitted.
    pub async fn read(self, device: &HeadlessDevice) -> Result<CapturedImage, Error> {
        let Some(buffer) = self.buffer else {
            return CapturedImage::from_readback(&self.plan, self.format, &[]);
        };
        let (s, r) = r#continue::continuation();
        buffer.map_async(MapMode::Read, .., move |result| {
            s.send(result);
        });
        device.wait_idle();
        if let Err(err) = r.await {
            logwise::error_sync!(
                "Readback map failed: {err}",
                err = logwise::privacy::LogIt(&err)
            );
            return Err(err.into());
        }
        let unpack_perf = logwise::perfwarn_begin!("readback unpack");
        let image = {
            let mapped = buffer.slice(..).get_mapped_range();
            CapturedImage::from_readback(&self.plan, self.format, &mapped)
        };
        drop(unpack_perf);
        buffer.unmap();
        image
    }
}

/// Copies level 0 of `texture` to the host.
///
/// `texture` must have been created with `COPY_SRC` usage.
pub async fn capture_texture(
    device: &HeadlessDevice,
    texture: &wgpu::Texture,
    config: &TextureConfig<'_>,
) -> Result<CapturedImage, Error> {
    let mut encoder = device
        .device()
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("capture"),
        });
    let pending = encode_capture(device, &mut encoder, texture, config)?;
    device.queue().submit(std::iter::once(encoder.finish()));
    pending.read(device).await
}
