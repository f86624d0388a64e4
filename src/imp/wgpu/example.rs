// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use super::device::HeadlessDevice;
use super::readback::encode_capture;
use super::upload::create_texture;
use crate::error::Error;
use crate::layout::capture::CapturedImage;
use crate::visible_to::{TextureConfig, TextureUsage};

/// A program that renders once into an offscreen target.
///
/// [`run_headless`] owns the target and the readback; implementations only
/// set up their pipeline and record their passes.
pub trait Example: Sized {
    /// Creates pipelines and resources for rendering into `target`.
    fn init(device: &HeadlessDevice, target: &TextureConfig<'_>) -> Result<Self, Error>;

    /// Records the frame into `encoder`.
    fn render(
        &mut self,
        device: &HeadlessDevice,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) -> Result<(), Error>;
}

/// Creates the target, runs `E` once, and reads the target back.
///
/// `RENDER_ATTACHMENT` and `COPY_SRC` are added to the target's usage.
pub async fn run_headless<E: Example>(
    device: &HeadlessDevice,
    target: &TextureConfig<'_>,
) -> Result<CapturedImage, Error> {
    let target = target.with_usage(target.usage | TextureUsage::RENDER_ATTACHMENT | TextureUsage::COPY_SRC);
    let texture = create_texture(device, &target)?;
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let mut example = E::init(device, &target)?;
    let mut encoder = device
        .device()
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some(target.debug_name),
        });
    example.render(device, &mut encoder, &view)?;
    let pending = encode_capture(device, &mut encoder, &texture, &target)?;
    device.queue().submit(std::iter::once(encoder.finish()));
    pending.read(device).await
}
