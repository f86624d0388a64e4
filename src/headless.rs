// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! A small offscreen driver for programs that render once and save the result.

The driver exists to put the [`layout`](crate::layout) planners through a real
GPU round trip:

* [`run_headless`] creates a render target from a [`TextureConfig`](crate::visible_to::TextureConfig),
  lets an [`Example`] record a frame, then copies the target into a buffer
  sized by [`plan_capture`](crate::layout::capture::plan_capture) and unpacks it.
* [`create_packed_buffer`] rounds arbitrary contents up to a legal buffer size.
* [`upload_mip_chain`] slices a container's flat blob with
  [`plan_mip_chain`](crate::layout::mip_chain::plan_mip_chain) and writes each level.

```no_run
use rows_and_levels::headless::{Example, HeadlessDevice, run_headless};
use rows_and_levels::pixel_formats::TextureFormat;
use rows_and_levels::visible_to::TextureConfig;
use rows_and_levels::Error;

struct Clear;

impl Example for Clear {
    fn init(_device: &HeadlessDevice, _target: &TextureConfig<'_>) -> Result<Self, Error> {
        Ok(Clear)
    }

    fn render(
        &mut self,
        _device: &HeadlessDevice,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) -> Result<(), Error> {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::RED),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        Ok(())
    }
}

test_executors::sleep_on(async {
    let device = HeadlessDevice::new("doc").await?;
    let target = TextureConfig::capture_target(100, 100, TextureFormat::Rgba8Unorm);
    let image = run_headless::<Clear>(&device, &target).await?;
    image.write_png("clear.png")
})
.unwrap();
```

The capture is complete when the returned future resolves; the driver polls the
device itself.
*/

pub use crate::imp::{
    Example, HeadlessDevice, PendingCapture, capture_texture, create_packed_buffer, create_texture,
    encode_capture, encode_capture_level, run_headless, upload_mip_chain,
};
pub use crate::layout::capture::CapturedImage;
