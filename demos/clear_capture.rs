//! Clears an offscreen target and saves it as a PNG.
//!
//! The target is 100 pixels wide on purpose: a row of 100 RGBA8 pixels is 400
//! bytes, which is not a multiple of 256.  The readback buffer is therefore
//! strided at 512 bytes per row and the capture has to be unpacked before it can
//! be encoded.  A wrong stride shows up as a sheared or striped image.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example clear_capture -- [output.png]
//! ```
//!
//! `WGPU_BACKEND` selects the backend, as usual for wgpu.

use rows_and_levels::Error;
use rows_and_levels::headless::{Example, HeadlessDevice, run_headless};
use rows_and_levels::layout::capture::plan_capture_rgba8;
use rows_and_levels::pixel_formats::TextureFormat;
use rows_and_levels::visible_to::TextureConfig;

const WIDTH: u32 = 100;
const HEIGHT: u32 = 64;

struct ClearExample {
    color: wgpu::Color,
}

impl Example for ClearExample {
    fn init(_device: &HeadlessDevice, _target: &TextureConfig<'_>) -> Result<Self, Error> {
        Ok(ClearExample {
            color: wgpu::Color::RED,
        })
    }

    fn render(
        &mut self,
        _device: &HeadlessDevice,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) -> Result<(), Error> {
        let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.color),
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

async fn run(output: String) -> Result<(), Error> {
    let device = HeadlessDevice::new("clear_capture").await?;
    let target = TextureConfig::capture_target(WIDTH, HEIGHT, TextureFormat::Rgba8Unorm)
        .with_debug_name("clear target");
    let plan = plan_capture_rgba8(target.extent());
    println!(
        "{}x{}: {} bytes per row, padded to {} ({} readback bytes)",
        WIDTH, HEIGHT, plan.row_layout.unpadded_bytes, plan.row_layout.padded_bytes, plan.total_buffer_bytes
    );

    let image = run_headless::<ClearExample>(&device, &target).await?;
    let red = image.pixels.chunks_exact(4).filter(|p| *p == [255, 0, 0, 255]).count();
    println!("{red} of {} pixels are red", WIDTH * HEIGHT);
    image.write_png(&output)?;
    println!("wrote {output}");
    Ok(())
}

fn main() {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "clear_capture.png".to_string());
    if let Err(err) = test_executors::sleep_on(run(output)) {
        eprintln!("clear_capture: {err}");
        std::process::exit(1);
    }
}
