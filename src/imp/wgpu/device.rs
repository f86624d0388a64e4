// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::error::Error;
use crate::pixel_formats::Capability;
use wgpu::{Features, Limits, PollType, Trace};

/// Features we turn on whenever the adapter offers them.
const OPTIONAL_FEATURES: Features = Features::TEXTURE_COMPRESSION_BC
    .union(Features::TEXTURE_COMPRESSION_ETC2)
    .union(Features::TEXTURE_COMPRESSION_ASTC);

/// A device with no surface, for rendering offscreen and reading the result back.
#[derive(Debug, Clone)]
pub struct HeadlessDevice {
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl HeadlessDevice {
    /// Picks an adapter and creates a device on it.
    ///
    /// The backend is chosen from the environment (`WGPU_BACKEND` and friends).
    pub async fn new(label: &str) -> Result<Self, Error> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::from_env_or_default());
        let options = wgpu::RequestAdapterOptions {
            power_preference: Default::default(),
            force_fallback_adapter: false,
            compatible_surface: None,
        };
        let adapter = instance
            .request_adapter(&options)
            .await
            .map_err(|_| Error::NoSuchAdapter)?;
        let info = adapter.get_info();
        logwise::info_sync!(
            "Headless adapter {name} on {backend}",
            name = logwise::privacy::LogIt(&info.name),
            backend = logwise::privacy::LogIt(&info.backend)
        );

        let descriptor = wgpu::DeviceDescriptor {
            label: Some(label),
            required_features: adapter.features() & OPTIONAL_FEATURES,
            required_limits: Limits::downlevel_defaults().using_resolution(adapter.limits()),
            memory_hints: Default::default(),
            trace: Trace::Off,
        };
        let (device, queue) = adapter.request_device(&descriptor).await?;
        Ok(HeadlessDevice {
            adapter,
            device,
            queue,
        })
    }

    /// True when the device was created with `capability`.
    pub fn supports(&self, capability: Capability) -> bool {
        self.device.features().contains(capability.wgpu_features())
    }

    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Blocks until submitted work and pending map callbacks have run.
    pub(crate) fn wait_idle(&self) {
        if let Err(err) = self.device.poll(PollType::Wait) {
            logwise::warn_sync!("Device poll failed: {err}", err = logwise::privacy::LogIt(&err));
        }
    }
}
