// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
mod device;
mod example;
mod pixel_format;
mod readback;
mod upload;

pub use device::HeadlessDevice;
pub use example::{Example, run_headless};
pub use readback::{PendingCapture, capture_texture, encode_capture, encode_capture_level};
pub use upload::{create_packed_buffer, create_texture, upload_mip_chain};
