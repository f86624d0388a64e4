// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Error type shared by the layout planners and the headless driver.
//!
//! Contract violations on the pure layout path (a readback buffer shorter than
//! its plan, a row stride that overflows `u32`) are assertions, not variants
//! here. This type covers the conditions a caller can reasonably act on.

use crate::pixel_formats::{Capability, TextureFormat};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The identifier does not name a format in the format table.
    #[error("unsupported texture format `{0}`")]
    UnsupportedFormat(String),
    /// Captures go through a per-pixel row copy, which block-compressed formats don't have.
    #[error("cannot plan a pixel capture of block-compressed format {0}")]
    CompressedCapture(TextureFormat),
    /// A source blob is shorter than the layout planned for it.
    #[error("source holds {actual} bytes but the layout needs {needed}")]
    SourceTooShort { needed: u64, actual: u64 },
    /// The device lacks a capability the format requires.
    #[error("device is missing required capability `{}`", .0.as_str())]
    MissingCapability(Capability),
    /// Block-compressed textures must be a whole number of blocks at level 0.
    #[error("{format} texture of {width}x{height} is not a whole number of blocks")]
    UnalignedCompressedSize {
        format: TextureFormat,
        width: u32,
        height: u32,
    },
    /// There's no PNG color type for this format.
    #[error("format {0} cannot be encoded as PNG")]
    UnsupportedPngFormat(TextureFormat),
    #[error(transparent)]
    PngEncoding(#[from] png::EncodingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(feature = "backend_wgpu")]
    #[error("No such adapter")]
    NoSuchAdapter,
    #[cfg(feature = "backend_wgpu")]
    #[error(transparent)]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[cfg(feature = "backend_wgpu")]
    #[error("failed to map readback buffer: {0}")]
    BufferMap(#[from] wgpu::BufferAsyncError),
}
