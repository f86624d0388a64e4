// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Resource usage declarations and texture configuration.
//!
//! Usages are declared up front so the backend can place and synchronize
//! resources correctly.  They are typed flag sets rather than raw integers;
//! the wgpu backend translates them to its own flags.
//!
//! # Examples
//!
//! ```
//! use rows_and_levels::visible_to::{TextureConfig, TextureUsage};
//! use rows_and_levels::pixel_formats::TextureFormat;
//!
//! // A render target we intend to read back
//! let target = TextureConfig::capture_target(256, 128, TextureFormat::Rgba8UnormSrgb);
//! assert!(target.usage.contains(TextureUsage::RENDER_ATTACHMENT | TextureUsage::COPY_SRC));
//!
//! // A sampled, mipmapped texture uploaded from a blob
//! let sprite = TextureConfig::new(64, 64, TextureFormat::Bc1RgbaUnorm)
//!     .with_usage(TextureUsage::TEXTURE_BINDING | TextureUsage::COPY_DST)
//!     .with_full_mip_chain()
//!     .with_debug_name("sprite");
//! assert_eq!(sprite.mip_level_count, 7);
//! ```

use crate::error::Error;
use crate::layout::Dimensions;
use crate::layout::mip_chain::full_mip_level_count;
use crate::pixel_formats::TextureFormat;
use bitflags::bitflags;

bitflags! {
    /// How a buffer will be used.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferUsage: u32 {
        /// The host maps the buffer to read it.
        const MAP_READ = 1 << 0;
        /// The host maps the buffer to write it.
        const MAP_WRITE = 1 << 1;
        /// The buffer is a copy source.
        const COPY_SRC = 1 << 2;
        /// The buffer is a copy destination.
        const COPY_DST = 1 << 3;
        /// The buffer holds index data.
        const INDEX = 1 << 4;
        /// The buffer holds vertex attribute data.
        const VERTEX = 1 << 5;
        /// The buffer is bound as a uniform buffer.
        const UNIFORM = 1 << 6;
        /// The buffer is bound as a storage buffer.
        const STORAGE = 1 << 7;
    }
}

impl BufferUsage {
    /// A buffer the GPU copies into and the host reads back.
    pub const READBACK: BufferUsage = BufferUsage::MAP_READ.union(BufferUsage::COPY_DST);
}

bitflags! {
    /// How a texture will be used.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureUsage: u32 {
        /// The texture is a copy source.
        const COPY_SRC = 1 << 0;
        /// The texture is a copy destination.
        const COPY_DST = 1 << 1;
        /// The texture is sampled or read in a shader.
        const TEXTURE_BINDING = 1 << 2;
        /// The texture is written as a storage texture.
        const STORAGE_BINDING = 1 << 3;
        /// The texture is a render pass attachment.
        const RENDER_ATTACHMENT = 1 << 4;
    }
}

/// Texture dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureDimension {
    /// 2D, possibly with array layers.
    #[default]
    D2,
    /// 3D; `array_layer_count` is the depth.
    D3,
}

/// Configuration for a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureConfig<'a> {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub usage: TextureUsage,
    pub mip_level_count: u32,
    /// Array layers for 2D textures, depth for 3D textures.
    pub array_layer_count: u32,
    pub dimension: TextureDimension,
    pub debug_name: &'a str,
}

impl TextureConfig<'static> {
    /// A single-level 2D texture with no usages.
    pub const fn new(width: u32, height: u32, format: TextureFormat) -> Self {
        TextureConfig {
            width,
            height,
            format,
            usage: TextureUsage::empty(),
            mip_level_count: 1,
            array_layer_count: 1,
            dimension: TextureDimension::D2,
            debug_name: "",
        }
    }

    /// A render target that can be copied out for capture.
    pub const fn capture_target(width: u32, height: u32, format: TextureFormat) -> Self {
        let mut config = Self::new(width, height, format);
        config.usage = TextureUsage::RENDER_ATTACHMENT.union(TextureUsage::COPY_SRC);
        config.debug_name = "capture target";
        config
    }
}

impl<'a> TextureConfig<'a> {
    /// Size of mip level 0.
    pub const fn extent(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub const fn is_3d(&self) -> bool {
        matches!(self.dimension, TextureDimension::D3)
    }

    /// Checks that level 0 of a block-compressed texture is whole blocks.
    ///
    /// Smaller levels may be partial blocks; only the base size is constrained.
    pub fn check_block_alignment(&self) -> Result<(), Error> {
        let descriptor = self.format.descriptor();
        if self.width % descriptor.block_width != 0 || self.height % descriptor.block_height != 0 {
            return Err(Error::UnalignedCompressedSize {
                format: self.format,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn with_usage(mut self, usage: TextureUsage) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_mip_level_count(mut self, count: u32) -> Self {
        self.mip_level_count = count;
        self
    }

    /// Sets the mip level count to a complete chain down to 1x1.
    pub fn with_full_mip_chain(mut self) -> Self {
        self.mip_level_count = full_mip_level_count(self.extent());
        self
    }

    pub fn with_array_layers(mut self, count: u32) -> Self {
        self.array_layer_count = count;
        self.dimension = TextureDimension::D2;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.array_layer_count = depth;
        self.dimension = TextureDimension::D3;
        self
    }

    pub fn with_debug_name<'b>(self, debug_name: &'b str) -> TextureConfig<'b> {
        TextureConfig {
            width: self.width,
            height: self.height,
            format: self.format,
            usage: self.usage,
            mip_level_count: self.mip_level_count,
            array_layer_count: self.array_layer_count,
            dimension: self.dimension,
            debug_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BufferUsage, TextureConfig, TextureDimension, TextureUsage};
    use crate::error::Error;
use crate::layout::Dimensions;
    use crate::pixel_formats::TextureFormat;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn readback_usage() {
        assert!(BufferUsage::READBACK.contains(BufferUsage::MAP_READ));
        assert!(BufferUsage::READBACK.contains(BufferUsage::COPY_DST));
        assert!(!BufferUsage::READBACK.contains(BufferUsage::COPY_SRC));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn builders() {
        let config = TextureConfig::new(100, 50, TextureFormat::Rgba8Unorm)
            .with_usage(TextureUsage::COPY_DST)
            .with_depth(8);
        assert_eq!(config.extent(), Dimensions::new(100, 50));
        assert_eq!(config.dimension, TextureDimension::D3);
        assert!(config.is_3d());
        assert_eq!(config.array_layer_count, 8);

        let name = String::from("cube");
        let config = config.with_array_layers(6).with_full_mip_chain().with_debug_name(&name);
        assert!(!config.is_3d());
        assert_eq!(config.mip_level_count, 7);
        assert_eq!(config.debug_name, "cube");
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn block_alignment() {
        assert!(TextureConfig::new(100, 36, TextureFormat::Bc1RgbaUnorm).check_block_alignment().is_ok());
        assert!(matches!(
            TextureConfig::new(100, 37, TextureFormat::Bc1RgbaUnorm).check_block_alignment(),
            Err(crate::Error::UnalignedCompressedSize { width: 100, height: 37, .. })
        ));
        assert!(matches!(
            TextureConfig::new(20, 24, TextureFormat::Astc6x6Unorm).check_block_alignment(),
            Err(crate::Error::UnalignedCompressedSize { .. })
        ));
        assert!(TextureConfig::new(24, 12, TextureFormat::Astc6x6Unorm).check_block_alignment().is_ok());
        //uncompressed formats are always whole blocks
        assert!(TextureConfig::new(37, 3, TextureFormat::Rgba8Unorm).check_block_alignment().is_ok());
    }
}
