// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::pixel_formats::{Capability, TextureFormat};
use crate::visible_to::{BufferUsage, TextureDimension, TextureUsage};
use wgpu::{AstcBlock, AstcChannel};

impl TextureFormat {
    /// The matching wgpu format.
    pub const fn wgpu_format(self) -> wgpu::TextureFormat {
        use wgpu::TextureFormat as W;
        match self {
            TextureFormat::R8Unorm => W::R8Unorm,
            TextureFormat::R8Snorm => W::R8Snorm,
            TextureFormat::R8Uint => W::R8Uint,
            TextureFormat::R8Sint => W::R8Sint,
            TextureFormat::R16Uint => W::R16Uint,
            TextureFormat::R16Sint => W::R16Sint,
            TextureFormat::R16Float => W::R16Float,
            TextureFormat::Rg8Unorm => W::Rg8Unorm,
            TextureFormat::Rg8Snorm => W::Rg8Snorm,
            TextureFormat::Rg8Uint => W::Rg8Uint,
            TextureFormat::Rg8Sint => W::Rg8Sint,
            TextureFormat::R32Uint => W::R32Uint,
            TextureFormat::R32Sint => W::R32Sint,
            TextureFormat::R32Float => W::R32Float,
            TextureFormat::Rg16Uint => W::Rg16Uint,
            TextureFormat::Rg16Sint => W::Rg16Sint,
            TextureFormat::Rg16Float => W::Rg16Float,
            TextureFormat::Rgba8Unorm => W::Rgba8Unorm,
            TextureFormat::Rgba8UnormSrgb => W::Rgba8UnormSrgb,
            TextureFormat::Rgba8Snorm => W::Rgba8Snorm,
            TextureFormat::Rgba8Uint => W::Rgba8Uint,
            TextureFormat::Rgba8Sint => W::Rgba8Sint,
            TextureFormat::Bgra8Unorm => W::Bgra8Unorm,
            TextureFormat::Bgra8UnormSrgb => W::Bgra8UnormSrgb,
            TextureFormat::Rgb10a2Unorm => W::Rgb10a2Unorm,
            TextureFormat::Rg11b10Ufloat => W::Rg11b10Ufloat,
            TextureFormat::Rgb9e5Ufloat => W::Rgb9e5Ufloat,
            TextureFormat::Rg32Uint => W::Rg32Uint,
            TextureFormat::Rg32Sint => W::Rg32Sint,
            TextureFormat::Rg32Float => W::Rg32Float,
            TextureFormat::Rgba16Uint => W::Rgba16Uint,
            TextureFormat::Rgba16Sint => W::Rgba16Sint,
            TextureFormat::Rgba16Float => W::Rgba16Float,
            TextureFormat::Rgba32Uint => W::Rgba32Uint,
            TextureFormat::Rgba32Sint => W::Rgba32Sint,
            TextureFormat::Rgba32Float => W::Rgba32Float,
            TextureFormat::Stencil8 => W::Stencil8,
            TextureFormat::Depth16Unorm => W::Depth16Unorm,
            TextureFormat::Depth32Float => W::Depth32Float,
            TextureFormat::Bc1RgbaUnorm => W::Bc1RgbaUnorm,
            TextureFormat::Bc1RgbaUnormSrgb => W::Bc1RgbaUnormSrgb,
            TextureFormat::Bc2RgbaUnorm => W::Bc2RgbaUnorm,
            TextureFormat::Bc2RgbaUnormSrgb => W::Bc2RgbaUnormSrgb,
            TextureFormat::Bc3RgbaUnorm => W::Bc3RgbaUnorm,
            TextureFormat::Bc3RgbaUnormSrgb => W::Bc3RgbaUnormSrgb,
            TextureFormat::Bc4RUnorm => W::Bc4RUnorm,
            TextureFormat::Bc4RSnorm => W::Bc4RSnorm,
            TextureFormat::Bc5RgUnorm => W::Bc5RgUnorm,
            TextureFormat::Bc5RgSnorm => W::Bc5RgSnorm,
            TextureFormat::Bc6hRgbUfloat => W::Bc6hRgbUfloat,
            TextureFormat::Bc6hRgbFloat => W::Bc6hRgbFloat,
            TextureFormat::Bc7RgbaUnorm => W::Bc7RgbaUnorm,
            TextureFormat::Bc7RgbaUnormSrgb => W::Bc7RgbaUnormSrgb,
            TextureFormat::Etc2Rgb8Unorm => W::Etc2Rgb8Unorm,
            TextureFormat::Etc2Rgb8UnormSrgb => W::Etc2Rgb8UnormSrgb,
            TextureFormat::Etc2Rgb8A1Unorm => W::Etc2Rgb8A1Unorm,
            TextureFormat::Etc2Rgb8A1UnormSrgb => W::Etc2Rgb8A1UnormSrgb,
            TextureFormat::Etc2Rgba8Unorm => W::Etc2Rgba8Unorm,
            TextureFormat::Etc2Rgba8UnormSrgb => W::Etc2Rgba8UnormSrgb,
            TextureFormat::EacR11Unorm => W::EacR11Unorm,
            TextureFormat::EacR11Snorm => W::EacR11Snorm,
            TextureFormat::EacRg11Unorm => W::EacRg11Unorm,
            TextureFormat::EacRg11Snorm => W::EacRg11Snorm,
            TextureFormat::Astc4x4Unorm => astc(AstcBlock::B4x4, AstcChannel::Unorm),
            TextureFormat::Astc4x4UnormSrgb => astc(AstcBlock::B4x4, AstcChannel::UnormSrgb),
            TextureFormat::Astc5x5Unorm => astc(AstcBlock::B5x5, AstcChannel::Unorm),
            TextureFormat::Astc6x6Unorm => astc(AstcBlock::B6x6, AstcChannel::Unorm),
            TextureFormat::Astc8x8Unorm => astc(AstcBlock::B8x8, AstcChannel::Unorm),
            TextureFormat::Astc8x8UnormSrgb => astc(AstcBlock::B8x8, AstcChannel::UnormSrgb),
            TextureFormat::Astc10x10Unorm => astc(AstcBlock::B10x10, AstcChannel::Unorm),
            TextureFormat::Astc12x12Unorm => astc(AstcBlock::B12x12, AstcChannel::Unorm),
        }
    }
}

impl TextureFormat {
    /// The aspect a buffer<->texture copy of this format touches.
    pub(crate) const fn copy_aspect(self) -> wgpu::TextureAspect {
        match self {
            TextureFormat::Depth16Unorm | TextureFormat::Depth32Float => wgpu::TextureAspect::DepthOnly,
            TextureFormat::Stencil8 => wgpu::TextureAspect::StencilOnly,
            _ => wgpu::TextureAspect::All,
        }
    }
}

const fn astc(block: AstcBlock, channel: AstcChannel) -> wgpu::TextureFormat {
    wgpu::TextureFormat::Astc { block, channel }
}

impl Capability {
    /// The wgpu feature that grants this capability.
    pub const fn wgpu_features(self) -> wgpu::Features {
        match self {
            Capability::TextureCompressionBc => wgpu::Features::TEXTURE_COMPRESSION_BC,
            Capability::TextureCompressionEtc2 => wgpu::Features::TEXTURE_COMPRESSION_ETC2,
            Capability::TextureCompressionAstc => wgpu::Features::TEXTURE_COMPRESSION_ASTC,
        }
    }
}

impl BufferUsage {
    /// Converts these usages to the corresponding wgpu buffer usage flags.
    pub fn wgpu_usage(self) -> wgpu::BufferUsages {
        let mut usage = wgpu::BufferUsages::empty();
        for flag in self.iter() {
            usage |= match flag {
                BufferUsage::MAP_READ => wgpu::BufferUsages::MAP_READ,
                BufferUsage::MAP_WRITE => wgpu::BufferUsages::MAP_WRITE,
                BufferUsage::COPY_SRC => wgpu::BufferUsages::COPY_SRC,
                BufferUsage::COPY_DST => wgpu::BufferUsages::COPY_DST,
                BufferUsage::INDEX => wgpu::BufferUsages::INDEX,
                BufferUsage::VERTEX => wgpu::BufferUsages::VERTEX,
                BufferUsage::UNIFORM => wgpu::BufferUsages::UNIFORM,
                BufferUsage::STORAGE => wgpu::BufferUsages::STORAGE,
                _ => wgpu::BufferUsages::empty(),
            };
        }
        usage
    }
}

impl TextureUsage {
    /// Converts these usages to the corresponding wgpu texture usage flags.
    pub fn wgpu_usage(self) -> wgpu::TextureUsages {
        let mut usage = wgpu::TextureUsages::empty();
        for flag in self.iter() {
            usage |= match flag {
                TextureUsage::COPY_SRC => wgpu::TextureUsages::COPY_SRC,
                TextureUsage::COPY_DST => wgpu::TextureUsages::COPY_DST,
                TextureUsage::TEXTURE_BINDING => wgpu::TextureUsages::TEXTURE_BINDING,
                TextureUsage::STORAGE_BINDING => wgpu::TextureUsages::STORAGE_BINDING,
                TextureUsage::RENDER_ATTACHMENT => wgpu::TextureUsages::RENDER_ATTACHMENT,
                _ => wgpu::TextureUsages::empty(),
            };
        }
        usage
    }
}

impl TextureDimension {
    pub(crate) const fn wgpu_dimension(self) -> wgpu::TextureDimension {
        match self {
            TextureDimension::D2 => wgpu::TextureDimension::D2,
            TextureDimension::D3 => wgpu::TextureDimension::D3,
        }
    }
}
