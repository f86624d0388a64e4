// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Texture format metadata.
//!
//! Every format the layout planners understand has one entry in a static,
//! read-only table.  An entry records the format's copy footprint (block
//! dimensions and bytes per block), its component count, how shaders sample it,
//! and the device capability it requires, if any.
//!
//! Formats are looked up either by [`TextureFormat`] or by their WebGPU
//! identifier string:
//!
//! ```
//! use rows_and_levels::pixel_formats::{SampleKind, TextureFormat};
//!
//! let bc1: TextureFormat = "bc1-rgba-unorm".parse().unwrap();
//! let descriptor = bc1.descriptor();
//! assert_eq!((descriptor.block_width, descriptor.block_height), (4, 4));
//! assert_eq!(descriptor.block_size_bytes, 8);
//! assert_eq!(descriptor.sample_kind, SampleKind::Float);
//!
//! assert!("not-a-format".parse::<TextureFormat>().is_err());
//! ```

/*
Quick note on table design.  The obvious implementation is a big `match` per
property (block size in one match, sample kind in another, capability in a
third).  That scatters the invariants of a single format across the file, and
it's easy to add a format to one match and forget another.

Instead the enum, the ordered list of variants, and the descriptor table are all
generated from one row per format.  `descriptor()` is then a single index.
 */
pub mod png_support;

use crate::error::Error;
use std::fmt::Display;
use std::str::FromStr;

/// How a shader samples a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    /// Filterable floating point (includes normalized integer formats).
    Float,
    /// Floating point that can't be filtered without an extra capability.
    UnfilterableFloat,
    /// Unsigned integer.
    Uint,
    /// Signed integer.
    Sint,
    /// Depth comparison.
    Depth,
}

/// A device capability some formats require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    TextureCompressionBc,
    TextureCompressionEtc2,
    TextureCompressionAstc,
}

impl Capability {
    /// The WebGPU feature name for this capability.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Capability::TextureCompressionBc => "texture-compression-bc",
            Capability::TextureCompressionEtc2 => "texture-compression-etc2",
            Capability::TextureCompressionAstc => "texture-compression-astc",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static per-format metadata.
///
/// Uncompressed formats have 1x1 blocks, so `block_size_bytes` is also their
/// bytes per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureFormatDescriptor {
    /// WebGPU identifier, e.g. `"rgba8unorm-srgb"`.
    pub name: &'static str,
    pub block_width: u32,
    pub block_height: u32,
    /// Bytes per block.
    pub block_size_bytes: u32,
    pub component_count: u32,
    pub sample_kind: SampleKind,
    pub required_capability: Option<Capability>,
}

impl TextureFormatDescriptor {
    /// True when a block covers more than one texel.
    pub const fn is_compressed(&self) -> bool {
        self.block_width > 1 || self.block_height > 1
    }
}

macro_rules! format_table {
    ($($(#[$meta:meta])* $variant:ident => $name:literal, $bw:literal x $bh:literal, $bytes:literal, $components:literal, $kind:ident, $cap:expr;)*) => {
        /// Texture formats with a defined copy footprint.
        ///
        /// Variants are named after the matching `wgpu::TextureFormat`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum TextureFormat {
            $($(#[$meta])* $variant,)*
        }

        impl TextureFormat {
            const ALL: &'static [TextureFormat] = &[$(TextureFormat::$variant,)*];
        }

        static DESCRIPTORS: &[TextureFormatDescriptor] = &[$(
            TextureFormatDescriptor {
                name: $name,
                block_width: $bw,
                block_height: $bh,
                block_size_bytes: $bytes,
                component_count: $components,
                sample_kind: SampleKind::$kind,
                required_capability: $cap,
            },
        )*];
    };
}

const BC: Option<Capability> = Some(Capability::TextureCompressionBc);
const ETC2: Option<Capability> = Some(Capability::TextureCompressionEtc2);
const ASTC: Option<Capability> = Some(Capability::TextureCompressionAstc);

format_table! {
    // 8-bit
    R8Unorm => "r8unorm", 1 x 1, 1, 1, Float, None;
    R8Snorm => "r8snorm", 1 x 1, 1, 1, Float, None;
    R8Uint => "r8uint", 1 x 1, 1, 1, Uint, None;
    R8Sint => "r8sint", 1 x 1, 1, 1, Sint, None;
    // 16-bit
    R16Uint => "r16uint", 1 x 1, 2, 1, Uint, None;
    R16Sint => "r16sint", 1 x 1, 2, 1, Sint, None;
    R16Float => "r16float", 1 x 1, 2, 1, Float, None;
    Rg8Unorm => "rg8unorm", 1 x 1, 2, 2, Float, None;
    Rg8Snorm => "rg8snorm", 1 x 1, 2, 2, Float, None;
    Rg8Uint => "rg8uint", 1 x 1, 2, 2, Uint, None;
    Rg8Sint => "rg8sint", 1 x 1, 2, 2, Sint, None;
    // 32-bit
    R32Uint => "r32uint", 1 x 1, 4, 1, Uint, None;
    R32Sint => "r32sint", 1 x 1, 4, 1, Sint, None;
    R32Float => "r32float", 1 x 1, 4, 1, UnfilterableFloat, None;
    Rg16Uint => "rg16uint", 1 x 1, 4, 2, Uint, None;
    Rg16Sint => "rg16sint", 1 x 1, 4, 2, Sint, None;
    Rg16Float => "rg16float", 1 x 1, 4, 2, Float, None;
    Rgba8Unorm => "rgba8unorm", 1 x 1, 4, 4, Float, None;
    Rgba8UnormSrgb => "rgba8unorm-srgb", 1 x 1, 4, 4, Float, None;
    Rgba8Snorm => "rgba8snorm", 1 x 1, 4, 4, Float, None;
    Rgba8Uint => "rgba8uint", 1 x 1, 4, 4, Uint, None;
    Rgba8Sint => "rgba8sint", 1 x 1, 4, 4, Sint, None;
    Bgra8Unorm => "bgra8unorm", 1 x 1, 4, 4, Float, None;
    Bgra8UnormSrgb => "bgra8unorm-srgb", 1 x 1, 4, 4, Float, None;
    // packed 32-bit
    Rgb10a2Unorm => "rgb10a2unorm", 1 x 1, 4, 4, Float, None;
    Rg11b10Ufloat => "rg11b10ufloat", 1 x 1, 4, 3, Float, None;
    Rgb9e5Ufloat => "rgb9e5ufloat", 1 x 1, 4, 3, Float, None;
    // 64-bit
    Rg32Uint => "rg32uint", 1 x 1, 8, 2, Uint, None;
    Rg32Sint => "rg32sint", 1 x 1, 8, 2, Sint, None;
    Rg32Float => "rg32float", 1 x 1, 8, 2, UnfilterableFloat, None;
    Rgba16Uint => "rgba16uint", 1 x 1, 8, 4, Uint, None;
    Rgba16Sint => "rgba16sint", 1 x 1, 8, 4, Sint, None;
    Rgba16Float => "rgba16float", 1 x 1, 8, 4, Float, None;
    // 128-bit
    Rgba32Uint => "rgba32uint", 1 x 1, 16, 4, Uint, None;
    Rgba32Sint => "rgba32sint", 1 x 1, 16, 4, Sint, None;
    Rgba32Float => "rgba32float", 1 x 1, 16, 4, UnfilterableFloat, None;
    // depth/stencil with a copyable aspect
    Stencil8 => "stencil8", 1 x 1, 1, 1, Uint, None;
    Depth16Unorm => "depth16unorm", 1 x 1, 2, 1, Depth, None;
    Depth32Float => "depth32float", 1 x 1, 4, 1, Depth, None;
    // BC
    Bc1RgbaUnorm => "bc1-rgba-unorm", 4 x 4, 8, 4, Float, BC;
    Bc1RgbaUnormSrgb => "bc1-rgba-unorm-srgb", 4 x 4, 8, 4, Float, BC;
    Bc2RgbaUnorm => "bc2-rgba-unorm", 4 x 4, 16, 4, Float, BC;
    Bc2RgbaUnormSrgb => "bc2-rgba-unorm-srgb", 4 x 4, 16, 4, Float, BC;
    Bc3RgbaUnorm => "bc3-rgba-unorm", 4 x 4, 16, 4, Float, BC;
    Bc3RgbaUnormSrgb => "bc3-rgba-unorm-srgb", 4 x 4, 16, 4, Float, BC;
    Bc4RUnorm => "bc4-r-unorm", 4 x 4, 8, 1, Float, BC;
    Bc4RSnorm => "bc4-r-snorm", 4 x 4, 8, 1, Float, BC;
    Bc5RgUnorm => "bc5-rg-unorm", 4 x 4, 16, 2, Float, BC;
    Bc5RgSnorm => "bc5-rg-snorm", 4 x 4, 16, 2, Float, BC;
    Bc6hRgbUfloat => "bc6h-rgb-ufloat", 4 x 4, 16, 3, Float, BC;
    Bc6hRgbFloat => "bc6h-rgb-float", 4 x 4, 16, 3, Float, BC;
    Bc7RgbaUnorm => "bc7-rgba-unorm", 4 x 4, 16, 4, Float, BC;
    Bc7RgbaUnormSrgb => "bc7-rgba-unorm-srgb", 4 x 4, 16, 4, Float, BC;
    // ETC2 / EAC
    Etc2Rgb8Unorm => "etc2-rgb8unorm", 4 x 4, 8, 3, Float, ETC2;
    Etc2Rgb8UnormSrgb => "etc2-rgb8unorm-srgb", 4 x 4, 8, 3, Float, ETC2;
    Etc2Rgb8A1Unorm => "etc2-rgb8a1unorm", 4 x 4, 8, 4, Float, ETC2;
    Etc2Rgb8A1UnormSrgb => "etc2-rgb8a1unorm-srgb", 4 x 4, 8, 4, Float, ETC2;
    Etc2Rgba8Unorm => "etc2-rgba8unorm", 4 x 4, 16, 4, Float, ETC2;
    Etc2Rgba8UnormSrgb => "etc2-rgba8unorm-srgb", 4 x 4, 16, 4, Float, ETC2;
    EacR11Unorm => "eac-r11unorm", 4 x 4, 8, 1, Float, ETC2;
    EacR11Snorm => "eac-r11snorm", 4 x 4, 8, 1, Float, ETC2;
    EacRg11Unorm => "eac-rg11unorm", 4 x 4, 16, 2, Float, ETC2;
    EacRg11Snorm => "eac-rg11snorm", 4 x 4, 16, 2, Float, ETC2;
    // ASTC, every block size is 16 bytes
    Astc4x4Unorm => "astc-4x4-unorm", 4 x 4, 16, 4, Float, ASTC;
    Astc4x4UnormSrgb => "astc-4x4-unorm-srgb", 4 x 4, 16, 4, Float, ASTC;
    Astc5x5Unorm => "astc-5x5-unorm", 5 x 5, 16, 4, Float, ASTC;
    Astc6x6Unorm => "astc-6x6-unorm", 6 x 6, 16, 4, Float, ASTC;
    Astc8x8Unorm => "astc-8x8-unorm", 8 x 8, 16, 4, Float, ASTC;
    Astc8x8UnormSrgb => "astc-8x8-unorm-srgb", 8 x 8, 16, 4, Float, ASTC;
    Astc10x10Unorm => "astc-10x10-unorm", 10 x 10, 16, 4, Float, ASTC;
    Astc12x12Unorm => "astc-12x12-unorm", 12 x 12, 16, 4, Float, ASTC;
}

impl TextureFormat {
    /// The static table entry for this format.
    pub fn descriptor(self) -> &'static TextureFormatDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// WebGPU identifier, e.g. `"bgra8unorm-srgb"`.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn is_compressed(self) -> bool {
        self.descriptor().is_compressed()
    }

    /// Bytes per pixel, or `None` for block-compressed formats.
    pub fn bytes_per_pixel(self) -> Option<u32> {
        let descriptor = self.descriptor();
        if descriptor.is_compressed() {
            None
        } else {
            Some(descriptor.block_size_bytes)
        }
    }

    /// Every format in the table, in table order.
    pub fn all() -> impl Iterator<Item = TextureFormat> {
        Self::ALL.iter().copied()
    }
}

impl Display for TextureFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextureFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .zip(DESCRIPTORS)
            .find(|(_, descriptor)| descriptor.name == s)
            .map(|(format, _)| *format)
            .ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}
