//! Block-compressed color formats.
//!
//! Compressed formats are copyable and sampleable as `float`, never storage, render or
//! multisample targets.

use crate::descriptor::{AspectInfo, FormatEntry, SampleKind};
use crate::{Feature, TextureFormat};

use TextureFormat::*;

const E: FormatEntry = FormatEntry::ABSENT;

const fn blocks(bytes: u32) -> AspectInfo {
    AspectInfo::new(SampleKind::Float, bytes)
}

pub(crate) const BC_DEFAULTS: FormatEntry = E
    .block(4, 4)
    .multisample(false)
    .feature(Feature::TextureCompressionBc);

pub(crate) const BC_TABLE: &[(TextureFormat, FormatEntry)] = &[
    (Bc1RgbaUnorm, E.color(blocks(8)).base(Bc1RgbaUnorm)),
    (Bc1RgbaUnormSrgb, E.color(blocks(8)).base(Bc1RgbaUnorm)),
    (Bc2RgbaUnorm, E.color(blocks(16)).base(Bc2RgbaUnorm)),
    (Bc2RgbaUnormSrgb, E.color(blocks(16)).base(Bc2RgbaUnorm)),
    (Bc3RgbaUnorm, E.color(blocks(16)).base(Bc3RgbaUnorm)),
    (Bc3RgbaUnormSrgb, E.color(blocks(16)).base(Bc3RgbaUnorm)),
    (Bc4RUnorm, E.color(blocks(8))),
    (Bc4RSnorm, E.color(blocks(8))),
    (Bc5RgUnorm, E.color(blocks(16))),
    (Bc5RgSnorm, E.color(blocks(16))),
    (Bc6hRgbUfloat, E.color(blocks(16))),
    (Bc6hRgbFloat, E.color(blocks(16))),
    (Bc7RgbaUnorm, E.color(blocks(16)).base(Bc7RgbaUnorm)),
    (Bc7RgbaUnormSrgb, E.color(blocks(16)).base(Bc7RgbaUnorm)),
];

pub(crate) const ETC2_DEFAULTS: FormatEntry = E
    .block(4, 4)
    .multisample(false)
    .feature(Feature::TextureCompressionEtc2);

pub(crate) const ETC2_TABLE: &[(TextureFormat, FormatEntry)] = &[
    (Etc2Rgb8Unorm, E.color(blocks(8)).base(Etc2Rgb8Unorm)),
    (Etc2Rgb8UnormSrgb, E.color(blocks(8)).base(Etc2Rgb8Unorm)),
    (Etc2Rgb8a1Unorm, E.color(blocks(8)).base(Etc2Rgb8a1Unorm)),
    (Etc2Rgb8a1UnormSrgb, E.color(blocks(8)).base(Etc2Rgb8a1Unorm)),
    (Etc2Rgba8Unorm, E.color(blocks(16)).base(Etc2Rgba8Unorm)),
    (Etc2Rgba8UnormSrgb, E.color(blocks(16)).base(Etc2Rgba8Unorm)),
    (EacR11Unorm, E.color(blocks(8))),
    (EacR11Snorm, E.color(blocks(8))),
    (EacRg11Unorm, E.color(blocks(16))),
    (EacRg11Snorm, E.color(blocks(16))),
];

// ASTC blocks are always 16 bytes; only the footprint varies.
pub(crate) const ASTC_DEFAULTS: FormatEntry = E
    .color(blocks(16))
    .multisample(false)
    .feature(Feature::TextureCompressionAstc);

const fn astc(width: u32, height: u32, base: TextureFormat) -> FormatEntry {
    E.block(width, height).base(base)
}

#[rustfmt::skip]
pub(crate) const ASTC_TABLE: &[(TextureFormat, FormatEntry)] = &[
    (Astc4x4Unorm, astc(4, 4, Astc4x4Unorm)),
    (Astc4x4UnormSrgb, astc(4, 4, Astc4x4Unorm)),
    (Astc5x4Unorm, astc(5, 4, Astc5x4Unorm)),
    (Astc5x4UnormSrgb, astc(5, 4, Astc5x4Unorm)),
    (Astc5x5Unorm, astc(5, 5, Astc5x5Unorm)),
    (Astc5x5UnormSrgb, astc(5, 5, Astc5x5Unorm)),
    (Astc6x5Unorm, astc(6, 5, Astc6x5Unorm)),
    (Astc6x5UnormSrgb, astc(6, 5, Astc6x5Unorm)),
    (Astc6x6Unorm, astc(6, 6, Astc6x6Unorm)),
    (Astc6x6UnormSrgb, astc(6, 6, Astc6x6Unorm)),
    (Astc8x5Unorm, astc(8, 5, Astc8x5Unorm)),
    (Astc8x5UnormSrgb, astc(8, 5, Astc8x5Unorm)),
    (Astc8x6Unorm, astc(8, 6, Astc8x6Unorm)),
    (Astc8x6UnormSrgb, astc(8, 6, Astc8x6Unorm)),
    (Astc8x8Unorm, astc(8, 8, Astc8x8Unorm)),
    (Astc8x8UnormSrgb, astc(8, 8, Astc8x8Unorm)),
    (Astc10x5Unorm, astc(10, 5, Astc10x5Unorm)),
    (Astc10x5UnormSrgb, astc(10, 5, Astc10x5Unorm)),
    (Astc10x6Unorm, astc(10, 6, Astc10x6Unorm)),
    (Astc10x6UnormSrgb, astc(10, 6, Astc10x6Unorm)),
    (Astc10x8Unorm, astc(10, 8, Astc10x8Unorm)),
    (Astc10x8UnormSrgb, astc(10, 8, Astc10x8Unorm)),
    (Astc10x10Unorm, astc(10, 10, Astc10x10Unorm)),
    (Astc10x10UnormSrgb, astc(10, 10, Astc10x10Unorm)),
    (Astc12x10Unorm, astc(12, 10, Astc12x10Unorm)),
    (Astc12x10UnormSrgb, astc(12, 10, Astc12x10Unorm)),
    (Astc12x12Unorm, astc(12, 12, Astc12x12Unorm)),
    (Astc12x12UnormSrgb, astc(12, 12, Astc12x12Unorm)),
];
