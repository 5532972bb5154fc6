//! Plain uncompressed color formats.

use crate::descriptor::{AspectInfo, FormatEntry, SampleKind};
use crate::{Feature, TextureFormat};

use SampleKind::{Float, Sint, Uint, UnfilterableFloat};
use TextureFormat::*;

const E: FormatEntry = FormatEntry::ABSENT;
const TIER1: Feature = Feature::TextureFormatsTier1;

const fn color(kind: SampleKind, bytes: u32) -> AspectInfo {
    AspectInfo::new(kind, bytes)
}

pub(crate) const DEFAULTS: FormatEntry = E.block(1, 1);

#[rustfmt::skip]
pub(crate) const TABLE: &[(TextureFormat, FormatEntry)] = &[
    // 8 bits per component.
    (R8Unorm, E.color(color(Float, 1)).render(true, true, 1, 1).multisample(true)),
    (R8Snorm, E.color(color(Float, 1)).gated_render(TIER1, 1, 1).multisample(false)),
    (R8Uint, E.color(color(Uint, 1)).render(false, false, 1, 1).multisample(true)),
    (R8Sint, E.color(color(Sint, 1)).render(false, false, 1, 1).multisample(true)),

    // 16 bits per pixel.
    (R16Uint, E.color(color(Uint, 2)).render(false, false, 2, 2).multisample(true)),
    (R16Sint, E.color(color(Sint, 2)).render(false, false, 2, 2).multisample(true)),
    (R16Float, E.color(color(Float, 2)).render(true, true, 2, 2).multisample(true)),
    (R16Unorm, E.color(color(Float, 2)).gated_render(TIER1, 2, 2).multisample(false).feature(TIER1)),
    (R16Snorm, E.color(color(Float, 2)).gated_render(TIER1, 2, 2).multisample(false).feature(TIER1)),
    (Rg8Unorm, E.color(color(Float, 2)).render(true, true, 2, 1).multisample(true)),
    (Rg8Snorm, E.color(color(Float, 2)).gated_render(TIER1, 2, 1).multisample(false)),
    (Rg8Uint, E.color(color(Uint, 2)).render(false, false, 2, 1).multisample(true)),
    (Rg8Sint, E.color(color(Sint, 2)).render(false, false, 2, 1).multisample(true)),

    // 32 bits per pixel.
    (R32Uint, E.color(color(Uint, 4).read_write_storage()).render(false, false, 4, 4).multisample(false)),
    (R32Sint, E.color(color(Sint, 4).read_write_storage()).render(false, false, 4, 4).multisample(false)),
    (R32Float, E.color(color(UnfilterableFloat, 4).read_write_storage()).render(false, false, 4, 4).multisample(true)),
    (Rg16Uint, E.color(color(Uint, 4)).render(false, false, 4, 2).multisample(true)),
    (Rg16Sint, E.color(color(Sint, 4)).render(false, false, 4, 2).multisample(true)),
    (Rg16Float, E.color(color(Float, 4)).render(true, true, 4, 2).multisample(true)),
    (Rg16Unorm, E.color(color(Float, 4)).gated_render(TIER1, 4, 2).multisample(false).feature(TIER1)),
    (Rg16Snorm, E.color(color(Float, 4)).gated_render(TIER1, 4, 2).multisample(false).feature(TIER1)),
    (Rgba8Unorm, E.color(color(Float, 4).storage()).render(true, true, 8, 1).multisample(true).base(Rgba8Unorm)),
    (Rgba8UnormSrgb, E.color(color(Float, 4)).render(true, true, 8, 1).multisample(true).base(Rgba8Unorm)),
    (Rgba8Snorm, E.color(color(Float, 4).storage()).gated_render(TIER1, 8, 1).multisample(false)),
    (Rgba8Uint, E.color(color(Uint, 4).storage()).render(false, false, 4, 1).multisample(true)),
    (Rgba8Sint, E.color(color(Sint, 4).storage()).render(false, false, 4, 1).multisample(true)),
    (Bgra8Unorm, E.color(color(Float, 4)).render(true, true, 8, 1).multisample(true).base(Bgra8Unorm)),
    (Bgra8UnormSrgb, E.color(color(Float, 4)).render(true, true, 8, 1).multisample(true).base(Bgra8Unorm)),

    // Packed 32 bits per pixel.
    (Rgb10a2Uint, E.color(color(Uint, 4)).render(false, false, 8, 4).multisample(true)),
    (Rgb10a2Unorm, E.color(color(Float, 4)).render(true, true, 8, 4).multisample(true)),
    (Rg11b10Ufloat, E.color(color(Float, 4)).gated_render(Feature::Rg11b10UfloatRenderable, 8, 4).multisample(false)),
    (Rgb9e5Ufloat, E.color(color(Float, 4)).multisample(false)),

    // 64 bits per pixel.
    (Rg32Uint, E.color(color(Uint, 8).storage()).render(false, false, 8, 4).multisample(false)),
    (Rg32Sint, E.color(color(Sint, 8).storage()).render(false, false, 8, 4).multisample(false)),
    (Rg32Float, E.color(color(UnfilterableFloat, 8).storage()).render(false, false, 8, 4).multisample(false)),
    (Rgba16Uint, E.color(color(Uint, 8).storage()).render(false, false, 8, 2).multisample(true)),
    (Rgba16Sint, E.color(color(Sint, 8).storage()).render(false, false, 8, 2).multisample(true)),
    (Rgba16Float, E.color(color(Float, 8).storage()).render(true, true, 8, 2).multisample(true)),
    (Rgba16Unorm, E.color(color(Float, 8)).gated_render(TIER1, 8, 2).multisample(false).feature(TIER1)),
    (Rgba16Snorm, E.color(color(Float, 8)).gated_render(TIER1, 8, 2).multisample(false).feature(TIER1)),

    // 128 bits per pixel.
    (Rgba32Uint, E.color(color(Uint, 16).storage()).render(false, false, 16, 4).multisample(false)),
    (Rgba32Sint, E.color(color(Sint, 16).storage()).render(false, false, 16, 4).multisample(false)),
    (Rgba32Float, E.color(color(UnfilterableFloat, 16).storage()).render(false, false, 16, 4).multisample(false)),
];
