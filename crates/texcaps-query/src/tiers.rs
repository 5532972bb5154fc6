//! Fixed format lists that feature tiers and compatibility mode apply to.
//!
//! Render, multisample, resolve and blend gating is carried by `FormatDescriptor::gated_render`;
//! only the storage unlocks and compatibility-mode restrictions are listed here.

use texcaps_catalog::TextureFormat::{self, *};

/// Formats `texture-formats-tier1` makes usable as read-only and write-only storage.
pub const TIER1_STORAGE: &[TextureFormat] = &[
    R8Unorm,
    R8Snorm,
    R8Uint,
    R8Sint,
    Rg8Unorm,
    Rg8Snorm,
    Rg8Uint,
    Rg8Sint,
    R16Uint,
    R16Sint,
    R16Float,
    Rg16Uint,
    Rg16Sint,
    Rg16Float,
    Rgb10a2Uint,
    Rgb10a2Unorm,
    Rg11b10Ufloat,
    R16Unorm,
    R16Snorm,
    Rg16Unorm,
    Rg16Snorm,
    Rgba16Unorm,
    Rgba16Snorm,
];

/// Formats `texture-formats-tier2` makes usable as read-write storage.
pub const TIER2_READ_WRITE_STORAGE: &[TextureFormat] = &[
    R8Unorm,
    R8Uint,
    R8Sint,
    Rgba8Unorm,
    Rgba8Uint,
    Rgba8Sint,
    R16Uint,
    R16Sint,
    R16Float,
    Rgba16Uint,
    Rgba16Sint,
    Rgba16Float,
    Rgba32Uint,
    Rgba32Sint,
    Rgba32Float,
];

/// Formats that cannot be multisampled in compatibility mode.
pub const COMPAT_NO_MULTISAMPLE: &[TextureFormat] = &[
    R8Uint,
    R8Sint,
    Rg8Uint,
    Rg8Sint,
    Rgba8Uint,
    Rgba8Sint,
    R16Uint,
    R16Sint,
    Rg16Uint,
    Rg16Sint,
    Rgba16Uint,
    Rgba16Sint,
    Rgb10a2Uint,
    Rgba16Float,
    R32Float,
];

/// Formats that cannot be storage textures in compatibility mode.
pub const COMPAT_NO_STORAGE: &[TextureFormat] = &[Rg32Uint, Rg32Sint, Rg32Float];

/// 32-bit float formats affected by `float32-filterable` and `float32-blendable`.
pub const FLOAT32: &[TextureFormat] = &[R32Float, Rg32Float, Rgba32Float];
