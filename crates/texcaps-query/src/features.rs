//! Feature-set input to device-gated queries.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use texcaps_catalog::{CatalogError, Feature};

/// Membership test for optional device features.
///
/// Queries never enumerate or mutate a feature set, so anything that can answer "is this feature
/// enabled?" works: a slice of [`Feature`]s, [`FeatureFlags`], [`DeviceFeatures`] or (with the
/// `wgpu` cargo feature) `wgpu::Features`.
pub trait FeatureSet {
    fn has_feature(&self, feature: Feature) -> bool;

    /// Whether the device runs in WebGPU compatibility mode, which withdraws some capabilities.
    fn is_compatibility_mode(&self) -> bool {
        false
    }
}

impl<T: FeatureSet + ?Sized> FeatureSet for &T {
    fn has_feature(&self, feature: Feature) -> bool {
        (**self).has_feature(feature)
    }

    fn is_compatibility_mode(&self) -> bool {
        (**self).is_compatibility_mode()
    }
}

impl FeatureSet for [Feature] {
    fn has_feature(&self, feature: Feature) -> bool {
        self.contains(&feature)
    }
}

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct FeatureFlags: u32 {
        const DEPTH32FLOAT_STENCIL8 = 1 << 0;
        const TEXTURE_COMPRESSION_BC = 1 << 1;
        const TEXTURE_COMPRESSION_BC_SLICED_3D = 1 << 2;
        const TEXTURE_COMPRESSION_ETC2 = 1 << 3;
        const TEXTURE_COMPRESSION_ASTC = 1 << 4;
        const TEXTURE_COMPRESSION_ASTC_SLICED_3D = 1 << 5;
        const RG11B10UFLOAT_RENDERABLE = 1 << 6;
        const BGRA8UNORM_STORAGE = 1 << 7;
        const FLOAT32_FILTERABLE = 1 << 8;
        const FLOAT32_BLENDABLE = 1 << 9;
        const TEXTURE_FORMATS_TIER1 = 1 << 10;
        const TEXTURE_FORMATS_TIER2 = 1 << 11;
    }
}

impl FeatureFlags {
    pub const fn of(feature: Feature) -> Self {
        match feature {
            Feature::Depth32FloatStencil8 => Self::DEPTH32FLOAT_STENCIL8,
            Feature::TextureCompressionBc => Self::TEXTURE_COMPRESSION_BC,
            Feature::TextureCompressionBcSliced3d => Self::TEXTURE_COMPRESSION_BC_SLICED_3D,
            Feature::TextureCompressionEtc2 => Self::TEXTURE_COMPRESSION_ETC2,
            Feature::TextureCompressionAstc => Self::TEXTURE_COMPRESSION_ASTC,
            Feature::TextureCompressionAstcSliced3d => Self::TEXTURE_COMPRESSION_ASTC_SLICED_3D,
            Feature::Rg11b10UfloatRenderable => Self::RG11B10UFLOAT_RENDERABLE,
            Feature::Bgra8UnormStorage => Self::BGRA8UNORM_STORAGE,
            Feature::Float32Filterable => Self::FLOAT32_FILTERABLE,
            Feature::Float32Blendable => Self::FLOAT32_BLENDABLE,
            Feature::TextureFormatsTier1 => Self::TEXTURE_FORMATS_TIER1,
            Feature::TextureFormatsTier2 => Self::TEXTURE_FORMATS_TIER2,
        }
    }
}

impl FeatureSet for FeatureFlags {
    fn has_feature(&self, feature: Feature) -> bool {
        self.contains(Self::of(feature))
    }
}

/// The features enabled on a device, plus whether it runs in compatibility mode.
///
/// Enabling a feature also enables everything it implies (`texture-formats-tier2` brings in
/// `texture-formats-tier1`, which brings in `rg11b10ufloat-renderable`), matching what a device
/// reports once the feature has been requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceFeatures {
    flags: FeatureFlags,
    compatibility: bool,
}

impl Default for DeviceFeatures {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceFeatures {
    /// No optional features, core mode.
    pub const fn new() -> Self {
        Self {
            flags: FeatureFlags::empty(),
            compatibility: false,
        }
    }

    /// No optional features, compatibility mode.
    pub const fn compatibility() -> Self {
        Self {
            flags: FeatureFlags::empty(),
            compatibility: true,
        }
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.enable(feature);
        self
    }

    pub fn with_compatibility(mut self, compatibility: bool) -> Self {
        self.compatibility = compatibility;
        self
    }

    pub fn enable(&mut self, feature: Feature) {
        if self.flags.contains(FeatureFlags::of(feature)) {
            return;
        }
        self.flags |= FeatureFlags::of(feature);
        for &implied in feature.implied() {
            tracing::trace!(%feature, %implied, "enabling implied feature");
            self.enable(implied);
        }
    }

    /// Parse a comma-separated list of feature names. Whitespace and empty items are ignored.
    pub fn parse_list(list: &str) -> Result<Self, CatalogError> {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse::<Feature>)
            .collect()
    }

    pub fn flags(&self) -> FeatureFlags {
        self.flags
    }

    /// Enabled features, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL
            .iter()
            .copied()
            .filter(|&feature| self.has_feature(feature))
    }
}

impl FeatureSet for DeviceFeatures {
    fn has_feature(&self, feature: Feature) -> bool {
        self.flags.has_feature(feature)
    }

    fn is_compatibility_mode(&self) -> bool {
        self.compatibility
    }
}

impl FromIterator<Feature> for DeviceFeatures {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut features = Self::new();
        for feature in iter {
            features.enable(feature);
        }
        features
    }
}

impl Extend<Feature> for DeviceFeatures {
    fn extend<I: IntoIterator<Item = Feature>>(&mut self, iter: I) {
        for feature in iter {
            self.enable(feature);
        }
    }
}

impl FromStr for DeviceFeatures {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_list(s)
    }
}

impl fmt::Display for DeviceFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, feature) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(feature.as_str())?;
        }
        Ok(())
    }
}
