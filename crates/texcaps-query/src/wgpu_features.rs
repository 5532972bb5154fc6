//! `wgpu` feature bits as a [`FeatureSet`].
//!
//! Only WebGPU features with a direct `wgpu::Features` counterpart are mapped. The format tiers,
//! `float32-blendable` and the sliced-3D compression features have no such bit, so a
//! `wgpu::Features` never reports them.

use texcaps_catalog::Feature;

use crate::{DeviceFeatures, FeatureSet};

/// The `wgpu` bit for `feature`, if `wgpu` exposes one.
pub fn wgpu_feature(feature: Feature) -> Option<wgpu::Features> {
    Some(match feature {
        Feature::Depth32FloatStencil8 => wgpu::Features::DEPTH32FLOAT_STENCIL8,
        Feature::TextureCompressionBc => wgpu::Features::TEXTURE_COMPRESSION_BC,
        Feature::TextureCompressionEtc2 => wgpu::Features::TEXTURE_COMPRESSION_ETC2,
        Feature::TextureCompressionAstc => wgpu::Features::TEXTURE_COMPRESSION_ASTC,
        Feature::Rg11b10UfloatRenderable => wgpu::Features::RG11B10UFLOAT_RENDERABLE,
        Feature::Bgra8UnormStorage => wgpu::Features::BGRA8UNORM_STORAGE,
        Feature::Float32Filterable => wgpu::Features::FLOAT32_FILTERABLE,
        Feature::TextureCompressionBcSliced3d
        | Feature::TextureCompressionAstcSliced3d
        | Feature::Float32Blendable
        | Feature::TextureFormatsTier1
        | Feature::TextureFormatsTier2 => return None,
    })
}

impl FeatureSet for wgpu::Features {
    fn has_feature(&self, feature: Feature) -> bool {
        wgpu_feature(feature).is_some_and(|bit| self.contains(bit))
    }
}

impl From<wgpu::Features> for DeviceFeatures {
    fn from(features: wgpu::Features) -> Self {
        Feature::ALL
            .iter()
            .copied()
            .filter(|&feature| features.has_feature(feature))
            .collect()
    }
}
