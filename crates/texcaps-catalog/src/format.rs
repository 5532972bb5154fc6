wire_enum! {
    /// A WebGPU texture format identifier.
    ///
    /// Variants are declared family by family (regular, sized depth-stencil, unsized
    /// depth-stencil, BC, ETC2/EAC, ASTC) so [`TextureFormat::ALL`] lists them in the same order
    /// as the catalog's family tables.
    pub enum TextureFormat ("texture format") {
        // 8 bits per component.
        R8Unorm => "r8unorm",
        R8Snorm => "r8snorm",
        R8Uint => "r8uint",
        R8Sint => "r8sint",

        // 16 bits per pixel.
        R16Uint => "r16uint",
        R16Sint => "r16sint",
        R16Float => "r16float",
        R16Unorm => "r16unorm",
        R16Snorm => "r16snorm",
        Rg8Unorm => "rg8unorm",
        Rg8Snorm => "rg8snorm",
        Rg8Uint => "rg8uint",
        Rg8Sint => "rg8sint",

        // 32 bits per pixel.
        R32Uint => "r32uint",
        R32Sint => "r32sint",
        R32Float => "r32float",
        Rg16Uint => "rg16uint",
        Rg16Sint => "rg16sint",
        Rg16Float => "rg16float",
        Rg16Unorm => "rg16unorm",
        Rg16Snorm => "rg16snorm",
        Rgba8Unorm => "rgba8unorm",
        Rgba8UnormSrgb => "rgba8unorm-srgb",
        Rgba8Snorm => "rgba8snorm",
        Rgba8Uint => "rgba8uint",
        Rgba8Sint => "rgba8sint",
        Bgra8Unorm => "bgra8unorm",
        Bgra8UnormSrgb => "bgra8unorm-srgb",

        // Packed 32 bits per pixel.
        Rgb10a2Uint => "rgb10a2uint",
        Rgb10a2Unorm => "rgb10a2unorm",
        Rg11b10Ufloat => "rg11b10ufloat",
        Rgb9e5Ufloat => "rgb9e5ufloat",

        // 64 bits per pixel.
        Rg32Uint => "rg32uint",
        Rg32Sint => "rg32sint",
        Rg32Float => "rg32float",
        Rgba16Uint => "rgba16uint",
        Rgba16Sint => "rgba16sint",
        Rgba16Float => "rgba16float",
        Rgba16Unorm => "rgba16unorm",
        Rgba16Snorm => "rgba16snorm",

        // 128 bits per pixel.
        Rgba32Uint => "rgba32uint",
        Rgba32Sint => "rgba32sint",
        Rgba32Float => "rgba32float",

        // Sized depth/stencil.
        Stencil8 => "stencil8",
        Depth16Unorm => "depth16unorm",
        Depth32Float => "depth32float",

        // Unsized depth/stencil.
        Depth24Plus => "depth24plus",
        Depth24PlusStencil8 => "depth24plus-stencil8",
        Depth32FloatStencil8 => "depth32float-stencil8",

        // BC compressed.
        Bc1RgbaUnorm => "bc1-rgba-unorm",
        Bc1RgbaUnormSrgb => "bc1-rgba-unorm-srgb",
        Bc2RgbaUnorm => "bc2-rgba-unorm",
        Bc2RgbaUnormSrgb => "bc2-rgba-unorm-srgb",
        Bc3RgbaUnorm => "bc3-rgba-unorm",
        Bc3RgbaUnormSrgb => "bc3-rgba-unorm-srgb",
        Bc4RUnorm => "bc4-r-unorm",
        Bc4RSnorm => "bc4-r-snorm",
        Bc5RgUnorm => "bc5-rg-unorm",
        Bc5RgSnorm => "bc5-rg-snorm",
        Bc6hRgbUfloat => "bc6h-rgb-ufloat",
        Bc6hRgbFloat => "bc6h-rgb-float",
        Bc7RgbaUnorm => "bc7-rgba-unorm",
        Bc7RgbaUnormSrgb => "bc7-rgba-unorm-srgb",

        // ETC2/EAC compressed.
        Etc2Rgb8Unorm => "etc2-rgb8unorm",
        Etc2Rgb8UnormSrgb => "etc2-rgb8unorm-srgb",
        Etc2Rgb8a1Unorm => "etc2-rgb8a1unorm",
        Etc2Rgb8a1UnormSrgb => "etc2-rgb8a1unorm-srgb",
        Etc2Rgba8Unorm => "etc2-rgba8unorm",
        Etc2Rgba8UnormSrgb => "etc2-rgba8unorm-srgb",
        EacR11Unorm => "eac-r11unorm",
        EacR11Snorm => "eac-r11snorm",
        EacRg11Unorm => "eac-rg11unorm",
        EacRg11Snorm => "eac-rg11snorm",

        // ASTC compressed.
        Astc4x4Unorm => "astc-4x4-unorm",
        Astc4x4UnormSrgb => "astc-4x4-unorm-srgb",
        Astc5x4Unorm => "astc-5x4-unorm",
        Astc5x4UnormSrgb => "astc-5x4-unorm-srgb",
        Astc5x5Unorm => "astc-5x5-unorm",
        Astc5x5UnormSrgb => "astc-5x5-unorm-srgb",
        Astc6x5Unorm => "astc-6x5-unorm",
        Astc6x5UnormSrgb => "astc-6x5-unorm-srgb",
        Astc6x6Unorm => "astc-6x6-unorm",
        Astc6x6UnormSrgb => "astc-6x6-unorm-srgb",
        Astc8x5Unorm => "astc-8x5-unorm",
        Astc8x5UnormSrgb => "astc-8x5-unorm-srgb",
        Astc8x6Unorm => "astc-8x6-unorm",
        Astc8x6UnormSrgb => "astc-8x6-unorm-srgb",
        Astc8x8Unorm => "astc-8x8-unorm",
        Astc8x8UnormSrgb => "astc-8x8-unorm-srgb",
        Astc10x5Unorm => "astc-10x5-unorm",
        Astc10x5UnormSrgb => "astc-10x5-unorm-srgb",
        Astc10x6Unorm => "astc-10x6-unorm",
        Astc10x6UnormSrgb => "astc-10x6-unorm-srgb",
        Astc10x8Unorm => "astc-10x8-unorm",
        Astc10x8UnormSrgb => "astc-10x8-unorm-srgb",
        Astc10x10Unorm => "astc-10x10-unorm",
        Astc10x10UnormSrgb => "astc-10x10-unorm-srgb",
        Astc12x10Unorm => "astc-12x10-unorm",
        Astc12x10UnormSrgb => "astc-12x10-unorm-srgb",
        Astc12x12Unorm => "astc-12x12-unorm",
        Astc12x12UnormSrgb => "astc-12x12-unorm-srgb",
    }
}

impl TextureFormat {
    /// Whether the identifier carries the `-srgb` suffix.
    pub fn is_srgb(self) -> bool {
        self.as_str().ends_with("-srgb")
    }
}

wire_enum! {
    /// An optional WebGPU device feature that gates a format or one of its capabilities.
    pub enum Feature ("feature") {
        Depth32FloatStencil8 => "depth32float-stencil8",
        TextureCompressionBc => "texture-compression-bc",
        TextureCompressionBcSliced3d => "texture-compression-bc-sliced-3d",
        TextureCompressionEtc2 => "texture-compression-etc2",
        TextureCompressionAstc => "texture-compression-astc",
        TextureCompressionAstcSliced3d => "texture-compression-astc-sliced-3d",
        Rg11b10UfloatRenderable => "rg11b10ufloat-renderable",
        Bgra8UnormStorage => "bgra8unorm-storage",
        Float32Filterable => "float32-filterable",
        Float32Blendable => "float32-blendable",
        TextureFormatsTier1 => "texture-formats-tier1",
        TextureFormatsTier2 => "texture-formats-tier2",
    }
}

impl Feature {
    /// Features that are implicitly enabled whenever `self` is enabled.
    ///
    /// Only direct implications are listed; callers that enable a feature should apply this
    /// transitively.
    pub const fn implied(self) -> &'static [Feature] {
        match self {
            Feature::TextureFormatsTier2 => &[Feature::TextureFormatsTier1],
            Feature::TextureFormatsTier1 => &[Feature::Rg11b10UfloatRenderable],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_format_string_parses_back() {
        for &format in TextureFormat::ALL {
            assert_eq!(format.as_str().parse::<TextureFormat>(), Ok(format));
        }
    }

    #[test]
    fn every_feature_string_parses_back() {
        for &feature in Feature::ALL {
            assert_eq!(feature.as_str().parse::<Feature>(), Ok(feature));
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "rgba8unorm-srbg".parse::<TextureFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown texture format identifier \"rgba8unorm-srbg\""
        );
        assert!("RGBA8UNORM".parse::<TextureFormat>().is_err());
    }

    #[test]
    fn index_matches_position_in_all() {
        for (idx, &format) in TextureFormat::ALL.iter().enumerate() {
            assert_eq!(format.index(), idx);
        }
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&TextureFormat::Depth24PlusStencil8).unwrap();
        assert_eq!(json, "\"depth24plus-stencil8\"");
        let back: TextureFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TextureFormat::Depth24PlusStencil8);
        assert!(serde_json::from_str::<Feature>("\"shader-f64\"").is_err());
    }

    #[test]
    fn srgb_suffix_detection() {
        assert!(TextureFormat::Bc7RgbaUnormSrgb.is_srgb());
        assert!(TextureFormat::Astc12x12UnormSrgb.is_srgb());
        assert!(!TextureFormat::Rgba8Unorm.is_srgb());
    }

    #[test]
    fn tier2_implies_tier1() {
        assert_eq!(
            Feature::TextureFormatsTier2.implied(),
            &[Feature::TextureFormatsTier1]
        );
        assert!(Feature::Float32Filterable.implied().is_empty());
    }
}
