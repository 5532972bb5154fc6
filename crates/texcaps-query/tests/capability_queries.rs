use pretty_assertions::assert_eq;
use texcaps_catalog::{Feature, FormatCatalog, TextureFormat};
use texcaps_query::{
    DeviceFeatures, DeviceQuery, FormatQuery, QueryError, StorageAccess, TextureAspect,
};

fn catalog() -> FormatCatalog {
    FormatCatalog::build().expect("catalog")
}

#[test]
fn aspect_all_is_identity_for_every_format() {
    let catalog = catalog();
    let q = FormatQuery::new(&catalog);
    for &format in catalog.all_formats() {
        assert_eq!(q.resolve_aspect_format(format, TextureAspect::All), Ok(format));
    }
}

#[test]
fn combined_depth_stencil_aspects() {
    let catalog = catalog();
    let q = FormatQuery::new(&catalog);
    assert_eq!(
        q.resolve_aspect_format(TextureFormat::Depth24PlusStencil8, TextureAspect::DepthOnly),
        Ok(TextureFormat::Depth24Plus)
    );
    assert_eq!(
        q.resolve_aspect_format(TextureFormat::Depth24PlusStencil8, TextureAspect::StencilOnly),
        Ok(TextureFormat::Stencil8)
    );
}

#[test]
fn bytes_per_sample_packing() {
    let catalog = catalog();
    let q = FormatQuery::new(&catalog);
    let rgba8 = catalog.get(TextureFormat::Rgba8Unorm);
    assert_eq!(
        q.compute_bytes_per_sample(&[TextureFormat::Rgba8Unorm]),
        Ok(rgba8.color_render.map(|info| info.byte_cost).unwrap())
    );
    assert_eq!(
        q.compute_bytes_per_sample(&[TextureFormat::R8Unorm, TextureFormat::Rgba32Float]),
        Ok(20)
    );
}

#[test]
fn depth16unorm_and_r16unorm_render_attachment() {
    let catalog = catalog();
    assert!(FormatQuery::new(&catalog).is_possibly_render_attachment(TextureFormat::Depth16Unorm));

    let empty: &[Feature] = &[];
    assert!(!DeviceQuery::new(&catalog, empty).is_render_attachment(TextureFormat::R16Unorm));

    let tier1: &[Feature] = &[Feature::TextureFormatsTier1];
    assert!(DeviceQuery::new(&catalog, tier1).is_render_attachment(TextureFormat::R16Unorm));
}

#[test]
fn tier_gated_formats_are_possibly_but_not_actually_renderable() {
    let catalog = catalog();
    let none = DeviceFeatures::new();
    let q = DeviceQuery::new(&catalog, &none);
    for desc in catalog.iter().filter(|desc| desc.gated_render.is_some()) {
        assert!(q.structural().is_possibly_render_attachment(desc.format), "{}", desc.format);
        assert!(q.structural().is_possibly_multisampled(desc.format), "{}", desc.format);
        assert!(!q.is_render_attachment(desc.format), "{}", desc.format);
        assert!(!q.is_multisampled(desc.format), "{}", desc.format);
    }
}

#[test]
fn device_capabilities_imply_possible_capabilities() {
    let catalog = catalog();
    let everything: DeviceFeatures = Feature::ALL.iter().copied().collect();
    let q = DeviceQuery::new(&catalog, &everything);
    let s = q.structural();
    for &format in catalog.all_formats() {
        if q.is_render_attachment(format) {
            assert!(s.is_possibly_render_attachment(format), "{format}");
        }
        if q.is_multisampled(format) {
            assert!(s.is_possibly_multisampled(format), "{format}");
        }
        for &access in StorageAccess::ALL {
            if q.is_storage_usable(format, access) {
                assert!(s.is_possibly_storage_usable(format, access), "{format} {access}");
            }
        }
    }
}

#[test]
fn copy_query_on_missing_aspect_is_an_error() {
    let catalog = catalog();
    let q = FormatQuery::new(&catalog);
    assert_eq!(
        q.can_copy_from_aspect(TextureFormat::Bgra8Unorm, TextureAspect::StencilOnly),
        Err(QueryError::AspectNotPresent {
            format: TextureFormat::Bgra8Unorm,
            aspect: TextureAspect::StencilOnly,
        })
    );
}

#[test]
fn report_serializes_with_wire_strings() {
    let catalog = catalog();
    let features = DeviceFeatures::new().with(Feature::TextureCompressionAstc);
    let report = DeviceQuery::new(&catalog, &features).report(TextureFormat::Astc8x8UnormSrgb);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["format"], "astc-8x8-unorm-srgb");
    assert_eq!(json["required_feature"], "texture-compression-astc");
    assert_eq!(json["enabled"], true);
    assert_eq!(json["render_attachment"], false);
    assert_eq!(json["dimensions"], serde_json::json!(["2d"]));
    assert_eq!(json["view_formats"], serde_json::json!(["astc-8x8-unorm"]));
}
