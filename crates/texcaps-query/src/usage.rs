use texcaps_catalog::wire_enum;

wire_enum! {
    /// Which aspect of a texture a copy, view or binding addresses.
    pub enum TextureAspect ("texture aspect") {
        All => "all",
        DepthOnly => "depth-only",
        StencilOnly => "stencil-only",
    }
}

wire_enum! {
    /// Storage texture access mode.
    pub enum StorageAccess ("storage access") {
        ReadOnly => "read-only",
        WriteOnly => "write-only",
        ReadWrite => "read-write",
    }
}

wire_enum! {
    pub enum TextureDimension ("texture dimension") {
        D1 => "1d",
        D2 => "2d",
        D3 => "3d",
    }
}
