use crate::tessellation::TriangleMesh;

/// Display attributes carried alongside a generated surface.
///
/// These are plain values for the host-binding layer to copy onto whatever
/// scene object it wraps the mesh in; nothing in the kernel reads them back.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelStyle {
    /// Display name.
    pub name: String,
    /// RGB color, each channel in `[0, 1]`.
    pub color: [f64; 3],
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for ModelStyle {
    fn default() -> Self {
        Self {
            name: "Model".into(),
            color: [230.0 / 255.0, 230.0 / 255.0, 77.0 / 255.0],
            opacity: 1.0,
        }
    }
}

impl ModelStyle {
    /// Creates a style with the given name and default color/opacity.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A generated surface together with its display attributes.
#[derive(Debug, Clone)]
pub struct Model {
    /// The triangulated surface.
    pub mesh: TriangleMesh,
    /// Display attributes for the host.
    pub style: ModelStyle,
}
