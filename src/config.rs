use std::path::PathBuf;

/// Settings for the geometry loading and correction pass.
#[derive(Debug, Clone)]
pub struct GeometryConfig {
    /// Write the corrected floor plan back out when the pass changed it.
    pub write_corrected: bool,
    /// Destination of the corrected geometry XML.
    pub corrected_path: PathBuf,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            write_corrected: false,
            corrected_path: PathBuf::from("geometry_corrected.xml"),
        }
    }
}
