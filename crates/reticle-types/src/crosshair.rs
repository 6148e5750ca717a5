use serde::{Deserialize, Serialize};

/// The twelve crosshair parameters, keyed by their CS2 console cvar names
/// on the wire. This is the same shape the inference schema declares and
/// the command serializer walks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrosshairConfig {
    /// Length of the crosshair lines, usually 0.5 to 10
    #[serde(rename = "cl_crosshairsize")]
    pub size: f64,
    /// Width of the crosshair lines, usually 0.1 to 6
    #[serde(rename = "cl_crosshairthickness")]
    pub thickness: f64,
    /// Gap between the lines, may be negative
    #[serde(rename = "cl_crosshairgap")]
    pub gap: f64,
    #[serde(rename = "cl_crosshair_drawoutline")]
    pub draw_outline: bool,
    /// Usually 0 or 1; the model may omit it
    #[serde(rename = "cl_crosshair_outlinethickness", default)]
    pub outline_thickness: f64,
    #[serde(rename = "cl_crosshairdot")]
    pub dot: bool,
    #[serde(rename = "cl_crosshaircolor_r")]
    pub color_r: u8,
    #[serde(rename = "cl_crosshaircolor_g")]
    pub color_g: u8,
    #[serde(rename = "cl_crosshaircolor_b")]
    pub color_b: u8,
    /// Opacity 0-255, 255 is fully opaque
    #[serde(rename = "cl_crosshairalpha")]
    pub alpha: u8,
    /// 4 is static, 5 is dynamic
    #[serde(rename = "cl_crosshairstyle")]
    pub style: u8,
    /// T-style crosshair: the top line is omitted
    #[serde(rename = "cl_crosshair_t", default)]
    pub t_style: bool,
}
