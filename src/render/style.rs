use crate::errors::RenderError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The "colorblind" qualitative palette
pub const COLORBLIND: [&str; 10] = [
    "#0173b2", "#de8f05", "#029e73", "#d55e00", "#cc78bc", "#ca9161", "#fbafe4", "#949494",
    "#ece133", "#56b4e9",
];

/// Everything visual about a rendered figure. Missing fields in a JSON style file fall back to
/// the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub palette: Vec<String>,
    pub circle_color: String,
    pub airfoil_color: String,
    pub axis_color: String,

    /// Palette index of the leading edge marker
    pub leading_edge: usize,

    /// Palette index of the trailing edge marker
    pub trailing_edge: usize,

    /// Curve width in the side by side layout
    pub curve_width: f64,

    /// Curve width in the single circle plane layout
    pub circle_plane_curve_width: f64,

    /// Width of the dashed center to trailing edge line
    pub radius_width: f64,
    pub axis_width: f64,
    pub marker_radius: f64,
    pub grid_opacity: f64,

    pub font_family: String,
    pub label_size: f64,
    pub title_size: f64,
    pub tick_size: f64,
    pub legend_size: f64,

    /// Size of a single panel in px
    pub panel_width: f64,
    pub panel_height: f64,
    pub margin: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            palette: COLORBLIND.iter().map(|c| c.to_string()).collect(),
            circle_color: COLORBLIND[0].to_string(),
            airfoil_color: COLORBLIND[3].to_string(),
            axis_color: "#000000".to_string(),
            leading_edge: 2,
            trailing_edge: 9,
            curve_width: 4.0,
            circle_plane_curve_width: 6.0,
            radius_width: 5.0,
            axis_width: 0.5,
            marker_radius: 7.0,
            grid_opacity: 0.3,
            font_family: "Computer Modern Roman, DejaVu Serif, serif".to_string(),
            label_size: 16.0,
            title_size: 18.0,
            tick_size: 14.0,
            legend_size: 12.0,
            panel_width: 500.0,
            panel_height: 500.0,
            margin: 70.0,
        }
    }
}

impl StyleConfig {
    pub fn from_json(text: &str) -> Result<StyleConfig, RenderError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<StyleConfig, RenderError> {
        let text = std::fs::read_to_string(path)?;
        StyleConfig::from_json(&text)
    }

    fn palette_color(&self, index: usize) -> &str {
        self.palette
            .get(index)
            .map(String::as_str)
            .unwrap_or(self.axis_color.as_str())
    }

    pub fn leading_edge_color(&self) -> &str {
        self.palette_color(self.leading_edge)
    }

    pub fn trailing_edge_color(&self) -> &str {
        self.palette_color(self.trailing_edge)
    }
}
