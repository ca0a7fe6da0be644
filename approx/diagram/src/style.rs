use {
    crate::{Pen, Rgb},
    serde::{Deserialize, Serialize},
};

/// Everything [`render_diagram`](crate::render_diagram) needs besides the
/// canvas itself. Passed explicitly by whoever handles the draw request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DiagramStyle {
    pub background: Rgb,
    pub grid_pen: Pen,
    pub grid_spacing: u32,
    pub axis_pen: Pen,
    pub marker_color: Rgb,
    /// Stroke of the hollow marker.
    pub marker_pen: Pen,
    pub marker_radius: u32,
    /// Distance of the markers from the origin, along each axis.
    pub marker_offset: i32,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        let marker_color = Rgb(150, 0, 0);

        Self {
            background: Rgb::WHITE,
            grid_pen: Pen::new(Rgb(220, 220, 220), 1),
            grid_spacing: 20,
            axis_pen: Pen::new(Rgb::BLACK, 2),
            marker_color,
            marker_pen: Pen::new(marker_color, 2),
            marker_radius: 5,
            marker_offset: 100,
        }
    }
}

// ----------------------------------- tests -----------------------------------
