use kinarm_core::Point;
use serde::{Deserialize, Serialize};

/// Where the drawing canvas sits on screen and how large it is.
///
/// The canvas uses the model's units but its y axis points down, with
/// (0, 0) at the top-left corner. The model's y axis points up, so every
/// crossing between the two flips y against `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas width in model units
    #[serde(default = "default_width")]
    pub width: f64,

    /// Canvas height in model units
    #[serde(default = "default_height")]
    pub height: f64,

    /// Screen x of the canvas' left edge
    #[serde(default)]
    pub left: f64,

    /// Screen y of the canvas' top edge
    #[serde(default)]
    pub top: f64,

    /// Screen pixels per model unit
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            left: 0.0,
            top: 0.0,
            scale: default_scale(),
        }
    }
}

fn default_width() -> f64 {
    600.0
}

fn default_height() -> f64 {
    300.0
}

fn default_scale() -> f64 {
    1.0
}

impl Viewport {
    /// Map a pointer position in screen pixels to a whole-unit model point.
    pub fn to_model(&self, screen: Point) -> Point {
        let canvas_x = (screen.x - self.left) / self.scale;
        let canvas_y = (screen.y - self.top) / self.scale;
        Point::new(canvas_x.round(), (self.height - canvas_y).round())
    }

    /// Map a model point to the canvas coordinates it is drawn at.
    pub fn to_canvas(&self, model: Point) -> Point {
        Point::new(model.x.round(), (self.height - model.y).round())
    }
}
