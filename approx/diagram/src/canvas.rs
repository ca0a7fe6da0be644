use {
    crate::DiagramResult,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// A pixel position. The origin is the top-left corner, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const WHITE: Self = Self(255, 255, 255);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.0, self.1, self.2)
    }
}

/// A solid stroke.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub color: Rgb,
    pub width: u32,
}

impl Pen {
    pub const fn new(color: Rgb, width: u32) -> Self {
        Self { color, width }
    }
}

/// The drawing primitives a host surface has to provide.
pub trait Canvas {
    /// Width and height in pixels.
    fn size(&self) -> (i32, i32);

    /// Fill the whole surface with `color`, discarding whatever was drawn.
    fn clear(&mut self, color: Rgb) -> DiagramResult<()>;

    fn line(&mut self, from: Point, to: Point, pen: Pen) -> DiagramResult<()>;

    fn filled_circle(&mut self, center: Point, radius: u32, color: Rgb) -> DiagramResult<()>;

    fn hollow_circle(&mut self, center: Point, radius: u32, pen: Pen) -> DiagramResult<()>;
}
