//! Draws a Cartesian grid, its axes and two marker points onto any surface
//! implementing [`Canvas`].

mod canvas;
mod error;
mod render;
mod style;
mod svg;

pub use {canvas::*, error::*, render::*, style::*, svg::*};
