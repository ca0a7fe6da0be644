use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),

    #[error("canvas has no area: {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("canvas dimension {dimension} exceeds the coordinate range")]
    CanvasTooLarge { dimension: u32 },

    #[error("grid spacing must be positive")]
    ZeroGridSpacing,

    #[error("grid spacing {spacing} exceeds the coordinate range")]
    GridSpacingTooLarge { spacing: u32 },

    #[error("marker offset {offset} puts a marker outside the coordinate range")]
    MarkerOutOfRange { offset: i32 },
}

pub type DiagramResult<T> = core::result::Result<T, DiagramError>;
