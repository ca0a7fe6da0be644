use {
    crate::{Canvas, DiagramError, DiagramResult, Pen, Point, Rgb},
    std::fmt::Write,
};

/// A [`Canvas`] that accumulates an SVG document in memory.
pub struct SvgCanvas {
    width: i32,
    height: i32,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32) -> DiagramResult<Self> {
        if width == 0 || height == 0 {
            return Err(DiagramError::EmptyCanvas { width, height });
        }

        Ok(Self {
            width: to_coordinate(width)?,
            height: to_coordinate(height)?,
            body: String::new(),
        })
    }

    /// Wrap the drawn elements into a complete SVG document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Canvas for SvgCanvas {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) -> DiagramResult<()> {
        self.body.clear();

        writeln!(
            self.body,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{color}"/>"#,
            self.width, self.height,
        )?;

        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, pen: Pen) -> DiagramResult<()> {
        writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            from.x, from.y, to.x, to.y, pen.color, pen.width,
        )?;

        Ok(())
    }

    fn filled_circle(&mut self, center: Point, radius: u32, color: Rgb) -> DiagramResult<()> {
        writeln!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{color}"/>"#,
            center.x, center.y,
        )?;

        Ok(())
    }

    fn hollow_circle(&mut self, center: Point, radius: u32, pen: Pen) -> DiagramResult<()> {
        writeln!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{radius}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            center.x, center.y, pen.color, pen.width,
        )?;

        Ok(())
    }
}

fn to_coordinate(dimension: u32) -> DiagramResult<i32> {
    i32::try_from(dimension).map_err(|_| DiagramError::CanvasTooLarge { dimension })
}

// ----------------------------------- tests -----------------------------------
