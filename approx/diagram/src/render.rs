use crate::{Canvas, DiagramError, DiagramResult, DiagramStyle, Point};

/// Draw the diagram: background, grid, axes through the centre, a filled
/// marker in the lower-left quadrant and a hollow marker on the upper half of
/// the vertical axis.
///
/// Grid lines are aligned so that one of them passes through the centre.
pub fn render_diagram<C>(canvas: &mut C, style: &DiagramStyle) -> DiagramResult<()>
where
    C: Canvas + ?Sized,
{
    if style.grid_spacing == 0 {
        return Err(DiagramError::ZeroGridSpacing);
    }

    let step = i32::try_from(style.grid_spacing).map_err(|_| DiagramError::GridSpacingTooLarge {
        spacing: style.grid_spacing,
    })?;
    let spacing = style.grid_spacing as usize;

    let (width, height) = canvas.size();
    let center = Point::new(width / 2, height / 2);

    // Markers are placed before anything is drawn, so a bad offset leaves the
    // canvas untouched.
    let offset = style.marker_offset;
    let out_of_range = || DiagramError::MarkerOutOfRange { offset };
    let filled = Point::new(
        center.x.checked_sub(offset).ok_or_else(out_of_range)?,
        center.y.checked_add(offset).ok_or_else(out_of_range)?,
    );
    let hollow = Point::new(
        center.x,
        center.y.checked_sub(offset).ok_or_else(out_of_range)?,
    );

    canvas.clear(style.background)?;

    for x in (center.x % step..width).step_by(spacing) {
        canvas.line(Point::new(x, 0), Point::new(x, height), style.grid_pen)?;
    }

    for y in (center.y % step..height).step_by(spacing) {
        canvas.line(Point::new(0, y), Point::new(width, y), style.grid_pen)?;
    }

    canvas.line(
        Point::new(center.x, 0),
        Point::new(center.x, height),
        style.axis_pen,
    )?;
    canvas.line(
        Point::new(0, center.y),
        Point::new(width, center.y),
        style.axis_pen,
    )?;

    canvas.filled_circle(filled, style.marker_radius, style.marker_color)?;
    canvas.hollow_circle(hollow, style.marker_radius, style.marker_pen)?;

    Ok(())
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{Pen, Rgb},
        test_case::test_case,
    };

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(Rgb),
        Line(Point, Point, Pen),
        Filled(Point, u32, Rgb),
        Hollow(Point, u32, Pen),
    }

    struct RecordingCanvas {
        width: i32,
        height: i32,
        ops: Vec<Op>,
    }

    impl RecordingCanvas {
        fn new(width: i32, height: i32) -> Self {
            Self {
                width,
                height,
                ops: vec![],
            }
        }

        fn lines_with(&self, pen: Pen) -> Vec<(Point, Point)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Line(from, to, p) if *p == pen => Some((*from, *to)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn size(&self) -> (i32, i32) {
            (self.width, self.height)
        }

        fn clear(&mut self, color: Rgb) -> DiagramResult<()> {
            self.ops.clear();
            self.ops.push(Op::Clear(color));
            Ok(())
        }

        fn line(&mut self, from: Point, to: Point, pen: Pen) -> DiagramResult<()> {
            self.ops.push(Op::Line(from, to, pen));
            Ok(())
        }

        fn filled_circle(&mut self, center: Point, radius: u32, color: Rgb) -> DiagramResult<()> {
            self.ops.push(Op::Filled(center, radius, color));
            Ok(())
        }

        fn hollow_circle(&mut self, center: Point, radius: u32, pen: Pen) -> DiagramResult<()> {
            self.ops.push(Op::Hollow(center, radius, pen));
            Ok(())
        }
    }

    #[test]
    fn renders_default_diagram() {
        let style = DiagramStyle::default();
        let mut canvas = RecordingCanvas::new(800, 600);

        render_diagram(&mut canvas, &style).unwrap();

        assert_eq!(canvas.ops.first(), Some(&Op::Clear(Rgb::WHITE)));
        assert_eq!(
            canvas.lines_with(style.axis_pen),
            vec![
                (Point::new(400, 0), Point::new(400, 600)),
                (Point::new(0, 300), Point::new(800, 300)),
            ]
        );
        assert_eq!(
            &canvas.ops[canvas.ops.len() - 2..],
            &[
                Op::Filled(Point::new(300, 400), 5, Rgb(150, 0, 0)),
                Op::Hollow(Point::new(400, 200), 5, Pen::new(Rgb(150, 0, 0), 2)),
            ]
        );
    }

    #[test_case(800, 600 => (40, 30, 0, 0); "centre on the grid")]
    #[test_case(810, 610 => (41, 31, 5, 5); "centre off the grid")]
    #[test_case(30, 10 => (1, 1, 15, 5); "tiny canvas")]
    fn aligns_grid_with_centre(width: i32, height: i32) -> (usize, usize, i32, i32) {
        let style = DiagramStyle::default();
        let mut canvas = RecordingCanvas::new(width, height);

        render_diagram(&mut canvas, &style).unwrap();

        let grid = canvas.lines_with(style.grid_pen);
        let (vertical, horizontal): (Vec<_>, Vec<_>) =
            grid.into_iter().partition(|(from, to)| from.x == to.x);

        (
            vertical.len(),
            horizontal.len(),
            vertical[0].0.x,
            horizontal[0].0.y,
        )
    }

    #[test]
    fn rejects_zero_grid_spacing() {
        let style = DiagramStyle {
            grid_spacing: 0,
            ..Default::default()
        };
        let mut canvas = RecordingCanvas::new(100, 100);

        assert!(matches!(
            render_diagram(&mut canvas, &style),
            Err(DiagramError::ZeroGridSpacing)
        ));
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn rejects_grid_spacing_beyond_coordinates() {
        let style = DiagramStyle {
            grid_spacing: u32::MAX,
            ..Default::default()
        };
        let mut canvas = RecordingCanvas::new(100, 100);

        assert!(matches!(
            render_diagram(&mut canvas, &style),
            Err(DiagramError::GridSpacingTooLarge { spacing: u32::MAX })
        ));
        assert!(canvas.ops.is_empty());
    }

    #[test_case(i32::MAX; "largest offset")]
    #[test_case(i32::MIN; "smallest offset")]
    #[test_case(i32::MAX - 10; "offset past the centre")]
    fn rejects_marker_offset_beyond_coordinates(offset: i32) {
        let style = DiagramStyle {
            marker_offset: offset,
            ..Default::default()
        };
        let mut canvas = RecordingCanvas::new(100, 100);

        assert!(matches!(
            render_diagram(&mut canvas, &style),
            Err(DiagramError::MarkerOutOfRange { offset: o }) if o == offset
        ));
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn accepts_marker_offset_off_the_canvas() {
        let style = DiagramStyle {
            marker_offset: 1_000,
            ..Default::default()
        };
        let mut canvas = RecordingCanvas::new(100, 100);

        render_diagram(&mut canvas, &style).unwrap();

        assert_eq!(
            canvas.ops.last(),
            Some(&Op::Hollow(Point::new(50, -950), 5, style.marker_pen))
        );
    }
}
