use {
    crate::print::Printer,
    approx_diagram::{DiagramResult, DiagramStyle, SvgCanvas, render_diagram},
    clap::Parser,
    colored::Colorize,
    serde::Serialize,
    std::{fmt, fs, path::PathBuf},
};

#[derive(Parser)]
pub struct DiagramCmd {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Write the SVG document to this file [default: stdout]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl DiagramCmd {
    /// Without `--output` the SVG document itself is the result and goes to
    /// stdout as is, regardless of `--json`.
    pub fn run(self, style: &DiagramStyle, printer: Printer) -> anyhow::Result<()> {
        let svg = draw_svg(self.width, self.height, style)?;

        let Some(output) = self.output else {
            print!("{svg}");
            return Ok(());
        };

        fs::write(&output, svg)?;

        tracing::debug!(width = self.width, height = self.height, "Rendered diagram");

        printer.print(&DiagramWritten {
            output,
            width: self.width,
            height: self.height,
        })
    }
}

#[derive(Serialize, Debug)]
pub struct DiagramWritten {
    output: PathBuf,
    width: u32,
    height: u32,
}

impl fmt::Display for DiagramWritten {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:?}", "Diagram written to".green(), self.output)
    }
}

fn draw_svg(width: u32, height: u32, style: &DiagramStyle) -> DiagramResult<String> {
    let mut canvas = SvgCanvas::new(width, height)?;

    render_diagram(&mut canvas, style)?;

    Ok(canvas.finish())
}

// ----------------------------------- tests -----------------------------------
