mod config;
mod diagram;
mod eval;
mod home_directory;
mod print;
mod prompt;

use {
    crate::{
        config::Config,
        diagram::DiagramCmd,
        eval::{Function, PowCmd, UnaryCmd},
        home_directory::HomeDirectory,
        print::Printer,
    },
    clap::{Parser, Subcommand},
    config_parser::parse_config,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Directory holding the config file [default: ~/.approx]
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Print results as JSON (a diagram sent to stdout is always raw SVG)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Raise a base to a real exponent
    Pow(PowCmd),

    /// Natural logarithm
    Ln(UnaryCmd),

    /// Exponential
    Exp(UnaryCmd),

    /// Square root
    Sqrt(UnaryCmd),

    /// Render the grid diagram as SVG
    Diagram(DiagramCmd),
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Find the home directory from the CLI `--home` flag.
    let app_dir = HomeDirectory::new_or_default(cli.home)?;

    // Parse the config file.
    let cfg: Config = parse_config(app_dir.config_file())?;

    // Set up tracing. Logs go to stderr so they never mix with results.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .init();

    let printer = Printer::new(cli.json || cfg.json);

    match cli.command {
        Command::Pow(cmd) => cmd.run(printer),
        Command::Ln(cmd) => cmd.run(Function::Ln, printer),
        Command::Exp(cmd) => cmd.run(Function::Exp, printer),
        Command::Sqrt(cmd) => cmd.run(Function::Sqrt, printer),
        Command::Diagram(cmd) => cmd.run(&cfg.diagram, printer),
    }
}
