use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "line-graph",
    about = "Plot (x, y) series as a character-grid line graph"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot data from a CSV file
    Csv(CsvArgs),
    /// Print example invocations
    Examples,
}

/// `line-graph csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Graph title
    #[arg(short, long)]
    pub title: Option<String>,

    /// X-axis title
    #[arg(long)]
    pub x_title: Option<String>,

    /// Y-axis title
    #[arg(long)]
    pub y_title: Option<String>,

    /// Plot-area width in cells (sized to the terminal if omitted)
    #[arg(long)]
    pub width: Option<usize>,

    /// Plot-area height in cells (sized to the terminal if omitted)
    #[arg(long)]
    pub height: Option<usize>,

    /// Fraction of non-extremum points to keep, 0.0..=1.0
    #[arg(short, long, default_value_t = 1.0)]
    pub resolution: f64,

    /// Sort by x before plotting
    #[arg(long)]
    pub sort: bool,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}
