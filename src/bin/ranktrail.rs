use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ranktrail", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the render descriptor for one view and print it as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input raw records JSON (an array, one object per influencer).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First timeline month, YYYY-MM.
    #[arg(long)]
    from: String,

    /// Last timeline month, YYYY-MM (inclusive).
    #[arg(long)]
    to: String,

    /// How many influencers to consider, ranked by retweet count.
    #[arg(long, default_value_t = 100)]
    top: usize,

    /// Highest rank that still qualifies a month.
    #[arg(long, default_value_t = 10)]
    max_rank: u32,

    /// Row ordering strategy.
    #[arg(long, value_enum, default_value_t = OrderChoice::First)]
    order_by: OrderChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderChoice {
    First,
    Last,
    Span,
    RetweetedCount,
    MonthCount,
}

impl From<OrderChoice> for ranktrail::OrderBy {
    fn from(value: OrderChoice) -> Self {
        match value {
            OrderChoice::First => Self::First,
            OrderChoice::Last => Self::Last,
            OrderChoice::Span => Self::Span,
            OrderChoice::RetweetedCount => Self::RetweetedCount,
            OrderChoice::MonthCount => Self::MonthCount,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the descriptor JSON.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
    }
}

fn read_records_json(path: &Path) -> anyhow::Result<Vec<serde_json::Value>> {
    let f = File::open(path).with_context(|| format!("open records '{}'", path.display()))?;
    let r = BufReader::new(f);
    let records: Vec<serde_json::Value> =
        serde_json::from_reader(r).with_context(|| "parse records JSON array")?;
    Ok(records)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let records = read_records_json(&args.in_path)?;
    let timeline = ranktrail::Timeline::from_range(&args.from, &args.to)?;
    let influencers = ranktrail::normalize_records(&records, &timeline)?;
    let params = ranktrail::ViewParams {
        top_n: args.top,
        max_rank: args.max_rank,
        order_by: args.order_by.into(),
    };

    let descriptor = ranktrail::layout_view(&influencers, &timeline, &params)?;
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}
