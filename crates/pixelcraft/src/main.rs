use anyhow::Context;
use clap::Parser;
use pixelcraft::{GameConfig, RunOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed (default: configured seed, or random in [0, 1000))
    #[arg(long)]
    seed: Option<f64>,

    /// Number of fixed update steps to simulate
    #[arg(long, default_value = "600")]
    ticks: usize,

    /// Print the generated world as text
    #[arg(long)]
    ascii: bool,

    /// Skip the lore service and use the fallback name
    #[arg(long)]
    no_lore: bool,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = GameConfig::load().context("Failed to load configuration")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if args.print_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    let options = RunOptions {
        seed: args.seed,
        ticks: args.ticks,
        ascii: args.ascii,
        lore: !args.no_lore,
    };
    let summary = pixelcraft::run(&config, &options).context("Session failed")?;

    if let Some(ascii) = &summary.ascii {
        print!("{}", ascii);
    }
    println!("{} (seed {})", summary.info.name, summary.seed);
    if !summary.info.lore.is_empty() {
        println!("{}", summary.info.lore);
    }

    Ok(())
}
