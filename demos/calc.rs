use clap::{Parser, ValueEnum};
use color_eyre::eyre::{bail, WrapErr};
use log::info;

use fd_domain::Domain;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Op {
    Plus,
    Minus,
    Mul,
    Div,
    InvMul,
    Intersect,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Operator to apply.
    #[arg(value_enum)]
    op: Op,

    /// Left operand, as comma-separated values or ranges (e.g. `0-10,50,60-70`).
    #[arg(value_name = "DOMAIN")]
    left: String,

    /// Right operand, same format.
    #[arg(value_name = "DOMAIN")]
    right: String,

    /// Keep floored quotients when dividing.
    #[clap(long)]
    floor: bool,

    /// Print the packed word form of the result.
    #[clap(long)]
    packed: bool,
}

fn parse_domain(s: &str) -> color_eyre::Result<Domain> {
    let mut pairs = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (lo, hi) = match part.split_once('-') {
            Some((lo, hi)) => (lo.trim(), hi.trim()),
            None => (part, part),
        };
        let lo: u32 = lo.parse().wrap_err_with(|| format!("bad bound in '{}'", part))?;
        let hi: u32 = hi.parse().wrap_err_with(|| format!("bad bound in '{}'", part))?;
        if lo > hi {
            bail!("range '{}' has lo > hi", part);
        }
        pairs.push((lo, hi));
    }
    Ok(Domain::try_from_ranges(pairs)?)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    info!("args = {:?}", args);

    let left = parse_domain(&args.left)?;
    let right = parse_domain(&args.right)?;
    println!("left  = {} (size {})", left, left.size());
    println!("right = {} (size {})", right, right.size());

    let time = std::time::Instant::now();
    let result = match args.op {
        Op::Plus => left.plus(&right),
        Op::Minus => left.minus(&right),
        Op::Mul => left.mul(&right),
        Op::Div => left.divby(&right, args.floor),
        Op::InvMul => left.inv_mul(&right),
        Op::Intersect => left.intersection(&right),
    };
    let elapsed = time.elapsed();

    println!("{:?} = {}", args.op, result);
    println!("size = {}, min = {:?}, max = {:?}", result.size(), result.min(), result.max());
    if args.packed {
        println!("packed = {:?}", result.to_packed());
    }
    info!("Computed in {:.3} ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}
