//! Diophant CLI
//!
//! Solves `a_1*x_1 + ... + a_n*x_n = c` over the nonnegative integers and
//! prints the solutions in set notation.
//!
//! ```text
//! diophant 11 8 9 --constant 96 --vars x,y,z
//! diophant 3 5 -c 22 --linear-bound --quiet
//! ```
//!
//! Without coefficients it solves `11x + 8y + 9z = 96`.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use diophant::prelude::*;

#[derive(Parser)]
#[command(name = "diophant")]
#[command(about = "Nonnegative integer solutions of linear Diophantine equations")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Coefficients a_1 ... a_n (nonzero)
    coefficients: Vec<i64>,

    /// Right-hand side c
    #[arg(short, long)]
    constant: Option<i64>,

    /// Comma-separated variable names, one per coefficient
    #[arg(long, value_delimiter = ',')]
    vars: Option<Vec<String>>,

    /// Cap on the quadratic parameter search bound
    #[arg(short, long, default_value_t = diophant::solve::DEFAULT_BOUND_LIMIT)]
    bound_limit: u64,

    /// Use the uncapped bound 3|c| / min|a_i| instead of the quadratic one
    #[arg(long, conflicts_with = "bound_limit")]
    linear_bound: bool,

    /// Suppress informational notices
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let (coefficients, constant, vars) = if cli.coefficients.is_empty() {
        (
            vec![11, 8, 9],
            cli.constant.unwrap_or(96),
            cli.vars.or_else(|| Some(vec!["x".into(), "y".into(), "z".into()])),
        )
    } else {
        let Some(constant) = cli.constant else {
            bail!("--constant is required when coefficients are given");
        };
        (cli.coefficients, constant, cli.vars)
    };

    let mut equation = LinearEquation::from_i64(&coefficients, constant);
    if let Some(vars) = vars {
        equation = equation.with_variables(vars);
    }

    let bound = if cli.linear_bound {
        BoundPolicy::Linear
    } else {
        BoundPolicy::Quadratic {
            limit: cli.bound_limit,
        }
    };
    let options = SolveOptions::default()
        .with_bound(bound)
        .with_verbose(!cli.quiet);

    let result = equation
        .solve_nonnegative(&options)
        .with_context(|| format!("cannot solve {equation}"))?;

    println!("{equation}");
    println!("[RESULT]");
    println!("{}", result.set_notation());
    Ok(())
}
