//! Solve a dense linear system from the command line
//!
//! Usage:
//!     cargo run --bin gauss-solve -- --input system.json
//!     cargo run --bin gauss-solve -- --pivoting largest-magnitude --json
//!
//! Without `--input` the built-in 2x2 demo system is solved.

use clap::{Parser, ValueEnum};
use math_gauss::{GaussConfig, GaussSolver, PivotStrategy, SingularityCheck, SystemFile};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gauss-solve",
    about = "Solve a dense linear system Ax = b by Gaussian elimination"
)]
struct Cli {
    /// JSON file with the system (`a`, `b` and an optional `solver` section)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Pivot row selection rule (overrides the file's solver section)
    #[arg(long, value_enum)]
    pivoting: Option<PivotChoice>,

    /// Singularity detection (overrides the file's solver section)
    #[arg(long, value_enum)]
    singularity_check: Option<SingularityChoice>,

    /// Pivots with magnitude at or below this value count as zero
    #[arg(long)]
    tolerance: Option<f64>,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    json: bool,

    /// Write the demo system to this path and exit
    #[arg(long)]
    save_demo: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PivotChoice {
    FirstNonZero,
    LargestMagnitude,
}

impl From<PivotChoice> for PivotStrategy {
    fn from(choice: PivotChoice) -> Self {
        match choice {
            PivotChoice::FirstNonZero => PivotStrategy::FirstNonZero,
            PivotChoice::LargestMagnitude => PivotStrategy::LargestMagnitude,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SingularityChoice {
    PivotOnly,
    Determinant,
}

impl From<SingularityChoice> for SingularityCheck {
    fn from(choice: SingularityChoice) -> Self {
        match choice {
            SingularityChoice::PivotOnly => SingularityCheck::PivotOnly,
            SingularityChoice::Determinant => SingularityCheck::Determinant,
        }
    }
}

#[derive(Debug, Serialize)]
struct SolveReport {
    x: Vec<f64>,
    residual: f64,
    determinant: f64,
    row_swaps: Vec<(usize, usize)>,
    config: GaussConfig<f64>,
}

/// x1 + x2 = 5, x1 - x2 = 1
fn demo_system() -> SystemFile {
    SystemFile::new(vec![vec![1.0, 1.0], vec![1.0, -1.0]], vec![5.0, 1.0])
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(path) = &cli.save_demo {
        demo_system().to_file(path)?;
        println!("Demo system written to {}", path.display());
        return Ok(());
    }

    let mut system = match &cli.input {
        Some(path) => SystemFile::from_file(path)?,
        None => demo_system(),
    };
    if let Some(choice) = cli.pivoting {
        system.solver.pivoting = choice.into();
    }
    if let Some(choice) = cli.singularity_check {
        system.solver.singularity_check = choice.into();
    }
    if let Some(tolerance) = cli.tolerance {
        anyhow::ensure!(
            tolerance >= 0.0,
            "Pivot tolerance must be non-negative, got {tolerance}"
        );
        system.solver.pivot_tolerance = tolerance;
    }

    let (a, b) = system.to_arrays()?;
    log::info!("Solving {}x{} system", a.nrows(), a.ncols());

    let solver = GaussSolver::new(system.solver.clone());
    let solution = solver.solve(&a, &b)?;

    if cli.json {
        let report = SolveReport {
            x: solution.x.to_vec(),
            residual: solution.residual,
            determinant: solution.determinant,
            row_swaps: solution.row_swaps,
            config: system.solver,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Solution x:");
        for (i, xi) in solution.x.iter().enumerate() {
            println!("  x[{i}] = {xi:.10}");
        }
        println!("Residual ||Ax - b||_inf: {:.3e}", solution.residual);
        println!("Determinant: {:.6}", solution.determinant);
        if !solution.row_swaps.is_empty() {
            println!("Row swaps: {:?}", solution.row_swaps);
        }
    }

    Ok(())
}
