//! Improves a tour over a national TSP instance by pairwise swaps.
//!
//! ```text
//! cargo run --release --example tsp -- dj38.tsp --seed 7 --output dj38.png
//! ```

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use u_hillclimb::hc::{HcConfig, HcProblem, HcRunner};
use u_hillclimb::plot::{plot_with, PlotConfig};
use u_hillclimb::tsplib::{read_problem, Point};

#[derive(Parser, Debug)]
#[command(about = "Hill climbing over a TSPLIB coordinate file")]
struct Args {
    /// Problem file with a NODE_COORD_SECTION.
    problem: PathBuf,

    /// Shuffle the initial tour with this seed instead of using file order.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many sweeps (0 = until converged).
    #[arg(long, default_value_t = 0)]
    max_sweeps: usize,

    /// Stop after this many seconds.
    #[arg(long)]
    time_limit: Option<u64>,

    /// Write the figure here (.svg or bitmap by extension).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Plot coordinates as stored, without putting latitude on the y axis.
    #[arg(long)]
    no_swap_axes: bool,
}

/// A tour is a permutation of point indices; neighbors swap two positions.
struct SwapTour<'a> {
    points: &'a [Point],
}

impl SwapTour<'_> {
    fn length(&self, tour: &[usize]) -> f64 {
        tour.iter()
            .zip(tour.iter().cycle().skip(1))
            .map(|(&a, &b)| self.points[a].distance(&self.points[b]))
            .sum()
    }
}

impl HcProblem for SwapTour<'_> {
    type Solution = Vec<usize>;

    fn neighbors(&self, tour: &Vec<usize>) -> Vec<Vec<usize>> {
        let n = tour.len();
        let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let mut next = tour.clone();
                next.swap(i, j);
                out.push(next);
            }
        }
        out
    }

    fn evaluate(&self, tour: &Vec<usize>) -> f64 {
        -self.length(tour)
    }

    fn is_same(&self, a: &Vec<usize>, b: &Vec<usize>) -> bool {
        a == b
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let problem = read_problem(&args.problem)
        .with_context(|| format!("cannot load '{}'", args.problem.display()))?;
    if problem.points.len() < 2 {
        bail!("'{}' has fewer than two points", args.problem.display());
    }

    let name = problem.name().unwrap_or("unnamed").to_string();
    let mut initial: Vec<usize> = (0..problem.points.len()).collect();
    if let Some(seed) = args.seed {
        initial.shuffle(&mut StdRng::seed_from_u64(seed));
    }

    let cancel = args.time_limit.map(|seconds| {
        let flag = Arc::new(AtomicBool::new(false));
        let timer = flag.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(seconds));
            timer.store(true, Ordering::Relaxed);
        });
        flag
    });

    let tour = SwapTour {
        points: &problem.points,
    };
    let config = HcConfig::default().with_max_sweeps(args.max_sweeps);
    let initial_length = tour.length(&initial);

    let result = HcRunner::run_with_cancel(&tour, initial, &config, cancel);

    println!("instance:       {name} ({} points)", problem.points.len());
    println!("initial length: {initial_length:.3}");
    println!("best length:    {:.3}", -result.best_score);
    println!("improvements:   {}", result.history.len() - 1);
    println!("sweeps:         {}", result.sweeps);
    println!("evaluations:    {}", result.evaluations);
    println!(
        "stopped by:     {}",
        if result.converged {
            "local optimum"
        } else if result.cancelled {
            "time limit"
        } else {
            "sweep budget"
        }
    );

    if let Some(output) = args.output {
        let solution: Vec<Point> = result.best.iter().map(|&i| problem.points[i]).collect();
        let trajectory: Vec<f64> = result.score_history.iter().map(|score| -score).collect();
        let config = PlotConfig::default().with_swap_axes(!args.no_swap_axes);

        // DrawResult carries a non-Send error; flatten it to text for anyhow.
        plot_with(&solution, &trajectory, &name, &output, &config)
            .map_err(|err| anyhow::anyhow!("cannot plot to '{}': {err}", output.display()))?;
        println!("figure:         {}", output.display());
    }

    Ok(())
}
