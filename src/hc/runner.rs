//! Hill climbing execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the initial solution; it is the best known and the first
//!    history entry
//! 2. Repeat (one iteration is a *sweep*):
//!    a. Materialize the neighborhood of the current best
//!    b. Scan it in order; every neighbor scoring strictly higher than the
//!    running best becomes the new best and is appended to the history
//!    c. Stop if the best is the same solution the sweep started from
//! 3. Return the best solution and the history
//!
//! Acceptance is cumulative within a sweep: several neighbors of the same
//! snapshot may be accepted one after another, so the outcome depends on
//! the order in which the neighborhood yields them.
//!
//! # Termination
//!
//! The loop has no built-in bound. It ends when the equality predicate
//! reports that a sweep left the best solution unchanged, which is
//! guaranteed for a finite neighborhood and a bounded score. An infinite
//! neighborhood, or one that keeps producing strictly better distinct
//! solutions forever, never terminates. Callers that need a bound set
//! [`HcConfig::max_sweeps`] or use [`HcRunner::run_with_cancel`].

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};
use logging_timer::time;

use super::config::HcConfig;
use super::types::HcProblem;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcResult<S> {
    /// Best solution found. Always equal to the last history entry.
    pub best: S,

    /// Score of the best solution.
    pub best_score: f64,

    /// Accepted solutions in acceptance order, starting with the initial one.
    pub history: Vec<S>,

    /// Score of each history entry (`score_history[i]` belongs to `history[i]`).
    pub score_history: Vec<f64>,

    /// Number of completed sweeps.
    pub sweeps: usize,

    /// Number of evaluator calls, the initial solution included.
    pub evaluations: usize,

    /// Whether the run stopped because a sweep left the best unchanged.
    pub converged: bool,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Hill climbing runner.
pub struct HcRunner;

impl HcRunner {
    /// Executes hill climbing on the given problem, starting from `initial`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_hillclimb::hc::{HcConfig, HcProblem, HcRunner};
    ///
    /// struct Target;
    ///
    /// impl HcProblem for Target {
    ///     type Solution = i64;
    ///     fn neighbors(&self, &x: &i64) -> Vec<i64> { vec![x - 1, x + 1] }
    ///     fn evaluate(&self, &x: &i64) -> f64 { -((x - 7) as f64).abs() }
    ///     fn is_same(&self, a: &i64, b: &i64) -> bool { a == b }
    /// }
    ///
    /// let result = HcRunner::run(&Target, 0, &HcConfig::default());
    /// assert_eq!(result.best, 7);
    /// assert_eq!(result.history, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    /// assert!(result.converged);
    /// ```
    pub fn run<P: HcProblem>(
        problem: &P,
        initial: P::Solution,
        config: &HcConfig,
    ) -> HcResult<P::Solution> {
        Self::run_with_cancel(problem, initial, config, None)
    }

    /// Runs hill climbing with an optional cancellation token.
    ///
    /// The flag is checked before every sweep; a set flag stops the run
    /// with the best solution found so far.
    #[time]
    pub fn run_with_cancel<P: HcProblem>(
        problem: &P,
        initial: P::Solution,
        config: &HcConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> HcResult<P::Solution> {
        let outcome = climb(
            initial,
            |solution| Ok::<_, Infallible>(problem.neighbors(solution)),
            |solution| Ok(problem.evaluate(solution)),
            |a, b| Ok(problem.is_same(a, b)),
            config,
            cancel.as_deref(),
        );

        match outcome {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }
}

/// Climbs from `initial` until a sweep leaves the best solution unchanged.
///
/// `neighborhood` is called once per sweep with the current best and must
/// return a finite sequence; `evaluate` scores a solution (higher is
/// better); `equals` decides whether the best moved during a sweep.
///
/// Returns the best solution and the history of accepted solutions, the
/// first entry being `initial`.
///
/// The loop is unbounded: it only ends once `equals` reports that a sweep
/// left the best unchanged. A neighborhood that never runs out of strictly
/// better solutions makes it run forever; use [`HcRunner`] with
/// [`HcConfig::max_sweeps`] when a bound is needed.
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::hill_climbing;
///
/// let (best, history) = hill_climbing(
///     0,
///     |&x: &i32| if x < 5 { vec![x + 1] } else { vec![] },
///     |&x| x as f64,
///     |a, b| a == b,
/// );
/// assert_eq!(best, 5);
/// assert_eq!(history, vec![0, 1, 2, 3, 4, 5]);
/// ```
pub fn hill_climbing<S, N, I, F, Q>(
    initial: S,
    mut neighborhood: N,
    mut evaluate: F,
    mut equals: Q,
) -> (S, Vec<S>)
where
    S: Clone,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    F: FnMut(&S) -> f64,
    Q: FnMut(&S, &S) -> bool,
{
    let outcome = try_hill_climbing(
        initial,
        |solution| Ok::<_, Infallible>(neighborhood(solution)),
        |solution| Ok(evaluate(solution)),
        |a, b| Ok(equals(a, b)),
    );

    match outcome {
        Ok(found) => found,
        Err(never) => match never {},
    }
}

/// Fallible form of [`hill_climbing`].
///
/// The first error returned by any collaborator aborts the run and is
/// returned as is; nothing is retried.
///
/// # Examples
///
/// ```
/// use u_hillclimb::hc::try_hill_climbing;
///
/// let outcome = try_hill_climbing(
///     0,
///     |&x: &i32| Ok(vec![x + 1]),
///     |&x| if x < 3 { Ok(x as f64) } else { Err(format!("cannot score {x}")) },
///     |a, b| Ok(a == b),
/// );
/// assert_eq!(outcome, Err("cannot score 3".to_string()));
/// ```
pub fn try_hill_climbing<S, E, N, I, F, Q>(
    initial: S,
    neighborhood: N,
    evaluate: F,
    equals: Q,
) -> Result<(S, Vec<S>), E>
where
    S: Clone,
    N: FnMut(&S) -> Result<I, E>,
    I: IntoIterator<Item = S>,
    F: FnMut(&S) -> Result<f64, E>,
    Q: FnMut(&S, &S) -> Result<bool, E>,
{
    let result = climb(initial, neighborhood, evaluate, equals, &HcConfig::default(), None)?;
    Ok((result.best, result.history))
}

fn climb<S, E, N, I, F, Q>(
    initial: S,
    mut neighborhood: N,
    mut evaluate: F,
    mut equals: Q,
    config: &HcConfig,
    cancel: Option<&AtomicBool>,
) -> Result<HcResult<S>, E>
where
    S: Clone,
    N: FnMut(&S) -> Result<I, E>,
    I: IntoIterator<Item = S>,
    F: FnMut(&S) -> Result<f64, E>,
    Q: FnMut(&S, &S) -> Result<bool, E>,
{
    let mut best_score = evaluate(&initial)?;
    let mut evaluations = 1;

    // The best solution is always the last history entry.
    let mut history = vec![initial];
    let mut score_history = vec![best_score];

    let mut sweeps = 0;
    let mut converged = false;
    let mut cancelled = false;

    loop {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            cancelled = true;
            break;
        }

        if config.is_exhausted(sweeps) {
            break;
        }

        let start = history.len() - 1;

        // Fixed snapshot: accepting a neighbor does not regenerate the sweep.
        let neighbors: Vec<S> = neighborhood(&history[start])?.into_iter().collect();
        let scanned = neighbors.len();

        for neighbor in neighbors {
            let score = evaluate(&neighbor)?;
            evaluations += 1;

            if score > best_score {
                trace!("sweep {sweeps}: accepted neighbor, score {best_score} -> {score}");
                best_score = score;
                history.push(neighbor);
                score_history.push(score);
            }
        }

        sweeps += 1;

        let last = history.len() - 1;
        debug!(
            "sweep {sweeps}: scanned {scanned} neighbors, accepted {}, best score {best_score}",
            last - start
        );

        if equals(&history[last], &history[start])? {
            converged = true;
            break;
        }
    }

    let best = history[history.len() - 1].clone();

    Ok(HcResult {
        best,
        best_score,
        history,
        score_history,
        sweeps,
        evaluations,
        converged,
        cancelled,
    })
}
