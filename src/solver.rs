use faer::{Mat, prelude::Solve};

use crate::{
    MechanismModel,
    datatypes::Point2d,
    kinematics::{compute_jacobian, end_effector_position},
};

/// Tuning knobs for the Newton loop.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Converged once the residual's L2 norm drops below this.
    pub position_tolerance: f64,
    /// Reserved step-size tolerance. Part of the contract for callers that
    /// want to configure it ahead of time, but termination is currently
    /// decided by the residual check alone.
    pub step_tolerance: f64,
    /// Hard cap on iterations; hitting it means [`SolveStatus::Unstable`].
    pub max_iterations: usize,
    /// Tikhonov weight added to the normal equations. Keeps the per-iteration
    /// linear solve well-posed when the Jacobian loses rank (fully extended
    /// or folded chain).
    pub lambda: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position_tolerance: 1e-6,
            step_tolerance: 1e-6,
            max_iterations: 1000,
            lambda: 1e-9,
        }
    }
}

impl Config {
    /// Set the residual tolerance that counts as converged.
    pub fn with_position_tolerance(mut self, tolerance: f64) -> Self {
        self.position_tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the regularization weight.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }
}

/// How a Newton run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    /// Residual norm fell below the position tolerance.
    Converged,
    /// Iteration cap reached first. The history is still returned, but the
    /// last entry is not a trustworthy solution.
    Unstable,
}

/// Everything a Newton run produced, converged or not.
///
/// A complete snapshot owned by the caller: nothing here refers back into
/// solver state, and the solver keeps nothing between runs.
#[derive(Clone, Debug)]
pub struct SolveOutcome {
    /// How the run terminated.
    pub status: SolveStatus,
    /// Loop passes executed. Always equal to `history.len()`.
    pub iterations: usize,
    /// Joint-angle vector at the top of every iteration, in order: entry 0 is
    /// the initial guess, the last entry is the final (converged or aborted)
    /// configuration. Each entry is recorded before that iteration's
    /// convergence check, so no correction has been applied to it yet.
    pub history: Vec<Vec<f64>>,
    /// L2 norm of the position residual at each history entry. Same length as
    /// `history`; this replaces the per-iteration console narration of older
    /// tooling with data the caller can query or render.
    pub residual_norms: Vec<f64>,
}

impl SolveOutcome {
    /// Did the run actually reach the target?
    pub fn is_converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }

    /// The last joint configuration of the run.
    pub fn final_angles(&self) -> &[f64] {
        self.history.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// Residual norm at the last history entry.
    pub fn final_residual_norm(&self) -> f64 {
        self.residual_norms.last().copied().unwrap_or(f64::INFINITY)
    }
}

/// Run Newton's method from `initial_guess` until the end-effector reaches
/// `target` or the iteration cap is hit.
///
/// Each pass evaluates forward kinematics, records the current angles and
/// residual, and if not yet converged solves the damped normal equations
///
/// ```text
/// (JᵀJ + λI) d = Jᵀe
/// ```
///
/// for the correction `d`. The Jacobian is 2 x n and generally wide, so this
/// is a least-squares step; with `λ > 0` it stays well-defined even at
/// kinematic singularities where `J` is rank-deficient (the step simply
/// degenerates toward zero there, and the run ends via the cap if it cannot
/// escape). Angles are not wrapped or clamped anywhere; they may grow without
/// bound across iterations.
///
/// The loop has no reachability awareness: handed an unreachable target it
/// will run to the cap. Callers should check
/// [`MechanismModel::is_out_of_reach`] first, as [`crate::solve`] does.
///
/// # Panics
/// If `initial_guess.len()` doesn't match the model's joint count.
pub fn newton_solve(
    model: &MechanismModel,
    initial_guess: Vec<f64>,
    target: Point2d,
    config: Config,
) -> SolveOutcome {
    let n = model.joint_count();
    assert_eq!(
        initial_guess.len(),
        n,
        "Initial guess has {} entries but the mechanism has {} joints",
        initial_guess.len(),
        n
    );

    let mut angles = initial_guess;
    let mut history = Vec::new();
    let mut residual_norms = Vec::new();
    // The regularization term is constant across iterations.
    let lambda_i = Mat::from_fn(n, n, |row, col| if row == col { config.lambda } else { 0.0 });

    for iteration in 0..config.max_iterations {
        let actual = end_effector_position(model, &angles);
        let e = target - actual;

        let residual_norm = e.magnitude();

        // Record before the convergence check, so the history always starts
        // at the untouched initial guess and ends at the final configuration.
        history.push(angles.clone());
        residual_norms.push(residual_norm);

        if residual_norm < config.position_tolerance {
            return SolveOutcome {
                status: SolveStatus::Converged,
                iterations: iteration + 1,
                history,
                residual_norms,
            };
        }

        let jacobian = compute_jacobian(model, &angles);
        let jt = jacobian.transpose().to_owned();
        let jtj = &jt * &jacobian;
        let a = &jtj + &lambda_i;
        let e_col = Mat::from_fn(2, 1, |row, _| if row == 0 { e.x } else { e.y });
        let b = &jt * &e_col;

        // λI makes `a` nonsingular, so the factorization always yields a step.
        let d = a.full_piv_lu().solve(&b);
        for (i, angle) in angles.iter_mut().enumerate() {
            *angle += d[(i, 0)];
        }
    }

    SolveOutcome {
        status: SolveStatus::Unstable,
        iterations: config.max_iterations,
        history,
        residual_norms,
    }
}
