//! Inverse kinematics for planar serial linkages.
//!
//! Given a chain of rigid links anchored at the origin and a target point,
//! this crate finds joint angles that place the chain's end-effector on the
//! target, using Newton's method on the position residual. The whole
//! iteration history is returned so callers (e.g. a visualization layer) can
//! animate the convergence or inspect how it failed.

pub use crate::datatypes::Point2d;
pub use crate::error::{MechanismError, SolveError};
pub use crate::guess::initial_guess;
pub use crate::kinematics::{compute_jacobian, end_effector_position};
pub use crate::mechanism::MechanismModel;
pub use crate::solver::{Config, SolveOutcome, SolveStatus, newton_solve};

/// Geometric data (2D points).
mod datatypes;
/// Error types for invalid mechanisms and failed solve requests.
mod error;
/// Picks the starting angle vector for the Newton loop.
mod guess;
/// Forward kinematics and the Jacobian of the chain.
mod kinematics;
/// Validated description of the linkage.
mod mechanism;
/// The Newton-Gauss iteration itself.
mod solver;

/// Solve the inverse-kinematics problem for one mechanism and target.
///
/// Checks reachability first: targets beyond the chain's maximum extension
/// come back as [`SolveError::Unreachable`] without ever entering the Newton
/// loop. Reachable targets get a direction-biased initial guess (see
/// [`initial_guess`]) and then a full Newton run; the returned
/// [`SolveOutcome`] says whether it [`SolveStatus::Converged`] or aborted as
/// [`SolveStatus::Unstable`], and carries the complete per-iteration angle
/// history and residual norms either way.
///
/// Each call is independent: no state is shared across invocations, so
/// solves for different mechanisms can run on separate threads freely.
pub fn solve(
    model: &MechanismModel,
    target: Point2d,
    config: Config,
) -> Result<SolveOutcome, SolveError> {
    if model.is_out_of_reach(target) {
        return Err(SolveError::Unreachable {
            distance: Point2d::ORIGIN.distance_to(target),
            max_reach: model.max_reach(),
        });
    }
    let guess = initial_guess(model, target);
    Ok(newton_solve(model, guess, target, config))
}
