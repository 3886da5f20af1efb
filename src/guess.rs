use std::f64::consts::{FRAC_PI_2, PI};

use libm::atan2;

use crate::{MechanismModel, datatypes::Point2d};

/// Starting angle vector for the Newton loop, biased toward the target's
/// direction.
///
/// An all-zero start (chain flat along the x axis) puts many targets outside
/// Newton's convergence basin, so the first joint gets half the bearing angle
/// to the target and the remaining joints share a gentle curl, curling upward
/// for targets above the x axis and downward for targets below it. Targets on
/// an axis get only the first joint aimed. This is a heuristic, not an
/// optimum, and its exact branch structure is part of the solver's observable
/// behavior (tests pin it down).
pub fn initial_guess(model: &MechanismModel, target: Point2d) -> Vec<f64> {
    let n = model.joint_count();
    let mut guess = vec![0.0; n];

    let Point2d { x, y } = target;
    let base_angle = atan2(y, x);
    // Evenly spread curl: a full chain sweeps at most a quarter turn.
    let angle_spread = PI / (2.0 * n as f64);

    if (x > 0.0 && y > 0.0) || (x < 0.0 && y > 0.0) {
        // Quadrants I and II.
        guess[0] = base_angle / 2.0;
        for angle in &mut guess[1..] {
            *angle = angle_spread;
        }
    } else if (x < 0.0 && y < 0.0) || (x > 0.0 && y < 0.0) {
        // Quadrants III and IV.
        guess[0] = base_angle / 2.0;
        for angle in &mut guess[1..] {
            *angle = -angle_spread;
        }
    } else if y > 0.0 {
        // Directly above the base.
        guess[0] = FRAC_PI_2;
    } else if y < 0.0 {
        // Directly below.
        guess[0] = -FRAC_PI_2;
    } else if x < 0.0 {
        // On the negative x axis.
        guess[0] = PI;
    }
    // Positive x axis (and the origin itself) keep the all-zero guess.

    guess
}
