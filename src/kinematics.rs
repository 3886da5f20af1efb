use faer::Mat;
use libm::{cos, sin};

use crate::{MechanismModel, datatypes::Point2d};

/// Where the tip of the chain ends up for a given joint configuration.
///
/// Angles are relative: joint `i`'s angle is measured against the orientation
/// accumulated by joints `0..i`, so link `i` extends along the running prefix
/// sum of angles. Pure function of its inputs.
///
/// # Panics
/// If `angles.len()` doesn't match the model's joint count.
pub fn end_effector_position(model: &MechanismModel, angles: &[f64]) -> Point2d {
    assert_eq!(
        angles.len(),
        model.joint_count(),
        "Angle vector has {} entries but the mechanism has {} joints",
        angles.len(),
        model.joint_count()
    );

    let mut x = 0.0;
    let mut y = 0.0;
    let mut theta = 0.0;
    for (&length, &angle) in model.link_lengths().iter().zip(angles) {
        theta += angle;
        x += length * cos(theta);
        y += length * sin(theta);
    }
    Point2d::new(x, y)
}

/// Partial derivatives of the end-effector position with respect to each
/// joint angle: a 2 x `joint_count` matrix, row 0 for x and row 1 for y.
///
/// Rotating joint `j` swings every link at or beyond `j` and leaves links
/// before `j` untouched, so column `j` sums `(-lᵢ sin θᵢ, lᵢ cos θᵢ)` over
/// `i >= j`, with `θᵢ` the cumulative orientation through joint `i`. One
/// traversal accumulates link `i`'s term into all columns `0..=i`, which is
/// the same closed form without recomputing the chain per column.
///
/// # Panics
/// If `angles.len()` doesn't match the model's joint count.
pub fn compute_jacobian(model: &MechanismModel, angles: &[f64]) -> Mat<f64> {
    assert_eq!(
        angles.len(),
        model.joint_count(),
        "Angle vector has {} entries but the mechanism has {} joints",
        angles.len(),
        model.joint_count()
    );

    let n = model.joint_count();
    let mut jacobian = Mat::<f64>::zeros(2, n);
    let mut theta = 0.0;
    for (i, (&length, &angle)) in model.link_lengths().iter().zip(angles).enumerate() {
        theta += angle;
        let dx = -length * sin(theta);
        let dy = length * cos(theta);
        for col in 0..=i {
            jacobian[(0, col)] += dx;
            jacobian[(1, col)] += dy;
        }
    }
    jacobian
}
