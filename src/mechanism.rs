use crate::{MechanismError, datatypes::Point2d};

/// A planar serial linkage: rigid links joined by rotational joints,
/// anchored at the origin.
///
/// Link `i` connects joint `i` to joint `i + 1` (or to the end-effector for
/// the last link), counting outward from the base. Construction validates the
/// description once; afterwards the model is read-only for the lifetime of a
/// solve.
#[derive(Clone, Debug)]
pub struct MechanismModel {
    link_lengths: Vec<f64>,
}

impl MechanismModel {
    /// Build a model from a joint count and one link length per joint.
    ///
    /// The joint count is passed separately because it comes from a different
    /// input field than the lengths; a mismatch between the two is rejected
    /// here rather than silently trusting either one.
    pub fn new(joint_count: usize, link_lengths: Vec<f64>) -> Result<Self, MechanismError> {
        if joint_count == 0 {
            return Err(MechanismError::NoJoints);
        }
        if link_lengths.len() != joint_count {
            return Err(MechanismError::WrongNumberLinks {
                joints: joint_count,
                links: link_lengths.len(),
            });
        }
        for (index, &length) in link_lengths.iter().enumerate() {
            // `!(x > 0)` rather than `x <= 0` so NaN is caught as well.
            if !(length > 0.0) {
                return Err(MechanismError::NonPositiveLink { index, length });
            }
        }
        Ok(Self { link_lengths })
    }

    /// Number of rotational joints (equals the number of links).
    pub fn joint_count(&self) -> usize {
        self.link_lengths.len()
    }

    /// Length of each link, base outward.
    pub fn link_lengths(&self) -> &[f64] {
        &self.link_lengths
    }

    /// How far the end-effector gets from the base at full extension.
    pub fn max_reach(&self) -> f64 {
        self.link_lengths.iter().sum()
    }

    /// True if no joint configuration can place the end-effector on `target`.
    ///
    /// A target at distance exactly [`Self::max_reach`] is still reachable
    /// (fully extended chain pointing at it).
    pub fn is_out_of_reach(&self, target: Point2d) -> bool {
        Point2d::ORIGIN.distance_to(target) > self.max_reach()
    }
}
