/// Ways a mechanism description can be invalid.
///
/// All of these are construction-time errors. A [`crate::MechanismModel`]
/// that exists is always internally consistent.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MechanismError {
    /// A serial chain needs at least one joint.
    #[error("A mechanism must have at least 1 joint")]
    NoJoints,
    /// The number of link lengths must equal the number of joints.
    #[error("Mechanism has {joints} joints but {links} link lengths were supplied")]
    WrongNumberLinks {
        /// How many joints the caller declared.
        joints: usize,
        /// How many link lengths the caller actually supplied.
        links: usize,
    },
    /// Every link must have strictly positive length.
    #[error("Link {index} has non-positive length {length}")]
    NonPositiveLink {
        /// Zero-based index of the offending link, counted outward from the base.
        index: usize,
        /// The rejected length. NaN is rejected too.
        length: f64,
    },
}

/// Why a solve request could not produce a solution history.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SolveError {
    /// The target lies beyond the mechanism's maximum extension, so no joint
    /// angles can reach it. The Newton loop is never entered in this case.
    /// This is an expected outcome for ordinary inputs, not a fault.
    #[error(
        "Target is {distance} away from the base but the mechanism only reaches {max_reach}"
    )]
    Unreachable {
        /// Distance from the base (origin) to the requested target.
        distance: f64,
        /// Total length of the chain at full extension.
        max_reach: f64,
    },
}
