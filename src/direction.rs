//! Dominant axis of a translation vector.

use nalgebra::Vector3;
use std::fmt;

/// One of the six axis-aligned unit directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    PosY,
    NegY,
    PosX,
    NegX,
    PosZ,
    NegZ,
}

impl Direction {
    /// Candidate axes in evaluation order; earlier entries win ties
    pub const CANDIDATES: [Direction; 6] = [
        Direction::PosY,
        Direction::NegY,
        Direction::PosX,
        Direction::NegX,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// Unit vector along this direction
    #[must_use]
    pub fn unit(self) -> Vector3<f32> {
        match self {
            Direction::PosY => Vector3::y(),
            Direction::NegY => -Vector3::y(),
            Direction::PosX => Vector3::x(),
            Direction::NegX => -Vector3::x(),
            Direction::PosZ => Vector3::z(),
            Direction::NegZ => -Vector3::z(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::PosY => "+Y",
            Direction::NegY => "-Y",
            Direction::PosX => "+X",
            Direction::NegX => "-X",
            Direction::PosZ => "+Z",
            Direction::NegZ => "-Z",
        };
        f.write_str(s)
    }
}

/// Axis whose unit vector has the largest projection of `translation`.
///
/// The running maximum starts at zero and only a strictly larger projection
/// replaces the current pick, so ties go to the earlier candidate and a zero
/// (or NaN) vector reports [`Direction::PosY`].
#[must_use]
pub fn classify(translation: &Vector3<f32>) -> Direction {
    let mut best = Direction::CANDIDATES[0];
    let mut max_projection = 0.0_f32;

    for candidate in Direction::CANDIDATES {
        let projection = candidate.unit().dot(translation);
        if projection > max_projection {
            max_projection = projection;
            best = candidate;
        }
    }

    best
}
