//! Per-tick pose tests turning joint positions into hand symbols.
//!
//! Each [`PoseTest`] is a small geometric rule: a handful of per-axis distance
//! checks between two joints, optionally followed by a dominant-direction
//! check on a joint offset. Tests are independent of each other and of the
//! recognition history; the [`PoseClassifier`] simply runs its battery in
//! order and reports every test that fired.

use crate::{
    constants::*,
    direction::{self, Direction},
    skeleton::{Joint, JointFrame},
    symbols::{Hand, Symbol},
};
use log::debug;

/// Coordinate axis used by a distance check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn component(self, position: &nalgebra::Vector3<f32>) -> f32 {
        match self {
            Axis::X => position.x,
            Axis::Y => position.y,
            Axis::Z => position.z,
        }
    }
}

/// Distance constraint between two joints along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Separation {
    /// `|a - b| <= epsilon`
    Within(f32),
    /// `|a - b| >= epsilon`
    Beyond(f32),
}

/// One axis-aligned distance check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCheck {
    pub joint: Joint,
    pub reference: Joint,
    pub axis: Axis,
    pub separation: Separation,
}

impl AxisCheck {
    const fn within(joint: Joint, reference: Joint, axis: Axis, epsilon: f32) -> Self {
        Self { joint, reference, axis, separation: Separation::Within(epsilon) }
    }

    const fn beyond(joint: Joint, reference: Joint, axis: Axis, epsilon: f32) -> Self {
        Self { joint, reference, axis, separation: Separation::Beyond(epsilon) }
    }

    /// Evaluate the check against a frame
    #[must_use]
    pub fn holds(&self, frame: &JointFrame) -> bool {
        let a = self.axis.component(&frame.position(self.joint));
        let b = self.axis.component(&frame.position(self.reference));
        let distance = (a - b).abs();
        match self.separation {
            Separation::Within(epsilon) => distance <= epsilon,
            Separation::Beyond(epsilon) => distance >= epsilon,
        }
    }
}

/// Required dominant direction of `joint - origin`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionCheck {
    pub joint: Joint,
    pub origin: Joint,
    pub expected: Direction,
}

impl DirectionCheck {
    #[must_use]
    pub fn holds(&self, frame: &JointFrame) -> bool {
        direction::classify(&frame.offset(self.joint, self.origin)) == self.expected
    }
}

/// A symbol observed for one hand during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub hand: Hand,
    pub symbol: Symbol,
}

impl Observation {
    #[must_use]
    pub const fn new(hand: Hand, symbol: Symbol) -> Self {
        Self { hand, symbol }
    }
}

/// A single geometric pose rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTest {
    pub name: &'static str,
    pub hand: Hand,
    pub symbol: Symbol,
    pub checks: &'static [AxisCheck],
    pub direction: Option<DirectionCheck>,
}

impl PoseTest {
    /// Run the test, returning its observation when every check passes
    #[must_use]
    pub fn evaluate(&self, frame: &JointFrame) -> Option<Observation> {
        if !self.checks.iter().all(|check| check.holds(frame)) {
            return None;
        }
        if let Some(direction) = &self.direction {
            if !direction.holds(frame) {
                return None;
            }
        }
        Some(Observation::new(self.hand, self.symbol))
    }
}

use Axis::{X, Y, Z};
use Joint::{
    ElbowLeft, ElbowRight, HandLeft, HandRight, HipLeft, HipRight, ShoulderLeft, ShoulderRight,
};

/// Right arm stretched out to the right
pub const RIGHT_HAND_SWIPE_RIGHT: PoseTest = PoseTest {
    name: "right_hand_swipe_right",
    hand: Hand::Right,
    symbol: Symbol::TRHR,
    checks: &[
        AxisCheck::beyond(HandRight, ShoulderRight, X, SWIPE_RIGHT_MIN_OFFSET),
        AxisCheck::within(HandRight, ShoulderRight, Y, SWIPE_PLANE_TOLERANCE),
        AxisCheck::within(HandRight, ShoulderRight, Z, SWIPE_PLANE_TOLERANCE),
    ],
    direction: Some(DirectionCheck { joint: HandRight, origin: ShoulderRight, expected: Direction::PosX }),
};

/// Right arm swept across the body to the left
pub const RIGHT_HAND_SWIPE_LEFT: PoseTest = PoseTest {
    name: "right_hand_swipe_left",
    hand: Hand::Right,
    symbol: Symbol::TRHL,
    checks: &[
        AxisCheck::beyond(HandRight, ShoulderRight, X, SWIPE_LEFT_MIN_OFFSET),
        AxisCheck::within(HandRight, ShoulderRight, Y, SWIPE_PLANE_TOLERANCE),
        AxisCheck::within(HandRight, ShoulderRight, Z, SWIPE_PLANE_TOLERANCE),
    ],
    direction: Some(DirectionCheck { joint: HandRight, origin: ShoulderRight, expected: Direction::NegX }),
};

/// Right hand raised above the head
pub const RIGHT_HAND_UP: PoseTest = PoseTest {
    name: "right_hand_up",
    hand: Hand::Right,
    symbol: Symbol::TRHU,
    checks: &[
        AxisCheck::within(HandRight, ShoulderRight, X, RAISE_MAX_LATERAL),
        AxisCheck::beyond(HandRight, ShoulderRight, Y, RAISE_MIN_HEIGHT),
    ],
    direction: Some(DirectionCheck { joint: HandRight, origin: ShoulderRight, expected: Direction::PosY }),
};

/// Right arm punched towards the sensor
pub const RIGHT_HAND_PUNCH: PoseTest = PoseTest {
    name: "right_hand_punch",
    hand: Hand::Right,
    symbol: Symbol::TRHF,
    checks: &[
        AxisCheck::within(HandRight, ShoulderRight, X, PUNCH_MAX_LATERAL),
        AxisCheck::within(HandRight, ShoulderRight, Y, PUNCH_MAX_VERTICAL),
        AxisCheck::beyond(HandRight, ShoulderRight, Z, PUNCH_MIN_DEPTH),
    ],
    direction: Some(DirectionCheck { joint: HandRight, origin: ShoulderRight, expected: Direction::NegZ }),
};

/// Right hand resting next to the right hip
pub const RIGHT_HAND_REST: PoseTest = PoseTest {
    name: "right_hand_rest",
    hand: Hand::Right,
    symbol: Symbol::RHSP,
    checks: &[
        AxisCheck::within(HandRight, HipRight, X, REST_MAX_LATERAL),
        AxisCheck::within(HandRight, HipRight, Y, REST_MAX_VERTICAL),
        AxisCheck::within(HandRight, HipRight, Z, REST_MAX_DEPTH),
    ],
    direction: None,
};

/// Right arm raised diagonally outwards
pub const RIGHT_HAND_DIAGONAL_UP: PoseTest = PoseTest {
    name: "right_hand_diagonal_up",
    hand: Hand::Right,
    symbol: Symbol::RHDU,
    checks: &[
        AxisCheck::beyond(HandRight, ShoulderRight, X, DIAGONAL_MIN_LATERAL),
        AxisCheck::beyond(HandRight, ShoulderRight, Y, DIAGONAL_MIN_HEIGHT),
        AxisCheck::within(HandRight, ShoulderRight, Z, DIAGONAL_MAX_DEPTH),
    ],
    direction: Some(DirectionCheck { joint: HandRight, origin: ShoulderRight, expected: Direction::PosY }),
};

/// Right forearm vertical in front, left forearm level
pub const RIGHT_HAND_RUN_FRONT: PoseTest = PoseTest {
    name: "right_hand_run_front",
    hand: Hand::Right,
    symbol: Symbol::RRHF,
    checks: &[
        AxisCheck::within(HandRight, ElbowRight, X, RUN_MAX_FOREARM_LATERAL),
        AxisCheck::beyond(HandRight, ElbowRight, Y, RUN_MIN_FOREARM_RISE),
        AxisCheck::within(HandLeft, ElbowLeft, X, RUN_MAX_FOREARM_LATERAL),
        AxisCheck::within(HandLeft, ElbowLeft, Y, RUN_MAX_LEVEL_RISE),
    ],
    direction: None,
};

/// Left hand raised above the head
pub const LEFT_HAND_UP: PoseTest = PoseTest {
    name: "left_hand_up",
    hand: Hand::Left,
    symbol: Symbol::TLHU,
    checks: &[
        AxisCheck::within(HandLeft, ShoulderLeft, X, RAISE_MAX_LATERAL),
        AxisCheck::beyond(HandLeft, ShoulderLeft, Y, RAISE_MIN_HEIGHT),
    ],
    direction: Some(DirectionCheck { joint: HandLeft, origin: ShoulderLeft, expected: Direction::PosY }),
};

/// Left hand resting next to the left hip
pub const LEFT_HAND_REST: PoseTest = PoseTest {
    name: "left_hand_rest",
    hand: Hand::Left,
    symbol: Symbol::LHSP,
    checks: &[
        AxisCheck::within(HandLeft, HipLeft, X, REST_MAX_LATERAL),
        AxisCheck::within(HandLeft, HipLeft, Y, REST_MAX_VERTICAL),
        AxisCheck::within(HandLeft, HipLeft, Z, REST_MAX_DEPTH),
    ],
    direction: None,
};

/// Left arm raised diagonally outwards
pub const LEFT_HAND_DIAGONAL_UP: PoseTest = PoseTest {
    name: "left_hand_diagonal_up",
    hand: Hand::Left,
    symbol: Symbol::LHDU,
    checks: &[
        AxisCheck::beyond(HandLeft, ShoulderLeft, X, DIAGONAL_MIN_LATERAL),
        AxisCheck::beyond(HandLeft, ShoulderLeft, Y, DIAGONAL_MIN_HEIGHT),
        AxisCheck::within(HandLeft, ShoulderLeft, Z, DIAGONAL_MAX_DEPTH),
    ],
    direction: Some(DirectionCheck { joint: HandLeft, origin: ShoulderLeft, expected: Direction::PosY }),
};

/// Left forearm vertical in front, right forearm level
pub const LEFT_HAND_RUN_FRONT: PoseTest = PoseTest {
    name: "left_hand_run_front",
    hand: Hand::Left,
    symbol: Symbol::RLHF,
    checks: &[
        AxisCheck::within(HandLeft, ElbowLeft, X, RUN_MAX_FOREARM_LATERAL),
        AxisCheck::beyond(HandLeft, ElbowLeft, Y, RUN_MIN_FOREARM_RISE),
        AxisCheck::within(HandRight, ElbowRight, X, RUN_MAX_FOREARM_LATERAL),
        AxisCheck::within(HandRight, ElbowRight, Y, RUN_MAX_LEVEL_RISE),
    ],
    direction: None,
};

/// Right hand on the right shoulder
pub const RIGHT_HAND_ON_SHOULDER: PoseTest = PoseTest {
    name: "right_hand_on_shoulder",
    hand: Hand::Right,
    symbol: Symbol::RHRS,
    checks: &[
        AxisCheck::within(HandRight, ShoulderRight, X, SHOULDER_TOUCH_TOLERANCE),
        AxisCheck::within(HandRight, ShoulderRight, Y, SHOULDER_TOUCH_TOLERANCE),
        AxisCheck::within(HandRight, ShoulderRight, Z, SHOULDER_TOUCH_TOLERANCE),
    ],
    direction: None,
};

/// Left hand on the left shoulder
pub const LEFT_HAND_ON_SHOULDER: PoseTest = PoseTest {
    name: "left_hand_on_shoulder",
    hand: Hand::Left,
    symbol: Symbol::LHLS,
    checks: &[
        AxisCheck::within(HandLeft, ShoulderLeft, X, SHOULDER_TOUCH_TOLERANCE),
        AxisCheck::within(HandLeft, ShoulderLeft, Y, SHOULDER_TOUCH_TOLERANCE),
        AxisCheck::within(HandLeft, ShoulderLeft, Z, SHOULDER_TOUCH_TOLERANCE),
    ],
    direction: None,
};

/// Standard battery, in evaluation order
pub const DEFAULT_BATTERY: [PoseTest; 11] = [
    RIGHT_HAND_SWIPE_RIGHT,
    RIGHT_HAND_SWIPE_LEFT,
    RIGHT_HAND_UP,
    RIGHT_HAND_PUNCH,
    RIGHT_HAND_REST,
    RIGHT_HAND_DIAGONAL_UP,
    RIGHT_HAND_RUN_FRONT,
    LEFT_HAND_UP,
    LEFT_HAND_REST,
    LEFT_HAND_DIAGONAL_UP,
    LEFT_HAND_RUN_FRONT,
];

/// Shoulder-touch tests, appended when enabled in configuration
pub const SHOULDER_TOUCH_TESTS: [PoseTest; 2] = [RIGHT_HAND_ON_SHOULDER, LEFT_HAND_ON_SHOULDER];

/// Runs a battery of pose tests over a frame
#[derive(Debug, Clone)]
pub struct PoseClassifier {
    tests: Vec<PoseTest>,
}

impl PoseClassifier {
    /// Classifier over an explicit battery
    #[must_use]
    pub fn new(tests: Vec<PoseTest>) -> Self {
        Self { tests }
    }

    /// Classifier over [`DEFAULT_BATTERY`], optionally extended with the shoulder-touch tests
    #[must_use]
    pub fn standard(shoulder_touch_tests: bool) -> Self {
        let mut tests = DEFAULT_BATTERY.to_vec();
        if shoulder_touch_tests {
            tests.extend_from_slice(&SHOULDER_TOUCH_TESTS);
        }
        Self::new(tests)
    }

    /// The battery in evaluation order
    #[must_use]
    pub fn tests(&self) -> &[PoseTest] {
        &self.tests
    }

    /// Every observation made on `frame`, in battery order
    #[must_use]
    pub fn classify(&self, frame: &JointFrame) -> Vec<Observation> {
        self.tests
            .iter()
            .filter_map(|test| {
                let observation = test.evaluate(frame);
                if observation.is_some() {
                    debug!("Pose test {} fired", test.name);
                }
                observation
            })
            .collect()
    }
}

impl Default for PoseClassifier {
    fn default() -> Self {
        Self::standard(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn frame(pairs: &[(Joint, [f32; 3])]) -> JointFrame {
        JointFrame::from_positions(pairs.iter().map(|(j, p)| (*j, Vector3::new(p[0], p[1], p[2]))))
    }

    #[test]
    fn test_axis_check_bounds_are_inclusive() {
        let f = frame(&[(HandRight, [0.5, 0.0, 0.0]), (ShoulderRight, [0.0, 0.0, 0.0])]);
        assert!(AxisCheck::beyond(HandRight, ShoulderRight, X, 0.5).holds(&f));
        assert!(AxisCheck::within(HandRight, ShoulderRight, X, 0.5).holds(&f));
        assert!(!AxisCheck::within(HandRight, ShoulderRight, X, 0.49).holds(&f));
        assert!(!AxisCheck::beyond(HandRight, ShoulderRight, X, 0.51).holds(&f));
    }

    #[test]
    fn test_axis_check_is_symmetric() {
        let f = frame(&[(HandRight, [-0.3, 0.0, 0.0]), (ShoulderRight, [0.0, 0.0, 0.0])]);
        assert!(AxisCheck::beyond(HandRight, ShoulderRight, X, 0.25).holds(&f));
    }

    #[test]
    fn test_direction_gate() {
        // Far enough on x, but pointing left: only the left swipe passes
        let f = frame(&[(HandRight, [-0.2, 0.5, 2.0]), (ShoulderRight, [0.2, 0.5, 2.0])]);
        assert_eq!(RIGHT_HAND_SWIPE_RIGHT.evaluate(&f), None);
        assert_eq!(
            RIGHT_HAND_SWIPE_LEFT.evaluate(&f),
            Some(Observation::new(Hand::Right, Symbol::TRHL))
        );
    }

    #[test]
    fn test_all_origin_frame() {
        // Every joint at the origin: hands sit on hips, elbows, and shoulders
        let f = JointFrame::new();
        let observed = PoseClassifier::standard(true).classify(&f);
        let symbols: Vec<Symbol> = observed.iter().map(|o| o.symbol).collect();
        assert_eq!(symbols, vec![Symbol::RHSP, Symbol::LHSP, Symbol::RHRS, Symbol::LHLS]);
    }

    #[test]
    fn test_standard_battery_order() {
        let classifier = PoseClassifier::default();
        let names: Vec<&str> = classifier.tests().iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 11);
        assert_eq!(names[0], "right_hand_swipe_right");
        assert_eq!(names[10], "left_hand_run_front");
        assert_eq!(PoseClassifier::standard(true).tests().len(), 13);
    }
}
