//! Skeleton sampling: the joint set, the sensor interface and per-tick frames.
//!
//! The recognizer never talks to a sensor directly. Anything that can report
//! joint positions for a primary user implements [`SkeletonSource`], and the
//! [`JointSampler`] pulls the fixed joint set out of it once per tick.

use crate::constants::{NO_USER_ID, NUM_SAMPLED_JOINTS};
use log::{debug, trace};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Joints read every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joint {
    HandLeft,
    HandRight,
    ElbowLeft,
    ElbowRight,
    ShoulderLeft,
    ShoulderRight,
    SpineBase,
    SpineShoulder,
    HipLeft,
    HipRight,
    KneeLeft,
    KneeRight,
    AnkleLeft,
    AnkleRight,
}

impl Joint {
    /// All sampled joints, in frame storage order
    pub const ALL: [Joint; NUM_SAMPLED_JOINTS] = [
        Joint::HandLeft,
        Joint::HandRight,
        Joint::ElbowLeft,
        Joint::ElbowRight,
        Joint::ShoulderLeft,
        Joint::ShoulderRight,
        Joint::SpineBase,
        Joint::SpineShoulder,
        Joint::HipLeft,
        Joint::HipRight,
        Joint::KneeLeft,
        Joint::KneeRight,
        Joint::AnkleLeft,
        Joint::AnkleRight,
    ];

    /// Slot of this joint inside a [`JointFrame`]
    #[must_use]
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Index of this joint in the Kinect v2 `JointType` enumeration
    #[must_use]
    pub const fn kinect_index(self) -> usize {
        match self {
            Joint::SpineBase => 0,
            Joint::ShoulderLeft => 4,
            Joint::ElbowLeft => 5,
            Joint::HandLeft => 7,
            Joint::ShoulderRight => 8,
            Joint::ElbowRight => 9,
            Joint::HandRight => 11,
            Joint::HipLeft => 12,
            Joint::KneeLeft => 13,
            Joint::AnkleLeft => 14,
            Joint::HipRight => 16,
            Joint::KneeRight => 17,
            Joint::AnkleRight => 18,
            Joint::SpineShoulder => 20,
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Sensor-assigned id of a tracked body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Sentinel reported when nobody is in front of the sensor
    pub const NONE: UserId = UserId(NO_USER_ID);

    /// Whether this id denotes an actual user
    #[must_use]
    pub const fn is_tracked(self) -> bool {
        self.0 != NO_USER_ID
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interface to the body-tracking sensor
pub trait SkeletonSource {
    /// Id of the primary user, or [`UserId::NONE`]
    fn primary_user_id(&self) -> UserId;

    /// Whether the sensor currently tracks the joint at `index`
    fn is_joint_tracked(&self, user: UserId, index: usize) -> bool;

    /// World position of the joint at `index`
    fn joint_position(&self, user: UserId, index: usize) -> Vector3<f32>;

    /// Whether `user` is currently in front of the sensor.
    ///
    /// Defaults to `user` being the primary user.
    fn is_user_tracked(&self, user: UserId) -> bool {
        user.is_tracked() && user == self.primary_user_id()
    }

    /// Sensor index for a joint; defaults to the Kinect v2 numbering
    fn joint_index(&self, joint: Joint) -> usize {
        joint.kinect_index()
    }
}

/// Joint positions captured for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct JointFrame {
    positions: [Vector3<f32>; NUM_SAMPLED_JOINTS],
    tracked: [bool; NUM_SAMPLED_JOINTS],
}

impl JointFrame {
    /// Frame with every joint at the origin and marked tracked
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: [Vector3::zeros(); NUM_SAMPLED_JOINTS],
            tracked: [true; NUM_SAMPLED_JOINTS],
        }
    }

    /// Build a frame from `(joint, position)` pairs; joints not listed stay at the origin
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = (Joint, Vector3<f32>)>,
    {
        let mut frame = Self::new();
        for (joint, position) in positions {
            frame.set(joint, position);
        }
        frame
    }

    /// Position of `joint`
    #[must_use]
    pub fn position(&self, joint: Joint) -> Vector3<f32> {
        self.positions[joint.slot()]
    }

    /// Whether the sensor reported `joint` as tracked.
    ///
    /// Pose tests use positions as given; this flag only decides whether a
    /// frame counts as a present user.
    #[must_use]
    pub fn is_tracked(&self, joint: Joint) -> bool {
        self.tracked[joint.slot()]
    }

    /// Overwrite the position of `joint`
    pub fn set(&mut self, joint: Joint, position: Vector3<f32>) {
        self.positions[joint.slot()] = position;
    }

    /// Mark `joint` tracked or untracked
    pub fn set_tracked(&mut self, joint: Joint, tracked: bool) {
        self.tracked[joint.slot()] = tracked;
    }

    /// Offset `joint - origin`
    #[must_use]
    pub fn offset(&self, joint: Joint, origin: Joint) -> Vector3<f32> {
        self.position(joint) - self.position(origin)
    }
}

impl Default for JointFrame {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls the sampled joint set from a [`SkeletonSource`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JointSampler;

impl JointSampler {
    /// Read all sampled joints for `user`.
    ///
    /// Returns `None` without reading any joint when the source does not track
    /// `user`, and `None` when every joint came back untracked.
    pub fn sample<S>(source: &S, user: UserId) -> Option<JointFrame>
    where
        S: SkeletonSource + ?Sized,
    {
        if !user.is_tracked() || !source.is_user_tracked(user) {
            return None;
        }

        let mut frame = JointFrame::new();
        for joint in Joint::ALL {
            let index = source.joint_index(joint);
            let tracked = source.is_joint_tracked(user, index);
            if !tracked {
                trace!("Joint {} untracked for user {}", joint, user);
            }
            frame.set(joint, source.joint_position(user, index));
            frame.set_tracked(joint, tracked);
        }

        if Joint::ALL.iter().all(|joint| !frame.is_tracked(*joint)) {
            debug!("No joint tracked for user {}", user);
            return None;
        }
        Some(frame)
    }
}
