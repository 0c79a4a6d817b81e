//! Helper functions and utilities for tests

#![allow(dead_code)]

use body_gesture_recognition::{
    replay::RecordedFrame,
    skeleton::{Joint, SkeletonSource, UserId},
};
use nalgebra::Vector3;
use std::cell::Cell;

/// User id used by every helper frame
pub const TEST_USER: UserId = UserId(1);

/// Builds skeleton frames for a user standing two metres from the sensor
#[derive(Debug, Clone)]
pub struct SkeletonBuilder {
    frame: RecordedFrame,
}

impl SkeletonBuilder {
    /// Torso and legs in place, both arms hanging at rest
    pub fn standing() -> Self {
        let mut builder = Self {
            frame: RecordedFrame { user_id: TEST_USER, ..RecordedFrame::default() },
        };
        builder
            .joint(Joint::ShoulderRight, 0.2, 0.5, 2.0)
            .joint(Joint::ShoulderLeft, -0.2, 0.5, 2.0)
            .joint(Joint::SpineShoulder, 0.0, 0.55, 2.0)
            .joint(Joint::SpineBase, 0.0, 0.0, 2.0)
            .joint(Joint::HipRight, 0.1, 0.0, 2.0)
            .joint(Joint::HipLeft, -0.1, 0.0, 2.0)
            .joint(Joint::KneeRight, 0.1, -0.5, 2.0)
            .joint(Joint::KneeLeft, -0.1, -0.5, 2.0)
            .joint(Joint::AnkleRight, 0.1, -0.9, 2.0)
            .joint(Joint::AnkleLeft, -0.1, -0.9, 2.0);
        builder.right_arm_rest().left_arm_rest();
        builder
    }

    pub fn joint(&mut self, joint: Joint, x: f32, y: f32, z: f32) -> &mut Self {
        self.frame.joints.insert(joint, [x, y, z]);
        self
    }

    pub fn untracked(&mut self, joint: Joint) -> &mut Self {
        self.frame.untracked.push(joint);
        self
    }

    pub fn user(&mut self, user: UserId) -> &mut Self {
        self.frame.user_id = user;
        self
    }

    pub fn right_arm_rest(&mut self) -> &mut Self {
        self.joint(Joint::ElbowRight, 0.25, 0.1, 2.0).joint(Joint::HandRight, 0.2, -0.05, 2.0)
    }

    pub fn left_arm_rest(&mut self) -> &mut Self {
        self.joint(Joint::ElbowLeft, -0.25, 0.1, 2.0).joint(Joint::HandLeft, -0.2, -0.05, 2.0)
    }

    /// Right arm stretched out sideways at shoulder height
    pub fn right_arm_out(&mut self) -> &mut Self {
        self.joint(Joint::ElbowRight, 0.4, 0.5, 2.0).joint(Joint::HandRight, 0.6, 0.5, 2.0)
    }

    /// Right hand swept across towards the body midline
    pub fn right_arm_across(&mut self) -> &mut Self {
        self.joint(Joint::ElbowRight, 0.1, 0.5, 2.0).joint(Joint::HandRight, 0.0, 0.5, 2.0)
    }

    pub fn right_arm_up(&mut self) -> &mut Self {
        self.joint(Joint::ElbowRight, 0.2, 0.8, 2.0).joint(Joint::HandRight, 0.2, 1.1, 2.0)
    }

    pub fn left_arm_up(&mut self) -> &mut Self {
        self.joint(Joint::ElbowLeft, -0.2, 0.8, 2.0).joint(Joint::HandLeft, -0.2, 1.1, 2.0)
    }

    /// Right fist pushed half a metre towards the sensor
    pub fn right_arm_punch(&mut self) -> &mut Self {
        self.joint(Joint::ElbowRight, 0.2, 0.5, 1.75).joint(Joint::HandRight, 0.2, 0.5, 1.5)
    }

    pub fn right_arm_diagonal(&mut self) -> &mut Self {
        self.joint(Joint::ElbowRight, 0.4, 0.75, 2.0).joint(Joint::HandRight, 0.6, 1.0, 2.0)
    }

    pub fn left_arm_diagonal(&mut self) -> &mut Self {
        self.joint(Joint::ElbowLeft, -0.4, 0.75, 2.0).joint(Joint::HandLeft, -0.6, 1.0, 2.0)
    }

    /// Right forearm vertical in front of the chest, left forearm level
    pub fn running_right_front(&mut self) -> &mut Self {
        self.joint(Joint::ElbowRight, 0.2, 0.2, 1.8)
            .joint(Joint::HandRight, 0.2, 0.5, 1.8)
            .joint(Joint::ElbowLeft, -0.25, 0.35, 2.0)
            .joint(Joint::HandLeft, -0.2, 0.35, 1.8)
    }

    /// Right hand resting on the right shoulder
    pub fn right_hand_on_shoulder(&mut self) -> &mut Self {
        self.joint(Joint::ElbowRight, 0.3, 0.2, 2.0).joint(Joint::HandRight, 0.22, 0.52, 2.03)
    }

    pub fn build(&self) -> RecordedFrame {
        self.frame.clone()
    }
}

pub fn rest() -> RecordedFrame {
    SkeletonBuilder::standing().build()
}

pub fn swipe_right() -> RecordedFrame {
    SkeletonBuilder::standing().right_arm_out().build()
}

pub fn swipe_left() -> RecordedFrame {
    SkeletonBuilder::standing().right_arm_across().build()
}

pub fn both_arms_up() -> RecordedFrame {
    SkeletonBuilder::standing().right_arm_up().left_arm_up().build()
}

pub fn punch() -> RecordedFrame {
    SkeletonBuilder::standing().right_arm_punch().build()
}

pub fn praise_the_sun() -> RecordedFrame {
    SkeletonBuilder::standing().right_arm_diagonal().left_arm_diagonal().build()
}

/// Frame reporting the no-user sentinel
pub fn nobody() -> RecordedFrame {
    RecordedFrame::default()
}

/// Source that counts every joint read
pub struct CountingSource {
    pub inner: RecordedFrame,
    pub reads: Cell<usize>,
}

impl CountingSource {
    pub fn new(inner: RecordedFrame) -> Self {
        Self { inner, reads: Cell::new(0) }
    }
}

impl SkeletonSource for CountingSource {
    fn primary_user_id(&self) -> UserId {
        self.inner.primary_user_id()
    }

    fn is_joint_tracked(&self, user: UserId, index: usize) -> bool {
        self.reads.set(self.reads.get() + 1);
        self.inner.is_joint_tracked(user, index)
    }

    fn joint_position(&self, user: UserId, index: usize) -> Vector3<f32> {
        self.reads.set(self.reads.get() + 1);
        self.inner.joint_position(user, index)
    }
}
