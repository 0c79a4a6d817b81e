//! Constants used throughout the recognizer

/// Number of joints sampled per tick
pub const NUM_SAMPLED_JOINTS: usize = 14;

/// Raw sensor id meaning "no primary user"
pub const NO_USER_ID: u64 = 0;

/// Default bound on the number of symbol pairs kept in history
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Default replay rate
pub const DEFAULT_REPLAY_FPS: u32 = 30;

/// Name reported when no gesture was recognized in a tick
pub const NO_GESTURE_NAME: &str = "none";

/// Hand-to-shoulder lateral offset for a sideways swipe (metres)
pub const SWIPE_RIGHT_MIN_OFFSET: f32 = 0.25;
pub const SWIPE_LEFT_MIN_OFFSET: f32 = 0.10;
/// Allowed height/depth drift while swiping sideways
pub const SWIPE_PLANE_TOLERANCE: f32 = 0.15;

/// Hand raised above the shoulder
pub const RAISE_MAX_LATERAL: f32 = 0.20;
pub const RAISE_MIN_HEIGHT: f32 = 0.5;

/// Forward punch
pub const PUNCH_MAX_LATERAL: f32 = 0.05;
pub const PUNCH_MAX_VERTICAL: f32 = 0.2;
pub const PUNCH_MIN_DEPTH: f32 = 0.4;

/// Hand resting next to the hip
pub const REST_MAX_LATERAL: f32 = 0.2;
pub const REST_MAX_VERTICAL: f32 = 0.3;
pub const REST_MAX_DEPTH: f32 = 0.3;

/// Arm raised diagonally outwards
pub const DIAGONAL_MIN_LATERAL: f32 = 0.3;
pub const DIAGONAL_MIN_HEIGHT: f32 = 0.2;
pub const DIAGONAL_MAX_DEPTH: f32 = 0.15;

/// Running arm: forearm vertical on one side, level on the other
pub const RUN_MAX_FOREARM_LATERAL: f32 = 0.15;
pub const RUN_MIN_FOREARM_RISE: f32 = 0.2;
pub const RUN_MAX_LEVEL_RISE: f32 = 0.1;

/// Hand touching the shoulder
pub const SHOULDER_TOUCH_TOLERANCE: f32 = 0.07;
