//! Recorded skeleton streams.
//!
//! A recording stands in for a live body-tracking sensor: each frame lists the
//! primary user id and the world positions of the joints that were seen.
//!
//! ```yaml
//! frames:
//!   - user_id: 1
//!     joints:
//!       HandRight: [0.6, 0.5, 2.0]
//!       ShoulderRight: [0.2, 0.5, 2.0]
//!     untracked: [KneeLeft]
//!   - user_id: 0
//! ```

use crate::{
    skeleton::{Joint, SkeletonSource, UserId},
    Error, Result,
};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One recorded sensor frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordedFrame {
    /// Primary user id, `0` when nobody was tracked
    pub user_id: UserId,

    /// Joint world positions
    pub joints: HashMap<Joint, [f32; 3]>,

    /// Joints present in `joints` that the sensor flagged as inferred
    pub untracked: Vec<Joint>,
}

fn joint_at(index: usize) -> Option<Joint> {
    Joint::ALL.into_iter().find(|joint| joint.kinect_index() == index)
}

impl SkeletonSource for RecordedFrame {
    fn primary_user_id(&self) -> UserId {
        self.user_id
    }

    fn is_joint_tracked(&self, user: UserId, index: usize) -> bool {
        if user != self.user_id {
            return false;
        }
        joint_at(index)
            .is_some_and(|joint| self.joints.contains_key(&joint) && !self.untracked.contains(&joint))
    }

    fn joint_position(&self, user: UserId, index: usize) -> Vector3<f32> {
        if user != self.user_id {
            return Vector3::zeros();
        }
        joint_at(index)
            .and_then(|joint| self.joints.get(&joint))
            .map_or_else(Vector3::zeros, |p| Vector3::new(p[0], p[1], p[2]))
    }
}

/// A sequence of recorded frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub frames: Vec<RecordedFrame>,
}

impl Recording {
    /// Load a recording from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid recording
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a recording from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid recording
    pub fn from_yaml(content: &str) -> Result<Self> {
        let recording: Self = serde_yaml::from_str(content)
            .map_err(|e| Error::RecordingError(format!("Failed to parse recording: {e}")))?;
        recording.validate()?;
        Ok(recording)
    }

    /// Serialize the recording to YAML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::RecordingError(format!("Failed to serialize recording: {e}")))
    }

    /// Check every position is finite and `untracked` only names recorded joints
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending frame
    pub fn validate(&self) -> Result<()> {
        for (i, frame) in self.frames.iter().enumerate() {
            if let Some((joint, _)) = frame.joints.iter().find(|(_, p)| p.iter().any(|v| !v.is_finite())) {
                return Err(Error::RecordingError(format!("Frame {i}: non-finite position for {joint}")));
            }
            if let Some(joint) = frame.untracked.iter().find(|joint| !frame.joints.contains_key(*joint)) {
                return Err(Error::RecordingError(format!(
                    "Frame {i}: {joint} listed as untracked but has no position"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
