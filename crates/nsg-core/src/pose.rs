//! Pose and trajectory types for motion-intent description

use crate::error::{NsgError, NsgResult};
use serde::{Deserialize, Serialize};

/// A point in the 6-DOF configuration space plus hand state and timing.
///
/// Positions are in arbitrary spatial units, orientations in radians.
/// `relative_time_ms` is the offset of this pose from the start of the
/// intended action; the end pose's value is the action's total duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position along x
    pub x: f32,
    /// Position along y
    pub y: f32,
    /// Position along z
    pub z: f32,
    /// Orientation pitch in radians
    pub pitch: f32,
    /// Orientation yaw in radians
    pub yaw: f32,
    /// Orientation roll in radians
    pub roll: f32,
    /// Whether the fingers are extended
    pub fingers_extended: bool,
    /// Time offset from action start in milliseconds
    pub relative_time_ms: u32,
}

impl Pose {
    /// Pose at the spatial origin with neutral orientation at time zero
    pub fn origin() -> Self {
        Pose {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            fingers_extended: false,
            relative_time_ms: 0,
        }
    }

    /// Position components as an array, in channel order
    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Orientation components as an array, in channel order
    pub fn orientation(&self) -> [f32; 3] {
        [self.pitch, self.yaw, self.roll]
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::origin()
    }
}

/// A motion intent defined by exactly two poses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Pose at the start of the action
    pub start: Pose,
    /// Pose at the end of the action
    pub end: Pose,
}

impl Trajectory {
    /// Create a trajectory, rejecting an end time before the start time
    pub fn new(start: Pose, end: Pose) -> NsgResult<Self> {
        if end.relative_time_ms < start.relative_time_ms {
            return Err(NsgError::InvalidTrajectory {
                start_ms: start.relative_time_ms,
                end_ms: end.relative_time_ms,
            });
        }
        Ok(Trajectory { start, end })
    }

    /// Re-check the time ordering invariant.
    ///
    /// Fields are public, so generators validate again before any work.
    pub fn validate(&self) -> NsgResult<()> {
        if self.end.relative_time_ms < self.start.relative_time_ms {
            return Err(NsgError::InvalidTrajectory {
                start_ms: self.start.relative_time_ms,
                end_ms: self.end.relative_time_ms,
            });
        }
        Ok(())
    }

    /// Total duration of the action in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.end.relative_time_ms - self.start.relative_time_ms
    }

    /// Whether this trajectory degenerates to a single sample
    pub fn is_degenerate(&self) -> bool {
        self.duration_ms() == 0
    }

    /// Number of discrete time steps for the given sample period,
    /// including the initial sample
    pub fn step_count(&self, sample_period_ms: u32) -> usize {
        (self.duration_ms() / sample_period_ms) as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_pose() -> Pose {
        Pose {
            x: 10.0,
            y: 20.0,
            z: 30.0,
            pitch: std::f32::consts::FRAC_PI_2,
            yaw: std::f32::consts::FRAC_PI_4,
            roll: 0.0,
            fingers_extended: true,
            relative_time_ms: 10,
        }
    }

    #[test]
    fn test_trajectory_duration() {
        let trajectory = Trajectory::new(Pose::origin(), end_pose()).unwrap();
        assert_eq!(trajectory.duration_ms(), 10);
        assert!(!trajectory.is_degenerate());
    }

    #[test]
    fn test_step_count() {
        let trajectory = Trajectory::new(Pose::origin(), end_pose()).unwrap();
        assert_eq!(trajectory.step_count(1), 11);
        assert_eq!(trajectory.step_count(2), 6);
        assert_eq!(trajectory.step_count(3), 4);
        assert_eq!(trajectory.step_count(20), 1);
    }

    #[test]
    fn test_degenerate_trajectory() {
        let trajectory = Trajectory::new(Pose::origin(), Pose::origin()).unwrap();
        assert!(trajectory.is_degenerate());
        assert_eq!(trajectory.step_count(1), 1);
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut start = Pose::origin();
        start.relative_time_ms = 5;
        let result = Trajectory::new(start, Pose::origin());
        assert_eq!(
            result,
            Err(NsgError::InvalidTrajectory {
                start_ms: 5,
                end_ms: 0
            })
        );
    }
}
