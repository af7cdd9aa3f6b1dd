//! Lane grid - fixed lane center positions.
//!
//! The road interior (world width minus padding on both sides) is split into
//! `lane_count` equal segments; each lane's center is the middle of its segment.

use arrayvec::ArrayVec;

use crate::types::MAX_LANES;

/// Ordered, immutable lane centers.
///
/// Stack-only so snapshots can copy it every frame without allocating.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneSet {
    centers: ArrayVec<f32, MAX_LANES>,
    padding: f32,
    lane_width: f32,
}

/// Compute lane centers for a road.
///
/// `lane_count` must be in `1..=MAX_LANES`; configuration validation
/// guarantees this before a session is built. Counts above the cap are
/// truncated.
///
/// # Examples
///
/// ```
/// use tui_racer_core::compute_lanes;
///
/// let lanes = compute_lanes(480.0, 40.0, 4);
/// assert_eq!(lanes.centers(), &[90.0, 190.0, 290.0, 390.0]);
/// ```
pub fn compute_lanes(road_width: f32, padding: f32, lane_count: usize) -> LaneSet {
    let count = lane_count.min(MAX_LANES);
    let lane_width = (road_width - 2.0 * padding) / count.max(1) as f32;

    let centers = (0..count)
        .map(|i| padding + lane_width / 2.0 + i as f32 * lane_width)
        .collect();

    LaneSet {
        centers,
        padding,
        lane_width,
    }
}

impl LaneSet {
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn centers(&self) -> &[f32] {
        &self.centers
    }

    pub fn center(&self, index: usize) -> Option<f32> {
        self.centers.get(index).copied()
    }

    pub fn lane_width(&self) -> f32 {
        self.lane_width
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// X coordinates of the boundaries between adjacent lanes.
    pub fn divider_xs(&self) -> impl Iterator<Item = f32> + '_ {
        (1..self.centers.len()).map(move |i| self.padding + i as f32 * self.lane_width)
    }

    pub fn last_index(&self) -> usize {
        self.centers.len().saturating_sub(1)
    }
}
