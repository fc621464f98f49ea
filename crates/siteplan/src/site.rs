//! Site geometry and rule thresholds.
//!
//! [`SiteConfig`] carries the fixed rectangle of the site, the boundary setback,
//! the reserved central plaza, the two tower footprints, and the distance
//! thresholds the rules evaluate against. The defaults are the process-wide
//! constants below; collaborators read them, never mutate them.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::layout::TowerKind;

pub const SITE_WIDTH: f32 = 200.0;
pub const SITE_HEIGHT: f32 = 140.0;
pub const BOUNDARY_SETBACK: f32 = 10.0;
pub const MIN_TOWER_SEPARATION: f32 = 15.0;
pub const PLAZA_SIZE: f32 = 40.0;
pub const TOWER_A_SIZE: Vec2 = Vec2::new(30.0, 20.0);
pub const TOWER_B_SIZE: Vec2 = Vec2::new(20.0, 20.0);
pub const NEIGHBOUR_MIX_DISTANCE: f32 = 60.0;

/// Configuration for the site and its placement rules.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site size in site-local units, origin at (0, 0).
    pub extent: Vec2,
    /// Margin between the site boundary and any tower.
    pub setback: f32,
    /// Minimum edge-to-edge distance between any two towers.
    pub min_separation: f32,
    /// Side length of the reserved central plaza square.
    pub plaza_size: f32,
    /// Maximum edge-to-edge distance at which a Type-B tower counts as a
    /// neighbour of a Type-A tower.
    pub mix_distance: f32,
    /// Footprint of a Type-A tower.
    pub tower_a: Vec2,
    /// Footprint of a Type-B tower.
    pub tower_b: Vec2,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            extent: Vec2::new(SITE_WIDTH, SITE_HEIGHT),
            setback: BOUNDARY_SETBACK,
            min_separation: MIN_TOWER_SEPARATION,
            plaza_size: PLAZA_SIZE,
            mix_distance: NEIGHBOUR_MIX_DISTANCE,
            tower_a: TOWER_A_SIZE,
            tower_b: TOWER_B_SIZE,
        }
    }
}

impl SiteConfig {
    /// Creates a new [`SiteConfig`] with the default site constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the site extent.
    pub fn with_extent(mut self, extent: Vec2) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the boundary setback.
    pub fn with_setback(mut self, setback: f32) -> Self {
        self.setback = setback;
        self
    }

    /// Sets the minimum tower separation.
    pub fn with_min_separation(mut self, min_separation: f32) -> Self {
        self.min_separation = min_separation;
        self
    }

    /// Sets the plaza side length.
    pub fn with_plaza_size(mut self, plaza_size: f32) -> Self {
        self.plaza_size = plaza_size;
        self
    }

    /// Sets the neighbour-mix distance.
    pub fn with_mix_distance(mut self, mix_distance: f32) -> Self {
        self.mix_distance = mix_distance;
        self
    }

    /// Sets both tower footprints.
    pub fn with_tower_sizes(mut self, tower_a: Vec2, tower_b: Vec2) -> Self {
        self.tower_a = tower_a;
        self.tower_b = tower_b;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.extent.x <= 0.0 || self.extent.y <= 0.0 {
            return Err(Error::InvalidConfig(
                "site extent must be > 0 in both components".into(),
            ));
        }
        if self.setback < 0.0 {
            return Err(Error::InvalidConfig("setback must be >= 0".into()));
        }
        if 2.0 * self.setback >= self.extent.x.min(self.extent.y) {
            return Err(Error::InvalidConfig(
                "setback leaves no interior to place towers in".into(),
            ));
        }
        if self.min_separation < 0.0 {
            return Err(Error::InvalidConfig("min_separation must be >= 0".into()));
        }
        if self.mix_distance < 0.0 {
            return Err(Error::InvalidConfig("mix_distance must be >= 0".into()));
        }
        if self.plaza_size < 0.0 || self.plaza_size > self.extent.x.min(self.extent.y) {
            return Err(Error::InvalidConfig(
                "plaza must fit inside the site".into(),
            ));
        }
        if self.tower_a.x <= 0.0
            || self.tower_a.y <= 0.0
            || self.tower_b.x <= 0.0
            || self.tower_b.y <= 0.0
        {
            return Err(Error::InvalidConfig(
                "tower footprints must be > 0 in both components".into(),
            ));
        }

        Ok(())
    }

    /// The whole site rectangle, origin at (0, 0).
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Vec2::ZERO, self.extent)
    }

    /// The setback-adjusted interior every tower must lie fully within.
    pub fn interior(&self) -> Rect {
        Rect::new(
            Vec2::splat(self.setback),
            self.extent - Vec2::splat(self.setback),
        )
    }

    /// The reserved plaza square, centered in the site.
    pub fn plaza(&self) -> Rect {
        let size = Vec2::splat(self.plaza_size);
        Rect::from_origin_size((self.extent - size) * 0.5, size)
    }

    /// Footprint of the given tower kind.
    pub fn footprint(&self, kind: TowerKind) -> Vec2 {
        match kind {
            TowerKind::A => self.tower_a,
            TowerKind::B => self.tower_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_site_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.extent, Vec2::new(200.0, 140.0));
        assert_eq!(config.setback, 10.0);
        assert_eq!(config.min_separation, 15.0);
        assert_eq!(config.plaza_size, 40.0);
        assert_eq!(config.mix_distance, 60.0);
        assert_eq!(config.footprint(TowerKind::A), Vec2::new(30.0, 20.0));
        assert_eq!(config.footprint(TowerKind::B), Vec2::new(20.0, 20.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn interior_is_the_setback_adjusted_rectangle() {
        let interior = SiteConfig::default().interior();
        assert_eq!(interior.min, Vec2::new(10.0, 10.0));
        assert_eq!(interior.max, Vec2::new(190.0, 130.0));
    }

    #[test]
    fn plaza_is_centered_in_the_site() {
        let plaza = SiteConfig::default().plaza();
        assert_eq!(plaza.min, Vec2::new(80.0, 50.0));
        assert_eq!(plaza.max, Vec2::new(120.0, 90.0));
        assert_eq!(plaza.centroid(), Vec2::new(100.0, 70.0));
    }

    #[test]
    fn validate_rejects_degenerate_geometry() {
        assert!(SiteConfig::new()
            .with_extent(Vec2::new(0.0, 140.0))
            .validate()
            .is_err());
        assert!(SiteConfig::new().with_setback(-1.0).validate().is_err());
        assert!(SiteConfig::new().with_setback(70.0).validate().is_err());
        assert!(SiteConfig::new()
            .with_min_separation(-1.0)
            .validate()
            .is_err());
        assert!(SiteConfig::new().with_plaza_size(150.0).validate().is_err());
        assert!(SiteConfig::new()
            .with_tower_sizes(Vec2::new(0.0, 20.0), TOWER_B_SIZE)
            .validate()
            .is_err());
    }

    #[test]
    fn builders_override_single_fields() {
        let config = SiteConfig::new()
            .with_extent(Vec2::new(100.0, 100.0))
            .with_setback(5.0)
            .with_mix_distance(30.0);
        assert_eq!(config.extent, Vec2::new(100.0, 100.0));
        assert_eq!(config.setback, 5.0);
        assert_eq!(config.mix_distance, 30.0);
        assert_eq!(config.min_separation, MIN_TOWER_SEPARATION);
    }
}
