//! Layout summaries re-derived from a finished layout.
//!
//! A summary is what a presentation collaborator consumes: per-kind counts,
//! total built area, and a per-rule status block. Every flag is recomputed from
//! the towers rather than trusted from the generation run.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::rules::validate_neighbour_mix;
use crate::layout::{Layout, TowerKind};
use crate::site::SiteConfig;

/// Status of each placement rule for a given layout.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleStatus {
    /// Every tower lies within the site rectangle.
    pub site_boundary: bool,
    /// Every tower lies within the setback interior.
    pub boundary_setback: bool,
    /// All tower pairs respect the minimum separation.
    pub min_distance: bool,
    /// No tower intersects the plaza.
    pub plaza_clear: bool,
    /// The neighbour-mix rule holds.
    pub neighbour_mix: bool,
}

impl RuleStatus {
    pub fn all_satisfied(&self) -> bool {
        self.site_boundary
            && self.boundary_setback
            && self.min_distance
            && self.plaza_clear
            && self.neighbour_mix
    }
}

/// Aggregate view of a layout for presentation layers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct LayoutSummary {
    /// Number of Type-A towers.
    pub towers_a: usize,
    /// Number of Type-B towers.
    pub towers_b: usize,
    /// Total footprint area of all towers.
    pub built_area: f32,
    /// Recomputed rule status.
    pub rules: RuleStatus,
}

impl LayoutSummary {
    /// Builds a summary by re-checking every rule against the layout.
    pub fn from_layout(layout: &Layout, config: &SiteConfig) -> Self {
        let bounds = config.bounds();
        let interior = config.interior();
        let plaza = config.plaza();
        let towers = &layout.towers;

        let site_boundary = towers.iter().all(|t| bounds.contains_rect(&t.rect()));
        let boundary_setback = towers.iter().all(|t| interior.contains_rect(&t.rect()));
        let plaza_clear = towers.iter().all(|t| !t.rect().intersects(&plaza));
        let min_distance = towers.iter().enumerate().all(|(i, a)| {
            towers[i + 1..]
                .iter()
                .all(|b| a.rect().distance(&b.rect()) >= config.min_separation)
        });
        let neighbour_mix = validate_neighbour_mix(towers, config).is_valid();

        Self {
            towers_a: layout.count_of(TowerKind::A),
            towers_b: layout.count_of(TowerKind::B),
            built_area: layout.built_area(),
            rules: RuleStatus {
                site_boundary,
                boundary_setback,
                min_distance,
                plaza_clear,
                neighbour_mix,
            },
        }
    }
}
