//! Stateless placement predicates and the global neighbour-mix gate.
//!
//! Rule outcomes are verdict values, not errors: a rejected candidate is a
//! normal, expected result. [`validate_placement`] checks one candidate against
//! the towers accepted so far; [`validate_neighbour_mix`] checks the finished
//! set once generation halts.
use std::fmt;

use crate::layout::{Tower, TowerKind};
use crate::site::SiteConfig;

/// Verdict for a single candidate placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementVerdict {
    Valid,
    /// The candidate's bounding box leaves the setback interior.
    BoundaryViolation,
    /// The candidate intersects the reserved plaza.
    PlazaOverlap,
    /// The candidate is under the minimum separation from an accepted tower.
    TooClose {
        /// Measured edge-to-edge distance to the first offending tower.
        distance: f32,
    },
}

impl PlacementVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, PlacementVerdict::Valid)
    }
}

impl fmt::Display for PlacementVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementVerdict::Valid => write!(f, "Valid"),
            PlacementVerdict::BoundaryViolation => write!(f, "Boundary Violation"),
            PlacementVerdict::PlazaOverlap => write!(f, "Plaza Overlap"),
            PlacementVerdict::TooClose { distance } => {
                write!(f, "Too Close to Building ({distance:.2}m)")
            }
        }
    }
}

/// Verdict of the whole-layout neighbour-mix rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixVerdict {
    Valid,
    /// No Type-A tower present; the rule holds vacuously.
    NoTowerA,
    /// Some Type-A tower has no Type-B neighbour within the mix distance.
    Violation,
}

impl MixVerdict {
    pub fn is_valid(&self) -> bool {
        !matches!(self, MixVerdict::Violation)
    }
}

impl fmt::Display for MixVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixVerdict::Valid => write!(f, "Valid"),
            MixVerdict::NoTowerA => write!(f, "No Tower A present"),
            MixVerdict::Violation => write!(f, "Neighbour-Mix Violation"),
        }
    }
}

/// Validates one candidate against the site rules and the towers accepted so far.
///
/// Checks run in order: containment within the setback interior, plaza
/// exclusion, then pairwise separation against `placed` in acceptance order;
/// the first violation wins. A candidate is only ever checked against towers
/// accepted before it. Acceptance is final, so the pairwise check is
/// asymmetric; validity always means valid against the accepted set at the
/// time of evaluation.
pub fn validate_placement(
    candidate: &Tower,
    placed: &[Tower],
    config: &SiteConfig,
) -> PlacementVerdict {
    let rect = candidate.rect();

    if !config.interior().contains_rect(&rect) {
        return PlacementVerdict::BoundaryViolation;
    }

    if rect.intersects(&config.plaza()) {
        return PlacementVerdict::PlazaOverlap;
    }

    for other in placed {
        let distance = rect.distance(&other.rect());
        if distance < config.min_separation {
            return PlacementVerdict::TooClose { distance };
        }
    }

    PlacementVerdict::Valid
}

/// Validates the neighbour-mix rule over a finished tower set.
///
/// Every Type-A tower must have at least one Type-B tower within the mix
/// distance, edge-to-edge. With zero Type-A towers the rule holds vacuously.
/// Stateless and idempotent, so collaborators can re-derive the mix status of
/// an existing tower set without regenerating it.
pub fn validate_neighbour_mix(towers: &[Tower], config: &SiteConfig) -> MixVerdict {
    let mut saw_tower_a = false;

    for a in towers.iter().filter(|t| t.kind == TowerKind::A) {
        saw_tower_a = true;
        let has_neighbour = towers
            .iter()
            .filter(|t| t.kind == TowerKind::B)
            .any(|b| a.rect().distance(&b.rect()) <= config.mix_distance);
        if !has_neighbour {
            return MixVerdict::Violation;
        }
    }

    if saw_tower_a {
        MixVerdict::Valid
    } else {
        MixVerdict::NoTowerA
    }
}
