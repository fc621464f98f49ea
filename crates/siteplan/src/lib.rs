#![forbid(unsafe_code)]
//! siteplan: rule-based generation of rectangular tower layouts on a bounded site.
//!
//! Modules:
//! - geometry: axis-aligned rectangle primitives (overlap test, edge-to-edge distance)
//! - site: site geometry and rule thresholds
//! - sampling: origin sampling strategies for candidate towers
//! - layout: towers, placement rules, the generator, and layout summaries
//!
//! Generation is a rejection-sampling search: candidates are proposed inside the
//! setback interior, checked against the placement rules, and either accepted or
//! discarded until the target count is reached or the failure budget runs out.
pub mod error;
pub mod geometry;
pub mod layout;
pub mod sampling;
pub mod site;

/// Convenient re-exports for common types. Import with `use siteplan::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Rect;
    pub use crate::layout::generator::{GenerateOptions, GenerateResult, LayoutGenerator};
    pub use crate::layout::rules::{
        validate_neighbour_mix, validate_placement, MixVerdict, PlacementVerdict,
    };
    pub use crate::layout::summary::{LayoutSummary, RuleStatus};
    pub use crate::layout::{Layout, Tower, TowerKind, TowerRecord};
    pub use crate::sampling::{OriginSampling, UniformOriginSampling};
    pub use crate::site::SiteConfig;
}
