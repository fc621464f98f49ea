//! Tower layout model: tower kinds, placed towers, and generated layouts.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec2;

use crate::geometry::Rect;

pub mod generator;
pub mod rules;
pub mod summary;

/// The two fixed tower types.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TowerKind {
    A,
    B,
}

impl std::fmt::Display for TowerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TowerKind::A => write!(f, "A"),
            TowerKind::B => write!(f, "B"),
        }
    }
}

/// A placed tower. Immutable once accepted into a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tower {
    /// Tower type; the footprint follows from it.
    pub kind: TowerKind,
    /// Lower-left corner in site-local coordinates.
    pub origin: Vec2,
    /// Footprint size.
    pub size: Vec2,
}

impl Tower {
    pub fn new(kind: TowerKind, origin: Vec2, size: Vec2) -> Self {
        Self { kind, origin, size }
    }

    /// Bounding rectangle of the tower.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    pub fn centroid(&self) -> Vec2 {
        self.rect().centroid()
    }

    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// The plain wire record a serialization or rendering collaborator consumes.
    pub fn record(&self) -> TowerRecord {
        TowerRecord {
            kind: self.kind,
            x: self.origin.x,
            y: self.origin.y,
            w: self.size.x,
            h: self.size.y,
        }
    }
}

/// Flat record shape exposed to collaborators: `{type, x, y, w, h}` in
/// site-local units. Field names are part of the interface.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerRecord {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TowerKind,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// The ordered towers of one generation run plus the fixed plaza.
///
/// A layout is a fresh, caller-owned value per [`generator::LayoutGenerator::generate`]
/// call; the generator never retains or mutates it afterwards.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Layout {
    /// Towers in acceptance order.
    pub towers: Vec<Tower>,
    /// The reserved plaza rectangle.
    pub plaza: Rect,
}

impl Layout {
    /// Creates an empty layout around the given plaza.
    pub fn new(plaza: Rect) -> Self {
        Self {
            towers: Vec::new(),
            plaza,
        }
    }

    /// Sets the towers and returns a new instance.
    pub fn with_towers(mut self, towers: Vec<Tower>) -> Self {
        self.towers = towers;
        self
    }

    /// Number of towers of the given kind.
    pub fn count_of(&self, kind: TowerKind) -> usize {
        self.towers.iter().filter(|t| t.kind == kind).count()
    }

    /// Total footprint area of all towers.
    pub fn built_area(&self) -> f32 {
        self.towers.iter().map(Tower::area).sum()
    }

    /// Wire records for all towers, in acceptance order.
    pub fn records(&self) -> Vec<TowerRecord> {
        self.towers.iter().map(Tower::record).collect()
    }
}
