use crate::constants::{MIN_CELL_SIZE, SCATTER_LINK_DISTANCE, SCATTER_NODE_COUNT, WIREFRAME_RGB};
use crate::draw::Rgba;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown wireframe variant `{0}` (expected scatter, mesh or floating)")]
    UnknownVariant(String),
    #[error("unknown shape kind `{0}`")]
    UnknownShape(String),
    #[error("invalid colour `{0}` (expected #rrggbb or #rgb)")]
    InvalidColor(String),
    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("cell_size must be at least {min}px, got {value}")]
    CellTooSmall { value: f32, min: f32 },
    #[error("a scattered wireframe needs at least one node")]
    EmptyNodeSet,
}

/// Which wireframe strategy a canvas runs. Exactly one per canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Random nodes joined by proximity.
    #[default]
    Scatter,
    /// Regular undulating grid.
    Grid,
    /// Rotating boxes and spheres over a floor grid.
    Floating,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Scatter, Variant::Grid, Variant::Floating];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Scatter => "scatter",
            Variant::Grid => "mesh",
            Variant::Floating => "floating",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "scatter" | "nodes" => Ok(Variant::Scatter),
            "mesh" | "grid" => Ok(Variant::Grid),
            "floating" | "hero" => Ok(Variant::Floating),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatorConfig {
    pub variant: Variant,
    pub node_count: usize,
    pub link_distance: f32,
    /// Overrides the breakpoint-derived grid cell size.
    pub cell_size: Option<f32>,
    /// `None` seeds node placement from OS entropy.
    pub seed: Option<u64>,
    pub color: Rgba,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            node_count: SCATTER_NODE_COUNT,
            link_distance: SCATTER_LINK_DISTANCE,
            cell_size: None,
            seed: None,
            color: Rgba::rgb(WIREFRAME_RGB),
        }
    }
}

impl AnimatorConfig {
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_count == 0 {
            return Err(ConfigError::EmptyNodeSet);
        }
        positive("link_distance", self.link_distance)?;
        if let Some(cell) = self.cell_size {
            if positive("cell_size", cell)? < MIN_CELL_SIZE {
                return Err(ConfigError::CellTooSmall {
                    value: cell,
                    min: MIN_CELL_SIZE,
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
