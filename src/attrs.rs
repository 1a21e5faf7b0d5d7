// Parsing of mount arguments and `data-*` attributes into core configs.
// Kept free of web-sys so host tests can include it directly.

use crate::constants::DEFAULT_ICON_SIZE_PX;
use wireframe_core::constants::{ICON_RGB, ICON_ROTATION_SPEED};
use wireframe_core::icon::icon_size;
use wireframe_core::{AnimatorConfig, ConfigError, Rgba, ShapeKind, Variant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconSettings {
    pub kind: ShapeKind,
    pub size: f32,
    pub color: Rgba,
    pub speed: f32,
}

/// Seeds are decimal integers; anything else means "seed from entropy".
pub fn parse_seed(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}

fn parse_number(field: &'static str, raw: &str) -> Result<f32, ConfigError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| ConfigError::NonFinite {
            field,
            value: f32::NAN,
        })
}

pub fn wireframe_config(
    variant: &str,
    seed: Option<&str>,
    cell_size: Option<&str>,
) -> Result<AnimatorConfig, ConfigError> {
    let mut config = AnimatorConfig::with_variant(variant.parse::<Variant>()?);
    config.seed = parse_seed(seed);
    if let Some(raw) = cell_size {
        config.cell_size = Some(parse_number("cell_size", raw)?);
    }
    config.validate()?;
    Ok(config)
}

pub fn icon_settings(
    kind: &str,
    size: Option<&str>,
    color: Option<&str>,
    speed: Option<&str>,
) -> Result<IconSettings, ConfigError> {
    let kind = kind.parse::<ShapeKind>()?;
    let size = match size {
        Some(raw) => icon_size(parse_number("icon_size", raw)?)?,
        None => DEFAULT_ICON_SIZE_PX,
    };
    let color = match color {
        Some(raw) => Rgba::parse_hex(raw)?,
        None => Rgba::rgb(ICON_RGB),
    };
    let speed = match speed {
        Some(raw) => parse_number("rotation_speed", raw)?,
        None => ICON_ROTATION_SPEED,
    };
    Ok(IconSettings {
        kind,
        size,
        color,
        speed,
    })
}
