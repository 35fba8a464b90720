//! Sheet configuration.
//!
//! [`RawSheetOptions`] mirrors the option object accepted by the component
//! (every key optional, camelCase). [`SheetOptions`] is the validated form
//! the controller and view work with.

use serde::Deserialize;

use super::SheetMode;
use crate::config::DEFAULT_ANIMATION_DELAY_MS;
use crate::core::error::ConfigError;

/// Unvalidated sheet options as supplied by the caller.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSheetOptions {
    /// Selects the sheet mode. Required.
    pub is_expandable: Option<bool>,
    /// Fixed pixel height in fixed-height mode ("auto" when absent).
    pub custom_height: Option<f64>,
    /// Commit delay in milliseconds (0 or absent selects the default).
    pub animation_delay: Option<u32>,
    #[serde(rename = "backdropClassName")]
    pub backdrop_class: Option<String>,
    pub backdrop_style: Option<String>,
    #[serde(rename = "containerClassName")]
    pub container_class: Option<String>,
    pub container_style: Option<String>,
}

/// Validated sheet options.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetOptions {
    pub is_expandable: bool,
    pub custom_height: Option<f64>,
    pub animation_delay_ms: u32,
    pub backdrop_class: Option<String>,
    pub backdrop_style: Option<String>,
    pub container_class: Option<String>,
    pub container_style: Option<String>,
}

impl SheetOptions {
    /// Options for a sheet of the given mode with everything else defaulted.
    pub fn new(mode: SheetMode) -> Self {
        Self {
            is_expandable: mode.is_expandable(),
            custom_height: None,
            animation_delay_ms: DEFAULT_ANIMATION_DELAY_MS,
            backdrop_class: None,
            backdrop_style: None,
            container_class: None,
            container_style: None,
        }
    }

    /// Parse and validate options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawSheetOptions = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    #[inline]
    pub fn mode(&self) -> SheetMode {
        SheetMode::from_expandable(self.is_expandable)
    }
}

impl TryFrom<RawSheetOptions> for SheetOptions {
    type Error = ConfigError;

    fn try_from(raw: RawSheetOptions) -> Result<Self, Self::Error> {
        let is_expandable = raw
            .is_expandable
            .ok_or(ConfigError::MissingField("isExpandable"))?;

        if let Some(height) = raw.custom_height
            && (!height.is_finite() || height <= 0.0)
        {
            return Err(ConfigError::InvalidHeight(height));
        }

        let animation_delay_ms = match raw.animation_delay {
            Some(delay) if delay > 0 => delay,
            _ => DEFAULT_ANIMATION_DELAY_MS,
        };

        Ok(Self {
            is_expandable,
            custom_height: raw.custom_height,
            animation_delay_ms,
            backdrop_class: raw.backdrop_class,
            backdrop_style: raw.backdrop_style,
            container_class: raw.container_class,
            container_style: raw.container_style,
        })
    }
}
