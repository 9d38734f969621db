use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::StepKind;
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, LineStyle};

pub const STEP_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Serializable styling of a step series.
///
/// A missing `line_style` key means the default line style; an explicit
/// `null` disables the stroke. `fill_color` defaults to no fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    #[serde(default)]
    pub step_kind: StepKind,
    #[serde(default = "default_line_style")]
    pub line_style: Option<LineStyle>,
    #[serde(default)]
    pub fill_color: Option<Color>,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            step_kind: StepKind::default(),
            line_style: default_line_style(),
            fill_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: StepConfig,
}

impl StepConfig {
    pub fn validate(&self) -> PlotResult<()> {
        if let Some(style) = &self.line_style {
            style.validate()?;
        }
        if let Some(color) = self.fill_color {
            color.validate()?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize step config: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = StepConfigJsonContractV1 {
            schema_version: STEP_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize step config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a versioned contract payload, then validates it.
    ///
    /// Input carrying a `schema_version` key is read as a contract payload.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse step config json: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: StepConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    PlotError::InvalidData(format!(
                        "failed to parse step config contract v1: {e}"
                    ))
                })?;
            if payload.schema_version != STEP_CONFIG_JSON_SCHEMA_V1 {
                warn!(
                    schema_version = payload.schema_version,
                    "rejecting step config payload"
                );
                return Err(PlotError::InvalidData(format!(
                    "unsupported step config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidData(format!("failed to parse step config json: {e}"))
            })?
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_line_style() -> Option<LineStyle> {
    Some(LineStyle::default())
}
