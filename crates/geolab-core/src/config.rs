//! Lab start-up configuration.
//!
//! [`LabConfig`] carries the page settings and the initial state of every
//! parameter control. It is built once when the application starts and
//! handed to the UI by value.

use crate::transform::{ReflectionAxis, TransformKind};
use serde::{Deserialize, Serialize};

/// Page layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    #[default]
    Wide,
    Centered,
}

/// Range, initial value and step of a numeric control.
///
/// `min`/`max` are `None` for free number inputs such as a rotation center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    pub default: f64,
    pub step: f64,
}

impl ParameterRange {
    /// A slider bounded on both sides.
    pub const fn slider(min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            default,
            step,
        }
    }

    /// An unbounded number input.
    pub const fn unbounded(default: f64, step: f64) -> Self {
        Self {
            min: None,
            max: None,
            default,
            step,
        }
    }

    /// Clamp a control value into this range.
    pub fn clamp(&self, value: f64) -> f64 {
        let value = self.min.map_or(value, |min| value.max(min));
        self.max.map_or(value, |max| value.min(max))
    }
}

/// Controls for a translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranslationControls {
    pub tx: ParameterRange,
    pub ty: ParameterRange,
}

impl Default for TranslationControls {
    fn default() -> Self {
        Self {
            tx: ParameterRange::slider(-5.0, 5.0, 2.0, 0.1),
            ty: ParameterRange::slider(-5.0, 5.0, 1.0, 0.1),
        }
    }
}

/// Controls for a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationControls {
    pub angle: ParameterRange,
    pub cx: ParameterRange,
    pub cy: ParameterRange,
}

impl Default for RotationControls {
    fn default() -> Self {
        Self {
            angle: ParameterRange::slider(-360.0, 360.0, 90.0, 5.0),
            cx: ParameterRange::unbounded(0.0, 1.0),
            cy: ParameterRange::unbounded(0.0, 1.0),
        }
    }
}

/// Controls for a dilation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DilationControls {
    pub k: ParameterRange,
    pub cx: ParameterRange,
    pub cy: ParameterRange,
}

impl Default for DilationControls {
    fn default() -> Self {
        Self {
            k: ParameterRange::slider(0.1, 5.0, 2.0, 0.1),
            cx: ParameterRange::unbounded(0.0, 1.0),
            cy: ParameterRange::unbounded(0.0, 1.0),
        }
    }
}

/// Controls for a reflection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReflectionControls {
    pub axis: ReflectionAxis,
}

/// Start-up configuration for the lab page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub page_title: String,
    pub layout: PageLayout,
    /// Point list shown in the text area on first load.
    pub default_points: String,
    /// Transformation selected on first load.
    pub default_kind: TransformKind,
    pub translation: TranslationControls,
    pub rotation: RotationControls,
    pub dilation: DilationControls,
    pub reflection: ReflectionControls,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            page_title: "Virtual Lab Transformasi Geometri".to_string(),
            layout: PageLayout::Wide,
            default_points: "1,2; 3,4; 5,1".to_string(),
            default_kind: TransformKind::Translation,
            translation: TranslationControls::default(),
            rotation: RotationControls::default(),
            dilation: DilationControls::default(),
            reflection: ReflectionControls::default(),
        }
    }
}

impl LabConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
