//! Student-facing text for a transformation: plot title, formula and a
//! sentence describing the chosen parameters.
//!
//! Formulas are Markdown with inline LaTeX, ready for a Markdown renderer
//! with math support.

use crate::transform::{ReflectionAxis, Transformation};
use crate::Point;

impl Transformation {
    /// Plot title, e.g. `Visualisasi Rotasi`.
    pub fn title(&self) -> String {
        format!("Visualisasi {}", self.kind().name())
    }

    /// The formula line shown under the parameter controls.
    pub fn formula(&self) -> String {
        match self {
            Transformation::Translation { .. } => {
                r"Rumus: $P'(x', y') = P(x, y) + T(T_x, T_y) \implies (x+T_x, y+T_y)$".to_string()
            }
            Transformation::Rotation { .. } => r"Rotasi $[(C_x, C_y), \theta]$".to_string(),
            Transformation::Dilation { .. } => r"Rumus: $P'(x', y') = C + k(P - C)$".to_string(),
            Transformation::Reflection { axis } => {
                format!(r"Rumus: $P'(x', y') = {}$", reflection_mapping(*axis))
            }
        }
    }

    /// A sentence describing what the current parameters do.
    pub fn description(&self) -> String {
        match *self {
            Transformation::Translation { tx, ty } => format!(
                "Titik akan digeser **{}** satuan secara horizontal dan **{}** satuan secara vertikal.",
                format_number(tx),
                format_number(ty)
            ),
            Transformation::Rotation { angle, cx, cy } => format!(
                "Titik dirotasi **{}°** berlawanan arah jarum jam (jika positif) mengelilingi pusat **({}, {})**.",
                format_number(angle),
                format_number(cx),
                format_number(cy)
            ),
            Transformation::Dilation { k, cx, cy } => format!(
                "Titik diperbesar/diperkecil dengan faktor skala **{}** dari pusat **({}, {})**.",
                format_number(k),
                format_number(cx),
                format_number(cy)
            ),
            Transformation::Reflection { axis } => {
                format!("Titik dicerminkan terhadap **{}**.", axis.label())
            }
        }
    }
}

fn reflection_mapping(axis: ReflectionAxis) -> &'static str {
    match axis {
        ReflectionAxis::XAxis => r"(x, y) \implies (x, -y)",
        ReflectionAxis::YAxis => r"(x, y) \implies (-x, y)",
        ReflectionAxis::LineYEqualsX => r"(x, y) \implies (y, x)",
        ReflectionAxis::LineYEqualsNegX => r"(x, y) \implies (-y, -x)",
    }
}

/// Format a parameter value the way Python's `repr(float)` does.
///
/// Plain notation always shows a fractional part (`2.0`, `0.5`). Values whose
/// decimal exponent is below -4 or at least 16 switch to exponent form with a
/// signed, two-digit exponent (`1e+16`, `2.5e-05`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sci = format!("{:e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Format a point for the coordinate table with one decimal place.
pub fn format_point(point: &Point) -> String {
    format!("({:.1}, {:.1})", point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        let t = Transformation::Translation { tx: 2.0, ty: 1.0 };
        assert_eq!(t.title(), "Visualisasi Translasi");

        let r = Transformation::Reflection {
            axis: ReflectionAxis::YAxis,
        };
        assert_eq!(r.title(), "Visualisasi Refleksi");
    }

    #[test]
    fn test_translation_description() {
        let t = Transformation::Translation { tx: 2.0, ty: -1.5 };
        assert_eq!(
            t.description(),
            "Titik akan digeser **2.0** satuan secara horizontal dan **-1.5** satuan secara vertikal."
        );
    }

    #[test]
    fn test_rotation_description() {
        let t = Transformation::Rotation {
            angle: 90.0,
            cx: 0.0,
            cy: 1.0,
        };
        assert_eq!(
            t.description(),
            "Titik dirotasi **90.0°** berlawanan arah jarum jam (jika positif) mengelilingi pusat **(0.0, 1.0)**."
        );
    }

    #[test]
    fn test_dilation_formula_and_description() {
        let t = Transformation::Dilation {
            k: 0.5,
            cx: 2.0,
            cy: 2.0,
        };
        assert_eq!(t.formula(), r"Rumus: $P'(x', y') = C + k(P - C)$");
        assert!(t.description().contains("faktor skala **0.5**"));
        assert!(t.description().contains("pusat **(2.0, 2.0)**"));
    }

    #[test]
    fn test_reflection_formula_per_axis() {
        let t = Transformation::Reflection {
            axis: ReflectionAxis::LineYEqualsNegX,
        };
        assert_eq!(t.formula(), r"Rumus: $P'(x', y') = (x, y) \implies (-y, -x)$");
        assert_eq!(t.description(), "Titik dicerminkan terhadap **garis y = -x**.");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2.0");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(360.0), "360.0");
        assert_eq!(format_number(12.25), "12.25");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(9_999_999_999_999_998.0), "9999999999999998.0");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1.5e16), "1.5e+16");
        assert_eq!(format_number(-2e20), "-2e+20");
        assert_eq!(format_number(1e-5), "1e-05");
        assert_eq!(format_number(2.5e-5), "2.5e-05");
        assert_eq!(format_number(1e-100), "1e-100");
        assert_eq!(format_number(1e300), "1e+300");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_description_with_large_center() {
        let t = Transformation::Dilation {
            k: 2.0,
            cx: 1e16,
            cy: 0.0,
        };
        assert!(t.description().contains("pusat **(1e+16, 0.0)**"));
    }

    #[test]
    fn test_format_point_rounds_to_one_decimal() {
        assert_eq!(format_point(&Point::new(1.0, 2.0)), "(1.0, 2.0)");
        assert_eq!(format_point(&Point::new(-1.96, 0.04)), "(-2.0, 0.0)");
    }
}
