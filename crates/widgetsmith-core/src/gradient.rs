//! Conversion between CSS background strings and structured gradients.
//!
//! Only the subset the background picker produces is modelled: a linear
//! gradient with an angle, or a circular radial gradient, each with a list of
//! `<color> <position>%` stops.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::GradientParseError;

/// Angle used when a linear gradient has none.
pub const DEFAULT_ANGLE: i32 = 90;

/// Color used for a stop whose color token cannot be recognised.
const FALLBACK_STOP_COLOR: &str = "#000000";

/// Gradient shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
}

/// A single color stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    /// Percentage, 0 to 100.
    pub position: f64,
}

impl GradientStop {
    pub fn new(color: impl Into<String>, position: f64) -> Self {
        Self {
            color: color.into(),
            position,
        }
    }
}

/// Structured form of a gradient background.
///
/// Always holds at least two stops. Stops are rendered in list order; keeping
/// them sorted by position is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientState {
    pub kind: GradientKind,
    /// Degrees, meaningful for linear gradients only.
    pub angle: i32,
    pub stops: Vec<GradientStop>,
}

impl Default for GradientState {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            angle: DEFAULT_ANGLE,
            stops: vec![
                GradientStop::new("#388e3c", 0.0),
                GradientStop::new("#fdd835", 100.0),
            ],
        }
    }
}

impl GradientState {
    /// Append a white stop at the end.
    pub fn add_stop(&mut self) {
        self.stops.push(GradientStop::new("#ffffff", 100.0));
    }

    /// Remove a stop. Refused when it would leave fewer than two.
    pub fn remove_stop(&mut self, index: usize) -> bool {
        if self.stops.len() <= 2 || index >= self.stops.len() {
            return false;
        }
        self.stops.remove(index);
        true
    }

    pub fn recolor_stop(&mut self, index: usize, color: impl Into<String>) -> bool {
        match self.stops.get_mut(index) {
            Some(stop) => {
                stop.color = color.into();
                true
            }
            None => false,
        }
    }

    /// Move a stop, clamped to 0..=100.
    pub fn reposition_stop(&mut self, index: usize, position: f64) -> bool {
        match self.stops.get_mut(index) {
            Some(stop) => {
                stop.position = position.clamp(0.0, 100.0);
                true
            }
            None => false,
        }
    }

    /// Set the angle, clamped to 0..=360.
    pub fn set_angle(&mut self, angle: i32) {
        self.angle = angle.clamp(0, 360);
    }

    pub fn set_kind(&mut self, kind: GradientKind) {
        self.kind = kind;
    }

    /// Whether stop positions ascend in list order.
    pub fn is_ordered(&self) -> bool {
        self.stops.windows(2).all(|w| w[0].position <= w[1].position)
    }
}

impl fmt::Display for GradientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize_gradient(self))
    }
}

/// A background field value: a solid color or a gradient.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(String),
    Gradient(GradientState),
}

impl Background {
    /// CSS text for this background.
    pub fn to_css(&self) -> String {
        match self {
            Self::Solid(color) => color.clone(),
            Self::Gradient(state) => serialize_gradient(state),
        }
    }
}

/// Interpret a background value. Never fails.
///
/// Anything without the substring `gradient` is a solid color, returned
/// verbatim. Gradients that fail to parse become [`GradientState::default`].
pub fn parse_background(value: &str) -> Background {
    if value.contains("gradient") {
        Background::Gradient(parse_gradient_state(value))
    } else {
        Background::Solid(value.to_string())
    }
}

/// Parse a gradient, falling back to the default state on any failure.
pub fn parse_gradient_state(value: &str) -> GradientState {
    parse_gradient(value).unwrap_or_else(|err| {
        debug!("gradient fallback: value={value:?} err={err}");
        GradientState::default()
    })
}

/// Parse a CSS gradient string.
pub fn parse_gradient(value: &str) -> Result<GradientState, GradientParseError> {
    if !value.contains("gradient") {
        return Err(GradientParseError::NotAGradient);
    }

    let trimmed = value.trim_start();
    let kind = if trimmed.starts_with("radial-gradient") {
        GradientKind::Radial
    } else {
        GradientKind::Linear
    };

    let open = value.find('(').ok_or(GradientParseError::MissingArguments)?;
    let close = value.rfind(')').ok_or(GradientParseError::MissingArguments)?;
    if close <= open {
        return Err(GradientParseError::MissingArguments);
    }

    let mut parts = split_top_level(&value[open + 1..close]);

    let mut angle = DEFAULT_ANGLE;
    match kind {
        GradientKind::Linear => {
            if parts.first().is_some_and(|p| p.contains("deg")) {
                angle = parse_leading_int(parts.remove(0)).unwrap_or(DEFAULT_ANGLE);
            }
        }
        GradientKind::Radial => {
            // Shape and size keywords ("circle", "ellipse at top", ...) are not modelled.
            if parts.first().is_some_and(|p| {
                let p = p.trim();
                !p.contains("rgb") && !p.starts_with('#')
            }) {
                parts.remove(0);
            }
        }
    }

    let count = parts.len();
    let stops: Vec<GradientStop> = parts
        .iter()
        .enumerate()
        .map(|(index, part)| parse_stop(part, index, count))
        .collect();

    if stops.len() < 2 {
        return Err(GradientParseError::TooFewStops { found: stops.len() });
    }

    Ok(GradientState { kind, angle, stops })
}

/// Serialize a gradient back to CSS.
pub fn serialize_gradient(state: &GradientState) -> String {
    let stops = state
        .stops
        .iter()
        .map(|s| format!("{} {}%", s.color, s.position))
        .collect::<Vec<_>>()
        .join(", ");

    match state.kind {
        GradientKind::Linear => format!("linear-gradient({}deg, {})", state.angle, stops),
        GradientKind::Radial => format!("radial-gradient(circle, {})", stops),
    }
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in args.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&args[start..]);
    parts
}

fn parse_leading_int(segment: &str) -> Option<i32> {
    let s = segment.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

fn color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"rgba?\(.*?\)|#[0-9a-fA-F]{3,8}").expect("color pattern is valid")
    })
}

fn position_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d+)?)%$").expect("position pattern is valid")
    })
}

fn parse_stop(part: &str, index: usize, count: usize) -> GradientStop {
    let part = part.trim();
    let color = color_pattern()
        .find(part)
        .map(|m| m.as_str())
        .unwrap_or(FALLBACK_STOP_COLOR);

    let position = position_pattern()
        .captures(part)
        .and_then(|c| c[1].parse::<f64>().ok())
        .unwrap_or_else(|| evenly_spaced(index, count));

    GradientStop::new(color, position)
}

fn evenly_spaced(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 / (count - 1) as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_linear() {
        let state = parse_gradient("linear-gradient(45deg, #ff0000 0%, #0000ff 100%)").unwrap();
        assert_eq!(state.kind, GradientKind::Linear);
        assert_eq!(state.angle, 45);
        assert_eq!(
            state.stops,
            vec![GradientStop::new("#ff0000", 0.0), GradientStop::new("#0000ff", 100.0)]
        );
    }

    #[test]
    fn test_parse_keeps_rgba_commas_together() {
        let state =
            parse_gradient("linear-gradient(180deg, rgba(0, 0, 0, 0.5) 10%, rgb(255,255,255) 90%)")
                .unwrap();
        assert_eq!(state.stops.len(), 2);
        assert_eq!(state.stops[0].color, "rgba(0, 0, 0, 0.5)");
        assert_eq!(state.stops[0].position, 10.0);
        assert_eq!(state.stops[1].color, "rgb(255,255,255)");
    }

    #[test]
    fn test_parse_radial_drops_shape_keyword() {
        let state = parse_gradient("radial-gradient(circle, #fff 0%, #000 100%)").unwrap();
        assert_eq!(state.kind, GradientKind::Radial);
        assert_eq!(state.angle, DEFAULT_ANGLE);
        assert_eq!(state.stops[0].color, "#fff");
    }

    #[test]
    fn test_parse_synthesizes_positions() {
        let state = parse_gradient("linear-gradient(#111, #222, #333)").unwrap();
        let positions: Vec<f64> = state.stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 50.0, 100.0]);
        assert_eq!(state.angle, DEFAULT_ANGLE);
    }

    #[test]
    fn test_malformed_angle_defaults() {
        let state = parse_gradient("linear-gradient(sharpdeg, #111 0%, #222 100%)").unwrap();
        assert_eq!(state.angle, DEFAULT_ANGLE);
    }

    #[test]
    fn test_unknown_function_defaults_to_linear() {
        let state = parse_gradient("repeating-linear-gradient(30deg, #111 0%, #222 100%)").unwrap();
        assert_eq!(state.kind, GradientKind::Linear);
        assert_eq!(state.angle, 30);
    }

    #[test]
    fn test_fallbacks() {
        for input in ["", "not-a-gradient", "linear-gradient("] {
            assert_eq!(parse_gradient_state(input), GradientState::default(), "{input:?}");
        }
        assert_eq!(parse_gradient("not-a-gradient"), Err(GradientParseError::MissingArguments));
        assert_eq!(parse_gradient("#fff"), Err(GradientParseError::NotAGradient));
        assert_eq!(
            parse_gradient("linear-gradient(90deg, #fff 0%)"),
            Err(GradientParseError::TooFewStops { found: 1 })
        );
    }

    #[test]
    fn test_background_distinguishes_solid() {
        assert_eq!(parse_background("#00a6fb"), Background::Solid("#00a6fb".into()));
        assert_eq!(parse_background(""), Background::Solid(String::new()));
        assert_eq!(
            parse_background("not-a-gradient"),
            Background::Gradient(GradientState::default())
        );
    }

    #[test]
    fn test_serialize() {
        insta::assert_snapshot!(
            serialize_gradient(&GradientState::default()),
            @"linear-gradient(90deg, #388e3c 0%, #fdd835 100%)"
        );

        let mut radial = GradientState::default();
        radial.set_kind(GradientKind::Radial);
        radial.add_stop();
        insta::assert_snapshot!(
            serialize_gradient(&radial),
            @"radial-gradient(circle, #388e3c 0%, #fdd835 100%, #ffffff 100%)"
        );
    }

    #[test]
    fn test_editor_operations() {
        let mut state = GradientState::default();
        assert!(!state.remove_stop(0));
        state.add_stop();
        assert!(state.reposition_stop(1, 150.0));
        assert_eq!(state.stops[1].position, 100.0);
        assert!(state.recolor_stop(2, "#123456"));
        assert!(state.remove_stop(0));
        assert_eq!(state.stops.len(), 2);
        state.set_angle(-10);
        assert_eq!(state.angle, 0);
        assert!(!state.recolor_stop(9, "#000"));
    }

    #[test]
    fn test_out_of_order_stops_are_kept_in_list_order() {
        let state = parse_gradient("linear-gradient(90deg, #111 80%, #222 20%)").unwrap();
        assert!(!state.is_ordered());
        assert_eq!(state.stops[0].position, 80.0);
    }

    fn editor_state() -> impl Strategy<Value = GradientState> {
        let stop = ("#[0-9a-f]{6}", 0u8..=100);
        (
            prop_oneof![Just(GradientKind::Linear), Just(GradientKind::Radial)],
            0i32..=360,
            prop::collection::vec(stop, 2..6),
        )
            .prop_map(|(kind, angle, raw)| {
                let mut raw = raw;
                raw.sort_by_key(|(_, pos)| *pos);
                GradientState {
                    kind,
                    angle,
                    stops: raw
                        .into_iter()
                        .map(|(color, pos)| GradientStop::new(color, pos as f64))
                        .collect(),
                }
            })
    }

    proptest! {
        #[test]
        fn prop_round_trip(state in editor_state()) {
            let parsed = parse_gradient(&serialize_gradient(&state)).unwrap();
            prop_assert_eq!(parsed.kind, state.kind);
            prop_assert_eq!(&parsed.stops, &state.stops);
            if state.kind == GradientKind::Linear {
                prop_assert_eq!(parsed.angle, state.angle);
            }
        }
    }
}
