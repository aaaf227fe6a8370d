//! Colour gradients built from colour stops and alpha stops.
//!
//! Colour and alpha are two independent piecewise-linear curves over
//! [0, 1]. Sampling before the first stop or after the last one returns that
//! stop's value.
//!
//! ```yaml
//! gradient:
//!   colours:
//!     - { at: 0.0, colour: "#FF0000" }
//!     - { at: 1.0, colour: blue }
//!   alphas:
//!     - { at: 0.0, alpha: 1.0 }
//!     - { at: 1.0, alpha: 0.25 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{TexError, Result};

use super::Colour;

/// A colour anchor. The stop colour's own alpha channel is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColourStop {
    pub at: f32,
    pub colour: Colour,
}

/// An alpha anchor, alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaStop {
    pub at: f32,
    pub alpha: f32,
}

/// A gradient with at least one colour stop and one alpha stop, both sorted
/// by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GradientDef", into = "GradientDef")]
pub struct Gradient {
    colours: Vec<ColourStop>,
    alphas: Vec<AlphaStop>,
}

#[derive(Serialize, Deserialize)]
struct GradientDef {
    colours: Vec<ColourStop>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    alphas: Vec<AlphaStop>,
}

impl TryFrom<GradientDef> for Gradient {
    type Error = TexError;

    fn try_from(def: GradientDef) -> Result<Self> {
        Gradient::new(def.colours, def.alphas)
    }
}

impl From<Gradient> for GradientDef {
    fn from(gradient: Gradient) -> Self {
        GradientDef {
            colours: gradient.colours,
            alphas: gradient.alphas,
        }
    }
}

impl Gradient {
    /// Build a gradient from stop lists.
    ///
    /// Positions are clamped to [0, 1] and stops are sorted (stable, so
    /// stops sharing a position keep their order). An empty alpha list means
    /// fully opaque.
    pub fn new(mut colours: Vec<ColourStop>, mut alphas: Vec<AlphaStop>) -> Result<Self> {
        if colours.is_empty() {
            return Err(TexError::InvalidArgument {
                message: "Gradient needs at least one colour stop".to_string(),
                help: Some("Add a `colours` list with entries like { at: 0.0, colour: red }".to_string()),
            });
        }
        if colours.iter().any(|s| !s.at.is_finite())
            || alphas.iter().any(|s| !s.at.is_finite() || !s.alpha.is_finite())
        {
            return Err(TexError::invalid("Gradient stop values must be finite numbers"));
        }

        for stop in &mut colours {
            stop.at = stop.at.clamp(0.0, 1.0);
        }
        for stop in &mut alphas {
            stop.at = stop.at.clamp(0.0, 1.0);
            stop.alpha = stop.alpha.clamp(0.0, 1.0);
        }
        colours.sort_by(|a, b| a.at.total_cmp(&b.at));
        alphas.sort_by(|a, b| a.at.total_cmp(&b.at));

        if alphas.is_empty() {
            alphas.push(AlphaStop { at: 0.0, alpha: 1.0 });
        }

        Ok(Self { colours, alphas })
    }

    /// A two-stop gradient from `from` at 0 to `to` at 1, alpha included.
    pub fn linear(from: Colour, to: Colour) -> Self {
        Self {
            colours: vec![
                ColourStop { at: 0.0, colour: from },
                ColourStop { at: 1.0, colour: to },
            ],
            alphas: vec![
                AlphaStop { at: 0.0, alpha: from.a as f32 / 255.0 },
                AlphaStop { at: 1.0, alpha: to.a as f32 / 255.0 },
            ],
        }
    }

    pub fn colour_stops(&self) -> &[ColourStop] {
        &self.colours
    }

    pub fn alpha_stops(&self) -> &[AlphaStop] {
        &self.alphas
    }

    /// Sample the gradient at `t`.
    ///
    /// `t` is clamped to [0, 1] regardless of the caller; NaN samples 0.
    pub fn evaluate(&self, t: f32) -> Colour {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let (i, j, f) = segment(&self.colours, |s| s.at, t);
        let colour = self.colours[i].colour.mix_rgb(self.colours[j].colour, f);

        let (i, j, f) = segment(&self.alphas, |s| s.at, t);
        let (a, b) = (self.alphas[i].alpha, self.alphas[j].alpha);
        let alpha = a + (b - a) * f;

        colour.with_alpha((alpha * 255.0).round() as u8)
    }
}

impl Default for Gradient {
    /// Opaque white to opaque white.
    fn default() -> Self {
        Self::linear(Colour::WHITE, Colour::WHITE)
    }
}

/// Sample `gradient` at `t`.
pub fn evaluate_gradient(gradient: &Gradient, t: f32) -> Colour {
    gradient.evaluate(t)
}

/// Find the two stops bracketing `t` and the blend factor between them.
fn segment<T>(stops: &[T], position: impl Fn(&T) -> f32, t: f32) -> (usize, usize, f32) {
    let last = stops.len() - 1;
    if t <= position(&stops[0]) {
        return (0, 0, 0.0);
    }
    if t >= position(&stops[last]) {
        return (last, last, 0.0);
    }

    for i in 0..last {
        let (a, b) = (position(&stops[i]), position(&stops[i + 1]));
        if t <= b {
            let span = b - a;
            let f = if span > 0.0 { (t - a) / span } else { 1.0 };
            return (i, i + 1, f);
        }
    }

    (last, last, 0.0)
}
