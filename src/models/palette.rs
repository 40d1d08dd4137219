//! Chart colors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::ChartError;

/// Named colors available to chart bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartColor {
    Red,
    Orange,
    Yellow,
    #[default]
    Green,
    Blue,
    Purple,
    Grey,
}

impl ChartColor {
    pub const ALL: [ChartColor; 7] = [
        ChartColor::Red,
        ChartColor::Orange,
        ChartColor::Yellow,
        ChartColor::Green,
        ChartColor::Blue,
        ChartColor::Purple,
        ChartColor::Grey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChartColor::Red => "red",
            ChartColor::Orange => "orange",
            ChartColor::Yellow => "yellow",
            ChartColor::Green => "green",
            ChartColor::Blue => "blue",
            ChartColor::Purple => "purple",
            ChartColor::Grey => "grey",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ChartColor::Red => (255, 99, 132),
            ChartColor::Orange => (255, 159, 64),
            ChartColor::Yellow => (255, 205, 86),
            ChartColor::Green => (75, 192, 192),
            ChartColor::Blue => (54, 162, 235),
            ChartColor::Purple => (153, 102, 255),
            ChartColor::Grey => (201, 203, 207),
        }
    }

    /// The solid color, used for borders
    pub fn solid(&self) -> CssColor {
        let (r, g, b) = self.rgb();
        CssColor { r, g, b, alpha: None }
    }

    /// The color blended at `alpha`, used for fills
    pub fn with_alpha(&self, alpha: f64) -> CssColor {
        CssColor {
            alpha: Some(alpha.clamp(0.0, 1.0)),
            ..self.solid()
        }
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartColor {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "gray" {
            return Ok(ChartColor::Grey);
        }
        ChartColor::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ChartError::UnknownColor(s.to_string()))
    }
}

/// A CSS `rgb(...)` / `rgba(...)` color value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Option<f64>,
}

impl CssColor {
    /// Opacity in 0..=1, 1 when the color carries no alpha
    pub fn opacity(&self) -> f64 {
        self.alpha.unwrap_or(1.0)
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha {
            Some(a) => write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, a),
            None => write!(f, "rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }
}

impl FromStr for CssColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (body, with_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(format!("Unsupported color '{}', expected rgb(...) or rgba(...)", s));
        };
        let body = body
            .strip_suffix(')')
            .ok_or_else(|| format!("Unterminated color '{}'", s))?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(format!("Color '{}' needs {} components", s, expected));
        }

        let channel = |p: &str| {
            p.parse::<u8>()
                .map_err(|_| format!("Invalid color channel '{}' in '{}'", p, s))
        };
        let alpha = if with_alpha {
            let a = parts[3]
                .parse::<f64>()
                .map_err(|_| format!("Invalid alpha '{}' in '{}'", parts[3], s))?;
            Some(a.clamp(0.0, 1.0))
        } else {
            None
        };

        Ok(CssColor {
            r: channel(parts[0])?,
            g: channel(parts[1])?,
            b: channel(parts[2])?,
            alpha,
        })
    }
}

impl Serialize for CssColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CssColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
