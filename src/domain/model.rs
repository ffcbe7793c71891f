use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::parser;
use crate::utils::error::ParseError;

/// One of the four positions in a measurement string, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Width,
    Height,
    Length,
    Mass,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    /// 1-based position of the field in the raw input.
    pub fn position(self) -> usize {
        match self {
            Field::Width => 1,
            Field::Height => 2,
            Field::Length => 3,
            Field::Mass => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated measurements of a single package.
///
/// Dimensions are in centimetres and mass in kilograms. Every value is finite
/// and non-negative; the only way to obtain one is through [`parser::parse`]
/// or [`PackageSpec::new`], both of which enforce that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PackageSpec {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

impl PackageSpec {
    /// Builds a spec from already-numeric values, applying the same checks as
    /// the parser (negative first, then non-finite).
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self, ParseError> {
        let values = [width, height, length, mass];
        parser::validate_measurements(values, |field| values[field.position() - 1].to_string())
    }

    pub(crate) fn from_validated([width, height, length, mass]: [f64; 4]) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn dimensions(&self) -> [f64; 3] {
        [self.width, self.height, self.length]
    }

    /// Volume in cubic centimetres.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// Same dimensions with the mass replaced. The new mass is validated.
    pub fn with_mass(&self, mass: f64) -> Result<Self, ParseError> {
        Self::new(self.width, self.height, self.length, mass)
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Width => self.width,
            Field::Height => self.height,
            Field::Length => self.length,
            Field::Mass => self.mass,
        }
    }
}

/// Canonical `width,height,length,mass` form; parsing it yields the same spec.
impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.width, self.height, self.length, self.mass
        )
    }
}

impl FromStr for PackageSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

/// Handling category consumed by the downstream sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Neither bulky nor heavy; handled normally.
    Standard,
    /// Bulky or heavy but not both; needs special handling.
    Special,
    /// Both bulky and heavy.
    Rejected,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Standard, Category::Special, Category::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a package together with the rules that fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub package: PackageSpec,
    pub category: Category,
    pub bulky: bool,
    pub heavy: bool,
    pub remarks: Vec<String>,
}

/// Unit the caller supplies the mass field in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum MassUnit {
    #[default]
    #[serde(rename = "kg", alias = "kilograms")]
    #[cfg_attr(feature = "cli", value(name = "kg", alias = "kilograms"))]
    Kilograms,
    #[serde(rename = "g", alias = "grams")]
    #[cfg_attr(feature = "cli", value(name = "g", alias = "grams"))]
    Grams,
}

impl MassUnit {
    pub fn to_kilograms(self, mass: f64) -> f64 {
        match self {
            MassUnit::Kilograms => mass,
            MassUnit::Grams => mass / 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}
