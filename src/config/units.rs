use serde::Deserialize;

/// Length unit shared by mua and musp
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    #[default]
    #[serde(rename(deserialize = "cm"))]
    Centimeter,
    #[serde(rename(deserialize = "mm"))]
    Millimeter,
}

impl LengthUnit {
    pub fn inverse_symbol(&self) -> &'static str {
        match self {
            LengthUnit::Centimeter => "cm^-1",
            LengthUnit::Millimeter => "mm^-1",
        }
    }
}
