use serde::{Deserialize, Serialize};

/// How the four image corners are expressed (NITF `ICORDS`).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageCoordinatesRepresentation {
    /// No corner coordinates present.
    #[default]
    None,
    /// Degrees/minutes/seconds, already decoded to degrees by the parser.
    Geographic,
    DecimalDegrees,
    UtmNorth,
    UtmSouth,
    Mgrs,
    Unknown,
}

impl ImageCoordinatesRepresentation {
    /// Decode the single-character `ICORDS` code.
    pub fn from_icords(code: char) -> Self {
        match code {
            'G' => Self::Geographic,
            'D' => Self::DecimalDegrees,
            'N' => Self::UtmNorth,
            'S' => Self::UtmSouth,
            'U' => Self::Mgrs,
            ' ' => Self::None,
            _ => Self::Unknown,
        }
    }

    /// Whether corners in this representation are WGS84 degrees usable as-is.
    pub fn is_geographic(self) -> bool {
        matches!(self, Self::Geographic | Self::DecimalDegrees)
    }
}

impl std::fmt::Display for ImageCoordinatesRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::None => "NONE",
            Self::Geographic => "GEOGRAPHIC",
            Self::DecimalDegrees => "DECIMALDEGREES",
            Self::UtmNorth => "UTMNORTH",
            Self::UtmSouth => "UTMSOUTH",
            Self::Mgrs => "MGRS",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// One corner, in degrees.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ImageCoordinatePair {
    pub latitude: f64,
    pub longitude: f64,
}

impl ImageCoordinatePair {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The four image corners, named by pixel position (`IGEOLO`).
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCoordinates {
    /// First row, first column.
    pub coordinate00: ImageCoordinatePair,
    /// First row, last column.
    pub coordinate0_max_col: ImageCoordinatePair,
    /// Last row, last column.
    pub coordinate_max_row_max_col: ImageCoordinatePair,
    /// Last row, first column.
    pub coordinate_max_row0: ImageCoordinatePair,
}
