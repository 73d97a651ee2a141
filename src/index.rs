/// Composite AQI computation and tier classification.
///
/// Each pollutant's concentration maps to a sub-index through its breakpoint
/// scale; the composite AQI is the running maximum across the fixed
/// evaluation order NOx, VOC, CO2, Benzene. A later pollutant must strictly
/// exceed the running maximum to take dominance, so ties go to the earlier
/// pollutant. Composites below 10 clamp to 10 with no dominant pollutant.
use crate::breakpoints::Pollutant;

/// Minimum reported composite AQI. Results below this clamp to exactly this
/// value and drop their dominant pollutant.
pub const AQI_FLOOR: i32 = 10;

/// Result of one composite AQI evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiResult {
    /// Composite AQI: the maximum sub-index, floor-clamped to [`AQI_FLOOR`].
    pub aqi: i32,
    /// Pollutant that produced the maximum sub-index; `None` when the
    /// composite was floor-clamped.
    pub dominant: Option<Pollutant>,
    /// Tier classification of the (clamped) composite.
    pub status: Status,
    /// Per-pollutant sub-indices in [`Pollutant::ALL`] order.
    pub sub_indices: [i32; 4],
}

impl AqiResult {
    /// Sub-index for a single pollutant.
    pub fn sub_index(&self, pollutant: Pollutant) -> i32 {
        match pollutant {
            Pollutant::Nox => self.sub_indices[0],
            Pollutant::Voc => self.sub_indices[1],
            Pollutant::Co2 => self.sub_indices[2],
            Pollutant::Benzene => self.sub_indices[3],
        }
    }
}

/// Compute the composite AQI from the four pollutant concentrations.
///
/// Units follow the breakpoint tables: ppb for NOx, VOC, and Benzene, ppm
/// for CO2. Missing pollutants are passed as 0. Total over all finite
/// inputs — out-of-table values extrapolate, nothing errors.
pub fn compute_aqi(nox: f64, voc: f64, co2: f64, benzene: f64) -> AqiResult {
    let concentrations = [nox, voc, co2, benzene];
    let mut sub_indices = [0i32; 4];
    let mut aqi = 0;
    let mut dominant = None;

    for (i, p) in Pollutant::ALL.iter().enumerate() {
        let idx = p.scale().sub_index(concentrations[i]);
        sub_indices[i] = idx;
        if idx > aqi {
            aqi = idx;
            dominant = Some(*p);
        }
    }

    if aqi < AQI_FLOOR {
        aqi = AQI_FLOOR;
        dominant = None;
    }

    AqiResult {
        aqi,
        dominant,
        status: classify_status(aqi),
        sub_indices,
    }
}

/// AQI tier, as rendered in dashboard badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Status {
    /// Badge text.
    pub const fn label(&self) -> &'static str {
        match self {
            Status::Good => "Good",
            Status::Moderate => "Moderate",
            Status::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Status::Unhealthy => "Unhealthy",
            Status::VeryUnhealthy => "Very Unhealthy",
            Status::Hazardous => "Hazardous",
        }
    }

    /// CSS class the presentation layer styles badges with. Both Unhealthy
    /// tiers share one class, as do Very Unhealthy and Hazardous icons —
    /// the dashboard stylesheet only distinguishes that far.
    pub const fn color_tag(&self) -> &'static str {
        match self {
            Status::Good => "aqi-good",
            Status::Moderate => "aqi-moderate",
            Status::UnhealthySensitive | Status::Unhealthy => "aqi-unhealthy",
            Status::VeryUnhealthy => "aqi-very-unhealthy",
            Status::Hazardous => "aqi-hazardous",
        }
    }

    /// Icon name the presentation layer renders next to the badge.
    pub const fn icon_tag(&self) -> &'static str {
        match self {
            Status::Good => "CheckCircle",
            Status::Moderate => "Activity",
            Status::UnhealthySensitive | Status::Unhealthy => "AlertTriangle",
            Status::VeryUnhealthy | Status::Hazardous => "XCircle",
        }
    }
}

/// Classify a composite AQI into its tier. Upper bounds are inclusive:
/// 50, 100, 150, 200, 300, then Hazardous.
pub const fn classify_status(aqi: i32) -> Status {
    if aqi <= 50 {
        Status::Good
    } else if aqi <= 100 {
        Status::Moderate
    } else if aqi <= 150 {
        Status::UnhealthySensitive
    } else if aqi <= 200 {
        Status::Unhealthy
    } else if aqi <= 300 {
        Status::VeryUnhealthy
    } else {
        Status::Hazardous
    }
}
