/// Pollutant breakpoint scales for AQI sub-index computation.
///
/// Each pollutant maps its concentration onto the 0–500 AQI axis through a
/// fixed 6-tier piecewise-linear table (EPA-style construction). Tier bounds
/// differ per pollutant; the AQI sub-ranges are always 0–50, 51–100, 101–150,
/// 151–200, 201–300, 301–500. Concentrations beyond the last tier keep
/// extrapolating with the last tier's line.

/// The four pollutants the engine scores, in evaluation order.
///
/// The order is a contract: `compute_aqi` walks pollutants in this order,
/// and a later pollutant must strictly exceed the running maximum sub-index
/// to become dominant. Ties resolve to the earliest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pollutant {
    /// Nitrogen oxides, ppb
    Nox,
    /// Volatile organic compounds, ppb
    Voc,
    /// Carbon dioxide, ppm
    Co2,
    /// Benzene, ppb
    Benzene,
}

impl Pollutant {
    /// All pollutants in evaluation order.
    pub const ALL: [Pollutant; 4] = [
        Pollutant::Nox,
        Pollutant::Voc,
        Pollutant::Co2,
        Pollutant::Benzene,
    ];

    /// Display name, as shown in dashboard badges.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Pollutant::Nox => "NOx",
            Pollutant::Voc => "VOC",
            Pollutant::Co2 => "CO2",
            Pollutant::Benzene => "Benzene",
        }
    }

    /// Lowercase key searched for in free-text measurement labels
    /// (case-insensitive substring match, see `extract`).
    pub const fn match_key(&self) -> &'static str {
        match self {
            Pollutant::Nox => "nox",
            Pollutant::Voc => "voc",
            Pollutant::Co2 => "co2",
            Pollutant::Benzene => "benzene",
        }
    }

    /// Multiplier applied to raw reading values by the extractor.
    ///
    /// NOx and Benzene arrive from the collector in ppm and are converted to
    /// ppb here; VOC and CO2 pass through unchanged. The asymmetry matches
    /// the deployed collector's unit handling.
    pub const fn ppb_factor(&self) -> f64 {
        match self {
            Pollutant::Nox | Pollutant::Benzene => 1000.0,
            Pollutant::Voc | Pollutant::Co2 => 1.0,
        }
    }

    /// Breakpoint scale for this pollutant.
    pub const fn scale(&self) -> &'static BreakpointScale {
        match self {
            Pollutant::Nox => &NOX_SCALE,
            Pollutant::Voc => &VOC_SCALE,
            Pollutant::Co2 => &CO2_SCALE,
            Pollutant::Benzene => &BENZENE_SCALE,
        }
    }
}

/// One tier of a breakpoint table: concentrations in `lo..=hi` map linearly
/// onto the 50-point AQI band starting at `base`.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub lo: f64,
    pub hi: f64,
    pub base: i32,
}

/// AQI band bases shared by every pollutant's six tiers.
pub const TIER_BASES: [i32; 6] = [0, 51, 101, 151, 201, 301];

/// A pollutant's 6-tier concentration→sub-index scale.
///
/// The last tier is open at the top: values above `tiers[5].hi` extrapolate
/// with the same line, so the mapping is total over all of `f64` (negative
/// inputs fall into the first tier's line and produce negative sub-indices,
/// which never win dominance).
#[derive(Debug, Clone, Copy)]
pub struct BreakpointScale {
    pub tiers: [Tier; 6],
}

impl BreakpointScale {
    /// Map a concentration to its AQI sub-index.
    ///
    /// Picks the first tier whose `hi` bound covers the value (the last tier
    /// for anything beyond the table) and applies
    /// `round((value - lo) / (hi - lo) * 50 + base)`.
    pub fn sub_index(&self, value: f64) -> i32 {
        let tier = self
            .tiers
            .iter()
            .find(|t| value <= t.hi)
            .unwrap_or(&self.tiers[5]);
        round_half_away((value - tier.lo) / (tier.hi - tier.lo) * 50.0 + tier.base as f64)
    }
}

/// NOx breakpoints (ppb).
pub static NOX_SCALE: BreakpointScale = BreakpointScale {
    tiers: [
        Tier { lo: 0.0, hi: 53.0, base: 0 },
        Tier { lo: 54.0, hi: 100.0, base: 51 },
        Tier { lo: 101.0, hi: 360.0, base: 101 },
        Tier { lo: 361.0, hi: 649.0, base: 151 },
        Tier { lo: 650.0, hi: 1249.0, base: 201 },
        Tier { lo: 1250.0, hi: 2000.0, base: 301 },
    ],
};

/// VOC breakpoints (ppb).
pub static VOC_SCALE: BreakpointScale = BreakpointScale {
    tiers: [
        Tier { lo: 0.0, hi: 50.0, base: 0 },
        Tier { lo: 51.0, hi: 150.0, base: 51 },
        Tier { lo: 151.0, hi: 300.0, base: 101 },
        Tier { lo: 301.0, hi: 500.0, base: 151 },
        Tier { lo: 501.0, hi: 1000.0, base: 201 },
        Tier { lo: 1001.0, hi: 2000.0, base: 301 },
    ],
};

/// CO2 breakpoints (ppm).
pub static CO2_SCALE: BreakpointScale = BreakpointScale {
    tiers: [
        Tier { lo: 0.0, hi: 1000.0, base: 0 },
        Tier { lo: 1001.0, hi: 2000.0, base: 51 },
        Tier { lo: 2001.0, hi: 5000.0, base: 101 },
        Tier { lo: 5001.0, hi: 10000.0, base: 151 },
        Tier { lo: 10001.0, hi: 20000.0, base: 201 },
        Tier { lo: 20001.0, hi: 50000.0, base: 301 },
    ],
};

/// Benzene breakpoints (ppb).
pub static BENZENE_SCALE: BreakpointScale = BreakpointScale {
    tiers: [
        Tier { lo: 0.0, hi: 10.0, base: 0 },
        Tier { lo: 11.0, hi: 50.0, base: 51 },
        Tier { lo: 51.0, hi: 100.0, base: 101 },
        Tier { lo: 101.0, hi: 200.0, base: 151 },
        Tier { lo: 201.0, hi: 500.0, base: 201 },
        Tier { lo: 501.0, hi: 1000.0, base: 301 },
    ],
};

/// Round half away from zero.
///
/// `f64::round` lives in `std`, not `core`, so the crate carries its own.
/// Saturating `as` casts keep this total for any finite input.
fn round_half_away(x: f64) -> i32 {
    if x >= 0.0 {
        (x + 0.5) as i32
    } else {
        (x - 0.5) as i32
    }
}
