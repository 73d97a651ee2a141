/// JSON report messages for dashboard consumers.
///
/// The backend streams derived results to the presentation layer as
/// newline-delimited JSON (NDJSON). Uses `heapless` types and
/// `serde-json-core` for no_std/no-alloc operation.
use heapless::Vec;
use serde::Serialize;

use crate::aggregate::IntervalAverage;
use crate::breakpoints::Pollutant;
use crate::extract::PollutantSnapshot;
use crate::index::AqiResult;

/// Maximum size of a serialized JSON report
pub const MAX_REPORT_LEN: usize = 512;

/// Buffer type for serialized JSON reports
pub type ReportBuffer = Vec<u8, MAX_REPORT_LEN>;

/// Engine version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Messages sent to dashboard consumers
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum DashboardMessage<'a> {
    /// Composite AQI for the badge and summary cards
    #[serde(rename = "aqi")]
    Aqi {
        aqi: i32,
        /// Pollutant driving the composite, or "None" when floor-clamped
        dominant: &'static str,
        /// Badge text
        status: &'static str,
        /// Badge CSS class
        color: &'static str,
        /// Badge icon name
        icon: &'static str,
        /// Per-pollutant sub-indices in NOx, VOC, CO2, Benzene order
        sub: [i32; 4],
        /// Snapshot concentrations the composite was computed from
        nox: f64,
        voc: f64,
        co2: f64,
        benzene: f64,
        /// Epoch milliseconds when the report was built
        ts: i64,
    },
    /// Averaged chart series
    #[serde(rename = "series")]
    Series {
        points: &'a [IntervalAverage<'a>],
        /// Readings dropped by the aggregation capacity bound
        dropped: u32,
        ts: i64,
    },
}

impl<'a> DashboardMessage<'a> {
    /// Build an AQI report from a computed result and the snapshot it was
    /// computed from. `ts` is the caller's clock — the engine has none.
    pub fn aqi(result: &AqiResult, snapshot: &PollutantSnapshot, ts: i64) -> Self {
        DashboardMessage::Aqi {
            aqi: result.aqi,
            dominant: result.dominant.map(|p| p.as_str()).unwrap_or("None"),
            status: result.status.label(),
            color: result.status.color_tag(),
            icon: result.status.icon_tag(),
            sub: result.sub_indices,
            nox: snapshot.get(Pollutant::Nox),
            voc: snapshot.get(Pollutant::Voc),
            co2: snapshot.get(Pollutant::Co2),
            benzene: snapshot.get(Pollutant::Benzene),
            ts,
        }
    }
}

/// Serialize a DashboardMessage to JSON bytes and write to the output buffer.
/// Appends the NDJSON newline when it fits. Returns the number of bytes
/// written, or None if serialization failed.
pub fn serialize_report(msg: &DashboardMessage, buf: &mut [u8]) -> Option<usize> {
    match serde_json_core::to_slice(msg, buf) {
        Ok(len) => {
            if len < buf.len() {
                buf[len] = b'\n';
                Some(len + 1)
            } else {
                Some(len)
            }
        }
        Err(_) => None,
    }
}
