/// Latest-per-pollutant extraction over raw reading batches.
///
/// The time-series store hands back free-text measurement labels, so
/// pollutant identity is recovered by case-insensitive substring match
/// (any label containing "co2" counts as CO2). For each pollutant the most
/// recent reading wins; NOx and Benzene values are multiplied by 1000 on the
/// way into the snapshot (collector stores them in ppm, the scales want ppb),
/// VOC and CO2 pass through. Pure — no state survives the call.
use crate::breakpoints::Pollutant;

/// One observed value, borrowed from the caller's fetch buffer.
#[derive(Debug, Clone, Copy)]
pub struct Reading<'a> {
    /// Free-text measurement name from the store, e.g. `"CO2 (ppm)"`.
    pub label: &'a str,
    /// Observed concentration in the collector's storage unit.
    pub value: f64,
    /// Observation time, epoch milliseconds.
    pub observed_at: i64,
    /// Originating device identifier.
    pub source_id: &'a str,
}

/// Most-recent-per-pollutant values, in the units the breakpoint scales
/// expect. Fields are 0.0 when the batch had no matching reading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PollutantSnapshot {
    pub nox: f64,
    pub voc: f64,
    pub co2: f64,
    pub benzene: f64,
}

impl PollutantSnapshot {
    /// Value for a single pollutant.
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Nox => self.nox,
            Pollutant::Voc => self.voc,
            Pollutant::Co2 => self.co2,
            Pollutant::Benzene => self.benzene,
        }
    }

    fn set(&mut self, pollutant: Pollutant, value: f64) {
        match pollutant {
            Pollutant::Nox => self.nox = value,
            Pollutant::Voc => self.voc = value,
            Pollutant::Co2 => self.co2 = value,
            Pollutant::Benzene => self.benzene = value,
        }
    }
}

/// Build a snapshot from a reading batch: for each pollutant, keep the
/// reading with the greatest `observed_at` among labels that match, then
/// apply the pollutant's unit factor. On equal timestamps the reading seen
/// later in the batch wins (not a contract, but deterministic).
pub fn extract_latest(readings: &[Reading]) -> PollutantSnapshot {
    let mut snapshot = PollutantSnapshot::default();

    for p in Pollutant::ALL {
        let latest = readings
            .iter()
            .filter(|r| contains_ignore_case(r.label, p.match_key()))
            .fold(None, |best: Option<&Reading>, r| match best {
                Some(b) if r.observed_at < b.observed_at => Some(b),
                _ => Some(r),
            });

        match latest {
            Some(r) => snapshot.set(p, r.value * p.ppb_factor()),
            None => log::trace!("no {} readings in batch", p.as_str()),
        }
    }

    snapshot
}

/// ASCII case-insensitive substring search. The match keys are all ASCII,
/// so byte-level folding is equivalent to the store's lowercase compare.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(label: &str, value: f64, observed_at: i64) -> Reading<'_> {
        Reading {
            label,
            value,
            observed_at,
            source_id: "sensor-1",
        }
    }

    // ── label matching ──────────────────────────────────────────────

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert!(contains_ignore_case("CO2 (ppm)", "co2"));
        assert!(contains_ignore_case("RawCO2Concentration", "co2"));
        assert!(contains_ignore_case("NOX Sensor 2", "nox"));
        assert!(contains_ignore_case("benzene_ppb", "benzene"));
        assert!(!contains_ignore_case("RawTemperature", "co2"));
        assert!(!contains_ignore_case("Pressure", "voc"));
        assert!(!contains_ignore_case("", "nox"));
    }

    #[test]
    fn unrelated_labels_leave_fields_at_zero() {
        let readings = [
            reading("RawTemperature", 21.5, 1_000),
            reading("Pressure", 1013.0, 1_000),
            reading("BatteryPercentage", 87.0, 1_000),
        ];
        assert_eq!(extract_latest(&readings), PollutantSnapshot::default());
    }

    // ── latest wins ─────────────────────────────────────────────────

    #[test]
    fn latest_co2_reading_wins_unconverted() {
        let readings = [
            reading("CO2", 400.0, 1_000),
            reading("CO2 (ppm)", 212.1, 2_000),
        ];
        let snapshot = extract_latest(&readings);
        assert_eq!(snapshot.co2, 212.1);
    }

    #[test]
    fn latest_wins_regardless_of_batch_order() {
        let readings = [
            reading("voc", 300.0, 5_000),
            reading("VOC", 100.0, 1_000),
        ];
        assert_eq!(extract_latest(&readings).voc, 300.0);
    }

    #[test]
    fn equal_timestamps_keep_the_later_entry() {
        // Observed behavior, not a contract: the fold keeps the right-hand
        // reading on ties, like the dashboard's reduce did.
        let readings = [reading("co2", 410.0, 1_000), reading("co2", 420.0, 1_000)];
        assert_eq!(extract_latest(&readings).co2, 420.0);
    }

    #[test]
    fn latest_wins_across_sources() {
        let readings = [
            Reading {
                label: "CO2",
                value: 500.0,
                observed_at: 1_000,
                source_id: "roof-unit",
            },
            Reading {
                label: "CO2",
                value: 650.0,
                observed_at: 2_000,
                source_id: "lobby-unit",
            },
        ];
        assert_eq!(extract_latest(&readings).co2, 650.0);
    }

    // ── unit conversion ─────────────────────────────────────────────

    #[test]
    fn nox_converts_ppm_to_ppb() {
        let readings = [reading("NOx", 0.05, 1_000)];
        assert_eq!(extract_latest(&readings).nox, 50.0);
    }

    #[test]
    fn benzene_converts_ppm_to_ppb() {
        let readings = [reading("Benzene", 0.012, 1_000)];
        assert_eq!(extract_latest(&readings).benzene, 12.0);
    }

    #[test]
    fn voc_and_co2_pass_through_unconverted() {
        let readings = [reading("VOC", 120.0, 1_000), reading("CO2", 415.0, 1_000)];
        let snapshot = extract_latest(&readings);
        assert_eq!(snapshot.voc, 120.0);
        assert_eq!(snapshot.co2, 415.0);
    }

    #[test]
    fn conversion_applies_to_the_selected_reading_only() {
        // The older NOx reading would convert to a larger value; the newer
        // one is selected first, then converted.
        let readings = [
            reading("nox", 0.9, 1_000),
            reading("nox", 0.05, 2_000),
        ];
        assert_eq!(extract_latest(&readings).nox, 50.0);
    }

    // ── full batch ──────────────────────────────────────────────────

    #[test]
    fn empty_batch_yields_zero_snapshot() {
        let snapshot = extract_latest(&[]);
        assert_eq!(snapshot, PollutantSnapshot::default());
        for p in Pollutant::ALL {
            assert_eq!(snapshot.get(p), 0.0);
        }
    }

    #[test]
    fn mixed_batch_fills_every_field() {
        let readings = [
            reading("NOx (ppm)", 0.02, 1_000),
            reading("voc", 80.0, 1_500),
            reading("CO2 (ppm)", 450.0, 2_000),
            reading("Benzene level", 0.004, 2_500),
            reading("RawHumidity", 55.0, 3_000),
        ];
        let snapshot = extract_latest(&readings);
        assert_eq!(snapshot.nox, 20.0);
        assert_eq!(snapshot.voc, 80.0);
        assert_eq!(snapshot.co2, 450.0);
        assert_eq!(snapshot.benzene, 4.0);
    }

    #[test]
    fn missing_pollutant_defaults_to_zero_among_present_ones() {
        let readings = [reading("co2", 600.0, 1_000)];
        let snapshot = extract_latest(&readings);
        assert_eq!(snapshot.co2, 600.0);
        assert_eq!(snapshot.nox, 0.0);
        assert_eq!(snapshot.voc, 0.0);
        assert_eq!(snapshot.benzene, 0.0);
    }
}
