use crate::classify::outcome::{AirQualityVerdict, PollutantResult};
use crate::model::{Pollutant, PollutantReading};
use crate::rules::{builtin, ThresholdTable, Thresholds};
use crate::severity::SeverityIndex;

/// Map a concentration onto the 1-5 scale using strict less-than tests.
///
/// A value equal to a threshold lands in the higher band. Negative values
/// land in band 1. NaN fails every comparison and lands in band 5.
pub fn classify_pollutant(value: f64, thresholds: &Thresholds) -> SeverityIndex {
    let band = thresholds
        .bounds()
        .iter()
        .position(|&edge| value < edge)
        .unwrap_or(thresholds.bounds().len());
    SeverityIndex::from_band(band)
}

/// Classify a reading against the built-in OpenWeatherMap table.
pub fn classify_reading(reading: &PollutantReading) -> AirQualityVerdict {
    classify_reading_with(reading, &builtin::openweather())
}

/// Classify a reading against any threshold table.
pub fn classify_reading_with(reading: &PollutantReading, table: &ThresholdTable) -> AirQualityVerdict {
    let pollutant_results: Vec<PollutantResult> = reading
        .iter()
        .map(|(pollutant, value)| classify_one(pollutant, value, table.thresholds(pollutant)))
        .collect();

    let worst_index = pollutant_results
        .iter()
        .map(|r| r.index)
        .max()
        .unwrap_or(SeverityIndex::MIN);

    let determining: Vec<Pollutant> = pollutant_results
        .iter()
        .filter(|r| r.index == worst_index)
        .map(|r| r.pollutant)
        .collect();

    let label = worst_index.label();
    let reason = if determining.len() == 1 {
        format!("Determined by {} ({})", determining[0], label)
    } else {
        format!(
            "Determined by {} pollutants at {} level",
            determining.len(),
            label
        )
    };

    AirQualityVerdict {
        worst_index,
        label,
        determining_pollutants: determining,
        reason,
        pollutant_results,
    }
}

fn classify_one(pollutant: Pollutant, value: f64, thresholds: &Thresholds) -> PollutantResult {
    let index = classify_pollutant(value, thresholds);
    let label = index.label();
    let bounds = thresholds.bounds();
    let band = usize::from(index.value()) - 1;

    let reason = if band == 0 {
        format!(
            "{}: {:.2} < {} -> {} ({})",
            pollutant, value, bounds[0], label, index
        )
    } else if band == bounds.len() {
        format!(
            "{}: {:.2} >= {} -> {} ({})",
            pollutant, value, bounds[band - 1], label, index
        )
    } else {
        format!(
            "{}: {} <= {:.2} < {} -> {} ({})",
            pollutant,
            bounds[band - 1],
            value,
            bounds[band],
            label,
            index
        )
    };

    PollutantResult {
        pollutant,
        value,
        index,
        label,
        thresholds: *thresholds,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::SeverityLabel;

    fn idx(v: u8) -> SeverityIndex {
        SeverityIndex::try_from(v).unwrap()
    }

    fn reading(so2: f64, no2: f64, pm10: f64, pm2_5: f64, o3: f64, co: f64) -> PollutantReading {
        PollutantReading {
            so2,
            no2,
            pm10,
            pm2_5,
            o3,
            co,
        }
    }

    #[test]
    fn test_bands_per_threshold() {
        let t = Thresholds::new(10.0, 25.0, 50.0, 75.0);
        assert_eq!(classify_pollutant(0.0, &t), idx(1));
        assert_eq!(classify_pollutant(9.99, &t), idx(1));
        assert_eq!(classify_pollutant(10.0, &t), idx(2));
        assert_eq!(classify_pollutant(30.0, &t), idx(3));
        assert_eq!(classify_pollutant(60.0, &t), idx(4));
        assert_eq!(classify_pollutant(75.0, &t), idx(5));
        assert_eq!(classify_pollutant(1.0e9, &t), idx(5));
    }

    #[test]
    fn test_boundary_values_fall_into_higher_band() {
        for p in Pollutant::ALL {
            let t = builtin::openweather().thresholds(p).to_owned();
            let [t1, t2, t3, t4] = *t.bounds();
            assert_eq!(classify_pollutant(t1, &t), idx(2), "{p} at t1");
            assert_eq!(classify_pollutant(t2, &t), idx(3), "{p} at t2");
            assert_eq!(classify_pollutant(t3, &t), idx(4), "{p} at t3");
            assert_eq!(classify_pollutant(t4, &t), idx(5), "{p} at t4");
            assert_eq!(classify_pollutant(t4 - 1e-6, &t), idx(4), "{p} just below t4");
        }
    }

    #[test]
    fn test_monotonic_in_value() {
        let table = builtin::openweather();
        for p in Pollutant::ALL {
            let t = table.thresholds(p);
            let top = t.bounds()[3] * 1.5;
            let mut prev = SeverityIndex::MIN;
            let mut v = 0.0;
            while v <= top {
                let current = classify_pollutant(v, t);
                assert!(current >= prev, "{p}: index dropped at {v}");
                assert!(current >= SeverityIndex::MIN && current <= SeverityIndex::MAX);
                prev = current;
                v += top / 997.0;
            }
        }
    }

    #[test]
    fn test_negative_value_is_band_one() {
        assert_eq!(classify_pollutant(-5.0, &builtin::SO2), idx(1));
    }

    #[test]
    fn test_worst_pollutant_wins() {
        let verdict = classify_reading(&reading(10.0, 10.0, 10.0, 80.0, 10.0, 10.0));
        assert_eq!(verdict.worst_index, idx(5));
        assert_eq!(verdict.label, SeverityLabel::VeryPoor);
        assert_eq!(verdict.determining_pollutants, vec![Pollutant::Pm25]);
        assert!(verdict.reason.contains("PM25"));
    }

    #[test]
    fn test_all_zero_is_good() {
        let verdict = classify_reading(&PollutantReading::default());
        assert_eq!(verdict.worst_index, idx(1));
        assert_eq!(verdict.label, SeverityLabel::Good);
        assert_eq!(verdict.determining_pollutants.len(), 6);
        assert_eq!(verdict.pollutant_results.len(), 6);
    }

    #[test]
    fn test_ties_report_every_pollutant_at_worst() {
        // NO2 70 -> 3, O3 100 -> 3, rest lower
        let verdict = classify_reading(&reading(0.0, 70.0, 0.0, 0.0, 100.0, 0.0));
        assert_eq!(verdict.worst_index, idx(3));
        assert_eq!(
            verdict.determining_pollutants,
            vec![Pollutant::No2, Pollutant::O3]
        );
        assert!(verdict.reason.contains("2 pollutants"));
    }

    #[test]
    fn test_worst_is_max_of_individual_indices() {
        let r = reading(85.0, 45.0, 120.0, 12.0, 150.0, 9500.0);
        let verdict = classify_reading(&r);
        let max = verdict
            .pollutant_results
            .iter()
            .map(|p| p.index)
            .max()
            .unwrap();
        assert_eq!(verdict.worst_index, max);
        assert_eq!(verdict.worst_index, idx(4));
    }

    #[test]
    fn test_classify_reading_is_idempotent() {
        let r = reading(25.0, 75.0, 55.0, 30.0, 90.0, 5000.0);
        assert_eq!(classify_reading(&r), classify_reading(&r));
    }

    #[test]
    fn test_reason_mentions_band_edges() {
        let verdict = classify_reading(&reading(0.0, 0.0, 0.0, 30.0, 0.0, 16000.0));
        let pm = &verdict.pollutant_results[3];
        assert_eq!(pm.pollutant, Pollutant::Pm25);
        assert_eq!(pm.reason, "PM25: 25 <= 30.00 < 50 -> Moderate (3)");
        let co = &verdict.pollutant_results[5];
        assert_eq!(co.reason, "CO: 16000.00 >= 15400 -> Very Poor (5)");
    }
}
