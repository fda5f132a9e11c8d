//! Rollups over the raw upstream records. Everything here is deterministic
//! over its inputs and tolerant of the data quality the endpoints actually
//! deliver: a malformed count degrades to zero, a missing join partner rolls
//! up to zero, and no record is ever rejected.

use crate::api::models::{
    count_or_zero, grouped_count_or_zero, PotentialRecord, RealizationRecord, TargetRecord,
};
use crate::domain::{KecamatanComparison, PotentialBreakdown, SppgUnit};
use std::collections::{HashMap, HashSet};

/// Kecamatan names join case-insensitively; the upper-cased form is the
/// canonical key wherever regions are compared.
pub fn kecamatan_key(name: &str) -> String {
    name.to_uppercase()
}

/// Sum the potential-beneficiary rows into the grand total and the eight
/// category groups.
///
/// The grand total sums each row's own `Total` field rather than the
/// category columns; upstream rows where the two disagree keep their
/// reported total.
pub fn transform_potential(records: &[PotentialRecord]) -> (i64, PotentialBreakdown) {
    let mut total = 0;
    let mut breakdown = PotentialBreakdown::default();

    for record in records {
        total += count_or_zero(record.total.as_ref());

        breakdown.paud_tk += count_or_zero(record.paud.as_ref())
            + count_or_zero(record.tk.as_ref())
            + count_or_zero(record.ra.as_ref())
            + count_or_zero(record.kb.as_ref())
            + count_or_zero(record.tpa.as_ref())
            + count_or_zero(record.sps.as_ref());
        breakdown.sd_mi += count_or_zero(record.sd.as_ref()) + count_or_zero(record.mi.as_ref());
        breakdown.smp_mts +=
            count_or_zero(record.smp.as_ref()) + count_or_zero(record.mts.as_ref());
        breakdown.sma_smk_ma += count_or_zero(record.sma.as_ref())
            + count_or_zero(record.smk.as_ref())
            + count_or_zero(record.ma.as_ref());

        breakdown.balita += count_or_zero(record.balita.as_ref());
        breakdown.bumil += count_or_zero(record.bumil.as_ref());
        breakdown.busui += count_or_zero(record.busui.as_ref());

        breakdown.pesantren_lain += count_or_zero(record.pesantren.as_ref())
            + count_or_zero(record.slb.as_ref())
            + count_or_zero(record.pkbm.as_ref());
    }

    (total, breakdown)
}

/// Male/female tallies accumulated per SPPG name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SppgTally {
    pub laki: i64,
    pub perempuan: i64,
}

impl SppgTally {
    pub const fn total(self) -> i64 {
        self.laki + self.perempuan
    }
}

/// Accumulators produced by one pass over the realization reports.
#[derive(Debug, Default)]
pub struct RealizationRollup {
    /// Realization total (laki + perempuan) keyed by upper-cased kecamatan.
    pub per_kecamatan: HashMap<String, i64>,
    /// Tallies keyed by exact SPPG name; rows without a name contribute to
    /// the region and grand totals only.
    pub per_sppg: HashMap<String, SppgTally>,
    /// Distinct SPPG names seen per upper-cased kecamatan.
    pub sppg_by_kecamatan: HashMap<String, HashSet<String>>,
    pub total_laki: i64,
    pub total_perempuan: i64,
    pub total: i64,
}

impl RealizationRollup {
    pub fn kecamatan_total(&self, name: &str) -> i64 {
        self.per_kecamatan
            .get(&kecamatan_key(name))
            .copied()
            .unwrap_or(0)
    }

    pub fn sppg_count(&self, name: &str) -> usize {
        self.sppg_by_kecamatan
            .get(&kecamatan_key(name))
            .map_or(0, HashSet::len)
    }
}

/// Fold the daily report rows into per-region, per-SPPG, and grand totals.
pub fn transform_realization(records: &[RealizationRecord]) -> RealizationRollup {
    let mut rollup = RealizationRollup::default();

    for record in records {
        let kecamatan = kecamatan_key(&record.kecamatan);
        let laki = count_or_zero(record.jumlah_lakilaki.as_ref());
        let perempuan = count_or_zero(record.jumlah_perempuan.as_ref());

        *rollup.per_kecamatan.entry(kecamatan.clone()).or_default() += laki + perempuan;
        rollup.total_laki += laki;
        rollup.total_perempuan += perempuan;
        rollup.total += laki + perempuan;

        // SPPG joins stay case-sensitive on the exact reported name.
        if let Some(nama_sppg) = record.nama_sppg.as_deref() {
            if !nama_sppg.is_empty() {
                rollup
                    .sppg_by_kecamatan
                    .entry(kecamatan)
                    .or_default()
                    .insert(nama_sppg.to_string());
                let tally = rollup.per_sppg.entry(nama_sppg.to_string()).or_default();
                tally.laki += laki;
                tally.perempuan += perempuan;
            }
        }
    }

    rollup
}

/// Copy the accumulated tallies onto the existing facility list by exact
/// name. Units without a tally keep zeroed counters; the list itself is
/// never grown or shrunk here.
pub fn merge_sppg_realization(units: &mut [SppgUnit], per_sppg: &HashMap<String, SppgTally>) {
    for unit in units {
        let tally = per_sppg.get(&unit.nama).copied().unwrap_or_default();
        unit.total_laki = tally.laki;
        unit.total_perempuan = tally.perempuan;
        unit.total_realization = tally.total();
    }
}

/// Join the target rows against the realization rollup into comparison rows,
/// and accumulate the grand target total.
///
/// Rows come back in the canonical presentation order: descending by target,
/// ties keeping the upstream input order.
pub fn build_kecamatan_comparison(
    targets: &[TargetRecord],
    rollup: &RealizationRollup,
) -> (i64, Vec<KecamatanComparison>) {
    let mut total_target = 0;
    let mut rows: Vec<KecamatanComparison> = targets
        .iter()
        .map(|target| {
            let target_value = grouped_count_or_zero(target.total.as_ref());
            let realization = rollup.kecamatan_total(&target.nama);
            total_target += target_value;

            let percentage = if target_value > 0 {
                #[allow(clippy::cast_precision_loss)]
                {
                    (realization as f64 / target_value as f64) * 100.0
                }
            } else {
                0.0
            };

            KecamatanComparison {
                name: target.nama.clone(),
                target: target_value,
                realization,
                percentage,
                sppg_count: rollup.sppg_count(&target.nama),
            }
        })
        .collect();

    // sort_by is stable, so equal targets keep their input order
    rows.sort_by(|a, b| b.target.cmp(&a.target));

    (total_target, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::RawCount;

    fn potential(fields: &str) -> PotentialRecord {
        serde_json::from_str(&format!("{{{fields}}}")).unwrap()
    }

    fn report(kecamatan: &str, laki: &str, perempuan: &str, sppg: Option<&str>) -> RealizationRecord {
        RealizationRecord {
            kecamatan: kecamatan.to_string(),
            desa: String::new(),
            jumlah_lakilaki: Some(RawCount::Text(laki.to_string())),
            jumlah_perempuan: Some(RawCount::Text(perempuan.to_string())),
            nama_sppg: sppg.map(String::from),
            lokasi_koordinat: None,
        }
    }

    fn target(nama: &str, total: &str) -> TargetRecord {
        TargetRecord {
            nama: nama.to_string(),
            total: Some(RawCount::Text(total.to_string())),
        }
    }

    #[test]
    fn potential_groups_education_columns() {
        let records = [potential(r#""Total":"10","SD":"4","MI":"2""#)];
        let (total, breakdown) = transform_potential(&records);
        assert_eq!(total, 10);
        assert_eq!(breakdown.sd_mi, 6);
        assert_eq!(breakdown.paud_tk, 0);
    }

    #[test]
    fn potential_missing_fields_contribute_zero() {
        let records = [
            potential(r#""Total":"5","TK":"3","BALITA":"2""#),
            potential(r#""Total":"7","PAUD":"1","RA":"1","PESANTREN":"4""#),
        ];
        let (total, breakdown) = transform_potential(&records);
        assert_eq!(total, 12);
        assert_eq!(breakdown.paud_tk, 5);
        assert_eq!(breakdown.balita, 2);
        assert_eq!(breakdown.pesantren_lain, 4);
        assert_eq!(breakdown.sd_mi, 0);
    }

    #[test]
    fn reported_total_is_kept_even_when_columns_disagree() {
        let records = [potential(r#""Total":"100","SD":"4""#)];
        let (total, breakdown) = transform_potential(&records);
        assert_eq!(total, 100);
        assert_eq!(breakdown.sd_mi, 4);
    }

    #[test]
    fn realization_joins_kecamatan_case_insensitively() {
        let records = [
            report("A", "3", "2", Some("X")),
            report("a", "1", "0", Some("X")),
        ];
        let rollup = transform_realization(&records);
        assert_eq!(rollup.kecamatan_total("A"), 6);
        assert_eq!(rollup.per_sppg["X"], SppgTally { laki: 4, perempuan: 2 });
        assert_eq!(rollup.sppg_count("a"), 1);
    }

    #[test]
    fn realization_totals_stay_consistent() {
        let records = [
            report("A", "3", "2", Some("X")),
            report("B", "10", "5", None),
            report("A", "1", "bad", Some("Y")),
        ];
        let rollup = transform_realization(&records);
        let per_region_sum: i64 = rollup.per_kecamatan.values().sum();
        assert_eq!(per_region_sum, rollup.total);
        assert_eq!(rollup.total, rollup.total_laki + rollup.total_perempuan);
        assert_eq!(rollup.total, 21);
    }

    #[test]
    fn rows_without_sppg_name_skip_facility_tallies() {
        let records = [report("A", "2", "2", None), report("A", "1", "1", Some(""))];
        let rollup = transform_realization(&records);
        assert!(rollup.per_sppg.is_empty());
        assert_eq!(rollup.sppg_count("A"), 0);
        assert_eq!(rollup.kecamatan_total("A"), 6);
    }

    #[test]
    fn merge_is_total_and_idempotent() {
        let mut units = vec![
            SppgUnit::new("X".into(), "A".into(), "D".into(), String::new()),
            SppgUnit::new("Z".into(), "B".into(), "D".into(), String::new()),
        ];
        let rollup = transform_realization(&[report("A", "3", "2", Some("X"))]);

        merge_sppg_realization(&mut units, &rollup.per_sppg);
        let once = units.clone();
        merge_sppg_realization(&mut units, &rollup.per_sppg);
        assert_eq!(units, once);

        assert_eq!(units[0].total_laki, 3);
        assert_eq!(units[0].total_perempuan, 2);
        assert_eq!(units[0].total_realization, 5);
        // unmatched unit keeps zeroes, but is never dropped
        assert_eq!(units[1].total_realization, 0);
        assert_eq!(units.len(), 2);
    }

    #[test]
    fn facility_join_is_case_sensitive() {
        let mut units = vec![SppgUnit::new("x".into(), "A".into(), "D".into(), String::new())];
        let rollup = transform_realization(&[report("A", "3", "2", Some("X"))]);
        merge_sppg_realization(&mut units, &rollup.per_sppg);
        assert_eq!(units[0].total_realization, 0);
    }

    #[test]
    fn comparison_joins_target_and_realization() {
        let rollup = transform_realization(&[
            report("soreang", "100", "150", Some("X")),
            report("SOREANG", "0", "0", Some("Y")),
        ]);
        let (total_target, rows) = build_kecamatan_comparison(&[target("Soreang", "1,000")], &rollup);

        assert_eq!(total_target, 1000);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].target, 1000);
        assert_eq!(rows[0].realization, 250);
        assert!((rows[0].percentage - 25.0).abs() < f64::EPSILON);
        assert_eq!(rows[0].sppg_count, 2);
    }

    #[test]
    fn zero_target_yields_zero_percentage() {
        let rollup = transform_realization(&[report("A", "10", "0", None)]);
        let (_, rows) = build_kecamatan_comparison(&[target("A", "0")], &rollup);
        assert_eq!(rows[0].percentage, 0.0);
        assert!(rows[0].percentage.is_finite());
    }

    #[test]
    fn percentage_may_exceed_one_hundred() {
        let rollup = transform_realization(&[report("A", "300", "0", None)]);
        let (_, rows) = build_kecamatan_comparison(&[target("A", "200")], &rollup);
        assert!((rows[0].percentage - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unmatched_target_region_rolls_up_to_zero() {
        let rollup = transform_realization(&[report("A", "5", "5", Some("X"))]);
        let (_, rows) = build_kecamatan_comparison(&[target("NOWHERE", "100")], &rollup);
        assert_eq!(rows[0].realization, 0);
        assert_eq!(rows[0].sppg_count, 0);
        assert_eq!(rows[0].percentage, 0.0);
    }

    #[test]
    fn comparison_sorts_descending_by_target_with_stable_ties() {
        let rollup = RealizationRollup::default();
        let targets = [
            target("LOW", "10"),
            target("TIE-FIRST", "50"),
            target("HIGH", "90"),
            target("TIE-SECOND", "50"),
        ];
        let (total_target, rows) = build_kecamatan_comparison(&targets, &rollup);
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["HIGH", "TIE-FIRST", "TIE-SECOND", "LOW"]);
        assert_eq!(total_target, 200);
    }
}
