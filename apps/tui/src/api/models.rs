//! Typed shapes for the four upstream responses. The upstream endpoints are
//! inconsistent about numeric fields (sometimes JSON strings, sometimes
//! numbers, sometimes missing entirely), so every count field goes through
//! [`RawCount`] and coerces to zero instead of failing the decode.

use crate::stats::parse::{parse_count, parse_grouped_count};
use serde::Deserialize;

/// A count field as the upstream actually sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawCount {
    pub fn as_count(&self) -> i64 {
        match self {
            Self::Int(v) => *v,
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(v) => v.trunc() as i64,
            Self::Text(raw) => parse_count(raw),
        }
    }

    /// Like [`Self::as_count`] but tolerant of thousands-grouping commas,
    /// which the target endpoint uses.
    pub fn as_grouped_count(&self) -> i64 {
        match self {
            Self::Text(raw) => parse_grouped_count(raw),
            other => other.as_count(),
        }
    }
}

/// Absent-field-is-zero coercion for optional count fields.
pub fn count_or_zero(field: Option<&RawCount>) -> i64 {
    field.map_or(0, RawCount::as_count)
}

pub fn grouped_count_or_zero(field: Option<&RawCount>) -> i64 {
    field.map_or(0, RawCount::as_grouped_count)
}

// ---- facility list: GET /api/data/mbg---sppg---v ----

#[derive(Debug, Default, Deserialize)]
pub struct SppgListResponse {
    #[serde(default)]
    pub total: Option<RawCount>,
    #[serde(default)]
    pub data: Vec<SppgRow>,
}

#[derive(Debug, Deserialize)]
pub struct SppgRow {
    pub detail: SppgRowDetail,
}

#[derive(Debug, Default, Deserialize)]
pub struct SppgRowDetail {
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub kecamatan: String,
    #[serde(default)]
    pub desa: String,
    #[serde(default)]
    pub alamat: String,
}

// ---- potential beneficiaries: GET /api/data-penerima-manfaat-mbg ----

#[derive(Debug, Default, Deserialize)]
pub struct PotentialResponse {
    #[serde(default)]
    pub data: PotentialData,
}

#[derive(Debug, Default, Deserialize)]
pub struct PotentialData {
    #[serde(default)]
    pub info: Vec<PotentialRecord>,
}

/// One row per wilayah. The education fields vary by source variant, hence
/// every one of them is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PotentialRecord {
    #[serde(default, rename = "Wilayah")]
    pub wilayah: String,
    #[serde(default, rename = "Total")]
    pub total: Option<RawCount>,
    #[serde(default, rename = "PAUD")]
    pub paud: Option<RawCount>,
    #[serde(default, rename = "TK")]
    pub tk: Option<RawCount>,
    #[serde(default, rename = "RA")]
    pub ra: Option<RawCount>,
    #[serde(default, rename = "KB")]
    pub kb: Option<RawCount>,
    #[serde(default, rename = "TPA")]
    pub tpa: Option<RawCount>,
    #[serde(default, rename = "SPS")]
    pub sps: Option<RawCount>,
    #[serde(default, rename = "SD")]
    pub sd: Option<RawCount>,
    #[serde(default, rename = "MI")]
    pub mi: Option<RawCount>,
    #[serde(default, rename = "SMP")]
    pub smp: Option<RawCount>,
    #[serde(default, rename = "MTs")]
    pub mts: Option<RawCount>,
    #[serde(default, rename = "SMA")]
    pub sma: Option<RawCount>,
    #[serde(default, rename = "SMK")]
    pub smk: Option<RawCount>,
    #[serde(default, rename = "MA")]
    pub ma: Option<RawCount>,
    #[serde(default, rename = "BALITA")]
    pub balita: Option<RawCount>,
    #[serde(default, rename = "BUMIL")]
    pub bumil: Option<RawCount>,
    #[serde(default, rename = "BUSUI")]
    pub busui: Option<RawCount>,
    #[serde(default, rename = "PESANTREN")]
    pub pesantren: Option<RawCount>,
    #[serde(default, rename = "SLB")]
    pub slb: Option<RawCount>,
    #[serde(default, rename = "PKBM")]
    pub pkbm: Option<RawCount>,
}

// ---- realization reports: GET /api/data/survey-penerima-manfaat-mbg-oleh-sppg ----

#[derive(Debug, Default, Deserialize)]
pub struct RealizationResponse {
    #[serde(default)]
    pub data: Vec<RealizationRow>,
}

#[derive(Debug, Deserialize)]
pub struct RealizationRow {
    pub detail: RealizationRecord,
}

/// One daily report row. Only used as aggregation input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RealizationRecord {
    #[serde(default)]
    pub kecamatan: String,
    #[serde(default)]
    pub desa: String,
    #[serde(default)]
    pub jumlah_lakilaki: Option<RawCount>,
    #[serde(default)]
    pub jumlah_perempuan: Option<RawCount>,
    #[serde(default)]
    pub nama_sppg: Option<String>,
    #[serde(default)]
    pub lokasi_koordinat: Option<String>,
}

// ---- targets: GET /api/target-penerima-manfaat-mbg ----

#[derive(Debug, Default, Deserialize)]
pub struct TargetResponse {
    #[serde(default)]
    pub data: TargetData,
}

#[derive(Debug, Default, Deserialize)]
pub struct TargetData {
    #[serde(default)]
    pub info: Vec<TargetRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetRecord {
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub total: Option<RawCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_count_accepts_strings_and_numbers() {
        let record: RealizationRecord = serde_json::from_str(
            r#"{"kecamatan":"SOREANG","desa":"X","jumlah_lakilaki":"3","jumlah_perempuan":2}"#,
        )
        .unwrap();
        assert_eq!(count_or_zero(record.jumlah_lakilaki.as_ref()), 3);
        assert_eq!(count_or_zero(record.jumlah_perempuan.as_ref()), 2);
        assert!(record.nama_sppg.is_none());
    }

    #[test]
    fn missing_potential_fields_decode_to_none() {
        let record: PotentialRecord =
            serde_json::from_str(r#"{"Wilayah":"SOREANG","Total":"10","SD":"4"}"#).unwrap();
        assert_eq!(count_or_zero(record.total.as_ref()), 10);
        assert_eq!(count_or_zero(record.sd.as_ref()), 4);
        assert_eq!(count_or_zero(record.mi.as_ref()), 0);
        assert_eq!(count_or_zero(record.pesantren.as_ref()), 0);
    }

    #[test]
    fn unparseable_counts_are_zero_not_errors() {
        let record: PotentialRecord =
            serde_json::from_str(r#"{"Total":"n/a","TK":""}"#).unwrap();
        assert_eq!(count_or_zero(record.total.as_ref()), 0);
        assert_eq!(count_or_zero(record.tk.as_ref()), 0);
    }

    #[test]
    fn grouped_target_totals_parse() {
        let target: TargetRecord =
            serde_json::from_str(r#"{"nama":"SOREANG","total":"1,000"}"#).unwrap();
        assert_eq!(grouped_count_or_zero(target.total.as_ref()), 1000);
    }

    #[test]
    fn facility_rows_nest_under_detail() {
        let response: SppgListResponse = serde_json::from_str(
            r#"{"total":2,"data":[
                {"detail":{"nama":"SPPG A","kecamatan":"SOREANG","desa":"D","alamat":"-6.9,107.5"}},
                {"detail":{"nama":"SPPG B","kecamatan":"PANGALENGAN","desa":"E","alamat":""}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(count_or_zero(response.total.as_ref()), 2);
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].detail.nama, "SPPG A");
    }
}
