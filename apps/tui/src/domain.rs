use serde::Serialize;

/// One SPPG unit (local nutrition-service kitchen) as shown in the
/// directory. Identity is the unit name; upstream asserts uniqueness, we do
/// not enforce it. The three counters stay zero until the analytical phase
/// merges realization data in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SppgUnit {
    pub nama: String,
    pub kecamatan: String,
    pub desa: String,
    pub lokasi: String,
    pub total_laki: i64,
    pub total_perempuan: i64,
    pub total_realization: i64,
}

impl SppgUnit {
    pub const fn new(nama: String, kecamatan: String, desa: String, lokasi: String) -> Self {
        Self {
            nama,
            kecamatan,
            desa,
            lokasi,
            total_laki: 0,
            total_perempuan: 0,
            total_realization: 0,
        }
    }
}

/// Per-kecamatan target vs realization row. `percentage` is 0.0 when the
/// target is 0 and is not clamped above 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KecamatanComparison {
    pub name: String,
    pub target: i64,
    pub realization: i64,
    pub percentage: f64,
    pub sppg_count: usize,
}

/// Potential-beneficiary counts grouped into the eight fixed presentation
/// categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PotentialBreakdown {
    pub paud_tk: i64,
    pub sd_mi: i64,
    pub smp_mts: i64,
    pub sma_smk_ma: i64,
    pub balita: i64,
    pub bumil: i64,
    pub busui: i64,
    pub pesantren_lain: i64,
}

impl PotentialBreakdown {
    /// Category labels paired with their values, in presentation order.
    pub const fn entries(&self) -> [(&'static str, i64); 8] {
        [
            ("PAUD/TK", self.paud_tk),
            ("SD/MI", self.sd_mi),
            ("SMP/MTs", self.smp_mts),
            ("SMA/SMK/MA", self.sma_smk_ma),
            ("Balita", self.balita),
            ("Ibu Hamil", self.bumil),
            ("Ibu Menyusui", self.busui),
            ("Pesantren/Lainnya", self.pesantren_lain),
        ]
    }
}

/// Home summary scalars, recomputed wholesale on every home load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HomeStats {
    pub total_sppg: i64,
    pub potensi_total: i64,
    pub breakdown: PotentialBreakdown,
}

/// Achievement scalars, recomputed wholesale on every analytical load.
/// `total_target == 0` doubles as the "not loaded yet" guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalyticalStats {
    pub total_laki: i64,
    pub total_perempuan: i64,
    pub total_target: i64,
    pub total_realization: i64,
}

impl AnalyticalStats {
    /// Overall achievement, 0.0 while no target is known.
    pub fn overall_percentage(&self) -> f64 {
        if self.total_target == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            (self.total_realization as f64 / self.total_target as f64) * 100.0
        }
    }
}
