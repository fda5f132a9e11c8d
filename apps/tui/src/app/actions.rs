use crate::api::models::{count_or_zero, PotentialRecord};
use crate::api::{assistant, ApiClient, ApiError};
use crate::config::AppConfig;
use crate::domain::{AnalyticalStats, HomeStats, KecamatanComparison, SppgUnit};
use crate::stats::{self, SppgTally};
use std::collections::HashMap;

/// Fetch orchestration. Owns the HTTP client; each load issues both of its
/// phase's requests before awaiting either, waits for both to settle, and
/// hands back a plain data struct for the app state to commit.
#[derive(Debug)]
pub struct AppActions {
    client: ApiClient,
    pub config: AppConfig,
}

/// Result of a successful home load.
#[derive(Debug)]
pub struct HomeData {
    pub stats: HomeStats,
    pub potensi_rows: Vec<PotentialRecord>,
    pub units: Vec<SppgUnit>,
}

/// Result of a successful analytical load.
#[derive(Debug)]
pub struct AnalyticalData {
    pub stats: AnalyticalStats,
    pub comparison: Vec<KecamatanComparison>,
    pub per_sppg: HashMap<String, SppgTally>,
}

impl AppActions {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: ApiClient::new(config.endpoints.clone()),
            config,
        }
    }

    /// Home phase: facility list + potential beneficiaries. Fails atomically
    /// when either request fails, so the summary never renders half-loaded.
    pub async fn load_home(&self) -> Result<HomeData, ApiError> {
        let (potential, units) = tokio::join!(
            self.client.fetch_potential(),
            self.client.fetch_sppg_units()
        );
        let potential = potential?;
        let units_response = units?;

        let (potensi_total, breakdown) = stats::transform_potential(&potential.data.info);
        let total_sppg = count_or_zero(units_response.total.as_ref());

        let units = units_response
            .data
            .into_iter()
            .map(|row| {
                SppgUnit::new(
                    row.detail.nama,
                    row.detail.kecamatan,
                    row.detail.desa,
                    row.detail.alamat,
                )
            })
            .collect();

        Ok(HomeData {
            stats: HomeStats {
                total_sppg,
                potensi_total,
                breakdown,
            },
            potensi_rows: potential.data.info,
            units,
        })
    }

    /// Analytical phase: realization reports + targets.
    pub async fn load_analytical(&self) -> Result<AnalyticalData, ApiError> {
        let (realizations, targets) = tokio::join!(
            self.client.fetch_realizations(),
            self.client.fetch_targets()
        );
        let realizations = realizations?;
        let targets = targets?;

        let records: Vec<_> = realizations.data.into_iter().map(|row| row.detail).collect();
        let rollup = stats::transform_realization(&records);
        let (total_target, comparison) =
            stats::build_kecamatan_comparison(&targets.data.info, &rollup);

        Ok(AnalyticalData {
            stats: AnalyticalStats {
                total_laki: rollup.total_laki,
                total_perempuan: rollup.total_perempuan,
                total_target,
                total_realization: rollup.total,
            },
            comparison,
            per_sppg: rollup.per_sppg,
        })
    }

    pub async fn ask_assistant(&self, prompt: &str) -> String {
        assistant::ask_assistant(self.client.http(), prompt).await
    }
}
