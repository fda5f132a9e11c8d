use crate::api::models::PotentialRecord;
use crate::api::ApiError;
use crate::app::actions::{AnalyticalData, AppActions, HomeData};
use crate::config::ErrorSurfacing;
use crate::domain::{AnalyticalStats, HomeStats, KecamatanComparison, SppgUnit};
use crate::stats::aggregate::kecamatan_key;
use crate::stats::merge_sppg_realization;
use std::collections::BTreeSet;
use tracing::warn;

/// Sentinel entry in the kecamatan filter meaning "no region filter".
pub const ALL_KECAMATAN: &str = "SEMUA";

/// User-facing message for a failed home sync, mirroring the upstream
/// portal's wording.
pub const HOME_SYNC_ERROR: &str = "Gagal sinkronisasi data utama.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Home,
    Capaian,
    Sppg,
    SppgDetail,
    Chat,
}

/// Lifecycle of one fetch phase. `Idle` arms the loader; a failed phase is
/// re-armed by renewed navigation while its dataset is still empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub status_message: String,
    pub data_error: Option<String>,
    pub last_synced: Option<chrono::DateTime<chrono::Local>>,

    pub home_phase: LoadPhase,
    pub analytical_phase: LoadPhase,
    home_generation: u64,
    analytical_generation: u64,

    pub home_stats: HomeStats,
    pub analytical_stats: AnalyticalStats,
    pub potensi_rows: Vec<PotentialRecord>,
    pub potensi_scroll: usize,
    pub sppg_list: Vec<SppgUnit>,
    pub kecamatan_comparison: Vec<KecamatanComparison>,

    pub sppg_search: String,
    pub search_active: bool,
    pub kecamatan_options: Vec<String>,
    pub kecamatan_filter_index: usize,
    pub filtered_sppg_indices: Vec<usize>,
    pub selected_row_index: usize,
    pub selected_comparison_index: usize,
    pub detail_unit_index: Option<usize>,

    pub chat_input: String,
    pub chat_messages: Vec<ChatMessage>,
    pub chat_pending: Option<String>,
    pub chat_waiting: bool,

    pub throbber: throbber_widgets_tui::ThrobberState,

    pub actions: AppActions,
}

impl App {
    pub fn new(actions: AppActions) -> Self {
        Self {
            running: true,
            screen: AppScreen::Home,
            show_help: false,
            status_message: String::new(),
            data_error: None,
            last_synced: None,
            home_phase: LoadPhase::Idle,
            analytical_phase: LoadPhase::Idle,
            home_generation: 0,
            analytical_generation: 0,
            home_stats: HomeStats::default(),
            analytical_stats: AnalyticalStats::default(),
            potensi_rows: Vec::new(),
            potensi_scroll: 0,
            sppg_list: Vec::new(),
            kecamatan_comparison: Vec::new(),
            sppg_search: String::new(),
            search_active: false,
            kecamatan_options: vec![ALL_KECAMATAN.to_string()],
            kecamatan_filter_index: 0,
            filtered_sppg_indices: Vec::new(),
            selected_row_index: 0,
            selected_comparison_index: 0,
            detail_unit_index: None,
            chat_input: String::new(),
            chat_messages: Vec::new(),
            chat_pending: None,
            chat_waiting: false,
            throbber: throbber_widgets_tui::ThrobberState::default(),
            actions,
        }
    }

    /// Per-frame tick; keeps the spinner moving while anything is in flight.
    pub fn update(&mut self) {
        if self.home_phase == LoadPhase::Loading
            || self.analytical_phase == LoadPhase::Loading
            || self.chat_waiting
        {
            self.throbber.calc_next();
        }
    }

    pub fn navigate_to(&mut self, screen: AppScreen) {
        self.screen = screen;
        self.status_message.clear();

        // Renewed navigation re-arms a failed analytical load as long as no
        // target data has ever been committed.
        if matches!(
            screen,
            AppScreen::Capaian | AppScreen::Sppg | AppScreen::SppgDetail
        ) && self.analytical_phase == LoadPhase::Failed
            && self.analytical_stats.total_target == 0
        {
            self.analytical_phase = LoadPhase::Idle;
        }
    }

    // ---- home phase ----

    pub const fn needs_home_load(&self) -> bool {
        matches!(self.home_phase, LoadPhase::Idle)
    }

    pub fn begin_home_load(&mut self) -> u64 {
        self.home_phase = LoadPhase::Loading;
        self.data_error = None;
        self.home_generation += 1;
        self.home_generation
    }

    /// Commit a home-load outcome. A completion from a superseded trigger is
    /// discarded instead of racing the newer one.
    pub fn commit_home(&mut self, generation: u64, result: Result<HomeData, ApiError>) {
        if generation != self.home_generation {
            warn!(generation, "discarding stale home load result");
            return;
        }

        match result {
            Ok(data) => {
                self.apply_home_data(data);
                self.home_phase = LoadPhase::Loaded;
                self.last_synced = Some(chrono::Local::now());
            }
            Err(error) => {
                warn!(error = %error, "home load failed");
                self.home_phase = LoadPhase::Failed;
                self.data_error = Some(HOME_SYNC_ERROR.to_string());
            }
        }
    }

    pub fn apply_home_data(&mut self, data: HomeData) {
        self.home_stats = data.stats;
        self.potensi_rows = data.potensi_rows;
        self.potensi_scroll = 0;
        self.sppg_list = data.units;
        self.detail_unit_index = None;
        self.selected_row_index = 0;
        self.recompute_directory();
    }

    /// Re-arm both phases, the way a full page reload would: the home load
    /// runs immediately, the analytical one lazily on the next data view.
    pub fn request_home_refresh(&mut self) {
        self.home_phase = LoadPhase::Idle;
        self.analytical_phase = LoadPhase::Idle;
        self.analytical_stats = AnalyticalStats::default();
        self.kecamatan_comparison.clear();
        self.status_message = "Sinkronisasi ulang...".to_string();
    }

    // ---- analytical phase ----

    /// The analytical dataset loads lazily, the first time any data view
    /// other than home is active, guarded by the target total still being
    /// zero.
    pub const fn needs_analytical_load(&self) -> bool {
        matches!(
            self.screen,
            AppScreen::Capaian | AppScreen::Sppg | AppScreen::SppgDetail
        ) && self.analytical_stats.total_target == 0
            && matches!(self.analytical_phase, LoadPhase::Idle)
    }

    pub fn begin_analytical_load(&mut self) -> u64 {
        self.analytical_phase = LoadPhase::Loading;
        self.analytical_generation += 1;
        self.analytical_generation
    }

    pub fn commit_analytical(&mut self, generation: u64, result: Result<AnalyticalData, ApiError>) {
        if generation != self.analytical_generation {
            warn!(generation, "discarding stale analytical load result");
            return;
        }

        match result {
            Ok(data) => {
                self.apply_analytical_data(data);
                self.analytical_phase = LoadPhase::Loaded;
            }
            Err(error) => {
                self.analytical_phase = LoadPhase::Failed;
                match self.actions.config.analytical_errors {
                    ErrorSurfacing::LogOnly => {
                        warn!(error = %error, "analytical load failed, keeping previous state");
                    }
                    ErrorSurfacing::Surface => {
                        warn!(error = %error, "analytical load failed");
                        self.data_error = Some("Gagal memuat data capaian.".to_string());
                    }
                }
            }
        }
    }

    pub fn apply_analytical_data(&mut self, data: AnalyticalData) {
        self.analytical_stats = data.stats;
        self.kecamatan_comparison = data.comparison;
        merge_sppg_realization(&mut self.sppg_list, &data.per_sppg);
        self.selected_comparison_index = 0;
    }

    // ---- directory projections ----

    /// Rebuild the kecamatan options and the filtered unit list. The options
    /// are the distinct unit kecamatans plus the SEMUA sentinel, all sorted
    /// together lexicographically.
    pub fn recompute_directory(&mut self) {
        let previous = self.selected_kecamatan().to_string();

        let mut options: BTreeSet<String> = self
            .sppg_list
            .iter()
            .map(|unit| unit.kecamatan.clone())
            .collect();
        options.insert(ALL_KECAMATAN.to_string());
        self.kecamatan_options = options.into_iter().collect();

        self.kecamatan_filter_index = self
            .kecamatan_options
            .iter()
            .position(|option| *option == previous)
            .or_else(|| {
                self.kecamatan_options
                    .iter()
                    .position(|option| option == ALL_KECAMATAN)
            })
            .unwrap_or(0);

        self.refilter();
    }

    /// Recompute the filtered view of the directory: case-insensitive
    /// containment on unit name or kecamatan, intersected with the region
    /// filter.
    pub fn refilter(&mut self) {
        let needle = self.sppg_search.to_lowercase();
        let selected = self.selected_kecamatan().to_string();

        self.filtered_sppg_indices = self
            .sppg_list
            .iter()
            .enumerate()
            .filter(|(_, unit)| {
                let matches_search = needle.is_empty()
                    || unit.nama.to_lowercase().contains(&needle)
                    || unit.kecamatan.to_lowercase().contains(&needle);
                let matches_kecamatan =
                    selected == ALL_KECAMATAN || unit.kecamatan == selected;
                matches_search && matches_kecamatan
            })
            .map(|(index, _)| index)
            .collect();

        if self.selected_row_index >= self.filtered_sppg_indices.len() {
            self.selected_row_index = self.filtered_sppg_indices.len().saturating_sub(1);
        }
    }

    pub fn selected_kecamatan(&self) -> &str {
        self.kecamatan_options
            .get(self.kecamatan_filter_index)
            .map_or(ALL_KECAMATAN, String::as_str)
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.sppg_search.push(ch);
        self.refilter();
    }

    pub fn pop_search_char(&mut self) {
        self.sppg_search.pop();
        self.refilter();
    }

    pub fn clear_search(&mut self) {
        self.sppg_search.clear();
        self.search_active = false;
        self.refilter();
    }

    pub fn cycle_kecamatan_filter(&mut self, forward: bool) {
        let len = self.kecamatan_options.len();
        if len == 0 {
            return;
        }
        self.kecamatan_filter_index = if forward {
            (self.kecamatan_filter_index + 1) % len
        } else {
            (self.kecamatan_filter_index + len - 1) % len
        };
        self.refilter();
    }

    /// The unit currently highlighted in the directory table.
    pub fn selected_unit(&self) -> Option<&SppgUnit> {
        self.filtered_sppg_indices
            .get(self.selected_row_index)
            .and_then(|&index| self.sppg_list.get(index))
    }

    pub fn open_selected_detail(&mut self) {
        if let Some(&index) = self.filtered_sppg_indices.get(self.selected_row_index) {
            self.detail_unit_index = Some(index);
            self.navigate_to(AppScreen::SppgDetail);
        }
    }

    pub fn detail_unit(&self) -> Option<&SppgUnit> {
        self.detail_unit_index
            .and_then(|index| self.sppg_list.get(index))
    }

    // ---- detail derivations ----

    /// Share of the global realization served by this unit, 0.0 while no
    /// realization data is loaded.
    pub fn unit_contribution(&self, unit: &SppgUnit) -> f64 {
        if self.analytical_stats.total_realization == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            (unit.total_realization as f64 / self.analytical_stats.total_realization as f64) * 100.0
        }
    }

    /// The comparison row for a unit's kecamatan, joined case-insensitively.
    pub fn comparison_for_kecamatan(&self, kecamatan: &str) -> Option<&KecamatanComparison> {
        let key = kecamatan_key(kecamatan);
        self.kecamatan_comparison
            .iter()
            .find(|row| kecamatan_key(&row.name) == key)
    }

    // ---- chat ----

    pub fn submit_chat_prompt(&mut self) {
        let prompt = self.chat_input.trim().to_string();
        if prompt.is_empty() || self.chat_waiting {
            return;
        }
        self.chat_messages.push(ChatMessage {
            role: ChatRole::User,
            text: prompt.clone(),
        });
        self.chat_input.clear();
        self.chat_pending = Some(prompt);
        self.chat_waiting = true;
    }

    pub fn push_assistant_reply(&mut self, text: String) {
        self.chat_messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text,
        });
        self.chat_waiting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Endpoints, ErrorSurfacing};
    use crate::domain::PotentialBreakdown;
    use crate::stats::SppgTally;
    use std::collections::HashMap;

    fn test_app() -> App {
        let config = AppConfig {
            endpoints: Endpoints::from_bases("http://localhost:0", "http://localhost:0"),
            analytical_errors: ErrorSurfacing::LogOnly,
        };
        App::new(AppActions::new(config))
    }

    fn unit(nama: &str, kecamatan: &str) -> SppgUnit {
        SppgUnit::new(nama.into(), kecamatan.into(), "Desa".into(), String::new())
    }

    fn app_with_units(units: Vec<SppgUnit>) -> App {
        let mut app = test_app();
        app.apply_home_data(HomeData {
            stats: HomeStats {
                total_sppg: units.len() as i64,
                potensi_total: 0,
                breakdown: PotentialBreakdown::default(),
            },
            potensi_rows: Vec::new(),
            units,
        });
        app
    }

    #[test]
    fn kecamatan_options_include_sorted_sentinel() {
        let app = app_with_units(vec![
            unit("SPPG Unit Soreang", "SOREANG"),
            unit("SPPG Pangalengan", "PANGALENGAN"),
            unit("SPPG Soreang 2", "SOREANG"),
        ]);
        // SEMUA sorts in with the real names, duplicates collapse
        assert_eq!(app.kecamatan_options, ["PANGALENGAN", "SEMUA", "SOREANG"]);
        assert_eq!(app.selected_kecamatan(), "SEMUA");
    }

    #[test]
    fn search_matches_name_or_kecamatan_case_insensitively() {
        let mut app = app_with_units(vec![
            unit("SPPG Unit Soreang", "SOREANG"),
            unit("Dapur Pangalengan", "PANGALENGAN"),
            unit("SPPG Baleendah", "BALEENDAH"),
        ]);
        for ch in "unit".chars() {
            app.push_search_char(ch);
        }
        let names: Vec<&str> = app
            .filtered_sppg_indices
            .iter()
            .map(|&i| app.sppg_list[i].nama.as_str())
            .collect();
        assert_eq!(names, ["SPPG Unit Soreang"]);
    }

    #[test]
    fn region_filter_restricts_and_sentinel_does_not() {
        let mut app = app_with_units(vec![
            unit("A", "SOREANG"),
            unit("B", "PANGALENGAN"),
            unit("C", "SOREANG"),
        ]);
        // options are [PANGALENGAN, SEMUA, SOREANG]; move to SOREANG
        app.kecamatan_filter_index = 2;
        app.refilter();
        assert_eq!(app.filtered_sppg_indices, [0, 2]);

        app.kecamatan_filter_index = 1;
        app.refilter();
        assert_eq!(app.filtered_sppg_indices, [0, 1, 2]);
    }

    #[test]
    fn filter_selection_survives_list_reload() {
        let mut app = app_with_units(vec![unit("A", "SOREANG"), unit("B", "PANGALENGAN")]);
        app.kecamatan_filter_index = app
            .kecamatan_options
            .iter()
            .position(|k| k == "SOREANG")
            .unwrap();
        app.recompute_directory();
        assert_eq!(app.selected_kecamatan(), "SOREANG");
    }

    #[test]
    fn analytical_merge_updates_existing_units_only() {
        let mut app = app_with_units(vec![unit("X", "SOREANG"), unit("Y", "SOREANG")]);
        let mut per_sppg = HashMap::new();
        per_sppg.insert(
            "X".to_string(),
            SppgTally {
                laki: 4,
                perempuan: 2,
            },
        );
        per_sppg.insert(
            "GHOST".to_string(),
            SppgTally {
                laki: 9,
                perempuan: 9,
            },
        );
        app.apply_analytical_data(AnalyticalData {
            stats: AnalyticalStats {
                total_laki: 4,
                total_perempuan: 2,
                total_target: 100,
                total_realization: 6,
            },
            comparison: Vec::new(),
            per_sppg,
        });
        assert_eq!(app.sppg_list.len(), 2);
        assert_eq!(app.sppg_list[0].total_realization, 6);
        assert_eq!(app.sppg_list[1].total_realization, 0);
    }

    #[test]
    fn contribution_is_zero_without_global_realization() {
        let app = app_with_units(vec![unit("X", "SOREANG")]);
        assert_eq!(app.unit_contribution(&app.sppg_list[0]), 0.0);
    }

    #[test]
    fn analytical_load_arms_only_on_data_views_until_target_known() {
        let mut app = test_app();
        assert!(!app.needs_analytical_load());

        app.navigate_to(AppScreen::Capaian);
        assert!(app.needs_analytical_load());

        app.begin_analytical_load();
        assert!(!app.needs_analytical_load());

        // a committed target total closes the guard for the session
        app.analytical_stats.total_target = 500;
        app.analytical_phase = LoadPhase::Loaded;
        assert!(!app.needs_analytical_load());
    }

    #[test]
    fn renewed_navigation_rearms_failed_analytical_load() {
        let mut app = test_app();
        app.navigate_to(AppScreen::Capaian);
        let generation = app.begin_analytical_load();
        app.commit_analytical(
            generation,
            Err(crate::api::ApiError::Status {
                endpoint: "targets",
                status: reqwest::StatusCode::BAD_GATEWAY,
            }),
        );
        assert_eq!(app.analytical_phase, LoadPhase::Failed);
        // log-only policy keeps the error banner clear
        assert!(app.data_error.is_none());

        app.navigate_to(AppScreen::Sppg);
        assert!(app.needs_analytical_load());
    }

    #[test]
    fn stale_generation_results_are_discarded() {
        let mut app = test_app();
        let stale = app.begin_home_load();
        let _current = app.begin_home_load();
        app.commit_home(
            stale,
            Err(crate::api::ApiError::Status {
                endpoint: "potential",
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }),
        );
        // the stale failure must not flip the newer in-flight load
        assert_eq!(app.home_phase, LoadPhase::Loading);
        assert!(app.data_error.is_none());
    }

    #[test]
    fn comparison_lookup_ignores_case() {
        let mut app = test_app();
        app.kecamatan_comparison = vec![KecamatanComparison {
            name: "Soreang".to_string(),
            target: 1000,
            realization: 250,
            percentage: 25.0,
            sppg_count: 2,
        }];
        assert!(app.comparison_for_kecamatan("SOREANG").is_some());
        assert!(app.comparison_for_kecamatan("soreang").is_some());
        assert!(app.comparison_for_kecamatan("CIWIDEY").is_none());
    }
}
