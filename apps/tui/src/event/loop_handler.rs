use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::domain::{AnalyticalStats, HomeStats, KecamatanComparison};
use crate::ui;
use crate::ui::format::thousands;

/// Run the main application event loop.
///
/// Loads run inline on the cooperative loop: a phase is armed by state
/// (startup for home, first non-home navigation for analytical), a spinner
/// frame is drawn, then the fetch is awaited and its outcome committed under
/// the generation guard.
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    redraw(terminal, app);
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }

        drive_pending_work(terminal, app).await;
    }
    Ok(())
}

/// Kick off whichever fetch phase or chat round-trip is armed. At most one
/// writer runs at a time; the generation guard discards anything a newer
/// trigger has superseded.
async fn drive_pending_work(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) {
    if app.needs_home_load() {
        let generation = app.begin_home_load();
        redraw(terminal, app);
        let result = app.actions.load_home().await;
        app.commit_home(generation, result);
        redraw(terminal, app);
    }

    if app.needs_analytical_load() {
        let generation = app.begin_analytical_load();
        redraw(terminal, app);
        let result = app.actions.load_analytical().await;
        app.commit_analytical(generation, result);
        redraw(terminal, app);
    }

    if let Some(prompt) = app.chat_pending.take() {
        redraw(terminal, app);
        let reply = app.actions.ask_assistant(&prompt).await;
        app.push_assistant_reply(reply);
        redraw(terminal, app);
    }
}

fn redraw(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) {
    if terminal.draw(|f| ui::ui(app, f)).is_err() {
        // Non-fatal redraw error
    }
}

/// Run both phases once and print the rollups, for scripting and CI.
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let home = app.actions.load_home().await?;
    app.apply_home_data(home);

    let analytical = app.actions.load_analytical().await?;
    app.apply_analytical_data(analytical);

    if json {
        render_headless_json(app)?;
    } else {
        render_headless_stats(app);
    }

    Ok(())
}

fn render_headless_stats(app: &App) {
    let report = build_report(app);

    println!("\nMBG Kabupaten Bandung");
    println!("======================");
    println!("SPPG units: {}", report.home.total_sppg);
    println!(
        "Potential beneficiaries: {}",
        thousands(report.home.potensi_total)
    );

    println!("\nPotential by category:");
    for (label, value) in report.home.breakdown.entries() {
        println!("- {label}: {}", thousands(value));
    }

    println!("\nAchievement:");
    println!("- Target: {}", thousands(report.analytical.total_target));
    println!(
        "- Realization: {} ({:.1}%)",
        thousands(report.analytical.total_realization),
        report.overall_percentage
    );
    println!("- Laki-laki: {}", thousands(report.analytical.total_laki));
    println!(
        "- Perempuan: {}",
        thousands(report.analytical.total_perempuan)
    );

    println!("\nKecamatan comparison (by target):");
    for row in &report.kecamatan {
        println!(
            "- {} | target {} | realization {} | {:.1}% | {} SPPG",
            row.name,
            thousands(row.target),
            thousands(row.realization),
            row.percentage,
            row.sppg_count
        );
    }
}

fn render_headless_json(app: &App) -> Result<()> {
    let report = build_report(app);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

fn build_report(app: &App) -> HeadlessReport {
    HeadlessReport {
        home: app.home_stats,
        analytical: app.analytical_stats,
        overall_percentage: app.analytical_stats.overall_percentage(),
        kecamatan: app.kecamatan_comparison.clone(),
    }
}

#[derive(serde::Serialize)]
struct HeadlessReport {
    home: HomeStats,
    analytical: AnalyticalStats,
    overall_percentage: f64,
    kecamatan: Vec<KecamatanComparison>,
}
