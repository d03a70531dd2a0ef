//! Taranis Dashboard - Security Operations Monitoring
//!
//! Terminal dashboard over the built-in threat monitoring dataset:
//! - Situation overview with world threat map
//! - Threat, incident, intelligence and source panels
//! - Analytics charts for the reporting period
//!
//! Usage:
//!   taranis-dash [OPTIONS]
//!
//! Examples:
//!   taranis-dash                      # Open on the overview panel
//!   taranis-dash --panel incidents    # Open on a specific panel
//!   taranis-dash --snapshot           # Print the summary JSON and exit

mod navigation;
mod panels;
mod theme;
mod widgets;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use navigation::{Navigator, PanelId};
use panels::{
    AnalyticsPanel, IncidentsPanel, IntelligencePanel, OverviewPanel, SourcesPanel, ThreatsPanel,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};
use std::{io, sync::Mutex, time::Duration};
use taranis_core::{Catalog, DashboardSummary};
use theme::DashboardColors;
use tracing::{debug, error, Level};
use tracing_subscriber::EnvFilter;

/// Dashboard CLI arguments
#[derive(Parser)]
#[command(name = "taranis-dash")]
#[command(about = "Security operations dashboard for the Taranis platform")]
#[command(version)]
struct Args {
    /// Refresh interval in milliseconds
    #[arg(long, default_value = "1000")]
    refresh: u64,

    /// Starting panel
    #[arg(long, value_enum, default_value = "overview")]
    panel: PanelId,

    /// Print the dashboard summary as JSON and exit
    #[arg(long)]
    snapshot: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log file (the TUI owns stdout)
    #[arg(long, default_value = "/tmp/taranis-dash.log")]
    log_file: String,
}

/// Application state
struct App {
    navigator: Navigator,
    overview_panel: OverviewPanel,
    threats_panel: ThreatsPanel,
    incidents_panel: IncidentsPanel,
    intelligence_panel: IntelligencePanel,
    sources_panel: SourcesPanel,
    analytics_panel: AnalyticsPanel,
}

impl App {
    fn new(catalog: &Catalog, initial_panel: PanelId) -> Self {
        Self {
            navigator: Navigator::new(initial_panel),
            overview_panel: OverviewPanel::new(catalog),
            threats_panel: ThreatsPanel::new(catalog.threats.clone()),
            incidents_panel: IncidentsPanel::new(catalog.incidents.clone()),
            intelligence_panel: IntelligencePanel::new(catalog),
            sources_panel: SourcesPanel::new(catalog.sources.clone()),
            analytics_panel: AnalyticsPanel::new(
                catalog.threat_trend.clone(),
                catalog.severity_distribution.clone(),
                catalog.channel_volumes.clone(),
                catalog.region_volumes.clone(),
            ),
        }
    }

    /// Handle keyboard input; returns true to quit
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Right | KeyCode::Tab => self.navigator.next(),
            KeyCode::Left | KeyCode::BackTab => self.navigator.previous(),
            KeyCode::Char(c) => {
                if let Some(panel) = PanelId::from_shortcut(c) {
                    self.navigator.select(panel);
                }
            }
            _ => {}
        }
        false
    }

    /// Render the full dashboard frame
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_tabs(frame, chunks[1]);

        match self.navigator.active() {
            PanelId::Overview => self.overview_panel.render(frame, chunks[2]),
            PanelId::Threats => self.threats_panel.render(frame, chunks[2]),
            PanelId::Incidents => self.incidents_panel.render(frame, chunks[2]),
            PanelId::Intelligence => self.intelligence_panel.render(frame, chunks[2]),
            PanelId::Sources => self.sources_panel.render(frame, chunks[2]),
            PanelId::Analytics => self.analytics_panel.render(frame, chunks[2]),
        }

        self.render_footer(frame, chunks[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    "⛨ Taranis AI Enhanced",
                    Style::default()
                        .fg(DashboardColors::HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "  Plateforme de Cybersécurité Avancée — Centre de Cybersécurité du Sénégal",
                    Style::default().fg(DashboardColors::SECONDARY),
                ),
            ]),
            Line::from(vec![
                Span::raw("Sources "),
                Span::styled("✓ En ligne", Style::default().fg(DashboardColors::SUCCESS)),
                Span::raw("  •  Collecte "),
                Span::styled("✓ Actif", Style::default().fg(DashboardColors::SUCCESS)),
                Span::raw("  •  Analyses "),
                Span::styled("◐ En cours", Style::default().fg(DashboardColors::ACCENT)),
            ]),
        ];

        let header = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(header, area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let titles: Vec<Line> = PanelId::all()
            .iter()
            .map(|panel| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", panel.shortcut_key()),
                        Style::default().fg(DashboardColors::SECONDARY),
                    ),
                    Span::raw(panel.title()),
                ])
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.navigator.active().index())
            .highlight_style(
                Style::default()
                    .fg(DashboardColors::HEADER)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let footer = Paragraph::new(format!(
            "1-6 panneaux | ←/→ naviguer | q quitter — {}",
            self.navigator.active().title()
        ))
        .style(Style::default().fg(DashboardColors::SECONDARY));
        frame.render_widget(footer, area);
    }
}

/// Initialize tracing to the log file
fn init_logging(args: &Args) -> Result<()> {
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::new(format!(
        "taranis_dash={},taranis_core={}",
        level.as_str().to_lowercase(),
        level.as_str().to_lowercase()
    ));

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)
        .with_context(|| format!("failed to open log file {}", args.log_file))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    debug!("Dashboard v{} starting", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::builtin();

    if args.snapshot {
        let summary = DashboardSummary::compute(&catalog);
        println!("{}", summary.to_json()?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&catalog, args.panel);
    let result = run_app(&mut terminal, &mut app, args.refresh);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!("Error: {:?}", err);
        return Err(err);
    }

    debug!("Dashboard exiting cleanly");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    refresh_ms: u64,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // All work happens in response to a key event or the refresh tick;
        // the collections are static, so a redraw is always cheap.
        let timeout = Duration::from_millis(refresh_ms.clamp(50, 1000));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_on_requested_panel() {
        let app = App::new(&Catalog::builtin(), PanelId::Sources);
        assert_eq!(app.navigator.active(), PanelId::Sources);
    }

    #[test]
    fn test_shortcut_keys_select_panels() {
        let mut app = App::new(&Catalog::builtin(), PanelId::Overview);

        assert!(!app.handle_key(KeyCode::Char('3')));
        assert_eq!(app.navigator.active(), PanelId::Incidents);

        assert!(!app.handle_key(KeyCode::Char('1')));
        assert_eq!(app.navigator.active(), PanelId::Overview);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut app = App::new(&Catalog::builtin(), PanelId::Overview);
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.navigator.active(), PanelId::Overview);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&Catalog::builtin(), PanelId::Overview);
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Esc));
    }

    #[test]
    fn test_arrow_keys_cycle() {
        let mut app = App::new(&Catalog::builtin(), PanelId::Overview);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.navigator.active(), PanelId::Threats);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.navigator.active(), PanelId::Overview);
    }
}
