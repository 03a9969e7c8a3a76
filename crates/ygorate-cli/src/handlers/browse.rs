use anyhow::Result;
use is_terminal::IsTerminal;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use ygorate_client::{CardApi, CardDetail, CardKey, DetailFetcher, FetchOutcome};
use ygorate_engine::{resolve_review, Catalog, FsReviewStore, ViewMode, ViewState};

/// Interactive catalog viewer.
///
/// Collections mode lists packs with counts; Single mode shows one card with
/// its remote details and review; List mode shows the whole pool. Remote
/// details load in the background and a stale response never overwrites the
/// card selected after it.
pub fn handle(data_dir: &Path, api: CardApi) -> Result<()> {
    // Not interactive; show the collections overview instead.
    if !io::stdout().is_terminal() {
        return super::packs::handle(data_dir, crate::types::OutputFormat::Plain);
    }

    let catalog = Catalog::load(data_dir)?;
    if catalog.is_empty() {
        println!("No cards found under {}", data_dir.display());
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let (fetcher, rx) = DetailFetcher::new(api, runtime.handle().clone());
    let store = FsReviewStore::new(data_dir);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let result = run_loop(&mut terminal, App::new(catalog, store, fetcher), rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

struct App {
    catalog: Catalog,
    view: ViewState,
    store: FsReviewStore,
    fetcher: DetailFetcher,
    /// Cursor into the pack label list in Collections mode.
    pack_cursor: usize,
    /// Key the detail panel is currently tracking.
    shown_key: Option<CardKey>,
    detail: Option<CardDetail>,
    detail_error: Option<String>,
    review: String,
}

impl App {
    fn new(catalog: Catalog, store: FsReviewStore, fetcher: DetailFetcher) -> Self {
        Self {
            catalog,
            view: ViewState::new(),
            store,
            fetcher,
            pack_cursor: 0,
            shown_key: None,
            detail: None,
            detail_error: None,
            review: String::new(),
        }
    }

    /// Re-key the detail panel to the card under the cursor. Supersedes any
    /// in-flight fetch when the selection actually changed.
    fn sync_selection(&mut self) {
        let Some(item) = self.view.current(&self.catalog) else {
            self.shown_key = None;
            self.detail = None;
            self.detail_error = None;
            self.review.clear();
            self.fetcher.cancel();
            return;
        };

        let key = CardKey::new(item.id, &item.name);
        if self.shown_key.as_ref() == Some(&key) {
            return;
        }

        self.review = resolve_review(item, &self.store);
        self.detail = None;
        self.detail_error = None;
        self.shown_key = Some(key.clone());
        self.fetcher.request(key);
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if !self.fetcher.is_current(outcome.generation()) {
            return;
        }
        match outcome {
            FetchOutcome::Loaded { card, .. } => {
                self.detail = Some(*card);
                self.detail_error = None;
            }
            FetchOutcome::Failed { message, .. } => {
                self.detail = None;
                self.detail_error = Some(message);
            }
        }
    }

    fn cycle_pack(&mut self, forward: bool) {
        let labels = self.catalog.pack_labels();
        let current = labels
            .iter()
            .position(|label| label == self.view.selected_pack())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % labels.len()
        } else {
            (current + labels.len() - 1) % labels.len()
        };
        self.view
            .change_pack_preserving_selection(&self.catalog, &labels[next]);
    }

    fn select_pack_under_cursor(&mut self) {
        let labels = self.catalog.pack_labels();
        if let Some(label) = labels.get(self.pack_cursor) {
            self.view.set_pack_filter(label.clone());
            self.view.set_mode(ViewMode::Single);
        }
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    rx: Receiver<FetchOutcome>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();
    let mut should_quit = false;

    while !should_quit {
        terminal.draw(|f| draw(f, &mut app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    should_quit = handle_key(&mut app, key.code);
                }
            }
        }

        while let Ok(outcome) = rx.try_recv() {
            app.apply_outcome(outcome);
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Returns true when the app should quit.
fn handle_key(app: &mut App, code: KeyCode) -> bool {
    match app.view.mode() {
        ViewMode::Collections => match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Down | KeyCode::Char('j') => {
                let len = app.catalog.pack_labels().len();
                if app.pack_cursor + 1 < len {
                    app.pack_cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.pack_cursor = app.pack_cursor.saturating_sub(1);
            }
            KeyCode::Enter => {
                app.select_pack_under_cursor();
                app.sync_selection();
            }
            _ => {}
        },

        ViewMode::Single => match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Char('c') => app.view.set_mode(ViewMode::Collections),
            KeyCode::Char('l') | KeyCode::Tab => app.view.set_mode(ViewMode::List),
            KeyCode::Left | KeyCode::Char('h') => {
                app.view.go_prev(&app.catalog);
                app.sync_selection();
            }
            KeyCode::Right => {
                app.view.go_next(&app.catalog);
                app.sync_selection();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.cycle_pack(false);
                app.sync_selection();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.cycle_pack(true);
                app.sync_selection();
            }
            _ => {}
        },

        ViewMode::List => match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Char('c') => app.view.set_mode(ViewMode::Collections),
            KeyCode::Enter | KeyCode::Tab => app.view.set_mode(ViewMode::Single),
            KeyCode::Up | KeyCode::Char('k') => {
                app.view.go_prev(&app.catalog);
                app.sync_selection();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.view.go_next(&app.catalog);
                app.sync_selection();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                app.cycle_pack(false);
                app.sync_selection();
            }
            KeyCode::Right => {
                app.cycle_pack(true);
                app.sync_selection();
            }
            _ => {}
        },
    }
    false
}

fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match app.view.mode() {
        ViewMode::Collections => draw_collections(f, app, chunks[1]),
        ViewMode::Single => draw_single(f, app, chunks[1]),
        ViewMode::List => draw_list(f, app, chunks[1]),
    }

    draw_footer(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let pool_len = app.view.filtered(&app.catalog).len();
    let position = if pool_len == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", app.view.index() + 1, pool_len)
    };

    let header = Line::from(vec![
        Span::styled("ygorate", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(
            app.view.selected_pack().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.view.mode() {
        ViewMode::Collections => "enter select pack | up/down move | q quit",
        ViewMode::Single => "left/right card | up/down pack | l list | c packs | q quit",
        ViewMode::List => "up/down card | left/right pack | enter open | c packs | q quit",
    };
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_collections(f: &mut Frame, app: &mut App, area: Rect) {
    let counts = app.catalog.pack_counts();
    let total = app.catalog.len();

    let mut rows = vec![ListItem::new(format!("All  ({} cards)", total))];
    rows.extend(
        counts
            .iter()
            .map(|(pack, count)| ListItem::new(format!("{}  ({} cards)", pack, count))),
    );

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title("Packs"))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.pack_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_single(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let Some(item) = app.view.current(&app.catalog) else {
        f.render_widget(
            Paragraph::new("No cards in this pack")
                .block(Block::default().borders(Borders::ALL).title("Card")),
            columns[0],
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            item.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Passcode: {}",
            item.id.map(|id| id.to_string()).unwrap_or_else(|| "?".into())
        )),
        Line::from(format!("Pack: {}", item.pack)),
        Line::from(vec![
            Span::raw("Rating: "),
            Span::styled(
                format!("{:.1}", item.rating),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
    ];

    if let Some(detail) = &app.detail {
        lines.push(Line::from(format!("{} / {}", detail.card_type, detail.race)));
        if let Some(attribute) = &detail.attribute {
            lines.push(Line::from(format!("Attribute: {}", attribute)));
        }
        if let Some(level) = detail.level {
            lines.push(Line::from(format!("Level: {}", level)));
        }
        if let Some(linkval) = detail.linkval {
            lines.push(Line::from(format!("Link: {}", linkval)));
        }
        if let (Some(atk), Some(def)) = (detail.atk, detail.def) {
            lines.push(Line::from(format!("ATK/DEF: {}/{}", atk, def)));
        } else if let Some(atk) = detail.atk {
            lines.push(Line::from(format!("ATK: {}", atk)));
        }
        if let Some(archetype) = &detail.archetype {
            lines.push(Line::from(format!("Archetype: {}", archetype)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(detail.desc.clone()));
    } else if let Some(error) = &app.detail_error {
        lines.push(Line::from(Span::styled(
            format!("Details unavailable: {}", error),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Loading details...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Card"))
            .wrap(Wrap { trim: false }),
        columns[0],
    );

    let review = if app.review.is_empty() {
        Span::styled("No review", Style::default().fg(Color::DarkGray)).into()
    } else {
        Line::from(app.review.clone())
    };
    f.render_widget(
        Paragraph::new(review)
            .block(Block::default().borders(Borders::ALL).title("Review"))
            .wrap(Wrap { trim: false }),
        columns[1],
    );
}

fn draw_list(f: &mut Frame, app: &mut App, area: Rect) {
    let pool = app.view.filtered(&app.catalog);

    let rows: Vec<ListItem> = pool
        .iter()
        .map(|item| {
            let id = item
                .id
                .map(|id| format!("#{}", id))
                .unwrap_or_else(|| "#?".to_string());
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>10}  ", id), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{:>4.1}  ", item.rating),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(item.name.clone()),
            ]))
        })
        .collect();

    let title = format!("Cards in {}", app.view.selected_pack());
    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !pool.is_empty() {
        state.select(Some(app.view.index().min(pool.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}
