mod app;
mod event;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEvent,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{LevelFilter, error, info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use lettr::config::Config;
use lettr::logging::{self, FileLogger};
use lettr::session::{Action, Direction, Mode};
use lettr::speech::{CommandSpeaker, Silent, Speaker};

use app::App;
use event::{AppEvent, EventHandler};
use ui::components::feedback_banner::FeedbackBanner;
use ui::components::flashcard::Flashcard;
use ui::components::header::Header;
use ui::components::letter_strip::LetterStrip;
use ui::components::option_grid::OptionGrid;
use ui::layout::{AppLayout, GameLayout, LearnLayout, hit_test, pack_hint_lines};
use ui::theme::Theme;

#[derive(Parser)]
#[command(name = "lettr", version, about = "Terminal alphabet flashcards and letter matching game")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, value_enum, help = "Mode to start in")]
    mode: Option<Mode>,

    #[arg(long, help = "Seed for round generation (reproducible games)")]
    seed: Option<u64>,

    #[arg(long, help = "Milliseconds to show answer feedback before the next round")]
    delay_ms: Option<u64>,

    #[arg(long, help = "Disable speech")]
    mute: bool,

    #[arg(long, help = "Log level (off, error, warn, info, debug, trace)")]
    log_level: Option<String>,

    #[arg(long, help = "Write the effective configuration to the config file and exit")]
    write_config: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(ref theme) = self.theme {
            config.theme = theme.clone();
        }
        if let Some(mode) = self.mode {
            config.start_mode = mode;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.feedback_delay_ms = delay_ms;
        }
        if self.mute {
            config.speech_enabled = false;
        }
        if let Some(ref level) = self.log_level {
            config.log_level = level.clone();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    cli.apply(&mut config);
    let corrections = config.normalize();

    if cli.write_config {
        config.save()?;
        println!("Wrote {}", Config::config_path().display());
        return Ok(());
    }

    let level = logging::parse_level(&config.log_level).unwrap_or(LevelFilter::Info);
    if let Err(err) = FileLogger::init(&logging::default_log_path(), level) {
        eprintln!("Logging disabled: {err:#}");
    }
    if let Some(err) = load_error {
        warn!("could not load {}: {err:#}", Config::config_path().display());
    }
    for note in &corrections {
        warn!("config: {note}");
    }

    let theme = Theme::load(&config.theme, &Config::config_dir()).unwrap_or_else(|| {
        warn!(
            "theme '{}' not found (bundled: {}), using built-in colors",
            config.theme,
            Theme::available_themes().join(", ")
        );
        Theme::default()
    });
    let speaker: Box<dyn Speaker> = if config.speech_enabled {
        Box::new(CommandSpeaker::new(config.voice()))
    } else {
        Box::new(Silent)
    };
    let tick_rate = config.tick_rate();
    info!(
        "starting in {} mode, theme {}",
        config.start_mode.as_str(),
        theme.name
    );
    let mut app = App::new(&config, theme, speaker, cli.seed);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!("event loop failed: {err:?}");
        eprintln!("Error: {err:?}");
    }
    info!(
        "exiting with score {} of {}",
        app.session.score(),
        app.session.attempts()
    );
    log::logger().flush();

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Click(mouse) => {
                let size = terminal.size()?;
                handle_click(app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            AppEvent::Tick | AppEvent::Resize => {}
        }
        // Scheduled rounds are time based; check after every event so a
        // stream of input cannot starve them.
        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('r') => app.reset_score(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.toggle_mode(),
        _ => match app.session.mode() {
            Mode::Learn => handle_learn_key(app, key),
            Mode::Game => handle_game_key(app, key),
        },
    }
}

fn handle_learn_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Right | KeyCode::Down => app.step(Direction::Forward),
        KeyCode::Left | KeyCode::Up => app.step(Direction::Backward),
        KeyCode::Home => app.jump_to('A'),
        KeyCode::End => app.jump_to('Z'),
        KeyCode::Enter | KeyCode::Char(' ') => app.speak_current(),
        KeyCode::Char(ch) => app.jump_to(ch),
        _ => {}
    }
}

fn handle_game_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.leave_game(),
        KeyCode::Char(ch @ '1'..='4') => app.answer_slot(ch as usize - '1' as usize),
        KeyCode::Char(ch) if ch.is_ascii_lowercase() => app.answer_letter(ch),
        KeyCode::Left => app.move_highlight(-1, 0),
        KeyCode::Right => app.move_highlight(1, 0),
        KeyCode::Up => app.move_highlight(0, -1),
        KeyCode::Down => app.move_highlight(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => app.answer_highlighted(),
        _ => {}
    }
}

fn handle_click(app: &mut App, mouse: MouseEvent, area: Rect) {
    let (layout, _) = screen_layout(app, area);

    if let Some(tab) = hit_test(&Header::tab_areas(layout.header), mouse.column, mouse.row) {
        let mode = if tab == 0 { Mode::Learn } else { Mode::Game };
        if mode != app.session.mode() {
            app.toggle_mode();
        }
        return;
    }

    match app.session.mode() {
        Mode::Learn => {
            let learn = LearnLayout::new(layout.main, layout.tier);
            if let Some(index) = hit_test(&learn.strip_cells(layout.tier), mouse.column, mouse.row)
            {
                app.apply(Action::SelectCursor(index));
            } else if learn.card.contains((mouse.column, mouse.row).into()) {
                app.speak_current();
            }
        }
        Mode::Game => {
            let game = GameLayout::new(layout.main);
            if let Some(slot) = hit_test(&game.option_cells(), mouse.column, mouse.row) {
                app.answer_slot(slot);
            }
        }
    }
}

fn hints(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::Learn => &[
            "[←/→] Browse",
            "[A-Z] Jump",
            "[Space] Hear it",
            "[Tab] Game",
            "[Esc] Quit",
        ],
        Mode::Game => &[
            "[1-4] Answer",
            "[a-z] Type answer",
            "[Arrows+Enter] Pick",
            "[Ctrl-R] Reset score",
            "[Tab/Esc] Learn",
            "[Ctrl-C] Quit",
        ],
    }
}

fn screen_layout(app: &App, area: Rect) -> (AppLayout, Vec<String>) {
    let hint_lines = pack_hint_lines(hints(app.session.mode()), area.width as usize);
    let layout = AppLayout::new(area, hint_lines.len().max(1) as u16);
    (layout, hint_lines)
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let (layout, hint_lines) = screen_layout(app, area);

    let header = Header::new(
        app.session.mode(),
        app.session.score(),
        app.session.attempts(),
        &app.theme,
    );
    frame.render_widget(header, layout.header);

    match app.session.mode() {
        Mode::Learn => render_learn(frame, app, &layout),
        Mode::Game => render_game(frame, app, &layout),
    }

    let footer_lines: Vec<Line> = hint_lines
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(colors.text_muted()))))
        .collect();
    frame.render_widget(Paragraph::new(footer_lines), layout.footer);
}

fn render_learn(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let colors = &app.theme.colors;
    let learn = LearnLayout::new(layout.main, layout.tier);
    let record = app.session.current();

    frame.render_widget(Flashcard::new(record, &app.theme), learn.card);

    let word = Paragraph::new(Line::from(Span::styled(
        record.word,
        Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(word, learn.word);

    let cells = learn.strip_cells(layout.tier);
    let strip = LetterStrip::new(
        &cells,
        app.session.cursor(),
        layout.tier.bordered_cells(),
        &app.theme,
    );
    frame.render_widget(strip, learn.strip);
}

fn render_game(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let colors = &app.theme.colors;
    let game = GameLayout::new(layout.main);

    let Some(round) = app.session.round() else {
        return;
    };

    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Find the lowercase letter for  ", Style::default().fg(colors.fg())),
            Span::styled(
                round.target.upper.to_string(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(prompt, game.prompt);

    let cells = game.option_cells();
    let grid = OptionGrid::new(
        round,
        &cells,
        app.option_selected,
        app.session.is_showing_feedback(),
        &app.theme,
    );
    frame.render_widget(grid, game.options);

    if let Some(feedback) = app.session.feedback() {
        let banner = FeedbackBanner::new(feedback, &app.theme)
            .countdown(app.session.next_round_in(std::time::Instant::now()));
        frame.render_widget(banner, game.feedback);
    }
}
