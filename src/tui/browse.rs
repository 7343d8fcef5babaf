//! Interactive flashcard browser TUI using ratatui.
//!
//! Three panes, left to right: certifications, categories of the selected
//! certification, and the flashcards of the selected category.

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::error::{FlashError, Result};
use crate::services::{CatalogService, FlashcardService};
use crate::tui::selector::Selector;

/// Question, answer and a blank separator.
const LINES_PER_CARD: u16 = 3;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Certifications,
    Categories,
    Flashcards,
}

impl FocusPanel {
    const fn next(self) -> Self {
        match self {
            Self::Certifications => Self::Categories,
            Self::Categories => Self::Flashcards,
            Self::Flashcards => Self::Certifications,
        }
    }
}

/// Action to take after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Continue,
}

/// TUI application state.
pub struct BrowseTui {
    selector: Selector,
    cert_state: ListState,
    cat_state: ListState,
    focus: FocusPanel,
    /// Flashcard pane scroll offset
    card_scroll: u16,
    show_help: bool,
    status_message: Option<String>,
}

impl BrowseTui {
    pub fn new(selector: Selector) -> Self {
        let mut cert_state = ListState::default();
        if !selector.certifications().is_empty() {
            cert_state.select(Some(0));
        }

        Self {
            selector,
            cert_state,
            cat_state: ListState::default(),
            focus: FocusPanel::Certifications,
            card_scroll: 0,
            show_help: false,
            status_message: None,
        }
    }

    /// Run the TUI main loop until the user quits.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code, key.modifiers)? == Action::Quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(10),   // Panes
                Constraint::Length(1), // Help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0]);
        self.draw_panes(f, chunks[1]);
        self.draw_help_bar(f, chunks[2]);

        if self.show_help {
            Self::draw_help_overlay(f);
        }
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect) {
        let status = self
            .status_message
            .as_ref()
            .map(|m| format!(" | {m}"))
            .unwrap_or_default();

        let path = match (
            self.selector.selected_certification(),
            self.selector.selected_category(),
        ) {
            (Some(cert), Some(cat)) => format!(" | {} / {}", cert.name, cat.name),
            (Some(cert), None) => format!(" | {}", cert.name),
            _ => String::new(),
        };

        let title = Line::from(vec![
            Span::styled("flashdeck", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                " | {} certifications{path}{status}",
                self.selector.certifications().len()
            )),
        ]);

        f.render_widget(
            Paragraph::new(title).style(Style::default().fg(Color::Cyan)),
            area,
        );
    }

    fn draw_panes(&mut self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(50),
            ])
            .split(area);

        let certs: Vec<ListItem> = self
            .selector
            .certifications()
            .iter()
            .map(|c| ListItem::new(truncate(&c.name, 40)))
            .collect();
        let list = self.list_widget(certs, " Certifications ", FocusPanel::Certifications);
        f.render_stateful_widget(list, columns[0], &mut self.cert_state);

        let cats: Vec<ListItem> = self
            .selector
            .categories()
            .iter()
            .map(|c| ListItem::new(truncate(&c.name, 40)))
            .collect();
        let list = self.list_widget(cats, " Categories ", FocusPanel::Categories);
        f.render_stateful_widget(list, columns[1], &mut self.cat_state);

        self.draw_flashcards(f, columns[2]);
    }

    fn list_widget<'a>(&self, items: Vec<ListItem<'a>>, title: &'a str, panel: FocusPanel) -> List<'a> {
        List::new(items)
            .block(self.panel_block(title, panel))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ")
    }

    fn panel_block<'a>(&self, title: &'a str, panel: FocusPanel) -> Block<'a> {
        let border_style = if self.focus == panel {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
    }

    fn draw_flashcards(&self, f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.flashcard_text())
            .block(self.panel_block(" Flashcards ", FocusPanel::Flashcards))
            .wrap(Wrap { trim: false })
            .scroll((self.card_scroll, 0));
        f.render_widget(paragraph, area);
    }

    fn flashcard_text(&self) -> Text<'static> {
        if self.selector.selected_category().is_none() {
            return Text::from("Select a certification, then a category");
        }
        if self.selector.flashcards().is_empty() {
            return Text::from("No flashcards in this category");
        }

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();
        for card in self.selector.flashcards() {
            lines.push(Line::from(vec![
                Span::styled("Question: ", bold),
                Span::raw(card.question.clone()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Answer: ", bold.fg(Color::Green)),
                Span::raw(card.answer.clone()),
            ]));
            lines.push(Line::from(""));
        }
        Text::from(lines)
    }

    fn draw_help_bar(&self, f: &mut Frame, area: Rect) {
        let help_text = "j/k: navigate  Enter: select  Tab: switch pane  Esc: back  ?: help  q: quit";
        f.render_widget(
            Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn draw_help_overlay(f: &mut Frame) {
        let area = f.area();

        let help_width = 56.min(area.width.saturating_sub(4));
        let help_height = 14.min(area.height.saturating_sub(4));
        let x = (area.width - help_width) / 2;
        let y = (area.height - help_height) / 2;
        let help_area = Rect::new(x, y, help_width, help_height);

        f.render_widget(Clear, help_area);

        let help_text = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  j / Down     Move down"),
            Line::from("  k / Up       Move up"),
            Line::from("  g / G        Jump to first / last"),
            Line::from("  Enter / l    Select certification or category"),
            Line::from("  Tab          Cycle focus between panes"),
            Line::from("  Esc / h      Back to the previous pane"),
            Line::from("  q            Quit"),
            Line::from(""),
            Line::from("Press ? or Esc to close this help"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, help_area);
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
                self.show_help = false;
            }
            return Ok(Action::Continue);
        }

        match key {
            KeyCode::Char('q') => return Ok(Action::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Action::Quit);
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return Ok(Action::Continue);
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Ok(Action::Continue);
            }
            KeyCode::Esc | KeyCode::Char('h') => {
                self.focus = match self.focus {
                    FocusPanel::Flashcards => FocusPanel::Categories,
                    _ => FocusPanel::Certifications,
                };
                return Ok(Action::Continue);
            }
            _ => {}
        }

        match self.focus {
            FocusPanel::Certifications => self.handle_certification_key(key)?,
            FocusPanel::Categories => self.handle_category_key(key)?,
            FocusPanel::Flashcards => self.handle_flashcard_key(key),
        }
        Ok(Action::Continue)
    }

    fn handle_certification_key(&mut self, key: KeyCode) -> Result<()> {
        let len = self.selector.certifications().len();
        match key {
            KeyCode::Enter | KeyCode::Char('l') => self.activate_certification()?,
            _ => move_selection(&mut self.cert_state, len, key),
        }
        Ok(())
    }

    fn handle_category_key(&mut self, key: KeyCode) -> Result<()> {
        let len = self.selector.categories().len();
        match key {
            KeyCode::Enter | KeyCode::Char('l') => self.activate_category()?,
            _ => move_selection(&mut self.cat_state, len, key),
        }
        Ok(())
    }

    fn handle_flashcard_key(&mut self, key: KeyCode) {
        let bottom = self.last_card_offset();
        match key {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
                self.card_scroll = self.card_scroll.saturating_add(LINES_PER_CARD).min(bottom);
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => {
                self.card_scroll = self.card_scroll.saturating_sub(LINES_PER_CARD);
            }
            KeyCode::Char('g') => self.card_scroll = 0,
            KeyCode::Char('G') => self.card_scroll = bottom,
            _ => {}
        }
    }

    /// Scroll offset that puts the last flashcard at the top of the pane.
    fn last_card_offset(&self) -> u16 {
        let last = self.selector.flashcards().len().saturating_sub(1);
        u16::try_from(last)
            .unwrap_or(u16::MAX)
            .saturating_mul(LINES_PER_CARD)
    }

    fn activate_certification(&mut self) -> Result<()> {
        let Some(name) = self
            .cert_state
            .selected()
            .and_then(|i| self.selector.certifications().get(i))
            .map(|c| c.name.clone())
        else {
            return Ok(());
        };

        self.selector.select_certification(&name)?;
        self.card_scroll = 0;
        self.cat_state
            .select((!self.selector.categories().is_empty()).then_some(0));
        self.status_message = Some(format!("{} categories", self.selector.categories().len()));
        self.focus = FocusPanel::Categories;
        Ok(())
    }

    fn activate_category(&mut self) -> Result<()> {
        let Some(name) = self
            .cat_state
            .selected()
            .and_then(|i| self.selector.categories().get(i))
            .map(|c| c.name.clone())
        else {
            return Ok(());
        };

        if self.selector.select_category(&name)? {
            self.card_scroll = 0;
            self.status_message = Some(format!("{} flashcards", self.selector.flashcards().len()));
            self.focus = FocusPanel::Flashcards;
        }
        Ok(())
    }
}

fn move_selection(state: &mut ListState, len: usize, key: KeyCode) {
    if len == 0 {
        return;
    }
    let current = state.selected();
    let next = match key {
        KeyCode::Down | KeyCode::Char('j') => match current {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0, // Wrap to beginning
            None => 0,
        },
        KeyCode::Up | KeyCode::Char('k') => match current {
            Some(0) | None => len - 1, // Wrap to end
            Some(i) => i - 1,
        },
        KeyCode::Char('g') => 0,
        KeyCode::Char('G') => len - 1,
        _ => return,
    };
    state.select(Some(next));
}

/// RAII Guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the browse TUI against the given services.
pub fn run_browse_tui(catalog: CatalogService, flashcards: FlashcardService) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(FlashError::NotInteractive(
            "flashdeck needs a terminal to draw the selector".to_string(),
        ));
    }

    let selector = Selector::new(catalog, flashcards)?;

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    BrowseTui::new(selector).run(&mut terminal)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        format!("{}...", s.chars().take(max_len - 3).collect::<String>())
    } else {
        s.to_string()
    }
}
