use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};
use std::io;
use std::time::{Duration, Instant};

use crate::catalog::{self, CATEGORIES, TEMPLATE_GROUPS, TOTAL_ITEMS};
use crate::clipboard::Clipboard;
use crate::notes::NotesCursor;
use crate::state::{Action, ReviewState, update};
use crate::{Tab, TemplateKind};

const NOTES_PLACEHOLDER: &str =
    "Add templates from the Comment Templates tab, or write your own review comments...";

/// Confirmation action for destructive operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmAction {
    ResetAll,
    ClearNotes,
    Quit,
}

/// Application state for the TUI.
pub struct App {
    state: ReviewState,
    clipboard: Box<dyn Clipboard>,
    checklist_cursor: usize,
    template_cursor: usize,
    notes_cursor: NotesCursor,
    should_quit: bool,
    show_help: bool,
    confirm_action: Option<ConfirmAction>,
    status_message: Option<(String, Instant)>,
}

impl App {
    /// Create an App around an initial review state and a clipboard backend.
    pub fn new(state: ReviewState, clipboard: Box<dyn Clipboard>) -> Self {
        let mut notes_cursor = NotesCursor::default();
        notes_cursor.move_to_end(state.notes());
        Self {
            state,
            clipboard,
            checklist_cursor: 0,
            template_cursor: 0,
            notes_cursor,
            should_quit: false,
            show_help: false,
            confirm_action: None,
            status_message: None,
        }
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    fn dispatch(&mut self, action: Action) {
        self.state = update(std::mem::take(&mut self.state), action);
    }

    fn notify(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Handle keyboard input, dispatching to the handler for the active tab.
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<()> {
        // Handle confirmation dialog first
        if let Some(action) = self.confirm_action.take() {
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                match action {
                    ConfirmAction::ResetAll => {
                        self.dispatch(Action::ResetAll);
                        self.notify("Checklist reset");
                    }
                    ConfirmAction::ClearNotes => {
                        self.dispatch(Action::ClearNotes);
                        self.notes_cursor.move_to_end(self.state.notes());
                        self.notify("Notes cleared");
                    }
                    ConfirmAction::Quit => self.should_quit = true,
                }
            }
            return Ok(());
        }

        if self.show_help {
            self.show_help = false;
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => {
                self.dispatch(Action::SelectTab(self.state.tab.next()));
                return Ok(());
            }
            KeyCode::BackTab => {
                self.dispatch(Action::SelectTab(self.state.tab.prev()));
                return Ok(());
            }
            _ => {}
        }

        match self.state.tab {
            Tab::Checklist => self.handle_checklist_input(key),
            Tab::Templates => self.handle_templates_input(key),
            Tab::Notes => self.handle_notes_input(key),
        }
        Ok(())
    }

    /// Keys shared by the two list views. Returns true if the key was handled.
    fn handle_list_common(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('1') => self.dispatch(Action::SelectTab(Tab::Checklist)),
            KeyCode::Char('2') => self.dispatch(Action::SelectTab(Tab::Templates)),
            KeyCode::Char('3') => self.dispatch(Action::SelectTab(Tab::Notes)),
            _ => return false,
        }
        true
    }

    fn handle_checklist_input(&mut self, key: KeyEvent) {
        if self.handle_list_common(key) {
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.checklist_cursor = step_down(self.checklist_cursor, TOTAL_ITEMS);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.checklist_cursor = self.checklist_cursor.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.checklist_cursor = 0,
            KeyCode::Char('G') | KeyCode::End => self.checklist_cursor = TOTAL_ITEMS - 1,
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some((category, index, _)) =
                    catalog::checklist_entries().nth(self.checklist_cursor)
                {
                    self.dispatch(Action::toggle(category, index));
                }
            }
            KeyCode::Char('R') => {
                self.confirm_action = Some(ConfirmAction::ResetAll);
            }
            _ => {}
        }
    }

    fn handle_templates_input(&mut self, key: KeyEvent) {
        if self.handle_list_common(key) {
            return;
        }
        let total = catalog::template_entries().count();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.template_cursor = step_down(self.template_cursor, total);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.template_cursor = self.template_cursor.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.template_cursor = 0,
            KeyCode::Char('G') | KeyCode::End => self.template_cursor = total - 1,
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some((kind, snippet)) = catalog::template_entries().nth(self.template_cursor)
                {
                    self.dispatch(Action::insert_template(kind, snippet));
                    self.notes_cursor.move_to_end(self.state.notes());
                    self.notify(format!("Added to notes: {}", snippet));
                }
            }
            _ => {}
        }
    }

    fn handle_notes_input(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let edited = match key.code {
            KeyCode::Esc => {
                self.request_quit();
                None
            }
            KeyCode::Char('y') if ctrl => {
                self.copy_notes();
                None
            }
            KeyCode::Char('l') if ctrl => {
                if !self.state.notes.is_empty() {
                    self.confirm_action = Some(ConfirmAction::ClearNotes);
                }
                None
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(self.notes_cursor.insert(self.state.notes(), c))
            }
            KeyCode::Enter => Some(self.notes_cursor.insert(self.state.notes(), '\n')),
            KeyCode::Backspace => self.notes_cursor.backspace(self.state.notes()),
            KeyCode::Delete => self.notes_cursor.delete(self.state.notes()),
            KeyCode::Left => {
                self.notes_cursor.left(self.state.notes());
                None
            }
            KeyCode::Right => {
                self.notes_cursor.right(self.state.notes());
                None
            }
            KeyCode::Up => {
                self.notes_cursor.up(self.state.notes());
                None
            }
            KeyCode::Down => {
                self.notes_cursor.down(self.state.notes());
                None
            }
            KeyCode::Home => {
                self.notes_cursor.home(self.state.notes());
                None
            }
            KeyCode::End => {
                self.notes_cursor.end(self.state.notes());
                None
            }
            _ => None,
        };

        if let Some(text) = edited {
            self.dispatch(Action::EditNotes(text));
        }
    }

    /// Quit, asking first when there is work that would be lost.
    fn request_quit(&mut self) {
        if self.state.notes.is_empty() && self.state.progress().checked == 0 {
            self.should_quit = true;
        } else {
            self.confirm_action = Some(ConfirmAction::Quit);
        }
    }

    /// Send the notes to the clipboard and report how it went.
    fn copy_notes(&mut self) {
        match self.state.copy_notes(self.clipboard.as_mut()) {
            Ok(()) => {
                let chars = self.state.notes().chars().count();
                tracing::info!(chars, "notes copied to clipboard");
                self.notify(format!("Copied {} characters to clipboard", chars));
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                self.notify(format!("Copy failed: {}", e));
            }
        }
    }

    /// Render the UI for the active tab.
    pub fn render(&mut self, frame: &mut Frame) {
        // Expire old status messages
        let expired = self
            .status_message
            .as_ref()
            .map(|(_, time)| time.elapsed() >= Duration::from_secs(3))
            .unwrap_or(false);
        if expired {
            self.status_message = None;
        }

        if self.show_help {
            self.render_help(frame);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(frame.area());

        self.render_tabs(frame, chunks[0]);
        match self.state.tab {
            Tab::Checklist => self.render_checklist(frame, chunks[1]),
            Tab::Templates => self.render_templates(frame, chunks[1]),
            Tab::Notes => self.render_notes(frame, chunks[1]),
        }
        self.render_status_bar(frame, chunks[2]);

        // Draw confirmation modal on top if active
        if self.confirm_action.is_some() {
            self.render_confirm(frame);
        }
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let tabs = Tabs::new(Tab::ALL.iter().map(|tab| tab.title()))
            .select(self.state.tab.index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Code Review Assistant"),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_checklist(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let progress = self.state.progress();
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Review Progress"))
            .gauge_style(Style::default().fg(Color::Blue))
            .ratio((progress.percentage as f64 / 100.0).min(1.0))
            .label(format!(
                "{}% - {} of {} items checked",
                progress.percentage, progress.checked, progress.total
            ));
        frame.render_widget(gauge, chunks[0]);

        let mut items = Vec::new();
        let mut selected_line = 0;
        let mut entry = 0;
        for category in &CATEGORIES {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{} {}", category.icon, category.title),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))));
            for (index, prompt) in category.items.iter().enumerate() {
                let checked = self.state.is_checked(category.key, index);
                let is_selected = entry == self.checklist_cursor;
                if is_selected {
                    selected_line = items.len();
                }

                let mark = if checked { "●" } else { "○" };
                let prefix = if is_selected { ">" } else { " " };
                let mut style = if checked {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                if is_selected {
                    style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                }

                items.push(ListItem::new(Line::from(vec![
                    Span::raw(format!("{} {} ", prefix, mark)),
                    Span::styled(*prompt, style),
                ])));
                entry += 1;
            }
        }

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Checklist (Space to toggle)"),
        );
        let mut list_state = ListState::default().with_selected(Some(selected_line));
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }

    fn render_templates(&self, frame: &mut Frame, area: Rect) {
        let mut items = Vec::new();
        let mut selected_line = 0;
        let mut entry = 0;
        for group in &TEMPLATE_GROUPS {
            let (color, mark) = match group.kind {
                TemplateKind::General => (Color::Green, "✓"),
                TemplateKind::Positive => (Color::Blue, "✓"),
                TemplateKind::Suggestions => (Color::Yellow, "!"),
            };
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{} {}", mark, group.label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))));
            for snippet in group.snippets {
                let is_selected = entry == self.template_cursor;
                let (prefix, style) = if is_selected {
                    selected_line = items.len();
                    (
                        ">",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (" ", Style::default())
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::raw(format!("{}   ", prefix)),
                    Span::styled(*snippet, style),
                ])));
                entry += 1;
            }
        }

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Templates (Enter to add to notes)"),
        );
        let mut list_state = ListState::default().with_selected(Some(selected_line));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_notes(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Review Notes & Comments (Ctrl+Y copy, Ctrl+L clear)");
        let inner = block.inner(area);

        let notes = self.state.notes();
        let (line, column) = self.notes_cursor.line_col(notes);
        let scroll_y = follow(line, inner.height);
        let scroll_x = follow(column, inner.width);

        let paragraph = if notes.is_empty() {
            Paragraph::new(Span::styled(
                NOTES_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(Text::from(notes)).scroll((scroll_y as u16, scroll_x as u16))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.confirm_action.is_none() && inner.width > 0 && inner.height > 0 {
            let x = inner.x + (column - scroll_x) as u16;
            let y = inner.y + (line - scroll_y) as u16;
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status_text = match &self.status_message {
            Some((msg, _)) => msg.clone(),
            None => match self.state.tab {
                Tab::Checklist => {
                    let progress = self.state.progress();
                    format!(
                        "{} of {} checked | Keys: j/k=nav Space=toggle R=reset-all Tab=next-tab ?=help q=quit",
                        progress.checked, progress.total
                    )
                }
                Tab::Templates => {
                    "Keys: j/k=nav Enter=add-to-notes Tab=next-tab ?=help q=quit".to_string()
                }
                Tab::Notes => format!(
                    "{} characters | Keys: Ctrl+Y=copy Ctrl+L=clear Tab=next-tab Esc=quit",
                    self.state.notes().chars().count()
                ),
            },
        };

        let paragraph = Paragraph::new(status_text)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    /// Render the help overlay.
    fn render_help(&self, frame: &mut Frame) {
        let help_text = [
            "Code Review Assistant - Keyboard Shortcuts",
            "",
            "Tabs:",
            "  Tab / Shift+Tab - Next / previous tab",
            "  1 / 2 / 3       - Checklist / Templates / Notes",
            "",
            "Checklist:",
            "  j / Down        - Next item",
            "  k / Up          - Previous item",
            "  Space / Enter   - Toggle item",
            "  R (Shift+R)     - Reset all items",
            "",
            "Templates:",
            "  j / k           - Move",
            "  Space / Enter   - Append template to notes",
            "",
            "Notes:",
            "  Type to edit, arrows to move",
            "  Ctrl+Y          - Copy notes to clipboard",
            "  Ctrl+L          - Clear notes",
            "",
            "Other:",
            "  ?               - Show this help",
            "  q / Esc         - Quit, confirming unsaved work (Esc in notes)",
            "  Ctrl+C          - Quit from anywhere",
            "",
            "Press any key to close this help",
        ];

        let text = Text::from(help_text.iter().map(|&s| Line::from(s)).collect::<Vec<_>>());

        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: false });

        let area = centered_rect(60, 80, frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    /// Render the confirmation modal.
    fn render_confirm(&self, frame: &mut Frame) {
        let message = match self.confirm_action {
            Some(ConfirmAction::ResetAll) => format!(
                "Uncheck all {} checked items?\n\n(y)es / (n)o",
                self.state.progress().checked
            ),
            Some(ConfirmAction::ClearNotes) => "Clear all review notes?\n\n(y)es / (n)o".to_string(),
            Some(ConfirmAction::Quit) => {
                "Quit? Checklist and notes are not saved.\n\n(y)es / (n)o".to_string()
            }
            None => return,
        };

        let paragraph = Paragraph::new(message)
            .block(Block::default().borders(Borders::ALL).title("Confirm"))
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::Yellow));

        let area = centered_rect(50, 30, frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

/// Smallest scroll offset that keeps `pos` inside a viewport of `size` cells.
fn follow(pos: usize, size: u16) -> usize {
    let size = size as usize;
    if size > 0 && pos >= size {
        pos - size + 1
    } else {
        0
    }
}

fn step_down(cursor: usize, len: usize) -> usize {
    if cursor + 1 < len { cursor + 1 } else { cursor }
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Setup the terminal for TUI rendering.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

/// Restore the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Launch the interactive review assistant.
pub fn run_tui(mut app: App) -> Result<()> {
    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;

    // Main event loop
    let result = (|| -> Result<()> {
        loop {
            terminal
                .draw(|f| app.render(f))
                .context("Failed to draw frame")?;

            if app.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(200)).context("Failed to poll events")?
                && let Event::Key(key) = event::read().context("Failed to read event")?
            {
                // Ignore key release events
                if key.kind == event::KeyEventKind::Press {
                    app.handle_input(key)?;
                }
            }
        }
        Ok(())
    })();

    // Restore terminal in all cases
    restore_terminal(&mut terminal)?;

    result
}
