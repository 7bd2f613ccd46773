//! Main application logic for the terminal user interface.
//!
//! `App` renders a [`Home`] and turns key presses into intents on it. All task
//! state lives in `Home`; this module only owns what is purely visual: the
//! selection, the text buffers that have input focus, and which dialog is open.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::home::{AddOutcome, Home, RemoveOutcome};
use crate::prompt::{Decision, Notice, RemoveRequest};
use crate::session::Focus;
use crate::store::{ClockIds, IdSource};
use crate::task::{format_counter, TaskId};
use crate::tui::{
    colors::{DARK_RED, DONE_GREEN, HEADER_PURPLE, MUTED_GREY},
    enums::AppState,
    input::InputField,
    utils::centered_rect,
};

const HIGHLIGHT_SYMBOL: &str = ">> ";
const MARKER_WIDTH: u16 = 4;

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Columns to scroll so that `cursor` stays visible in a field `width` wide.
fn horizontal_scroll(cursor: usize, width: u16) -> u16 {
    to_u16(cursor).saturating_sub(width.saturating_sub(1))
}

/// Screen column for a cursor `column` cells into the bordered `area`,
/// kept inside the border.
fn cursor_x(area: Rect, column: u16) -> u16 {
    area.x
        .saturating_add(1)
        .saturating_add(column)
        .min(area.right().saturating_sub(2))
}

/// Terminal front end for the checklist screen.
pub struct App<I: IdSource = ClockIds> {
    state: AppState,
    home: Home<I>,
    list_state: ListState,
    new_task: InputField,
    draft: InputField,
    editing: Option<TaskId>,
    status_message: String,
}

impl<I: IdSource> App<I> {
    /// Create an App showing `home`, with the first task selected.
    pub fn new(home: Home<I>) -> Self {
        let mut list_state = ListState::default();
        if !home.tasks().is_empty() {
            list_state.select(Some(0));
        }
        App {
            state: AppState::TaskList,
            home,
            list_state,
            new_task: InputField::new(),
            draft: InputField::new(),
            editing: None,
            status_message: String::new(),
        }
    }

    pub fn home(&self) -> &Home<I> {
        &self.home
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.list_state
            .selected()
            .and_then(|i| self.home.tasks().at(i))
            .map(|t| t.id)
    }

    /// Keep the selection inside the list after it shrank or grew.
    fn clamp_selection(&mut self) {
        let len = self.home.tasks().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    fn select_id(&mut self, id: TaskId) {
        if let Some(pos) = self.home.tasks().position(id) {
            self.list_state.select(Some(pos));
        }
    }

    /// React to a focus signal from an edit session transition.
    fn apply_focus(&mut self, id: TaskId, focus: Focus) {
        match focus {
            Focus::Acquire => {
                let session = self.home.session(id);
                self.draft = InputField::with_value(session.draft().unwrap_or_default());
                self.editing = Some(id);
                self.state = AppState::EditTitle;
            }
            Focus::Release => {
                self.draft = InputField::new();
                self.editing = None;
                self.state = AppState::TaskList;
            }
            Focus::Unchanged => {}
        }
    }

    fn submit_new_task(&mut self) {
        let mut notices: Vec<Notice> = Vec::new();
        match self.home.add(&self.new_task.value, &mut notices) {
            AddOutcome::Added(id) => {
                self.new_task.take();
                self.select_id(id);
                self.set_status_message("Task added");
            }
            AddOutcome::Blank => self.set_status_message("Type a title first"),
            AddOutcome::Exhausted => self.set_status_message("No ids left for new tasks"),
            AddOutcome::Duplicate => {
                if let Some(notice) = notices.pop() {
                    self.state = AppState::Notice(notice);
                }
            }
        }
    }

    fn request_remove(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if !self.home.session(id).allows_remove() {
            self.set_status_message("Finish editing before removing this item");
            return;
        }
        if let Some(task) = self.home.tasks().get(id) {
            self.state = AppState::Confirm(RemoveRequest {
                id,
                title: task.title.clone(),
            });
        }
    }

    fn answer_remove(&mut self, id: TaskId, mut decision: Decision) {
        self.state = AppState::TaskList;
        match self.home.remove(id, &mut decision) {
            RemoveOutcome::Removed => {
                self.clamp_selection();
                self.set_status_message("Task removed");
            }
            RemoveOutcome::Declined => self.set_status_message("Kept task"),
            RemoveOutcome::Blocked => {
                self.set_status_message("Finish editing before removing this item")
            }
            RemoveOutcome::Missing => self.clamp_selection(),
        }
    }

    /// Handle keyboard input while browsing the list.
    fn handle_task_list_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(selected) = self.list_state.selected() {
                    self.list_state.select(Some(selected.saturating_sub(1)));
                } else {
                    self.clamp_selection();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(selected) = self.list_state.selected() {
                    if selected + 1 < self.home.tasks().len() {
                        self.list_state.select(Some(selected + 1));
                    }
                } else {
                    self.clamp_selection();
                }
            }
            KeyCode::Char('a') | KeyCode::Char('i') => self.state = AppState::NewTask,
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    self.home.toggle_done(id);
                }
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    let focus = self.home.begin_edit(id);
                    self.apply_focus(id, focus);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => self.request_remove(),
            KeyCode::Char('?') | KeyCode::Char('h') => self.state = AppState::Help,
            _ => {}
        }
        false
    }

    fn handle_new_task_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state = AppState::TaskList,
            KeyCode::Enter => self.submit_new_task(),
            KeyCode::Char(c) => self.new_task.handle_char(c),
            KeyCode::Backspace => self.new_task.handle_backspace(),
            KeyCode::Delete => self.new_task.handle_delete(),
            KeyCode::Left => self.new_task.move_cursor_left(),
            KeyCode::Right => self.new_task.move_cursor_right(),
            KeyCode::Home => self.new_task.move_home(),
            KeyCode::End => self.new_task.move_end(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(id) = self.editing else {
            self.state = AppState::TaskList;
            return;
        };
        match key.code {
            KeyCode::Esc => {
                let focus = self.home.cancel_edit(id);
                self.apply_focus(id, focus);
                return;
            }
            KeyCode::Enter => {
                let focus = self.home.commit_edit(id);
                if focus == Focus::Unchanged {
                    self.set_status_message("Type a title first");
                } else {
                    self.apply_focus(id, focus);
                    self.set_status_message("Task renamed");
                }
                return;
            }
            KeyCode::Char(c) => self.draft.handle_char(c),
            KeyCode::Backspace => self.draft.handle_backspace(),
            KeyCode::Delete => self.draft.handle_delete(),
            KeyCode::Left => self.draft.move_cursor_left(),
            KeyCode::Right => self.draft.move_cursor_right(),
            KeyCode::Home => self.draft.move_home(),
            KeyCode::End => self.draft.move_end(),
            _ => return,
        }
        self.home.update_draft(id, self.draft.value.clone());
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, id: TaskId) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.answer_remove(id, Decision::Yes)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.answer_remove(id, Decision::No)
            }
            _ => {}
        }
    }

    /// Apply one key press. Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        self.clear_status_message();

        match self.state.clone() {
            AppState::TaskList => return self.handle_task_list_key(key),
            AppState::NewTask => self.handle_new_task_key(key),
            AppState::EditTitle => self.handle_edit_key(key),
            AppState::Confirm(request) => self.handle_confirm_key(key, request.id),
            AppState::Notice(_) | AppState::Help => self.state = AppState::TaskList,
        }
        false
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                return Ok(self.handle_key(key));
            }
        }
        Ok(false)
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled("CHECKLIST", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format_counter(self.home.tasks().len()),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().bg(HEADER_PURPLE).fg(Color::White))
        .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn render_new_task(&self, f: &mut Frame, area: Rect) {
        let active = self.state == AppState::NewTask;
        let border = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(MUTED_GREY)
        };
        let text = if self.new_task.value.is_empty() && !active {
            Line::from(Span::styled(
                "Press 'a' to add a new task",
                Style::default().fg(MUTED_GREY),
            ))
        } else {
            Line::from(self.new_task.value.as_str())
        };
        let offset = horizontal_scroll(self.new_task.cursor, area.width.saturating_sub(2));
        let input = Paragraph::new(text)
            .scroll((0, offset))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title("New task"),
            );
        f.render_widget(input, area);

        if active {
            let column = to_u16(self.new_task.cursor).saturating_sub(offset);
            f.set_cursor_position(Position::new(
                cursor_x(area, column),
                area.y.saturating_add(1),
            ));
        }
    }

    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Tasks");

        if self.home.tasks().is_empty() {
            let empty = Paragraph::new("No tasks yet")
                .style(Style::default().fg(MUTED_GREY))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .home
            .tasks()
            .iter()
            .map(|task| {
                let session = self.home.session(task.id);
                let marker = if task.done {
                    Span::styled("[x] ", Style::default().fg(DONE_GREEN))
                } else {
                    Span::styled("[ ] ", Style::default().fg(MUTED_GREY))
                };
                let title_style = if session.is_editing() {
                    Style::default().add_modifier(Modifier::UNDERLINED)
                } else if task.done {
                    Style::default()
                        .fg(DONE_GREEN)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                let mut spans = vec![
                    marker,
                    Span::styled(session.display_title(&task.title).to_string(), title_style),
                ];
                if session.is_editing() {
                    spans.push(Span::styled("  (editing)", Style::default().fg(MUTED_GREY)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(HIGHLIGHT_SYMBOL);
        f.render_stateful_widget(list, area, &mut self.list_state);

        if let (AppState::EditTitle, Some(id)) = (&self.state, self.editing) {
            if let Some(pos) = self.home.tasks().position(id) {
                let row = to_u16(pos.saturating_sub(self.list_state.offset()));
                let column = to_u16(HIGHLIGHT_SYMBOL.len())
                    .saturating_add(MARKER_WIDTH)
                    .saturating_add(to_u16(self.draft.cursor));
                f.set_cursor_position(Position::new(
                    cursor_x(area, column),
                    area.y.saturating_add(1).saturating_add(row),
                ));
            }
        }
    }

    fn render_confirm(&self, f: &mut Frame, area: Rect, request: &RemoveRequest) {
        let block = Block::default()
            .title(RemoveRequest::HEADING)
            .borders(Borders::ALL)
            .style(Style::default().bg(DARK_RED).fg(Color::White));

        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                RemoveRequest::QUESTION,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(request.title.as_str()),
            Line::from(""),
            Line::from("Press 'y' to remove, 'n' to keep"),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_notice(&self, f: &mut Frame, area: Rect, notice: &Notice) {
        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(notice.body.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().fg(MUTED_GREY),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title(notice.heading.as_str())
                    .borders(Borders::ALL),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let area = centered_rect(60, 60, area);
        f.render_widget(Clear, area);

        let rows = [
            ("a / i", "Add a new task"),
            ("Up/Down, k/j", "Move selection"),
            ("Space / Enter", "Mark selected task done or not done"),
            ("e", "Edit title (Enter saves, Esc cancels)"),
            ("d / Delete", "Remove selected task"),
            ("q / Esc", "Quit"),
        ];
        let text: Vec<Line> = rows
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(format!("{keys:<16}"), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(*what),
                ])
            })
            .collect();
        let paragraph = Paragraph::new(text).block(
            Block::default()
                .title("Help (any key to close)")
                .borders(Borders::ALL),
        );
        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::TaskList => "a add | space toggle | e edit | d remove | ? help | q quit".to_string(),
                AppState::NewTask => "New task: Enter to add, Esc to go back".to_string(),
                AppState::EditTitle => "Editing: Enter to save, Esc to cancel".to_string(),
                AppState::Confirm(_) => "Confirm removal".to_string(),
                AppState::Notice(_) => "Notice".to_string(),
                AppState::Help => "Help".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(HEADER_PURPLE).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Draw the whole screen, with any open dialog on top.
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_new_task(f, chunks[1]);
        self.render_task_list(f, chunks[2]);
        self.render_status_bar(f, chunks[3]);

        match &self.state {
            AppState::Confirm(request) => self.render_confirm(f, chunks[2], request),
            AppState::Notice(notice) => self.render_notice(f, chunks[2], notice),
            AppState::Help => self.render_help(f, chunks[2]),
            _ => {}
        }
    }

    /// Main event loop: render and handle input until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{SequentialIds, TaskStore};
    use ratatui::backend::TestBackend;

    fn app() -> App<SequentialIds> {
        App::new(Home::with_store(TaskStore::with_ids(SequentialIds::new())))
    }

    fn press(app: &mut App<SequentialIds>, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App<SequentialIds>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_task(app: &mut App<SequentialIds>, title: &str) {
        press(app, KeyCode::Char('a'));
        type_text(app, title);
        press(app, KeyCode::Enter);
        press(app, KeyCode::Esc);
    }

    fn screen(app: &mut App<SequentialIds>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).expect("test backend");
        terminal.draw(|f| app.render(f)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn titles(app: &App<SequentialIds>) -> Vec<String> {
        app.home().tasks().iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_add_and_counter() {
        let mut app = app();
        assert!(screen(&mut app).contains("0 tasks"));
        add_task(&mut app, "Buy milk");
        add_task(&mut app, "Walk dog");
        assert_eq!(titles(&app), vec!["Buy milk", "Walk dog"]);
        let text = screen(&mut app);
        assert!(text.contains("2 tasks"));
        assert!(text.contains("[ ] Buy milk"));
    }

    #[test]
    fn test_duplicate_shows_notice_until_dismissed() {
        let mut app = app();
        add_task(&mut app, "A");
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "A");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.state(), AppState::Notice(_)));
        assert!(screen(&mut app).contains("Task already exists"));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state(), &AppState::TaskList);
        assert_eq!(titles(&app), vec!["A"]);
    }

    #[test]
    fn test_blank_input_is_not_added() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.home().tasks().is_empty());
        assert!(screen(&mut app).contains("Type a title first"));
    }

    #[test]
    fn test_toggle_marks_done() {
        let mut app = app();
        add_task(&mut app, "Buy milk");
        press(&mut app, KeyCode::Char(' '));
        assert!(screen(&mut app).contains("[x] Buy milk"));
        press(&mut app, KeyCode::Char(' '));
        assert!(screen(&mut app).contains("[ ] Buy milk"));
    }

    #[test]
    fn test_remove_requires_yes() {
        let mut app = app();
        add_task(&mut app, "A");
        press(&mut app, KeyCode::Char('d'));
        assert!(screen(&mut app).contains("Remove item"));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(titles(&app), vec!["A"]);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.home().tasks().is_empty());
        assert!(screen(&mut app).contains("No tasks yet"));
    }

    #[test]
    fn test_edit_commit_and_cancel() {
        let mut app = app();
        add_task(&mut app, "Buy milk");
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.state(), &AppState::EditTitle);
        for _ in 0.."milk".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "oat milk");
        assert!(screen(&mut app).contains("(editing)"));
        assert_eq!(titles(&app), vec!["Buy milk"]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(titles(&app), vec!["Buy oat milk"]);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "!!!");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state(), &AppState::TaskList);
        assert_eq!(titles(&app), vec!["Buy oat milk"]);
    }

    #[test]
    fn test_blank_edit_stays_in_edit_mode() {
        let mut app = app();
        add_task(&mut app, "A");
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, " ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), &AppState::EditTitle);
        assert_eq!(titles(&app), vec!["A"]);
        assert!(screen(&mut app).contains("Type a title first"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state(), &AppState::TaskList);
        assert_eq!(titles(&app), vec!["A"]);
    }

    #[test]
    fn test_long_input_scrolls_and_cursor_stays_in_box() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, &"abcdefghij".repeat(4));

        let mut terminal = Terminal::new(TestBackend::new(30, 12)).expect("test backend");
        terminal.draw(|f| app.render(f)).expect("draw");
        let cursor = terminal
            .backend_mut()
            .get_cursor_position()
            .expect("cursor position");
        assert!(cursor.x <= 28);
        assert_eq!(cursor.y, 4);

        let buffer = terminal.backend().buffer();
        let row: String = buffer.content[(4 * 30)..(5 * 30)]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(row.contains("defghijabcdefghijabcdefghij"));
    }

    #[test]
    fn test_cursor_helpers_saturate() {
        let area = Rect::new(0, 0, 10, 3);
        assert_eq!(cursor_x(area, u16::MAX), 8);
        assert_eq!(cursor_x(area, 2), 3);
        assert_eq!(horizontal_scroll(usize::MAX, 8), u16::MAX - 7);
        assert_eq!(horizontal_scroll(3, 8), 0);
    }

    #[test]
    fn test_editing_keys_do_not_leak_into_list() {
        let mut app = app();
        add_task(&mut app, "A");
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "dq");
        assert_eq!(app.state(), &AppState::EditTitle);
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.home().editing().len(), 1);
    }

    #[test]
    fn test_selection_clamped_after_remove() {
        let mut app = app();
        add_task(&mut app, "A");
        add_task(&mut app, "B");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(titles(&app), vec!["A"]);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.home().tasks().at(0).map(|t| t.done), Some(true));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(press(&mut app, KeyCode::Char('q')));
    }
}
