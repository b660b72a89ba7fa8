use std::io;
use std::time::Duration;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame, Terminal,
};
use tui_textarea::TextArea;
use crate::config::DiffDeskConfig;
use crate::core::{AppEvent, AppState, Pane, ViewMode};
use super::keys::map_key;
use super::render::{render, RenderOptions, RenderedView, SplitColumns};
use super::styles;

pub struct TuiApp {
    pub state: AppState,
    render_options: RenderOptions,
    tick_rate: Duration,
    editor_height_percent: u16,
}

impl TuiApp {
    pub fn new(state: AppState, config: &DiffDeskConfig) -> Self {
        Self {
            state,
            render_options: RenderOptions {
                show_markers: config.ui.show_markers,
            },
            tick_rate: config.ui.tick_rate(),
            editor_height_percent: config.ui.editor_height_percent,
        }
    }

    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.ui(f))?;

            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        // Esc closes the help popup instead of quitting
                        if self.state.show_help && key.code == KeyCode::Esc {
                            self.state.toggle_help();
                        } else if let Some(app_event) = map_key(&key) {
                            self.state.apply(app_event);
                        }
                    }
                    Event::Paste(text) => self.state.apply(AppEvent::Paste(text)),
                    _ => {}
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        tracing::info!("Leaving DiffDesk");
        Ok(())
    }

    fn ui(&mut self, f: &mut Frame) {
        let editor_percent = self.editor_height_percent;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(editor_percent), // Input panes
                Constraint::Min(5),                     // Diff output
                Constraint::Length(4),                  // Status bar
            ])
            .split(f.area());

        self.render_editors(f, chunks[0]);
        self.render_output(f, chunks[1]);
        self.render_status(f, chunks[2]);

        if self.state.show_help {
            self.render_help(f);
        }
    }

    fn render_editors(&mut self, f: &mut Frame, area: Rect) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (pane, area) in [(Pane::Original, panes[0]), (Pane::Modified, panes[1])] {
            let focused = self.state.focus == pane && !self.state.show_help;
            let textarea = match pane {
                Pane::Original => self.state.original.textarea_mut(),
                Pane::Modified => self.state.modified.textarea_mut(),
            };
            style_editor(textarea, pane, focused);
            f.render_widget(self.state.editor(pane).textarea(), area);
        }
    }

    fn render_output(&self, f: &mut Frame, area: Rect) {
        let view = render(
            self.state.segments(),
            self.state.rows(),
            self.state.view_mode,
            self.render_options,
        );

        let mut title = format!(" Diff: {} ", self.state.view_mode);
        if self.state.view_mode == ViewMode::Inline {
            title = format!(" Diff: {} ({}) ", self.state.view_mode, self.state.granularity);
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(styles::BORDER))
            .title(title)
            .title_style(styles::title_style(Color::Cyan));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let scroll = scroll_position(self.state.scroll_offset);
        let height = view.height();

        match view {
            RenderedView::Inline(lines) if lines.is_empty() => {
                f.render_widget(placeholder(), inner);
            }
            RenderedView::Inline(lines) => {
                f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
            }
            RenderedView::Columns(columns) => self.render_columns(f, inner, columns, scroll),
        }

        // Render scrollbar
        if height > inner.height as usize {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));
            let mut scrollbar_state = ScrollbarState::new(height)
                .position(self.state.scroll_offset.min(height.saturating_sub(1)));
            f.render_stateful_widget(
                scrollbar,
                area.inner(Margin { vertical: 1, horizontal: 0 }),
                &mut scrollbar_state,
            );
        }
    }

    fn render_columns(&self, f: &mut Frame, area: Rect, columns: SplitColumns, scroll: u16) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let left_block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(styles::BORDER));
        let left_inner = left_block.inner(halves[0]);
        f.render_widget(left_block, halves[0]);

        if columns.left.is_empty() && columns.right.is_empty() {
            f.render_widget(placeholder(), left_inner);
            return;
        }

        f.render_widget(Paragraph::new(columns.left).scroll((scroll, 0)), left_inner);
        f.render_widget(
            Paragraph::new(columns.right).scroll((scroll, 0)),
            halves[1].inner(Margin { vertical: 0, horizontal: 1 }),
        );
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let stats = self.state.stats();

        let first_line = vec![
            Span::styled(" F1 ", styles::key_style(Color::Green)),
            Span::styled(" help  ", styles::hint_style()),
            Span::styled(" F2 ", styles::key_style(Color::Blue)),
            Span::styled(" granularity  ", styles::hint_style()),
            Span::styled(" F3 ", styles::key_style(Color::Magenta)),
            Span::styled(" view  ", styles::hint_style()),
            Span::styled(" Tab ", styles::key_style(Color::DarkGray)),
            Span::styled(" switch pane  ", styles::hint_style()),
            Span::styled(" Esc ", styles::key_style(Color::Red)),
            Span::styled(" quit", styles::hint_style()),
        ];

        let second_line = vec![
            Span::styled("View: ", styles::hint_style()),
            Span::styled(
                self.state.view_mode.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | Granularity: ", styles::hint_style()),
            Span::styled(
                self.state.effective_granularity().to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | Algorithm: ", styles::hint_style()),
            Span::styled(
                self.state.algorithm_name().to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | ", styles::hint_style()),
            Span::styled(format!("+{}", stats.lines_added), styles::add_style()),
            Span::raw(" "),
            Span::styled(format!("-{}", stats.lines_removed), styles::del_style()),
            Span::raw(" "),
            Span::styled(format!("~{}", stats.lines_modified), styles::modified_style()),
            Span::styled(format!("  {}", stats.summary()), styles::hint_style()),
        ];

        let status = Paragraph::new(vec![Line::from(first_line), Line::from(second_line)])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(styles::BORDER))
                    .title(" Status ")
                    .title_style(styles::title_style(Color::Magenta)),
            )
            .alignment(Alignment::Center);

        f.render_widget(status, area);
    }

    fn render_help(&self, f: &mut Frame) {
        let popup_area = centered_rect(70, 70, f.area());

        let key = |keys: &'static str, color: Color, text: &'static str| {
            Line::from(vec![
                Span::styled(keys, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(text),
            ])
        };

        let help_text = vec![
            Line::from(vec![Span::styled(
                "DiffDesk - Text Comparison",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::styled("Algorithm: ", styles::hint_style()),
                Span::raw(format!(
                    "{} - {}",
                    self.state.algorithm_name(),
                    self.state.algorithm_description()
                )),
            ]),
            Line::from(""),
            Line::from("Keyboard Shortcuts:"),
            Line::from(""),
            key("  Esc, Ctrl+Q   ", Color::Red, "- Quit (Esc closes this help first)"),
            key("  F1            ", Color::Green, "- Show/hide this help"),
            key("  F2, Ctrl+G    ", Color::Blue, "- Toggle character/line granularity (inline view)"),
            key("  F3, Ctrl+T    ", Color::Blue, "- Cycle view: Inline, Split, Split (aligned)"),
            key("  Tab           ", Color::Yellow, "- Switch between Original and Modified"),
            key("  Ctrl+L        ", Color::Yellow, "- Clear the focused pane"),
            key("  PgUp, PgDn    ", Color::Magenta, "- Scroll diff output"),
            key("  Ctrl+Home/End ", Color::Magenta, "- Jump to top/bottom of diff output"),
            key("  Arrows        ", Color::Gray, "- Move the cursor"),
            Line::from(""),
            Line::from("Views:"),
            Line::from(""),
            Line::from("• Inline shows both texts interleaved, green added, red removed"),
            Line::from("• Split shows each text in its own column without alignment"),
            Line::from("• Split (aligned) pairs removed and added lines row by row"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
    }
}

fn placeholder() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "No differences to show",
        Style::default().fg(Color::Gray),
    )))
}

fn style_editor(textarea: &mut TextArea<'static>, pane: Pane, focused: bool) {
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(focused))
            .title(format!(" {} ", pane.title()))
            .title_style(styles::title_style(if focused { Color::Cyan } else { Color::Gray })),
    );
    textarea.set_style(styles::neutral_style());
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(format!(
        "Type or paste the {} text here",
        pane.title().to_lowercase()
    ));
    textarea.set_placeholder_style(styles::hint_style());
    // only the focused pane shows a caret
    textarea.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
}

/// Paragraph scroll offset, saturating for outputs taller than `u16::MAX`
fn scroll_position(offset: usize) -> u16 {
    u16::try_from(offset).unwrap_or(u16::MAX)
}

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

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()
}
