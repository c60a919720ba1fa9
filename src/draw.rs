use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::match_card::MatchListView;
use crate::state::app_state::ViewState;
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;

pub const HEADING: &str = "Live Cricket Scores";
pub const LOADING_MESSAGE: &str = "Loading cricket scores...";
pub const NO_DATA_MESSAGE: &str = "No data available";
pub const NO_MATCHES_MESSAGE: &str = "No matches found for this category";

const HELP_TEXT: &str = "Keys

  h / ← / Shift-Tab   previous category
  l / → / Tab         next category
  1-9                 jump to category
  j / ↓   k / ↑       scroll matches
  f                   toggle full screen
  \"                   toggle log panel
  ?  Esc              open / close help
  q  Ctrl-C           quit";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let result = terminal.draw(|f| {
        let layout = LayoutAreas::new(f.area(), app.settings.full_screen, app.state.show_logs);

        if app.state.menu == MenuItem::Help {
            draw_placeholder(f, layout.body, HELP_TEXT, Alignment::Left);
        } else {
            match &app.state.view {
                ViewState::Loading => draw_loading(f, layout.body, loading),
                ViewState::Error(message) => draw_message(
                    f,
                    layout.body,
                    message,
                    Style::default().fg(Color::Red),
                ),
                ViewState::Empty => draw_message(
                    f,
                    layout.body,
                    NO_DATA_MESSAGE,
                    Style::default().fg(Color::Gray),
                ),
                ViewState::Ready(_) => {
                    if !app.settings.full_screen {
                        draw_heading(f, layout.heading, app);
                        draw_tabs(f, layout.tab_bar, app);
                    }
                    draw_matches(f, layout.main, app);
                }
            }
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }
    });

    if let Err(e) = result {
        error!("Failed to draw frame: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// One line of text, vertically and horizontally centred in `area`.
fn centered_line(area: Rect) -> Rect {
    let [_, line, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    line
}

fn draw_message(f: &mut Frame, area: Rect, message: &str, style: Style) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(message).style(style).alignment(Alignment::Center),
        centered_line(inner),
    );
}

fn draw_loading(f: &mut Frame, area: Rect, loading: LoadingState) {
    let (spinner, style) = match loading.spinner_char {
        ERROR_CHAR => (ERROR_CHAR, Style::default().fg(Color::Red)),
        c => (c, Style::default().fg(Color::White)),
    };
    let text = if loading.is_loading {
        format!("{spinner} {LOADING_MESSAGE}")
    } else {
        LOADING_MESSAGE.to_string()
    };
    draw_message(f, area, &text, style);
}

fn draw_heading(f: &mut Frame, area: Rect, app: &App) {
    let [title, fetched] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).areas(area);
    f.render_widget(
        Paragraph::new(Span::styled(
            HEADING,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        title,
    );
    if let Some(at) = app.state.fetched_at.as_deref() {
        f.render_widget(
            Paragraph::new(format!("Fetched {at} "))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
            fetched,
        );
    }
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::Gray);
    let border_type = BorderType::Rounded;

    let titles: Vec<Line> = app
        .state
        .match_types()
        .into_iter()
        .map(Line::from)
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .select(app.state.active_tab_index())
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn draw_matches(f: &mut Frame, area: Rect, app: &App) {
    let matches = app.state.current_matches();
    let title = if matches.is_empty() {
        format!(" {} ", app.state.tabs.active)
    } else {
        format!(" {} · {} matches ", app.state.tabs.active, matches.len())
    };
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if matches.is_empty() {
        f.render_widget(
            Paragraph::new(NO_MATCHES_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            centered_line(inner),
        );
        return;
    }

    f.render_widget(
        MatchListView {
            matches: &matches,
            scroll: app.state.match_list.scroll_offset,
        },
        inner,
    );
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str, alignment: Alignment) {
    let block = default_border(Color::DarkGray).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::Gray))
            .alignment(alignment),
        inner,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(widget, area);
}
