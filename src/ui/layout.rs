use tui::layout::{Constraint, Layout, Rect};
pub const HEADING_HEIGHT: u16 = 1;
pub const TAB_BAR_HEIGHT: u16 = 3;
pub const LOG_PANEL_HEIGHT: u16 = 8;

/// Layout areas for one frame.
pub struct LayoutAreas {
    /// Everything except the log panel; full-page states draw here.
    pub body: Rect,
    pub heading: Rect,
    pub tab_bar: [Rect; 2],
    pub main: Rect,
    pub logs: Option<Rect>,
}

impl LayoutAreas {
    pub fn new(area: Rect, full_screen: bool, show_logs: bool) -> Self {
        let (area, logs) = if show_logs && area.height > LOG_PANEL_HEIGHT * 2 {
            let [body, logs] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANEL_HEIGHT)])
                    .areas(area);
            (body, Some(logs))
        } else {
            (area, None)
        };

        if full_screen {
            return LayoutAreas {
                body: area,
                heading: Rect::ZERO,
                tab_bar: [Rect::ZERO, Rect::ZERO],
                main: area,
                logs,
            };
        }

        let [heading, tab, main] = Layout::vertical([
            Constraint::Length(HEADING_HEIGHT),
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);

        LayoutAreas {
            body: area,
            heading,
            tab_bar: Self::split_tab_bar(tab),
            main,
            logs,
        }
    }

    fn split_tab_bar(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(85), Constraint::Percentage(15)]).areas(area)
    }
}
