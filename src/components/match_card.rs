use cricbuzz_api::Match;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::widgets::{Block, BorderType, Borders, Widget};

/// Rows per card: border, header, two team rows, footer, border.
pub const CARD_HEIGHT: u16 = 6;

const ORANGE: Color = Color::Rgb(249, 115, 22);

/// One display row of a card: text pinned left, text pinned right.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRow {
    pub left: String,
    pub left_style: Style,
    pub right: String,
    pub right_style: Style,
}

impl CardRow {
    fn new(left: String, left_style: Style, right: String, right_style: Style) -> Self {
        Self { left, left_style, right, right_style }
    }
}

/// Finished matches get the "result" colour; live, scheduled and everything else share one.
pub fn status_style(game: &Match) -> Style {
    if game.is_complete() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ORANGE)
    }
}

pub fn card_rows(game: &Match) -> [CardRow; 4] {
    let info = &game.match_info;
    let dim = Style::default().fg(Color::Gray);
    let team = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let score = Style::default().fg(Color::White);

    let innings = |i: Option<cricbuzz_api::Innings>| i.map(|i| i.to_string()).unwrap_or_default();

    let mut footer = info.venue_line();
    if let Some(date) = info.start_date_label() {
        footer.push_str("  ·  ");
        footer.push_str(&date);
    }

    [
        CardRow::new(
            format!("{} - {}", info.series_name, info.match_desc),
            dim,
            format!(" {} ", info.match_format),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
        CardRow::new(info.team1.team_name.clone(), team, innings(game.team1_innings()), score),
        CardRow::new(info.team2.team_name.clone(), team, innings(game.team2_innings()), score),
        CardRow::new(footer, dim, game.status_text().to_string(), status_style(game)),
    ]
}

pub struct MatchCard<'a> {
    pub game: &'a Match,
}

impl Widget for MatchCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        for (idx, row) in card_rows(self.game).iter().enumerate() {
            if idx as u16 >= inner.height {
                break;
            }
            let y = inner.y + idx as u16;
            let right_width = (row.right.chars().count() as u16).min(inner.width);
            let left_width = inner.width.saturating_sub(right_width + 1) as usize;
            buf.set_stringn(inner.x, y, &row.left, left_width, row.left_style);
            if right_width > 0 {
                let x = inner.x + inner.width - right_width;
                buf.set_stringn(x, y, &row.right, right_width as usize, row.right_style);
            }
        }
    }
}

/// Vertical stack of cards starting at `scroll`. Cards that do not fit whole are skipped.
pub struct MatchListView<'a> {
    pub matches: &'a [&'a Match],
    pub scroll: usize,
}

impl MatchListView<'_> {
    pub fn visible_cards(area: Rect) -> usize {
        (area.height / CARD_HEIGHT) as usize
    }
}

impl Widget for MatchListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = Self::visible_cards(area);
        for (slot, game) in self.matches.iter().copied().skip(self.scroll).take(visible).enumerate() {
            let y = area.y + slot as u16 * CARD_HEIGHT;
            MatchCard { game }.render(Rect::new(area.x, y, area.width, CARD_HEIGHT), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricbuzz_api::{Innings, MatchInfo, MatchScore, TeamInfo, TeamScore, VenueInfo};

    fn game(state: &str, status: Option<&str>) -> Match {
        Match {
            match_info: MatchInfo {
                series_name: "Asia Cup".into(),
                match_desc: "Final".into(),
                match_format: "T20".into(),
                team1: TeamInfo { team_name: "India".into(), team_s_name: Some("IND".into()) },
                team2: TeamInfo { team_name: "Pakistan".into(), team_s_name: None },
                venue_info: Some(VenueInfo {
                    ground: Some("Dubai International Cricket Stadium".into()),
                    city: Some("Dubai".into()),
                }),
                state: state.into(),
                status: status.map(Into::into),
                ..Default::default()
            },
            match_score: None,
        }
    }

    #[test]
    fn header_joins_series_and_description() {
        let rows = card_rows(&game("Preview", None));
        assert_eq!(rows[0].left, "Asia Cup - Final");
        assert_eq!(rows[0].right, " T20 ");
    }

    #[test]
    fn team_rows_blank_without_score() {
        let rows = card_rows(&game("Preview", None));
        assert_eq!(rows[1].left, "India");
        assert_eq!(rows[1].right, "");
        assert_eq!(rows[2].left, "Pakistan");
        assert_eq!(rows[2].right, "");
    }

    #[test]
    fn team_rows_show_first_innings() {
        let mut g = game("Complete", Some("India won by 5 wkts"));
        g.match_score = Some(MatchScore {
            team1_score: Some(TeamScore {
                inngs1: Some(Innings { runs: 150, wickets: 5, overs: 19.4 }),
                inngs2: Some(Innings { runs: 1, wickets: 0, overs: 1.0 }),
            }),
            team2_score: Some(TeamScore {
                inngs1: Some(Innings { runs: 146, wickets: 10, overs: 19.1 }),
                inngs2: None,
            }),
        });
        let rows = card_rows(&g);
        assert_eq!(rows[1].right, "150/5 (19.4)");
        assert_eq!(rows[2].right, "146/10 (19.1)");
    }

    #[test]
    fn footer_shows_venue_and_status_fallback() {
        let rows = card_rows(&game("Preview", None));
        assert_eq!(rows[3].left, "Dubai International Cricket Stadium, Dubai");
        assert_eq!(rows[3].right, "Preview");

        let rows = card_rows(&game("In Progress", Some("Pakistan need 20 runs")));
        assert_eq!(rows[3].right, "Pakistan need 20 runs");
    }

    #[test]
    fn status_style_has_two_buckets() {
        let complete = status_style(&game("Complete", Some("India won")));
        let live = status_style(&game("In Progress", None));
        let preview = status_style(&game("Preview", None));
        assert_eq!(complete.fg, Some(Color::Green));
        assert_eq!(live, preview);
        assert_ne!(live, complete);
    }

    #[test]
    fn list_renders_only_whole_cards() {
        let a = game("Complete", Some("India won"));
        let b = game("Preview", None);
        let matches = [&a, &b];
        let area = Rect::new(0, 0, 60, CARD_HEIGHT + 3);
        let mut buf = Buffer::empty(area);
        MatchListView { matches: &matches, scroll: 0 }.render(area, &mut buf);

        let rows: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect();
        assert!(rows[1].contains("Asia Cup - Final"));
        assert!(rows[4].contains("India won"));
        assert!(rows[CARD_HEIGHT as usize].trim().is_empty());
    }
}
