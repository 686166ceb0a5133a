//! Drawing of the gallery screen and its overlays

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use crate::gallery::GalleryView;
use crate::pagination::PageToken;
use crate::tui::app::{App, Mode, StatusLevel};
use crate::tui::styles::Theme;
use crate::tui::Frame;
use crate::version;

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Range label
            Constraint::Min(3),    // Tiles
            Constraint::Length(1), // Page navigation
            Constraint::Length(1), // Page jump
            Constraint::Length(1), // Status bar
        ])
        .split(frame.size());

    let gallery = app.galleries.active();
    let theme = &app.theme;

    frame.render_widget(
        Paragraph::new(gallery.range_label()).style(theme.dim_style()),
        chunks[0],
    );
    render_tiles(app, gallery, frame, chunks[1]);
    frame.render_widget(Paragraph::new(navigation_line(gallery, theme)), chunks[2]);
    render_jump(app, frame, chunks[3]);
    render_status_bar(app, frame, chunks[4]);

    match &app.mode {
        Mode::Help => render_popup(frame, theme, "Help", app.key_map.help_text()),
        Mode::Viewer { tile } => {
            let mut text = format!("{}\n\n{}", tile.caption, tile.url);
            if let Some(rank) = tile.rank {
                text.push_str(&format!("\n\nRank {} · image #{}", rank, tile.id));
            }
            render_popup(frame, theme, "Image", text);
        }
        Mode::Browse | Mode::Jump { .. } => {}
    }

    if app.loading {
        let area = centered_rect(30, 15, frame.size());
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new("Retrieving images...")
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.focused_border_style()),
                ),
            area,
        );
    }
}

fn render_tiles(app: &App, gallery: &dyn GalleryView, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let items: Vec<ListItem> = gallery
        .tiles()
        .into_iter()
        .map(|tile| {
            let head = match tile.rank {
                Some(rank) => format!("{:>5}. #{:<6}", rank, tile.id),
                None => format!("{:<12}", tile.caption),
            };
            ListItem::new(Line::from(vec![
                Span::styled(head, theme.text_style()),
                Span::raw("  "),
                Span::styled(tile.url, theme.dim_style()),
            ]))
        })
        .collect();

    let title = format!(" {} · {} ", gallery.kind().title(), version::full_version());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.border_style()),
        )
        .style(theme.base_style())
        .highlight_style(theme.selection_style())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// `← Previous  1 … 4 [5] 6 … 150  Next →` with the current page highlighted
pub fn navigation_line(gallery: &dyn GalleryView, theme: &Theme) -> Line<'static> {
    let paginator = gallery.paginator();
    let tokens = gallery.navigation_tokens();
    if tokens.is_empty() {
        return Line::default();
    }

    let arrow_style = |enabled: bool| {
        if enabled {
            theme.page_style()
        } else {
            theme.disabled_style()
        }
    };

    let mut spans = vec![Span::styled("← Previous ", arrow_style(paginator.can_go_previous()))];
    for token in tokens {
        let span = match token {
            PageToken::Page(page) if page == paginator.current_page() => {
                Span::styled(format!(" {} ", page), theme.current_page_style())
            }
            PageToken::Page(page) => Span::styled(format!(" {} ", page), theme.page_style()),
            PageToken::Ellipsis => Span::styled(" … ", theme.dim_style()),
        };
        spans.push(span);
    }
    spans.push(Span::styled(" Next →", arrow_style(paginator.can_go_next())));

    Line::from(spans)
}

fn render_jump(app: &App, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let line = match &app.mode {
        Mode::Jump { input } => Line::from(vec![
            Span::styled("Go to page: ", theme.text_style()),
            Span::styled(format!("{}_", input), theme.selection_style()),
        ]),
        _ if app.galleries.active().paginator().jump_enabled() => {
            Line::from(Span::styled("g: go to page", theme.dim_style()))
        }
        _ => Line::default(),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let (text, style) = match &app.status {
        Some(status) => {
            let style = match status.level {
                StatusLevel::Info => theme.status_bar_style(),
                StatusLevel::Warning => theme.warning_style(),
                StatusLevel::Error => theme.error_style(),
            };
            (status.text.clone(), style)
        }
        None => (
            "?: help | s: submit sketch | Tab: switch gallery | q: quit".to_string(),
            theme.status_bar_style(),
        ),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_popup(frame: &mut Frame, theme: &Theme, title: &str, text: String) {
    let area = centered_rect(60, 50, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title.to_string())
                    .border_style(theme.focused_border_style()),
            )
            .style(theme.help_style()),
        area,
    );
}

/// Create a centered rectangle with given percentage of the screen
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gallery::Galleries;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_navigation_line() {
        let mut galleries = Galleries::new(&Config::default()).unwrap();
        galleries.active_mut().paginator_mut().go_to_page(5).unwrap();

        let line = navigation_line(galleries.active(), &Theme::default());
        assert_eq!(line_text(&line), "← Previous  1  …  4  5  6  …  150  Next →");
    }

    #[test]
    fn test_navigation_line_empty_for_single_page() {
        let mut galleries = Galleries::new(&Config::default()).unwrap();
        galleries.apply_query(Ok(Vec::new())).unwrap();
        assert!(navigation_line(galleries.active(), &Theme::default()).spans.is_empty());
    }

    #[tokio::test]
    async fn test_render_reference_page() {
        let (sender, _receiver) = mpsc::unbounded_channel();
        let app = App::new(&Config::default(), None, sender).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol.as_str()).collect();
        assert!(screen.contains("Showing 1-20 of 3000 images"));
        assert!(screen.contains("Image 0"));
    }
}
