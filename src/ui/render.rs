use crate::ui::app::{App, Focus};
use crate::ui::footer::{Footer, FooterMode};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::movie_grid::MovieGrid;
use crate::ui::movie_modal::render_movie_modal;
use crate::ui::pagination::Pagination;
use crate::ui::search::SearchPhase;
use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, TMDB_TEAL};
use crate::ui::toast::ToastStack;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

pub const LOADING_MESSAGE: &str = "Loading movies...";
const IDLE_MESSAGE: &str = "Type a movie title and press Enter.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let search = app.search_state();
    let regions = layout_regions(area, search.show_pagination());
    let overlay_open = app.overlay_open();

    let header_focused = app.focus() == Focus::SearchBar && !overlay_open;
    Header::new(app.search_bar(), header_focused).render(frame, regions.header);

    if search.show_pagination() {
        frame.render_widget(
            Pagination::new(search.total_pages() as usize, app.current_page_index()),
            regions.pagination,
        );
    }

    frame.render_widget(status_line(app), regions.status);

    frame.render_widget(Clear, regions.body);
    frame.render_widget(
        MovieGrid::new(
            search.movies(),
            app.grid_cursor(),
            app.focus() == Focus::Grid,
        ),
        regions.body,
    );

    let mode = if overlay_open {
        FooterMode::Overlay
    } else {
        match app.focus() {
            Focus::SearchBar => FooterMode::Search,
            Focus::Grid => FooterMode::Grid,
        }
    };
    let footer = Footer::new(mode);
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    if let Some(movie) = search.selected() {
        render_movie_modal(frame, movie);
    }

    // Notifications float above everything, overlay included.
    frame.render_widget(ToastStack::new(app.toasts()), area);
}

fn status_line(app: &App) -> Paragraph<'static> {
    let search = app.search_state();
    let line = match search.phase() {
        SearchPhase::Idle => Line::from(Span::styled(
            IDLE_MESSAGE,
            Style::default().fg(HEADER_SEPARATOR),
        )),
        SearchPhase::Loading => {
            let frame = SPINNER[app.animation_tick() as usize % SPINNER.len()];
            Line::from(vec![
                Span::styled(format!(" {frame} "), Style::default().fg(TMDB_TEAL)),
                Span::styled(LOADING_MESSAGE, Style::default().fg(HEADER_TEXT)),
            ])
        }
        SearchPhase::Errored => Line::from(Span::styled(
            format!(" {}", search.error_message().unwrap_or_default()),
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        SearchPhase::Empty => Line::from(Span::styled(
            " No results.",
            Style::default().fg(HEADER_SEPARATOR),
        )),
        SearchPhase::Loaded => {
            let total_results = search.page().map(|page| page.total_results).unwrap_or(0);
            Line::from(vec![
                Span::styled(" ● ", Style::default().fg(STATUS_OK)),
                Span::styled(
                    format!(
                        "Page {} of {} · {} results",
                        search.current_page(),
                        search.total_pages().max(1),
                        total_results
                    ),
                    Style::default().fg(HEADER_TEXT),
                ),
            ])
        }
    };
    Paragraph::new(line)
}
