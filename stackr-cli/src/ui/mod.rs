//! Rendering for the two views plus the fault screen.

pub mod detail;
pub mod list;
pub mod theme;

use ratatui::Frame;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use stackr_core::state::{App, ViewMode};

use theme::Theme;

pub fn draw(frame: &mut Frame, app: &mut App, theme: &Theme) {
    // A recorded fetch fault suppresses the view body until the next
    // successful fetch clears it.
    if let Some(fault) = &app.fault {
        let text = Text::from(vec![
            Line::from(vec![
                Span::styled("Error: ", theme.error_style()),
                Span::raw(fault.clone()),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Press f to retry, q to quit.",
                theme.help_style(),
            )),
        ]);
        frame.render_widget(Paragraph::new(text), frame.area());
        return;
    }

    match app.view {
        ViewMode::List => list::draw(frame, app, theme),
        ViewMode::Detail => detail::draw(frame, app, theme),
    }
}
