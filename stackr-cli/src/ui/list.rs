//! List view rendering

use ratatui::Frame;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use stackr_core::format::{format_ports, short_status, truncate};
use stackr_core::model::ContainerSummary;
use stackr_core::state::{App, scroll_window};

use super::theme::Theme;

const HELP: &str =
    "[↑↓] select  [enter] details  [s]top  [r]esume  [R]estart  [d]elete  [f]refresh  [q]uit";

/// Rows reserved for title, spacing, and help around the scrolled window.
const CHROME_ROWS: usize = 6;

pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(" ⬡ STACKR", theme.title_style()),
        Span::styled(
            format!("  {} containers", app.containers.len()),
            theme.muted_style(),
        ),
    ]));
    lines.push(Line::default());

    if app.containers.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No containers found.",
            theme.muted_style(),
        )));
    } else {
        let visible = (area.height as usize).saturating_sub(CHROME_ROWS).max(5);
        let offset = scroll_window(app.cursor, visible);
        let end = (offset + visible).min(app.containers.len());

        for (i, container) in app.containers[offset..end].iter().enumerate() {
            lines.push(container_line(container, offset + i == app.cursor, theme));
        }

        if app.containers.len() > visible {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("  [{}/{}]", app.cursor + 1, app.containers.len()),
                theme.muted_style(),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(HELP, theme.help_style())));

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn container_line(container: &ContainerSummary, selected: bool, theme: &Theme) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let row = format!(
        "{:<16}  {:<24}  {:<16}  {}",
        truncate(&container.name, 16),
        truncate(&container.image, 24),
        truncate(&short_status(&container.status), 16),
        truncate(&format_ports(&container.ports), 16),
    );

    let row_style = if selected {
        theme.selected_style()
    } else {
        theme.state_style(container.state)
    };

    Line::from(vec![
        Span::styled(marker.to_string(), row_style),
        Span::styled(
            theme.state_glyph(container.state).to_string(),
            theme.state_style(container.state),
        ),
        Span::raw(" "),
        Span::styled(row, row_style),
    ])
}
