//! Detail view rendering
//!
//! The whole view is built as one list of styled lines and shown through the
//! scroll viewport, so the layout re-flows on every render from the current
//! geometry and data. Below 80 columns every section stacks full-width;
//! otherwise Resources and Network sit side by side.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use stackr_core::format::{filled_cells, format_bytes, format_timestamp, truncate};
use stackr_core::model::{ContainerInspection, ResourceStats};
use stackr_core::state::App;

use super::theme::Theme;

const HELP: &str =
    "[↑↓] scroll  [s]top  [r]esume  [R]estart  [d]elete  [f]refresh  [esc]back  [q]uit";

/// Narrower than this and the side-by-side row stacks vertically.
const STACK_THRESHOLD: u16 = 80;

const ENV_CAP: usize = 10;
const LABEL_CAP: usize = 8;

pub fn draw(frame: &mut Frame, app: &mut App, theme: &Theme) {
    let area = frame.area();
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).split(area);
    let content_area = chunks[0];
    let footer_area = chunks[1];

    let Some(inspection) = app.inspection.as_ref() else {
        frame.render_widget(Paragraph::new("Loading..."), content_area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(HELP, theme.help_style()))),
            footer_area,
        );
        return;
    };

    let text = build_content(inspection, app.stats.as_ref(), area.width, theme);
    app.viewport.height = content_area.height as usize;
    app.viewport.set_content_height(text.lines.len());

    frame.render_widget(
        Paragraph::new(text).scroll((app.viewport.scroll as u16, 0)),
        content_area,
    );

    let footer = Line::from(vec![
        Span::styled(HELP, theme.help_style()),
        Span::styled(
            format!("  [{}%]", app.viewport.scroll_percent()),
            theme.muted_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn build_content(
    inspection: &ContainerInspection,
    stats: Option<&ResourceStats>,
    width: u16,
    theme: &Theme,
) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("⬡  ", theme.accent_style()),
        Span::styled(inspection.name.clone(), theme.title_style()),
        Span::raw("  "),
        Span::styled(
            theme.state_glyph(inspection.state).to_string(),
            theme.state_style(inspection.state),
        ),
        Span::raw(" "),
        Span::styled(inspection.state.label().to_uppercase(), theme.value_style()),
    ]));
    lines.push(Line::from(Span::styled(
        "─".repeat(40),
        theme.muted_style(),
    )));
    lines.push(Line::default());

    let available = (width.saturating_sub(2) as usize).max(40);

    if width < STACK_THRESHOLD {
        lines.extend(resources_box(stats, available, theme));
        lines.push(Line::default());
        lines.extend(network_box(inspection, available, theme));
    } else {
        let box_width = ((available - 3) / 2).max(30);
        let resources = resources_box(stats, box_width, theme);
        let network = network_box(inspection, box_width, theme);
        lines.extend(join_horizontal(resources, network, box_width, 2));
    }
    lines.push(Line::default());

    lines.extend(info_box(inspection, available, theme));
    lines.push(Line::default());

    if !inspection.mounts.is_empty() {
        lines.extend(mounts_box(inspection, available, theme));
        lines.push(Line::default());
    }
    if !inspection.env.is_empty() {
        lines.extend(env_box(inspection, available, theme));
        lines.push(Line::default());
    }
    if !inspection.labels.is_empty() {
        lines.extend(labels_box(inspection, available, theme));
        lines.push(Line::default());
    }

    Text::from(lines)
}

/// Wrap body lines in a rounded border with a title row. Body lines are
/// expected to fit `width - 4`; builders truncate their own content.
fn boxed(title: &str, body: Vec<Line<'static>>, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let width = width.max(8);
    let inner = width - 4;

    let mut rows: Vec<Line<'static>> = Vec::with_capacity(body.len() + 2);
    rows.push(Line::from(Span::styled(title.to_string(), theme.box_title_style())));
    rows.push(Line::default());
    rows.extend(body);

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(width - 2)),
        theme.border_style(),
    )));
    for row in rows {
        let pad = inner.saturating_sub(row.width());
        let mut spans = vec![Span::styled("│ ".to_string(), theme.border_style())];
        spans.extend(row.spans);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(" │".to_string(), theme.border_style()));
        out.push(Line::from(spans));
    }
    out.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        theme.border_style(),
    )));
    out
}

/// Place two equal-height boxes next to each other, padding the shorter one.
fn join_horizontal(
    left: Vec<Line<'static>>,
    right: Vec<Line<'static>>,
    left_width: usize,
    gap: usize,
) -> Vec<Line<'static>> {
    let rows = left.len().max(right.len());
    let mut out = Vec::with_capacity(rows);
    for i in 0..rows {
        let mut spans: Vec<Span<'static>> = Vec::new();
        match left.get(i) {
            Some(line) => {
                let used = line.width();
                spans.extend(line.spans.clone());
                spans.push(Span::raw(" ".repeat(left_width.saturating_sub(used))));
            }
            None => spans.push(Span::raw(" ".repeat(left_width))),
        }
        spans.push(Span::raw(" ".repeat(gap)));
        if let Some(line) = right.get(i) {
            spans.extend(line.spans.clone());
        }
        out.push(Line::from(spans));
    }
    out
}

fn bar_spans(percent: f64, width: usize, theme: &Theme) -> Vec<Span<'static>> {
    let filled = filled_cells(percent, width);
    vec![
        Span::styled("█".repeat(filled), theme.accent_style()),
        Span::styled("░".repeat(width - filled), theme.muted_style()),
    ]
}

fn resources_box(
    stats: Option<&ResourceStats>,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    // A failed stats call renders as all zeros; it is never an error here.
    let stats = stats.copied().unwrap_or_default();
    let bar_width = width.saturating_sub(20).max(10);

    let mut body: Vec<Line<'static>> = Vec::new();

    let mut cpu = vec![Span::styled("CPU    ".to_string(), theme.label_style())];
    cpu.extend(bar_spans(stats.cpu_percent(), bar_width, theme));
    cpu.push(Span::styled(
        format!("  {:5.1}%", stats.cpu_percent()),
        theme.value_style(),
    ));
    body.push(Line::from(cpu));

    let mut mem = vec![Span::styled("RAM    ".to_string(), theme.label_style())];
    mem.extend(bar_spans(stats.mem_percent(), bar_width, theme));
    mem.push(Span::styled(
        format!("  {}", format_bytes(stats.mem_usage)),
        theme.value_style(),
    ));
    body.push(Line::from(mem));

    body.push(Line::from(vec![
        Span::styled("Limit  ".to_string(), theme.label_style()),
        Span::styled(format_bytes(stats.mem_limit), theme.value_style()),
    ]));
    body.push(Line::from(vec![
        Span::styled("PIDs   ".to_string(), theme.label_style()),
        Span::styled(format!("{}", stats.pids), theme.value_style()),
    ]));

    boxed("RESOURCES", body, width, theme)
}

fn network_box(
    inspection: &ContainerInspection,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let mut body: Vec<Line<'static>> = Vec::new();

    if let Some(net) = inspection.networks.first() {
        body.push(kv("Network", &net.name, inner, theme));
        body.push(kv("IP", &net.ip, inner, theme));
        body.push(kv("Gateway", &net.gateway, inner, theme));
    }
    if !inspection.port_bindings.is_empty() {
        body.push(kv(
            "Ports",
            &inspection.port_bindings.join(", "),
            inner,
            theme,
        ));
    }
    if body.is_empty() {
        body.push(Line::from(Span::styled(
            "no networks".to_string(),
            theme.muted_style(),
        )));
    }

    boxed("NETWORK", body, width, theme)
}

fn info_box(inspection: &ContainerInspection, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let restart = format!(
        "{} (count: {})",
        inspection.restart_policy, inspection.restart_count
    );

    let body = vec![
        kv("ID", inspection.short_id(), inner, theme),
        kv("Image", &inspection.image, inner, theme),
        kv(
            "Created",
            &format_timestamp(&inspection.created_at),
            inner,
            theme,
        ),
        kv(
            "Started",
            &format_timestamp(&inspection.started_at),
            inner,
            theme,
        ),
        kv("Restart", &restart, inner, theme),
        kv("Platform", &inspection.platform, inner, theme),
    ];

    boxed("CONTAINER INFO", body, width, theme)
}

fn mounts_box(inspection: &ContainerInspection, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let body = inspection
        .mounts
        .iter()
        .map(|mount| {
            let mode = if mount.read_write { "rw" } else { "ro" };
            let line = format!(
                "{:<6}  {}  →  {}  [{}]",
                mount.kind,
                truncate(&mount.source, 30),
                truncate(&mount.destination, 30),
                mode,
            );
            Line::from(Span::styled(truncate(&line, inner), theme.value_style()))
        })
        .collect();

    boxed("MOUNTS", body, width, theme)
}

fn env_box(inspection: &ContainerInspection, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let mut body: Vec<Line<'static>> = inspection
        .env
        .iter()
        .take(ENV_CAP)
        .map(|env| Line::from(Span::styled(truncate(env, inner), theme.value_style())))
        .collect();
    if inspection.env.len() > ENV_CAP {
        body.push(Line::from(Span::styled(
            format!("… and {} more", inspection.env.len() - ENV_CAP),
            theme.muted_style(),
        )));
    }

    boxed("ENVIRONMENT", body, width, theme)
}

fn labels_box(inspection: &ContainerInspection, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let mut body: Vec<Line<'static>> = inspection
        .labels
        .iter()
        .take(LABEL_CAP)
        .map(|(key, value)| {
            Line::from(Span::styled(
                truncate(&format!("{}={}", key, value), inner),
                theme.value_style(),
            ))
        })
        .collect();
    if inspection.labels.len() > LABEL_CAP {
        body.push(Line::from(Span::styled(
            format!("… and {} more", inspection.labels.len() - LABEL_CAP),
            theme.muted_style(),
        )));
    }

    boxed("LABELS", body, width, theme)
}

fn kv(label: &str, value: &str, inner: usize, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<8}  ", label), theme.label_style()),
        Span::styled(truncate(value, inner.saturating_sub(10)), theme.value_style()),
    ])
}
