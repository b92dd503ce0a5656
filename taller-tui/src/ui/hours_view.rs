use super::*;
use taller_core::daily::{remaining_hours, HOUR_OPTIONS};

pub fn render_hours_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(4), // Project banner + remaining hours
            Constraint::Length(9), // 3x3 increment grid
            Constraint::Min(0),
        ])
        .split(body);

    let project_name = app
        .selected_project
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_default();
    let remaining = remaining_hours(app.hours_today());

    let banner = vec![
        Line::from(vec![
            Span::styled("Unidad: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                project_name,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Horas pendientes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{remaining}h"),
                Style::default()
                    .fg(if remaining > 0.0 { Color::White } else { Color::Red })
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(banner).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Registro de Horas ")
                .padding(Padding::horizontal(1)),
        ),
        chunks[0],
    );

    render_increment_grid(frame, app, chunks[1]);

    if remaining == 0.0 {
        let done = Paragraph::new(Line::from(Span::styled(
            "Jornada completada — límite de 8h alcanzado",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(done, chunks[2]);
    }
}

/// The nine increments laid out as a 3x3 grid. Increments that would push
/// the daily total past the limit are shown but dimmed out.
fn render_increment_grid(frame: &mut Frame, app: &App, area: Rect) {
    let logged = app.hours_today();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row_area);

        for (col_index, cell_area) in cells.iter().enumerate() {
            let index = row_index * 3 + col_index;
            let hours = HOUR_OPTIONS[index];
            let selectable = taller_core::daily::is_selectable(hours, logged);
            let selected = index == app.hour_index;

            let style = if !selectable {
                Style::default().fg(Color::DarkGray)
            } else if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let border_style = if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let label = format!("{hours} h");
            let cell = Paragraph::new(Line::from(Span::styled(label, style)))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            frame.render_widget(cell, *cell_area);
        }
    }
}
