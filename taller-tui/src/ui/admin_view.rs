use super::utils::centered_rect;
use super::*;
use crate::app::{AdminState, AdminTab};
use ratatui::widgets::ListState;

const LOG_STAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]");

pub fn render_admin_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let Some(admin) = app.admin.take() else {
        return;
    };

    if !admin.authorized {
        render_passphrase_gate(frame, &admin, body);
    } else {
        render_panel(frame, app, &admin, body);
    }

    app.admin = Some(admin);
}

fn render_passphrase_gate(frame: &mut Frame, admin: &AdminState, body: Rect) {
    let area = centered_rect(50, 9, body);
    clear_area(frame, area);

    let masked = "•".repeat(admin.passphrase_input.value.chars().count());
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Introduce la clave de administrador",
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::styled("Clave: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{masked}█"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    if let Some(error) = &admin.auth_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Entrar  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cerrar"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(
                    " Acceso HMF Control ",
                    Style::default().fg(Color::Red),
                ))
                .padding(Padding::horizontal(2)),
        )
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

fn render_panel(frame: &mut Frame, app: &App, admin: &AdminState, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Tab body
            Constraint::Length(1), // Tab hints
        ])
        .split(body);

    let mut tab_spans = Vec::new();
    for (i, tab) in AdminTab::ALL.iter().enumerate() {
        let style = if *tab == admin.tab {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tab_spans.push(Span::styled(format!(" {} {} ", i + 1, tab.title()), style));
        tab_spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(tab_spans)), chunks[0]);

    match admin.tab {
        AdminTab::Logs => render_logs_tab(frame, app, admin, chunks[1]),
        AdminTab::Workers => render_workers_tab(frame, app, admin, chunks[1]),
        AdminTab::Projects => render_projects_tab(frame, app, admin, chunks[1]),
    }

    let hints = match admin.tab {
        AdminTab::Logs => "e: Exportar Excel  r: Vaciar historial  Tab: Pestaña  Esc: Volver",
        AdminTab::Workers => "a: Añadir  e: Editar  d: Borrar  Tab: Pestaña  Esc: Volver",
        AdminTab::Projects => {
            "a: Añadir  e: Editar  d: Borrar  t: Cerrar/Reabrir  Tab: Pestaña  Esc: Volver"
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[2],
    );
}

fn render_logs_tab(frame: &mut Frame, app: &App, admin: &AdminState, area: Rect) {
    let logs = app.admin_logs();
    let items: Vec<ListItem> = logs
        .iter()
        .enumerate()
        .map(|(i, log)| {
            let offset = taller_core::daily::local_offset();
            let stamp = log
                .timestamp
                .to_offset(offset)
                .format(LOG_STAMP_FORMAT)
                .unwrap_or_default();
            list_item(
                format!(
                    "{stamp}  {:>4}h  {}  —  {}",
                    log.hours, log.worker_name, log.project_name
                ),
                i == admin.selected_index,
            )
        })
        .collect();

    let title = format!(" Registros del Taller ({}) ", logs.len());
    if items.is_empty() {
        render_empty_tab(frame, area, title, "Sin registros");
        return;
    }
    let list = bordered_list(items, title, true);
    let mut state = ListState::default().with_selected(Some(admin.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_workers_tab(frame: &mut Frame, app: &App, admin: &AdminState, area: Rect) {
    let items: Vec<ListItem> = app
        .workers
        .iter()
        .enumerate()
        .map(|(i, worker)| list_item(worker.name.clone(), i == admin.selected_index))
        .collect();

    let title = format!(" Personal ({}) ", app.workers.len());
    if items.is_empty() {
        render_empty_tab(frame, area, title, "Lista de personal vacía");
        return;
    }
    let list = bordered_list(items, title, true);
    let mut state = ListState::default().with_selected(Some(admin.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_projects_tab(frame: &mut Frame, app: &App, admin: &AdminState, area: Rect) {
    let items: Vec<ListItem> = app
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let status = if project.active {
                Span::styled("ACTIVO    ", Style::default().fg(Color::Green))
            } else {
                Span::styled("FINALIZADO", Style::default().fg(Color::DarkGray))
            };
            let name_style = if i == admin.selected_index {
                Style::default().fg(Color::Yellow)
            } else if project.active {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                status,
                Span::raw("  "),
                Span::styled(project.name.clone(), name_style),
            ]))
        })
        .collect();

    let title = format!(" Unidades ({}) ", app.projects.len());
    if items.is_empty() {
        render_empty_tab(frame, area, title, "No hay unidades registradas");
        return;
    }
    let list = bordered_list(items, title, true);
    let mut state = ListState::default().with_selected(Some(admin.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_empty_tab(frame: &mut Frame, area: Rect, title: String, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
