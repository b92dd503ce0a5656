use super::*;

pub fn render_worker_selection(frame: &mut Frame, app: &App, body: Rect) {
    let title = if app.worker_search_input.value.is_empty() {
        format!(" Identificación — Personal ({}) ", app.workers.len())
    } else {
        format!(
            " Identificación — Personal ({}/{}) ",
            app.filtered_workers.len(),
            app.workers.len()
        )
    };
    let items: Vec<ListItem> = app
        .filtered_workers
        .iter()
        .enumerate()
        .map(|(i, worker)| list_item(worker.name.clone(), i == app.filtered_worker_index))
        .collect();

    render_selection(
        frame,
        body,
        app,
        &app.worker_search_input,
        items,
        title,
        "Selecciona tu nombre para registrar tiempo",
    );
}

pub fn render_project_selection(frame: &mut Frame, app: &App, body: Rect) {
    let active_total = app.projects.iter().filter(|p| p.active).count();
    let title = if app.project_search_input.value.is_empty() {
        format!(" Unidad de Trabajo ({active_total}) ")
    } else {
        format!(
            " Unidad de Trabajo ({}/{}) ",
            app.filtered_projects.len(),
            active_total
        )
    };
    let items: Vec<ListItem> = app
        .filtered_projects
        .iter()
        .enumerate()
        .map(|(i, project)| list_item(project.name.clone(), i == app.filtered_project_index))
        .collect();

    render_selection(
        frame,
        body,
        app,
        &app.project_search_input,
        items,
        title,
        "Elige el camión o la tarea de mantenimiento",
    );
}

fn render_selection(
    frame: &mut Frame,
    body: Rect,
    app: &App,
    search_input: &crate::app::TextInput,
    items: Vec<ListItem>,
    list_title: String,
    subtitle: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Result list
            Constraint::Length(3), // Controls
        ])
        .split(body);

    // Search input box
    let search_text = if search_input.value.is_empty() {
        if app.selection_list_focused {
            "Escribe para filtrar...".to_string()
        } else {
            "█".to_string()
        }
    } else if app.selection_list_focused {
        search_input.value.clone()
    } else {
        let (before, after) = search_input.split_at_cursor();
        format!("{}█{}", before, after)
    };
    let search_border = if app.selection_list_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_border)
                .title(format!(" {subtitle} "))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, chunks[0]);

    frame.render_widget(
        bordered_list(items, list_title, app.selection_list_focused),
        chunks[1],
    );

    let controls_text = vec![
        Span::styled("Escribir", Style::default().fg(Color::Yellow)),
        Span::raw(": Filtrar  "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Lista  "),
        Span::styled("↑↓/j/k", Style::default().fg(Color::Yellow)),
        Span::raw(": Navegar  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Seleccionar  "),
        Span::styled("Ctrl+X", Style::default().fg(Color::Yellow)),
        Span::raw(": Limpiar  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Volver"),
    ];
    let controls = Paragraph::new(Line::from(controls_text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controles ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(controls, chunks[2]);
}
