use crate::app::{App, NoticeAction, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
    Frame,
};
use taller_core::daily::{self, DAILY_HOUR_LIMIT};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

mod admin_view;
mod dialogs;
mod hours_view;
mod selection_views;
pub(super) mod utils;

const CLOCK_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[day]/[month]/[year]");
const CLOCK_TIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[hour]:[minute]:[second]");

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::SelectWorker => selection_views::render_worker_selection(frame, app, body),
        View::SelectProject => selection_views::render_project_selection(frame, app, body),
        View::InputHours => hours_view::render_hours_view(frame, app, body),
        View::Admin => admin_view::render_admin_view(frame, app, body),
    }

    render_status_line(frame, root[2], app);

    // Admin dialogs render on top of the panel.
    if app.current_view == View::Admin {
        if let Some(admin) = &app.admin {
            if let Some(dialog) = &admin.edit {
                dialogs::render_edit_dialog(frame, dialog);
            } else if let Some(confirm) = &admin.confirm {
                dialogs::render_confirm_dialog(frame, confirm);
            }
        }
    }

    // Transient notices render on top of everything.
    if let Some(notice) = &app.notice {
        match notice.action {
            NoticeAction::ResetToWorkerSelect => {
                dialogs::render_completion_notice(frame, &notice.message);
            }
            NoticeAction::Dismiss => {
                dialogs::render_saved_toast(frame, &notice.message);
            }
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(area);

    let mode = if app.current_view == View::Admin {
        Span::styled("Modo Administrador", Style::default().fg(Color::Red))
    } else {
        Span::styled("Gestión de Turnos", Style::default().fg(Color::Blue))
    };
    let mut left_lines = vec![Line::from(vec![
        Span::styled(
            " TALLER GRÚAS HMF ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        mode,
    ])];
    if let Some(worker) = &app.selected_worker {
        left_lines.push(Line::from(vec![
            Span::styled(" Trabajador: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                worker.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(left_lines), chunks[0]);

    let offset = daily::local_offset();
    let now = time::OffsetDateTime::now_utc().to_offset(offset);
    let clock = format!(
        "{}  {}",
        now.format(CLOCK_DATE_FORMAT).unwrap_or_default(),
        now.format(CLOCK_TIME_FORMAT).unwrap_or_default()
    );
    let mut right_lines = vec![Line::from(Span::styled(
        clock,
        Style::default().fg(Color::White),
    ))];
    if app.selected_worker.is_some() && app.current_view != View::Admin {
        right_lines.push(Line::from(Span::styled(
            format!("Jornada hoy: {:.1}h / {}h", app.hours_today(), DAILY_HOUR_LIMIT),
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(
        Paragraph::new(right_lines).alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))
    } else {
        let hints = match app.current_view {
            View::SelectWorker => "Enter: Seleccionar  F2: Admin  Ctrl+Q: Salir",
            View::SelectProject => "Enter: Seleccionar  Esc: Volver  F2: Admin",
            View::InputHours => "Enter: Registrar  Esc: Volver",
            View::Admin => "Tab: Pestaña  Esc: Volver",
        };
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };
    frame.render_widget(Paragraph::new(line), area);
}

// Shared styling helpers for the list views.

fn list_item<'a>(text: String, selected: bool) -> ListItem<'a> {
    let style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    ListItem::new(text).style(style)
}

fn bordered_list<'a>(items: Vec<ListItem<'a>>, title: String, focused: bool) -> List<'a> {
    let border_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
            .padding(Padding::horizontal(1)),
    )
}

fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
