use super::utils::centered_rect;
use super::*;
use crate::app::{ConfirmAction, EditDialog, RosterKind};
use ratatui::layout::Rect;

pub fn render_edit_dialog(frame: &mut Frame, dialog: &EditDialog) {
    let area = centered_rect(60, 9, frame.area());
    clear_area(frame, area);

    let prompt = match (dialog.target, &dialog.id) {
        (RosterKind::Workers, None) => "Registrar nuevo operario",
        (RosterKind::Workers, Some(_)) => "Editar operario",
        (RosterKind::Projects, None) => "Añadir unidad de montaje",
        (RosterKind::Projects, Some(_)) => "Editar unidad",
    };
    let (before, after) = dialog.name.split_at_cursor();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(prompt, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            format!("{before}█{after}"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": Confirmar  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Cancelar"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Editar Información ")
                .padding(Padding::horizontal(2)),
        )
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

pub fn render_confirm_dialog(frame: &mut Frame, confirm: &ConfirmAction) {
    let area = centered_rect(52, 8, frame.area());
    clear_area(frame, area);

    let question = match confirm {
        ConfirmAction::DeleteWorker(_) | ConfirmAction::DeleteProject(_) => {
            "¿Eliminar definitivamente?"
        }
        ConfirmAction::ResetLogs => "¿Vaciar todo el historial de registros?",
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(question, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Sí, borrar", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No, volver", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Confirmar ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Full-screen completion notice shown when a worker finishes the 8-hour
/// day. Swallows input until its deadline resets the flow.
pub fn render_completion_notice(frame: &mut Frame, message: &str) {
    let area = centered_rect(56, 7, frame.area());
    clear_area(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Volviendo a identificación...",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Jornada Completada ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Small acknowledgment toast near the bottom of the screen; does not block
/// input.
pub fn render_saved_toast(frame: &mut Frame, message: &str) {
    let full = frame.area();
    let width = (message.chars().count() as u16 + 6).min(full.width);
    let area = Rect {
        x: full.width.saturating_sub(width) / 2,
        y: full.height.saturating_sub(4),
        width,
        height: 3,
    };
    clear_area(frame, area);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(paragraph, area);
}
