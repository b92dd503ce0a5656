use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};
use tracing::info;

use crate::domain::TimeLog;
use crate::error::ReportError;

const SHEET_NAME: &str = "Reporte Detallado";
const REPORT_TITLE: &str = "HMF INDUSTRIAL - REPORTE DE HORAS POR PROYECTO";
const COLUMN_HEADERS: [&str; 4] = [
    "OPERARIO",
    "HORAS REGISTRADAS",
    "FECHA DE TRABAJO",
    "HORA REGISTRO",
];
const COLUMN_WIDTHS: [f64; 4] = [40.0, 20.0, 25.0, 20.0];

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[day]/[month]/[year]");
const TIME_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]:[second]");

/// One registered log rendered for the report, dates already in local time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub worker_name: String,
    pub hours: f64,
    pub work_date: String,
    pub registered_at: String,
}

/// All logs charged against one project name, ordered by ascending
/// timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectGroup {
    pub project_name: String,
    pub rows: Vec<ReportRow>,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub generated_at: String,
    pub groups: Vec<ProjectGroup>,
}

/// Groups logs by project name (exact match), orders groups alphabetically
/// and rows within a group by timestamp. An empty log collection is an
/// error: no file may be produced for it.
pub fn build_report(
    logs: &[TimeLog],
    offset: UtcOffset,
    generated_at: OffsetDateTime,
) -> Result<Report, ReportError> {
    if logs.is_empty() {
        return Err(ReportError::NoLogs);
    }

    // BTreeMap keys give the alphabetical group order.
    let mut by_project: BTreeMap<&str, Vec<&TimeLog>> = BTreeMap::new();
    for log in logs {
        by_project.entry(log.project_name.as_str()).or_default().push(log);
    }

    let mut groups = Vec::with_capacity(by_project.len());
    for (name, mut project_logs) in by_project {
        project_logs.sort_by_key(|log| log.timestamp);
        let total_hours = project_logs.iter().map(|log| log.hours).sum();
        let mut rows = Vec::with_capacity(project_logs.len());
        for log in project_logs {
            let local = log.timestamp.to_offset(offset);
            rows.push(ReportRow {
                worker_name: log.worker_name.clone(),
                hours: log.hours,
                work_date: local.format(DATE_FORMAT)?,
                registered_at: local.format(TIME_FORMAT)?,
            });
        }
        groups.push(ProjectGroup {
            project_name: name.to_string(),
            rows,
            total_hours,
        });
    }

    let local_generated = generated_at.to_offset(offset);
    Ok(Report {
        generated_at: format!(
            "{} {}",
            local_generated.format(DATE_FORMAT)?,
            local_generated.format(TIME_FORMAT)?
        ),
        groups,
    })
}

/// Deterministic report filename for a given date.
pub fn report_filename(date: Date) -> String {
    format!("HMF_Reporte_Taller_{date}.xlsx")
}

/// Writes the report as a single-sheet workbook: per project a section
/// header, column headers, one row per log and a totals row, separated by
/// two blank rows.
pub fn write_xlsx(report: &Report, path: &Path) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();

    worksheet.write_with_format(0, 0, REPORT_TITLE, &bold)?;
    worksheet.write(1, 0, "Fecha de Reporte:")?;
    worksheet.write(1, 1, report.generated_at.as_str())?;

    let mut row: u32 = 3;
    for group in &report.groups {
        worksheet.write_with_format(row, 0, "PROYECTO:", &bold)?;
        worksheet.write_with_format(row, 1, group.project_name.to_uppercase(), &bold)?;
        row += 1;

        for (col, header) in COLUMN_HEADERS.iter().enumerate() {
            worksheet.write_with_format(row, col as u16, *header, &bold)?;
        }
        row += 1;

        for entry in &group.rows {
            worksheet.write(row, 0, entry.worker_name.as_str())?;
            worksheet.write(row, 1, entry.hours)?;
            worksheet.write(row, 2, entry.work_date.as_str())?;
            worksheet.write(row, 3, entry.registered_at.as_str())?;
            row += 1;
        }

        worksheet.write_with_format(row, 0, "TOTAL PROYECTO:", &bold)?;
        worksheet.write_with_format(row, 1, group.total_hours, &bold)?;
        // Totals row plus two blank separator rows.
        row += 3;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Builds the report and writes it into `dir` under the deterministic
/// filename. Returns the written path.
pub fn export_to_dir(
    logs: &[TimeLog],
    offset: UtcOffset,
    now: OffsetDateTime,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    let report = build_report(logs, offset, now)?;
    let path = dir.join(report_filename(now.to_offset(offset).date()));
    write_xlsx(&report, &path)?;
    info!("report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    fn log(worker: &str, project: &str, hours: f64, timestamp: OffsetDateTime) -> TimeLog {
        TimeLog {
            id: format!("log-{worker}-{hours}"),
            worker_id: worker.to_lowercase(),
            worker_name: worker.to_string(),
            project_id: project.to_lowercase(),
            project_name: project.to_string(),
            hours,
            timestamp,
        }
    }

    #[test]
    fn empty_logs_produce_no_report() {
        let err = build_report(&[], offset!(+2), datetime!(2026-08-07 10:00 +2)).unwrap_err();
        assert!(matches!(err, ReportError::NoLogs));
    }

    #[test]
    fn groups_by_project_and_totals_hours() {
        let logs = vec![
            log("B", "P1", 5.0, datetime!(2026-08-06 10:00 +2)),
            log("A", "P1", 3.0, datetime!(2026-08-05 09:00 +2)),
        ];

        let report = build_report(&logs, offset!(+2), datetime!(2026-08-07 10:00 +2)).unwrap();
        assert_eq!(report.groups.len(), 1);

        let group = &report.groups[0];
        assert_eq!(group.project_name, "P1");
        assert_eq!(group.total_hours, 8.0);
        // Rows come back in ascending timestamp order, not input order.
        assert_eq!(group.rows[0].worker_name, "A");
        assert_eq!(group.rows[1].worker_name, "B");
    }

    #[test]
    fn group_keys_are_sorted_alphabetically() {
        let logs = vec![
            log("A", "ZETA", 1.0, datetime!(2026-08-05 09:00 +2)),
            log("A", "ALFA", 1.0, datetime!(2026-08-05 10:00 +2)),
            log("A", "MEDIA", 1.0, datetime!(2026-08-05 11:00 +2)),
        ];

        let report = build_report(&logs, offset!(+2), datetime!(2026-08-07 10:00 +2)).unwrap();
        let names: Vec<&str> = report.groups.iter().map(|g| g.project_name.as_str()).collect();
        assert_eq!(names, ["ALFA", "MEDIA", "ZETA"]);
    }

    #[test]
    fn rows_render_local_date_and_time() {
        let logs = vec![log("A", "P1", 2.0, datetime!(2026-08-05 22:30:15 UTC))];

        let report = build_report(&logs, offset!(+2), datetime!(2026-08-07 10:00 +2)).unwrap();
        let row = &report.groups[0].rows[0];
        assert_eq!(row.work_date, "06/08/2026");
        assert_eq!(row.registered_at, "00:30:15");
    }

    #[test]
    fn filename_embeds_the_iso_date() {
        assert_eq!(
            report_filename(time::macros::date!(2026 - 08 - 07)),
            "HMF_Reporte_Taller_2026-08-07.xlsx"
        );
    }

    #[test]
    fn export_writes_the_workbook_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let logs = vec![log("A", "P1", 3.0, datetime!(2026-08-05 09:00 +2))];

        let path = export_to_dir(&logs, offset!(+2), datetime!(2026-08-07 10:00 +2), dir.path())
            .unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "HMF_Reporte_Taller_2026-08-07.xlsx"
        );
        assert!(path.exists());
    }

    #[test]
    fn export_of_empty_logs_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_to_dir(&[], offset!(+2), datetime!(2026-08-07 10:00 +2), dir.path())
            .unwrap_err();
        assert!(matches!(err, ReportError::NoLogs));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
