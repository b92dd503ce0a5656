use thiserror::Error;

/// Errors raised by the persistent store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while building or writing the hours report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no logs to export")]
    NoLogs,
    #[error("failed to render timestamp: {0}")]
    Format(#[from] time::error::Format),
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
