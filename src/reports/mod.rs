pub mod storage;
pub mod types;

pub use storage::{get_reports_path, load_report_log, save_report_log};
pub use types::{Category, Report, ReportLog};
