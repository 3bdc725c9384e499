mod submit_report;

pub use submit_report::{ReportContext, ReportOutcome, ReportPayload, SubmitReportUseCase};
