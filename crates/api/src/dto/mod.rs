mod blacklist;
mod records;
mod report;
mod stats;

pub use blacklist::{
    AddDomainRequest, AddIpRequest, CheckRequest, CheckResponse, DomainBlockResponse,
    IpBlockResponse, MutationResponse,
};
pub use records::{
    ClearResponse, ExportRowResponse, LatestQuery, PaginatedRecords, RecordResponse, RecordsQuery,
    StreamQuery, StreamResponse,
};
pub use report::{ReportRequest, ReportResponse};
pub use stats::{StatsResponse, TopDomainResponse};
