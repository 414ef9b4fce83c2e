// Domain models: inventory rows, rollups and the rendered view

mod record;
mod summary;
mod view;

pub use record::{InfrastructureRecord, RatedRecord};
pub use summary::{ServerSummary, SuccessFailure};
pub use view::{
    Banner, BannerKind, DeviceView, LineChart, LocationView, PieChart, PieSlice, ServerRow,
    ServerView, StorageNodeView, UsagePoint, ViewModel,
};
