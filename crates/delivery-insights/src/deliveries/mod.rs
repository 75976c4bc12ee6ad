//! Delivery statistics for the dashboard and statistics pages.

pub mod aggregate;
pub mod backend;
pub mod domain;
pub mod router;
pub mod summary;

pub use aggregate::{aggregate, AggregationResult, LabelCount, CITY_LIMIT};
pub use backend::{BackendError, DeliverySource, HttpDeliverySource};
pub use domain::{ClientRecord, DeliveryRecord};
pub use router::{deliveries_router, SummaryRequest};
pub use summary::{DashboardSummary, RecentDelivery, RECENT_LIMIT};
