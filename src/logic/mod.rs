pub mod alerts;
pub mod forecast;
pub mod guidance;
pub mod insights;
pub mod news;
pub mod ranking;
pub mod service;
pub mod signals;
pub mod thresholds;

pub use service::ReportService;
pub use thresholds::Thresholds;
