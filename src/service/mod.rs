pub mod budget;
pub mod dashboard_service;
pub mod error;
pub mod payment_plan;
pub mod payment_service;
pub mod timeline;
