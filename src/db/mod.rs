pub mod cache;
pub mod customerdb;
pub mod dashboarddb;
pub mod db;
pub mod financedb;
pub mod materialdb;
pub mod paymentdb;
pub mod projectdb;
pub mod talentdb;
pub mod workerdb;
