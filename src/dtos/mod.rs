pub mod common;
pub mod customerdtos;
pub mod dashboarddtos;
pub mod financedtos;
pub mod materialdtos;
pub mod paymentdtos;
pub mod projectdtos;
pub mod talentdtos;
pub mod workerdtos;
