pub mod customermodel;
pub mod financemodel;
pub mod materialmodel;
pub mod paymentmodel;
pub mod projectmodel;
pub mod talentmodel;
pub mod workermodel;
