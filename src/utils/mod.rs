pub mod decimal;
pub mod record_no;
