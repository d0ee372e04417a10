pub mod category;
pub mod file_record;
pub mod scan_result;
pub mod view;
