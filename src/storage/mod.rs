pub mod interface;
pub mod json_file;
