pub mod handlers;
pub mod models;
pub mod observers;
pub mod requests;
pub mod responses;
pub mod store;
