pub mod manager;
pub mod models;
pub mod repos;
pub mod service;
