pub mod catalog;
pub mod config;
pub mod domain;
pub mod models;
pub mod rows;
