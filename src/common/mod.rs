pub mod command;
pub mod config;
pub mod db_instance;
pub mod exception;
pub mod logger;
pub mod result_writer;
