pub mod config;
pub mod confirm;
pub mod data_storage;
pub mod messages;
pub mod notifier;
pub mod planner;
pub mod scheduler;
pub mod store;
pub mod task;
pub mod view;
