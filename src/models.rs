pub mod config;
pub mod inventory;
pub mod item;
pub mod web;
