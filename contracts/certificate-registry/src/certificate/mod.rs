pub mod types;

mod mint;
mod transfer;
mod update;
mod views;
