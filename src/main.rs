#![allow(non_snake_case)]

mod clients;
mod config;
mod models;
mod runtime;
mod service;
mod tasks;

use std::env;

use crate::config::{AppConfig, Settings};

#[tokio::main]
async fn main() {
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let settings = match Settings::resolve(&config) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return;
        }
    };

    runtime::run_pass(settings).await;
}
