//! Todo List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod filter;
mod logger;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
