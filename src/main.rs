mod widgets;
mod constants;
mod models;
mod format;
mod net;
mod cart;
mod repository;
mod populator;
mod controllers;
mod application;
mod ui;
mod prelude;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    application::Application::new().activate()
}
