//! Terminal front end: fetch one tab from the proxy and print it.
//!
//! Usage: `browse [tab]`, where `tab` is any key shown in the tab bar. The
//! proxy location comes from `PROXY_URL`.

use std::env;
use std::process::ExitCode;

use movie_browser::client::state::{AppState, Tab};
use movie_browser::client::{DEFAULT_PROXY_URL, ProxyClient};
use movie_browser::client::view::{render_grid, render_tabs};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let tab = match env::args().nth(1).map(|arg| arg.parse::<Tab>()) {
        None => Tab::default(),
        Some(Ok(tab)) => tab,
        Some(Err(e)) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let base_url = env::var("PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string());
    let client = ProxyClient::new(base_url);
    let mut state = AppState::new();

    let request = state.select_tab(tab);
    state.perform(&client, request).await;

    println!("{}\n", render_tabs(state.active_tab()));
    print!("{}", render_grid(state.listing()));

    if state.last_error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
