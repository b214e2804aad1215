use horswap_interface::App;
use leptos::prelude::*;
use tracing::Level;
use tracing_subscriber_wasm::MakeConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(Level::DEBUG))
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .init();

    mount_to_body(|| view! { <App /> });
}
