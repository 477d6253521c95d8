use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use books_ui::{BookLibrary, LibraryConfig};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; font-family: Roboto, Helvetica, Arial, sans-serif;",
            BookLibrary { config: LibraryConfig::default() }
        }
    }
}
