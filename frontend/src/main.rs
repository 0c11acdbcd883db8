use landing::config;
use landing::error::{Error, Result};
use landing::{banner, events, init};
use log::{info, warn};
use web_sys::{Document, Event};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level())
        .expect("error initializing log");

    info!("Starting landing page");
    if let Err(err) = start() {
        warn!("landing page not enhanced: {}", err);
    }
}

fn start() -> Result<()> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    if document.ready_state() == "loading" {
        let ready = document.clone();
        let listener = events::subscribe(&document, "DOMContentLoaded", move |_: Event| {
            run(&ready);
        })?;
        listener.forget();
    } else {
        run(&document);
    }
    Ok(())
}

fn run(document: &Document) {
    match init::enhance(document) {
        Ok(page) => {
            banner::print();
            page.forget();
        }
        Err(err) => warn!("setup failed: {}", err),
    }
}
