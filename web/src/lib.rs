use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;

/// Start-up flags, read from the page's location hash, e.g. `#-vvv`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

impl Args {
    fn from_location_hash(location_hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(location_hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{body, document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).unwrap_or_else(|err| {
        gloo::console::warn!(format!("ignoring location hash: {}", err));
        Args::parse_from([""])
    });
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let root: web_sys::Element = match document().get_element_by_id("game") {
        Some(root) => root,
        None => {
            log::warn!("no id=\"game\" element, mounting on <body>");
            body().into()
        }
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root(root).render();
}

#[cfg(test)]
mod tests {
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    use super::*;

    #[test]
    fn empty_hash_uses_default_verbosity() {
        let args = Args::from_location_hash("").unwrap();
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn verbose_flags_raise_log_level() {
        let args = Args::from_location_hash("#-vvv").unwrap();
        assert_eq!(args.verbose.log_level(), Some(log::Level::Debug));

        let args = Args::from_location_hash("#-v&-v&-v&-v").unwrap();
        assert_eq!(args.verbose.log_level(), Some(log::Level::Trace));
    }

    #[test]
    fn quiet_flag_disables_logging() {
        let args = Args::from_location_hash("#-q").unwrap();
        assert_eq!(args.verbose.log_level(), None);
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(Args::from_location_hash("#--seed=1").is_err());
    }
}
