//! Native snapshot of the colour list.
//!
//! Activates one view against the colour endpoint, waits for the single load
//! and prints what the browser would show.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::rc::Rc;

    use clap::{Parser, ValueEnum};

    use colours::config::AppConfig;
    use colours::constants::NATIVE_BASE_URL;
    use colours::{BufferSink, ColoursView, HttpSource, render};

    #[derive(Debug, Clone, Copy, ValueEnum)]
    enum Format {
        Html,
        Text,
    }

    #[derive(Parser, Debug)]
    #[command(name = "colours-native")]
    #[command(about = "Fetch the colour list once and print its swatches")]
    struct Args {
        /// Colour endpoint (defaults to the configured endpoint)
        #[arg(short, long)]
        url: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: Format,

        /// Config file (defaults to the user config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the effective config back to the config file
        #[arg(long)]
        write_config: bool,
    }

    pub fn run() {
        let args = Args::parse();

        let config_path = args.config.clone().or_else(AppConfig::default_path);
        let loaded = match config_path.as_deref() {
            Some(path) => AppConfig::load_from_path(path),
            None => Ok(None),
        };
        let mut config = match &loaded {
            Ok(Some(config)) => config.clone(),
            _ => AppConfig::default(),
        };
        if let Some(url) = args.url {
            config.endpoint = url;
        }

        env_logger::Builder::new()
            .filter_level(config.log_level.to_level_filter())
            .init();

        // Report the config outcome now that the logger is up
        match (&loaded, &config_path) {
            (Ok(Some(_)), Some(path)) => log::info!("Loaded configuration from {:?}", path),
            (Err(e), Some(path)) => {
                log::warn!("Failed to load config file {:?}, using defaults: {}", path, e)
            }
            (_, Some(path)) => log::debug!("No config file found at {:?}", path),
            (_, None) => log::debug!("Could not determine config directory, using defaults"),
        }

        if args.write_config {
            match &config_path {
                Some(path) => {
                    if let Err(e) = config.save_to_path(path) {
                        log::error!("Failed to save config: {}", e);
                    }
                }
                None => log::error!("Could not determine config directory"),
            }
        }

        let url = absolute_url(&config.endpoint);
        let sink = Rc::new(BufferSink::new());
        let mut view = ColoursView::new(HttpSource::new(url), Rc::clone(&sink));

        if let Some(task) = view.activate() {
            pollster::block_on(task);
        }
        log::debug!("View state after load: {}", view.state().name());

        let swatches = sink.last();
        let output = match args.format {
            Format::Html => render::to_html(&swatches),
            Format::Text => render::to_text(&swatches),
        };
        print!("{}", output);
    }

    /// The browser resolves a path against the page origin; here we assume
    /// the endpoint's default local address.
    fn absolute_url(endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", NATIVE_BASE_URL, endpoint)
        } else {
            endpoint.to_string()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    cli::run();
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
