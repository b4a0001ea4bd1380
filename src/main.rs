mod app;
mod catalog;
mod config;
mod player;
mod runtime;
mod store;
mod ui;

#[cfg(test)]
mod test_support;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Quiet by default; RUST_LOG turns diagnostics on (redirect stderr when
    // running the TUI).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    runtime::run()
}
