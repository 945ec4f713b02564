fn main() -> anyhow::Result<()> {
    // Off unless RUST_LOG is set; redirect stderr to keep the display clean
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    client_tui::run()
}
