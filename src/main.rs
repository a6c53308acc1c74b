use chatty::client::config::ClientConfig;
use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();

    // Configura logging
    let cfg = ClientConfig::from_env();
    std::env::set_var("RUST_LOG", &cfg.log_level);
    env_logger::init();

    chatty::client::gui::app::ChatApp::run(iced::Settings::default())
}
