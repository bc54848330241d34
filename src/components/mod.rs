pub mod admin_panel;
pub mod app;
pub mod connect_screen;
pub mod mint_panel;
pub mod network_banner;

pub use admin_panel::AdminPanel;
pub use app::App;
pub use connect_screen::ConnectScreen;
pub use mint_panel::MintPanel;
pub use network_banner::NetworkBanner;
