pub mod app;
pub mod dice_panel;
pub mod game_modal;
pub mod number_input;
pub mod result_modal;
pub mod roulette_panel;
pub mod theme_bar;
pub mod wheel;

pub use app::App;
