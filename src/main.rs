mod components;
mod dice;
mod error;
mod prefs;
mod presenter;
mod ranking;
mod rng;
mod roulette;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
