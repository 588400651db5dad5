use super::{game_modal::GameModal, result_modal::ResultModal, theme_bar::ThemeBar};
use crate::prefs::{Preferences, PrefsAction};
use crate::presenter::Presentation;
use crate::util::clog;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let prefs = use_reducer(Preferences::load);
    let show_games = use_state(|| false);
    let result = use_state(|| None::<Presentation>);

    // Persist & apply preferences whenever they change
    {
        let prefs = prefs.clone();
        use_effect_with((prefs.theme.clone(), prefs.gradient_enabled), move |_| {
            prefs.apply_theme();
            prefs.save();
            || ()
        });
    }

    let on_theme = {
        let prefs = prefs.clone();
        Callback::from(move |theme: String| prefs.dispatch(PrefsAction::SetTheme(theme)))
    };
    let on_toggle_gradient = {
        let prefs = prefs.clone();
        Callback::from(move |_| prefs.dispatch(PrefsAction::ToggleGradient))
    };
    let open_games = {
        let show_games = show_games.clone();
        Callback::from(move |_| show_games.set(true))
    };
    let close_games = {
        let show_games = show_games.clone();
        Callback::from(move |_| show_games.set(false))
    };
    // a new result replaces whatever is on screen
    let on_result = {
        let result = result.clone();
        Callback::from(move |r: Presentation| {
            clog(&format!("present: {}", r.to_log_line()));
            result.set(Some(r));
        })
    };
    let close_result = {
        let result = result.clone();
        Callback::from(move |_| result.set(None))
    };

    let root_class = if prefs.gradient_enabled { "gradient-enabled" } else { "" };

    html! {<div id="root" class={root_class} style="min-height:100vh; background:#0e1116; color:#e6edf3; font-family:system-ui, sans-serif;">
        <ThemeBar
            theme={prefs.theme.clone()}
            on_theme={on_theme}
            gradient_enabled={prefs.gradient_enabled}
            on_toggle_gradient={on_toggle_gradient}
            on_open_games={open_games}
        />
        <GameModal show={*show_games} on_close={close_games} on_result={on_result} />
        <ResultModal result={(*result).clone()} on_close={close_result} />
    </div>}
}
