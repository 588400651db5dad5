use yew::prelude::*;

use crate::prefs::THEMES;

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeBarProps {
    pub theme: String,
    pub on_theme: Callback<String>,
    pub gradient_enabled: bool,
    pub on_toggle_gradient: Callback<()>,
    pub on_open_games: Callback<()>,
}

#[function_component]
pub fn ThemeBar(props: &ThemeBarProps) -> Html {
    let open_cb = {
        let cb = props.on_open_games.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let gradient_cb = {
        let cb = props.on_toggle_gradient.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let theme_buttons: Html = THEMES
        .iter()
        .map(|&t| {
            let cb = props.on_theme.clone();
            let onclick = Callback::from(move |_| cb.emit(t.to_string()));
            let style = if props.theme == t {
                "background:#58a6ff; color:#0e1116; font-weight:600;"
            } else {
                ""
            };
            html! { <button {onclick} {style}>{ t }</button> }
        })
        .collect();
    html! {<div id="top-bar" style="display:flex; align-items:center; gap:10px; padding:8px 12px; background:rgba(22,27,34,0.9); border-bottom:1px solid #30363d;">
        <strong style="flex:1;">{"SQMS Bookmarks"}</strong>
        <div style="display:flex; gap:6px;">{ theme_buttons }</div>
        <label style="display:flex; align-items:center; gap:6px; cursor:pointer;">
            <input type="checkbox" checked={props.gradient_enabled} onclick={gradient_cb} />
            <span>{"Gradient"}</span>
        </label>
        <button onclick={open_cb} title="Games" style="font-size:18px;">{"🎮"}</button>
    </div>}
}
