use yew::prelude::*;

use super::{dice_panel::DicePanel, roulette_panel::RoulettePanel};
use crate::presenter::Presentation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKind {
    Dice,
    Roulette,
}

#[derive(Properties, PartialEq, Clone)]
pub struct GameModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_result: Callback<Presentation>,
}

/// Game picker plus the shared container. Exactly one panel is mounted at a
/// time; switching games unmounts the other panel along with its engine.
#[function_component]
pub fn GameModal(props: &GameModalProps) -> Html {
    let game = use_state(|| GameKind::Dice);
    // every opening starts on the dice game
    {
        let game = game.clone();
        use_effect_with(props.show, move |show| {
            if *show {
                game.set(GameKind::Dice);
            }
            || ()
        });
    }
    if !props.show {
        return html! {};
    }

    let close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                cb.emit(());
            }
        })
    };
    let pick = |kind: GameKind| {
        let game = game.clone();
        Callback::from(move |_| game.set(kind))
    };
    let tab_style = |kind: GameKind| {
        if *game == kind {
            "background:#58a6ff; color:#0e1116; font-weight:600;"
        } else {
            ""
        }
    };

    let panel = match *game {
        GameKind::Dice => html! { <DicePanel key="dice" on_result={props.on_result.clone()} /> },
        GameKind::Roulette => html! { <RoulettePanel key="roulette" on_result={props.on_result.clone()} /> },
    };

    html! {<div onclick={backdrop} style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#0e1116; border:1px solid #30363d; border-radius:12px; padding:16px 20px; width:min(920px, 94vw); max-height:92vh; overflow-y:auto; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center; gap:8px;">
                <div style="display:flex; gap:8px;">
                    <button onclick={pick(GameKind::Dice)} style={tab_style(GameKind::Dice)}>{"🎲 Dice"}</button>
                    <button onclick={pick(GameKind::Roulette)} style={tab_style(GameKind::Roulette)}>{"🎡 Roulette"}</button>
                </div>
                <button onclick={close_btn} style="padding:4px 8px;">{"Close"}</button>
            </div>
            { panel }
        </div>
    </div>}
}
