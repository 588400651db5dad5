use yew::prelude::*;

use crate::presenter::Presentation;
use crate::util::join_rolls;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultModalProps {
    pub result: Option<Presentation>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ResultModal(props: &ResultModalProps) -> Html {
    let Some(result) = props.result.as_ref() else {
        return html! {};
    };
    let close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // only clicks landing on the backdrop itself dismiss
    let backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                cb.emit(());
            }
        })
    };

    let body = match result {
        Presentation::Dice(ranking) => {
            let rows: Html = ranking
                .iter()
                .map(|r| {
                    let (border, icon) = if r.is_winner {
                        ("#d4af37", "👑")
                    } else if r.is_loser {
                        ("#f85149", "😢")
                    } else {
                        ("#30363d", "")
                    };
                    html! {<div style={format!("display:flex; justify-content:space-between; align-items:center; gap:16px; padding:8px 12px; border:1px solid {}; border-radius:8px;", border)}>
                        <span style="font-weight:700; min-width:56px;">{ format!("#{} {}", r.rank, icon) }</span>
                        <span style="flex:1;">{ r.name.clone() }</span>
                        <span style="font-variant-numeric:tabular-nums;">{ format!("{} = {}", join_rolls(&r.rolls), r.sum) }</span>
                    </div>}
                })
                .collect();
            html! {<div style="display:flex; flex-direction:column; gap:8px;">
                <h4 style="margin:0 0 4px 0;">{"Final Ranking"}</h4>
                { rows }
            </div>}
        }
        Presentation::Roulette(label) => html! {
            <div style="font-size:20px; text-align:center; margin:12px 0; padding:20px; background:rgba(255,255,255,0.08); border-radius:8px;">
                { format!("🎉 Winner: {}", label) }
            </div>
        },
    };

    html! {<div onclick={backdrop} style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.8); z-index:9999;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:16px; padding:24px 30px; min-width:300px; max-width:90vw; display:flex; flex-direction:column; gap:14px; box-shadow:0 8px 32px rgba(0,0,0,0.5);">
            <h3 style="margin:0; font-size:22px; color:#58a6ff; text-align:center;">{ result.title() }</h3>
            { body }
            <button onclick={close_btn} style="padding:10px; font-weight:600;">{"Close"}</button>
        </div>
    </div>}
}
