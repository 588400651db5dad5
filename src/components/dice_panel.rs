use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::number_input::NumberInput;
use crate::dice::{default_player_name, DiceGame, DieFace, Scheduled, MAX_PLAYERS, MIN_PLAYERS};
use crate::presenter::Presentation;
use crate::rng::GameRng;
use crate::state::TimerBag;
use crate::util::{clog, die_glyph, join_rolls};

#[derive(Properties, PartialEq, Clone)]
pub struct DicePanelProps {
    pub on_result: Callback<Presentation>,
}

/// Feeds timer events back into the engine and re-renders the panel.
#[derive(Clone)]
struct Driver {
    game: Rc<RefCell<DiceGame>>,
    timers: Rc<RefCell<TimerBag>>,
    redraw: UseForceUpdateHandle,
    on_result: Callback<Presentation>,
}

impl Driver {
    fn arm(&self, items: Vec<Scheduled>) {
        for item in items {
            let driver = self.clone();
            self.timers.borrow_mut().schedule(item.delay_ms, move || {
                let transition = driver.game.borrow_mut().handle(item.event);
                driver.redraw.force_update();
                if let Some(ranking) = transition.ranking {
                    let result = Presentation::Dice(ranking);
                    clog(&format!("dice: final {}", result.to_log_line()));
                    driver.on_result.emit(result);
                }
                driver.arm(transition.schedule);
            });
        }
    }

    fn roll(&self, all: bool) {
        let rolled = {
            let mut game = self.game.borrow_mut();
            if all { game.roll_all() } else { game.roll_one() }
        };
        match rolled {
            Ok(items) => self.arm(items),
            Err(e) => clog(&format!("dice: roll ignored: {e}")),
        }
        self.redraw.force_update();
    }
}

#[function_component(DicePanel)]
pub fn dice_panel(props: &DicePanelProps) -> Html {
    let game = use_mut_ref(|| DiceGame::new(GameRng::from_browser()));
    let timers = use_mut_ref(TimerBag::default);
    let redraw = use_force_update();
    let driver = Driver {
        game: game.clone(),
        timers: timers.clone(),
        redraw: redraw.clone(),
        on_result: props.on_result.clone(),
    };

    // Teardown: pending rolls and turn pauses die with the panel
    {
        let timers = timers.clone();
        use_effect_with((), move |_| {
            clog("dice: panel mounted");
            move || {
                let mut timers = timers.borrow_mut();
                clog(&format!("dice: panel torn down, dropping {} timers", timers.armed()));
                timers.cancel_all();
            }
        });
    }

    let on_count = {
        let driver = driver.clone();
        Callback::from(move |n: usize| {
            if let Err(e) = driver.game.borrow_mut().configure(n) {
                clog(&format!("dice: configure ignored: {e}"));
            }
            driver.redraw.force_update();
        })
    };
    let on_toggle = {
        let driver = driver.clone();
        Callback::from(move |_| {
            let started = driver.game.borrow().is_started();
            if started {
                driver.timers.borrow_mut().cancel_all();
                driver.game.borrow_mut().stop();
            } else if let Err(e) = driver.game.borrow_mut().start() {
                clog(&format!("dice: start rejected: {e}"));
            }
            driver.redraw.force_update();
        })
    };
    let roll_one = {
        let driver = driver.clone();
        Callback::from(move |_| driver.roll(false))
    };
    let roll_all = {
        let driver = driver.clone();
        Callback::from(move |_| driver.roll(true))
    };

    let g = game.borrow();
    let started = g.is_started();

    let name_inputs: Html = g
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let oninput = {
                let driver = driver.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    if let Err(e) = driver.game.borrow_mut().set_name(i, &input.value()) {
                        clog(&format!("dice: name ignored: {e}"));
                    }
                })
            };
            html! {<div key={i} style="display:flex; align-items:center; gap:8px;">
                <label style="min-width:72px;">{ format!("{}:", default_player_name(i)) }</label>
                <input type="text" value={name.clone()} placeholder="Enter name" disabled={started} {oninput}
                    style="flex:1; background:#0e1116; color:inherit; border:1px solid #30363d; border-radius:6px; padding:4px 6px;" />
            </div>}
        })
        .collect();

    let banner = match (g.ranking(), g.current_player()) {
        (Some(_), _) => format!("Game over: all {} players rolled", g.players().len()),
        (None, Some(p)) => format!("{}'s turn", p.name),
        (None, None) => "Set up players and press Start".to_string(),
    };

    let dice: Html = g
        .dice()
        .iter()
        .map(|face| {
            let (glyph, style) = match face {
                DieFace::Unrolled => (die_glyph(1), "opacity:0.45;"),
                DieFace::Rolling => (
                    die_glyph(1),
                    "transform:rotate(25deg) scale(1.1); opacity:0.8; color:#58a6ff;",
                ),
                DieFace::Rolled(v) => (die_glyph(*v), "color:#d4af37;"),
            };
            html! { <div style={format!("font-size:56px; line-height:1; transition:transform 0.2s; {}", style)}>{ glyph }</div> }
        })
        .collect();

    let rows: Html = g
        .result_rows()
        .into_iter()
        .map(|row| {
            let text = match row.sum {
                Some(sum) => format!("{} = {}", join_rolls(&row.values), sum),
                None => join_rolls(&row.values),
            };
            let border = if row.current { "#58a6ff" } else { "#30363d" };
            html! {<div style={format!("display:flex; justify-content:space-between; gap:12px; padding:4px 8px; border:1px solid {}; border-radius:6px;", border)}>
                <span style="font-weight:600;">{ row.name }</span>
                <span style="font-variant-numeric:tabular-nums;">{ text }</span>
            </div>}
        })
        .collect();

    html! {<div style="display:flex; gap:20px; flex-wrap:wrap;">
        <div style="flex:1 1 240px; display:flex; flex-direction:column; gap:10px; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px;">
            <h4 style="margin:0;">{"👥 Players"}</h4>
            <NumberInput label="Players:" value={g.player_count()} min={MIN_PLAYERS} max={MAX_PLAYERS}
                disabled={started} on_change={on_count} />
            <div style="display:flex; flex-direction:column; gap:6px; max-height:260px; overflow-y:auto;">{ name_inputs }</div>
            <button onclick={on_toggle}>{ if started { "⏹ Stop Game" } else { "▶ Start Game" } }</button>
        </div>
        <div style="flex:1 1 280px; display:flex; flex-direction:column; align-items:center; gap:12px;">
            <div style="font-size:16px; font-weight:600;">{ banner }</div>
            <div style="display:flex; gap:8px;">
                <button onclick={roll_one} disabled={!started}>{"Roll One"}</button>
                <button onclick={roll_all} disabled={!started}>{"Roll All"}</button>
            </div>
            <div style="display:flex; gap:16px;">{ dice }</div>
            <div style="width:100%; display:flex; flex-direction:column; gap:4px; font-size:14px;">{ rows }</div>
        </div>
    </div>}
}
