use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NumberInputProps {
    pub label: AttrValue,
    pub value: usize,
    pub min: usize,
    pub max: usize,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<usize>,
}

/// `- [n] +` stepper; every emitted value is already clamped to [min, max].
#[function_component(NumberInput)]
pub fn number_input(props: &NumberInputProps) -> Html {
    let (min, max, value) = (props.min, props.max, props.value);
    let down = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            if value > min {
                cb.emit(value - 1);
            }
        })
    };
    let up = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            if value < max {
                cb.emit(value + 1);
            }
        })
    };
    let typed = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.value().trim().parse::<usize>() {
                Ok(n) => cb.emit(n.clamp(min, max)),
                // restore the field to the last good value
                Err(_) => input.set_value(&value.to_string()),
            }
        })
    };
    html! {<div style="display:flex; align-items:center; gap:8px;">
        <label style="font-weight:500;">{ props.label.clone() }</label>
        <div style="display:flex; align-items:center; gap:4px;">
            <button onclick={down} disabled={props.disabled || value <= min}>{"-"}</button>
            <input type="number" min={min.to_string()} max={max.to_string()} value={value.to_string()}
                disabled={props.disabled} onchange={typed}
                style="width:56px; text-align:center; background:#0e1116; color:inherit; border:1px solid #30363d; border-radius:6px; padding:4px;" />
            <button onclick={up} disabled={props.disabled || value >= max}>{"+"}</button>
        </div>
    </div>}
}
