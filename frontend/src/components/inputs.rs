use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

/// `<option>`s for a list of `HH:MM` values
pub fn time_options(options: &[String], selected: &str) -> Html {
    options
        .iter()
        .map(|time| {
            html! {
                <option value={time.clone()} selected={time == selected}>{time.clone()}</option>
            }
        })
        .collect()
}
