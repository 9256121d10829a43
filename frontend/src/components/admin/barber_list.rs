use log::{error, info};
use shared::format::{truncate_to_minutes, working_hour_options};
use shared::weekday::labels_for_tokens;
use shared::{Barber, BarberForm, BarberPayload, Location, Offering, Weekday};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::delete_record;
use crate::components::alerts::{banner_message, DroppedNotice, ErrorBanner, Spinner};
use crate::components::inputs::{input_value, select_value, time_options};
use crate::hooks::use_collection::{use_collection, UseCollectionResult};
use crate::services::api::api_client;

/// A single edit to a barber form
#[derive(Clone, PartialEq)]
enum FormChange {
    Name(String),
    ToggleDay(String),
    StartTime(String),
    EndTime(String),
    Location(String),
    ToggleOffering(i64),
}

fn apply(form: &BarberForm, change: FormChange) -> BarberForm {
    let mut next = form.clone();
    match change {
        FormChange::Name(name) => next.name = name,
        FormChange::ToggleDay(label) => next.toggle_day(&label),
        FormChange::StartTime(time) => next.start_time = time,
        FormChange::EndTime(time) => next.end_time = time,
        FormChange::Location(location_id) => next.location_id = location_id,
        FormChange::ToggleOffering(offering_id) => next.toggle_offering(offering_id),
    }
    next
}

#[derive(Properties, PartialEq)]
struct BarberFieldsProps {
    form: BarberForm,
    on_change: Callback<FormChange>,
    /// Location and offering pickers; only shown when creating
    #[prop_or_default]
    locations: Option<Vec<Location>>,
    #[prop_or_default]
    offerings: Option<Vec<Offering>>,
}

#[function_component(BarberFields)]
fn barber_fields(props: &BarberFieldsProps) -> Html {
    let hours = working_hour_options();
    let on_change = &props.on_change;

    // Unrecognised stored tokens get a box too so they can be unticked
    let labels = Weekday::ALL
        .iter()
        .map(|day| day.label())
        .chain(props.form.unknown_days())
        .map(str::to_string)
        .collect::<Vec<_>>();
    let day_boxes = labels.into_iter().map(|label| {
        let checked = props.form.has_day(&label);
        let toggled = label.clone();
        let onchange = on_change.reform(move |_: Event| FormChange::ToggleDay(toggled.clone()));
        html! {
            <label class="checkbox">
                <input type="checkbox" {checked} {onchange} />
                {label}
            </label>
        }
    });

    let location_select = props.locations.as_ref().map(|locations| {
        let onchange = on_change.reform(|e: Event| FormChange::Location(select_value(&e)));
        html! {
            <select {onchange}>
                <option value="" selected={props.form.location_id.is_empty()}>{"Choose a location"}</option>
                { for locations.iter().filter_map(|location| location.location_id.map(|id| (id, location))).map(|(id, location)| {
                    let value = id.to_string();
                    html! {
                        <option selected={props.form.location_id == value} value={value.clone()}>{location.name.clone()}</option>
                    }
                }) }
            </select>
        }
    });

    let offering_boxes = props.offerings.as_ref().map(|offerings| {
        offerings
            .iter()
            .filter_map(|offering| offering.offering_id.map(|id| (id, offering)))
            .map(|(id, offering)| {
                let onchange = on_change.reform(move |_: Event| FormChange::ToggleOffering(id));
                html! {
                    <label class="checkbox">
                        <input type="checkbox" checked={props.form.has_offering(id)} {onchange} />
                        {offering.name.clone()}
                    </label>
                }
            })
            .collect::<Html>()
    });

    html! {
        <>
            <input
                placeholder="Name"
                value={props.form.name.clone()}
                oninput={on_change.reform(|e: InputEvent| FormChange::Name(input_value(&e)))}
            />
            <div class="weekdays">{ for day_boxes }</div>
            <div class="hours">
                <select onchange={on_change.reform(|e: Event| FormChange::StartTime(select_value(&e)))}>
                    {time_options(&hours, &props.form.start_time)}
                </select>
                <span>{"to"}</span>
                <select onchange={on_change.reform(|e: Event| FormChange::EndTime(select_value(&e)))}>
                    {time_options(&hours, &props.form.end_time)}
                </select>
            </div>
            { location_select.unwrap_or_default() }
            if let Some(boxes) = offering_boxes {
                <div class="offering-choices">{boxes}</div>
            }
        </>
    }
}

#[function_component(BarberList)]
pub fn barber_list() -> Html {
    let api_client = api_client();
    let UseCollectionResult { state, refresh }: UseCollectionResult<Barber> = use_collection(&api_client);
    let locations: UseCollectionResult<Location> = use_collection(&api_client);
    let offerings: UseCollectionResult<Offering> = use_collection(&api_client);

    let new_form = use_state(BarberForm::default);
    let editing = use_state(|| Option::<(i64, BarberForm)>::None);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    let on_new_change = {
        let new_form = new_form.clone();
        Callback::from(move |change: FormChange| new_form.set(apply(&new_form, change)))
    };

    let on_edit_change = {
        let editing = editing.clone();
        Callback::from(move |change: FormChange| {
            if let Some((id, form)) = &*editing {
                editing.set(Some((*id, apply(form, change))));
            }
        })
    };

    let on_create = {
        let new_form = new_form.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let refresh = refresh.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let new_barber = match new_form.validate_new() {
                Ok(new_barber) => new_barber,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };

            is_submitting.set(true);
            error_message.set(None);

            let new_form = new_form.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let refresh = refresh.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.create_barber(&new_barber).await {
                    Ok(created) => {
                        info!("created barber {:?}", created.barber_id);
                        new_form.set(BarberForm::default());
                    }
                    Err(e) => {
                        error!("failed to create barber: {}", e);
                        error_message.set(Some(format!("Failed to create barber: {}", e)));
                    }
                }
                // A failed link still leaves the barber behind
                refresh.emit(());
                is_submitting.set(false);
            });
        })
    };

    let on_save = {
        let editing = editing.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let refresh = refresh.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some((id, form)) = (*editing).clone() else {
                return;
            };
            let payload = match form.validate_update(id) {
                Ok(payload) => payload,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };

            is_submitting.set(true);
            error_message.set(None);

            let editing = editing.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let refresh = refresh.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.update::<Barber, BarberPayload>(id, &payload).await {
                    Ok(_) => {
                        editing.set(None);
                        refresh.emit(());
                    }
                    Err(e) => {
                        error!("failed to update barber {}: {}", id, e);
                        error_message.set(Some(format!("Failed to update barber: {}", e)));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let cards = state
        .items
        .iter()
        .filter_map(|barber| barber.barber_id.map(|id| (id, barber)))
        .map(|(id, barber)| {
            if let Some((editing_id, form)) = &*editing {
                if *editing_id == id {
                    return html! {
                        <form class="card editing" key={id} onsubmit={on_save.clone()}>
                            <BarberFields form={form.clone()} on_change={on_edit_change.clone()} />
                            <div class="actions">
                                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>{"Save"}</button>
                                <button type="button" class="btn" onclick={on_cancel_edit.clone()}>{"Cancel"}</button>
                            </div>
                        </form>
                    };
                }
            }

            let on_edit = {
                let editing = editing.clone();
                let form = BarberForm::from_barber(barber);
                Callback::from(move |_: MouseEvent| editing.set(Some((id, form.clone()))))
            };
            let on_delete = {
                let error_message = error_message.clone();
                let refresh = refresh.clone();
                Callback::from(move |_: MouseEvent| {
                    delete_record::<Barber>(Some(id), error_message.clone(), refresh.clone())
                })
            };

            let offering_names = barber.offering_names();
            html! {
                <div class="card" key={id}>
                    <h3>{barber.name.clone()}</h3>
                    <p class="muted">
                        {barber.location_name.clone().unwrap_or_else(|| "Not linked".to_string())}
                    </p>
                    <p>{labels_for_tokens(&barber.available_days).join(" ")}</p>
                    <p>
                        {format!("{} - {}", truncate_to_minutes(&barber.start_time), truncate_to_minutes(&barber.end_time))}
                    </p>
                    if !offering_names.is_empty() {
                        <p class="muted">{offering_names.join(", ")}</p>
                    }
                    <div class="actions">
                        <button class="btn" onclick={on_edit}>{"Edit"}</button>
                        <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let error = banner_message(
        &error_message,
        &[&state.error, &locations.state.error, &offerings.state.error],
    );

    html! {
        <section class="admin">
            <h2>{"Barbers"}</h2>
            <ErrorBanner message={error} />
            <DroppedNotice dropped={state.dropped} collection="barbers" />

            <form class="card create-form" onsubmit={on_create}>
                <h3>{"New barber"}</h3>
                <BarberFields
                    form={(*new_form).clone()}
                    on_change={on_new_change}
                    locations={Some(locations.state.items.clone())}
                    offerings={Some(offerings.state.items.clone())}
                />
                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    { if *is_submitting { "Saving..." } else { "Add barber" } }
                </button>
            </form>

            if state.loading {
                <Spinner />
            } else if state.items.is_empty() {
                <p class="empty">{"No barbers yet"}</p>
            } else {
                <div class="card-grid">{cards}</div>
            }
        </section>
    }
}
