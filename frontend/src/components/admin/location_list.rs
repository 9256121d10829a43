use log::error;
use shared::{Location, LocationForm, LocationPayload};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::delete_record;
use crate::components::alerts::{banner_message, DroppedNotice, ErrorBanner, Spinner};
use crate::components::inputs::input_value;
use crate::hooks::use_collection::{use_collection, UseCollectionResult};
use crate::services::api::api_client;

#[function_component(LocationList)]
pub fn location_list() -> Html {
    let api_client = api_client();
    let UseCollectionResult { state, refresh }: UseCollectionResult<Location> = use_collection(&api_client);

    let new_form = use_state(LocationForm::default);
    let editing = use_state(|| Option::<(i64, LocationForm)>::None);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    let on_new_name = {
        let new_form = new_form.clone();
        Callback::from(move |e: InputEvent| {
            new_form.set(LocationForm { name: input_value(&e), ..(*new_form).clone() });
        })
    };

    let on_new_address = {
        let new_form = new_form.clone();
        Callback::from(move |e: InputEvent| {
            new_form.set(LocationForm { address: input_value(&e), ..(*new_form).clone() });
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
            let payload = match new_form.validate() {
                Ok(payload) => payload,
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
                match api_client.create::<Location, LocationPayload>(&payload).await {
                    Ok(_) => {
                        new_form.set(LocationForm::default());
                        refresh.emit(());
                    }
                    Err(e) => {
                        error!("failed to create location: {}", e);
                        error_message.set(Some(format!("Failed to create location: {}", e)));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_edit_name = {
        let editing = editing.clone();
        Callback::from(move |e: InputEvent| {
            if let Some((id, form)) = (*editing).clone() {
                editing.set(Some((id, LocationForm { name: input_value(&e), ..form })));
            }
        })
    };

    let on_edit_address = {
        let editing = editing.clone();
        Callback::from(move |e: InputEvent| {
            if let Some((id, form)) = (*editing).clone() {
                editing.set(Some((id, LocationForm { address: input_value(&e), ..form })));
            }
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
            let payload = match form.validate() {
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
                match api_client.update::<Location, LocationPayload>(id, &payload).await {
                    Ok(_) => {
                        editing.set(None);
                        refresh.emit(());
                    }
                    Err(e) => {
                        error!("failed to update location {}: {}", id, e);
                        error_message.set(Some(format!("Failed to update location: {}", e)));
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
        .filter_map(|location| location.location_id.map(|id| (id, location)))
        .map(|(id, location)| {
            if let Some((editing_id, form)) = &*editing {
                if *editing_id == id {
                    return html! {
                        <form class="card editing" key={id} onsubmit={on_save.clone()}>
                            <input placeholder="Name" value={form.name.clone()} oninput={on_edit_name.clone()} />
                            <input placeholder="Address" value={form.address.clone()} oninput={on_edit_address.clone()} />
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
                let form = LocationForm::from_location(location);
                Callback::from(move |_: MouseEvent| editing.set(Some((id, form.clone()))))
            };
            let on_delete = {
                let error_message = error_message.clone();
                let refresh = refresh.clone();
                Callback::from(move |_: MouseEvent| {
                    delete_record::<Location>(Some(id), error_message.clone(), refresh.clone())
                })
            };

            html! {
                <div class="card" key={id}>
                    <h3>{location.name.clone()}</h3>
                    <p class="muted">{location.display_address().to_string()}</p>
                    <div class="actions">
                        <button class="btn" onclick={on_edit}>{"Edit"}</button>
                        <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section class="admin">
            <h2>{"Locations"}</h2>
            <ErrorBanner message={banner_message(&error_message, &[&state.error])} />
            <DroppedNotice dropped={state.dropped} collection="locations" />

            <form class="card create-form" onsubmit={on_create}>
                <h3>{"New location"}</h3>
                <input placeholder="Name" value={new_form.name.clone()} oninput={on_new_name} />
                <input placeholder="Address" value={new_form.address.clone()} oninput={on_new_address} />
                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    { if *is_submitting { "Saving..." } else { "Add location" } }
                </button>
            </form>

            if state.loading {
                <Spinner />
            } else if state.items.is_empty() {
                <p class="empty">{"No locations yet"}</p>
            } else {
                <div class="card-grid">{cards}</div>
            }
        </section>
    }
}
