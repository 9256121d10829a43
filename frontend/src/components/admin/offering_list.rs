use log::error;
use shared::format::{format_duration, format_price};
use shared::{Offering, OfferingForm, OfferingPayload};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::delete_record;
use crate::components::alerts::{banner_message, DroppedNotice, ErrorBanner, Spinner};
use crate::components::inputs::input_value;
use crate::hooks::use_collection::{use_collection, UseCollectionResult};
use crate::services::api::api_client;

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Price,
    Duration,
}

fn with_field(form: &OfferingForm, field: Field, value: String) -> OfferingForm {
    let mut next = form.clone();
    match field {
        Field::Name => next.name = value,
        Field::Price => next.price = value,
        Field::Duration => next.duration = value,
    }
    next
}

#[derive(Properties, PartialEq)]
struct OfferingFieldsProps {
    form: OfferingForm,
    on_change: Callback<(Field, String)>,
}

#[function_component(OfferingFields)]
fn offering_fields(props: &OfferingFieldsProps) -> Html {
    let oninput = |field: Field| props.on_change.reform(move |e: InputEvent| (field, input_value(&e)));
    html! {
        <>
            <input placeholder="Name" value={props.form.name.clone()} oninput={oninput(Field::Name)} />
            <input type="number" step="0.01" min="0" placeholder="Price" value={props.form.price.clone()} oninput={oninput(Field::Price)} />
            <input type="number" min="1" placeholder="Duration, min" value={props.form.duration.clone()} oninput={oninput(Field::Duration)} />
        </>
    }
}

#[function_component(OfferingList)]
pub fn offering_list() -> Html {
    let api_client = api_client();
    let UseCollectionResult { state, refresh }: UseCollectionResult<Offering> = use_collection(&api_client);

    let new_form = use_state(OfferingForm::default);
    let editing = use_state(|| Option::<(i64, OfferingForm)>::None);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    let on_new_change = {
        let new_form = new_form.clone();
        Callback::from(move |(field, value): (Field, String)| {
            new_form.set(with_field(&new_form, field, value));
        })
    };

    let on_edit_change = {
        let editing = editing.clone();
        Callback::from(move |(field, value): (Field, String)| {
            if let Some((id, form)) = &*editing {
                editing.set(Some((*id, with_field(form, field, value))));
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
                match api_client.create::<Offering, OfferingPayload>(&payload).await {
                    Ok(_) => {
                        new_form.set(OfferingForm::default());
                        refresh.emit(());
                    }
                    Err(e) => {
                        error!("failed to create offering: {}", e);
                        error_message.set(Some(format!("Failed to create offering: {}", e)));
                    }
                }
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
                match api_client.update::<Offering, OfferingPayload>(id, &payload).await {
                    Ok(_) => {
                        editing.set(None);
                        refresh.emit(());
                    }
                    Err(e) => {
                        error!("failed to update offering {}: {}", id, e);
                        error_message.set(Some(format!("Failed to update offering: {}", e)));
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
        .filter_map(|offering| offering.offering_id.map(|id| (id, offering)))
        .map(|(id, offering)| {
            if let Some((editing_id, form)) = &*editing {
                if *editing_id == id {
                    return html! {
                        <form class="card editing" key={id} onsubmit={on_save.clone()}>
                            <OfferingFields form={form.clone()} on_change={on_edit_change.clone()} />
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
                let form = OfferingForm::from_offering(offering);
                Callback::from(move |_: MouseEvent| editing.set(Some((id, form.clone()))))
            };
            let on_delete = {
                let error_message = error_message.clone();
                let refresh = refresh.clone();
                Callback::from(move |_: MouseEvent| {
                    delete_record::<Offering>(Some(id), error_message.clone(), refresh.clone())
                })
            };

            html! {
                <div class="card" key={id}>
                    <h3>{offering.name.clone()}</h3>
                    <p>{format_price(offering.price)}</p>
                    <p class="muted">{format_duration(offering.duration)}</p>
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
            <h2>{"Offerings"}</h2>
            <ErrorBanner message={banner_message(&error_message, &[&state.error])} />
            <DroppedNotice dropped={state.dropped} collection="offerings" />

            <form class="card create-form" onsubmit={on_create}>
                <h3>{"New offering"}</h3>
                <OfferingFields form={(*new_form).clone()} on_change={on_new_change} />
                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    { if *is_submitting { "Saving..." } else { "Add offering" } }
                </button>
            </form>

            if state.loading {
                <Spinner />
            } else if state.items.is_empty() {
                <p class="empty">{"No offerings yet"}</p>
            } else {
                <div class="card-grid">{cards}</div>
            }
        </section>
    }
}
