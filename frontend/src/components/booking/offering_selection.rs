use log::error;
use shared::format::{format_duration, format_price};
use shared::{retain_valid, Barber, Offering, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::alerts::{DroppedNotice, ErrorBanner, Spinner};
use crate::hooks::use_route::navigate;
use crate::services::api::api_client;

#[derive(Properties, PartialEq)]
pub struct OfferingSelectionProps {
    pub barber_id: i64,
}

#[function_component(OfferingSelection)]
pub fn offering_selection(props: &OfferingSelectionProps) -> Html {
    let barber = use_state(|| Option::<Barber>::None);
    let offerings = use_state(Vec::<Offering>::new);
    let dropped = use_state(|| 0usize);
    let loading = use_state(|| true);
    let error_message = use_state(|| Option::<String>::None);

    use_effect_with(props.barber_id, {
        let barber = barber.clone();
        let offerings = offerings.clone();
        let dropped = dropped.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        move |barber_id: &i64| {
            let barber_id = *barber_id;
            spawn_local(async move {
                loading.set(true);
                error_message.set(None);
                let api_client = api_client();

                match api_client.fetch::<Barber>(barber_id).await {
                    Ok(found) => barber.set(Some(found)),
                    Err(e) => {
                        error!("failed to load barber {}: {}", barber_id, e);
                        error_message.set(Some(format!("Failed to load barber: {}", e)));
                        loading.set(false);
                        return;
                    }
                }

                match api_client.offerings_for_barber(barber_id).await {
                    Ok(listed) => {
                        let valid = retain_valid(listed);
                        dropped.set(valid.dropped);
                        offerings.set(valid.records);
                    }
                    Err(e) => {
                        error!("failed to load offerings for barber {}: {}", barber_id, e);
                        error_message.set(Some(format!("Failed to load services: {}", e)));
                    }
                }

                loading.set(false);
            });
            || ()
        }
    });

    let on_select = {
        let error_message = error_message.clone();
        let barber_id = props.barber_id;
        Callback::from(move |offering_id: Option<i64>| match offering_id {
            Some(offering_id) => navigate(Route::BookTime {
                barber_id,
                offering_id,
            }),
            None => error_message.set(Some("Offering id is missing".to_string())),
        })
    };

    let heading = match &*barber {
        Some(barber) => format!("Services by {}", barber.name),
        None => "Choose a service".to_string(),
    };

    let body = if *loading {
        html! { <Spinner /> }
    } else if error_message.is_none() && offerings.is_empty() {
        html! { <p class="empty">{"This barber has no services yet"}</p> }
    } else {
        offerings
            .iter()
            .map(|offering| {
                let offering_id = offering.offering_id;
                let onclick = on_select.reform(move |_: MouseEvent| offering_id);
                html! {
                    <div class="card" key={offering_id.unwrap_or_default()}>
                        <h3>{offering.name.clone()}</h3>
                        <p>{format_price(offering.price)}</p>
                        <p class="muted">{format_duration(offering.duration)}</p>
                        <button class="btn btn-primary" {onclick}>{"Choose"}</button>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <section class="booking-step">
            <h2>{heading}</h2>
            <ErrorBanner message={(*error_message).clone()} />
            <DroppedNotice dropped={*dropped} collection="offerings" />
            <div class="card-grid">{body}</div>
        </section>
    }
}
