use log::error;
use shared::{retain_valid, Barber, Location, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::alerts::{DroppedNotice, ErrorBanner, Spinner};
use crate::hooks::use_route::navigate;
use crate::services::api::api_client;

#[derive(Properties, PartialEq)]
pub struct BarberSelectionProps {
    pub location_id: i64,
}

#[function_component(BarberSelection)]
pub fn barber_selection(props: &BarberSelectionProps) -> Html {
    let location = use_state(|| Option::<Location>::None);
    let barbers = use_state(Vec::<Barber>::new);
    let dropped = use_state(|| 0usize);
    let loading = use_state(|| true);
    let error_message = use_state(|| Option::<String>::None);

    use_effect_with(props.location_id, {
        let location = location.clone();
        let barbers = barbers.clone();
        let dropped = dropped.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        move |location_id: &i64| {
            let location_id = *location_id;
            spawn_local(async move {
                loading.set(true);
                error_message.set(None);

                match api_client().barbers_at_location(location_id).await {
                    Ok((found, listed)) => {
                        let valid = retain_valid(listed);
                        location.set(Some(found));
                        dropped.set(valid.dropped);
                        barbers.set(valid.records);
                    }
                    Err(e) => {
                        error!("failed to load barbers for location {}: {}", location_id, e);
                        error_message.set(Some(format!("Failed to load barbers: {}", e)));
                    }
                }

                loading.set(false);
            });
            || ()
        }
    });

    let heading = match &*location {
        Some(location) => format!("Barbers at {}", location.name),
        None => "Choose a barber".to_string(),
    };

    let body = if *loading {
        html! { <Spinner /> }
    } else if error_message.is_none() && barbers.is_empty() {
        html! { <p class="empty">{"No barbers work at this location yet"}</p> }
    } else {
        barbers
            .iter()
            .filter_map(|barber| barber.barber_id.map(|id| (id, barber)))
            .map(|(barber_id, barber)| {
                let onclick = Callback::from(move |_: MouseEvent| {
                    navigate(Route::BookOffering { barber_id })
                });
                let offerings = barber.offering_names();
                html! {
                    <div class="card" key={barber_id}>
                        <h3>{barber.name.clone()}</h3>
                        if offerings.is_empty() {
                            <p class="muted">{"No services listed"}</p>
                        } else {
                            <p class="muted">{offerings.join(", ")}</p>
                        }
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
            <DroppedNotice dropped={*dropped} collection="barbers" />
            <div class="card-grid">{body}</div>
            <a class="back-link" href="#/book/location">{"Back to locations"}</a>
        </section>
    }
}
