use shared::{Location, Route};
use yew::prelude::*;

use crate::components::alerts::{DroppedNotice, ErrorBanner, Spinner};
use crate::hooks::use_collection::{use_collection, UseCollectionResult};
use crate::hooks::use_route::navigate;
use crate::services::api::api_client;
use crate::services::storage::browser_session;

#[function_component(LocationSelection)]
pub fn location_selection() -> Html {
    let api_client = api_client();
    let UseCollectionResult { state, .. }: UseCollectionResult<Location> = use_collection(&api_client);

    let on_select = Callback::from(|location_id: i64| {
        browser_session().remember_location(location_id);
        navigate(Route::BookBarber { location_id });
    });

    let body = if state.loading {
        html! { <Spinner /> }
    } else if state.error.is_none() && state.items.is_empty() {
        html! { <p class="empty">{"No locations found"}</p> }
    } else {
        state
            .items
            .iter()
            .filter_map(|location| location.location_id.map(|id| (id, location)))
            .map(|(id, location)| {
                let onclick = on_select.reform(move |_: MouseEvent| id);
                html! {
                    <div class="card" key={id}>
                        <h3>{location.name.clone()}</h3>
                        <p class="muted">{location.display_address().to_string()}</p>
                        <button class="btn btn-primary" {onclick}>{"Choose"}</button>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <section class="booking-step">
            <h2>{"Choose a location"}</h2>
            <ErrorBanner message={state.error.clone()} />
            <DroppedNotice dropped={state.dropped} collection="locations" />
            <div class="card-grid">{body}</div>
        </section>
    }
}
