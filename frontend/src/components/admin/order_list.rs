use shared::{Barber, Location, Offering, Order, OrderSummary};
use yew::prelude::*;

use super::delete_record;
use crate::components::alerts::{banner_message, DroppedNotice, ErrorBanner, Spinner};
use crate::hooks::use_collection::{use_collection, UseCollectionResult};
use crate::services::api::api_client;

#[function_component(OrderList)]
pub fn order_list() -> Html {
    let api_client = api_client();
    let UseCollectionResult { state, refresh }: UseCollectionResult<Order> = use_collection(&api_client);
    let barbers: UseCollectionResult<Barber> = use_collection(&api_client);
    let offerings: UseCollectionResult<Offering> = use_collection(&api_client);
    let locations: UseCollectionResult<Location> = use_collection(&api_client);
    let error_message = use_state(|| Option::<String>::None);

    let loading = state.loading || barbers.state.loading || offerings.state.loading || locations.state.loading;

    let cards = state
        .items
        .iter()
        .map(|order| {
            let summary = OrderSummary::resolve(
                order,
                &barbers.state.items,
                &offerings.state.items,
                &locations.state.items,
            );
            let on_delete = {
                let error_message = error_message.clone();
                let refresh = refresh.clone();
                let id = order.order_id;
                Callback::from(move |_: MouseEvent| {
                    delete_record::<Order>(id, error_message.clone(), refresh.clone())
                })
            };

            html! {
                <div class="card" key={order.order_id.unwrap_or_default()}>
                    <h3>{summary.offering_name}</h3>
                    <p>{summary.when}</p>
                    <p>{format!("Barber: {}", summary.barber_name)}</p>
                    <p class="muted">{format!("Location: {}", summary.location_name)}</p>
                    <div class="actions">
                        <button class="btn btn-danger" onclick={on_delete}>{"Cancel order"}</button>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let error = banner_message(
        &error_message,
        &[
            &state.error,
            &barbers.state.error,
            &offerings.state.error,
            &locations.state.error,
        ],
    );

    html! {
        <section class="admin">
            <h2>{"Orders"}</h2>
            <ErrorBanner message={error} />
            <DroppedNotice dropped={state.dropped} collection="orders" />

            if loading {
                <Spinner />
            } else if state.items.is_empty() {
                <p class="empty">{"No orders yet"}</p>
            } else {
                <div class="card-grid">{cards}</div>
            }
        </section>
    }
}
