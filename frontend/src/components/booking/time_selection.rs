use log::{error, info};
use shared::format::{format_availability_date, format_duration, format_price};
use shared::{Barber, BookingError, BookingRequest, Offering, Route, TimeSlotPicker};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::alerts::{ErrorBanner, Spinner};
use crate::hooks::use_route::navigate;
use crate::services::api::api_client;
use crate::services::storage::browser_session;

#[derive(Properties, PartialEq)]
pub struct TimeSelectionProps {
    pub barber_id: i64,
    pub offering_id: i64,
}

#[function_component(TimeSelection)]
pub fn time_selection(props: &TimeSelectionProps) -> Html {
    let barber = use_state(|| Option::<Barber>::None);
    let offering = use_state(|| Option::<Offering>::None);
    let picker = use_state(|| Option::<TimeSlotPicker>::None);
    let loading = use_state(|| true);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    use_effect_with((props.barber_id, props.offering_id), {
        let barber = barber.clone();
        let offering = offering.clone();
        let picker = picker.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        move |ids: &(i64, i64)| {
            let (barber_id, offering_id) = *ids;
            spawn_local(async move {
                error_message.set(None);
                picker.set(None);

                if browser_session().selected_location().is_none() {
                    error_message.set(Some(BookingError::MissingLocation.to_string()));
                    loading.set(false);
                    navigate(Route::BookLocation);
                    return;
                }

                loading.set(true);

                match api_client().load_time_step(barber_id, offering_id).await {
                    Ok(step) => {
                        barber.set(step.barber);
                        offering.set(step.offering);
                        picker.set(Some(step.picker));
                    }
                    Err(e) => {
                        error!("failed to load time slots for barber {}: {}", barber_id, e);
                        error_message.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });
            || ()
        }
    });

    let on_select_date = {
        let picker = picker.clone();
        Callback::from(move |date: String| {
            if let Some(current) = &*picker {
                let mut next = current.clone();
                next.select_date(&date);
                picker.set(Some(next));
            }
        })
    };

    let on_select_time = {
        let picker = picker.clone();
        Callback::from(move |time: String| {
            if let Some(current) = &*picker {
                let mut next = current.clone();
                next.select_time(&time);
                picker.set(Some(next));
            }
        })
    };

    let on_submit = {
        let picker = picker.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let barber_id = props.barber_id;
        let offering_id = props.offering_id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(current) = (*picker).clone() else {
                return;
            };

            let session = browser_session();
            let request = BookingRequest {
                barber_id,
                offering_id,
                location_id: session.selected_location(),
                user_id: session.current_user_id(),
            };

            // A rejected form sends nothing
            match request.compose(&current) {
                Ok(_) => {}
                Err(BookingError::NotLoggedIn) => {
                    navigate(Route::Profile);
                    return;
                }
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            }

            is_submitting.set(true);
            error_message.set(None);

            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                match api_client().book(&request, &current).await {
                    Ok(order) => {
                        info!("order {:?} placed", order.order_id);
                        is_submitting.set(false);
                        navigate(Route::Orders);
                    }
                    Err(e) => {
                        error!("failed to place order: {}", e);
                        is_submitting.set(false);
                        error_message.set(Some(format!("Failed to place order: {}", e)));
                    }
                }
            });
        })
    };

    let heading = match (&*barber, &*offering) {
        (Some(barber), Some(offering)) => html! {
            <p class="booking-summary">
                {format!("{} with {}, {} ({})", offering.name, barber.name, format_price(offering.price), format_duration(offering.duration))}
            </p>
        },
        _ => html! {},
    };

    let slots = match &*picker {
        Some(current) => {
            let selected_date = current.selected_date().unwrap_or_default().to_string();
            let selected_time = current.selected_time().unwrap_or_default().to_string();
            html! {
                <form class="time-picker" onsubmit={on_submit}>
                    <div class="dates">
                        { for current.days().iter().map(|day| {
                            let date = day.date.clone();
                            let class = classes!("slot", (date == selected_date).then_some("selected"));
                            let onclick = on_select_date.reform(move |_: MouseEvent| date.clone());
                            html! {
                                <button type="button" {class} {onclick}>{format_availability_date(&day.date)}</button>
                            }
                        }) }
                    </div>
                    <div class="times">
                        if current.times_for_selected_date().is_empty() {
                            <p class="empty">{"No free time on this day"}</p>
                        }
                        { for current.times_for_selected_date().iter().map(|time| {
                            let value = time.clone();
                            let class = classes!("slot", (*time == selected_time).then_some("selected"));
                            let onclick = on_select_time.reform(move |_: MouseEvent| value.clone());
                            html! { <button type="button" {class} {onclick}>{time.clone()}</button> }
                        }) }
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting || !current.is_complete()}>
                        { if *is_submitting { "Booking..." } else { "Book" } }
                    </button>
                </form>
            }
        }
        None => html! {},
    };

    html! {
        <section class="booking-step">
            <h2>{"Choose a time"}</h2>
            {heading}
            <ErrorBanner message={(*error_message).clone()} />
            if *loading {
                <Spinner />
            } else {
                {slots}
            }
            <a class="back-link" href={format!("#{}", Route::BookOffering { barber_id: props.barber_id }.path())}>
                {"Back to services"}
            </a>
        </section>
    }
}
