use log::info;
use shared::Route;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::admin::barber_list::BarberList;
use components::admin::location_list::LocationList;
use components::admin::offering_list::OfferingList;
use components::admin::order_list::OrderList;
use components::admin::user_list::UserList;
use components::booking::barber_selection::BarberSelection;
use components::booking::location_selection::LocationSelection;
use components::booking::offering_selection::OfferingSelection;
use components::booking::time_selection::TimeSelection;
use components::home::Home;
use components::nav_bar::NavBar;
use components::not_found::NotFound;
use components::profile::Profile;
use hooks::use_route::use_route;
use hooks::use_session::use_session;
use hooks::use_theme::use_theme;
use services::config::client_config;
use services::logging::ConsoleLogger;

#[function_component(App)]
fn app() -> Html {
    let route = use_route();
    let session = use_session();
    let theme = use_theme();

    let content = match route {
        Route::Home => html! { <Home /> },
        Route::BookLocation => html! { <LocationSelection /> },
        Route::BookBarber { location_id } => html! { <BarberSelection {location_id} /> },
        Route::BookOffering { barber_id } => html! { <OfferingSelection {barber_id} /> },
        Route::BookTime { barber_id, offering_id } => html! { <TimeSelection {barber_id} {offering_id} /> },
        Route::Barbers => html! { <BarberList /> },
        Route::Offerings => html! { <OfferingList /> },
        Route::Orders => html! { <OrderList /> },
        Route::Users => html! { <UserList /> },
        Route::Locations => html! { <LocationList /> },
        Route::Profile => html! {
            <Profile user={session.user.clone()} actions={session.actions.clone()} />
        },
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <>
            <NavBar
                {route}
                user={session.user.clone()}
                theme={theme.theme}
                on_toggle_theme={theme.toggle.clone()}
            />
            <main class="container">{content}</main>
        </>
    }
}

fn main() {
    let config = client_config();
    ConsoleLogger::init(config.log_level);
    info!("barbershop client starting against {}", config.base_url);
    yew::Renderer::<App>::new().render();
}
