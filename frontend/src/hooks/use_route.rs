use gloo::events::EventListener;
use log::warn;
use shared::Route;
use yew::prelude::*;

/// Route named by the current location hash
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or(Route::Home)
}

/// Change the location hash; [`use_route`] picks the change up
pub fn navigate(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_hash(&route.path()) {
        warn!("failed to navigate to {}: {:?}", route, e);
    }
}

/// The current route, re-rendering on every `hashchange`
#[hook]
pub fn use_route() -> Route {
    let route = use_state(current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "hashchange", move |_| {
                    route.set(current_route());
                })
            });
            move || drop(listener)
        });
    }

    *route
}
