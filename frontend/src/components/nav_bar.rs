use shared::{Route, Theme, User};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub route: Route,
    pub user: Option<User>,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

/// Booking steps all highlight the "Book" link
fn is_active(link: Route, current: Route) -> bool {
    match link {
        Route::BookLocation => matches!(
            current,
            Route::BookLocation
                | Route::BookBarber { .. }
                | Route::BookOffering { .. }
                | Route::BookTime { .. }
        ),
        _ => link == current,
    }
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let links = [
        (Route::Home, "Home"),
        (Route::BookLocation, "Book"),
        (Route::Barbers, "Barbers"),
        (Route::Offerings, "Offerings"),
        (Route::Orders, "Orders"),
        (Route::Users, "Users"),
        (Route::Locations, "Locations"),
    ];

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let theme_label = match props.theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    html! {
        <header class="nav-bar">
            <nav class="container">
                <ul class="nav-links">
                    { for links.iter().map(|(route, label)| {
                        let class = classes!("nav-link", is_active(*route, props.route).then_some("active"));
                        html! { <li><a class={class} href={format!("#{}", route.path())}>{*label}</a></li> }
                    }) }
                </ul>
                <div class="nav-right">
                    <a class={classes!("nav-link", (props.route == Route::Profile).then_some("active"))} href="#/profile">
                        { match &props.user {
                            Some(user) => user.username.clone(),
                            None => "Sign in".to_string(),
                        } }
                    </a>
                    <button class="btn btn-theme" onclick={on_toggle_theme}>{theme_label}</button>
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_booking_steps_highlight_book_link() {
        assert!(is_active(Route::BookLocation, Route::BookTime { barber_id: 1, offering_id: 2 }));
        assert!(is_active(Route::Orders, Route::Orders));
        assert!(!is_active(Route::Home, Route::Orders));
    }
}
