use shared::Route;
use yew::prelude::*;

use crate::hooks::use_route::navigate;

#[function_component(Home)]
pub fn home() -> Html {
    let on_book = Callback::from(|_: MouseEvent| navigate(Route::BookLocation));

    html! {
        <section class="home">
            <h1>{"Barbershop"}</h1>
            <p>{"Pick a location, a barber and a service, then choose a time that suits you."}</p>
            <button class="btn btn-primary" onclick={on_book}>{"Book a haircut"}</button>
        </section>
    }
}
