use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h2>{"Page not found"}</h2>
            <a href="#/">{"Back to the home page"}</a>
        </section>
    }
}
