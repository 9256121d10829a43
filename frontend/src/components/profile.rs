use log::error;
use shared::{Credentials, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::alerts::ErrorBanner;
use crate::components::inputs::input_value;
use crate::hooks::use_session::UseSessionActions;
use crate::services::api::api_client;

#[derive(Clone, Copy, PartialEq)]
enum Action {
    LogIn,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub user: Option<User>,
    pub actions: UseSessionActions,
}

#[function_component(Profile)]
pub fn profile(props: &ProfileProps) -> Html {
    let credentials = use_state(Credentials::default);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    let on_username = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            credentials.set(Credentials { username: input_value(&e), ..(*credentials).clone() });
        })
    };

    let on_password = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            credentials.set(Credentials { password: input_value(&e), ..(*credentials).clone() });
        })
    };

    let submit = {
        let credentials = credentials.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let sign_in = props.actions.sign_in.clone();

        Callback::from(move |action: Action| {
            let current = (*credentials).clone();
            if let Err(e) = current.validate() {
                error_message.set(Some(e.to_string()));
                return;
            }

            is_submitting.set(true);
            error_message.set(None);

            let credentials = credentials.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let sign_in = sign_in.clone();

            spawn_local(async move {
                let api_client = api_client();
                let result = match action {
                    Action::LogIn => api_client.log_in(&current).await,
                    Action::Register => api_client.register(&current).await,
                };
                match result {
                    Ok(user) => {
                        credentials.set(Credentials::default());
                        sign_in.emit(user);
                    }
                    Err(e) => {
                        error!("authentication failed for {}: {}", current.username, e);
                        error_message.set(Some(e.to_string()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_submit = submit.reform(|e: SubmitEvent| {
        e.prevent_default();
        Action::LogIn
    });
    let on_register = submit.reform(|_: MouseEvent| Action::Register);

    let on_logout = {
        let sign_out = props.actions.sign_out.clone();
        Callback::from(move |_: MouseEvent| sign_out.emit(()))
    };

    if let Some(user) = &props.user {
        return html! {
            <section class="profile">
                <h2>{"Profile"}</h2>
                <p>{format!("Signed in as {}", user.username)}</p>
                <div class="actions">
                    <a class="btn btn-primary" href="#/book/location">{"Book a haircut"}</a>
                    <a class="btn" href="#/orders">{"Orders"}</a>
                    <button class="btn btn-danger" onclick={on_logout}>{"Log out"}</button>
                </div>
            </section>
        };
    }

    html! {
        <section class="profile">
            <h2>{"Sign in"}</h2>
            <ErrorBanner message={(*error_message).clone()} />
            <form class="card" onsubmit={on_submit}>
                <input
                    placeholder="Username"
                    autocomplete="username"
                    value={credentials.username.clone()}
                    oninput={on_username}
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    value={credentials.password.clone()}
                    oninput={on_password}
                />
                <div class="actions">
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>{"Log in"}</button>
                    <button type="button" class="btn" disabled={*is_submitting} onclick={on_register}>{"Register"}</button>
                </div>
            </form>
        </section>
    }
}
