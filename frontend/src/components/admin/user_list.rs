use log::error;
use shared::{User, UserForm, UserPayload};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::delete_record;
use crate::components::alerts::{banner_message, DroppedNotice, ErrorBanner, Spinner};
use crate::components::inputs::input_value;
use crate::hooks::use_collection::{use_collection, UseCollectionResult};
use crate::services::api::api_client;

#[function_component(UserList)]
pub fn user_list() -> Html {
    let api_client = api_client();
    let UseCollectionResult { state, refresh }: UseCollectionResult<User> = use_collection(&api_client);

    let editing = use_state(|| Option::<(i64, UserForm)>::None);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    let on_username = {
        let editing = editing.clone();
        Callback::from(move |e: InputEvent| {
            if let Some((id, form)) = (*editing).clone() {
                editing.set(Some((id, UserForm { username: input_value(&e), ..form })));
            }
        })
    };

    let on_password = {
        let editing = editing.clone();
        Callback::from(move |e: InputEvent| {
            if let Some((id, form)) = (*editing).clone() {
                editing.set(Some((id, UserForm { password: input_value(&e), ..form })));
            }
        })
    };

    let on_save = {
        let editing = editing.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let refresh = refresh.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some((id, form)) = (*editing).clone() else {
                return;
            };
            let payload = match form.validate() {
                Ok(payload) => payload,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };

            is_submitting.set(true);
            error_message.set(None);

            let editing = editing.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let refresh = refresh.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.update::<User, UserPayload>(id, &payload).await {
                    Ok(_) => {
                        editing.set(None);
                        refresh.emit(());
                    }
                    Err(e) => {
                        error!("failed to update user {}: {}", id, e);
                        error_message.set(Some(format!("Failed to update user: {}", e)));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let cards = state
        .items
        .iter()
        .filter_map(|user| user.user_id.map(|id| (id, user)))
        .map(|(id, user)| {
            if let Some((editing_id, form)) = &*editing {
                if *editing_id == id {
                    return html! {
                        <form class="card editing" key={id} onsubmit={on_save.clone()}>
                            <input placeholder="Username" value={form.username.clone()} oninput={on_username.clone()} />
                            <input
                                type="password"
                                placeholder="New password (leave empty to keep)"
                                value={form.password.clone()}
                                oninput={on_password.clone()}
                            />
                            <div class="actions">
                                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>{"Save"}</button>
                                <button type="button" class="btn" onclick={on_cancel_edit.clone()}>{"Cancel"}</button>
                            </div>
                        </form>
                    };
                }
            }

            let on_edit = {
                let editing = editing.clone();
                let form = UserForm::from_user(user);
                Callback::from(move |_: MouseEvent| editing.set(Some((id, form.clone()))))
            };
            let on_delete = {
                let error_message = error_message.clone();
                let refresh = refresh.clone();
                Callback::from(move |_: MouseEvent| {
                    delete_record::<User>(Some(id), error_message.clone(), refresh.clone())
                })
            };

            html! {
                <div class="card" key={id}>
                    <h3>{user.username.clone()}</h3>
                    <p class="muted">{format!("User #{}", id)}</p>
                    <div class="actions">
                        <button class="btn" onclick={on_edit}>{"Edit"}</button>
                        <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section class="admin">
            <h2>{"Users"}</h2>
            <ErrorBanner message={banner_message(&error_message, &[&state.error])} />
            <DroppedNotice dropped={state.dropped} collection="users" />

            if state.loading {
                <Spinner />
            } else if state.items.is_empty() {
                <p class="empty">{"No users yet"}</p>
            } else {
                <div class="card-grid">{cards}</div>
            }
        </section>
    }
}
