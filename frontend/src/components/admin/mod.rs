pub mod barber_list;
pub mod location_list;
pub mod offering_list;
pub mod order_list;
pub mod user_list;

use log::{error, info};
use shared::{DeleteOutcome, Resource};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::api_client;

/// Confirm and delete one record, then refetch. Errors land in `error_message`.
pub fn delete_record<R: Resource + 'static>(
    id: Option<i64>,
    error_message: UseStateHandle<Option<String>>,
    refresh: Callback<()>,
) {
    spawn_local(async move {
        let outcome = api_client()
            .delete_confirmed::<R, _>(id, |prompt| gloo::dialogs::confirm(prompt))
            .await;
        match outcome {
            Ok(DeleteOutcome::Deleted) => {
                info!("deleted {} {:?}", R::NOUN, id);
                error_message.set(None);
                refresh.emit(());
            }
            Ok(DeleteOutcome::Cancelled) => {}
            Err(e) => {
                error!("failed to delete {} {:?}: {}", R::NOUN, id, e);
                error_message.set(Some(format!("Failed to delete {}: {}", R::NOUN, e)));
            }
        }
    });
}
