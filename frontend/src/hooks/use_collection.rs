use log::error;
use shared::Resource;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct CollectionState<R> {
    pub items: Vec<R>,
    /// Records hidden because their id was missing or not positive
    pub dropped: usize,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseCollectionResult<R> {
    pub state: CollectionState<R>,
    pub refresh: Callback<()>,
}

/// Fetch a collection on mount; `refresh` refetches after a mutation
#[hook]
pub fn use_collection<R: Resource + Clone + 'static>(api_client: &ApiClient) -> UseCollectionResult<R> {
    let items = use_state(Vec::<R>::new);
    let dropped = use_state(|| 0usize);
    let loading = use_state(|| true);
    let load_error = use_state(|| Option::<String>::None);

    let refresh = {
        let api_client = api_client.clone();
        let items = items.clone();
        let dropped = dropped.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let items = items.clone();
            let dropped = dropped.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();

            spawn_local(async move {
                loading.set(true);
                load_error.set(None);

                match api_client.list::<R>().await {
                    Ok(valid) => {
                        dropped.set(valid.dropped);
                        items.set(valid.records);
                    }
                    Err(e) => {
                        error!("failed to load {}: {}", R::COLLECTION, e);
                        load_error.set(Some(format!("Failed to load {}: {}", R::COLLECTION, e)));
                    }
                }

                loading.set(false);
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = CollectionState {
        items: (*items).clone(),
        dropped: *dropped,
        loading: *loading,
        error: (*load_error).clone(),
    };

    UseCollectionResult { state, refresh }
}
