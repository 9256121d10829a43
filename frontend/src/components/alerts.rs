use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) => html! { <div class="alert alert-error">{message.clone()}</div> },
        None => html! {},
    }
}

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! { <div class="spinner">{"Loading..."}</div> }
}

/// The banner text for a screen: a failed action first, then the first
/// failed load
pub fn banner_message(action: &Option<String>, loads: &[&Option<String>]) -> Option<String> {
    action
        .iter()
        .chain(loads.iter().filter_map(|load| load.as_ref()))
        .next()
        .cloned()
}

/// Text for records hidden because of a bad id or an unreadable shape
pub fn dropped_message(dropped: usize, collection: &str) -> Option<String> {
    match dropped {
        0 => None,
        1 => Some(format!("1 record in {} was hidden because it is incomplete or has no valid id", collection)),
        n => Some(format!("{} records in {} were hidden because they are incomplete or have no valid id", n, collection)),
    }
}

#[derive(Properties, PartialEq)]
pub struct DroppedNoticeProps {
    pub dropped: usize,
    pub collection: &'static str,
}

#[function_component(DroppedNotice)]
pub fn dropped_notice(props: &DroppedNoticeProps) -> Html {
    match dropped_message(props.dropped, props.collection) {
        Some(message) => html! { <div class="alert alert-warning">{message}</div> },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_action_error_shows_over_load_errors() {
        let failed_save = Some("Select at least one day".to_string());
        let failed_load = Some("Failed to load locations: Network error: offline".to_string());

        assert_eq!(banner_message(&failed_save, &[&None, &failed_load]), failed_save);
        assert_eq!(banner_message(&None, &[&None, &failed_load]), failed_load);
        assert_eq!(banner_message(&None, &[&None]), None);
    }

    #[wasm_bindgen_test]
    fn test_dropped_message() {
        assert_eq!(dropped_message(0, "barbers"), None);
        assert_eq!(
            dropped_message(1, "barbers").as_deref(),
            Some("1 record in barbers was hidden because it is incomplete or has no valid id")
        );
        assert_eq!(
            dropped_message(3, "orders").as_deref(),
            Some("3 records in orders were hidden because they are incomplete or have no valid id")
        );
    }
}
