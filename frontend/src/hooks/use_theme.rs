use log::warn;
use shared::Theme;
use yew::prelude::*;

use crate::services::storage::browser_session;

fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            warn!("failed to apply theme: {:?}", e);
        }
    }
}

pub struct UseThemeResult {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Light/dark flag persisted under `theme` and mirrored on `<html data-theme>`
#[hook]
pub fn use_theme() -> UseThemeResult {
    let theme = use_state(|| browser_session().theme());

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let toggle = {
        let handle = theme.clone();
        use_callback(*theme, move |_, current: &Theme| {
            let next = current.toggled();
            browser_session().set_theme(next);
            handle.set(next);
        })
    };

    UseThemeResult {
        theme: *theme,
        toggle,
    }
}
