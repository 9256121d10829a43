use log::info;
use shared::User;
use yew::prelude::*;

use crate::services::storage::browser_session;

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub sign_in: Callback<User>,
    pub sign_out: Callback<()>,
}

pub struct UseSessionResult {
    pub user: Option<User>,
    pub actions: UseSessionActions,
}

/// Signed-in user kept in local storage
#[hook]
pub fn use_session() -> UseSessionResult {
    let user = use_state(|| browser_session().current_user());

    let sign_in = {
        let user = user.clone();
        use_callback((), move |signed_in: User, _| {
            let session = browser_session();
            session.sign_in(&signed_in);
            info!("signed in as {}", signed_in.username);
            user.set(session.current_user());
        })
    };

    let sign_out = {
        let user = user.clone();
        use_callback((), move |_, _| {
            browser_session().sign_out();
            user.set(None);
        })
    };

    UseSessionResult {
        user: (*user).clone(),
        actions: UseSessionActions { sign_in, sign_out },
    }
}
