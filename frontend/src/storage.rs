//! Session persistence in `localStorage`.

use common::session::{Session, TOKEN_KEY, USER_KEY};
use gloo_console::warn;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_session() -> Session {
    let Some(storage) = local_storage() else {
        return Session::anonymous();
    };
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user = storage.get_item(USER_KEY).ok().flatten();
    Session::restore(token, user.as_deref())
}

pub fn save_session(session: &Session) {
    let Some(storage) = local_storage() else {
        warn!("localStorage unavailable, session will not survive a reload");
        return;
    };
    match &session.token {
        Some(token) => storage.set_item(TOKEN_KEY, token).ok(),
        None => storage.remove_item(TOKEN_KEY).ok(),
    };
    match session.user_json() {
        Some(user) => storage.set_item(USER_KEY, &user).ok(),
        None => storage.remove_item(USER_KEY).ok(),
    };
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        storage.remove_item(TOKEN_KEY).ok();
        storage.remove_item(USER_KEY).ok();
    }
}
