use contracts::system::auth::UserInfo;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const USER_INFO_KEY: &str = "auth_user_info";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save token and user info to localStorage
pub fn save_session(token: &str, user: &UserInfo) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_INFO_KEY, &json);
        }
        Err(e) => log::error!("failed to store user info: {}", e),
    }
}

/// Restore token and user info saved by [`save_session`]
pub fn load_session() -> Option<(String, UserInfo)> {
    let storage = get_local_storage()?;
    let token = storage
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())?;
    let user_json = storage.get_item(USER_INFO_KEY).ok()??;
    match serde_json::from_str::<UserInfo>(&user_json) {
        Ok(user) => Some((token, user)),
        Err(e) => {
            log::warn!("stored user info is unreadable, signing out: {}", e);
            clear_session();
            None
        }
    }
}

/// Clear all authentication data
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_INFO_KEY);
    }
}
