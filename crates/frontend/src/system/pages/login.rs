use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::context::{use_auth, AuthContext};
use crate::system::auth::{api, storage};

/// Trimmed username and raw password, or the message shown under the form
fn credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Enter your username");
    }
    if password.is_empty() {
        return Err("Enter your password");
    }
    Ok((username.to_string(), password.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let sign_in = move || {
        let (user, pass) = match credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(pair) => pair,
            Err(msg) => {
                set_error_message.set(Some(msg.to_string()));
                return;
            }
        };
        let base_url = auth.with_untracked(|a| a.base_url.clone());

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(base_url.clone(), user, pass).await {
                Ok(response) => {
                    storage::save_session(&response.token, &response.user);
                    log::info!("signed in as {}", response.user.username);
                    // AppRoutes switches to the main layout on this update
                    auth.set(AuthContext::authenticated(base_url, response.token, response.user));
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    password.set(String::new());
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <form
                class="login-box"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    sign_in();
                }
            >
                <h1>"Translation Workflow"</h1>
                <h2>"Sign in"</h2>

                {move || error_message.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

                <Flex vertical=true gap=FlexGap::Medium>
                    <Input
                        value=username
                        placeholder="Username"
                        disabled=Signal::derive(move || is_loading.get())
                    />
                    <Input
                        value=password
                        input_type=InputType::Password
                        placeholder="Password"
                        disabled=Signal::derive(move || is_loading.get())
                    />
                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </Flex>
            </form>
        </div>
    }
}
