use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_liveness;
use crate::models::{LoginRequest, SubmissionOutcome};
use crate::services::AuthApi;
use crate::stores::{SessionStore, SessionTokens};

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    /// Invoked exactly once per successful login, after the tokens are persisted.
    pub on_success: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let outcome = use_state(|| None::<SubmissionOutcome>);
    let alive = use_liveness();

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let outcome = outcome.clone();
        let alive = alive.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *loading {
                return;
            }

            loading.set(true);
            outcome.set(None);

            let payload = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };

            let loading = loading.clone();
            let outcome = outcome.clone();
            let alive = alive.clone();
            let on_success = on_success.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = AuthApi::default().login(&payload).await;

                if !alive.get() {
                    return;
                }

                match result {
                    Ok(response) => {
                        let saved = SessionStore::new().save(&SessionTokens {
                            access: response.access,
                            refresh: response.refresh,
                        });

                        match saved {
                            Ok(()) => {
                                log::info!("✅ Login successful");
                                outcome.set(Some(SubmissionOutcome::Success(
                                    "Login successful!".to_string(),
                                )));
                                on_success.emit(());
                            }
                            Err(e) => {
                                log::error!("❌ Failed to persist session: {}", e);
                                outcome.set(Some(SubmissionOutcome::Failure(format!(
                                    "Login failed: {e}"
                                ))));
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        outcome.set(Some(SubmissionOutcome::Failure(format!(
                            "Login failed: {e}"
                        ))));
                    }
                }

                loading.set(false);
            });
        })
    };

    html! {
        <form class="login-form" onsubmit={on_submit}>
            <div class="login-header">
                <h2 class="login-title">{"Welcome Back !"}</h2>
                <p class="login-subtitle">
                    {"Log in to your account to connect with professionals and explore opportunities"}
                </p>
            </div>

            <div class="login-input-group">
                <input
                    type="email"
                    name="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email_change}
                    required=true
                    class="login-input"
                />
            </div>

            <div class="login-input-group password">
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password_change}
                    required=true
                    class="login-input"
                />
            </div>

            <button type="submit" disabled={*loading} class="login-button">
                {if *loading { "Logging in..." } else { "Login" }}
            </button>

            <div class="social-divider">{"Or Continue With"}</div>

            // Social providers are display-only affordances
            <div class="social-buttons">
                <button type="button" class="social-button google">{"G"}</button>
                <button type="button" class="social-button facebook">{"f"}</button>
                <button type="button" class="social-button linkedin">{"in"}</button>
            </div>

            if let Some(outcome) = outcome.as_ref() {
                <div class={classes!("login-message", outcome.css_class())}>
                    {outcome.display()}
                </div>
            }
        </form>
    }
}
