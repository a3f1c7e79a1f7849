use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_liveness;
use crate::models::{RegisterRequest, Role, SubmissionOutcome};
use crate::services::AuthApi;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Hands the user over to the login view after a successful registration.
    pub on_switch_to_login: Callback<()>,
}

/// Submission is blocked while a request is in flight or until the user has
/// accepted the terms.
fn submit_disabled(loading: bool, agreed_to_terms: bool) -> bool {
    loading || !agreed_to_terms
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(Role::default);
    let agreed_to_terms = use_state(|| false);
    let loading = use_state(|| false);
    let outcome = use_state(|| None::<SubmissionOutcome>);
    let alive = use_liveness();

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_first_name_change = text_input(&first_name);
    let on_last_name_change = text_input(&last_name);
    let on_email_change = text_input(&email);
    let on_password_change = text_input(&password);

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            role.set(Role::from_value(&select.value()));
        })
    };

    let on_terms_change = {
        let agreed_to_terms = agreed_to_terms.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            agreed_to_terms.set(input.checked());
        })
    };

    let on_submit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let role = role.clone();
        let agreed_to_terms = agreed_to_terms.clone();
        let loading = loading.clone();
        let outcome = outcome.clone();
        let alive = alive.clone();
        let on_switch_to_login = props.on_switch_to_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if submit_disabled(*loading, *agreed_to_terms) {
                return;
            }

            loading.set(true);
            outcome.set(None);

            let payload = RegisterRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                role: *role,
            };

            let loading = loading.clone();
            let outcome = outcome.clone();
            let alive = alive.clone();
            let on_switch_to_login = on_switch_to_login.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = AuthApi::default().register(&payload).await;

                if !alive.get() {
                    return;
                }

                match result {
                    Ok(_) => {
                        log::info!("✅ Registration successful");
                        outcome.set(Some(SubmissionOutcome::Success(
                            "Registration successful! Please login.".to_string(),
                        )));
                        on_switch_to_login.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        outcome.set(Some(SubmissionOutcome::Failure(format!(
                            "Registration failed: {e}"
                        ))));
                    }
                }

                loading.set(false);
            });
        })
    };

    let disabled = submit_disabled(*loading, *agreed_to_terms);

    html! {
        <form class="signup-form" onsubmit={on_submit}>
            <div class="signup-header">
                <h2 class="signup-title">{"Create an account"}</h2>
                <p class="signup-subtitle">
                    {"Build your profile, connect with peers, and discover jobs"}
                </p>
            </div>

            <div class="signup-name-row">
                <input
                    type="text"
                    name="first_name"
                    placeholder="First Name"
                    value={(*first_name).clone()}
                    oninput={on_first_name_change}
                    required=true
                    class="signup-input name"
                />
                <input
                    type="text"
                    name="last_name"
                    placeholder="Last Name"
                    value={(*last_name).clone()}
                    oninput={on_last_name_change}
                    required=true
                    class="signup-input name"
                />
            </div>

            <div class="signup-input-group">
                <input
                    type="email"
                    name="email"
                    placeholder="name@company.com"
                    value={(*email).clone()}
                    oninput={on_email_change}
                    required=true
                    class="signup-input"
                />
            </div>

            <div class="signup-input-group">
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password_change}
                    required=true
                    class="signup-input"
                />
            </div>

            <div class="signup-input-group">
                <select name="role" onchange={on_role_change} class="signup-select">
                    { for Role::ALL.iter().map(|r| html! {
                        <option value={r.as_str()} selected={*role == *r}>{r.label()}</option>
                    }) }
                </select>
            </div>

            <div class="signup-input-group terms">
                <label class="terms-label">
                    <input
                        type="checkbox"
                        checked={*agreed_to_terms}
                        onchange={on_terms_change}
                        class="terms-checkbox"
                    />
                    {"I agree to the Terms & Conditions and Privacy Policy"}
                </label>
            </div>

            <button
                type="submit"
                disabled={disabled}
                class={classes!("signup-button", if disabled { "disabled" } else { "enabled" })}
            >
                {if *loading { "Creating Account..." } else { "Create Account" }}
            </button>

            <div class="social-divider">{"Or Continue With"}</div>

            // Social providers are display-only affordances
            <div class="social-buttons">
                <button type="button" class="social-button google">{"G"}</button>
                <button type="button" class="social-button facebook">{"f"}</button>
                <button type="button" class="social-button linkedin">{"in"}</button>
            </div>

            if let Some(outcome) = outcome.as_ref() {
                <div class={classes!("signup-message", outcome.css_class())}>
                    {outcome.display()}
                </div>
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_is_blocked_without_consent_or_while_in_flight() {
        assert!(submit_disabled(false, false));
        assert!(submit_disabled(true, false));
        assert!(submit_disabled(true, true));
        assert!(!submit_disabled(false, true));
    }
}
