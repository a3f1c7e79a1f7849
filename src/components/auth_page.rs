use yew::prelude::*;

use super::{LoginForm, SignupForm};

/// Which credential form is on screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthView {
    Login,
    Signup,
}

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let view = use_state(|| AuthView::Signup);

    let show_login = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(AuthView::Login))
    };

    let show_signup = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(AuthView::Signup))
    };

    let on_login_success = Callback::from(|_| {
        log::info!("✅ Authenticated, session tokens stored");
    });

    // Registration does not authenticate; it hands the user to the login form
    let on_switch_to_login = {
        let view = view.clone();
        Callback::from(move |_| view.set(AuthView::Login))
    };

    let tab_class =
        |active: bool| classes!("auth-tab", if active { "active" } else { "inactive" });

    html! {
        <div class="auth-page">
            <div class="auth-container">
                <div class="auth-form-section">
                    <div class="auth-logo">
                        <h1>{"Job Portal"}</h1>
                    </div>

                    <div class="auth-tabs">
                        <button onclick={show_login} class={tab_class(*view == AuthView::Login)}>
                            {"Login"}
                        </button>
                        <button onclick={show_signup} class={tab_class(*view == AuthView::Signup)}>
                            {"Sign Up"}
                        </button>
                    </div>

                    {match *view {
                        AuthView::Login => html! { <LoginForm on_success={on_login_success} /> },
                        AuthView::Signup => html! { <SignupForm on_switch_to_login={on_switch_to_login} /> },
                    }}
                </div>
            </div>
        </div>
    }
}
