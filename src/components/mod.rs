pub mod auth_page;
pub mod login_form;
pub mod signup_form;

pub use auth_page::AuthPage;
pub use login_form::LoginForm;
pub use signup_form::SignupForm;
