use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::shared::ValidationErrors;

use crate::shared::i18n::{use_i18n, LanguageSwitch};
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::{do_login, use_auth};

fn validate(email: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require_text("email", email);
    errors.require_email("email", &Some(email.to_string()));
    errors.require_text("password", password);
    errors.into_result()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let i18n = use_i18n();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (field_errors, set_field_errors) = signal(ValidationErrors::new());
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        if let Err(errors) = validate(&email_val, &password_val) {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(ValidationErrors::new());
        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            if let Err(e) = do_login(set_auth_state, email_val, password_val).await {
                log::warn!("login failed: {e}");
                set_error_message.set(Some(e.to_string()));
            }
            set_is_loading.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            field_errors
                .with(|e| e.get(field))
                .map(|key| view! { <div class="form__error">{i18n.t(key)}</div> })
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__toolbar">
                    <LanguageSwitch />
                    <ThemeToggle />
                </div>
                <h1>{move || i18n.t("app.title")}</h1>
                <h2>{move || i18n.t("auth.sign_in")}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate>
                    <div class="form__group">
                        <label class="form__label" for="email">{move || i18n.t("auth.email")}</label>
                        <input
                            type="email"
                            id="email"
                            class="form__input"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error("email")}
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">{move || i18n.t("auth.password")}</label>
                        <input
                            type="password"
                            id="password"
                            class="form__input"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error("password")}
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { i18n.t("auth.signing_in") } else { i18n.t("auth.sign_in") }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::{MSG_INVALID_EMAIL, MSG_REQUIRED};

    #[test]
    fn login_form_requires_both_fields() {
        let errors = validate("", "").unwrap_err();
        assert_eq!(errors.get("email"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("password"), Some(MSG_REQUIRED));
    }

    #[test]
    fn login_form_checks_email_shape() {
        let errors = validate("clerk", "secret").unwrap_err();
        assert_eq!(errors.get("email"), Some(MSG_INVALID_EMAIL));
        assert!(validate("clerk@store.example", "secret").is_ok());
    }
}
