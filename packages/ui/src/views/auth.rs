use dioxus::prelude::*;
use store::UserType;

use crate::auth::{portal, redirect_for, sign_in, sign_up, validate, AuthFlow, AuthForm, AuthMode};
use crate::auth::{MSG_LOGIN_SUCCESS, MSG_SIGNUP_SUCCESS};
use crate::browser::{navigate, query_param, replace_query_param, sleep_ms};
use crate::config::app_config;
use crate::icons::{AppIcon, IconKind};
use crate::notify::{use_notifier, NotificationHost};
use crate::platform::make_client;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Sign-in / sign-up page for the three portals.
#[component]
pub fn AuthView() -> Element {
    rsx! {
        NotificationHost { AuthPage {} }
    }
}

#[component]
fn AuthPage() -> Element {
    let mut flow = use_signal(|| {
        AuthFlow::from_query(
            query_param("type").as_deref(),
            query_param("mode").as_deref(),
        )
    });
    let mut form = use_signal(AuthForm::default);
    let mut loading = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);
    let notifier = use_notifier();

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let current = flow();
        let values = form();
        if let Err(message) = validate(&values, current.mode) {
            notifier.error(message);
            return;
        }

        loading.set(true);
        spawn(async move {
            let client = make_client();
            let delays = &app_config().delays;
            match current.mode {
                AuthMode::Login => match sign_in(&client, current.user_type, &values).await {
                    Ok(user) => {
                        loading.set(false);
                        notifier.success(MSG_LOGIN_SUCCESS);
                        sleep_ms(delays.login_redirect_ms).await;
                        navigate(redirect_for(user.user_type));
                    }
                    Err(message) => {
                        loading.set(false);
                        notifier.error(message);
                    }
                },
                AuthMode::Signup => match sign_up(&client, current.user_type, &values).await {
                    Ok(()) => {
                        loading.set(false);
                        notifier.success(MSG_SIGNUP_SUCCESS);
                        sleep_ms(delays.signup_switch_ms).await;
                        flow.write().mode = AuthMode::Login;
                    }
                    Err(message) => {
                        loading.set(false);
                        notifier.error(message);
                    }
                },
            }
        });
    };

    let state = flow();
    let info = portal(state.user_type);
    let signup = state.mode.is_signup();
    let password_type = if show_password() { "text" } else { "password" };
    let confirm_type = if show_confirm() { "text" } else { "password" };
    let eye = |visible: bool| if visible { IconKind::EyeSlash } else { IconKind::Eye };
    let password_eye = eye(show_password());
    let confirm_eye = eye(show_confirm());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            div {
                class: "auth-card",

                div {
                    class: "auth-header",
                    div {
                        class: "user-type-icon",
                        style: "background: {info.gradient}",
                        AppIcon { kind: info.icon, size: 28 }
                    }
                    if state.user_type == UserType::Admin {
                        span { class: "admin-badge", "Admin Access" }
                    }
                    h1 { class: "auth-title", "{info.title}" }
                    p { class: "auth-description", "{info.description}" }
                }

                if state.shows_type_tabs() {
                    div {
                        class: "user-type-tabs",
                        for (user_type, label) in [
                            (UserType::Student, "Student"),
                            (UserType::Owner, "PG Owner"),
                        ] {
                            button {
                                key: "{user_type}",
                                r#type: "button",
                                class: if state.user_type == user_type {
                                    "tab-btn active"
                                } else {
                                    "tab-btn"
                                },
                                onclick: move |_| {
                                    flow.write().user_type = user_type;
                                    replace_query_param("type", user_type.as_str());
                                },
                                "{label}"
                            }
                        }
                    }
                } else {
                    p {
                        class: "admin-note",
                        "Admin accounts are issued by the EasyPG team. "
                        "Contact support if you need access."
                    }
                }

                div {
                    class: "auth-toggle",
                    button {
                        r#type: "button",
                        class: if signup { "toggle-btn" } else { "toggle-btn active" },
                        onclick: move |_| flow.write().mode = AuthMode::Login,
                        "Sign In"
                    }
                    button {
                        r#type: "button",
                        class: if signup { "toggle-btn active" } else { "toggle-btn" },
                        onclick: move |_| flow.write().mode = AuthMode::Signup,
                        "Sign Up"
                    }
                }

                form {
                    class: "auth-form",
                    onsubmit: onsubmit,

                    if signup {
                        div {
                            class: "form-group",
                            label { r#for: "fullName", "Full Name" }
                            input {
                                id: "fullName",
                                r#type: "text",
                                required: true,
                                value: "{form.read().full_name}",
                                oninput: move |e: FormEvent| form.write().full_name = e.value(),
                            }
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "email", "Email Address" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            value: "{form.read().email}",
                            oninput: move |e: FormEvent| form.write().email = e.value(),
                        }
                    }

                    if signup {
                        div {
                            class: "form-group",
                            label { r#for: "phone", "Phone Number" }
                            input {
                                id: "phone",
                                r#type: "tel",
                                required: true,
                                value: "{form.read().phone}",
                                oninput: move |e: FormEvent| form.write().phone = e.value(),
                            }
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "password", "Password" }
                        div {
                            class: "password-field",
                            input {
                                id: "password",
                                r#type: password_type,
                                required: true,
                                value: "{form.read().password}",
                                oninput: move |e: FormEvent| form.write().password = e.value(),
                            }
                            button {
                                r#type: "button",
                                class: "password-toggle",
                                onclick: move |_| show_password.set(!show_password()),
                                AppIcon { kind: password_eye }
                            }
                        }
                    }

                    if signup {
                        div {
                            class: "form-group",
                            label { r#for: "confirmPassword", "Confirm Password" }
                            div {
                                class: "password-field",
                                input {
                                    id: "confirmPassword",
                                    r#type: confirm_type,
                                    required: true,
                                    value: "{form.read().confirm_password}",
                                    oninput: move |e: FormEvent| {
                                        form.write().confirm_password = e.value()
                                    },
                                }
                                button {
                                    r#type: "button",
                                    class: "password-toggle",
                                    onclick: move |_| show_confirm.set(!show_confirm()),
                                    AppIcon { kind: confirm_eye }
                                }
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-full",
                        disabled: loading(),
                        if loading() {
                            AppIcon { kind: IconKind::Spinner, class: "spin" }
                        } else {
                            "{state.mode.submit_label()}"
                        }
                    }
                }

                p {
                    class: "auth-footer",
                    a { href: "/", "Back to home" }
                }
            }
        }
    }
}
