//! Auth Panel Component
//!
//! Login and register forms behind two tabs.

use leptos::prelude::*;
use wish_client::{LoginForm, RegisterForm};

use crate::context::use_app_context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Register,
}

impl AuthTab {
    fn button_class(self, active: AuthTab) -> &'static str {
        if self == active { "tab-btn active" } else { "tab-btn" }
    }

    fn content_class(self, active: AuthTab) -> &'static str {
        if self == active { "tab-content active" } else { "tab-content" }
    }
}

#[component]
pub fn AuthPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (active_tab, set_active_tab) = signal(AuthTab::Login);

    // The tab comes from the clicked button, not from an ambient event
    let switch_tab = move |tab: AuthTab| set_active_tab.set(tab);

    let (login_username, set_login_username) = signal(String::new());
    let (login_password, set_login_password) = signal(String::new());

    let (reg_username, set_reg_username) = signal(String::new());
    let (reg_email, set_reg_email) = signal(String::new());
    let (reg_password, set_reg_password) = signal(String::new());
    let (reg_confirm, set_reg_confirm) = signal(String::new());

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            username: login_username.get_untracked(),
            password: login_password.get_untracked(),
        };
        ctx.spawn(move |controller| async move { controller.login(&form).await });
    };

    let on_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm {
            username: reg_username.get_untracked(),
            email: reg_email.get_untracked(),
            password: reg_password.get_untracked(),
            confirm_password: reg_confirm.get_untracked(),
        };
        ctx.spawn(move |controller| async move { controller.register(&form).await });
    };

    view! {
        <div class="auth-container">
            <div class="tabs">
                <button
                    type="button"
                    class=move || AuthTab::Login.button_class(active_tab.get())
                    on:click=move |_| switch_tab(AuthTab::Login)
                >
                    "Login"
                </button>
                <button
                    type="button"
                    class=move || AuthTab::Register.button_class(active_tab.get())
                    on:click=move |_| switch_tab(AuthTab::Register)
                >
                    "Register"
                </button>
            </div>

            <form class=move || AuthTab::Login.content_class(active_tab.get()) on:submit=on_login>
                <input
                    type="text"
                    placeholder="Username"
                    class="input-field"
                    prop:value=login_username
                    on:input=move |ev| set_login_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    class="input-field"
                    prop:value=login_password
                    on:input=move |ev| set_login_password.set(event_target_value(&ev))
                />
                <button type="submit" class="submit-btn">"Login"</button>
            </form>

            <form class=move || AuthTab::Register.content_class(active_tab.get()) on:submit=on_register>
                <input
                    type="text"
                    placeholder="Username"
                    class="input-field"
                    prop:value=reg_username
                    on:input=move |ev| set_reg_username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    class="input-field"
                    prop:value=reg_email
                    on:input=move |ev| set_reg_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    class="input-field"
                    prop:value=reg_password
                    on:input=move |ev| set_reg_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm Password"
                    class="input-field"
                    prop:value=reg_confirm
                    on:input=move |ev| set_reg_confirm.set(event_target_value(&ev))
                />
                <button type="submit" class="submit-btn">"Register"</button>
            </form>
        </div>
    }
}
