use crate::pages::auth::utils::{AuthMode, LoginFormState};
use leptos::{ev::SubmitEvent, *};

pub(super) const INPUT_CLASS: &str = "block w-[84%] mx-auto my-2 px-3 py-2 bg-white/10 border-b-2 border-b-[#E12836] text-white placeholder-gray-400 focus:outline-none";
pub(super) const SUBMIT_CLASS: &str = "block w-[84%] mx-auto my-3 py-2 bg-[#E12836] text-white disabled:opacity-50 disabled:cursor-not-allowed";

#[component]
pub fn LoginForm(
    form: LoginFormState,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="w-full" on:submit=move |ev| on_submit.call(ev)>
            <input
                type="text"
                name="user"
                class=INPUT_CLASS
                placeholder="Usuario"
                prop:value=move || form.user.get()
                on:input=move |ev| form.user.set(event_target_value(&ev))
            />
            <input
                type="password"
                name="password"
                class=INPUT_CLASS
                placeholder="Contraseña"
                prop:value=move || form.password.get()
                on:input=move |ev| form.password.set(event_target_value(&ev))
            />
            <button type="submit" class=SUBMIT_CLASS disabled=move || pending.get()>
                {move || AuthMode::Login.submit_label(pending.get())}
            </button>
        </form>
    }
}
