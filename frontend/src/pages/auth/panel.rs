use crate::{
    components::error::InlineErrorMessage,
    pages::auth::{
        components::{login_form::LoginForm, register_form::RegisterForm},
        utils::AuthMode,
        view_model::use_auth_view_model,
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AuthPanel() -> impl IntoView {
    let vm = use_auth_view_model();
    let pending = vm.pending();
    let mode = vm.mode;

    let on_login = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_login();
    });
    let on_register = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_register();
    });
    let on_back = Callback::new(move |_: ()| vm.toggle_mode());

    view! {
        <div class="min-h-screen flex items-center justify-center bg-cover bg-center bg-no-repeat bg-gray-900">
            <div class="w-[300px] min-h-[500px] bg-black/70 overflow-hidden relative shadow-lg pb-10">
                <div class="w-full bg-black/10">
                    <h1 class="text-center py-2.5 font-light text-xl text-white/50">
                        {move || mode.get().title()}
                    </h1>
                </div>
                <div class=move || {
                    if mode.get() == AuthMode::Login {
                        "mx-auto flex items-center justify-center w-[150px] h-[150px] mt-[30px]"
                    } else {
                        "mx-auto flex items-center justify-center w-[120px] h-[120px] mt-[10px]"
                    }
                }>
                    <div class="text-white text-4xl font-bold">"ReactVolt"</div>
                </div>
                <InlineErrorMessage error={vm.error.into()}/>
                {move || match mode.get() {
                    AuthMode::Login => view! {
                        <LoginForm form={vm.login} pending=pending on_submit=on_login/>
                    }
                    .into_view(),
                    AuthMode::Register => view! {
                        <RegisterForm
                            form={vm.register}
                            pending=pending
                            on_submit=on_register
                            on_back=on_back
                        />
                    }
                    .into_view(),
                }}
                <Show when=move || mode.get() == AuthMode::Login fallback=|| ()>
                    <div class="absolute w-full h-[30px] bottom-0.5 left-0">
                        <div
                            class="w-full mx-auto bg-black/20 border-b-2 border-b-[#E12836] cursor-pointer"
                            on:click=move |_| vm.toggle_mode()
                        >
                            <p class="m-0 leading-[30px] text-center text-gray-300 text-xs font-thin">
                                "Nuevo Usuario"
                            </p>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
