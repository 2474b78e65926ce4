use super::login_form::{INPUT_CLASS, SUBMIT_CLASS};
use crate::{
    api::Role,
    pages::auth::utils::{AuthMode, RegisterFormState},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterForm(
    form: RegisterFormState,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
    on_back: Callback<()>,
) -> impl IntoView {
    let text_input = move |kind: &'static str, name: &'static str, placeholder: &'static str, field: RwSignal<String>| {
        view! {
            <input
                type=kind
                name=name
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || field.get()
                on:input=move |ev| field.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <form class="w-full" on:submit=move |ev| on_submit.call(ev)>
            <div class="w-[84%] mx-auto my-2">
                <label class="block text-white text-sm mb-1">"Selecciona tu rol"</label>
                <select
                    name="rol"
                    class="w-full px-3 py-2 bg-white/10 text-white"
                    on:change=move |ev| form.rol.set(Role::from(event_target_value(&ev).as_str()))
                >
                    {Role::selectable()
                        .into_iter()
                        .map(|role| {
                            let value = role.as_str().to_string();
                            let label = role.label().to_string();
                            view! {
                                <option
                                    value=value
                                    class="bg-gray-800"
                                    selected={move || form.rol.get() == role}
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            {text_input("text", "nombre", "Nombre", form.nombre)}
            {text_input("text", "apellido", "Apellido", form.apellido)}
            {text_input("text", "user", "Usuario", form.user)}
            {text_input("password", "contrasena", "Contraseña", form.contrasena)}
            {text_input("email", "correo", "Correo electrónico", form.correo)}
            <Show when=move || form.is_athlete() fallback=|| ()>
                <input
                    type="number"
                    step="0.01"
                    name="altura"
                    class=INPUT_CLASS
                    placeholder="Altura (metros)"
                    prop:value=move || form.altura.get()
                    on:input=move |ev| form.altura.set(event_target_value(&ev))
                />
                {text_input("text", "posicion", "Posición", form.posicion)}
                {text_input("date", "fecha_nacimiento", "Fecha de nacimiento", form.fecha_nacimiento)}
            </Show>
            <button type="submit" class=SUBMIT_CLASS disabled=move || pending.get()>
                {move || AuthMode::Register.submit_label(pending.get())}
            </button>
            <div
                class="w-[84%] mx-auto my-3 text-center cursor-pointer"
                on:click=move |_| on_back.call(())
            >
                <p class="text-gray-300 text-sm">"Volver al inicio de sesión"</p>
            </div>
        </form>
    }
}
