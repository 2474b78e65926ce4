use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-[#E12836] hover:bg-[#c21f2c] text-white",
            ButtonVariant::Secondary => "bg-gray-200 hover:bg-gray-300 text-gray-800",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center px-4 py-2 rounded transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get()
            {..attributes}
        >
            {children()}
        </button>
    }
}

/// Logout button shared by the dashboards.
#[component]
pub fn LogoutButton(on_logout: Callback<()>) -> impl IntoView {
    view! {
        <Button
            class="mt-2"
            on:click=move |_| on_logout.call(())
        >
            "Cerrar sesión"
        </Button>
    }
}
