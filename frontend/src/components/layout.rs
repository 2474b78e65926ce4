use crate::{
    api::{ApiError, Role},
    router::{role_redirect, HOME_PATH, LOGIN_PATH, PROFILE_PATH, REACTION_TEST_PATH},
    state::session::{lookup_role, use_api_client, use_current_user, use_logout, use_session_store},
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Link(&'static str),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Inicio",
        target: NavTarget::Link(HOME_PATH),
    },
    NavItem {
        label: "Perfil",
        target: NavTarget::Link(PROFILE_PATH),
    },
    NavItem {
        label: "Pruebas",
        target: NavTarget::Link(REACTION_TEST_PATH),
    },
    NavItem {
        label: "Salir",
        target: NavTarget::Logout,
    },
];

/// First destination whose path occurs anywhere in `path`; the first entry
/// otherwise.
pub fn active_nav_index(path: &str) -> usize {
    NAV_ITEMS
        .iter()
        .position(|item| match item.target {
            NavTarget::Link(href) => path.contains(href),
            NavTarget::Logout => false,
        })
        .unwrap_or(0)
}

/// Role of the viewer as seen by the navbar: the page guard's user when there
/// is one, otherwise a lookup of its own.
fn use_viewer_role() -> Signal<Option<Role>> {
    if let Some(user) = use_current_user() {
        return Signal::derive(move || user.get().map(|u| u.rol));
    }
    let store = use_session_store();
    let api = use_api_client();
    let lookup = create_local_resource(
        || (),
        move |_| {
            let store = store.clone();
            let api = api.clone();
            async move { lookup_role(&*store, &api).await }
        },
    );
    Signal::derive(move || lookup.get().flatten())
}

#[component]
pub fn Navbar() -> impl IntoView {
    let path = navigation::current_path();
    let (active, set_active) = create_signal(active_nav_index(&path));
    let (menu_open, set_menu_open) = create_signal(false);
    let on_logout = use_logout();

    let role = use_viewer_role();
    create_effect(move |_| {
        if let Some(role) = role.get() {
            if let Some(target) = role_redirect(&role, &path) {
                log::info!("Rol {} fuera de su panel, redirigiendo a {}", role, target);
                navigation::navigate_to(target);
            }
        }
    });

    let toggle_menu = move |_: ev::MouseEvent| set_menu_open.update(|open| *open = !*open);

    let items = move || {
        NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let href = match item.target {
                    NavTarget::Link(href) => href,
                    NavTarget::Logout => "#",
                };
                let target = item.target;
                view! {
                    <li class=move || {
                        if active.get() == index { "list-none active" } else { "list-none" }
                    }>
                        <a
                            href=href
                            class=move || {
                                if active.get() == index {
                                    "block py-5 px-5 text-base text-white"
                                } else {
                                    "block py-5 px-5 text-base text-white/50 hover:text-white"
                                }
                            }
                            on:click=move |ev| {
                                if target == NavTarget::Logout {
                                    ev.prevent_default();
                                    on_logout.call(());
                                }
                                set_active.set(index);
                                set_menu_open.set(false);
                            }
                        >
                            {item.label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="bg-[#E12836] px-4 py-0 relative">
            <div class="flex justify-between items-center">
                <a href=HOME_PATH class="text-white py-4 font-bold text-xl">
                    "ReactVolt"
                </a>
                <button
                    type="button"
                    class="lg:hidden text-white p-2"
                    on:click=toggle_menu
                    aria-label="Alternar navegación"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    <svg
                        class="h-6 w-6"
                        xmlns="http://www.w3.org/2000/svg"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M4 6h16M4 12h16M4 18h16"
                        />
                    </svg>
                </button>
                <div class=move || {
                    if menu_open.get() {
                        "block lg:flex lg:items-center w-full lg:w-auto"
                    } else {
                        "hidden lg:flex lg:items-center w-full lg:w-auto"
                    }
                }>
                    <ul class="lg:flex flex-col lg:flex-row relative p-0 m-0">{items}</ul>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100">
            <Navbar/>
            <main class="container mx-auto p-4 mt-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col gap-4 items-center justify-center bg-gray-100">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-[#E12836]"></div>
            <p class="text-xl">"Cargando..."</p>
        </div>
    }
}

/// Page-level failure with the single way out: back to the login page.
#[component]
pub fn SessionErrorBanner(error: ApiError) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <div class="bg-white p-8 rounded shadow-md">
                <p class="text-red-500 mb-4">{error.error}</p>
                <button
                    type="button"
                    class="px-4 py-2 bg-[#E12836] text-white rounded"
                    on:click=move |_| navigation::navigate_to(LOGIN_PATH)
                >
                    "Volver al inicio"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_index_uses_substring_match() {
        assert_eq!(active_nav_index("/inicio"), 0);
        assert_eq!(active_nav_index("/profile"), 1);
        assert_eq!(active_nav_index("/es/profile/editar"), 1);
        assert_eq!(active_nav_index("/prueba-reaccion"), 2);
    }

    #[test]
    fn active_index_defaults_to_first_entry() {
        assert_eq!(active_nav_index("/"), 0);
        assert_eq!(active_nav_index("/tecnico"), 0);
        assert_eq!(active_nav_index("#"), 0);
    }

    #[test]
    fn logout_is_the_last_destination() {
        assert_eq!(NAV_ITEMS.last().map(|i| i.target), Some(NavTarget::Logout));
    }
}
