use crate::{
    components::{
        cards::{ToolListCard, UserInfoCard},
        common::LogoutButton,
        layout::Layout,
    },
    state::session::{use_current_user, use_logout},
};
use leptos::*;

pub const COACH_TOOLS: &[&str] = &[
    "Gestión de plantilla",
    "Planificación de entrenamientos",
    "Resultados de pruebas de reacción",
    "Convocatorias",
];

#[component]
pub fn CoachPage() -> impl IntoView {
    let user = use_current_user();
    let on_logout = use_logout();

    move || {
        user.and_then(|u| u.get()).map(|user| {
            let heading = format!(
                "Panel de Entrenador - Bienvenido, {} {}",
                user.nombre, user.apellido
            );
            view! {
                <Layout>
                    <div class="bg-white rounded-lg shadow-md p-6">
                        <h1 class="text-2xl font-bold mb-4">{heading}</h1>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
                            <UserInfoCard user=user title="Información del entrenador"/>
                            <ToolListCard title="Herramientas de entrenamiento" items=COACH_TOOLS/>
                        </div>
                        <LogoutButton on_logout=on_logout/>
                    </div>
                </Layout>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::coach;
    use crate::test_support::ssr::render_as;

    #[test]
    fn coach_panel_shows_heading_and_tools() {
        let html = render_as(coach(), || view! { <CoachPage /> });
        assert!(html.contains("Panel de Entrenador"));
        assert!(html.contains("Entrenador"));
        assert!(html.contains(COACH_TOOLS[0]));
    }
}
