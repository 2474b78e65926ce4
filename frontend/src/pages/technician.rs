use crate::{
    components::{
        cards::{ToolListCard, UserInfoCard},
        common::LogoutButton,
        layout::Layout,
    },
    state::session::{use_current_user, use_logout},
};
use leptos::*;

pub const TECHNICIAN_TOOLS: &[&str] = &[
    "Mantenimiento de equipamiento",
    "Análisis de datos",
    "Soporte técnico",
    "Configuración de sistemas",
];

#[component]
pub fn TechnicianPage() -> impl IntoView {
    let user = use_current_user();
    let on_logout = use_logout();

    move || {
        user.and_then(|u| u.get()).map(|user| {
            let heading = format!("Panel Técnico - Bienvenido, {} {}", user.nombre, user.apellido);
            view! {
                <Layout>
                    <div class="bg-white rounded-lg shadow-md p-6">
                        <h1 class="text-2xl font-bold mb-4">{heading}</h1>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
                            <UserInfoCard user=user title="Información del técnico"/>
                            <ToolListCard title="Herramientas técnicas" items=TECHNICIAN_TOOLS/>
                        </div>
                        <LogoutButton on_logout=on_logout/>
                    </div>
                </Layout>
            }
        })
    }
}
