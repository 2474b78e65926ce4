use crate::{
    components::{cards::UserInfoCard, common::LogoutButton, layout::Layout},
    state::session::{use_current_user, use_logout},
};
use leptos::*;

pub fn welcome_line(nombre: &str, apellido: &str) -> String {
    format!("Bienvenido, {} {}", nombre, apellido)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let user = use_current_user();
    let on_logout = use_logout();

    move || {
        user.and_then(|u| u.get()).map(|user| {
            let heading = welcome_line(&user.nombre, &user.apellido);
            view! {
                <Layout>
                    <div class="bg-white rounded-lg shadow-md p-6">
                        <h1 class="text-2xl font-bold mb-4">{heading}</h1>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
                            <UserInfoCard user=user/>
                        </div>
                        <LogoutButton on_logout=on_logout/>
                    </div>
                </Layout>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_line_joins_names() {
        assert_eq!(welcome_line("Ana", "Ruiz"), "Bienvenido, Ana Ruiz");
    }
}
