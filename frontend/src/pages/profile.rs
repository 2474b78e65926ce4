use crate::{
    components::{cards::UserInfoCard, layout::Layout},
    state::session::use_current_user,
};
use leptos::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let user = use_current_user();

    move || {
        user.and_then(|u| u.get()).map(|user| {
            let name = user.full_name();
            view! {
                <Layout>
                    <div class="bg-white rounded-lg shadow-md p-6">
                        <h1 class="text-2xl font-bold mb-4">"Perfil"</h1>
                        <p class="text-gray-600 mb-4">{name}</p>
                        <UserInfoCard user=user title="Mis datos"/>
                    </div>
                </Layout>
            }
        })
    }
}
