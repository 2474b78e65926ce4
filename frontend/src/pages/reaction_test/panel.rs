use super::game::{ReactionGame, ReactionPhase};
use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::Layout,
    },
    utils::time::{now_ms, random_unit},
};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

pub const INSTRUCTIONS: [&str; 5] = [
    "Presiona el botón \"Iniciar\" cuando estés listo.",
    "Espera a que el botón cambie de color (aparecerá en un momento aleatorio).",
    "Haz clic lo más rápido posible cuando veas el cambio.",
    "Tu tiempo de reacción se mostrará en pantalla.",
    "Puedes repetir la prueba varias veces para mejorar tu tiempo.",
];

pub fn button_style(phase: ReactionPhase) -> (&'static str, String) {
    match phase {
        ReactionPhase::Idle => ("bg-[#1E3A8A] hover:bg-[#4F85E5]", "Iniciar".into()),
        ReactionPhase::Waiting { .. } => ("bg-[#E12836]", "Espera...".into()),
        ReactionPhase::Ready { .. } => ("bg-green-500", "¡Ahora!".into()),
        ReactionPhase::Finished { reaction_ms } => {
            ("bg-[#1E3A8A] hover:bg-[#4F85E5]", format!("{} ms", reaction_ms))
        }
        ReactionPhase::TooSoon => ("bg-yellow-500", "¡Demasiado pronto!".into()),
    }
}

fn stat(value: Option<u32>) -> String {
    value
        .map(|ms| format!("{} ms", ms))
        .unwrap_or_else(|| "-".into())
}

#[component]
pub fn ReactionTestPanel() -> impl IntoView {
    let game = create_rw_signal(ReactionGame::default());

    let on_press = move |_: ev::MouseEvent| {
        let mut scheduled = None;
        game.update(|g| scheduled = g.press(now_ms(), random_unit()));
        if let Some(signal) = scheduled {
            log::debug!("Ronda {} en espera {} ms", signal.round, signal.delay_ms);
            spawn_local(async move {
                TimeoutFuture::new(signal.delay_ms).await;
                game.update(|g| {
                    g.signal_ready(signal.round, now_ms());
                });
            });
        }
    };

    let phase = move || game.with(|g| g.phase());
    let hint = move || match phase() {
        ReactionPhase::Finished { .. } | ReactionPhase::TooSoon => "Pulsa para repetir",
        _ => "",
    };

    view! {
        <div class="bg-white rounded-lg shadow-md p-6 text-center">
            <h1 class="text-4xl font-bold mb-12 text-[#1E3A8A]">"Prueba de Reacción"</h1>
            <div class="flex justify-center mb-8">
                <p class="text-lg text-gray-700 max-w-2xl">
                    "Esta prueba mide tu tiempo de reacción. Cuando estés listo, presiona el botón de inicio y espera a que cambie de color. Reacciona lo más rápido posible cuando veas el cambio."
                </p>
            </div>
            <div class="flex flex-col justify-center items-center my-12 gap-2">
                <button
                    type="button"
                    class=move || {
                        format!(
                            "w-48 h-48 rounded-full flex items-center justify-center text-white font-bold text-xl shadow-lg transition-all duration-300 {}",
                            button_style(phase()).0,
                        )
                    }
                    on:mousedown=on_press
                    aria-label="Iniciar prueba de reacción"
                >
                    {move || button_style(phase()).1}
                </button>
                <p class="text-sm text-gray-500">{hint}</p>
            </div>
            <div class="grid grid-cols-3 gap-4 max-w-xl mx-auto">
                <div>
                    <p class="text-sm text-gray-500">"Último"</p>
                    <p class="text-xl font-semibold">{move || game.with(|g| stat(g.last_ms()))}</p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">"Mejor"</p>
                    <p class="text-xl font-semibold">{move || game.with(|g| stat(g.best_ms()))}</p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">"Promedio"</p>
                    <p class="text-xl font-semibold">{move || game.with(|g| stat(g.average_ms()))}</p>
                </div>
            </div>
            <p class="mt-2 text-sm text-gray-500">
                {move || format!("Intentos: {}", game.with(|g| g.attempts().len()))}
            </p>
            <Button variant=ButtonVariant::Secondary class="mt-4" on:click=move |_| game.update(ReactionGame::reset)
            >
                "Reiniciar"
            </Button>
            <div class="mt-8 text-gray-600">
                <h2 class="text-xl font-semibold mb-4 text-[#1E3A8A]">"Instrucciones:"</h2>
                <ol class="text-left max-w-2xl mx-auto space-y-2">
                    {INSTRUCTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, line)| view! { <li>{format!("{}. {}", i + 1, line)}</li> })
                        .collect_view()}
                </ol>
            </div>
        </div>
    }
}

#[component]
pub fn ReactionTestPage() -> impl IntoView {
    view! {
        <Layout>
            <ReactionTestPanel/>
        </Layout>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_memory_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_shows_instructions_and_idle_button() {
        let html = render_to_string(move || {
            provide_memory_session(None);
            view! { <ReactionTestPage /> }
        });
        assert!(html.contains("Prueba de Reacción"));
        assert!(html.contains("Iniciar"));
        assert!(html.contains("5. Puedes repetir la prueba"));
        assert!(html.contains("Reiniciar"));
    }
}
