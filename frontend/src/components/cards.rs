use leptos::*;

use crate::api::UserRecord;
use crate::utils::time::format_birth_date;

fn or_dash(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "-".into())
}

pub fn format_height(altura: Option<f64>) -> String {
    altura
        .map(|h| format!("{} m", h))
        .unwrap_or_else(|| "-".into())
}

#[component]
fn InfoRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <p>
            <span class="font-medium">{label}":"</span>
            " "
            {value}
        </p>
    }
}

#[component]
pub fn UserInfoCard(
    user: UserRecord,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Información del usuario".into());
    let athlete = user.athlete_profile();

    view! {
        <div class="bg-gray-50 p-4 rounded">
            <h2 class="text-lg font-semibold mb-2">{title}</h2>
            <div class="space-y-2">
                <InfoRow label="Usuario" value={user.user.clone()}/>
                <InfoRow label="Correo" value={user.correo.clone()}/>
                <InfoRow label="Rol" value={user.rol.label().to_string()}/>
                {athlete.map(|profile| view! {
                    <InfoRow label="Altura" value={format_height(profile.altura)}/>
                    <InfoRow label="Posición" value={or_dash(profile.posicion)}/>
                    <InfoRow
                        label="Fecha de nacimiento"
                        value={or_dash(profile.fecha_nacimiento.map(|raw| format_birth_date(&raw)))}
                    />
                })}
            </div>
        </div>
    }
}

/// Static list of tools shown on the staff dashboards.
#[component]
pub fn ToolListCard(
    #[prop(into)] title: String,
    items: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="bg-gray-50 p-4 rounded">
            <h2 class="text-lg font-semibold mb-2">{title}</h2>
            <ul class="list-disc list-inside space-y-1">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_shown_in_metres() {
        assert_eq!(format_height(Some(1.82)), "1.82 m");
        assert_eq!(format_height(Some(2.0)), "2 m");
        assert_eq!(format_height(None), "-");
    }

    #[test]
    fn blank_values_become_dash() {
        assert_eq!(or_dash(Some("  ".into())), "-");
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("Base".into())), "Base");
    }
}
