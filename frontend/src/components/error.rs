use crate::api::{ApiError, ErrorCode};
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="text-center px-4 my-2 space-y-1" role="alert">
                <p class="text-red-500 text-sm">{move || error.get().map(|e| e.error).unwrap_or_default()}</p>
                {move || error.get().map(|e| {
                    if e.code == ErrorCode::ValidationError {
                        if let Some(fields) = e
                            .details
                            .as_ref()
                            .and_then(|d| d.get("fields"))
                            .and_then(|v| v.as_array())
                        {
                            return view! {
                                <ul class="list-disc list-inside text-xs text-red-400">
                                    {fields.iter().map(|field| {
                                        view! { <li>{field.as_str().unwrap_or_default().to_string()}</li> }
                                    }).collect_view()}
                                </ul>
                            }.into_view();
                        }
                    }
                    ().into_view()
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}
