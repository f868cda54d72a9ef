/// Record editor modal
///
/// Shows a row as pretty JSON for editing. The text must parse as a JSON
/// object keeping the original `id` before it is handed back for saving.

use leptos::*;
use serde_json::Value;

/// Parse edited text, refusing anything that is not an object with the expected id
pub fn parse_edit(text: &str, id: &str) -> Result<Value, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| format!("JSON tidak valid: {}", e))?;
    if !value.is_object() {
        return Err("Data harus berupa objek JSON".to_string());
    }
    if value.get("id").and_then(Value::as_str) != Some(id) {
        return Err(format!("ID tidak boleh diubah ({})", id));
    }
    Ok(value)
}

#[component]
pub fn RecordEditor(
    /// Record being edited as `(id, pretty JSON)`; `None` hides the modal
    #[prop(into)]
    record: Signal<Option<(String, String)>>,
    #[prop(into)]
    busy: Signal<bool>,
    on_save: Callback<Value>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (text, set_text) = create_signal(String::new());
    let (error, set_error) = create_signal::<Option<String>>(None);

    create_effect(move |_| {
        if let Some((_, json)) = record.get() {
            set_text.set(json);
            set_error.set(None);
        }
    });

    let save = move |_| {
        let Some((id, _)) = record.get_untracked() else {
            return;
        };
        match parse_edit(&text.get_untracked(), &id) {
            Ok(value) => {
                set_error.set(None);
                on_save.call(value);
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    view! {
        <Show when=move || record.with(Option::is_some)>
            <div class="fixed inset-0 z-[1050] overflow-y-auto">
                <div class="flex items-center justify-center min-h-screen p-4">
                    <div
                        class="fixed inset-0 bg-black bg-opacity-50 transition-opacity"
                        on:click=move |_| on_close.call(())
                    ></div>

                    <div class="relative bg-white rounded-lg shadow-xl max-w-2xl w-full p-6 space-y-4">
                        <h2 class="text-lg font-semibold text-gray-900">"Edit Data"</h2>
                        <textarea
                            class="w-full h-96 font-mono text-xs px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                            prop:value=text
                            on:input=move |ev| set_text.set(event_target_value(&ev))
                        ></textarea>
                        {move || error.get().map(|message| view! {
                            <p class="text-sm text-red-600">{message}</p>
                        })}

                        <div class="flex justify-end space-x-3">
                            <button
                                class="px-4 py-2 border border-gray-300 rounded-md text-sm font-medium text-gray-700 bg-white hover:bg-gray-50"
                                on:click=move |_| on_close.call(())
                            >
                                "Batal"
                            </button>
                            <button
                                class="px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                                disabled=move || busy.get()
                                on:click=save
                            >
                                {move || if busy.get() { "Menyimpan..." } else { "Simpan" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edit() {
        let ok = parse_edit(r#"{"id": "s1", "skpd": "Puskesmas Kesambi", "jenis": "puskesmas"}"#, "s1");
        assert_eq!(ok.unwrap()["skpd"], "Puskesmas Kesambi");

        assert!(parse_edit("{", "s1").unwrap_err().starts_with("JSON tidak valid"));
        assert_eq!(parse_edit("[1, 2]", "s1").unwrap_err(), "Data harus berupa objek JSON");
        assert_eq!(
            parse_edit(r#"{"id": "s2"}"#, "s1").unwrap_err(),
            "ID tidak boleh diubah (s1)"
        );
        assert!(parse_edit(r#"{"skpd": "x"}"#, "s1").is_err());
    }
}
