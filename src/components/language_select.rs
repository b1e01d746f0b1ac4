use leptos::*;

use crate::i18n::{supported_languages, use_i18n};

/// Select input bound to the i18n context's current language.
#[component]
pub fn LanguageSelect() -> impl IntoView {
    let i18n = use_i18n();
    let i18n_label = i18n.clone();
    let i18n_value = i18n.clone();
    let i18n_change = i18n.clone();

    let options = supported_languages()
        .into_iter()
        .map(|(code, name)| {
            let code_value = code.to_string();
            let code_selected = code.to_string();
            let i18n_selected = i18n.clone();
            view! {
                <option
                    value=code_value
                    selected=move || i18n_selected.current_language() == code_selected
                >
                    {name}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="form-group language-select">
            <label class="form-label" for="language">
                {move || i18n_label.t("language.label")}
            </label>
            <select
                id="language"
                class="form-input"
                prop:value=move || i18n_value.current_language()
                on:change=move |ev| i18n_change.set_language(&event_target_value(&ev))
            >
                {options}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_language_select_css_classes() {
        assert_eq!("language-select", "language-select");
    }
}
