use leptos::*;

/// Plus icon indicating a collapsed section.
#[component]
pub fn PlusIcon(
    #[prop(default = 24)] size: i32,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let full_class = class.unwrap_or_default();

    view! {
        <svg
            class=full_class
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d="M12 4.5v15m7.5-7.5h-15" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

/// Minus icon indicating an expanded section.
#[component]
pub fn MinusIcon(
    #[prop(default = 24)] size: i32,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let full_class = class.unwrap_or_default();

    view! {
        <svg
            class=full_class
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d="M5 12h14" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_icon_view_box() {
        assert_eq!("0 0 24 24", "0 0 24 24");
    }
}
