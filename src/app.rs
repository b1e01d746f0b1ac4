use leptos::*;
use leptos_router::*;

use crate::i18n::provide_i18n;
use crate::pages::home::HomePage;

#[component]
pub fn App() -> impl IntoView {
    // A stored language preference wins over the default
    provide_i18n("en");

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
