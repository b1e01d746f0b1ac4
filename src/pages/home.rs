use leptos::*;

use crate::components::accordion::{
    Accordion, AccordionContent, AccordionHeader, AccordionItem, AccordionMode, AccordionState,
    AccordionTrigger,
};
use crate::components::language_select::LanguageSelect;
use crate::content::faq_entries;
use crate::i18n::use_i18n;

/// FAQ page: the translated question/answer list rendered as a
/// multiple-mode accordion. Every section starts closed.
#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();
    let i18n_title = i18n.clone();
    let i18n_empty = i18n.clone();

    let accordion = AccordionState::new(AccordionMode::Multiple);

    view! {
        <div class="faq-page" style="max-width: 48rem; margin: 0 auto; padding: 1.5rem;">
            <header class="faq-header" style="padding: 3rem 0 1rem;">
                <h1 style="text-align: center;">{move || i18n_title.t("faq.title")}</h1>
                <LanguageSelect />
            </header>
            <Accordion state=accordion class="faq-list">
                {move || {
                    let entries = faq_entries(&i18n.current_language());
                    if entries.is_empty() {
                        view! {
                            <p class="empty-state">{i18n_empty.t("faq.empty")}</p>
                        }
                        .into_view()
                    } else {
                        entries
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                let value = format!("item-{}", index);
                                let trigger_value = value.clone();
                                let content_value = value.clone();
                                view! {
                                    <AccordionItem state=accordion value=value>
                                        <AccordionHeader>
                                            <AccordionTrigger state=accordion value=trigger_value>
                                                <span class="faq-question">
                                                    {format!("Q{}. {}", index + 1, entry.question)}
                                                </span>
                                            </AccordionTrigger>
                                        </AccordionHeader>
                                        <AccordionContent state=accordion value=content_value>
                                            <p class="faq-answer">{entry.answer}</p>
                                        </AccordionContent>
                                    </AccordionItem>
                                }
                            })
                            .collect_view()
                    }
                }}
            </Accordion>
        </div>
    }
}
