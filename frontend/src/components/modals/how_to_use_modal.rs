use yew::prelude::*;

use super::content::HOW_TO_USE;
use crate::components::ui::Modal;
use crate::state::Accordion;

#[derive(Properties, PartialEq)]
pub struct HowToUseModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(HowToUseModal)]
pub fn how_to_use_modal(props: &HowToUseModalProps) -> Html {
    let accordion = use_state(|| Accordion::new(HOW_TO_USE.len()));

    html! {
        <Modal is_open={props.is_open} title="How to use" on_close={props.on_close.clone()}>
            <div class="accordion">
                {for HOW_TO_USE.iter().enumerate().map(|(index, section)| {
                    let expanded = accordion.is_expanded(index);
                    let onclick = {
                        let accordion = accordion.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*accordion).clone();
                            next.toggle(index);
                            accordion.set(next);
                        })
                    };

                    html! {
                        <div class={classes!("accordion-section", expanded.then_some("expanded"))}>
                            <button type="button" class="accordion-header" {onclick}>
                                <span class="accordion-icon">{section.icon}</span>
                                <span class="accordion-title">{section.title}</span>
                                <span class="accordion-chevron">{if expanded { "▾" } else { "▸" }}</span>
                            </button>
                            if expanded {
                                <div class="accordion-body">
                                    {for section.paragraphs.iter().map(|text| html! {
                                        <p>{*text}</p>
                                    })}
                                </div>
                            }
                        </div>
                    }
                })}
            </div>
        </Modal>
    }
}
