use yew::prelude::*;

use super::content::InfoTopic;
use crate::components::ui::Modal;

#[derive(Properties, PartialEq)]
pub struct InfoModalProps {
    pub topic: InfoTopic,
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Fixed sections, all visible at once
#[function_component(InfoModal)]
pub fn info_modal(props: &InfoModalProps) -> Html {
    html! {
        <Modal is_open={props.is_open} title={props.topic.title()} on_close={props.on_close.clone()}>
            <div class="info-sections">
                {for props.topic.sections().iter().map(|section| html! {
                    <div class="info-section">
                        <h4 class="info-section-title">
                            <span class="info-section-icon">{section.icon}</span>
                            {section.title}
                        </h4>
                        {for section.paragraphs.iter().map(|text| html! {
                            <p class="info-section-text">{*text}</p>
                        })}
                    </div>
                })}
            </div>
        </Modal>
    }
}
