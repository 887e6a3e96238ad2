use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfoButtonProps {
    pub onclick: Callback<()>,
}

#[function_component(InfoButton)]
pub fn info_button(props: &InfoButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(()))
    };

    html! {
        <button type="button" class="info-button" title="How this works" {onclick}>
            {"ⓘ"}
        </button>
    }
}
