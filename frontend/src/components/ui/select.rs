use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    pub value: AttrValue,
    pub onchange: Callback<String>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit(select.value());
        })
    };

    html! {
        <select class="select" {onchange}>
            {for props.options.iter().map(|option| {
                let selected = option.value == props.value.as_str();
                html! {
                    <option value={option.value.clone()} {selected}>{&option.label}</option>
                }
            })}
        </select>
    }
}
