use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub autofocus: bool,
}

/// Controlled input: reports every keystroke as the full new value
#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };

    let step = (props.input_type.as_str() == "number").then_some("0.01");

    html! {
        <input
            type={props.input_type.clone()}
            class="input"
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            {step}
            autofocus={props.autofocus}
            {oninput}
        />
    }
}
