use yew::prelude::*;

pub fn scroll_to_id(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollArrowProps {
    pub target_id: AttrValue,
}

#[function_component(ScrollArrow)]
pub fn scroll_arrow(props: &ScrollArrowProps) -> Html {
    let onclick = {
        let target = props.target_id.clone();
        Callback::from(move |_: MouseEvent| scroll_to_id(&target))
    };

    html! {
        <button class="scroll-arrow" aria-label="Scroll down" {onclick}>
            <span>{"⌄"}</span>
        </button>
    }
}
