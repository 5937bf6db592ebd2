use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

/// A section is revealed once its top edge rises above this share of the
/// viewport height.
pub const REVEAL_THRESHOLD: f64 = 0.8;

pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_THRESHOLD
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn in_reveal_zone(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    should_reveal(element.get_bounding_client_rect().top(), viewport_height)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Transition delay in milliseconds.
    #[prop_or_default]
    pub delay: u32,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(prefers_reduced_motion);
    let scroll = use_window_scroll();

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                if !*revealed && in_reveal_zone(&node) {
                    revealed.set(true);
                }
                || ()
            },
            scroll,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*revealed).then_some("revealed"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_below_eighty_percent_of_viewport() {
        assert!(should_reveal(500.0, 1000.0));
        assert!(!should_reveal(800.0, 1000.0));
        assert!(!should_reveal(950.0, 1000.0));
        assert!(should_reveal(-200.0, 1000.0));
    }
}
