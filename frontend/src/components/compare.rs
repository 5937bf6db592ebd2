use web_sys::Element;
use yew::prelude::*;

pub const INITIAL_REVEAL: f64 = 50.0;
pub const KEY_STEP: f64 = 5.0;

/// Share of the container, in percent, left of the pointer. `None` while the
/// container has no measurable width (not laid out yet).
pub fn reveal_percentage(pointer_x: f64, left: f64, width: f64) -> Option<f64> {
    if !(width > 0.0) {
        return None;
    }
    Some((100.0 * (pointer_x - left) / width).clamp(0.0, 100.0))
}

pub fn step_for_key(current: f64, key: &str) -> Option<f64> {
    let next = match key {
        "ArrowLeft" | "ArrowDown" => current - KEY_STEP,
        "ArrowRight" | "ArrowUp" => current + KEY_STEP,
        "Home" => 0.0,
        "End" => 100.0,
        _ => return None,
    };
    Some(next.clamp(0.0, 100.0))
}

/// The before layer covers the container from the left edge up to `reveal`.
pub fn before_layer_style(reveal: f64) -> String {
    format!("clip-path: inset(0 {:.2}% 0 0);", 100.0 - reveal)
}

#[derive(Properties, PartialEq)]
pub struct BeforeAfterProps {
    pub before: AttrValue,
    pub after: AttrValue,
    #[prop_or(AttrValue::from("Before and after comparison"))]
    pub label: AttrValue,
}

#[function_component(BeforeAfter)]
pub fn before_after(props: &BeforeAfterProps) -> Html {
    let container = use_node_ref();
    let reveal = use_state(|| INITIAL_REVEAL);

    let track = {
        let container = container.clone();
        let reveal = reveal.clone();
        move |client_x: i32| {
            let Some(element) = container.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            if let Some(next) = reveal_percentage(f64::from(client_x), rect.left(), rect.width()) {
                reveal.set(next);
            }
        }
    };

    let onmousemove = {
        let track = track.clone();
        Callback::from(move |e: MouseEvent| track(e.client_x()))
    };
    let ontouchmove = Callback::from(move |e: TouchEvent| {
        if let Some(touch) = e.touches().get(0) {
            track(touch.client_x());
        }
    });
    let onkeydown = {
        let reveal = reveal.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(next) = step_for_key(*reveal, &e.key()) {
                e.prevent_default();
                reveal.set(next);
            }
        })
    };

    html! {
        <div
            ref={container}
            class="compare"
            role="slider"
            tabindex="0"
            aria-label={props.label.clone()}
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{:.0}", *reveal)}
            {onmousemove}
            {ontouchmove}
            {onkeydown}
        >
            <img class="compare-after" src={props.after.clone()} alt="After" loading="lazy" />
            <div class="compare-before" style={before_layer_style(*reveal)}>
                <img src={props.before.clone()} alt="Before" loading="lazy" />
            </div>
            <div class="compare-hint">{"Slide to compare"}</div>
            <style>
                {r#"
                .compare {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    cursor: ew-resize;
                    overflow: hidden;
                }
                .compare:focus-visible {
                    outline: 2px solid var(--gold);
                    outline-offset: 2px;
                }
                .compare img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .compare-after,
                .compare-before {
                    position: absolute;
                    inset: 0;
                }
                .compare-hint {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.7);
                    color: #fff;
                    font-size: 0.875rem;
                    pointer-events: none;
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .compare:hover .compare-hint,
                .compare:focus .compare-hint {
                    opacity: 1;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_position_maps_to_percentage() {
        assert_eq!(reveal_percentage(150.0, 100.0, 200.0), Some(25.0));
        assert_eq!(reveal_percentage(300.0, 100.0, 200.0), Some(100.0));
    }

    #[test]
    fn pointer_outside_container_is_clamped() {
        assert_eq!(reveal_percentage(20.0, 100.0, 200.0), Some(0.0));
        assert_eq!(reveal_percentage(900.0, 100.0, 200.0), Some(100.0));
    }

    #[test]
    fn zero_width_container_is_ignored() {
        assert_eq!(reveal_percentage(10.0, 0.0, 0.0), None);
        assert_eq!(reveal_percentage(10.0, 0.0, f64::NAN), None);
    }

    #[test]
    fn arrow_keys_step_and_saturate() {
        assert_eq!(step_for_key(50.0, "ArrowLeft"), Some(45.0));
        assert_eq!(step_for_key(50.0, "ArrowRight"), Some(55.0));
        assert_eq!(step_for_key(2.0, "ArrowLeft"), Some(0.0));
        assert_eq!(step_for_key(98.0, "ArrowRight"), Some(100.0));
        assert_eq!(step_for_key(40.0, "Home"), Some(0.0));
        assert_eq!(step_for_key(40.0, "End"), Some(100.0));
        assert_eq!(step_for_key(40.0, "Enter"), None);
    }

    #[test]
    fn clip_hides_the_right_side() {
        assert_eq!(before_layer_style(25.0), "clip-path: inset(0 75.00% 0 0);");
        assert_eq!(before_layer_style(100.0), "clip-path: inset(0 0.00% 0 0);");
    }
}
