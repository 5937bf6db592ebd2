use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::looping_video::looping_video;
use crate::components::scroll_arrow::ScrollArrow;
use crate::{use_scroll_to_top, Route};

const COLLECTIONS: &[(&str, &str, &str)] = &[
    (
        "Living Room Collection",
        "Timeless elegance for contemporary living spaces",
        "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?auto=format&fit=crop&q=80",
    ),
    (
        "Dining Collection",
        "Sophisticated dining experiences reimagined",
        "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?auto=format&fit=crop&q=80",
    ),
    (
        "Bedroom Collection",
        "Luxurious comfort meets artistic expression",
        "https://images.unsplash.com/photo-1600607687644-c7171b46864f?auto=format&fit=crop&q=80",
    ),
];

const SECTION_NAMES: [&str; 4] = ["Visionnaire", "Collaboration", "Excellence", "Collections"];

/// Index of the section whose vertical span `[top, bottom)` contains `probe`.
pub fn active_section(bounds: &[(f64, f64)], probe: f64) -> Option<usize> {
    bounds
        .iter()
        .position(|&(top, bottom)| top <= probe && probe < bottom)
}

/// Sections that are not mounted yet still take their slot, so indices
/// line up with the side index.
fn span_or_empty(span: Option<(f64, f64)>) -> (f64, f64) {
    span.unwrap_or((f64::NAN, f64::NAN))
}

#[function_component(Visionnaire)]
pub fn visionnaire() -> Html {
    use_scroll_to_top();

    let sections = use_memo(
        |_| {
            (0..SECTION_NAMES.len())
                .map(|_| NodeRef::default())
                .collect::<Vec<_>>()
        },
        (),
    );
    let active = use_state(|| 0usize);
    let scroll = use_window_scroll();

    {
        let sections = sections.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let centre = web_sys::window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64())
                    .map(|h| h / 2.0);
                if let Some(centre) = centre {
                    let bounds: Vec<(f64, f64)> = sections
                        .iter()
                        .map(|node| {
                            span_or_empty(node.cast::<Element>().map(|el| {
                                let rect = el.get_bounding_client_rect();
                                (rect.top(), rect.bottom())
                            }))
                        })
                        .collect();
                    if let Some(index) = active_section(&bounds, centre) {
                        if index != *active {
                            active.set(index);
                        }
                    }
                }
                || ()
            },
            scroll,
        );
    }

    let index_nav = SECTION_NAMES.iter().enumerate().map(|(index, name)| {
        let onclick = {
            let sections = sections.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(el) = sections[index].cast::<Element>() {
                    el.scroll_into_view();
                }
            })
        };
        html! {
            <li>
                <button class={classes!("section-dot", (*active == index).then_some("active"))} {onclick}>
                    {*name}
                </button>
            </li>
        }
    });

    html! {
        <div class="visionnaire-page">
            <ul class="section-index">{ for index_nav }</ul>

            <section ref={sections[0].clone()} class="visionnaire-hero">
                { looping_video("https://res.cloudinary.com/dnddesigncenter/video/upload/v1739792372/f34jybj7vutohmwo9ryf.mp4", Some("hero-video")) }
                <div class="hero-shade"></div>
                <div class="visionnaire-hero-text">
                    <h1>{"VISION"}<span class="gold">{"NAIRE"}</span></h1>
                    <p>{"Where Art Meets Design: A Visionnaire Collaboration"}</p>
                </div>
                <ScrollArrow target_id="collaboration" />
            </section>

            <section id="collaboration" ref={sections[1].clone()} class="editorial">
                <AnimatedSection>
                    <p>{"We are thrilled to unveil an exclusive collaboration between D&D Design Center and Visionnaire, the ultimate name in luxury home design. Renowned for its unparalleled craftsmanship and visionary aesthetics, Visionnaire has long been the epitome of bespoke Italian elegance, gracing the most prestigious residences, yachts, and private estates worldwide."}</p>
                </AnimatedSection>
            </section>

            <section ref={sections[2].clone()} class="split-section muted">
                <AnimatedSection class="split-media">
                    <img src="https://images.unsplash.com/photo-1600210491892-03d54c0aaf87?auto=format&fit=crop&q=80" alt="Italian Craftsmanship" />
                </AnimatedSection>
                <div class="split-text">
                    <AnimatedSection>
                        <h2>{"Italian "}<span class="gold">{"Excellence"}</span></h2>
                    </AnimatedSection>
                    <AnimatedSection delay={200}>
                        <p>{"Each Visionnaire piece embodies generations of Italian craftsmanship, where artisanal expertise meets contemporary vision. Our master artisans meticulously craft each element, ensuring unparalleled quality and attention to detail that defines true luxury."}</p>
                    </AnimatedSection>
                </div>
            </section>

            <section ref={sections[3].clone()} class="showcase">
                { for COLLECTIONS.iter().map(|(title, description, image)| html! {
                    <AnimatedSection class="showcase-item">
                        <div class="showcase-text">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                        <img src={*image} alt={*title} />
                    </AnimatedSection>
                }) }
                <div class="button-row">
                    <Link<Route> to={Route::ProductsCollection} classes="gold-button">
                        {"Explore the collection"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_section_containing_probe() {
        let bounds = [(-900.0, -100.0), (-100.0, 400.0), (400.0, 1200.0)];
        assert_eq!(active_section(&bounds, 300.0), Some(1));
        assert_eq!(active_section(&bounds, 400.0), Some(2));
    }

    #[test]
    fn probe_between_sections_keeps_nothing() {
        let bounds = [(0.0, 100.0), (200.0, 300.0)];
        assert_eq!(active_section(&bounds, 150.0), None);
        assert_eq!(active_section(&[], 150.0), None);
    }

    #[test]
    fn unmounted_section_keeps_later_indices() {
        let bounds = [
            span_or_empty(Some((-800.0, -100.0))),
            span_or_empty(None),
            span_or_empty(Some((-100.0, 600.0))),
        ];
        assert_eq!(active_section(&bounds, 300.0), Some(2));
        assert_eq!(active_section(&[span_or_empty(None)], 0.0), None);
    }
}
