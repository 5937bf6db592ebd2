use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::scroll_arrow::ScrollArrow;
use crate::{use_scroll_to_top, Route};

const COMMITMENTS: &[(&str, &str)] = &[
    (
        "Responsible Materials",
        "Certified woods, recycled metals and low-emission finishes selected with our Italian partners for every collection.",
    ),
    (
        "Made to Last",
        "Handcrafted pieces built to be restored rather than replaced, with repair and refinishing offered for the life of the piece.",
    ),
    (
        "Considered Logistics",
        "Consolidated shipping from Italy and local white glove delivery keep each installation's footprint small.",
    ),
];

#[function_component(Sustainability)]
pub fn sustainability() -> Html {
    use_scroll_to_top();

    html! {
        <div class="sustainability-page">
            <section class="process-hero">
                <div
                    class="process-hero-image"
                    style="background-image: url('https://www.visionnaire-home.com/sites/default/files/styles/side_by_side/public/stories/images/2017b_1.jpg?itok=bjLfHccr');"
                ></div>
                <div class="hero-shade"></div>
                <div class="process-hero-text">
                    <h1>{"Sustainability"}</h1>
                    <p>{"Luxury that respects the places it comes from and the homes it goes to."}</p>
                </div>
                <ScrollArrow target_id="commitments" />
            </section>

            <section id="commitments" class="info-cards">
                { for COMMITMENTS.iter().enumerate().map(|(index, (title, body))| html! {
                    <AnimatedSection delay={(index as u32) * 200} class="info-card">
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </AnimatedSection>
                }) }
            </section>

            <section class="call-to-action light">
                <AnimatedSection>
                    <h2>{"Designed for generations"}</h2>
                    <p>{"See how our process keeps craftsmanship at the centre of every project."}</p>
                    <Link<Route> to={Route::HowWeWork} classes="gold-button">
                        {"See how we work"}
                    </Link<Route>>
                </AnimatedSection>
            </section>
        </div>
    }
}
