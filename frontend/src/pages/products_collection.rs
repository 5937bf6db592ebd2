use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::looping_video::looping_video;
use crate::components::footer::{CONTACT_EMAIL, CONTACT_PHONE, SHOWROOM_ADDRESS};
use crate::gallery::view::ProductGallery;
use crate::{use_scroll_to_top, Route};

const HERO_TITLE: &str = "PRODUCT COLLECTION";

#[function_component(ProductsCollection)]
pub fn products_collection() -> Html {
    use_scroll_to_top();

    let letters = HERO_TITLE.chars().enumerate().map(|(index, letter)| {
        html! {
            <span class="blind-letter" style={format!("animation-delay: {}ms;", index * 40)}>
                { if letter == ' ' { "\u{00a0}".to_string() } else { letter.to_string() } }
            </span>
        }
    });

    let info = [
        ("Contact", "We'd love to hear your ideas.", CONTACT_EMAIL),
        ("Phone", "Call us for inquiries for instant service.", CONTACT_PHONE),
        ("Office", "See our latest designs and collections on spot.", SHOWROOM_ADDRESS),
    ];

    html! {
        <div class="collection-page">
            <section class="collection-hero">
                <img
                    class="collection-hero-image"
                    src="https://res.cloudinary.com/dnddesigncenter/image/upload/Kitchen_Traditional_6.avif"
                    alt="Traditional kitchen"
                />
                <div class="hero-shade"></div>
                <div class="collection-hero-text">
                    <h1>{ for letters }</h1>
                    <p>{"The contemporaneity and internationality of being \u{201c}Made in Italy\u{201d}"}</p>
                </div>
            </section>

            <ProductGallery />

            <section class="split-section muted">
                <AnimatedSection class="split-media">
                    { looping_video("https://res.cloudinary.com/dnddesigncenter/video/upload/v1739792372/f34jybj7vutohmwo9ryf.mp4", None) }
                </AnimatedSection>
                <div class="split-text">
                    <AnimatedSection>
                        <p class="eyebrow">{"Exclusive partnership"}</p>
                        <h2>{"D&D x VISIONNAIRE"}</h2>
                    </AnimatedSection>
                    <AnimatedSection delay={200}>
                        <p>{"Bespoke Italian elegance, now available through our Brooklyn showroom."}</p>
                    </AnimatedSection>
                    <AnimatedSection delay={400}>
                        <Link<Route> to={Route::Visionnaire} classes="gold-button">
                            {"Learn More"}
                        </Link<Route>>
                    </AnimatedSection>
                </div>
            </section>

            <section class="info-cards">
                { for info.iter().enumerate().map(|(index, (title, blurb, value))| html! {
                    <AnimatedSection delay={(index as u32) * 200} class="info-card">
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                        <span class="info-value">{*value}</span>
                    </AnimatedSection>
                }) }
            </section>
        </div>
    }
}
