use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::looping_video::looping_video;
use crate::components::footer::trigger_footer_contact;
use crate::components::scroll_arrow::ScrollArrow;
use crate::{use_scroll_to_top, Route};

struct RoomCard {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const ROOM_CARDS: &[RoomCard] = &[
    RoomCard {
        title: "KITCHEN",
        description: "Luxury kitchens designed for functionality and aesthetics.",
        image: "https://res.cloudinary.com/dnddesigncenter/image/upload/1_converted_abtrac.avif",
    },
    RoomCard {
        title: "LIVING",
        description: "Experience perfect blend of luxury living and comfort.",
        image: "https://res.cloudinary.com/dnddesigncenter/image/upload/2_converted_dvxxxk.avif",
    },
    RoomCard {
        title: "DINING",
        description: "Memorable moments in elegantly designed dining spaces.",
        image: "https://res.cloudinary.com/dnddesigncenter/image/upload/3_converted_uc7sxw.avif",
    },
    RoomCard {
        title: "BED",
        description: "Bedrooms designed into a personal sanctuary.",
        image: "https://res.cloudinary.com/dnddesigncenter/image/upload/4_converted_z4arig.avif",
    },
    RoomCard {
        title: "LIGHT",
        description: "Illuminate your space with carefully curated lighting.",
        image: "https://res.cloudinary.com/dnddesigncenter/image/upload/5_converted_d2v3em.avif",
    },
    RoomCard {
        title: "BATH",
        description: "Luxurious bathrooms with spa-like tranquility.",
        image: "https://res.cloudinary.com/dnddesigncenter/image/upload/6_converted_r36ncb.avif",
    },
    RoomCard {
        title: "OUTDOOR",
        description: "Designed outdoor spaces for relaxation and entertainment.",
        image: "https://res.cloudinary.com/dnddesigncenter/image/upload/7_converted_e3j2zg.avif",
    },
    RoomCard {
        title: "OFFICE",
        description: "Designed office spaces for undisturbed focus.",
        image: "https://res.cloudinary.com/dnddesigncenter/image/upload/v1739789546/Untitled_design_wvbz0p.avif",
    },
];

const MILESTONES: &[(&str, &str, &str)] = &[
    ("2010", "Foundation", "D&D Design Center was established in Milan, Italy."),
    ("2015", "International Expansion", "Opened our first international showroom."),
    ("2020", "Design Excellence Award", "Received prestigious recognition for innovative design solutions."),
    ("2025", "Sustainable Initiative", "Launched our commitment to sustainable luxury design."),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardAction {
    Activate(usize),
    Open(usize),
}

/// First click widens a card, a second click on the widened card opens it.
pub fn card_click(active: usize, clicked: usize) -> CardAction {
    if active == clicked {
        CardAction::Open(clicked)
    } else {
        CardAction::Activate(clicked)
    }
}

#[function_component(RoomCards)]
fn room_cards() -> Html {
    let active = use_state(|| 0usize);
    let navigator = use_navigator();

    let cards = ROOM_CARDS.iter().enumerate().map(|(index, card)| {
        let is_active = *active == index;
        let onclick = {
            let active = active.clone();
            let navigator = navigator.clone();
            Callback::from(move |_: MouseEvent| match card_click(*active, index) {
                CardAction::Activate(next) => active.set(next),
                CardAction::Open(_) => {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::ProductsCollection);
                    }
                }
            })
        };

        html! {
            <div
                class={classes!("room-card", is_active.then_some("active"))}
                style={format!("animation-delay: {}ms;", index * 120)}
                {onclick}
            >
                <div class="room-card-image" style={format!("background-image: url({});", card.image)}></div>
                <div class="room-card-shade">
                    {
                        if is_active {
                            html! {
                                <div>
                                    <h3>{card.title}</h3>
                                    <p>{card.description}</p>
                                </div>
                            }
                        } else {
                            html! { <h3 class="room-card-label">{card.title}</h3> }
                        }
                    }
                </div>
            </div>
        }
    });

    html! {
        <section id="home-projects" class="home-projects">
            <h1 class="section-title">{"PRODUCT COLLECTION"}</h1>
            <div class="room-cards">
                { for cards }
            </div>
            <div class="button-row">
                <Link<Route> to={Route::ProductsCollection} classes="gold-button">
                    {"View all"}
                </Link<Route>>
                <button class="gold-button" onclick={Callback::from(|_: MouseEvent| trigger_footer_contact())}>
                    {"Contact us"}
                </button>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    html! {
        <div class="home-page">
            <section class="hero">
                { looping_video("https://res.cloudinary.com/dnddesigncenter/video/upload/fkox3toh7a1iser92fqm.mp4", Some("hero-video")) }
                <div class="hero-shade"></div>
                <ScrollArrow target_id="home-projects" />
            </section>

            <RoomCards />

            <section class="split-section">
                <AnimatedSection delay={200} class="split-media">
                    { looping_video("https://res.cloudinary.com/dnddesigncenter/video/upload/ludyp8ynilk1t02z9f3s.mp4", None) }
                </AnimatedSection>
                <div class="split-text">
                    <AnimatedSection>
                        <h2>{"LUXURY HOME COLLECTION"}</h2>
                        <p class="eyebrow">{"Our Designers have the tacit permission to play outside the box"}</p>
                    </AnimatedSection>
                    <AnimatedSection delay={200}>
                        <p>{"Discover our exclusive curated collections, designed for those who appreciate sophisticated aesthetics, superior craftsmanship, and lasting quality."}</p>
                    </AnimatedSection>
                    <AnimatedSection delay={400}>
                        <Link<Route> to={Route::ProductsCollection} classes="gold-button">
                            {"Explore the Art of Fine Living"}
                        </Link<Route>>
                    </AnimatedSection>
                </div>
            </section>

            <section class="split-section muted">
                <div class="split-text">
                    <AnimatedSection>
                        <h2>{"DESIGN SHAPES THE FUTURE"}</h2>
                        <p class="eyebrow">{"How We Transform your Home From Vision to Reality"}</p>
                    </AnimatedSection>
                    <AnimatedSection delay={200}>
                        <p>{"At D&D Design Center, we blend craftsmanship with innovation to bring your vision to life. From personalized consultations to precision execution."}</p>
                    </AnimatedSection>
                    <AnimatedSection delay={400}>
                        <Link<Route> to={Route::HowWeWork} classes="gold-button">
                            {"See how we work"}
                        </Link<Route>>
                    </AnimatedSection>
                </div>
                <AnimatedSection delay={200} class="split-media">
                    { looping_video("https://res.cloudinary.com/dnddesigncenter/video/upload/wittyqg0juxstnsaepl0.mp4", None) }
                </AnimatedSection>
            </section>

            <section class="history">
                <h1 class="section-title">{"OUR HISTORY"}</h1>
                <div class="timeline">
                    { for MILESTONES.iter().enumerate().map(|(index, (year, title, description))| html! {
                        <AnimatedSection delay={(index as u32) * 150} class="milestone">
                            <span class="milestone-year">{*year}</span>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </AnimatedSection>
                    }) }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_another_card_activates_it() {
        assert_eq!(card_click(0, 3), CardAction::Activate(3));
    }

    #[test]
    fn clicking_active_card_opens_it() {
        assert_eq!(card_click(2, 2), CardAction::Open(2));
    }

    #[test]
    fn every_room_card_has_an_image() {
        assert_eq!(ROOM_CARDS.len(), 8);
        assert!(ROOM_CARDS.iter().all(|card| card.image.starts_with("https://")));
    }
}
