use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::compare::BeforeAfter;
use crate::components::footer::trigger_footer_contact;
use crate::components::scroll_arrow::{scroll_to_id, ScrollArrow};
use crate::use_scroll_to_top;

struct Stage {
    title: &'static str,
    /// `**` toggles emphasis.
    description: &'static str,
    image: &'static str,
    details: [&'static str; 4],
}

const STAGES: &[Stage] = &[
    Stage {
        title: "Consultation",
        description: "Visit our **New York** showroom or connect via our website for a **personalized consultation**.",
        image: "https://images.unsplash.com/photo-1553877522-43269d4ea984?q=80&w=2940&auto=format&fit=crop",
        details: [
            "Personal design consultation",
            "Space assessment",
            "Style preferences discussion",
            "Budget planning",
        ],
    },
    Stage {
        title: "Concept",
        description: "Receive **tailored sketches** that bring your **vision to life**.",
        image: "https://images.unsplash.com/photo-1600428610161-e98636332e98?q=80&w=2940&auto=format&fit=crop",
        details: [
            "Detailed sketches",
            "3D visualizations",
            "Material selections",
            "Color palette development",
        ],
    },
    Stage {
        title: "Craftsmanship",
        description: "**Experience** exquisite Italian craftsmanship where every detail is meticulously **executed to perfection**.",
        image: "https://images.unsplash.com/photo-1553051021-9f94520a6cad?q=80&w=2940&auto=format&fit=crop",
        details: [
            "Master artisan selection",
            "Premium material sourcing",
            "Handcrafted excellence",
            "Quality assurance",
        ],
    },
    Stage {
        title: "Delivery",
        description: "Your bespoke order is prepared and delivered with flawless precision, **ensuring your space** is transformed **effortlessly**.",
        image: "https://images.unsplash.com/photo-1464029902023-f42eba355bde?q=80&w=2940&auto=format&fit=crop",
        details: [
            "White glove delivery",
            "Professional installation",
            "Final inspection",
            "Client walkthrough",
        ],
    },
];

struct CaseStudy {
    title: &'static str,
    description: &'static str,
    before: &'static str,
    after: &'static str,
    results: [&'static str; 3],
}

const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "Bright Contemporary Living Room Renovation \u{2013} Warm and Inviting Space",
        description: "Transform your living area with cozy furniture, wood flooring, and modern lighting to create a contemporary, welcoming atmosphere.",
        before: "https://res.cloudinary.com/dnddesigncenter/image/upload/1_a1zewm.avif",
        after: "https://res.cloudinary.com/dnddesigncenter/image/upload/2_llvjjf.avif",
        results: [
            "Handcrafted Italian furnishings & statement lighting",
            "Premium wood flooring with exquisite finishes",
            "Enhanced natural light and refined ambiance",
        ],
    },
    CaseStudy {
        title: "Cozy and Stylish Bedroom Makeover \u{2013} Elegant Modern Home Design",
        description: "Upgrade your bedroom with warm lighting, custom-built storage, and a contemporary aesthetic for a cozy yet modern living space.",
        before: "https://res.cloudinary.com/dnddesigncenter/image/upload/5_rmtmur.avif",
        after: "https://res.cloudinary.com/dnddesigncenter/image/upload/6_i7srhj.avif",
        results: [
            "Custom-designed storage maximizing space & style",
            "Soft ambient lighting for a serene, luxurious feel",
            "Sophisticated modern design with timeless appeal",
        ],
    },
    CaseStudy {
        title: "Modern Bathroom Makeover \u{2013} Sleek and Stylish Home Renovation",
        description: "Discover a luxurious modern bathroom transformation featuring a walk-in shower, elegant fixtures, and contemporary tiles for a sleek finish.",
        before: "https://res.cloudinary.com/dnddesigncenter/image/upload/3_gmlal0.avif",
        after: "https://res.cloudinary.com/dnddesigncenter/image/upload/4_mh2y7y.avif",
        results: [
            "Spa-inspired fixtures for a high-end retreat",
            "Intelligent space planning for seamless functionality",
            "Masterfully crafted finishes ensuring lasting elegance",
        ],
    },
];

/// Splits `text` on `**` markers into (emphasised, segment) pairs.
/// Empty segments are dropped.
pub fn emphasis_segments(text: &str) -> Vec<(bool, &str)> {
    text.split("**")
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(index, segment)| (index % 2 == 1, segment))
        .collect()
}

fn render_emphasis(text: &str) -> Html {
    html! {
        <>
            { for emphasis_segments(text).into_iter().map(|(strong, segment)| {
                if strong {
                    html! { <strong>{segment.to_string()}</strong> }
                } else {
                    html! { {segment.to_string()} }
                }
            }) }
        </>
    }
}

#[function_component(HowWeWork)]
pub fn how_we_work() -> Html {
    use_scroll_to_top();

    let schedule = Callback::from(|_: MouseEvent| trigger_footer_contact());
    let portfolio = Callback::from(|_: MouseEvent| scroll_to_id("case-studies"));

    html! {
        <div class="process-page">
            <section class="process-hero">
                <div
                    class="process-hero-image"
                    style="background-image: url('https://res.cloudinary.com/dnddesigncenter/image/upload/Untitled_design_5_rnem1n.avif');"
                ></div>
                <div class="hero-shade"></div>
                <div class="process-hero-text">
                    <h1>{"How We Work"}</h1>
                    <p>{"Experience our meticulous process of transforming spaces through Italian craftsmanship and design excellence."}</p>
                </div>
                <ScrollArrow target_id="stages" />
            </section>

            <section id="stages" class="stages">
                { for STAGES.iter().enumerate().map(|(index, stage)| html! {
                    <AnimatedSection class="stage">
                        <div class="stage-image" style={format!("background-image: url('{}');", stage.image)}></div>
                        <div class="stage-text">
                            <span class="stage-number">{format!("{:02}", index + 1)}</span>
                            <h2>{stage.title}</h2>
                            <p>{render_emphasis(stage.description)}</p>
                            <ul>
                                { for stage.details.iter().map(|detail| html! { <li>{*detail}</li> }) }
                            </ul>
                        </div>
                    </AnimatedSection>
                }) }
            </section>

            <section id="case-studies" class="case-studies">
                <h2>{"Featured Transformations"}</h2>
                <div class="case-grid">
                    { for CASE_STUDIES.iter().map(|study| html! {
                        <div class="case-card">
                            <BeforeAfter before={study.before} after={study.after} label={study.title} />
                            <div class="case-body">
                                <h3>{study.title}</h3>
                                <p>{study.description}</p>
                                <ul class="case-results">
                                    { for study.results.iter().map(|result| html! { <li>{*result}</li> }) }
                                </ul>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="call-to-action">
                <h2>{"Transform Your Vision Into Reality"}</h2>
                <p>{"Book Your Complimentary Consultation"}</p>
                <div class="button-row">
                    <button class="gold-button" onclick={schedule}>{"Schedule Consultation"}</button>
                    <button class="outline-button" onclick={portfolio}>{"View Portfolio"}</button>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_emphasis_markers() {
        assert_eq!(
            emphasis_segments("Receive **tailored sketches** that bring your **vision to life**."),
            vec![
                (false, "Receive "),
                (true, "tailored sketches"),
                (false, " that bring your "),
                (true, "vision to life"),
                (false, "."),
            ]
        );
    }

    #[test]
    fn leading_emphasis_has_no_empty_segment() {
        assert_eq!(
            emphasis_segments("**Experience** it"),
            vec![(true, "Experience"), (false, " it")]
        );
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(emphasis_segments("plain"), vec![(false, "plain")]);
    }
}
