use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

pub const FOOTER_ID: &str = "footer";
const CONTACT_DELAY_MS: u32 = 800;

pub const CONTACT_EMAIL: &str = "info@dnddesigncenter.com";
pub const CONTACT_PHONE: &str = "+1 (718) 934-7100";
pub const SHOWROOM_ADDRESS: &str = "2615 East 17th Street Brooklyn, New York 11235, USA";

/// Scrolls to the footer, then presses its contact button once the scroll
/// has had time to settle.
pub fn trigger_footer_contact() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(footer) = document.get_element_by_id(FOOTER_ID) else {
        return;
    };
    footer.scroll_into_view();

    Timeout::new(CONTACT_DELAY_MS, move || {
        if let Some(button) = footer
            .query_selector("[data-footer-contact]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            button.click();
        }
    })
    .forget();
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let contact_open = use_state(|| false);
    let toggle = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: MouseEvent| contact_open.set(!*contact_open))
    };

    html! {
        <footer id={FOOTER_ID} class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="footer-logo">{"D&D Design Center"}</span>
                    <p>{"Italian luxury interiors, designed in Brooklyn."}</p>
                </div>
                <button class="footer-contact-button" data-footer-contact="" onclick={toggle}>
                    { if *contact_open { "Close" } else { "Contact Us" } }
                </button>
            </div>
            {
                if *contact_open {
                    html! {
                        <div class="footer-contact-panel">
                            <div>
                                <h4>{"Email"}</h4>
                                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                            </div>
                            <div>
                                <h4>{"Phone"}</h4>
                                <a href={format!("tel:{}", CONTACT_PHONE.replace(|c: char| !c.is_ascii_digit() && c != '+', ""))}>{CONTACT_PHONE}</a>
                            </div>
                            <div>
                                <h4>{"Showroom"}</h4>
                                <span>{SHOWROOM_ADDRESS}</span>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="footer-legal">{"© D&D Design Center"}</div>
        </footer>
    }
}
