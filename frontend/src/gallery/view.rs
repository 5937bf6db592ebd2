use log::error;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::AirtableConfig;
use crate::gallery::airtable::{fetch_all, FetchError};
use crate::gallery::model::{Project, Room, RoomFilter, StyleFilter};
use crate::gallery::state::{style_options, GalleryState, LoadState};

pub enum GalleryMsg {
    Loaded(Vec<Project>),
    Failed(FetchError),
    SelectRoom(RoomFilter),
    SelectStyle(StyleFilter),
    LoadMore,
    Toggle(String),
    Collapse,
}

pub struct ProductGallery {
    state: GalleryState,
}

impl Component for ProductGallery {
    type Message = GalleryMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            let result = match AirtableConfig::from_env() {
                Ok(config) => fetch_all(&config).await,
                Err(e) => Err(e.into()),
            };
            match result {
                Ok(projects) => GalleryMsg::Loaded(projects),
                Err(e) => GalleryMsg::Failed(e),
            }
        });

        Self {
            state: GalleryState::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            GalleryMsg::Loaded(projects) => self.state.loaded(projects),
            GalleryMsg::Failed(e) => {
                error!("Gallery fetch failed: {}", e);
                self.state.failed(e.to_string())
            }
            GalleryMsg::SelectRoom(room) => self.state.select_room(room),
            GalleryMsg::SelectStyle(style) => self.state.select_style(style),
            GalleryMsg::LoadMore => self.state.load_more(),
            GalleryMsg::Toggle(id) => self.state.toggle_expand(&id),
            GalleryMsg::Collapse => self.state.collapse(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let LoadState::Failed(message) = self.state.load_state() {
            return html! {
                <div class="gallery-status">
                    <p class="gallery-error">{format!("Error: {}", message)}</p>
                    <style>{GALLERY_CSS}</style>
                </div>
            };
        }

        let link = ctx.link();
        html! {
            <section class="product-gallery" id="product-gallery">
                <div class="gallery-inner">
                    <div class="gallery-heading">
                        <h2>{"EXPLORE OUR PRODUCTS"}</h2>
                        <p>{"by Designers that move outside the traditional boundaries."}</p>
                    </div>
                    <FilterBar
                        room={self.state.room()}
                        style={self.state.style()}
                        on_room={link.callback(GalleryMsg::SelectRoom)}
                        on_style={link.callback(GalleryMsg::SelectStyle)}
                    />
                    {
                        if *self.state.load_state() == LoadState::Loading {
                            html! {
                                <div class="gallery-status">
                                    <div class="gallery-spinner"></div>
                                </div>
                            }
                        } else {
                            html! {
                                <>
                                    { for self.state.rows().into_iter().map(|row| self.render_row(ctx, row)) }
                                    {
                                        if let Some(project) = self.state.expanded_project() {
                                            html! {
                                                <DetailSheet
                                                    project={project.clone()}
                                                    on_close={link.callback(|_: ()| GalleryMsg::Collapse)}
                                                />
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    {
                                        if self.state.has_more() {
                                            html! {
                                                <div class="gallery-more">
                                                    <button onclick={link.callback(|_| GalleryMsg::LoadMore)}>
                                                        {"View More"}
                                                    </button>
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </>
                            }
                        }
                    }
                </div>
                <style>{GALLERY_CSS}</style>
            </section>
        }
    }
}

impl ProductGallery {
    fn render_row(&self, ctx: &Context<Self>, row: Vec<&Project>) -> Html {
        html! {
            <div class="gallery-row">
                { for row.into_iter().map(|project| self.render_card(ctx, project)) }
            </div>
        }
    }

    fn render_card(&self, ctx: &Context<Self>, project: &Project) -> Html {
        let expanded = self.state.expanded_id() == Some(project.id.as_str());
        let onclick = {
            let id = project.id.clone();
            ctx.link().callback(move |_| GalleryMsg::Toggle(id.clone()))
        };
        let onkeydown = {
            let id = project.id.clone();
            ctx.link().batch_callback(move |e: KeyboardEvent| {
                if e.key() == "Enter" || e.key() == " " {
                    e.prevent_default();
                    Some(GalleryMsg::Toggle(id.clone()))
                } else {
                    None
                }
            })
        };

        html! {
            <div
                key={project.id.clone()}
                class="gallery-card"
                role="button"
                tabindex="0"
                aria-expanded={expanded.to_string()}
                {onclick}
                {onkeydown}
            >
                <div class="gallery-card-image">
                    <img src={project.image_url.clone()} alt={project.title.clone()} loading="lazy" />
                </div>
                <div class="gallery-card-body">
                    <div>
                        <h3>{project.style_name}</h3>
                        <span class="gallery-card-category">{project.category_label()}</span>
                        <h4>{project.title.clone()}</h4>
                    </div>
                    <span class="gallery-card-chevron">{ if expanded { "▴" } else { "▾" } }</span>
                </div>
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub room: RoomFilter,
    pub style: StyleFilter,
    pub on_room: Callback<RoomFilter>,
    pub on_style: Callback<StyleFilter>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let room_button = |label: &'static str, value: RoomFilter| {
        let on_room = props.on_room.clone();
        html! {
            <button
                class={classes!("filter-button", (props.room == value).then_some("active"))}
                onclick={Callback::from(move |_| on_room.emit(value))}
            >
                {label}
            </button>
        }
    };
    let style_button = |label: &'static str, value: StyleFilter| {
        let on_style = props.on_style.clone();
        html! {
            <button
                class={classes!("filter-button", "style-button", (props.style == value).then_some("active"))}
                onclick={Callback::from(move |_| on_style.emit(value))}
            >
                {label}
            </button>
        }
    };
    let styles = style_options(props.room);

    html! {
        <div class="filter-bar">
            <div class="filter-row">
                { room_button("All Collections", RoomFilter::All) }
                { for Room::ALL.into_iter().map(|room| room_button(room.label(), RoomFilter::Only(room))) }
            </div>
            {
                if styles.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="filter-row styles">
                            { style_button("All Styles", StyleFilter::All) }
                            { for styles.iter().map(|style| style_button(style.label(), StyleFilter::Only(*style))) }
                        </div>
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailSheetProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

fn closes_sheet(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Bottom sheet with the full-size image of the expanded card.
#[function_component(DetailSheet)]
pub fn detail_sheet(props: &DetailSheetProps) -> Html {
    let project = &props.project;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let onkeydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if closes_sheet(&e.key()) {
                on_close.emit(());
            }
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    // Keyboard focus moves into the sheet so Escape reaches the backdrop.
    let close_button = use_node_ref();
    {
        let close_button = close_button.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(button) = close_button.cast::<HtmlElement>() {
                    let _ = button.focus();
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="detail-backdrop" onclick={close.clone()} {onkeydown} tabindex="-1">
            <div class="detail-sheet" role="dialog" aria-label={project.title.clone()} onclick={stop}>
                <button ref={close_button} class="detail-close" onclick={close} aria-label="Close">{"×"}</button>
                <img src={project.image_url.clone()} alt={project.title.clone()} />
                <div class="detail-text">
                    <h3>{project.style_name}</h3>
                    <span class="gallery-card-category">{project.category_label()}</span>
                    <h4>{project.title.clone()}</h4>
                </div>
            </div>
        </div>
    }
}

const GALLERY_CSS: &str = r#"
.product-gallery {
    padding: 5rem 0;
    background: #fff;
}
.gallery-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 2rem;
}
.gallery-heading {
    text-align: center;
    margin-bottom: 3rem;
}
.gallery-heading h2 {
    font-family: var(--serif);
    font-size: 2.25rem;
    color: #1a1a1a;
}
.gallery-heading p {
    color: #4b5563;
    font-style: italic;
}
.filter-bar {
    margin-bottom: 6rem;
}
.filter-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
}
.filter-row.styles {
    margin-top: 2rem;
}
.filter-button {
    position: relative;
    padding: 1rem 2rem;
    font-size: 1.125rem;
    background: transparent;
    border: none;
    color: #4b5563;
    cursor: pointer;
    transition: color 0.5s;
}
.filter-button.style-button {
    padding: 0.75rem 1.5rem;
    font-size: 1rem;
}
.filter-button::after {
    content: '';
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    height: 2px;
    background: var(--gold);
    transform: scaleX(0);
    transform-origin: left;
    transition: transform 0.5s;
}
.filter-button:hover,
.filter-button.active {
    color: var(--gold);
}
.filter-button:hover::after,
.filter-button.active::after {
    transform: scaleX(1);
}
.gallery-row {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 3rem;
    margin-bottom: 3rem;
}
.gallery-card {
    cursor: pointer;
    overflow: hidden;
    animation: cardIn 0.6s ease-out both;
}
@keyframes cardIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
.gallery-card-image {
    aspect-ratio: 2 / 1;
    overflow: hidden;
}
.gallery-card-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 1s;
}
.gallery-card:hover .gallery-card-image img {
    transform: scale(1.05);
}
.gallery-card-body {
    margin-top: 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.gallery-card-body h3,
.detail-text h3 {
    font-family: var(--serif);
    font-size: 1.5rem;
    margin: 0 0 0.5rem;
}
.gallery-card-category {
    display: block;
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #9ca3af;
    margin-bottom: 0.5rem;
}
.gallery-card-chevron {
    color: var(--gold);
    font-size: 1.5rem;
}
.gallery-more {
    margin-top: 4rem;
    text-align: center;
}
.gallery-more button {
    padding: 0.5rem 2rem;
    color: #fff;
    background: var(--gold);
    border: none;
    letter-spacing: 0.05em;
    cursor: pointer;
}
.gallery-more button:hover {
    background: var(--gold-dark);
}
.gallery-status {
    min-height: 400px;
    display: flex;
    align-items: center;
    justify-content: center;
}
.gallery-error {
    color: #ef4444;
}
.gallery-spinner {
    width: 3rem;
    height: 3rem;
    border: 4px solid var(--gold);
    border-top-color: transparent;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}
@keyframes spin {
    to { transform: rotate(360deg); }
}
.detail-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    display: flex;
    align-items: flex-end;
    z-index: 50;
}
.detail-sheet {
    position: relative;
    width: 100%;
    max-height: 85vh;
    overflow-y: auto;
    background: #fff;
    border-radius: 1rem 1rem 0 0;
    padding: 2rem;
    animation: sheetUp 0.4s ease-out;
}
@keyframes sheetUp {
    from { transform: translateY(100%); }
    to { transform: translateY(0); }
}
.detail-sheet img {
    width: 100%;
    max-height: 60vh;
    object-fit: contain;
}
.detail-close {
    position: absolute;
    top: 1rem;
    right: 1.5rem;
    font-size: 2rem;
    background: none;
    border: none;
    cursor: pointer;
}
@media (max-width: 768px) {
    .gallery-row {
        grid-template-columns: 1fr;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_the_sheet() {
        assert!(closes_sheet("Escape"));
        assert!(closes_sheet("Esc"));
    }

    #[test]
    fn other_keys_keep_the_sheet_open() {
        assert!(!closes_sheet("Enter"));
        assert!(!closes_sheet(" "));
        assert!(!closes_sheet("Tab"));
    }
}
