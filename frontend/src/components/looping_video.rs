use yew::prelude::*;

/// Muted background clip that starts on its own and loops, inline on iOS.
pub fn looping_video(src: &'static str, class: Option<&'static str>) -> Html {
    html! {
        <video class={classes!(class)} autoplay=true muted=true loop=true playsinline=true>
            <source {src} type="video/mp4" />
        </video>
    }
}
