use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"PCOS Detection from Ultrasound Images"}</h1>
            <p class="subtitle">{"Upload an ultrasound image via button, drag & drop, or paste"}</p>
        </header>
    }
}
