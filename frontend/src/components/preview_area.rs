use super::super::Model;
use yew::prelude::*;

/// Local preview of the selected file and, once a prediction has arrived,
/// the Grad-CAM overlay next to it.
pub fn render_preview_area(model: &Model) -> Html {
    let preview = model.state.preview();
    let gradcam = model.state.gradcam();

    if preview.is_none() && gradcam.is_none() {
        return html! {};
    }

    html! {
        <div class="preview-container">
            {
                if let Some(uri) = preview {
                    html! {
                        <img id="image-preview"
                            class="preview"
                            src={uri.to_string()}
                            alt="Image Preview" />
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(uri) = gradcam {
                    html! {
                        <img id="gradcam-preview"
                            class="preview"
                            src={uri.to_string()}
                            alt="Grad-CAM Preview" />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
