use super::super::{Model, Msg};
use super::utils::{debounce, first_image_file};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files();
        let picked = files.as_ref().and_then(first_image_file);
        let had_any = files.map_or(0, |list| list.length()) > 0;
        input.set_value("");

        match picked {
            Some(file) => Some(Msg::FileSelected(file)),
            None if had_any => Some(Msg::SetError(Some("Only image files are supported.".into()))),
            None => None,
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    let file_name = model.state.file_name();
    let file_label = if file_name.is_empty() {
        String::new()
    } else {
        format!("File: {}", file_name)
    };

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag files here to upload or click to select files"}</p>
                </div>
                <div id="file-name" class="file-name">{ file_label }</div>
            </div>

            <button
                id="predict-button"
                class="predict-btn"
                disabled={model.state.is_submitting() || !model.state.has_file()}
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::Submit)
                })}
            >
                { render_predict_button_content(model) }
            </button>
        </div>
    }
}

fn render_predict_button_content(model: &Model) -> Html {
    if model.state.is_submitting() {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Predicting..."}</> }
    } else {
        html! { {"PREDICT"} }
    }
}
