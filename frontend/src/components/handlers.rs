use super::super::{Model, Msg};
use super::utils::first_image_file;
use crate::api;
use crate::state::{Outcome, TRANSPORT_ERROR_MESSAGE, interpret_response};
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_data_url;
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

const THEME_STORAGE_KEY: &str = "theme";

pub fn handle_file_selected(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    model.error = None;
    let ticket = model.state.select(file.clone(), file.name());

    let link = ctx.link().clone();
    // Replacing the reader drops any decode still in flight for the
    // previous selection.
    model.preview_reader = Some(read_as_data_url(&file, move |result| match result {
        Ok(data_uri) => link.send_message(Msg::PreviewReady(ticket, data_uri)),
        Err(e) => link.send_message(Msg::PreviewFailed(ticket, e.to_string())),
    }));

    true
}

pub fn handle_preview_ready(model: &mut Model, ticket: u64, data_uri: String) -> bool {
    let applied = model.state.apply_preview(ticket, data_uri);
    if applied {
        model.preview_reader = None;
    }
    applied
}

pub fn handle_preview_failed(_model: &mut Model, ticket: u64, detail: String) -> bool {
    // The previous preview stays on screen untouched.
    log::warn!("Preview decode failed (ticket {}): {}", ticket, detail);
    false
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some((ticket, file)) = model.state.begin_submission() else {
        log::debug!("Submit ignored: no file selected");
        return false;
    };
    model.error = None;

    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = match api::submit_image(&file).await {
            Ok(response) => interpret_response(response),
            Err(e) => {
                log::error!("Error uploading file: {}", e);
                Outcome::Failed {
                    message: TRANSPORT_ERROR_MESSAGE.to_string(),
                }
            }
        };
        link.send_message(Msg::SubmissionFinished(ticket, outcome));
    });

    true
}

pub fn handle_submission_finished(model: &mut Model, ticket: u64, outcome: Outcome) -> bool {
    model.state.finish_submission(ticket, outcome)
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            process_file_list(ctx, file_list);
        }
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            event.prevent_default();
            process_file_list(ctx, file_list);
            return true;
        }
    }
    false
}

fn process_file_list(ctx: &Context<Model>, file_list: FileList) {
    match first_image_file(&file_list) {
        Some(file) => ctx.link().send_message(Msg::FileSelected(file)),
        None if file_list.length() > 0 => {
            log::warn!("Skipping non-image file(s)");
            ctx.link()
                .send_message(Msg::SetError(Some("Only image files are supported.".into())));
        }
        None => {}
    }
}

pub fn initial_theme() -> String {
    LocalStorage::get(THEME_STORAGE_KEY).unwrap_or_else(|_| "light".to_string())
}

pub fn apply_theme(theme: &str) {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    if theme == "dark" {
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        body.class_list().remove_1("dark-mode").unwrap();
    }
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = if model.theme == "light" {
        "dark".to_string()
    } else {
        "light".to_string()
    };
    apply_theme(&model.theme);
    LocalStorage::set(THEME_STORAGE_KEY, &model.theme).ok();
    true
}
