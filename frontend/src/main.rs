mod api;
mod components;
mod config;
mod state;

use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use state::{Outcome, UploadState};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

use components::{handlers, header, preview_area, results, theme_toggle, upload_section, utils};

// Yew msg components
pub enum Msg {
    // File operations
    FileSelected(GlooFile),
    PreviewReady(u64, String),
    PreviewFailed(u64, String),

    // Submission operations
    Submit,
    SubmissionFinished(u64, Outcome),

    // UI states
    SetError(Option<String>),
    SetDragging(bool),
    ToggleTheme,

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
pub struct Model {
    state: UploadState<GlooFile>,
    // Keeps the in-flight preview decode alive; dropping it aborts the read.
    preview_reader: Option<FileReader>,
    error: Option<String>,
    is_dragging: bool,
    theme: String,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });

        let theme = handlers::initial_theme();
        handlers::apply_theme(&theme);

        Self {
            state: UploadState::default(),
            preview_reader: None,
            error: None,
            is_dragging: false,
            theme,
            paste_listener: Some(listener),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileSelected(file) => handlers::handle_file_selected(self, ctx, file),
            Msg::PreviewReady(ticket, data_uri) => {
                handlers::handle_preview_ready(self, ticket, data_uri)
            }
            Msg::PreviewFailed(ticket, detail) => {
                handlers::handle_preview_failed(self, ticket, detail)
            }

            // Submission operations
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::SubmissionFinished(ticket, outcome) => {
                handlers::handle_submission_finished(self, ticket, outcome)
            }

            // UI states
            Msg::SetError(error) => {
                self.error = error;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                { theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }

                <main class="main-content">
                    { upload_section::render_upload_section(self, ctx) }
                    { utils::render_error_message(self) }
                    { preview_area::render_preview_area(self) }
                    { results::render_results(self) }
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
