use super::super::Model;
use yew::prelude::*;

/// The prediction or error line for the last completed submission.
pub fn render_results(model: &Model) -> Html {
    match model.state.outcome() {
        Some(outcome) => html! {
            <div id="result" class="result">{ outcome.display_line() }</div>
        },
        None => html! {},
    }
}
