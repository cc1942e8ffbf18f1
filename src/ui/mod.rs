mod render;
mod view_state;

pub use {
    render::render,
    view_state::{ResultsView, RowView, ViewState},
};
