use crate::app::App;

mod app;
mod components;
mod overlay;

fn main() {
    yew::Renderer::<App>::new().render();
}
