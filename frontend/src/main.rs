mod app;
mod components;
mod hooks;
mod services;
mod state;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
