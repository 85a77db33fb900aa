use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod constants;
mod logging;
mod pages;
mod services;
mod stores;

use components::layout::Layout;
use pages::{members::MembersPage, settings::SettingsPage};
use stores::ClientProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Members,
    #[at("/settings/advanced")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Members => html! { <MembersPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-900">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-white">{"404"}</h1>
                    <p class="text-xl mt-4 text-gray-400">{"Page Not Found"}</p>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ClientProvider>
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        </ClientProvider>
    }
}

fn load_stylesheet(href: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document.head().ok_or_else(|| JsValue::from_str("no <head>"))?;

    let link = document.create_element("link")?;
    link.set_attribute("href", href)?;
    link.set_attribute("rel", "stylesheet")?;
    head.append_child(&link)?;
    Ok(())
}

fn main() {
    logging::init(tracing::Level::INFO);

    for href in [
        "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css",
        "/static/parlor.css",
    ] {
        if let Err(e) = load_stylesheet(href) {
            tracing::warn!(href, error = ?e, "failed to load stylesheet");
        }
    }

    yew::Renderer::<App>::new().render();
}
