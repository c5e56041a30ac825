use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod accessibility;
mod booking;
mod config;
mod content;
mod error;
mod nav;
mod storage;
mod theme;
mod components {
    pub mod accessibility_widget;
    pub mod dark_mode_toggle;
    pub mod mega_menu;
    pub mod mobile_mega_menu;
    pub mod navigation;
    pub mod sunset_prompt;
}
mod pages {
    pub mod blog;
    pub mod case_studies;
    pub mod home;
    pub mod not_found;
    pub mod service;
}

use booking::BookingProvider;
use components::{accessibility_widget::AccessibilityWidget, navigation::Navigation};
use content::ContentClient;
use pages::{
    blog::{BlogList, BlogPost},
    case_studies::{CaseStudies, CaseStudy},
    home::Home,
    not_found::NotFound,
    service::MenuItemPage,
};
use theme::provider::ThemeProvider;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/:slug")]
    Service { slug: String },
    #[at("/industries/:slug")]
    Industry { slug: String },
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/case-studies")]
    CaseStudies,
    #[at("/case-studies/:slug")]
    CaseStudy { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Resolves a menu path through the route table.
    pub fn from_path(path: &str) -> Self {
        Route::recognize(path).unwrap_or(Route::NotFound)
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Service { slug } => {
            info!("Rendering service page {}", slug);
            html! { <MenuItemPage path={format!("/services/{}", slug)} /> }
        },
        Route::Industry { slug } => {
            info!("Rendering industry page {}", slug);
            html! { <MenuItemPage path={format!("/industries/{}", slug)} /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <BlogList /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering blog post {}", slug);
            html! { <BlogPost slug={slug} /> }
        },
        Route::CaseStudies => {
            info!("Rendering Case Studies page");
            html! { <CaseStudies /> }
        },
        Route::CaseStudy { slug } => {
            info!("Rendering case study {}", slug);
            html! { <CaseStudy slug={slug} /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let content_client = use_memo(|_| ContentClient::new(config::get_cms_url()), ());

    html! {
        <BrowserRouter>
            <ThemeProvider>
                <BookingProvider>
                    <ContextProvider<ContentClient> context={(*content_client).clone()}>
                        <Navigation />
                        <main class="page-content">
                            <Switch<Route> render={switch} />
                        </main>
                        <AccessibilityWidget />
                    </ContextProvider<ContentClient>>
                </BookingProvider>
            </ThemeProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
