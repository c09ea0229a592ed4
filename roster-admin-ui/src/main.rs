use std::sync::Arc;

use dioxus::prelude::*;
use roster::page::{AdminPage, Dialogs};
use roster::users::defaults::demo_users;
use roster::users::{Clock, InMemoryUserRepository, SystemClock, UserRepository, UserService};

mod config;
mod dialogs;
mod pages;
mod widgets;

use config::Config;
use dialogs::BrowserDialogs;
use pages::Users;
use widgets::header::Header;
use widgets::sidebar::Sidebar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Users {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = Config::from_env();
    if let Err(e) = dioxus::logger::init(config.log_level) {
        eprintln!("Failed to initialise logger: {e}");
    }

    if dotenv_loaded {
        info!("Loaded environment variables from .env file");
    } else {
        info!("No .env file found, using system environment variables");
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// Wire the page state: in-memory store, clock and dialogs.
fn build_page(config: &Config, clock: Arc<dyn Clock>, dialogs: Arc<dyn Dialogs>) -> AdminPage {
    let user_repo = if config.seed_demo_users {
        InMemoryUserRepository::with_users(demo_users(clock.today()))
    } else {
        InMemoryUserRepository::new()
    };
    let user_repo = Arc::new(user_repo) as Arc<dyn UserRepository>;
    info!("Starting with {} users", user_repo.len());

    let user_service = Arc::new(UserService::new(user_repo, clock));
    AdminPage::new(user_service, dialogs)
}

#[component]
fn App() -> Element {
    // Read once in `main` and handed over as a launch context.
    let config = use_context::<Config>();
    use_context_provider(|| {
        Signal::new(build_page(
            &config,
            Arc::new(SystemClock),
            Arc::new(BrowserDialogs),
        ))
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Sidebar and header around every page.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app-shell",
            Sidebar {}
            div { class: "app-main",
                Header {}
                main { class: "app-content", Outlet::<Route> {} }
            }
        }
    }
}
