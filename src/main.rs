use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};

mod config;
mod plans;
mod redirect;
mod session;
mod subscription;
mod pages {
    pub mod subscription;
}

use pages::subscription::{page_key, SubscriptionPage};
use plans::PlanId;
use session::SessionHandle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/subscription")]
    Subscription,
    #[at("/subscription/:plan")]
    SubscriptionPlan { plan: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            html! { <Redirect<Route> to={Route::Subscription} /> }
        },
        Route::Subscription => {
            info!("Rendering Subscription page");
            html! { <SubscriptionPage key={page_key(None)} /> }
        },
        Route::SubscriptionPlan { plan } => match plan.parse::<PlanId>() {
            Ok(initial_plan) => {
                info!("Rendering Subscription page with {} preselected", initial_plan);
                html! { <SubscriptionPage key={page_key(Some(initial_plan))} {initial_plan} /> }
            }
            Err(e) => {
                warn!("{}", e);
                html! { <Redirect<Route> to={Route::Subscription} /> }
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Subscription}>{"See our plans"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    let session = use_state(SessionHandle::default);

    html! {
        <ContextProvider<SessionHandle> context={(*session).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
