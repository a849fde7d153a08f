//! MemeForge Launchpad - Leptos Frontend
//!
//! Route table and app-wide context provisioning.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{Navbar, ToastStack};
use crate::pages::{ExplorerPage, LandingPage, TokenCreatePage, TokenDetailPage};
use crate::state::notifications::provide_notification_context;
use crate::state::tokens::provide_token_handoff;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();
    provide_notification_context();
    provide_token_handoff();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <ToastStack/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/explorer") view=ExplorerPage/>
                    <Route path=path!("/create") view=TokenCreatePage/>
                    <Route path=path!("/token/:address") view=TokenDetailPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
