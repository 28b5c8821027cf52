// Zephyr — drone-delivery demo (Rust + Yew + WASM).
//
// The root component owns the screen router; each screen gets callbacks
// that clone-mutate-set the router state. The onboarding flag is the only
// thing that survives a reload.

mod router;
mod screens;
mod sim;
mod storage;

use yew::prelude::*;

use router::{Screen, ScreenRouter};
use screens::{EmergencyMode, HomeScreen, OnboardingFlow, OrderFlow, ProfileScreen};

#[function_component(App)]
fn app() -> Html {
    let router = use_state(|| {
        let r = ScreenRouter::restore(storage::onboarding_seen());
        log::info!("starting at {:?} (onboarding_completed={})", r.active(), r.onboarding_completed());
        r
    });

    let on_navigate = {
        let router = router.clone();
        Callback::from(move |target: Screen| {
            let mut r = (*router).clone();
            r.navigate(target);
            router.set(r);
        })
    };

    let on_back = {
        let router = router.clone();
        Callback::from(move |_| {
            let mut r = (*router).clone();
            r.back();
            router.set(r);
        })
    };

    let on_complete = {
        let router = router.clone();
        Callback::from(move |_| {
            storage::mark_onboarding_seen();
            let mut r = (*router).clone();
            r.complete_onboarding();
            router.set(r);
            log::info!("onboarding completed");
        })
    };

    match router.active() {
        Screen::Onboarding => html! { <OnboardingFlow on_complete={on_complete} /> },
        Screen::Home => html! { <HomeScreen on_navigate={on_navigate} /> },
        Screen::Order => html! { <OrderFlow on_back={on_back} /> },
        Screen::Emergency => html! { <EmergencyMode on_back={on_back} /> },
        Screen::Profile => html! { <ProfileScreen on_back={on_back} /> },
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Zephyr starting");
    yew::Renderer::<App>::new().render();
}
