use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::router::Screen;

struct Category {
    icon: &'static str,
    label: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category { icon: "💊", label: "Medicine" },
    Category { icon: "🍽️", label: "Food" },
    Category { icon: "📄", label: "Documents" },
    Category { icon: "💻", label: "Electronics" },
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(HomeScreen)]
pub fn home_screen(props: &HomeProps) -> Html {
    let address = use_state(String::new);
    // The demo treats every address as inside the drone service area.
    let drone_zone = true;

    let on_address_input = {
        let address = address.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            address.set(input.value());
        })
    };

    let nav = |target: Screen| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(target))
    };

    html! {
      <div class="screen home">
        <div class="header">
          <div class="brand">
            <div class="logo">{ "Z" }</div>
            <div>
              <h1 class="h1">{ "Zephyr" }</h1>
              <p class="small">{ "Drone Delivery" }</p>
            </div>
          </div>
          <button class="iconBtn" onclick={nav(Screen::Profile)}>{ "👤" }</button>
        </div>

        <button class="banner emergency" onclick={nav(Screen::Emergency)}>
          <div>
            <p class="bannerTitle">{ "Emergency Mode" }</p>
            <p class="bannerSub">{ "One-tap SOS delivery" }</p>
          </div>
          <span class="bannerIcon">{ "🚨" }</span>
        </button>

        <div class="card addressCard">
          <div class="row">
            <span>{ "📍" }</span>
            <input
              placeholder="Enter delivery address"
              value={(*address).clone()}
              oninput={on_address_input}
            />
          </div>
          if drone_zone {
            <div class="zoneBadge">
              <span class="pulseDot"></span>
              { "Drone Zone Available" }
            </div>
          }
        </div>

        <div class="card trackerCard">
          <h3 class="h3">{ "Live Drone Tracker" }</h3>
          <p class="small">{ "3 drones active nearby" }</p>
          <div class="droneFloat">{ "🚁" }</div>
          <div class="trackerStat">
            <p class="small">{ "Avg. Delivery Time" }</p>
            <p class="statBig">{ "8 min" }</p>
          </div>
        </div>

        <h3 class="h3">{ "Quick Categories" }</h3>
        <div class="grid2">
          { for CATEGORIES.iter().map(|c| html! {
              <button class="card tile" onclick={nav(Screen::Order)}>
                <div class="tileIcon">{ c.icon }</div>
                <p class="tileLabel">{ c.label }</p>
              </button>
          }) }
        </div>

        <div class="statsRow">
          <div class="stat"><p class="statBig">{ "₹45" }</p><p class="small">{ "Fixed Rate" }</p></div>
          <div class="stat"><p class="statBig">{ "8 min" }</p><p class="small">{ "Avg Time" }</p></div>
          <div class="stat"><p class="statBig">{ "24/7" }</p><p class="small">{ "Available" }</p></div>
        </div>
      </div>
    }
}
