use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::sim::{fmt_mmss, DeliverySession, Phase, SessionKind};

struct Product {
    name: &'static str,
    items: &'static str,
    price: &'static str,
    eta: &'static str,
    icon: &'static str,
}

const PRODUCTS: &[Product] = &[
    Product { name: "Apollo Pharmacy", items: "Paracetamol, Band-aids", price: "₹185", eta: "8 min", icon: "💊" },
    Product { name: "MedPlus", items: "Vitamin D, Antiseptic", price: "₹320", eta: "7 min", icon: "🏥" },
    Product { name: "Burger King", items: "Whopper Meal", price: "₹299", eta: "9 min", icon: "🍔" },
    Product { name: "Dominos", items: "Margherita Pizza", price: "₹399", eta: "10 min", icon: "🍕" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum OrderStep {
    Selecting,
    InFlight,
    Delivered,
}

fn order_number() -> u32 {
    (js_sys::Math::random() * 10_000.0).floor() as u32
}

#[derive(Properties, PartialEq)]
pub struct OrderProps {
    pub on_back: Callback<()>,
}

/// Select a product → track the 480 s standard flight → delivered.
///
/// The session lives in a `use_mut_ref` cell so the interval closure
/// mutates current state rather than a render-time snapshot; `ticks` is
/// bumped once per second purely to re-render. Leaving the screen
/// unmounts the component and the effect teardown drops the interval, so
/// no tick outlives the view.
#[function_component(OrderFlow)]
pub fn order_flow(props: &OrderProps) -> Html {
    let step = use_state(|| OrderStep::Selecting);
    let session = use_mut_ref(|| None::<DeliverySession>);
    let product_idx = use_state(|| 0usize);
    let order_no = use_state(|| 0u32);
    // Render marker: mirrors remaining_secs so each tick sets a fresh
    // value. Reading the cell for this (not the handle's own snapshot)
    // keeps re-renders coming even if this ever becomes use_state_eq.
    let shown_secs = use_state(|| 0u32);

    {
        let session = session.clone();
        let step_setter = step.clone();
        let shown_secs = shown_secs.clone();
        use_effect_with(*step, move |step_now| {
            let mut interval: Option<Interval> = None;
            if *step_now == OrderStep::InFlight {
                interval = Some(Interval::new(1000, move || {
                    let (remaining, delivered) = {
                        let mut cell = session.borrow_mut();
                        match cell.as_mut() {
                            Some(s) => {
                                s.tick();
                                (s.remaining_secs(), s.phase() == Phase::Delivered)
                            }
                            None => (0, false),
                        }
                    };
                    if delivered {
                        // Effect re-runs on the step change and drops this
                        // interval; tick() would ignore a straggler anyway.
                        step_setter.set(OrderStep::Delivered);
                    }
                    shown_secs.set(remaining);
                }));
            }
            move || drop(interval)
        });
    }

    let on_select = {
        let step = step.clone();
        let session = session.clone();
        let product_idx = product_idx.clone();
        let order_no = order_no.clone();
        Callback::from(move |idx: usize| {
            // Discard-on-restart: any previous session is replaced wholesale.
            *session.borrow_mut() = Some(DeliverySession::start(SessionKind::Standard));
            product_idx.set(idx);
            order_no.set(order_number());
            step.set(OrderStep::InFlight);
            log::info!("order started: {}", PRODUCTS[idx].name);
        })
    };

    let on_order_again = {
        let step = step.clone();
        let session = session.clone();
        Callback::from(move |_| {
            *session.borrow_mut() = None;
            step.set(OrderStep::Selecting);
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    let snapshot = session.borrow().clone();
    let product = &PRODUCTS[*product_idx];

    match (*step, snapshot) {
        (OrderStep::Delivered, _) => html! {
          <div class="screen delivered">
            <button class="backBtn" onclick={on_back}>{ "←" }</button>
            <div class="bigIcon pulse">{ "✅" }</div>
            <h1 class="h1">{ "Delivered!" }</h1>
            <p class="sub">{ "Your order arrived in 8 minutes" }</p>
            <button class="primary" onclick={on_order_again}>{ "Order Again" }</button>
          </div>
        },

        (OrderStep::InFlight, Some(s)) => {
            let t = s.telemetry();
            html! {
              <div class="screen tracking">
                <div class="header saffron">
                  <button class="backBtn" onclick={on_back}>{ "←" }</button>
                  <h1 class="h1">{ "Tracking Your Delivery" }</h1>
                  <p class="small">{ format!("Order #ZPH{}", *order_no) }</p>
                </div>

                <div class="countdown">
                  <p class="small">{ "Estimated Arrival" }</p>
                  <div class="big">{ fmt_mmss(s.remaining_secs()) }</div>
                  <p class="small good">{ "🕒 vs 45 min ground" }</p>
                </div>

                <div class="card mapCard">
                  <span class="routeStart">{ "🏪" }</span>
                  <span class="droneFloat">{ "🚁" }</span>
                  <span class="routeEnd">{ "📍" }</span>
                </div>

                <div class="card">
                  <h3 class="h3">{ "Drone Status" }</h3>
                  <div class="grid2 statusGrid">
                    if let Some(battery) = t.battery_percent {
                      <div class="status">
                        <p class="small">{ "🔋 Battery" }</p>
                        <p class="statBig">{ format!("{}%", battery.floor()) }</p>
                      </div>
                    }
                    <div class="status">
                      <p class="small">{ "💨 Speed" }</p>
                      <p class="statBig">{ format!("{} km/h", t.speed_kph.floor()) }</p>
                    </div>
                    <div class="status">
                      <p class="small">{ "⬆️ Altitude" }</p>
                      <p class="statBig">{ format!("{}m", t.altitude_m.floor()) }</p>
                    </div>
                    <div class="status">
                      <p class="small">{ "📦 Distance" }</p>
                      <p class="statBig">{ format!("{:.1} km", t.distance_km) }</p>
                    </div>
                  </div>
                </div>

                <div class="card">
                  <h3 class="h3">{ "Order Details" }</h3>
                  <div class="row">
                    <span class="tileIcon">{ product.icon }</span>
                    <div class="grow">
                      <p class="tileLabel">{ product.name }</p>
                      <p class="small">{ product.items }</p>
                    </div>
                    <p class="price">{ product.price }</p>
                  </div>
                </div>
              </div>
            }
        }

        _ => html! {
          <div class="screen select">
            <div class="header">
              <button class="backBtn" onclick={on_back}>{ "←" }</button>
              <h1 class="h1">{ "Select Product" }</h1>
              <p class="small">{ "Choose from nearby stores" }</p>
            </div>

            <div class="cards">
              { for PRODUCTS.iter().enumerate().map(|(idx, p)| {
                  let on_select = on_select.clone();
                  html! {
                    <button class="card productCard" onclick={Callback::from(move |_| on_select.emit(idx))}>
                      <div class="row">
                        <span class="tileIcon">{ p.icon }</span>
                        <div class="grow">
                          <p class="tileLabel">{ p.name }</p>
                          <p class="small">{ p.items }</p>
                        </div>
                        <div class="right">
                          <p class="price">{ p.price }</p>
                          <p class="small good">{ "+ ₹45 delivery" }</p>
                        </div>
                      </div>
                      <div class="row etaRow">
                        <span class="small saffronText">{ format!("🕒 {} via drone", p.eta) }</span>
                        <span class="small dim">{ "vs 45 min ground" }</span>
                      </div>
                    </button>
                  }
              }) }
            </div>
          </div>
        },
    }
}
