use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::sim::{fmt_mmss, DeliverySession, SessionKind};

const USE_CASES: &[(&str, &str)] = &[
    ("💊", "Medicine"),
    ("🩹", "First Aid"),
    ("💉", "Insulin"),
    ("📄", "Documents"),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum EmergencyStep {
    Idle,
    Dispatched,
}

#[derive(Properties, PartialEq)]
pub struct EmergencyProps {
    pub on_back: Callback<()>,
}

/// SOS flow: Idle → Dispatched with a 420 s emergency session. Dispatched
/// is terminal — when the countdown hits zero the interval is dropped and
/// the screen stays put with the clock frozen at 0:00. Backing out to
/// Home cancels the tick at any point via unmount.
#[function_component(EmergencyMode)]
pub fn emergency_mode(props: &EmergencyProps) -> Html {
    let step = use_state(|| EmergencyStep::Idle);
    let session = use_mut_ref(|| None::<DeliverySession>);
    // Render marker mirroring remaining_secs; see OrderFlow.
    let shown_secs = use_state(|| 0u32);

    let delivered = session.borrow().as_ref().is_some_and(DeliverySession::is_delivered);

    {
        let session = session.clone();
        let shown_secs = shown_secs.clone();
        // Re-keying on `delivered` drops the interval once the session
        // reaches its terminal state.
        use_effect_with((*step, delivered), move |(step_now, delivered_now)| {
            let mut interval: Option<Interval> = None;
            if *step_now == EmergencyStep::Dispatched && !delivered_now {
                interval = Some(Interval::new(1000, move || {
                    let remaining = {
                        let mut cell = session.borrow_mut();
                        match cell.as_mut() {
                            Some(s) => {
                                s.tick();
                                s.remaining_secs()
                            }
                            None => 0,
                        }
                    };
                    shown_secs.set(remaining);
                }));
            }
            move || drop(interval)
        });
    }

    let on_activate = {
        let step = step.clone();
        let session = session.clone();
        Callback::from(move |_| {
            *session.borrow_mut() = Some(DeliverySession::start(SessionKind::Emergency));
            step.set(EmergencyStep::Dispatched);
            log::info!("SOS delivery dispatched");
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    if *step == EmergencyStep::Dispatched {
        let remaining = session
            .borrow()
            .as_ref()
            .map(DeliverySession::remaining_secs)
            .unwrap_or(0);
        return html! {
          <div class="screen sos">
            <button class="backBtn" onclick={on_back}>{ "←" }</button>

            <div class="bigIcon pulse">{ "⚠️" }</div>
            <h1 class="h1">{ "Emergency Drone Dispatched" }</h1>
            <p class="sub">{ "Priority delivery in progress" }</p>

            <div class="card glass countdown">
              <p class="small">{ "Estimated Arrival" }</p>
              <div class="big">{ fmt_mmss(remaining) }</div>
              <p class="small">{ "⚡ 70% faster than standard" }</p>
            </div>

            <div class="card glass">
              <h3 class="h3">{ "Priority Routing Active" }</h3>
              <div class="routeRow">
                <span>{ "🏪" }</span>
                <span class="routeLine"></span>
                <span>{ "🚁" }</span>
                <span class="routeLine"></span>
                <span>{ "🏥" }</span>
              </div>
              <p class="small">{ "Direct route · No stops · Maximum priority" }</p>
            </div>

            <button class="ghost wide">{ "📞 Call Support" }</button>
          </div>
        };
    }

    html! {
      <div class="screen emergencyIdle">
        <div class="header">
          <button class="backBtn" onclick={on_back}>{ "←" }</button>
          <h1 class="h1">{ "Emergency Mode" }</h1>
          <p class="small">{ "For urgent medical & critical deliveries" }</p>
        </div>

        <div class="card warnCard">
          <h3 class="h3">{ "⚠️ Emergency Delivery Protocol" }</h3>
          <p class="small">
            { "This activates priority routing with express handling. Only use for genuine emergencies like medical supplies or critical documents." }
          </p>
        </div>

        <div class="cards">
          <div class="card feature">
            <span class="tileIcon">{ "⚡" }</span>
            <div>
              <p class="tileLabel">{ "Priority Routing" }</p>
              <p class="small">{ "Direct path, no delays" }</p>
            </div>
          </div>
          <div class="card feature">
            <span class="tileIcon">{ "🕒" }</span>
            <div>
              <p class="tileLabel">{ "7 Min Delivery" }</p>
              <p class="small">{ "70% faster than standard" }</p>
            </div>
          </div>
          <div class="card feature">
            <span class="tileIcon">{ "📞" }</span>
            <div>
              <p class="tileLabel">{ "Live Support" }</p>
              <p class="small">{ "24/7 emergency hotline" }</p>
            </div>
          </div>
        </div>

        <h3 class="h3">{ "Common Emergency Uses" }</h3>
        <div class="grid2">
          { for USE_CASES.iter().map(|(icon, label)| html! {
              <div class="card tile">
                <div class="tileIcon">{ *icon }</div>
                <p class="tileLabel">{ *label }</p>
              </div>
          }) }
        </div>

        <div class="card feeCard">
          <p class="small">{ "Emergency Delivery Fee" }</p>
          <p class="big">{ "₹99" }<span class="small">{ " + product cost" }</span></p>
          <p class="small">{ "No surge pricing · Fixed rate 24/7" }</p>
        </div>

        <button class="primary danger wide pulse" onclick={on_activate}>
          { "⚠️ Activate SOS Delivery" }
        </button>
      </div>
    }
}
