use yew::prelude::*;

const RECENT_ORDERS: &[(&str, &str, &str, &str)] = &[
    ("💊", "Apollo Pharmacy", "2 days ago", "₹230"),
    ("🍕", "Dominos Pizza", "5 days ago", "₹444"),
    ("📄", "Important Documents", "1 week ago", "₹90"),
];

const MENU_ITEMS: &[(&str, &str)] = &[
    ("📍", "Saved Addresses"),
    ("🔔", "Notifications"),
    ("💳", "Payment Methods"),
    ("❓", "Help & Support"),
];

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub on_back: Callback<()>,
}

// Static mock content; no state of its own.
#[function_component(ProfileScreen)]
pub fn profile_screen(props: &ProfileProps) -> Html {
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    html! {
      <div class="screen profile">
        <div class="header saffron">
          <button class="backBtn" onclick={on_back}>{ "←" }</button>
          <div class="row">
            <div class="avatar">{ "👤" }</div>
            <div>
              <h1 class="h1">{ "Rahul Sharma" }</h1>
              <p class="small">{ "rahul.sharma@email.com" }</p>
              <p class="small dim">{ "Member since Jan 2025" }</p>
            </div>
          </div>
          <div class="card glass savings">
            <div>
              <p class="small">{ "Drone Savings" }</p>
              <p class="big">{ "₹2,450" }</p>
              <p class="small">{ "vs traditional delivery" }</p>
            </div>
            <span class="bannerIcon">{ "💰" }</span>
          </div>
        </div>

        <div class="statsRow">
          <div class="card stat"><p class="statBig">{ "47" }</p><p class="small">{ "Deliveries" }</p></div>
          <div class="card stat"><p class="statBig">{ "6.8" }</p><p class="small">{ "Avg Time" }</p></div>
          <div class="card stat"><p class="statBig">{ "98%" }</p><p class="small">{ "On Time" }</p></div>
        </div>

        <div class="card achievements">
          <div class="row">
            <span class="tileIcon">{ "🏅" }</span>
            <div>
              <p class="tileLabel">{ "Sky Pioneer" }</p>
              <p class="small">{ "Top 5% of users" }</p>
            </div>
          </div>
          <div class="row badges">
            { for ["🏆", "⭐", "🚁", "⚡", "💎"].iter().map(|b| html! {
                <span class="badge">{ *b }</span>
            }) }
          </div>
        </div>

        <h3 class="h3">{ "Recent Orders" }</h3>
        <div class="cards">
          { for RECENT_ORDERS.iter().map(|(icon, item, when, price)| html! {
              <div class="card row">
                <span class="tileIcon">{ *icon }</span>
                <div class="grow">
                  <p class="tileLabel">{ *item }</p>
                  <p class="small">{ *when }</p>
                </div>
                <p class="price">{ *price }</p>
              </div>
          }) }
        </div>

        <div class="cards">
          { for MENU_ITEMS.iter().map(|(icon, label)| html! {
              <button class="card row menuItem">
                <span>{ *icon }</span>
                <span class="grow left">{ *label }</span>
                <span class="dim">{ "→" }</span>
              </button>
          }) }
        </div>

        <button class="ghost danger wide">{ "↪ Logout" }</button>

        <div class="footer">
          <p class="small">{ "Zephyr v1.0.0" }</p>
          <p class="small dim">{ "Made with ❤️ in India" }</p>
        </div>
      </div>
    }
}
