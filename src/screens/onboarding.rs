use yew::prelude::*;

struct Slide {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        icon: "🛩️",
        title: "Skip traffic, not deliveries",
        description: "Get your essentials delivered by AI-powered drones in minutes",
    },
    Slide {
        icon: "🕒",
        title: "Medicine at 3AM? We deliver",
        description: "24/7 emergency deliveries when you need them most",
    },
    Slide {
        icon: "₹",
        title: "₹45 delivery across cities",
        description: "Fixed pricing. No surge. No waiting.",
    },
];

#[derive(Properties, PartialEq)]
pub struct OnboardingProps {
    pub on_complete: Callback<()>,
}

/// Three-slide intro. Next advances; Skip and the last slide's button both
/// complete onboarding (the router persists the flag and lands on Home).
#[function_component(OnboardingFlow)]
pub fn onboarding_flow(props: &OnboardingProps) -> Html {
    let slide_idx = use_state(|| 0usize);

    let on_next = {
        let slide_idx = slide_idx.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| {
            if *slide_idx + 1 < SLIDES.len() {
                slide_idx.set(*slide_idx + 1);
            } else {
                on_complete.emit(());
            }
        })
    };

    let on_skip = {
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| on_complete.emit(()))
    };

    let slide = &SLIDES[*slide_idx];
    let last = *slide_idx == SLIDES.len() - 1;

    html! {
      <div class="screen onboarding">
        <button class="skip" onclick={on_skip}>{ "Skip" }</button>

        <div class="slide">
          <div class="slideIcon">{ slide.icon }</div>
          <h1 class="h1">{ slide.title }</h1>
          <p class="sub">{ slide.description }</p>
        </div>

        <div class="dots">
          { for SLIDES.iter().enumerate().map(|(i, _)| {
              let cls = if i == *slide_idx { "dot active" } else { "dot" };
              html! { <span class={cls}></span> }
          }) }
        </div>

        <button class="primary wide" onclick={on_next}>
          { if last { "Get Started" } else { "Next" } }
        </button>
      </div>
    }
}
