//! Home Page

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;

use crate::components::{ArrowRight, Footer, TWITTER_HANDLE, TWITTER_URL};

/// Handicap shown before the trend animation runs
pub const HANDICAP_START: f64 = 18.2;
pub const HANDICAP_END: f64 = 12.4;

const COUNTER_TICKS: u32 = 50;
const COUNTER_TICK: Duration = Duration::from_millis(40);
const CHAT_INTERVAL: Duration = Duration::from_millis(500);

/// Share of an element that must be on screen before it animates
const COUNTER_THRESHOLD: f64 = 0.5;
const CHAT_THRESHOLD: f64 = 0.3;
const BARS_THRESHOLD: f64 = 0.3;

/// One of the four things the caddy does
struct Feature {
    number: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        number: "01 · LEARN",
        title: "Learns Every Round",
        body: "Snap your scorecard after a round, photo or screenshot. PaisaCaddy pulls scores, fairways, greens, putts, and builds your history automatically. After 3 rounds, it starts seeing patterns you can't.",
    },
    Feature {
        number: "02 · TRACK",
        title: "Tracks Your Handicap",
        body: "Your handicap updates after every round using WHS methodology. See the trend over time. Know exactly where you stand, and what it'll take to drop the next stroke. No manual entry. No second app.",
    },
    Feature {
        number: "03 · MANAGE",
        title: "Manages Your Clubs",
        body: "Tell PaisaCaddy what's in your bag. It tracks your real carry distances, not what the fitting said, what you actually hit. When there's a gap or an overlap, it'll tell you.",
    },
    Feature {
        number: "04 · CADDY",
        title: "On-Course Caddy",
        body: "Standing over a shot you're not sure about? Text PaisaCaddy. Get a club recommendation based on your real numbers, your history on that hole, and where you tend to miss. Use it when it matters, pocket it when it doesn't.",
    },
];

const STEPS: [(&str, &str); 4] = [
    ("Get your invite link", "Tap the link. Opens a text conversation. That's your caddy."),
    ("Tell it your bag", "“I carry PW through 4-iron, 3-hybrid, 3-wood, driver.” Done. Update anytime."),
    ("Play a round. Send your scorecard.", "Photo of the paper card or screenshot from your GPS app. PaisaCaddy reads it and logs everything."),
    ("Ask anything about your game", "“What's my handicap?” “How do I play par 3s?” “What should I hit here?” Just text it."),
];

/// (lead-in, persona, rest)
const BUILT_FOR: [(&str, &str, &str); 4] = [
    ("The ", "18-handicap", " who wants to break into the low teens"),
    ("The ", "12-handicap", " chasing single digits"),
    ("The ", "weekend player", " who practices but can't find the leak"),
    ("The ", "competitive golfer", " who wants data without the spreadsheet"),
];

#[derive(Clone, Copy)]
enum Sender {
    User,
    UserImage,
    Bot,
}

impl Sender {
    fn class(self) -> &'static str {
        match self {
            Sender::User => "chat-bubble user",
            Sender::UserImage => "chat-bubble user image",
            Sender::Bot => "chat-bubble bot",
        }
    }
}

const CHAT: [(Sender, &str); 5] = [
    (Sender::User, "Just finished at TPC Scottsdale. Here's my card."),
    (Sender::UserImage, "📷 scorecard_tpc.jpg"),
    (
        Sender::Bot,
        "Got it. 82 today, nice round. 9/14 fairways, 8/18 GIR, 33 putts. Your handicap moves to 12.4 from 12.8. Want the full breakdown?",
    ),
    (Sender::User, "Where am I losing the most strokes?"),
    (
        Sender::Bot,
        "Par 3s are your bleed: averaging 3.6 strokes vs 3.1 expected at your level. You're missing greens right on 78% of par 3s. Alignment or club selection. Want to look at it by hole?",
    ),
];

/// Counter value at `progress` (0.0..=1.0) through the trend animation,
/// eased out cubically and rounded to one decimal
pub fn handicap_at(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t).powi(3);
    let value = HANDICAP_START - (HANDICAP_START - HANDICAP_END) * eased;
    (value * 10.0).round() / 10.0
}

/// Fraction of an element's height inside a viewport of `viewport` pixels
pub fn visible_fraction(top: f64, bottom: f64, viewport: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return 0.0;
    }
    let visible = bottom.min(viewport) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or_default()
}

fn on_screen(element: &web_sys::Element, threshold: f64) -> bool {
    let rect = element.get_bounding_client_rect();
    visible_fraction(rect.top(), rect.bottom(), viewport_height()) >= threshold
}

fn run_counter(value: RwSignal<f64>, tick: u32) {
    let progress = f64::from(tick) / f64::from(COUNTER_TICKS);
    // Stop once the page is gone
    if value.try_update(|v| *v = handicap_at(progress)).is_none() {
        return;
    }
    if tick < COUNTER_TICKS {
        set_timeout(move || run_counter(value, tick + 1), COUNTER_TICK);
    }
}

fn run_chat(shown: RwSignal<usize>) {
    set_timeout(
        move || {
            let Some(count) = shown.try_update(|n| {
                *n += 1;
                *n
            }) else {
                return;
            };
            if count < CHAT.len() {
                run_chat(shown);
            }
        },
        CHAT_INTERVAL,
    );
}

#[component]
pub fn HomePage() -> impl IntoView {
    let hero_ref = NodeRef::<html::Header>::new();
    let bars_ref = NodeRef::<html::Div>::new();
    let handicap_ref = NodeRef::<html::Div>::new();
    let chat_ref = NodeRef::<html::Div>::new();

    let nav_visible = RwSignal::new(false);
    let bars_visible = RwSignal::new(false);
    let handicap = RwSignal::new(HANDICAP_START);
    let counter_started = RwSignal::new(false);
    let chat_shown = RwSignal::new(0_usize);
    let chat_started = RwSignal::new(false);

    let check_scroll = move || {
        if let Some(hero) = hero_ref.get_untracked() {
            nav_visible.set(hero.get_bounding_client_rect().bottom() < 0.0);
        }
        if !bars_visible.get_untracked()
            && bars_ref.get_untracked().is_some_and(|bars| on_screen(&bars, BARS_THRESHOLD))
        {
            bars_visible.set(true);
        }
        if !counter_started.get_untracked()
            && handicap_ref.get_untracked().is_some_and(|el| on_screen(&el, COUNTER_THRESHOLD))
        {
            counter_started.set(true);
            run_counter(handicap, 0);
        }
        if !chat_started.get_untracked()
            && chat_ref.get_untracked().is_some_and(|el| on_screen(&el, CHAT_THRESHOLD))
        {
            chat_started.set(true);
            run_chat(chat_shown);
        }
    };

    let listener = window_event_listener(leptos::ev::scroll, move |_| check_scroll());
    on_cleanup(move || listener.remove());
    // Sections already on screen at load animate without a scroll
    request_animation_frame(check_scroll);

    let nav_links = move || {
        view! {
            <a href="#how-it-works" class="btn-ghost">"How It Works"</a>
            <a href="#features" class="btn-ghost">"Features"</a>
        }
    };

    view! {
        <div class="home">
            <nav class=move || if nav_visible.get() { "nav-sticky is-visible" } else { "nav-sticky" }>
                <a href="#" class="brand">"PaisaCaddy"</a>
                <div class="nav-links">
                    {nav_links()}
                    <a href="/checkout" class="btn btn-gold btn-small">"Start Texting " <ArrowRight /></a>
                </div>
            </nav>

            <header class="hero" node_ref=hero_ref>
                <div class="top-nav">
                    <a href="#" class="brand">"PaisaCaddy"</a>
                    <div class="nav-links">
                        {nav_links()}
                        <span class="badge">"⛳ Free During Beta"</span>
                    </div>
                </div>
                <h1>"Dropping your handicap starts with "<span class="gold">"knowing your game."</span></h1>
                <p class="tagline">
                    "Learn every round, track your handicap, manage your clubs, and get on-course caddy advice. All over text."
                </p>
                <div class="cta">
                    <a href="/checkout" class="btn btn-gold">"Start Texting PaisaCaddy " <ArrowRight /></a>
                </div>
                <p class="fine-print">"No app to download. No account to create. Just text."</p>
            </header>

            <section class="problem">
                <span class="section-label">"THE PLATEAU PROBLEM"</span>
                <h2>"You play every weekend. You hit the range. But your handicap won't move."</h2>
                <p>
                    "The issue isn't effort, it's information. You don't know which holes are costing you, which clubs are lying to you, or what your real tendencies are. You're improving blind."
                </p>
                <div class="bars" node_ref=bars_ref>
                    <div class="bar-row">
                        <span class="bar-label">"Rounds played without tracking data"</span>
                        <div
                            class=move || if bars_visible.get() { "animated-bar is-visible" } else { "animated-bar" }
                            style="--target-width: 85%"
                        >
                            <div class="bar-fill muted"></div>
                        </div>
                    </div>
                    <div class="bar-row">
                        <span class="bar-label gold">"Strokes identified as fixable with data"</span>
                        <div
                            class=move || if bars_visible.get() { "animated-bar is-visible" } else { "animated-bar" }
                            style="--target-width: 35%"
                        >
                            <div class="bar-fill gold"></div>
                        </div>
                    </div>
                </div>
                <p class="quote">
                    "“The average 15-handicap loses 4–6 strokes per round to patterns they can't see.”"
                </p>
            </section>

            <section id="features" class="features">
                <span class="section-label">"WHAT PAISACADDY DOES"</span>
                <h2>"Four things. All over text."</h2>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <div class="feature">
                                <span class="card-number">{feature.number}</span>
                                <h3 class="card-title">{feature.title}</h3>
                                <p>{feature.body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="handicap-trend">
                <span class="section-label">"TRACK YOUR PROGRESS"</span>
                <div node_ref=handicap_ref>
                    <span class="handicap-counter">{move || format!("{:.1}", handicap.get())}</span>
                </div>
                <div class=move || if counter_started.get() { "progress-line is-visible" } else { "progress-line" }>
                    <div class="progress-fill"></div>
                </div>
                <h2>"From guessing to knowing. That's where the strokes go."</h2>
                <p>
                    "PaisaCaddy tracks your handicap round by round. No spreadsheets. No forgetting to log. Just play, send your card, and watch the trend."
                </p>
            </section>

            <section id="how-it-works" class="steps">
                <div>
                    <span class="section-label">"HOW IT WORKS"</span>
                    <h2>"It's just texting."</h2>
                    <ol>
                        {STEPS
                            .iter()
                            .map(|(title, body)| view! {
                                <li>
                                    <h4>{*title}</h4>
                                    <p>{*body}</p>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </div>

                <div class="chat-container" node_ref=chat_ref>
                    {CHAT
                        .iter()
                        .enumerate()
                        .map(|(index, (sender, text))| {
                            let sender = *sender;
                            let text: &'static str = text;
                            let class = move || {
                                if index < chat_shown.get() {
                                    format!("{} is-visible", sender.class())
                                } else {
                                    sender.class().to_string()
                                }
                            };
                            match sender {
                                Sender::UserImage => view! {
                                    <div class=class>
                                        <div class="image-placeholder">{text}</div>
                                    </div>
                                }
                                .into_any(),
                                Sender::User | Sender::Bot => view! { <div class=class>{text}</div> }.into_any(),
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="built-for">
                <span class="section-label">"BUILT FOR"</span>
                <h2>"Golfers who are done guessing."</h2>
                <ul>
                    {BUILT_FOR
                        .iter()
                        .map(|(lead, persona, rest)| view! {
                            <li class="persona-card">{*lead}<strong>{*persona}</strong>{*rest}</li>
                        })
                        .collect_view()}
                </ul>
            </section>

            <section id="cta" class="closing">
                <h2>"Your game has a memory now. Start "<span class="gold">"using it."</span></h2>
                <p>"No app to download. No data to enter. Just text your caddy and play better golf."</p>
                <a href="/checkout" class="btn btn-gold">"Get Your Invite " <ArrowRight /></a>
                <p class="fine-print">
                    <a href=TWITTER_URL target="_blank" rel="noopener noreferrer">{TWITTER_HANDLE}</a>
                </p>
            </section>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handicap_counter_endpoints() {
        assert_eq!(handicap_at(0.0), HANDICAP_START);
        assert_eq!(handicap_at(1.0), HANDICAP_END);
        assert_eq!(handicap_at(1.5), HANDICAP_END);
    }

    #[test]
    fn test_handicap_counter_eases_out() {
        // Ease-out cubic covers seven eighths of the drop by the halfway mark
        assert_eq!(handicap_at(0.5), 13.1);
        assert!(handicap_at(0.25) < 16.0);

        let mut previous = HANDICAP_START;
        for tick in 1..=COUNTER_TICKS {
            let value = handicap_at(f64::from(tick) / f64::from(COUNTER_TICKS));
            assert!(value <= previous);
            previous = value;
        }
    }

    #[test]
    fn test_visible_fraction() {
        assert_eq!(visible_fraction(100.0, 300.0, 800.0), 1.0);
        assert_eq!(visible_fraction(700.0, 900.0, 800.0), 0.5);
        assert_eq!(visible_fraction(-150.0, 50.0, 800.0), 0.25);
        assert_eq!(visible_fraction(900.0, 1000.0, 800.0), 0.0);
        assert_eq!(visible_fraction(10.0, 10.0, 800.0), 0.0);
    }

    #[test]
    fn test_chat_script() {
        assert_eq!(CHAT.len(), 5);
        assert!(CHAT.iter().all(|(_, text)| !text.contains('\u{2014}')));
        assert!(matches!(CHAT[1].0, Sender::UserImage));
    }
}
