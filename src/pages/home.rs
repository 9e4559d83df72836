use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::particle_field::Starfield;
use crate::components::reveal::{reveal_classes, use_scroll_reveal};
use crate::config;
use crate::pages::faq::Faq;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <Hero />
            <DarkReality />
            <Comparison />
            <Stages />
            <ValueStack />
            <Faq />
            <style>
                {r#"
                .home-page section {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                }

                .section-heading {
                    font-family: 'Oswald', sans-serif;
                    font-weight: 700;
                    text-transform: uppercase;
                    line-height: 1;
                    color: #fff;
                }

                .glow-blob {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(120px);
                    pointer-events: none;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let parallax = format!("transform: translateY({}px);", scroll_y * config::PARALLAX_FACTOR);

    html! {
        <section class="hero">
            <div class="hero-parallax" style={parallax}>
                <Starfield />
                <div class="glow-blob hero-blob-orange"></div>
                <div class="glow-blob hero-blob-gold"></div>
            </div>

            <div class="container hero-content">
                <span class="hero-badge">{"Video Mastery Program"}</span>
                <h1 class="hero-title">
                    <span class="hero-line">{"You Don't Need"}</span>
                    <span class="hero-lakhs">{"LAKHS"}</span>
                    <span class="hero-line">{"To Learn"}</span>
                    <span class="hero-creativity">{"Creativity"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Skip the theory. Master the tools. "}
                    <span class="hero-emphasis">{"Build a career in 3 stages."}</span>
                </p>
                <div class="hero-cta-group">
                    <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer" class="hero-whatsapp">
                        {"💬 Join via WhatsApp"}
                    </a>
                    <a href={config::tel_link()} class="hero-call">
                        {"📞 Call Now"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding-top: 5rem;
                    background: #000;
                }

                .hero-parallax {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    z-index: 0;
                }

                .starfield {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    pointer-events: none;
                }

                .hero-blob-orange {
                    top: 20%;
                    left: 10%;
                    background: rgba(234, 88, 12, 0.1);
                }

                .hero-blob-gold {
                    bottom: 20%;
                    right: 10%;
                    background: rgba(255, 215, 0, 0.05);
                }

                .hero-content {
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    animation: fadeInUp 0.8s ease-out both;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: #FFD700;
                    font-family: monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }

                .hero-title {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    margin-bottom: 3rem;
                }

                .hero-line {
                    font-family: 'Oswald', sans-serif;
                    font-size: clamp(2.25rem, 6vw, 3.75rem);
                    font-weight: 700;
                    color: #d1d5db;
                    text-transform: uppercase;
                    letter-spacing: -0.05em;
                    line-height: 1;
                }

                .hero-lakhs {
                    font-family: 'Oswald', sans-serif;
                    font-size: clamp(6rem, 26vw, 14rem);
                    font-weight: 700;
                    line-height: 0.8;
                    margin: 1rem 0;
                    color: transparent;
                    background: linear-gradient(to bottom, #FFD700, #EA580C);
                    -webkit-background-clip: text;
                    background-clip: text;
                    filter: drop-shadow(0 0 35px rgba(255, 165, 0, 0.6));
                    animation: flicker 4s infinite;
                }

                .hero-creativity {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(3.5rem, 14vw, 8rem);
                    line-height: 0.9;
                    text-transform: uppercase;
                    color: transparent;
                    background: linear-gradient(to right, #FFD700, #FDB931, #FFFFFF, #FDB931, #FFD700);
                    background-size: 200% auto;
                    -webkit-background-clip: text;
                    background-clip: text;
                    animation: textShimmer 4s linear infinite;
                }

                .hero-subtitle {
                    color: #9ca3af;
                    font-size: 1.25rem;
                    font-weight: 300;
                    max-width: 36rem;
                    margin-bottom: 2.5rem;
                }

                .hero-emphasis {
                    color: #fff;
                    font-weight: 500;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }

                .hero-whatsapp, .hero-call {
                    min-width: 300px;
                    padding: 1rem 2rem;
                    border-radius: 1rem;
                    font-family: 'Oswald', sans-serif;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    transition: all 0.3s ease;
                }

                .hero-whatsapp {
                    background: #25D366;
                    color: #000;
                    box-shadow: 0 0 30px rgba(37, 211, 102, 0.3);
                }

                .hero-whatsapp:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 50px rgba(37, 211, 102, 0.5);
                }

                .hero-call {
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                }

                .hero-call:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: none; }
                }

                @keyframes flicker {
                    0%, 100% { opacity: 1; }
                    92% { opacity: 1; }
                    94% { opacity: 0.7; }
                    96% { opacity: 1; }
                }

                @keyframes textShimmer {
                    to { background-position: 200% center; }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(DarkReality)]
fn dark_reality() -> Html {
    let (reveal_ref, visible) = use_scroll_reveal();

    html! {
        <section id="reality" class="dark-reality">
            <div class="glow-blob reality-blob"></div>
            <div ref={reveal_ref} class={classes!("container", reveal_classes(visible))}>
                <div class="reality-layout">
                    <div class="reality-heading">
                        <span class="warning-pill">{"⚠ Industry Warning"}</span>
                        <h2 class="section-heading reality-title">
                            <span class="reality-dark">{"Dark"}</span>
                            <span class="reality-word">{"Reality"}</span>
                        </h2>
                    </div>

                    <div class="reality-cards">
                        <div class="reality-card card-red">
                            <span class="card-label">{"Error: High Cost / Low Return"}</span>
                            <h3>{"₹5 LAKH"}</h3>
                            <p>{"The average amount wasted on traditional creative institutes for theory-based learning that became outdated 5 years ago."}</p>
                        </div>
                        <div class="reality-card card-gold">
                            <span class="card-label">{"Critical Failure"}</span>
                            <h3>{"THEORY != JOB"}</h3>
                            <p>{"Most institutes sell certificates. We sell the ability to walk into an agency and start working on Day 1."}</p>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .dark-reality {
                    background: #050505;
                }

                .reality-blob {
                    top: 50%;
                    left: 0;
                    width: 600px;
                    height: 600px;
                    transform: translateY(-50%);
                    background: rgba(220, 38, 38, 0.1);
                    filter: blur(150px);
                }

                .reality-layout {
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }

                .warning-pill {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    border-radius: 9999px;
                    background: rgba(220, 38, 38, 0.1);
                    border: 1px solid rgba(220, 38, 38, 0.3);
                    color: #DC2626;
                    font-family: monospace;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }

                .reality-title {
                    font-size: clamp(4.5rem, 12vw, 8rem);
                    line-height: 0.85;
                }

                .reality-dark {
                    display: block;
                }

                .reality-word {
                    color: transparent;
                    background: linear-gradient(90deg, #DC2626, #EA580C, #CA8A04);
                    -webkit-background-clip: text;
                    background-clip: text;
                }

                .reality-cards {
                    display: grid;
                    gap: 1.5rem;
                }

                .reality-card {
                    position: relative;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                    transition: all 0.5s ease;
                }

                .reality-card h3 {
                    font-family: 'Oswald', sans-serif;
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    margin-bottom: 1rem;
                }

                .reality-card p {
                    color: #9ca3af;
                    font-size: 1.125rem;
                    line-height: 1.7;
                }

                .card-label {
                    display: block;
                    font-family: monospace;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }

                .card-red .card-label { color: #DC2626; }
                .card-gold .card-label { color: #FFD700; }
                .card-red:hover { border-color: rgba(220, 38, 38, 0.5); }
                .card-gold:hover { border-color: rgba(255, 215, 0, 0.5); }

                @media (min-width: 1024px) {
                    .reality-layout {
                        flex-direction: row;
                        align-items: flex-start;
                    }
                    .reality-heading, .reality-cards {
                        width: 50%;
                    }
                    .reality-heading {
                        position: sticky;
                        top: 6rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

const TRADITIONAL_POINTS: [&str; 4] = [
    "Long theory classes",
    "Outdated syllabus",
    "No industry exposure",
    "Certificate Lie",
];

const TRYQ_POINTS: [&str; 4] = [
    "Only earning-relevant skills",
    "Real tools creators use today",
    "Practical from Day 1",
    "Clear Income Roadmap",
];

#[function_component(Comparison)]
fn comparison() -> Html {
    let (reveal_ref, visible) = use_scroll_reveal();

    html! {
        <section id="comparison" class="comparison">
            <div ref={reveal_ref} class={classes!("container", reveal_classes(visible))}>
                <div class="comparison-header">
                    <span class="eyebrow">{"The Mission"}</span>
                    <h2 class="section-heading comparison-title">
                        {"Why Are We "}<span class="gold-text">{"Here For?"}</span>
                    </h2>
                </div>

                <div class="comparison-grid">
                    <div class="comparison-card traditional">
                        <h3>{"Traditional Institutes"}</h3>
                        <ul>
                            { for TRADITIONAL_POINTS.iter().map(|point| html! { <li><span class="mark-x">{"✕"}</span>{*point}</li> }) }
                        </ul>
                    </div>
                    <div class="comparison-card ours">
                        <h3>{config::BRAND}{" "}<span class="gold">{"Creative School"}</span></h3>
                        <ul>
                            { for TRYQ_POINTS.iter().map(|point| html! { <li><span class="mark-check">{"✓"}</span>{*point}</li> }) }
                        </ul>
                    </div>
                </div>

                <div class="slogan">
                    <span class="slogan-top">{"Our Goal Is To"}</span>
                    <span class="slogan-record">{"Break The Record"}</span>
                    <span class="slogan-connector">{"— Of Training —"}</span>
                    <span class="slogan-million">{"1 MILLION"}</span>
                    <span class="slogan-individuals">{"INDIVIDUALS"}</span>
                    <span class="slogan-placed">{"& Get Them "}<em>{"Placed"}</em></span>
                </div>

                <p class="mission-text">
                    {"TRYQ is a modern creator-first creative school built to bridge the gap between academic theory and industry reality. While traditional institutes focus on certificates and long theory classes, we focus on what actually builds careers—industry-ready skills, real projects, strong portfolios, and income clarity. Our mission is to empower the next generation of creators with not just tools like video editing, design, and AI workflows, but also the mindset, mentorship, and practical guidance required to thrive in today’s competitive digital world—so students don’t just complete a boring course, "}
                    <span class="gold-text">{"they become work-ready and earning professionals"}</span>
                </p>
            </div>

            <style>
                {r#"
                .comparison {
                    background: #000;
                }

                .comparison-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .comparison-title {
                    font-size: clamp(3rem, 8vw, 4.5rem);
                }

                .comparison-grid {
                    display: grid;
                    gap: 1rem;
                    margin-bottom: 4rem;
                }

                .comparison-card {
                    padding: 2.5rem;
                    border-radius: 2rem;
                }

                .comparison-card h3 {
                    font-family: 'Oswald', sans-serif;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin-bottom: 2rem;
                }

                .comparison-card ul {
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .comparison-card li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .traditional {
                    background: #111;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    color: #6b7280;
                }

                .traditional h3 {
                    font-size: 1.5rem;
                    color: #d1d5db;
                }

                .ours {
                    background: #18181b;
                    border: 1px solid rgba(255, 215, 0, 0.2);
                    font-weight: 500;
                }

                .ours h3 {
                    font-size: 1.875rem;
                }

                .gold {
                    color: #FFD700;
                }

                .mark-x {
                    color: #DC2626;
                }

                .mark-check {
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 50%;
                    background: #FFD700;
                    color: #000;
                    font-size: 0.75rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                }

                .slogan {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    font-family: 'Oswald', sans-serif;
                    font-weight: 700;
                    text-transform: uppercase;
                    line-height: 1;
                    padding: 4rem 0;
                    margin-bottom: 4rem;
                }

                .slogan-top {
                    font-size: 1.5rem;
                    color: #6b7280;
                    letter-spacing: 0.4em;
                    margin-bottom: 1.5rem;
                }

                .slogan-record {
                    font-size: clamp(3rem, 9vw, 8rem);
                    color: #FFD700;
                    margin-bottom: 1.5rem;
                }

                .slogan-connector {
                    font-size: 1.875rem;
                    color: #4b5563;
                    font-weight: 300;
                    letter-spacing: 0.2em;
                    margin-bottom: 2.5rem;
                }

                .slogan-million {
                    font-size: clamp(3.5rem, 12vw, 10rem);
                    color: transparent;
                    background: linear-gradient(110deg, #EA580C 45%, #FFFFFF 50%, #EA580C 55%);
                    background-size: 250% 100%;
                    -webkit-background-clip: text;
                    background-clip: text;
                    animation: textShimmer 4s linear infinite;
                }

                .slogan-individuals {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    color: #d1d5db;
                    letter-spacing: 0.1em;
                    margin: 0.5rem 0 3rem;
                }

                .slogan-placed {
                    font-size: 2.25rem;
                    color: #d1d5db;
                }

                .slogan-placed em {
                    color: #fff;
                    font-family: 'Playfair Display', serif;
                    border-bottom: 2px solid rgba(255, 215, 0, 0.5);
                }

                .mission-text {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                    color: #d1d5db;
                    font-size: 1.25rem;
                    font-weight: 300;
                    line-height: 1.7;
                }

                @media (min-width: 768px) {
                    .comparison-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StageCardProps {
    number: &'static str,
    title: &'static str,
    subtitle: &'static str,
    /// Accent color for the glow, icon and role markers.
    accent: &'static str,
    icon: &'static str,
    roles: [&'static str; 4],
}

#[function_component(StageCard)]
fn stage_card(props: &StageCardProps) -> Html {
    let accent_style = format!("color: {};", props.accent);
    let glow_style = format!("background: {};", props.accent);

    html! {
        <div class="stage-card">
            <div class="stage-glow" style={glow_style}></div>
            <div class="stage-layout">
                <div class="stage-header">
                    <div class="stage-number-row">
                        <span class="stage-number">{props.number}</span>
                        <span class="stage-icon" style={accent_style.clone()}>{props.icon}</span>
                    </div>
                    <h3 class="stage-title">{props.title}</h3>
                    <p class="stage-subtitle" style={accent_style.clone()}>{props.subtitle}</p>
                </div>
                <div class="stage-outcomes">
                    <h4>{"Career Unlocked"}</h4>
                    <ul>
                        { for props.roles.iter().map(|role| html! {
                            <li><span style={accent_style.clone()}>{"›"}</span>{*role}</li>
                        }) }
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[function_component(Stages)]
fn stages() -> Html {
    let (reveal_ref, visible) = use_scroll_reveal();

    html! {
        <section id="curriculum" class="stages">
            <div ref={reveal_ref} class={classes!("container", reveal_classes(visible))}>
                <div class="stages-header">
                    <h2 class="section-heading stages-watermark">{"Growth System"}</h2>
                    <span class="eyebrow">{"The Curriculum"}</span>
                    <h2 class="section-heading stages-title">{"3 Steps to "}<span class="fade-text">{"Mastery"}</span></h2>
                </div>

                <div class="stage-list">
                    <StageCard
                        number="01"
                        title="Foundation"
                        subtitle="Confidence + Clarity"
                        accent="#3B82F6"
                        icon="▤"
                        roles={["Junior Video Editor", "Social Media Designer", "Content Editor", "Digital Media Assistant"]}
                    />
                    <StageCard
                        number="02"
                        title="Professional"
                        subtitle="Project + Direction"
                        accent="#FFD700"
                        icon="▶"
                        roles={["Video Editor", "Agency Editor", "Brand Content Exec", "Freelance Creator"]}
                    />
                    <StageCard
                        number="03"
                        title="Mastery"
                        subtitle="Job + Stable Freelance"
                        accent="#EA580C"
                        icon="★"
                        roles={["Senior Video Editor", "Creative Producer", "AI Content Specialist", "Creative Lead"]}
                    />
                </div>
            </div>

            <style>
                {r#"
                .stages {
                    background: #000;
                }

                .stages-header {
                    position: relative;
                    height: 10rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    margin-bottom: 0.5rem;
                }

                .stages-watermark {
                    position: absolute;
                    width: 100%;
                    font-size: clamp(3rem, 8vw, 6rem);
                    opacity: 0.1;
                    transform: scale(1.5);
                    z-index: -1;
                }

                .stages-title {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    margin-top: 1rem;
                }

                .fade-text {
                    color: transparent;
                    background: linear-gradient(90deg, #fff, #6b7280);
                    -webkit-background-clip: text;
                    background-clip: text;
                }

                .stage-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .stage-card {
                    position: relative;
                    overflow: hidden;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 2.5rem;
                    padding: 2rem;
                    transition: border-color 0.5s ease;
                }

                .stage-card:hover {
                    border-color: rgba(255, 255, 255, 0.1);
                }

                .stage-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    opacity: 0.1;
                    filter: blur(100px);
                }

                .stage-layout {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }

                .stage-number-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .stage-number {
                    font-family: 'Oswald', sans-serif;
                    font-size: clamp(3.75rem, 8vw, 6rem);
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.05);
                }

                .stage-icon {
                    padding: 0.75rem 1rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 1.5rem;
                }

                .stage-title {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.25rem;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }

                .stage-subtitle {
                    font-family: 'Playfair Display', serif;
                    font-style: italic;
                    font-size: 1.25rem;
                }

                .stage-outcomes {
                    background: linear-gradient(135deg, rgba(255, 255, 255, 0.05), transparent);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 1.5rem;
                    padding: 2rem;
                }

                .stage-outcomes h4 {
                    font-family: monospace;
                    font-size: 0.875rem;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    padding-bottom: 0.5rem;
                    margin-bottom: 1.5rem;
                }

                .stage-outcomes ul {
                    list-style: none;
                    display: grid;
                    gap: 1rem;
                }

                .stage-outcomes li {
                    display: flex;
                    gap: 0.75rem;
                    font-weight: 500;
                }

                @media (min-width: 640px) {
                    .stage-outcomes ul {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (min-width: 768px) {
                    .stage-card {
                        padding: 3rem;
                    }
                    .stage-layout {
                        flex-direction: row;
                        align-items: center;
                    }
                    .stage-header, .stage-outcomes {
                        width: 50%;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(ValueStack)]
fn value_stack() -> Html {
    let (reveal_ref, visible) = use_scroll_reveal();

    html! {
        <section id="benefits" class="value-stack">
            <div ref={reveal_ref} class={classes!("container", reveal_classes(visible))}>
                <div class="value-header">
                    <h2 class="section-heading">{"What You Get"}</h2>
                    <p>{"Everything you need to launch your career."}</p>
                </div>

                <div class="value-grid">
                    <div class="value-card wide toolkit">
                        <h3>{"Creative Toolkit Access"}</h3>
                        <p>{"Full access to premium assets, templates, and libraries used by top agencies."}</p>
                    </div>
                    <div class="value-card shimmer-border gold-border">
                        <div class="value-inner">
                            <span class="value-icon gold">{"⚡"}</span>
                            <h3 class="stacked">{"AI"}<br />{"Resource"}<br />{"Stack"}</h3>
                        </div>
                    </div>
                    <div class="value-card shimmer-border red-border">
                        <div class="value-inner">
                            <span class="value-icon red">{"★"}</span>
                            <h3 class="stacked">{"Portfolio"}<br />{"Package"}</h3>
                        </div>
                    </div>
                    <div class="value-card wide setup">
                        <h3>{"Job & Freelance Setup"}</h3>
                        <p>{"We don't just teach. We help you set up your profiles, pricing, and client outreach."}</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .value-stack {
                    background: #09090b;
                }

                .value-header {
                    margin-bottom: 3rem;
                }

                .value-header h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                }

                .value-header p {
                    color: #6b7280;
                    margin-top: 0.5rem;
                }

                .value-grid {
                    display: grid;
                    gap: 1.5rem;
                    grid-auto-rows: 250px;
                }

                .value-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }

                .value-card h3 {
                    font-family: 'Oswald', sans-serif;
                    font-size: 1.875rem;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }

                .toolkit {
                    background: linear-gradient(90deg, rgba(30, 58, 138, 0.2), #000);
                    border: 1px solid rgba(59, 130, 246, 0.2);
                }

                .toolkit p {
                    color: rgba(191, 219, 254, 0.6);
                    max-width: 24rem;
                }

                .setup {
                    background: linear-gradient(90deg, rgba(88, 28, 135, 0.2), #000);
                    border: 1px solid rgba(168, 85, 247, 0.2);
                }

                .setup p {
                    color: rgba(233, 213, 255, 0.6);
                    max-width: 24rem;
                }

                .shimmer-border {
                    padding: 2px;
                }

                .shimmer-border::before {
                    content: '';
                    position: absolute;
                    inset: -150%;
                    animation: spin 8s linear infinite;
                }

                .gold-border::before {
                    background: conic-gradient(from 0deg at 50% 50%, #000 0%, #333 50%, #FFD700 100%);
                }

                .red-border::before {
                    background: conic-gradient(from 0deg at 50% 50%, #000 0%, #333 50%, #EA580C 100%);
                }

                .value-inner {
                    position: relative;
                    height: 100%;
                    background: #000;
                    border-radius: 22px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }

                .value-icon {
                    font-size: 3rem;
                }

                .value-icon.red {
                    color: #DC2626;
                }

                .value-card h3.stacked {
                    font-size: 3rem;
                    line-height: 0.85;
                    letter-spacing: -0.05em;
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }

                @media (min-width: 768px) {
                    .value-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .value-card.wide {
                        grid-column: span 2;
                    }
                }
                "#}
            </style>
        </section>
    }
}
