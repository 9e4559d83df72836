use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::scroll::navigate;
use crate::state::navigation::{LegalTopic, Page};
use crate::use_route_state;

fn legal_icon(topic: LegalTopic) -> &'static str {
    match topic {
        LegalTopic::PrivacyPolicy => "🔒",
        LegalTopic::CustomerSupport => "🎧",
        LegalTopic::TermsOfService => "📄",
        LegalTopic::RefundPolicy => "🧾",
    }
}

/// Order the buttons appear in, which differs from the section order.
const FOOTER_TOPICS: [LegalTopic; 4] = [
    LegalTopic::PrivacyPolicy,
    LegalTopic::CustomerSupport,
    LegalTopic::TermsOfService,
    LegalTopic::RefundPolicy,
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigator = use_navigator();
    let route = use_route_state();
    let year = chrono::Local::now().year();

    let legal_button = |topic: LegalTopic| {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(navigator) = &navigator {
                navigate(navigator, route, Page::Legal, topic.section());
            }
        });
        html! {
            <button key={topic.label()} class="legal-chip" {onclick}>
                <span class="legal-chip-icon">{legal_icon(topic)}</span>
                <span>{topic.label()}</span>
            </button>
        }
    };

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-glow"></div>
            <div class="container">
                <div class="footer-cards">
                    <div class="footer-card">
                        <span class="footer-badge badge-orange">{"Headquarters"}</span>
                        <p class="footer-address">{config::HEADQUARTERS}</p>
                    </div>

                    <div class="footer-card">
                        <span class="footer-badge badge-gold">{"Enroll Now"}</span>
                        <h3>{"Ask for Free Counselling"}</h3>
                        <div class="footer-cta-grid">
                            <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer" class="footer-whatsapp">
                                {"💬 WhatsApp"}
                            </a>
                            <a href={config::tel_link()} class="footer-call">
                                {"📞 Call Now"}
                            </a>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <img src={config::LOGO_PATH} alt={format!("{} Logo", config::BRAND)} class="footer-logo" />

                    <div class="contact-row">
                        <a href={config::tel_link()} class="contact-chip">{format!("📞 {}", config::PHONE_DISPLAY)}</a>
                        <a href={config::mailto_link()} class="contact-chip">{format!("✉ {}", config::CONTACT_EMAIL)}</a>
                    </div>

                    <div class="legal-row">
                        { for FOOTER_TOPICS.iter().copied().map(legal_button) }
                    </div>

                    <p class="copyright">
                        {format!("© {} {} Creative School. All Rights Reserved.", year, config::BRAND)}
                    </p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    padding: 6rem 0 3rem;
                    overflow: hidden;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    background: #000;
                }

                .footer-glow {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at bottom, rgba(255, 215, 0, 0.1), #000 70%);
                    opacity: 0.6;
                    pointer-events: none;
                }

                .footer-cards {
                    display: grid;
                    gap: 2rem;
                    max-width: 64rem;
                    margin: 0 auto 4rem;
                }

                .footer-card {
                    background: rgba(24, 24, 27, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                    text-align: center;
                    backdrop-filter: blur(12px);
                    transition: all 0.5s ease;
                }

                .footer-card:hover {
                    border-color: rgba(255, 215, 0, 0.4);
                    background: rgba(24, 24, 27, 0.6);
                }

                .footer-card h3 {
                    font-family: 'Oswald', sans-serif;
                    font-size: 1.875rem;
                    text-transform: uppercase;
                    margin-bottom: 0.75rem;
                }

                .footer-badge {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }

                .badge-orange {
                    color: #EA580C;
                    background: rgba(234, 88, 12, 0.1);
                    border: 1px solid rgba(234, 88, 12, 0.2);
                }

                .badge-gold {
                    color: #FFD700;
                    background: rgba(255, 215, 0, 0.1);
                    border: 1px solid rgba(255, 215, 0, 0.2);
                }

                .footer-address {
                    color: #d1d5db;
                    font-weight: 300;
                    font-size: 1.125rem;
                }

                .footer-cta-grid {
                    display: grid;
                    gap: 1rem;
                    margin-top: 1rem;
                }

                .footer-whatsapp, .footer-call {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    font-family: 'Oswald', sans-serif;
                    font-weight: 700;
                    font-size: 1.125rem;
                    text-transform: uppercase;
                    transition: all 0.3s ease;
                }

                .footer-whatsapp {
                    background: #25D366;
                    color: #000;
                }

                .footer-whatsapp:hover {
                    transform: scale(1.05);
                }

                .footer-call {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .footer-bottom {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }

                .footer-logo {
                    height: 7rem;
                    object-fit: contain;
                }

                .contact-row, .legal-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }

                .contact-chip {
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: #18181b;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #d1d5db;
                    font-size: 0.875rem;
                }

                .legal-chip {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(24, 24, 27, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    color: #9ca3af;
                    font-size: 0.75rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .legal-chip:hover {
                    color: #fff;
                    border-color: rgba(255, 255, 255, 0.2);
                }

                .copyright {
                    color: #6b7280;
                    font-family: monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    text-align: center;
                }

                @media (min-width: 640px) {
                    .footer-cta-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (min-width: 768px) {
                    .footer-cards {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
