use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::confetti::celebrate;
use crate::config;
use crate::scroll::{navigate, scroll_to_top, BrowserAnchors};
use crate::state::navigation::{Page, NAV_LINKS};
use crate::use_route_state;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let navigator = use_navigator();
    let route = use_route_state();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_home = {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(navigator) = &navigator {
                navigate(navigator, route, Page::Home, 0);
            }
            scroll_to_top();
            menu_open.set(false);
        })
    };

    let anchor_link = |label: &'static str, anchor: &'static str, class: &'static str| {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(navigator) = &navigator {
                BrowserAnchors::new(navigator.clone(), route).follow(anchor);
            }
            menu_open.set(false);
        });
        html! {
            <a key={label} href={anchor} class={class} {onclick}>{label}</a>
        }
    };

    // Enroll links still open WhatsApp; the burst plays over the page behind.
    let enroll = Callback::from(|_: MouseEvent| celebrate());

    let enroll_mobile = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            celebrate();
            menu_open.set(false);
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="/" class="nav-logo" onclick={go_home}>
                    <img src={config::LOGO_PATH} alt={format!("{} Logo", config::BRAND)} />
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|&(label, anchor)| anchor_link(label, anchor, "nav-link")) }
                </div>

                <div class="nav-actions">
                    <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer" class="nav-enroll" onclick={enroll}>
                        {"Enroll Now →"}
                    </a>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|&(label, anchor)| anchor_link(label, anchor, "mobile-link")) }
                            <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer" class="mobile-enroll" onclick={enroll_mobile}>
                                {"Enroll Now →"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo img {
                    height: 3.5rem;
                    object-fit: contain;
                }

                .nav-links {
                    display: none;
                    gap: 2rem;
                }

                .nav-link {
                    font-family: 'Oswald', sans-serif;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #9ca3af;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #FFD700;
                }

                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .nav-enroll {
                    display: none;
                    background: #fff;
                    color: #000;
                    font-family: 'Oswald', sans-serif;
                    font-weight: 700;
                    padding: 0.625rem 1.5rem;
                    border-radius: 9999px;
                    text-transform: uppercase;
                    font-size: 0.875rem;
                    transition: all 0.3s ease;
                }

                .nav-enroll:hover {
                    background: #FFD700;
                    transform: scale(1.05);
                }

                .burger-menu {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.75rem;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .mobile-menu {
                    position: fixed;
                    top: 5rem;
                    left: 0;
                    width: 100%;
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(64px);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 3rem 1.5rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }

                .mobile-link {
                    font-family: 'Oswald', sans-serif;
                    font-size: 1.25rem;
                    color: #d1d5db;
                    letter-spacing: 0.1em;
                }

                .mobile-enroll {
                    margin-top: 1.5rem;
                    width: 100%;
                    max-width: 28rem;
                    text-align: center;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #1E90FF, #9333EA);
                    font-family: 'Oswald', sans-serif;
                    font-weight: 700;
                    text-transform: uppercase;
                }

                @media (min-width: 768px) {
                    .nav-enroll {
                        display: flex;
                    }
                }

                @media (min-width: 1024px) {
                    .nav-links {
                        display: flex;
                    }
                    .burger-menu, .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
