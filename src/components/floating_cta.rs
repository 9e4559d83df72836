use yew::prelude::*;

use crate::config;

/// WhatsApp button pinned to the bottom-right corner on every page.
#[function_component(FloatingWhatsApp)]
pub fn floating_whatsapp() -> Html {
    html! {
        <a
            href={config::whatsapp_link()}
            target="_blank"
            rel="noopener noreferrer"
            class="floating-whatsapp"
            aria-label="Chat on WhatsApp"
        >
            <span class="floating-icon">{"💬"}</span>
            <span class="floating-pulse"></span>
            <style>
                {r#"
                .floating-whatsapp {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    background: #25D366;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 4px 20px rgba(37, 211, 102, 0.4);
                    transition: all 0.3s ease;
                }

                .floating-whatsapp:hover {
                    transform: scale(1.1);
                    box-shadow: 0 4px 30px rgba(37, 211, 102, 0.6);
                }

                .floating-icon {
                    font-size: 1.75rem;
                    position: relative;
                    z-index: 1;
                }

                .floating-pulse {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: #25D366;
                    opacity: 0.3;
                    animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                }

                @keyframes ping {
                    75%, 100% {
                        transform: scale(2);
                        opacity: 0;
                    }
                }

                @media (min-width: 768px) {
                    .floating-whatsapp {
                        width: 4rem;
                        height: 4rem;
                    }
                }
                "#}
            </style>
        </a>
    }
}
