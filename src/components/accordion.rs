use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::accordion::AccordionSelection;

#[derive(Clone, PartialEq)]
pub struct AccordionEntry {
    pub title: AttrValue,
    pub body: Html,
}

impl AccordionEntry {
    pub fn new(title: impl Into<AttrValue>, body: Html) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AccordionVariant {
    /// Short answers, the whole card toggles.
    Faq,
    /// Long documents, only the header toggles so text stays selectable.
    Legal,
}

impl AccordionVariant {
    fn class(self) -> &'static str {
        match self {
            AccordionVariant::Faq => "accordion-faq",
            AccordionVariant::Legal => "accordion-legal",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub entries: Vec<AccordionEntry>,
    pub selected: Option<usize>,
    pub on_change: Callback<Option<usize>>,
    #[prop_or(AccordionVariant::Faq)]
    pub variant: AccordionVariant,
    /// Shimmer animation delay per entry, in seconds.
    #[prop_or_default]
    pub delays: Vec<f64>,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let selection = AccordionSelection::from(props.selected);
    let variant = props.variant;

    let items = props.entries.iter().enumerate().map(|(index, entry)| {
        let is_open = selection.is_open(index);
        let toggle = {
            let on_change = props.on_change.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let mut next = selection;
                next.toggle(index);
                on_change.emit(next.selected());
            })
        };
        let (card_click, header_click) = match variant {
            AccordionVariant::Faq => (Some(toggle), None),
            AccordionVariant::Legal => (None, Some(toggle)),
        };
        let delay = props.delays.get(index).copied().unwrap_or(0.0);

        html! {
            <div key={index} class={classes!("accordion-item", variant.class(), is_open.then(|| "open"))} onclick={card_click}>
                <div class="accordion-shimmer" style={format!("animation-delay: {:.2}s;", delay)}></div>
                <button class="accordion-question" onclick={header_click} aria-expanded={is_open.to_string()}>
                    <span class="accordion-title">{entry.title.clone()}</span>
                    <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                </button>
                <div class="accordion-answer" aria-hidden={(!is_open).to_string()}>
                    <div class="accordion-body">
                        { entry.body.clone() }
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <div class="accordion">
            { for items }
            <style>
                {r#"
                .accordion {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .accordion-item {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(12px);
                    transition: all 0.5s ease;
                }

                .accordion-faq {
                    cursor: pointer;
                }

                .accordion-item:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                }

                .accordion-item.open {
                    border-color: rgba(255, 215, 0, 0.3);
                    background: rgba(255, 255, 255, 0.1);
                }

                .accordion-shimmer {
                    position: absolute;
                    inset: 0;
                    transform: translateX(-100%);
                    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
                    animation: shimmer 3s infinite;
                    pointer-events: none;
                }

                @keyframes shimmer {
                    100% { transform: translateX(100%); }
                }

                .accordion-question {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    text-align: left;
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                }

                .accordion-title {
                    font-family: 'Oswald', sans-serif;
                    font-size: 1.25rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    transition: color 0.3s ease;
                }

                .accordion-legal .accordion-title {
                    font-size: 1.5rem;
                }

                .accordion-item.open .accordion-title {
                    color: #FFD700;
                }

                .toggle-icon {
                    margin-left: 1rem;
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: rgba(255, 255, 255, 0.5);
                    transition: all 0.3s ease;
                }

                .accordion-item.open .toggle-icon {
                    background: #FFD700;
                    border-color: #FFD700;
                    color: #000;
                    transform: rotate(180deg);
                }

                .accordion-answer {
                    position: relative;
                    z-index: 1;
                    padding: 0 1.5rem;
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.5s ease-in-out;
                }

                .accordion-faq.open .accordion-answer {
                    max-height: 12rem;
                    opacity: 1;
                    padding-bottom: 1.5rem;
                }

                .accordion-legal .accordion-answer {
                    transition-duration: 0.7s;
                }

                .accordion-legal.open .accordion-answer {
                    max-height: 3000px;
                    opacity: 1;
                    padding-bottom: 2rem;
                }

                .accordion-body {
                    color: #9ca3af;
                    font-weight: 300;
                    line-height: 1.7;
                    border-left: 2px solid rgba(255, 255, 255, 0.1);
                    padding-left: 1rem;
                }

                .accordion-legal .accordion-body {
                    color: #d1d5db;
                    padding-left: 1.5rem;
                }

                .accordion-body p + p,
                .accordion-body div + div {
                    margin-top: 1rem;
                }

                .accordion-body strong.heading {
                    display: block;
                    margin-bottom: 0.5rem;
                    color: #fff;
                    font-family: 'Oswald', sans-serif;
                    letter-spacing: 0.03em;
                }

                .accordion-body ul {
                    list-style: disc;
                    padding-left: 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}
