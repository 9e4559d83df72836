use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

use crate::components::accordion::{Accordion, AccordionEntry, AccordionVariant};
use crate::components::reveal::{reveal_classes, use_scroll_reveal};
use crate::state::accordion::AccordionSelection;

const FAQS: [(&str, &str); 7] = [
    (
        "Who is this course for?",
        "This program is built for total beginners, graphic designers, social media managers, and anyone who wants to switch their career to Video Editing & Motion Graphics. No prior experience needed.",
    ),
    (
        "Do I need a high-end PC to start?",
        "A mid-range laptop (i5/Ryzen 5, 8GB+ RAM, dedicated graphics preferred) is sufficient to start. We'll guide you on hardware upgrades as you progress.",
    ),
    (
        "Is counseling free?",
        "Yes, counseling is absolutely free. We believe in guiding you first. It's best to visit our office for a detailed discussion, or you can call us to get your queries resolved.",
    ),
    (
        "What tools will I learn?",
        "You will master the industry-standard suite: Adobe Premiere Pro, After Effects, and Photoshop. Plus, we teach you the latest AI tools that agencies are using right now.",
    ),
    (
        "Do you provide job placement?",
        "Yes. We don't just teach skills; we build careers. Our 'Job & Freelance Setup' module (Stage 3) is dedicated to building your portfolio, fixing your resume, and connecting you with our hiring partners.",
    ),
    (
        "Is the course online or offline?",
        "This is an offline, hands-on mentorship program at our Pune campus. We believe creative skills are best learned in a studio environment with real-time feedback.",
    ),
    (
        "What is the duration?",
        "The program spans 3 months of intensive training. You'll move through our 3-stage Growth System: Foundation, Professional, and Mastery.",
    ),
];

/// Upper bound of the random shimmer offset, in seconds.
const MAX_SHIMMER_DELAY: f64 = 2.0;

#[function_component(Faq)]
pub fn faq() -> Html {
    let (reveal_ref, visible) = use_scroll_reveal();
    let open = use_state(|| AccordionSelection::opened(0));
    // Rolled once per mount so re-renders don't restart the shimmer.
    let delays = use_state(|| {
        let mut rng = SmallRng::from_entropy();
        FAQS.iter()
            .map(|_| rng.gen_range(0.0..MAX_SHIMMER_DELAY))
            .collect::<Vec<f64>>()
    });

    let on_change = {
        let open = open.clone();
        Callback::from(move |selected: Option<usize>| open.set(selected.into()))
    };

    let entries = FAQS
        .iter()
        .map(|&(question, answer)| AccordionEntry::new(question, html! { <p>{answer}</p> }))
        .collect::<Vec<_>>();

    html! {
        <section id="faq" class="faq-section">
            <div class="glow-blob faq-blob"></div>
            <div ref={reveal_ref} class={classes!("container", "faq-container", reveal_classes(visible))}>
                <div class="faq-header">
                    <span class="eyebrow">{"Common Questions"}</span>
                    <h2 class="section-heading faq-title">
                        {"Everything You "}<span class="faq-fade">{"Need to Know"}</span>
                    </h2>
                </div>

                <Accordion
                    {entries}
                    selected={open.selected()}
                    {on_change}
                    variant={AccordionVariant::Faq}
                    delays={(*delays).clone()}
                />
            </div>

            <style>
                {r#"
                .faq-section {
                    background: #09090b;
                }

                .faq-blob {
                    top: 50%;
                    left: 50%;
                    width: 800px;
                    height: 800px;
                    transform: translate(-50%, -50%);
                    background: rgba(255, 215, 0, 0.05);
                }

                .faq-container {
                    max-width: 56rem;
                }

                .faq-header {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .faq-title {
                    font-size: clamp(3rem, 8vw, 4.5rem);
                }

                .faq-fade {
                    color: transparent;
                    background: linear-gradient(to bottom, #fff, #e5e7eb, #6b7280);
                    -webkit-background-clip: text;
                    background-clip: text;
                }
                "#}
            </style>
        </section>
    }
}
