use log::debug;
use yew::prelude::*;

use crate::components::accordion::{Accordion, AccordionEntry, AccordionVariant};
use crate::config;
use crate::scroll::scroll_to_top;
use crate::state::accordion::DeepLinkedSelection;
use crate::state::navigation::LegalTopic;

/// Stagger between consecutive section shimmers, in seconds.
const SHIMMER_STAGGER: f64 = 0.2;

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    /// Section to open on arrival. Out-of-range values open nothing.
    #[prop_or_default]
    pub initial_section: usize,
}

fn section_title(topic: LegalTopic) -> String {
    format!("{}. {}", topic.section() + 1, topic.label())
}

fn section_body(topic: LegalTopic) -> Html {
    match topic {
        LegalTopic::PrivacyPolicy => privacy_policy(),
        LegalTopic::TermsOfService => terms_of_service(),
        LegalTopic::RefundPolicy => refund_policy(),
        LegalTopic::CustomerSupport => customer_support(),
    }
}

#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let section_count = LegalTopic::ALL.len();
    let open = {
        let initial = props.initial_section;
        use_state(move || DeepLinkedSelection::new(initial, section_count))
    };

    // A new deep link replaces whatever the user had open.
    {
        let open = open.clone();
        use_effect_with_deps(
            move |initial: &usize| {
                let mut next = *open;
                if next.follow(*initial) {
                    debug!("legal page moved to section {}", initial);
                    open.set(next);
                }
                scroll_to_top();
                || ()
            },
            props.initial_section,
        );
    }

    let on_change = {
        let open = open.clone();
        Callback::from(move |selected: Option<usize>| {
            let mut next = *open;
            next.choose(selected);
            open.set(next);
        })
    };

    let entries = LegalTopic::ALL
        .iter()
        .map(|&topic| AccordionEntry::new(section_title(topic), section_body(topic)))
        .collect::<Vec<_>>();
    let delays = (0..section_count)
        .map(|index| index as f64 * SHIMMER_STAGGER)
        .collect::<Vec<_>>();

    html! {
        <section class="legal-page">
            <div class="legal-blob"></div>
            <div class="container legal-container">
                <div class="legal-header">
                    <div class="legal-bar"></div>
                    <h1 class="legal-title">{"LEGAL & SUPPORT"}</h1>
                    <p class="legal-intro">
                        {format!("Welcome to {}. To ensure transparency and a smooth learning experience, we have compiled our Privacy Policy, Terms of Service, Refund Policy, and Support channels below.", config::BRAND)}
                    </p>
                </div>

                <Accordion
                    {entries}
                    selected={open.selected()}
                    {on_change}
                    variant={AccordionVariant::Legal}
                    {delays}
                />
            </div>

            <style>
                {r#"
                .legal-page {
                    position: relative;
                    min-height: 100vh;
                    background: #000;
                    padding: 8rem 0 6rem;
                    overflow: hidden;
                }

                .legal-blob {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 500px;
                    height: 500px;
                    border-radius: 50%;
                    background: rgba(88, 28, 135, 0.2);
                    filter: blur(120px);
                    pointer-events: none;
                }

                .legal-container {
                    max-width: 56rem;
                    padding: 0 1.5rem;
                    animation: fadeInUp 0.8s ease-out both;
                }

                .legal-header {
                    margin-bottom: 3rem;
                }

                .legal-bar {
                    width: 12rem;
                    height: 1rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #FFD700, #EA580C);
                    margin-bottom: 2rem;
                }

                .legal-title {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(3.75rem, 10vw, 6rem);
                    letter-spacing: -0.05em;
                    margin-bottom: 2rem;
                    user-select: none;
                    color: transparent;
                    background: linear-gradient(to bottom, #fff, rgba(255, 255, 255, 0.8), rgba(255, 255, 255, 0.2));
                    -webkit-background-clip: text;
                    background-clip: text;
                }

                .legal-intro {
                    max-width: 42rem;
                    color: #d1d5db;
                    font-size: 1.25rem;
                    font-weight: 300;
                    line-height: 1.7;
                }

                .legal-subheading {
                    display: block;
                    margin-bottom: 0.25rem;
                    color: #d1d5db;
                }

                .support-grid {
                    display: grid;
                    gap: 1rem;
                    margin-top: 1rem;
                }

                .support-card {
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .support-email {
                    color: #FFD700;
                }

                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: none; }
                }

                @media (min-width: 640px) {
                    .support-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .support-card.wide {
                        grid-column: span 2;
                    }
                }
                "#}
            </style>
        </section>
    }
}

fn privacy_policy() -> Html {
    html! {
        <>
            <p>{"At TRYQ, accessible from our website, one of our main priorities is the privacy of our visitors and students. This Privacy Policy document contains types of information that is collected and recorded by TRYQ and how we use it."}</p>

            <div>
                <strong class="heading">{"Consent"}</strong>
                <p>{"By using our website, you hereby consent to our Privacy Policy and agree to its terms."}</p>
            </div>

            <div>
                <strong class="heading">{"Information We Collect"}</strong>
                <p>{"The personal information that you are asked to provide, and the reasons why you are asked to provide it, will be made clear to you at the point we ask you to provide your personal information (e.g., when enrolling in a course)."}</p>
                <ul>
                    <li><strong>{"Registration Data: "}</strong>{"When you register for an Account or our 3-stage growth program, we may ask for your contact information, including items such as name, email address, and telephone number."}</li>
                    <li><strong>{"Log Files: "}</strong>{"We follow a standard procedure of using log files. The information collected includes internet protocol (IP) addresses, browser type, date and time stamp, and referring/exit pages."}</li>
                </ul>
            </div>

            <div>
                <strong class="heading">{"How We Use Your Information"}</strong>
                <p>{"We use the information we collect to:"}</p>
                <ul>
                    <li>{"Provide, operate, and maintain our educational platform."}</li>
                    <li>{"Improve, personalize, and expand our course materials."}</li>
                    <li>{"Communicate with you regarding course updates, mentorship schedules, and support."}</li>
                    <li>{"Find and prevent fraud."}</li>
                </ul>
            </div>

            <div>
                <strong class="heading">{"Cookies"}</strong>
                <p>{"Like any other website, TRYQ uses 'cookies'. These cookies are used to store information including visitors' preferences, and the pages on the website that the visitor accessed or visited. The information is used to optimize the users' experience by customizing our web page content based on visitors' browser type."}</p>
            </div>

            <div>
                <strong class="heading">{"GDPR & CCPA Rights"}</strong>
                <p>{"We respect your data rights. You have the right to request access to, correction of, or deletion of your personal data. If you wish to exercise these rights, please contact our support team."}</p>
            </div>
        </>
    }
}

fn terms_of_service() -> Html {
    html! {
        <>
            <div>
                <strong class="heading">{"2.1 Using the Website"}</strong>
                <p>{"By accessing and using the TRYQ website, you are deemed to have accepted the following terms and conditions. These terms apply to all visitors, students, and users of our platform. If you do not want to be legally bound by these terms and conditions, please do not access or use the Website."}</p>
                <p>{"We reserve the right to change these terms and conditions at any time to reflect changes in our services, such as updates to our training programs or legal requirements. You are advised to review these terms regularly to ensure you are aware of any changes. Your continued use of the Website after such changes are posted will be deemed agreement on your part to these terms and conditions as amended."}</p>
            </div>

            <div>
                <strong class="heading">{"2.2 Intellectual Property"}</strong>

                <div>
                    <strong class="legal-subheading">{"(a) Copyright and Ownership"}</strong>
                    <p>{"Copyright and all intellectual property rights in the content of the website and our educational materials are vested in TRYQ and reserved, unless indicated otherwise. This includes, but is not limited to:"}</p>
                    <ul>
                        <li>{"Our unique 3-stage growth program structure and curriculum."}</li>
                        <li>{"All training modules regarding video editing, graphic design, and AI creative tools."}</li>
                        <li>{"Project-based learning materials, templates, and student resources."}</li>
                        <li>{"The TRYQ brand identity, logo, and \"industry-ready\" methodology."}</li>
                    </ul>
                </div>

                <div>
                    <strong class="legal-subheading">{"(b) Permitted Use"}</strong>
                    <p>{"You may use the content of the Website subject to the following conditions:"}</p>
                    <ul>
                        <li><strong>{"Educational Purpose: "}</strong>{"It is used for your personal learning and skill development only."}</li>
                        <li><strong>{"Non-Commercial: "}</strong>{"It is used only for your own personal, non-commercial use. You may not resell, redistribute, or white-label our course materials."}</li>
                        <li><strong>{"Attribution: "}</strong>{"Any copies or downloads of any content from the Website (where download is expressly permitted for students) must include a notice that copyright in the relevant material is owned by TRYQ."}</li>
                    </ul>
                </div>

                <div>
                    <strong class="legal-subheading">{"(c) No License Grant"}</strong>
                    <p>{"Except as expressly provided above, nothing contained on this Website should be construed as conferring any license or right to use any trademark, copyright, or proprietary curriculum of TRYQ or any third party without written permission."}</p>
                </div>
            </div>
        </>
    }
}

fn refund_policy() -> Html {
    html! {
        <>
            <p>{"We are committed to providing high-quality, job-oriented training. However, we understand that sometimes circumstances change."}</p>

            <div>
                <strong class="heading">{"Refund Eligibility"}</strong>
                <p>{"We offer a refund within 7 days of your initial purchase, provided you have not completed more than 20% of the course content."}</p>
            </div>

            <div>
                <strong class="heading">{"Non-Refundable Items"}</strong>
                <p>{"Downloadable assets (such as template packs or presets) that have already been downloaded are non-refundable due to the nature of digital goods."}</p>
            </div>

            <div>
                <strong class="heading">{"Processing"}</strong>
                <p>{"To request a refund, please contact our support team with your transaction details. Approved refunds are processed within 5-7 business days to the original method of payment."}</p>
            </div>
        </>
    }
}

fn customer_support() -> Html {
    html! {
        <>
            <p>{"We are here to help you succeed. If you have any questions about our courses, technical issues, or legal policies, please reach out to us."}</p>

            <div class="support-grid">
                <div class="support-card">
                    <strong class="heading">{"Email Support"}</strong>
                    <a href={config::mailto_link()} class="support-email">{config::CONTACT_EMAIL}</a>
                </div>

                <div class="support-card">
                    <strong class="heading">{"Response Time"}</strong>
                    <p>{"We aim to respond to all inquiries within 24-48 hours."}</p>
                </div>

                <div class="support-card wide">
                    <strong class="heading">{"Address"}</strong>
                    <p>{format!("{}, {}.", config::BRAND, config::HEADQUARTERS)}</p>
                </div>
            </div>
        </>
    }
}
