// Host-side tests for accordion, reveal and routing state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod accordion {
    include!("../src/state/accordion.rs");
}
mod navigation {
    include!("../src/state/navigation.rs");
}
mod reveal {
    include!("../src/state/reveal.rs");
}

use std::cell::RefCell;
use std::rc::Rc;

use accordion::{AccordionSelection, DeepLinkedSelection};
use navigation::*;
use reveal::{RevealLatch, RevealOutcome};

#[test]
fn at_most_one_entry_is_open() {
    let mut selection = AccordionSelection::opened(0);
    for index in [3, 1, 1, 4, 0, 2] {
        selection.toggle(index);
        let open = (0..7).filter(|&i| selection.is_open(i)).count();
        assert!(open <= 1);
    }
}

#[test]
fn faq_click_sequence() {
    // FAQ starts with the first answer expanded.
    let mut selection = AccordionSelection::opened(0);
    selection.toggle(2);
    assert_eq!(selection.selected(), Some(2));
    selection.toggle(2);
    assert_eq!(selection.selected(), None);
    selection.toggle(0);
    assert_eq!(selection.selected(), Some(0));
}

#[test]
fn legal_deep_link_opens_requested_section() {
    for topic in LegalTopic::ALL {
        let route = RouteState::legal(topic.section());
        let selection = AccordionSelection::opened_within(route.legal_section, LegalTopic::ALL.len());
        assert_eq!(selection.selected(), Some(topic.section()));
    }
}

#[test]
fn legal_deep_link_past_the_end_opens_nothing() {
    let selection = AccordionSelection::opened_within(9, LegalTopic::ALL.len());
    assert_eq!(selection, AccordionSelection::closed());
}

#[test]
fn refund_link_from_footer() {
    let mut route = RouteState::home();
    route.navigate(Page::Legal, LegalTopic::RefundPolicy.section());
    assert_eq!(route, RouteState::legal(2));
}

#[test]
fn reveal_fires_once_and_never_reverts() {
    let mut latch = RevealLatch::new();
    let outcomes: Vec<_> = [false, false, true, false, true]
        .into_iter()
        .map(|intersecting| latch.observe(intersecting))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            RevealOutcome::Pending,
            RevealOutcome::Pending,
            RevealOutcome::Revealed,
            RevealOutcome::Settled,
            RevealOutcome::Settled,
        ]
    );
    assert!(latch.is_visible());
}

#[test]
fn navbar_anchor_from_legal_switches_home_first() {
    for (_, anchor) in NAV_LINKS {
        assert_eq!(
            plan_anchor_navigation(Page::Legal, anchor),
            AnchorPlan::SwitchHomeThenScroll(anchor.to_string())
        );
        assert_eq!(
            plan_anchor_navigation(Page::Home, anchor),
            AnchorPlan::ScrollNow(anchor.to_string())
        );
    }
}

#[test]
fn navbar_anchors_are_fragment_selectors() {
    for (label, anchor) in NAV_LINKS {
        assert!(!label.is_empty());
        assert!(anchor.starts_with('#'));
    }
}

#[test]
fn legal_page_opens_exactly_the_linked_section() {
    for k in 0..LegalTopic::ALL.len() {
        let selection = DeepLinkedSelection::new(k, LegalTopic::ALL.len());
        assert_eq!(selection.selected(), Some(k));
    }
}

#[test]
fn following_another_legal_link_overrides_what_the_user_opened() {
    let len = LegalTopic::ALL.len();
    let mut selection = DeepLinkedSelection::new(LegalTopic::PrivacyPolicy.section(), len);

    // User opens Support by hand, then re-renders with the same link.
    selection.choose(Some(LegalTopic::CustomerSupport.section()));
    assert!(!selection.follow(LegalTopic::PrivacyPolicy.section()));
    assert_eq!(selection.selected(), Some(3));

    // Footer sends them to Refund.
    assert!(selection.follow(LegalTopic::RefundPolicy.section()));
    assert_eq!(selection.selected(), Some(2));
}

#[derive(Debug, Clone, PartialEq)]
enum HostEvent {
    Home,
    Deferred(u32),
    Scrolled(String),
}

/// Records host calls and holds deferred work until the test releases it.
#[derive(Clone, Default)]
struct ScriptedHost {
    events: Rc<RefCell<Vec<HostEvent>>>,
    timers: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
}

impl ScriptedHost {
    fn fire_timers(&self) {
        let due: Vec<_> = self.timers.borrow_mut().drain(..).collect();
        for task in due {
            task();
        }
    }

    fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }
}

impl AnchorHost for ScriptedHost {
    fn show_home(&self) {
        self.events.borrow_mut().push(HostEvent::Home);
    }

    fn scroll_to(&self, anchor: &str) {
        self.events.borrow_mut().push(HostEvent::Scrolled(anchor.to_string()));
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.events.borrow_mut().push(HostEvent::Deferred(delay_ms));
        self.timers.borrow_mut().push(task);
    }
}

#[test]
fn anchor_from_legal_switches_home_then_scrolls_after_the_delay() {
    let host = ScriptedHost::default();
    follow_anchor(&host, Page::Legal, "#faq", 100);
    assert_eq!(host.events(), vec![HostEvent::Home, HostEvent::Deferred(100)]);

    host.fire_timers();
    assert_eq!(
        host.events(),
        vec![
            HostEvent::Home,
            HostEvent::Deferred(100),
            HostEvent::Scrolled("#faq".into()),
        ]
    );
}

#[test]
fn anchor_on_home_scrolls_without_switching() {
    let host = ScriptedHost::default();
    follow_anchor(&host, Page::Home, "#contact", 100);
    assert_eq!(host.events(), vec![HostEvent::Scrolled("#contact".into())]);
    assert!(host.timers.borrow().is_empty());
}
