//! Property-based tests for the icon registry and step rendering.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated attribute sets.

use progress_step::core::StepState;
use progress_step::element::{render, Content, StepAttributes};
use progress_step::icons::{glyph_for, render_icon, IconOptions};
use progress_step::markup::{find_all, Element, Node};
use progress_step::{ProgressStep, Settings};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> StepState {
        match variant {
            0 => StepState::Queued,
            1 => StepState::Current,
            2 => StepState::Complete,
            _ => StepState::Invalid,
        }
    }
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[A-Za-z0-9 ]{1,16}".prop_map(Some),
    ]
}

prop_compose! {
    fn arbitrary_attributes()(
        disabled in any::<bool>(),
        icon_label in optional_text(),
        label_text in optional_text(),
        secondary_label_text in optional_text(),
        state in arbitrary_state(),
        vertical in any::<bool>(),
    ) -> StepAttributes {
        StepAttributes {
            disabled,
            icon_label,
            label_text,
            secondary_label_text,
            state,
            vertical,
        }
    }
}

fn slots(fragment: &[Node]) -> (Element, Element) {
    let slots = find_all(fragment, "slot");
    (slots[0].clone(), slots[1].clone())
}

proptest! {
    #[test]
    fn state_name_parses_back(state in arbitrary_state()) {
        prop_assert_eq!(state.as_str().parse::<StepState>(), Ok(state));
    }

    #[test]
    fn render_is_idempotent(attrs in arbitrary_attributes()) {
        let settings = Settings::default();
        let content = Content::new();
        let first = render(&attrs, &content, &settings);
        let second = render(&attrs, &content, &settings);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn icon_follows_state(attrs in arbitrary_attributes()) {
        let fragment = render(&attrs, &Content::new(), &Settings::default());
        let icon = fragment[0].as_element().unwrap();

        let expected: Vec<Option<&str>> =
            glyph_for(attrs.state).paths().iter().map(|d| Some(*d)).collect();
        let actual: Vec<Option<&str>> =
            icon.child_elements("path").map(|p| p.attr("d")).collect();
        prop_assert_eq!(actual, expected);

        prop_assert_eq!(icon.attr("class").is_some(), attrs.state.is_invalid());
    }

    #[test]
    fn title_present_iff_icon_label_non_empty(attrs in arbitrary_attributes()) {
        let fragment = render(&attrs, &Content::new(), &Settings::default());
        let icon = fragment[0].as_element().unwrap();
        let titles = icon.find_all("title");

        match attrs.icon_label.as_deref() {
            Some(label) if !label.is_empty() => {
                prop_assert_eq!(titles.len(), 1);
                prop_assert_eq!(titles[0].text_content(), label);
            }
            _ => prop_assert!(titles.is_empty()),
        }
    }

    #[test]
    fn secondary_paragraph_iff_text_non_empty(attrs in arbitrary_attributes()) {
        let fragment = render(&attrs, &Content::new(), &Settings::default());
        let (_, secondary) = slots(&fragment);
        let paragraphs = secondary.find_all("p");

        match attrs.secondary_label_text.as_deref() {
            Some(text) if !text.is_empty() => {
                prop_assert_eq!(paragraphs.len(), 1);
                prop_assert_eq!(paragraphs[0].text_content(), text);
            }
            _ => prop_assert!(paragraphs.is_empty()),
        }
    }

    #[test]
    fn primary_override_always_hides_label_paragraph(attrs in arbitrary_attributes()) {
        let content: Content = vec![Element::new("span").with_text("Custom").into()].into();
        let fragment = render(&attrs, &content, &Settings::default());
        let (label, _) = slots(&fragment);

        prop_assert!(label.find("p").is_none());
        prop_assert_eq!(label.text_content(), "Custom");
    }

    #[test]
    fn connector_line_is_always_last_and_empty(attrs in arbitrary_attributes()) {
        let fragment = render(&attrs, &Content::new(), &Settings::default());
        let line = fragment.last().and_then(Node::as_element).unwrap();

        prop_assert_eq!(line.tag.as_str(), "span");
        prop_assert!(line.children.is_empty());
    }

    #[test]
    fn aria_disabled_tracks_disabled(toggles in prop::collection::vec(any::<bool>(), 1..10)) {
        let mut step = ProgressStep::default();
        step.connect();

        for disabled in toggles {
            step.set_disabled(disabled);
            let expected = disabled.to_string();
            prop_assert_eq!(step.get_attribute("aria-disabled"), Some(expected));
        }
    }

    #[test]
    fn element_output_matches_pure_render(attrs in arbitrary_attributes()) {
        let mut step = ProgressStep::default();
        step.connect();
        step.set_disabled(attrs.disabled);
        step.set_state(attrs.state);
        step.set_vertical(attrs.vertical);
        if let Some(label) = &attrs.icon_label {
            step.set_icon_label(label.clone());
        }
        if let Some(text) = &attrs.label_text {
            step.set_label_text(text.clone());
        }
        if let Some(text) = &attrs.secondary_label_text {
            step.set_secondary_label_text(text.clone());
        }

        prop_assert_eq!(step.attributes(), &attrs);
        let expected = render(&attrs, &Content::new(), &Settings::default());
        prop_assert_eq!(step.rendered(), expected.as_slice());
    }

    #[test]
    fn icon_passthrough_attributes_reach_root(state in arbitrary_state(), width in 1u32..64) {
        let icon = render_icon(state, IconOptions::new().with_attr("width", width.to_string()));
        let expected = width.to_string();
        prop_assert_eq!(icon.attr("width"), Some(expected.as_str()));
    }
}
