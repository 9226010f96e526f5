#![cfg(target_arch = "wasm32")]

use player_app::{init_player, PlayerApp};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, HtmlMediaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

/// Append a fresh container with the given inner HTML and return its id.
fn container(id: &str, inner_html: &str) -> Element {
    let document = document();
    let host = document.create_element("div").expect("create div");
    host.set_id(id);
    host.set_inner_html(inner_html);
    document
        .body()
        .expect("body")
        .append_child(&host)
        .expect("append");
    host
}

fn mount(id: &str) -> Option<PlayerApp> {
    let config = format!(r##"{{"container_selector":"#{id}","locale":"en"}}"##);
    init_player(Some(config)).expect("init should not fail")
}

fn bars_after(host: &Element) -> usize {
    let mut count = 0;
    let mut sibling = host.next_element_sibling();
    while let Some(element) = sibling {
        if element.class_list().contains("player-controls") {
            count += 1;
        }
        sibling = element.next_element_sibling();
    }
    count
}

#[wasm_bindgen_test]
fn media_container_gets_full_bar() {
    let host = container("with-video", "<video></video>");
    let player = mount("with-video").expect("mounted");
    assert!(player.has_media());

    let bar = host.next_element_sibling().expect("bar inserted after container");
    assert!(bar.class_list().contains("player-controls"));
    assert_eq!(bar.query_selector_all("button").expect("buttons").length(), 5);
    assert!(bar
        .query_selector("input[type=range]")
        .expect("query")
        .is_some());
}

#[wasm_bindgen_test]
fn second_init_does_not_duplicate_bar() {
    let host = container("twice", "<video></video>");
    assert!(mount("twice").is_some());
    assert!(mount("twice").is_none());
    assert_eq!(bars_after(&host), 1);
}

#[wasm_bindgen_test]
fn embed_container_gets_fullscreen_only() {
    let host = container(
        "with-embed",
        r#"<iframe src="https://player.vimeo.com/video/1"></iframe>"#,
    );
    let player = mount("with-embed").expect("mounted");
    assert!(!player.has_media());

    let bar = host.next_element_sibling().expect("bar");
    assert_eq!(bar.query_selector_all("button").expect("buttons").length(), 1);
    assert_eq!(bar.text_content().as_deref().map(|t| t.contains("Vimeo")), Some(true));

    let frame = host.query_selector("iframe").expect("query").expect("iframe");
    assert!(frame.has_attribute("allowfullscreen"));

    assert!(!player.press_key("m"));
    assert!(player.get_state_json().is_none());
}

#[wasm_bindgen_test]
fn mute_key_updates_media_and_icon() {
    let host = container("mute-key", "<video></video>");
    let player = mount("mute-key").expect("mounted");

    assert!(player.press_key("m"));

    let video: HtmlMediaElement = host
        .query_selector("video")
        .expect("query")
        .expect("video")
        .unchecked_into();
    assert!(video.muted());
    let state = player.get_state_json().expect("state");
    assert!(state.contains(r#""muted":true"#));
}

#[wasm_bindgen_test]
fn missing_container_is_silent() {
    assert!(mount("does-not-exist").is_none());
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    assert!(init_player(Some(r#"{"volume_step":3.0}"#.to_string())).is_err());
}
