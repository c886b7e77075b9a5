use super::build_integration_test;
use theme_swatch::{Effect, ThemeEvent};

#[test]
fn given_no_initial_effect_should_render_the_light_palette_once() {
    let test = build_integration_test().build();

    assert_eq!(test.renders.count(), 1);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].background_color, "#ddd");
        assert_eq!(renders[0].color, "#000");
    });
}

#[test]
fn given_an_initial_toggle_effect_when_processed_should_render_the_dark_palette() {
    let mut test = build_integration_test()
        .given_initial_effect(Effect::just(ThemeEvent::TogglePressed))
        .build();

    test.driver.process_events();

    assert_eq!(test.renders.count(), 2);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].background_color, "#ddd");
        assert_eq!(renders[1].background_color, "#444");
        assert_eq!(renders[1].color, "#fff");
    });
}

#[test]
fn given_a_props_callback_press_should_render_only_after_the_drain() {
    let mut test = build_integration_test().build();

    test.renders.with_renders(|renders| {
        (renders[0].on_toggle)();
    });

    // The press only enqueues; nothing renders until the turn is processed.
    assert_eq!(test.renders.count(), 1);

    test.driver.process_events();

    assert_eq!(test.renders.count(), 2);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[1].background_color, "#444");
        assert_eq!(renders[1].color, "#fff");
    });
}
