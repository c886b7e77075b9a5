use super::build_integration_test;
use theme_swatch::{Effect, ThemeEvent};

#[test]
fn given_a_batch_of_three_toggles_should_render_four_times_alternating() {
    let mut test = build_integration_test()
        .given_initial_effect(Effect::batch(vec![
            Effect::just(ThemeEvent::TogglePressed),
            Effect::just(ThemeEvent::TogglePressed),
            Effect::just(ThemeEvent::TogglePressed),
        ]))
        .build();

    test.driver.process_events();

    // Initial render plus one per toggle, alternating palettes
    assert_eq!(test.renders.count(), 4);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].background_color, "#ddd");
        assert_eq!(renders[1].background_color, "#444");
        assert_eq!(renders[2].background_color, "#ddd");
        assert_eq!(renders[3].background_color, "#444");
    });
}

#[test]
fn given_a_toggle_side_effect_should_process_the_follow_up_event() {
    let mut test = build_integration_test()
        .given_toggle_side_effect(Effect::just(ThemeEvent::TogglePressed))
        .build();

    test.renders.with_renders(|renders| {
        (renders[0].on_toggle)();
    });

    test.driver.process_events();

    // The pressed toggle renders dark, its side effect toggles straight back
    assert_eq!(test.renders.count(), 3);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].background_color, "#ddd");
        assert_eq!(renders[1].background_color, "#444");
        assert_eq!(renders[2].background_color, "#ddd");
    });
}
