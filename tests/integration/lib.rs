mod theme_logic;

use std::sync::Mutex;

use theme_swatch::{
    Effect, SwatchProps, TestRenderer, TestStoreDriver, TestStoreRuntime, Theme, ThemeEvent,
};
pub(crate) use theme_logic::*;

mod effect_tests;
mod toggle_tests;

pub(crate) struct IntegrationTest {
    pub(crate) driver: TestStoreDriver<ThemeEvent, Theme, SwatchProps, FixtureLogic, TestRenderer<SwatchProps>>,
    pub(crate) renders: TestRenderer<SwatchProps>,
}

pub(crate) struct IntegrationTestBuilder {
    initial_effect: Effect<ThemeEvent>,
    toggle_effect: Effect<ThemeEvent>,
}

pub(crate) fn build_integration_test() -> IntegrationTestBuilder {
    IntegrationTestBuilder {
        initial_effect: Effect::none(),
        toggle_effect: Effect::none(),
    }
}

impl IntegrationTestBuilder {
    pub(crate) fn given_initial_effect(mut self, effect: Effect<ThemeEvent>) -> Self {
        self.initial_effect = effect;
        self
    }

    pub(crate) fn given_toggle_side_effect(mut self, effect: Effect<ThemeEvent>) -> Self {
        self.toggle_effect = effect;
        self
    }

    pub(crate) fn build(self) -> IntegrationTest {
        let renderer = TestRenderer::new();

        let mut mock_init_effects = MockInitEffectsDependency::new();
        let initial_effect = self.initial_effect;
        mock_init_effects
            .expect_on_mount()
            .return_once(move || initial_effect);

        // The configured effect fires on the first toggle; later toggles get none.
        let toggle_effect = Mutex::new(Some(self.toggle_effect));
        let mut mock_toggle_effects = MockToggleEffectsDependency::new();
        mock_toggle_effects
            .expect_on_toggle()
            .returning(move || toggle_effect.lock().unwrap().take().unwrap_or_else(Effect::none));

        let logic = FixtureLogic {
            init_effects: Box::new(mock_init_effects),
            toggle_effects: Box::new(mock_toggle_effects),
        };

        let runtime = TestStoreRuntime::new(Theme::default(), logic, renderer.clone());
        let driver = runtime.run();

        IntegrationTest {
            driver,
            renders: renderer,
        }
    }
}
