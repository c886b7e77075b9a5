use theme_swatch::{Effect, Emitter, StoreLogic, SwatchProps, Theme, ThemeEvent};

/// Demo logic with injectable effect dependencies, so tests can control what
/// gets enqueued at mount and on each toggle.
pub(crate) struct FixtureLogic {
    pub(crate) init_effects: Box<dyn InitEffectsDependency + Send>,
    pub(crate) toggle_effects: Box<dyn ToggleEffectsDependency + Send>,
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait InitEffectsDependency {
    fn on_mount(&self) -> Effect<ThemeEvent>;
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait ToggleEffectsDependency {
    fn on_toggle(&self) -> Effect<ThemeEvent>;
}

impl StoreLogic<ThemeEvent, Theme, SwatchProps> for FixtureLogic {
    fn init(&self, model: Theme) -> (Theme, Effect<ThemeEvent>) {
        (model, self.init_effects.on_mount())
    }

    fn update(&self, event: ThemeEvent, model: &Theme) -> (Theme, Effect<ThemeEvent>) {
        match event {
            ThemeEvent::TogglePressed => (model.toggled(), self.toggle_effects.on_toggle()),
        }
    }

    fn view(&self, model: &Theme, emitter: &Emitter<ThemeEvent>) -> SwatchProps {
        let emitter = emitter.clone();
        SwatchProps {
            background_color: model.background_color().into(),
            color: model.color().into(),
            on_toggle: Box::new(move || {
                emitter.emit(ThemeEvent::TogglePressed);
            }),
        }
    }
}
