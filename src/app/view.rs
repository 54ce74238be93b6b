//! Application view rendering

use iced::widget::{Stack, container};
use iced::{Element, Fill};
use rand::rngs::StdRng;

use super::App;
use super::message::Message;
use crate::features::scene::{self, Scene};
use crate::ui::{primitives, theme};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let Scene { outline, layers } = self.compose_scene();

        // Rings overlay each other, first layer at the bottom
        let rings = layers
            .into_iter()
            .map(|layer| primitives::view_ring_layer(outline.clone(), layer));

        container(Stack::with_children(rings).width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::backdrop)
            .into()
    }

    /// Compose the current frame from each ring's config and rotation
    ///
    /// Colors of random rings are re-rolled on every call unless
    /// `colors.reroll_every_frame` is off.
    pub fn compose_scene(&self) -> Scene {
        let reroll = self.settings.colors.reroll_every_frame;
        let mut rngs: Vec<StdRng> = self
            .layers
            .iter()
            .map(|layer| layer.frame_rng(reroll))
            .collect();

        scene::compose(
            self.settings.shape.rect(),
            self.layers
                .iter()
                .zip(rngs.iter_mut())
                .map(|(layer, rng)| (&layer.config, layer.engine.current_degrees(), rng)),
        )
    }
}
