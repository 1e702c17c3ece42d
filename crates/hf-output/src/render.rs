//! Draws one simulator frame onto any [`Canvas`].

use hf_agent::Agent;
use hf_sim::Simulator;

use crate::{Canvas, Color};

/// How much agent fills are lightened and centre dots darkened.
const SHADE_RATIO: f64 = 0.5;

/// Radius of the dot marking each agent's centre.
const CENTRE_DOT_RADIUS: f64 = 1.0;

/// Colors used for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub surface_color:            Color,
    pub hornet_color:             Color,
    pub traveler_color:           Color,
    pub traveler_collision_color: Color,
}

impl RenderConfig {
    /// The surface is `field_color` lightened, so a black field renders gray.
    pub fn new(
        field_color:              Color,
        hornet_color:             Color,
        traveler_color:           Color,
        traveler_collision_color: Color,
    ) -> Self {
        Self {
            surface_color: field_color.lighten(SHADE_RATIO),
            hornet_color,
            traveler_color,
            traveler_collision_color,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(
            Color::BLACK,
            Color::new(255, 255, 0),
            Color::new(0, 0, 255),
            Color::new(255, 0, 0),
        )
    }
}

/// Stateless frame painter.
#[derive(Clone, Debug, Default)]
pub struct FrameRenderer {
    pub config: RenderConfig,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The traveler's color for the current cached collision state.
    pub fn traveler_color(&self, sim: &Simulator) -> Color {
        if sim.colliding_hornets().is_empty() {
            self.config.traveler_color
        } else {
            self.config.traveler_collision_color
        }
    }

    /// Clear `canvas` and draw the traveler, then every hornet on top.
    ///
    /// Uses the simulator's cached colliding set, so call it after `tick` (or
    /// after `collision`) for an up-to-date traveler color.
    pub fn draw<C: Canvas>(&self, sim: &Simulator, canvas: &mut C) {
        canvas.fill(self.config.surface_color);
        draw_agent(canvas, sim.traveler(), self.traveler_color(sim));
        for hornet in sim.hornets() {
            draw_agent(canvas, hornet, self.config.hornet_color);
        }
    }
}

fn draw_agent<C: Canvas>(canvas: &mut C, agent: &Agent, color: Color) {
    canvas.draw_circle(agent.position, agent.radius(), color.lighten(SHADE_RATIO));
    canvas.draw_circle(agent.position, CENTRE_DOT_RADIUS, color.darken(SHADE_RATIO));
}
