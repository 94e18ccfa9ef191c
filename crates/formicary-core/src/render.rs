//! What a presentation layer needs to draw the colony, and nothing more.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::ant::Ant;
use crate::colony::Nest;
use crate::snack::Snack;
use crate::trail::Trail;

/// Clear colour behind the colony.
pub const BACKGROUND_RGB: [u8; 3] = [22, 22, 22];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum RenderClass {
    Nest = 0,
    Ant = 1,
    Snack = 2,
    Trail = 3,
}

impl RenderClass {
    pub fn color_name(self) -> &'static str {
        match self {
            RenderClass::Nest => "green",
            RenderClass::Ant => "red",
            RenderClass::Snack | RenderClass::Trail => "yellow",
        }
    }

    pub fn color(self) -> Vec4 {
        match self {
            RenderClass::Nest => Vec4::new(0.0, 0.5, 0.0, 1.0),
            RenderClass::Ant => Vec4::new(1.0, 0.0, 0.0, 1.0),
            RenderClass::Snack | RenderClass::Trail => Vec4::new(1.0, 1.0, 0.0, 1.0),
        }
    }
}

/// Anything drawn as a square centred on its position.
pub trait Renderable {
    fn position(&self) -> Vec2;
    fn render_size(&self) -> f32;
    fn render_class(&self) -> RenderClass;

    fn instance(&self) -> RenderInstance {
        RenderInstance {
            center: self.position().to_array(),
            size: self.render_size(),
            class: self.render_class() as u32,
        }
    }
}

/// Per-entity record laid out for direct upload into an instance buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub center: [f32; 2],
    pub size: f32,
    pub class: u32,
}

impl Renderable for Nest {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn render_size(&self) -> f32 {
        self.size
    }
    fn render_class(&self) -> RenderClass {
        RenderClass::Nest
    }
}

impl Renderable for Ant {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn render_size(&self) -> f32 {
        self.size
    }
    fn render_class(&self) -> RenderClass {
        RenderClass::Ant
    }
}

/// Snack and trail footprints live in the colony config, so these wrap the
/// entity with the size to draw it at.
pub struct Footprint<'a, T> {
    pub entity: &'a T,
    pub size: f32,
}

impl Renderable for Footprint<'_, Snack> {
    fn position(&self) -> Vec2 {
        self.entity.pos
    }
    fn render_size(&self) -> f32 {
        self.size
    }
    fn render_class(&self) -> RenderClass {
        RenderClass::Snack
    }
}

impl Renderable for Footprint<'_, Trail> {
    fn position(&self) -> Vec2 {
        self.entity.pos
    }
    fn render_size(&self) -> f32 {
        self.size
    }
    fn render_class(&self) -> RenderClass {
        RenderClass::Trail
    }
}
