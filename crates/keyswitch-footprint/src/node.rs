//! Footprint node model.
//!
//! A [`Footprint`] is an identity plus an ordered list of [`Node`]s. Nodes are appended in call
//! order and serialized in that order.

use keyswitch_geometry::Point;

use crate::shapes::ShapeBuilder;

/// KiCad layer names used by the library.
pub mod layer {
    pub const F_FAB: &str = "F.Fab";
    pub const F_SILKS: &str = "F.SilkS";
    pub const F_CRTYD: &str = "F.CrtYd";
    pub const B_FAB: &str = "B.Fab";
    pub const B_SILKS: &str = "B.SilkS";
    pub const B_CRTYD: &str = "B.CrtYd";
    pub const B_CU: &str = "B.Cu";
    pub const B_MASK: &str = "B.Mask";
    pub const B_PASTE: &str = "B.Paste";
    pub const ALL_CU: &str = "*.Cu";
    pub const ALL_MASK: &str = "*.Mask";
    pub const ECO1_USER: &str = "Eco1.User";
    pub const DWGS_USER: &str = "Dwgs.User";
    pub const EDGE_CUTS: &str = "Edge.Cuts";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Smd,
    Virtual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Reference,
    Value,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKind {
    ThroughHole,
    Smd,
    NpThroughHole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadShape {
    Circle,
    Oval,
    Rect,
    RoundRect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drill {
    Round(f64),
    Oval(f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    /// `None` for unnumbered (mechanical) pads.
    pub number: Option<u32>,
    pub kind: PadKind,
    pub shape: PadShape,
    pub at: Point,
    /// Degrees.
    pub rotation: f64,
    pub size: [f64; 2],
    pub drill: Option<Drill>,
    pub drill_offset: Option<Point>,
    pub layers: Vec<&'static str>,
    /// Exact corner radius for [`PadShape::RoundRect`].
    pub round_radius: Option<f64>,
}

impl Pad {
    /// Plated round hole, soldered from the back.
    #[must_use]
    pub fn tht_circle(number: Option<u32>, at: Point, size: f64, drill: f64) -> Self {
        Self {
            number,
            kind: PadKind::ThroughHole,
            shape: PadShape::Circle,
            at,
            rotation: 0.0,
            size: [size, size],
            drill: Some(Drill::Round(drill)),
            drill_offset: None,
            layers: vec![layer::ALL_CU, layer::B_MASK],
            round_radius: None,
        }
    }

    /// Plated oval pad with a round or slotted drill.
    #[must_use]
    pub fn tht_oval(number: u32, at: Point, size: [f64; 2], drill: Drill) -> Self {
        Self {
            number: Some(number),
            kind: PadKind::ThroughHole,
            shape: PadShape::Oval,
            at,
            rotation: 0.0,
            size,
            drill: Some(drill),
            drill_offset: None,
            layers: vec![layer::ALL_CU, layer::B_MASK],
            round_radius: None,
        }
    }

    /// Unplated mounting hole: pad and drill share the diameter.
    #[must_use]
    pub fn npth_circle(at: Point, diameter: f64) -> Self {
        Self {
            number: None,
            kind: PadKind::NpThroughHole,
            shape: PadShape::Circle,
            at,
            rotation: 0.0,
            size: [diameter, diameter],
            drill: Some(Drill::Round(diameter)),
            drill_offset: None,
            layers: vec![layer::ALL_CU, layer::ALL_MASK],
            round_radius: None,
        }
    }

    /// Unplated slot.
    #[must_use]
    pub fn npth_oval(at: Point, size: [f64; 2], drill: [f64; 2]) -> Self {
        Self {
            shape: PadShape::Oval,
            size,
            drill: Some(Drill::Oval(drill[0], drill[1])),
            ..Self::npth_circle(at, size[0])
        }
    }

    /// Surface-mount rounded rectangle with an exact corner radius.
    #[must_use]
    pub fn smd_roundrect(
        number: Option<u32>,
        at: Point,
        size: [f64; 2],
        radius: f64,
        layers: &[&'static str],
    ) -> Self {
        Self {
            number,
            kind: PadKind::Smd,
            shape: PadShape::RoundRect,
            at,
            rotation: 0.0,
            size,
            drill: None,
            drill_offset: None,
            layers: layers.to_vec(),
            round_radius: Some(radius),
        }
    }

    #[must_use]
    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_drill_offset(mut self, offset: Point) -> Self {
        self.drill_offset = Some(offset);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub path: String,
    pub at: [f64; 3],
    pub scale: [f64; 3],
    pub rotate: [f64; 3],
}

impl Model {
    /// Model placed at the footprint origin, unscaled and unrotated.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            at: [0.0; 3],
            scale: [1.0; 3],
            rotate: [0.0; 3],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text {
        kind: TextKind,
        text: String,
        at: Point,
        layer: &'static str,
    },
    Line {
        start: Point,
        end: Point,
        layer: &'static str,
        width: f64,
    },
    /// Arc around `center`, starting at `start` and sweeping `angle` degrees.
    Arc {
        center: Point,
        start: Point,
        angle: f64,
        layer: &'static str,
        width: f64,
    },
    /// Axis-aligned rectangle outline spanned by two corners.
    Rect {
        start: Point,
        end: Point,
        layer: &'static str,
        width: f64,
    },
    /// Open chain of line segments; closed outlines repeat their first point.
    Polyline {
        points: Vec<Point>,
        layer: &'static str,
        width: f64,
    },
    Pad(Pad),
    Model(Model),
}

impl Node {
    /// Layer of a drawing node; pads and models span several layers and return `None`.
    #[must_use]
    pub fn layer(&self) -> Option<&'static str> {
        match self {
            Node::Text { layer, .. }
            | Node::Line { layer, .. }
            | Node::Arc { layer, .. }
            | Node::Rect { layer, .. }
            | Node::Polyline { layer, .. } => Some(layer),
            Node::Pad(_) | Node::Model(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub attribute: Option<Attribute>,
    pub nodes: Vec<Node>,
}

impl Footprint {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tags: tags.into(),
            attribute: None,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn set_attribute(&mut self, attribute: Attribute) -> &mut Self {
        self.attribute = Some(attribute);
        self
    }

    /// Shared shape behaviors appending onto this footprint.
    pub fn shapes(&mut self) -> ShapeBuilder<'_> {
        ShapeBuilder::new(self)
    }

    pub fn pads(&self) -> impl Iterator<Item = &Pad> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Pad(p) => Some(p),
            _ => None,
        })
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Model(m) => Some(m),
            _ => None,
        })
    }

    pub fn nodes_on<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.layer() == Some(layer))
    }
}
