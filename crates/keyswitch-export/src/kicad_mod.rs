//! KiCad 5 footprint (`.kicad_mod`) s-expression writer.

use keyswitch_footprint::node::{Attribute, Drill, Footprint, Model, Node, Pad, PadKind, PadShape, TextKind};
use keyswitch_geometry::Point;
use tracing::trace;

const TEXT_EFFECTS: &str = "(effects (font (size 1 1) (thickness 0.15)))";

/// Render `footprint` as a KiCad module. The edit timestamp is fixed to 0 so output is
/// reproducible.
#[must_use]
pub fn render_kicad_mod(footprint: &Footprint) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "(module {} (layer F.Cu) (tedit 0)\n",
        quote(&footprint.name)
    ));
    out.push_str(&format!("  (descr {})\n", quote_always(&footprint.description)));
    out.push_str(&format!("  (tags {})\n", quote_always(&footprint.tags)));
    match footprint.attribute {
        Some(Attribute::Smd) => out.push_str("  (attr smd)\n"),
        Some(Attribute::Virtual) => out.push_str("  (attr virtual)\n"),
        None => {}
    }
    for node in &footprint.nodes {
        render_node(&mut out, node);
    }
    out.push_str(")\n");
    trace!(footprint = %footprint.name, bytes = out.len(), "rendered kicad_mod");
    out
}

fn render_node(out: &mut String, node: &Node) {
    match node {
        Node::Text { kind, text, at, layer } => {
            let kind = match kind {
                TextKind::Reference => "reference",
                TextKind::Value => "value",
                TextKind::User => "user",
            };
            out.push_str(&format!(
                "  (fp_text {kind} {} (at {}) (layer {layer})\n    {TEXT_EFFECTS}\n  )\n",
                quote(text),
                fmt_point(*at)
            ));
        }
        Node::Line { start, end, layer, width } => line(out, *start, *end, layer, *width),
        Node::Arc {
            center,
            start,
            angle,
            layer,
            width,
        } => {
            out.push_str(&format!(
                "  (fp_arc (start {}) (end {}) (angle {}) (layer {layer}) (width {}))\n",
                fmt_point(*center),
                fmt_point(*start),
                fmt_num(*angle),
                fmt_num(*width)
            ));
        }
        Node::Rect { start, end, layer, width } => {
            let corners = [
                *start,
                Point::new(end.x, start.y),
                *end,
                Point::new(start.x, end.y),
                *start,
            ];
            for pair in corners.windows(2) {
                line(out, pair[0], pair[1], layer, *width);
            }
        }
        Node::Polyline { points, layer, width } => {
            for pair in points.windows(2) {
                line(out, pair[0], pair[1], layer, *width);
            }
        }
        Node::Pad(pad) => render_pad(out, pad),
        Node::Model(model) => render_model(out, model),
    }
}

fn line(out: &mut String, start: Point, end: Point, layer: &str, width: f64) {
    out.push_str(&format!(
        "  (fp_line (start {}) (end {}) (layer {layer}) (width {}))\n",
        fmt_point(start),
        fmt_point(end),
        fmt_num(width)
    ));
}

fn render_pad(out: &mut String, pad: &Pad) {
    let number = pad
        .number
        .map_or_else(|| "\"\"".to_string(), |n| n.to_string());
    let kind = match pad.kind {
        PadKind::ThroughHole => "thru_hole",
        PadKind::Smd => "smd",
        PadKind::NpThroughHole => "np_thru_hole",
    };
    let shape = match pad.shape {
        PadShape::Circle => "circle",
        PadShape::Oval => "oval",
        PadShape::Rect => "rect",
        PadShape::RoundRect => "roundrect",
    };

    let mut at = fmt_point(pad.at);
    if pad.rotation != 0.0 {
        at.push(' ');
        at.push_str(&fmt_num(pad.rotation));
    }

    let mut s = format!(
        "  (pad {number} {kind} {shape} (at {at}) (size {} {})",
        fmt_num(pad.size[0]),
        fmt_num(pad.size[1])
    );
    if let Some(drill) = pad.drill {
        let mut d = match drill {
            Drill::Round(dia) => fmt_num(dia),
            Drill::Oval(w, h) => format!("oval {} {}", fmt_num(w), fmt_num(h)),
        };
        if let Some(offset) = pad.drill_offset {
            d.push_str(&format!(" (offset {})", fmt_point(offset)));
        }
        s.push_str(&format!(" (drill {d})"));
    }
    s.push_str(&format!(" (layers {})", pad.layers.join(" ")));
    if let (PadShape::RoundRect, Some(radius)) = (pad.shape, pad.round_radius) {
        s.push_str(&format!(" (roundrect_rratio {})", fmt_num(roundrect_ratio(pad.size, radius))));
    }
    s.push_str(")\n");
    out.push_str(&s);
}

/// KiCad stores round-rect corners as a ratio of the smaller pad side, at most 0.5.
fn roundrect_ratio(size: [f64; 2], radius: f64) -> f64 {
    let shortest = size[0].min(size[1]);
    if shortest <= 0.0 {
        return 0.0;
    }
    (radius / shortest).min(0.5)
}

fn render_model(out: &mut String, model: &Model) {
    let xyz = |v: [f64; 3]| format!("(xyz {} {} {})", fmt_num(v[0]), fmt_num(v[1]), fmt_num(v[2]));
    out.push_str(&format!(
        "  (model {}\n    (at {})\n    (scale {})\n    (rotate {})\n  )\n",
        quote(&model.path),
        xyz(model.at),
        xyz(model.scale),
        xyz(model.rotate)
    ));
}

fn fmt_point(p: Point) -> String {
    format!("{} {}", fmt_num(p.x), fmt_num(p.y))
}

/// Fixed 6-decimal rendering with trailing zeros removed; `-0` prints as `0`.
#[must_use]
pub fn fmt_num(v: f64) -> String {
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty() || s.chars().any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '"'))
}

fn quote(s: &str) -> String {
    if needs_quotes(s) {
        quote_always(s)
    } else {
        s.to_string()
    }
}

fn quote_always(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyswitch_footprint::node::layer;

    #[test]
    fn numbers_trim_and_clamp_negative_zero() {
        assert_eq!(fmt_num(7.0), "7");
        assert_eq!(fmt_num(-7.25), "-7.25");
        assert_eq!(fmt_num(0.980778), "0.980778");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-1e-9), "0");
        assert_eq!(fmt_num(7.1000000000000005), "7.1");
        assert_eq!(fmt_num(12.0), "12");
    }

    #[test]
    fn quotes_only_when_needed() {
        assert_eq!(quote("REF**"), "REF**");
        assert_eq!(quote("a b"), "\"a b\"");
        assert_eq!(quote(""), "\"\"");
        assert_eq!(quote_always("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn roundrect_ratio_is_capped() {
        assert_eq!(roundrect_ratio([2.5, 2.5], 0.25), 0.1);
        assert_eq!(roundrect_ratio([1.0, 2.0], 0.75), 0.5);
    }

    #[test]
    fn rect_expands_to_four_lines() {
        let mut fp = Footprint::new("T", "d", "t");
        fp.shapes().rect(
            Point::new(-1.0, -2.0),
            Point::new(1.0, 2.0),
            layer::F_FAB,
            0.1,
        );
        let out = render_kicad_mod(&fp);
        let lines: Vec<_> = out.lines().filter(|l| l.contains("fp_line")).collect();
        assert_eq!(
            lines,
            [
                "  (fp_line (start -1 -2) (end 1 -2) (layer F.Fab) (width 0.1))",
                "  (fp_line (start 1 -2) (end 1 2) (layer F.Fab) (width 0.1))",
                "  (fp_line (start 1 2) (end -1 2) (layer F.Fab) (width 0.1))",
                "  (fp_line (start -1 2) (end -1 -2) (layer F.Fab) (width 0.1))",
            ]
        );
    }

    #[test]
    fn pads_render_drill_offset_rotation_and_ratio() {
        let mut fp = Footprint::new("T", "d", "t");
        fp.shapes()
            .pad(
                Pad::tht_oval(1, Point::new(-3.81, -2.54), [4.46156, 2.5], Drill::Round(1.5))
                    .rotated(48.0)
                    .with_drill_offset(Point::new(0.980778, 0.0)),
            )
            .pad(Pad::npth_oval(Point::new(1.0, 0.0), [1.2, 1.6], [0.8, 1.2]))
            .pad(Pad::smd_roundrect(
                Some(2),
                Point::new(5.842, -5.08),
                [2.55, 2.5],
                0.25,
                &[layer::B_CU, layer::B_MASK, layer::B_PASTE],
            ));
        let out = render_kicad_mod(&fp);
        assert!(out.contains(
            "  (pad 1 thru_hole oval (at -3.81 -2.54 48) (size 4.46156 2.5) (drill 1.5 (offset 0.980778 0)) (layers *.Cu B.Mask))\n"
        ));
        assert!(out.contains(
            "  (pad \"\" np_thru_hole oval (at 1 0) (size 1.2 1.6) (drill oval 0.8 1.2) (layers *.Cu *.Mask))\n"
        ));
        assert!(out.contains(
            "  (pad 2 smd roundrect (at 5.842 -5.08) (size 2.55 2.5) (layers B.Cu B.Mask B.Paste) (roundrect_rratio 0.1))\n"
        ));
    }

    #[test]
    fn header_and_attribute() {
        let mut fp = Footprint::new("SW_Test", "Test switch", "Test Keyswitch");
        fp.set_attribute(Attribute::Virtual);
        let out = render_kicad_mod(&fp);
        assert_eq!(
            out,
            "(module SW_Test (layer F.Cu) (tedit 0)\n  (descr \"Test switch\")\n  (tags \"Test Keyswitch\")\n  (attr virtual)\n)\n"
        );
    }
}
