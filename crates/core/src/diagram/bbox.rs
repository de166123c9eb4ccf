// Feature geometry - computes bounding boxes from element attributes,
// standing in for a renderer's native bounding-box query.

use std::sync::LazyLock;

use regex::Regex;
use xmltree::{Element, XMLNode};

/// Axis-aligned bounding box in diagram user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn union(self, other: BBox) -> BBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);
        BBox {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }

    fn from_points(points: &[(f64, f64)]) -> Option<BBox> {
        let (&(mut min_x, mut min_y), rest) = points.split_first()?;
        let (mut max_x, mut max_y) = (min_x, min_y);
        for &(x, y) in rest {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Some(BBox {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }
}

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").expect("invalid number regex")
});

static PATH_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]|-?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?")
        .expect("invalid path token regex")
});

/// Computes an element's bounding box from its geometry attributes.
/// Containers take the union of their children; `transform` attributes
/// are not interpreted. `None` means no computable geometry.
pub fn element_bbox(element: &Element) -> Option<BBox> {
    match element.name.as_str() {
        "rect" | "image" => {
            let width = attr_f64(element, "width")?;
            let height = attr_f64(element, "height")?;
            let x = attr_f64(element, "x").unwrap_or(0.0);
            let y = attr_f64(element, "y").unwrap_or(0.0);
            Some(BBox {
                x,
                y,
                width,
                height,
            })
        }
        "circle" => {
            let r = attr_f64(element, "r")?;
            let cx = attr_f64(element, "cx").unwrap_or(0.0);
            let cy = attr_f64(element, "cy").unwrap_or(0.0);
            Some(BBox {
                x: cx - r,
                y: cy - r,
                width: 2.0 * r,
                height: 2.0 * r,
            })
        }
        "ellipse" => {
            let rx = attr_f64(element, "rx")?;
            let ry = attr_f64(element, "ry")?;
            let cx = attr_f64(element, "cx").unwrap_or(0.0);
            let cy = attr_f64(element, "cy").unwrap_or(0.0);
            Some(BBox {
                x: cx - rx,
                y: cy - ry,
                width: 2.0 * rx,
                height: 2.0 * ry,
            })
        }
        "line" => {
            let x1 = attr_f64(element, "x1").unwrap_or(0.0);
            let y1 = attr_f64(element, "y1").unwrap_or(0.0);
            let x2 = attr_f64(element, "x2").unwrap_or(0.0);
            let y2 = attr_f64(element, "y2").unwrap_or(0.0);
            BBox::from_points(&[(x1, y1), (x2, y2)])
        }
        "polygon" | "polyline" => points_bbox(element.attributes.get("points")?),
        "path" => path_bbox(element.attributes.get("d")?),
        _ => element
            .children
            .iter()
            .filter_map(|node| match node {
                XMLNode::Element(child) => element_bbox(child),
                _ => None,
            })
            .reduce(BBox::union),
    }
}

fn attr_f64(element: &Element, name: &str) -> Option<f64> {
    element
        .attributes
        .get(name)
        .and_then(|value| value.trim().parse().ok())
}

fn points_bbox(points_attr: &str) -> Option<BBox> {
    let coords: Vec<f64> = NUMBER_PATTERN
        .find_iter(points_attr)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    let pairs: Vec<(f64, f64)> = coords.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();
    BBox::from_points(&pairs)
}

#[derive(Debug, Clone, Copy)]
enum PathToken {
    Command(char),
    Number(f64),
}

/// Bounding box of a path's anchor and control points. Curve extrema
/// can overshoot slightly; that error is well inside the overlay
/// padding this feeds.
fn path_bbox(d: &str) -> Option<BBox> {
    let tokens: Vec<PathToken> = PATH_TOKEN_PATTERN
        .find_iter(d)
        .filter_map(|m| {
            let text = m.as_str();
            match text.parse::<f64>() {
                Ok(number) => Some(PathToken::Number(number)),
                Err(_) => text.chars().next().map(PathToken::Command),
            }
        })
        .collect();

    let mut points: Vec<(f64, f64)> = Vec::new();
    let mut current = (0.0_f64, 0.0_f64);
    let mut subpath_start = (0.0_f64, 0.0_f64);
    let mut command: Option<char> = None;
    let mut i = 0;

    while i < tokens.len() {
        if let PathToken::Command(c) = tokens[i] {
            command = Some(c);
            i += 1;
            if c.eq_ignore_ascii_case(&'z') {
                current = subpath_start;
                continue;
            }
        }

        let c = command?;
        let relative = c.is_ascii_lowercase();
        let arity = match c.to_ascii_lowercase() {
            'm' | 'l' | 't' => 2,
            'h' | 'v' => 1,
            'c' => 6,
            's' | 'q' => 4,
            'a' => 7,
            _ => break,
        };

        if i + arity > tokens.len() {
            break;
        }
        let mut args = [0.0_f64; 7];
        let mut numeric = true;
        for (slot, token) in args.iter_mut().zip(&tokens[i..i + arity]) {
            match token {
                PathToken::Number(number) => *slot = *number,
                PathToken::Command(_) => {
                    numeric = false;
                    break;
                }
            }
        }
        if !numeric {
            break;
        }
        i += arity;

        match c.to_ascii_lowercase() {
            'm' | 'l' | 't' => {
                let mut point = (args[0], args[1]);
                if relative {
                    point = (current.0 + point.0, current.1 + point.1);
                }
                current = point;
                points.push(point);
                if c.eq_ignore_ascii_case(&'m') {
                    subpath_start = point;
                    // Coordinate pairs after a move are implicit line-tos.
                    command = Some(if relative { 'l' } else { 'L' });
                }
            }
            'h' => {
                let x = if relative { current.0 + args[0] } else { args[0] };
                current = (x, current.1);
                points.push(current);
            }
            'v' => {
                let y = if relative { current.1 + args[0] } else { args[0] };
                current = (current.0, y);
                points.push(current);
            }
            'c' => {
                for pair in 0..3 {
                    let mut point = (args[2 * pair], args[2 * pair + 1]);
                    if relative {
                        point = (current.0 + point.0, current.1 + point.1);
                    }
                    points.push(point);
                    if pair == 2 {
                        current = point;
                    }
                }
            }
            's' | 'q' => {
                for pair in 0..2 {
                    let mut point = (args[2 * pair], args[2 * pair + 1]);
                    if relative {
                        point = (current.0 + point.0, current.1 + point.1);
                    }
                    points.push(point);
                    if pair == 1 {
                        current = point;
                    }
                }
            }
            'a' => {
                let mut point = (args[5], args[6]);
                if relative {
                    point = (current.0 + point.0, current.1 + point.1);
                }
                current = point;
                points.push(point);
            }
            _ => break,
        }
    }

    BBox::from_points(&points)
}
