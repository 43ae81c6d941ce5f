//! SVG document assembly and serialization

use indexmap::map::Entry;
use indexmap::IndexMap;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::SerializeError;
use crate::geometry::{BoundingBox, Vec2};
use crate::scene::SceneObject;

use super::color::color_to_hex;
use super::path::{build_spline_path, to_path_data};
use super::ExportSettings;

/// Declaration written in front of every document
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" ?>"#;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// The host is Y-up, SVG is Y-down
const FLIP_Y: &str = "scale(1 -1)";

/// One `<path>` element: every spline of an object sharing a material
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    pub id: String,
    pub transform: String,
    pub style: Option<String>,
    pub d: String,
}

/// An SVG document under construction
#[derive(Debug)]
pub struct SvgDocument {
    precision: u32,
    bounds: BoundingBox,
    /// Keyed by (object position, material index), in first-seen order
    paths: IndexMap<(usize, usize), PathElement>,
    objects: usize,
}

impl SvgDocument {
    pub fn new(settings: &ExportSettings) -> Self {
        let bounds = if settings.include_origin {
            BoundingBox::at_origin()
        } else {
            BoundingBox::empty()
        };
        Self {
            precision: settings.precision,
            bounds,
            paths: IndexMap::new(),
            objects: 0,
        }
    }

    /// Add every spline of `obj`, merging splines that share a material
    pub fn add_object(&mut self, obj: &SceneObject) {
        let object_key = self.objects;
        self.objects += 1;

        let origin = obj.location.rounded(self.precision);
        log::debug!(
            "adding '{}' with {} splines at {},{}",
            obj.name,
            obj.splines.len(),
            origin.x,
            origin.y
        );

        for spline in &obj.splines {
            let commands = build_spline_path(spline, origin, self.precision, &mut self.bounds);
            let d = to_path_data(&commands);

            let material_index = spline.material_index;
            match self.paths.entry((object_key, material_index)) {
                Entry::Occupied(mut entry) => {
                    let element = entry.get_mut();
                    if !d.is_empty() {
                        if !element.d.is_empty() {
                            element.d.push(' ');
                        }
                        element.d.push_str(&d);
                    }
                }
                Entry::Vacant(entry) => {
                    let style = obj
                        .material(material_index)
                        .map(|m| format!("fill: {};", color_to_hex(m.diffuse_color)));
                    entry.insert(PathElement {
                        id: obj.name.clone(),
                        transform: translate(origin),
                        style,
                        d,
                    });
                }
            }
        }
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Path elements in document order
    pub fn paths(&self) -> impl Iterator<Item = &PathElement> {
        self.paths.values()
    }

    /// The root `viewBox` attribute value
    pub fn view_box(&self) -> String {
        self.bounds
            .view_box()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize the document.
    ///
    /// The minified form is the declaration followed by the tree on one
    /// line. The pretty form reads that tree back and writes it again with
    /// two-space indentation.
    pub fn to_xml(&self, minify: bool) -> Result<String, SerializeError> {
        let tree = self.write_tree()?;
        if minify {
            Ok(format!("{}{}", XML_DECLARATION, tree))
        } else {
            Ok(format!("{}\n{}\n", XML_DECLARATION, prettify(&tree)?))
        }
    }

    fn write_tree(&self) -> Result<String, SerializeError> {
        let mut writer = Writer::new(Vec::new());

        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", SVG_NAMESPACE));
        svg.push_attribute(("version", "1.1"));
        svg.push_attribute(("viewBox", self.view_box().as_str()));
        writer.write_event(Event::Start(svg))?;

        let generator = format!(
            "Generated by {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        writer.write_event(Event::Comment(BytesText::from_escaped(generator)))?;

        let mut group = BytesStart::new("g");
        group.push_attribute(("transform", FLIP_Y));
        if self.paths.is_empty() {
            writer.write_event(Event::Empty(group))?;
        } else {
            writer.write_event(Event::Start(group))?;
            for element in self.paths() {
                let mut path = BytesStart::new("path");
                path.push_attribute(("id", element.id.as_str()));
                path.push_attribute(("transform", element.transform.as_str()));
                if let Some(style) = &element.style {
                    path.push_attribute(("style", style.as_str()));
                }
                path.push_attribute(("d", element.d.as_str()));
                writer.write_event(Event::Empty(path))?;
            }
            writer.write_event(Event::End(BytesEnd::new("g")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg")))?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

fn translate(origin: Vec2) -> String {
    format!("translate({} {})", origin.x, origin.y)
}

/// Re-indent an XML fragment with two spaces per level.
///
/// Declarations in the input are dropped; callers write their own.
pub fn prettify(xml: &str) -> Result<String, SerializeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Decl(_) => {}
            event => writer.write_event(event)?,
        }
    }

    Ok(String::from_utf8(writer.into_inner())?)
}
