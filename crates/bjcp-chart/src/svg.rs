//! SVG backend for chart scenes.
//!
//! Hover behavior becomes CSS rules scoped to the chart's marker class,
//! `<title>` tooltips and, for raise-on-hover, small inline handlers that move
//! the item's link element to the end (top) of its group and back.

use std::io::Write;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::scene::{Axis, AxisOrient, ChartItem, ChartScene, Hover, Legend};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const RAISE_HANDLER: &str = "this.parentNode.appendChild(this)";
const LOWER_HANDLER: &str = "this.parentNode.insertBefore(this, this.parentNode.firstChild)";

/// Render `scene` as a standalone SVG document.
pub fn render_svg(scene: &ChartScene) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_svg(&mut xml, scene)?;
    String::from_utf8(xml.into_inner()).context("svg output is not utf-8")
}

/// Write `scene` as an `<svg>` element.
pub fn write_svg<W: Write>(xml: &mut Writer<W>, scene: &ChartScene) -> Result<()> {
    let dims = &scene.dimensions;
    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", SVG_NS));
    svg.push_attribute(("class", scene.class.as_str()));
    svg.push_attribute(("width", num(dims.svg_width).as_str()));
    svg.push_attribute(("height", num(scene.total_height()).as_str()));
    xml.write_event(Event::Start(svg))?;

    write_text(xml, "style", &[], &hover_css(scene))?;

    let title_x = num(scene.title.x);
    let title_y = num(scene.title.y);
    write_text(
        xml,
        "text",
        &[
            ("class", "title"),
            ("x", title_x.as_str()),
            ("y", title_y.as_str()),
            ("text-anchor", "middle"),
            ("font-weight", "bold"),
            ("fill", "currentColor"),
        ],
        &scene.title.text,
    )?;

    if !scene.gradients.is_empty() {
        xml.write_event(Event::Start(BytesStart::new("defs")))?;
        for gradient in &scene.gradients {
            let mut node = BytesStart::new("linearGradient");
            node.push_attribute(("id", gradient.id.as_str()));
            node.push_attribute(("x1", "0%"));
            node.push_attribute(("y1", "100%"));
            node.push_attribute(("x2", "100%"));
            node.push_attribute(("y2", "0%"));
            xml.write_event(Event::Start(node))?;
            write_empty(xml, "stop", &[("offset", "0%"), ("stop-color", gradient.from)])?;
            write_empty(xml, "stop", &[("offset", "100%"), ("stop-color", gradient.to)])?;
            xml.write_event(Event::End(BytesEnd::new("linearGradient")))?;
        }
        xml.write_event(Event::End(BytesEnd::new("defs")))?;
    }

    let mut group = BytesStart::new("g");
    let origin = translate(scene.margins.left, scene.margins.top);
    group.push_attribute(("transform", origin.as_str()));
    xml.write_event(Event::Start(group))?;
    for item in &scene.items {
        write_item(xml, item)?;
    }
    write_axis(xml, &scene.x_axis, dims.chart_height)?;
    write_axis(xml, &scene.y_axis, dims.chart_height)?;
    xml.write_event(Event::End(BytesEnd::new("g")))?;

    if let Some(legend) = &scene.legend {
        write_legend(xml, legend)?;
    }

    xml.write_event(Event::End(BytesEnd::new("svg")))?;
    Ok(())
}

fn hover_css(scene: &ChartScene) -> String {
    let class = &scene.class;
    let mut rules = vec![format!("svg.{class} a {{ cursor: pointer; }}")];
    let hover = scene.items.first().map(|item| item.hover);
    match hover {
        Some(Hover::Fade { opacity }) => {
            rules.push(format!("svg.{class} a:hover rect {{ opacity: {opacity}; }}"));
        }
        Some(Hover::RaiseAndFill { fill }) => {
            rules.push(format!("svg.{class} a:hover rect {{ fill: {fill}; }}"));
        }
        None => {}
    }
    rules.join("\n")
}

fn write_item<W: Write>(xml: &mut Writer<W>, item: &ChartItem) -> Result<()> {
    let mut link = BytesStart::new("a");
    link.push_attribute(("href", item.link.as_str()));
    link.push_attribute(("target", "_blank"));
    if matches!(item.hover, Hover::RaiseAndFill { .. }) {
        link.push_attribute(("onmouseover", RAISE_HANDLER));
        link.push_attribute(("onmouseout", LOWER_HANDLER));
    }
    xml.write_event(Event::Start(link))?;

    let mut rect = BytesStart::new("rect");
    rect.push_attribute(("x", num(item.rect.x).as_str()));
    rect.push_attribute(("y", num(item.rect.y).as_str()));
    rect.push_attribute(("width", num(item.rect.width).as_str()));
    rect.push_attribute(("height", num(item.rect.height).as_str()));
    rect.push_attribute(("fill", item.fill.paint().as_str()));
    if let Some(stroke) = &item.stroke {
        rect.push_attribute(("stroke", stroke.color));
        rect.push_attribute(("stroke-width", num(stroke.width).as_str()));
    }
    xml.write_event(Event::Start(rect))?;
    write_text(xml, "title", &[], &item.label)?;
    xml.write_event(Event::End(BytesEnd::new("rect")))?;

    xml.write_event(Event::End(BytesEnd::new("a")))?;
    Ok(())
}

fn write_axis<W: Write>(xml: &mut Writer<W>, axis: &Axis, chart_height: f64) -> Result<()> {
    let mut group = BytesStart::new("g");
    let (class, transform) = match axis.orient {
        AxisOrient::Bottom => ("x axis", Some(translate(0.0, chart_height))),
        AxisOrient::Left => ("y axis", None),
    };
    group.push_attribute(("class", class));
    if let Some(transform) = &transform {
        group.push_attribute(("transform", transform.as_str()));
    }
    group.push_attribute(("fill", "none"));
    group.push_attribute(("font-size", "10"));
    xml.write_event(Event::Start(group))?;

    let (r0, r1) = axis.range;
    let outer = axis.outer_tick_size;
    let path = match axis.orient {
        AxisOrient::Bottom => format!("M{},{}V0H{}V{}", num(r0), num(outer), num(r1), num(outer)),
        AxisOrient::Left => format!("M{},{}H0V{}H{}", num(-outer), num(r0), num(r1), num(-outer)),
    };
    write_empty(
        xml,
        "path",
        &[("class", "domain"), ("stroke", "currentColor"), ("d", path.as_str())],
    )?;

    let size = axis.inner_tick_size;
    for tick in &axis.ticks {
        let mut node = BytesStart::new("g");
        node.push_attribute(("class", "tick"));
        let position = match axis.orient {
            AxisOrient::Bottom => translate(tick.position, 0.0),
            AxisOrient::Left => translate(0.0, tick.position),
        };
        node.push_attribute(("transform", position.as_str()));
        xml.write_event(Event::Start(node))?;
        match axis.orient {
            AxisOrient::Bottom => {
                let y2 = num(size);
                let y = num(size + 3.0);
                write_empty(xml, "line", &[("stroke", "currentColor"), ("y2", y2.as_str())])?;
                write_text(
                    xml,
                    "text",
                    &[
                        ("fill", "currentColor"),
                        ("y", y.as_str()),
                        ("dy", "0.71em"),
                        ("text-anchor", "middle"),
                    ],
                    &tick.label,
                )?;
            }
            AxisOrient::Left => {
                let x2 = num(-size);
                let x = num(-(size + 3.0));
                write_empty(xml, "line", &[("stroke", "currentColor"), ("x2", x2.as_str())])?;
                write_text(
                    xml,
                    "text",
                    &[
                        ("fill", "currentColor"),
                        ("x", x.as_str()),
                        ("dy", "0.32em"),
                        ("text-anchor", "end"),
                    ],
                    &tick.label,
                )?;
            }
        }
        xml.write_event(Event::End(BytesEnd::new("g")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("g")))?;
    Ok(())
}

fn write_legend<W: Write>(xml: &mut Writer<W>, legend: &Legend) -> Result<()> {
    let mut group = BytesStart::new("g");
    group.push_attribute(("class", "legend"));
    let transform = translate(legend.x, legend.y);
    group.push_attribute(("transform", transform.as_str()));
    xml.write_event(Event::Start(group))?;

    write_text(
        xml,
        "text",
        &[("x", "-8"), ("y", "12"), ("text-anchor", "end"), ("fill", "currentColor")],
        &legend.title,
    )?;
    let count = legend.swatches.len().max(1) as f64;
    let swatch_width = legend.width / count;
    for (index, swatch) in legend.swatches.iter().enumerate() {
        let x = num(index as f64 * swatch_width);
        let width = num(swatch_width);
        write_empty(
            xml,
            "rect",
            &[
                ("x", x.as_str()),
                ("y", "0"),
                ("width", width.as_str()),
                ("height", "16"),
                ("fill", swatch.color),
            ],
        )?;
        let label_x = num((index as f64 + 0.5) * swatch_width);
        write_text(
            xml,
            "text",
            &[
                ("x", label_x.as_str()),
                ("y", "28"),
                ("text-anchor", "middle"),
                ("font-size", "9"),
                ("fill", "currentColor"),
            ],
            &swatch.label,
        )?;
    }

    xml.write_event(Event::End(BytesEnd::new("g")))?;
    Ok(())
}

fn write_empty<W: Write>(xml: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut node = BytesStart::new(name);
    for attr in attrs {
        node.push_attribute(*attr);
    }
    xml.write_event(Event::Empty(node))?;
    Ok(())
}

fn write_text<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    let mut node = BytesStart::new(name);
    for attr in attrs {
        node.push_attribute(*attr);
    }
    xml.write_event(Event::Start(node))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", num(x), num(y))
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.33");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(100.0), "100");
    }
}
