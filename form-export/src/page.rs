//! Standalone static page generator.
//!
//! The page is a single self-contained HTML document: inline stylesheet, the
//! form heading, and one block per field rendered through the same
//! [`Control`] mapping the live preview uses.

use form_core::{Control, Field, Form, SELECT_PROMPT};

use crate::export::ExportConfig;
use crate::html::{Element, HtmlNode};

const DOCTYPE: &str = "<!doctype html>";
const VIEWPORT: &str = "width=device-width,initial-scale=1";
const BLOCK_STYLE: &str = "margin-bottom:12px";
const LABEL_STYLE: &str = "display:block;margin-bottom:6px;font-weight:600";

/// Render the complete page for a form.
#[must_use]
pub fn render(form: &Form, config: &ExportConfig) -> String {
    let title = form.display_title();

    let mut html = Element::new("html");
    if let Some(lang) = &config.page_language {
        html = html.attr("lang", lang.as_str());
    }

    let head = Element::new("head")
        .child(Element::void("meta").attr("charset", "utf-8"))
        .child(
            Element::void("meta")
                .attr("name", "viewport")
                .attr("content", VIEWPORT),
        )
        .child(Element::new("title").text(title))
        .child(Element::new("style").child(HtmlNode::Raw(config.stylesheet().to_string())));

    let mut body = Element::new("body").child(Element::new("h2").text(title));
    if !form.description.is_empty() {
        body = body.child(Element::new("p").text(form.description.as_str()));
    }
    body = body.child(
        Element::new("form")
            .children(form.fields().iter().map(field_block))
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .text(config.submit_label.as_str()),
            ),
    );

    let mut out = String::with_capacity(2048);
    HtmlNode::Raw(DOCTYPE.to_string()).write_to(&mut out);
    HtmlNode::from(html.child(head).child(body)).write_to(&mut out);
    out
}

fn field_block(field: &Field) -> Element {
    let block = Element::new("div").attr("style", BLOCK_STYLE).child(
        Element::new("label")
            .attr("style", LABEL_STYLE)
            .text(field.display_label()),
    );

    match Control::for_field(field) {
        Control::SingleLine {
            input_type,
            placeholder,
            required,
        } => block.child(
            Element::void("input")
                .attr("type", input_type)
                .attr("placeholder", placeholder)
                .flag("required", required),
        ),
        Control::MultiLine { placeholder } => {
            block.child(Element::new("textarea").attr("placeholder", placeholder))
        }
        Control::Checkbox { checked } => block.child(
            Element::void("input")
                .attr("type", "checkbox")
                .flag("checked", checked),
        ),
        Control::RadioGroup { group, options } => {
            block.children(options.iter().map(|option| radio_option(group, option)))
        }
        Control::Select { options } => block.child(
            Element::new("select")
                .child(Element::new("option").attr("value", "").text(SELECT_PROMPT))
                .children(
                    options
                        .iter()
                        .map(|option| Element::new("option").text(option.as_str())),
                ),
        ),
    }
}

fn radio_option(group: &str, option: &str) -> Element {
    Element::new("div").child(
        Element::new("label")
            .child(
                Element::void("input")
                    .attr("type", "radio")
                    .attr("name", group),
            )
            .text(format!(" {option}")),
    )
}
