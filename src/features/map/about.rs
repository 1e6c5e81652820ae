//! Instructions overlay content

use gpui::{div, px, IntoElement, ParentElement, Styled};

use crate::components::composite::modal::Modal;
use crate::features::map::controller::MapController;
use crate::theme::colors::MdtColors;

const SECTIONS: &[(&str, &str)] = &[
    (
        "Using the explorer",
        "Pick Traffic Flow or Emissions in the header to open that map in your browser. \
         The sidebar mirrors the selected map: its legend, the hourly graphs and data \
         tables, the worst segments and the export panel.",
    ),
    (
        "Changing the network",
        "The segment editor scales the share of each of the five vehicle types, the \
         petrol/diesel split and the temperature used for the emissions calculation. \
         The lower and upper bounds limit which segments are drawn, as a percentage of \
         the highest average value in the network. Unchecking 'draw zero values' skips \
         segments with no recorded vehicles. Nothing is sent until you press Make Changes.",
    ),
    (
        "Inspecting road segments",
        "Enter a segment id in Show Worst Segments and press Inspect. The inspector shows \
         the segment's characteristics followed by its flow and emissions, computed with \
         the modifiers you last applied.",
    ),
    (
        "Exporting",
        "Export Network downloads the network archive for the applied modifiers.",
    ),
];

pub fn about_modal(controller: MapController) -> impl IntoElement {
    let mut modal = Modal::new("How to use the MDT").on_close(move |cx| controller.toggle_about(cx));

    for (heading, body) in SECTIONS {
        modal = modal.child(
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_size(px(15.0))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(MdtColors::text_primary())
                        .child(*heading),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(MdtColors::text_secondary())
                        .child(*body),
                ),
        );
    }

    modal
}
