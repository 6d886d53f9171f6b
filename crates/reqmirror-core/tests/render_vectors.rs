//! Presenter vectors: wrapping bounds and decodable canvases.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqmirror_core::describe::{parse_user_agent, Location, RequestDescription};
use reqmirror_core::render::image::{render, render_encoded, OutputFormat, BACKGROUND};
use reqmirror_core::render::{text, width_chars, CANVAS_HEIGHT, CANVAS_WIDTH};

fn sample() -> RequestDescription {
    RequestDescription::new(
        "203.0.113.5".to_string(),
        Location::new(Some("Berlin".into()), Some("DE".into())),
        parse_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        ),
    )
}

#[test]
fn wrap_splits_long_lines_at_width() {
    let wrapped = text::wrap(&"x".repeat(125), 50);
    let lines: Vec<&str> = wrapped.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].len(), 50);
    assert_eq!(lines[1].len(), 50);
    assert_eq!(lines[2].len(), 25);
}

#[test]
fn wrap_leaves_short_lines_untouched() {
    let input = "short\nlines\nonly";
    assert_eq!(text::wrap(input, 50), input);
}

#[test]
fn text_presenter_respects_canvas_width() {
    let rendered = text::render(&sample()).unwrap();
    assert!(rendered.starts_with('{'));
    for line in rendered.lines() {
        assert!(
            line.chars().count() <= width_chars(),
            "line exceeds canvas width: {line}"
        );
    }
    assert!(rendered.contains("\"ip\""));
}

#[test]
fn png_output_decodes_at_canvas_size() {
    let rendered = text::render(&sample()).unwrap();
    let bytes = render_encoded(&rendered, OutputFormat::Png).unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!(img.width(), CANVAS_WIDTH);
    assert_eq!(img.height(), CANVAS_HEIGHT);
}

#[test]
fn jpeg_output_decodes_at_canvas_size() {
    let rendered = text::render(&sample()).unwrap();
    let bytes = render_encoded(&rendered, OutputFormat::Jpeg).unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!(img.width(), CANVAS_WIDTH);
    assert_eq!(img.height(), CANVAS_HEIGHT);
}

#[test]
fn canvas_carries_background_and_glyph_pixels() {
    let img = render("{");
    assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
    let painted = img.pixels().any(|p| *p != BACKGROUND);
    assert!(painted, "glyph drawing must change at least one pixel");
}

#[test]
fn blank_text_renders_plain_canvas() {
    let img = render("");
    assert!(img.pixels().all(|p| *p == BACKGROUND));
}
