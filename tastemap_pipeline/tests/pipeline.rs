// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layers produced for each view state, and surface failure handling.

use core::fmt;

use kurbo::Point;
use peniko::Color;
use tastemap_controller::{Controller, Event, ViewMode};
use tastemap_dataset::{Dataset, Entity};
use tastemap_hierarchy::{CategoryNode, CategoryTree, Palette};
use tastemap_pipeline::{Layer, Pipeline, PointHover, RenderOutcome, RenderSurface, Tooltip};

fn dataset() -> Dataset {
    let asian = CategoryNode::new("Asian", 3, [255, 50, 130])
        .with_child(CategoryNode::new("Chinese", 2, [255, 55, 70]))
        .unwrap();
    let pizza = CategoryNode::new("Pizza Shop", 1, [255, 100, 30]);
    let tree = CategoryTree::from_roots([asian, pizza]).unwrap();
    let palette: Palette = [
        ("Chinese", [255, 55, 70]),
        ("Asian (Unspecified)", [255, 50, 130]),
        ("Asian", [255, 50, 130]),
        ("Pizza Shop", [255, 100, 30]),
    ]
    .into_iter()
    .collect();
    let entity = |category: &str, name: &str, lon: f64| Entity {
        lon,
        lat: 40.7,
        category: category.into(),
        name: name.into(),
        ..Entity::default()
    };
    Dataset::new(
        vec![
            entity("Chinese", "Lucky", -73.9),
            entity("Pizza Shop", "Joe's", -74.0),
            entity("Chinese", "Wok", -73.8),
            entity("Asian (Unspecified)", "Fusion", -73.7),
        ],
        tree,
        palette,
    )
}

fn only_points<'a>(layers: &'a [Layer<'a>]) -> &'a tastemap_pipeline::PointLayer<'a> {
    match layers {
        [Layer::Points(points)] => points,
        other => panic!("expected one point layer, got {other:?}"),
    }
}

#[test]
fn points_follow_the_visible_set() {
    let data = dataset();
    let mut controller = Controller::new(data.shared_hierarchy());
    let pipeline = Pipeline::default();

    let layers = pipeline.layers(&data, &controller, 0.0);
    assert_eq!(only_points(&layers).indices(), [0, 1, 2, 3]);

    controller.handle(Event::CheckboxToggled {
        name: "Chinese".into(),
        visible: false,
    });
    let layers = pipeline.layers(&data, &controller, 0.0);
    let points = only_points(&layers);
    assert_eq!(points.indices(), [1, 3]);
    assert!(!points.is_pulsing());
    assert_eq!(points.color_at(1), Color::from_rgb8(255, 100, 30));
    assert_eq!(points.radius_at(1), 3.0);
}

#[test]
fn hover_pulse_styles_points() {
    let data = dataset();
    let mut controller = Controller::new(data.shared_hierarchy());
    controller.handle(Event::RowHovered {
        name: "Asian".into(),
        now_ms: 1_000.0,
    });
    let pipeline = Pipeline::default();
    let layers = pipeline.layers(&data, &controller, 1_200.0);
    let points = only_points(&layers);
    assert!(points.is_pulsing());

    // Chinese and "Asian (Unspecified)" belong to the hovered branch.
    let r = points.radius_at(0);
    assert!((4.2..=10.5).contains(&r), "pulsing radius {r}");
    assert_eq!(points.radius_at(3), r);
    assert_eq!(points.color_at(0).components[3], 1.0);

    // Pizza is outside the branch: base size, nearly transparent.
    assert_eq!(points.radius_at(1), 3.0);
    assert!((points.color_at(1).components[3] - 0.05).abs() < 1e-6);
}

#[test]
fn glow_draws_one_density_field() {
    let data = dataset();
    let mut controller = Controller::new(data.shared_hierarchy());
    controller.handle(Event::ModeChanged(ViewMode::Glow));
    let pipeline = Pipeline::default();

    let layers = pipeline.layers(&data, &controller, 0.0);
    let [Layer::Density(density)] = layers.as_slice() else {
        panic!("expected one density layer");
    };
    assert_eq!(density.category, "Asian");
    assert_eq!(density.positions.len(), 3);
    assert!((density.intensity - (0.75_f64).sqrt() * 3.0).abs() < 1e-12);
    assert_eq!(
        density.ramp.last().map(|s| s.color),
        Some(Color::from_rgb8(255, 50, 130))
    );

    controller.handle(Event::SelectNone);
    assert!(pipeline.layers(&data, &controller, 0.0).is_empty());
    assert!(pipeline.shown(&data, &controller).is_empty());
}

#[derive(Debug)]
struct ContextLost;

impl fmt::Display for ContextLost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("rendering context lost")
    }
}

impl core::error::Error for ContextLost {}

#[derive(Default)]
struct FlakySurface {
    fail: bool,
    frames: Vec<usize>,
}

impl RenderSurface for FlakySurface {
    type Error = ContextLost;

    fn draw(&mut self, layers: &[Layer<'_>]) -> Result<(), ContextLost> {
        if self.fail {
            return Err(ContextLost);
        }
        self.frames.push(layers.len());
        Ok(())
    }
}

#[test]
fn failed_render_keeps_previous_frame() {
    let data = dataset();
    let controller = Controller::new(data.shared_hierarchy());
    let mut pipeline = Pipeline::default();
    let mut surface = FlakySurface::default();

    assert_eq!(
        pipeline.render(&mut surface, &data, &controller, 0.0),
        RenderOutcome::Drawn
    );
    surface.fail = true;
    assert_eq!(
        pipeline.render(&mut surface, &data, &controller, 16.0),
        RenderOutcome::Skipped
    );
    assert_eq!(surface.frames, [1]);
    assert_eq!(pipeline.frames_drawn(), 1);
    assert_eq!(pipeline.frames_skipped(), 1);
}

#[test]
fn tooltip_for_hovered_point() {
    let data = dataset();
    let hover = PointHover {
        index: 1,
        screen: Point::new(120.0, 80.0),
    };
    let tooltip = Tooltip::for_hover(data.entities(), hover).unwrap();
    assert_eq!(tooltip.name, "Joe's");
    assert_eq!(tooltip.address, "");
    assert_eq!(tooltip.anchor, Point::new(120.0, 80.0));

    let out_of_range = PointHover { index: 99, ..hover };
    assert!(Tooltip::for_hover(data.entities(), out_of_range).is_none());
}
