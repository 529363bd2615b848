// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tastemap_controller::{Controller, Event, PulseCommand, Reaction, ViewMode};
use tastemap_dataset::Dataset;
use tastemap_legend::{DrawerState, FilterSummary, InputContext, Legend, LegendConfig, LegendInput};
use tastemap_pipeline::{
    BaseMap, CameraLimits, CameraSync, MapCamera, Pipeline, PipelineConfig, PointHover,
    RenderOutcome, RenderSurface, Tooltip,
};
use tastemap_pulse::{FrameScheduler, FrameTask};
use tracing::{debug, info};

/// Every tuning knob of the map, with defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    /// Point, pulse and glow tuning.
    pub pipeline: PipelineConfig,
    /// Legend thresholds.
    pub legend: LegendConfig,
    /// Camera zoom and pitch range.
    pub camera: CameraLimits,
}

/// The interactive map after a successful load.
///
/// The host forwards input through [`App::handle`] or [`App::legend_input`],
/// delivers animation frames to [`App::on_frame`], and redraws the legend from
/// [`App::legend`] whenever a returned [`Reaction`] asks for it.
#[derive(Debug)]
pub struct App<H> {
    dataset: Dataset,
    controller: Controller,
    pipeline: Pipeline,
    legend_config: LegendConfig,
    pulse_task: FrameTask<H>,
    camera: CameraSync,
    drawer: DrawerState,
}

impl<H: PartialEq> App<H> {
    /// Wraps a loaded dataset: Points mode, everything visible, nothing expanded.
    #[must_use]
    pub fn new(dataset: Dataset, config: AppConfig) -> Self {
        let controller = Controller::new(dataset.shared_hierarchy());
        Self {
            dataset,
            controller,
            pipeline: Pipeline::new(config.pipeline),
            legend_config: config.legend,
            pulse_task: FrameTask::new(),
            camera: CameraSync::new(config.camera),
            drawer: DrawerState::default(),
        }
    }

    /// The loaded dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The state controller.
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The render pipeline and its frame counters.
    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Returns `true` while the hover pulse loop has a frame pending.
    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.pulse_task.is_running()
    }

    /// The current legend rows.
    #[must_use]
    pub fn legend(&self) -> Legend {
        Legend::from_controller(&self.controller)
    }

    /// The "N of M restaurants shown" line.
    #[must_use]
    pub fn summary(&self) -> FilterSummary {
        FilterSummary {
            shown: self.pipeline.shown(&self.dataset, &self.controller).len(),
            total: self.dataset.len(),
        }
    }

    /// Applies `event`, starts or stops the pulse loop, and re-renders
    /// synchronously if anything visible changed.
    pub fn handle<S, R>(
        &mut self,
        event: Event,
        scheduler: &mut S,
        surface: &mut R,
        now_ms: f64,
    ) -> Reaction
    where
        S: FrameScheduler<Handle = H>,
        R: RenderSurface,
    {
        if let Event::ModeChanged(mode) = &event {
            self.log_mode_change(*mode);
        }
        let reaction = self.controller.handle(event);
        self.apply(reaction, scheduler, surface, now_ms);
        reaction
    }

    /// Routes raw legend input through the legend dispatcher.
    pub fn legend_input<S, R>(
        &mut self,
        input: &LegendInput,
        context: &InputContext,
        scheduler: &mut S,
        surface: &mut R,
        now_ms: f64,
    ) -> Reaction
    where
        S: FrameScheduler<Handle = H>,
        R: RenderSurface,
    {
        let events = self.legend().dispatch(input, context, &self.legend_config);
        let mut reaction = Reaction::NONE;
        for event in events {
            reaction = reaction.merge(self.controller.handle(event));
        }
        self.apply(reaction, scheduler, surface, now_ms);
        reaction
    }

    /// Handles a delivered animation frame.
    ///
    /// Stale frames are ignored. Otherwise the map is redrawn with the current
    /// pulse phase and the next frame is requested while the hover lasts.
    pub fn on_frame<S, R>(
        &mut self,
        scheduler: &mut S,
        surface: &mut R,
        fired: &H,
        now_ms: f64,
    ) -> Option<RenderOutcome>
    where
        S: FrameScheduler<Handle = H>,
        R: RenderSurface,
    {
        let keep_running = self.controller.hover().is_active();
        if !self.pulse_task.on_frame(scheduler, fired, keep_running) {
            return None;
        }
        Some(self.render(surface, now_ms))
    }

    /// Redraws the map now.
    pub fn render<R: RenderSurface>(&mut self, surface: &mut R, now_ms: f64) -> RenderOutcome {
        self.pipeline
            .render(surface, &self.dataset, &self.controller, now_ms)
    }

    /// Tooltip for a point the surface reports under the pointer.
    #[must_use]
    pub fn point_hover(&self, hover: PointHover) -> Option<Tooltip> {
        Tooltip::for_hover(self.dataset.entities(), hover)
    }

    /// Mirrors a render-camera change to the base map.
    pub fn camera_moved(&mut self, base: &mut impl BaseMap, camera: MapCamera) -> bool {
        self.camera.update(base, camera)
    }

    /// The camera last sent to the base map.
    #[must_use]
    pub fn camera(&self) -> Option<&MapCamera> {
        self.camera.current()
    }

    /// The mobile legend drawer.
    #[must_use]
    pub fn drawer(&self) -> &DrawerState {
        &self.drawer
    }

    /// Mutable access to the mobile legend drawer.
    pub fn drawer_mut(&mut self) -> &mut DrawerState {
        &mut self.drawer
    }

    /// The legend thresholds.
    #[must_use]
    pub fn legend_config(&self) -> &LegendConfig {
        &self.legend_config
    }

    fn apply<S, R>(&mut self, reaction: Reaction, scheduler: &mut S, surface: &mut R, now_ms: f64)
    where
        S: FrameScheduler<Handle = H>,
        R: RenderSurface,
    {
        match reaction.pulse {
            PulseCommand::Start => {
                if self.pulse_task.start(scheduler) {
                    debug!("Hover pulse started");
                }
            }
            PulseCommand::Stop => {
                if self.pulse_task.stop(scheduler) {
                    debug!("Hover pulse stopped");
                }
            }
            PulseCommand::Keep => {}
        }
        if reaction.render {
            self.render(surface, now_ms);
        }
    }

    fn log_mode_change(&self, target: ViewMode) {
        if self.controller.mode().mode() != target {
            info!("Switching view mode to {:?}", target);
        }
    }
}
