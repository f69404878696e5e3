// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The render loop coordinator.
//!
//! Owns the loaded scene, the [`RenderContext`] and every lane, and runs them
//! in a fixed order each frame:
//!
//! 1. apply queued [`ViewerEvent`]s,
//! 2. resolve progress,
//! 3. drive the animation timeline,
//! 4. classify the scene when the progress bucket or the asset changed,
//! 5. publish frame uniforms,
//! 6. sample the frame rate and let the quality controller react.
//!
//! Frames run on demand. After a frame the coordinator keeps requesting
//! redraws only while inputs are changing or the idle oscillation is active.

use std::time::Instant;

use serde::Serialize;
use shard_control::{FpsSample, FrameRateSampler, QualityController, QualityTransition};
use shard_core::{
    control::{CameraPose, ControlMode, FpsBand, PerformanceMode, Progress, QualityLevel},
    event::EventBus,
    scene::{AssetSource, LoadedScene},
};
use shard_data::{assets::Palette, RenderContext};
use shard_lanes::{
    ClassificationLane, ClassificationReport, ControlSignalLane, SignalInput, SignalSource,
    TimelineLane,
};
use shard_telemetry::{CounterHandle, GaugeHandle, MetricsRegistry, TelemetryService};

use crate::{
    config::ViewerConfig,
    error::{RenderFault, ViewerError},
    event::ViewerEvent,
    settings::RenderSettings,
};

/// Per-frame values for time-animated materials.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct FrameUniforms {
    /// Seconds since the first frame.
    pub time: f32,
    /// Resolved progress.
    pub progress: f32,
}

/// What happened during one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Sequence number, starting at 1.
    pub frame: u64,
    /// Resolved progress.
    pub progress: Progress,
    /// Input the progress came from.
    pub source: SignalSource,
    /// Quantized progress bucket.
    pub bucket: u32,
    /// Uniforms published for this frame.
    pub uniforms: FrameUniforms,
    /// Present when the scene was classified this frame.
    pub classification: Option<ClassificationReport>,
    /// Present when a frame-rate window closed this frame.
    pub sample: Option<FpsSample>,
    /// Present when the active asset changed this frame.
    pub transition: Option<QualityTransition>,
    /// Whether the coordinator wants another frame.
    pub redraw_requested: bool,
}

/// Result of [`RenderLoopCoordinator::frame`].
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Nothing was invalidated; no work was done.
    Idle,
    /// A frame ran.
    Rendered(FrameReport),
    /// Frames are stopped by a fault.
    Halted(RenderFault),
}

/// Snapshot of everything the outer layer displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerStatus {
    /// Latest frame-rate sample.
    pub fps: u32,
    /// Reporting band of `fps`.
    pub fps_band: FpsBand,
    /// Mean of the recent frame-rate samples, `0.0` before the first one.
    pub average_fps: f32,
    /// Lowest recent frame-rate sample.
    pub min_fps: Option<f32>,
    /// Active asset variant.
    pub current_asset_path: String,
    /// Label of the active asset variant.
    pub current_asset_label: Option<String>,
    /// Whether the automatic downgrade has fired.
    pub quality: QualityLevel,
    /// User performance preference.
    pub performance_mode: PerformanceMode,
    /// Input driving progress.
    pub control_mode: ControlMode,
    /// Progress of the latest frame.
    pub progress: f32,
    /// Frames rendered so far.
    pub frames: u64,
    /// Materials held by the cache.
    pub materials_cached: usize,
    /// Surface size in physical pixels.
    pub surface: (u32, u32),
    /// Active fault, if frames are halted.
    pub fault: Option<RenderFault>,
    /// Latest user-facing message.
    pub advisory: Option<String>,
}

#[derive(Debug)]
struct ViewerMetrics {
    fps: GaugeHandle,
    frames: CounterHandle,
    downgrades: CounterHandle,
    materials_cached: GaugeHandle,
}

impl ViewerMetrics {
    fn register(registry: &MetricsRegistry) -> Result<Self, ViewerError> {
        Ok(Self {
            fps: registry.register_gauge(
                "viewer",
                "fps",
                "Frames in the last closed window",
                "fps",
            )?,
            frames: registry.register_counter("viewer", "frames", "Frames rendered")?,
            downgrades: registry.register_counter(
                "viewer",
                "quality_downgrades",
                "Automatic switches to a lower-fidelity asset",
            )?,
            materials_cached: registry.register_gauge(
                "materials",
                "cached",
                "Palette materials held by the cache",
                "count",
            )?,
        })
    }
}

/// Drives one viewer session.
///
/// All state is owned here and mutated from the frame callback only; input
/// arrives as [`ViewerEvent`]s through [`dispatch`](Self::dispatch) or a
/// sender obtained from [`events`](Self::events).
pub struct RenderLoopCoordinator<S: AssetSource> {
    config: ViewerConfig,
    source: S,
    context: RenderContext,
    scene: LoadedScene,

    signal: ControlSignalLane,
    timeline: TimelineLane,
    classifier: ClassificationLane,
    sampler: FrameRateSampler,
    controller: QualityController,
    telemetry: TelemetryService,
    metrics: ViewerMetrics,
    events: EventBus<ViewerEvent>,

    input: SignalInput,
    camera: CameraPose,
    surface: (u32, u32),
    started: Option<Instant>,
    idle_since: Option<Instant>,
    progress: Progress,
    classified_bucket: Option<u32>,
    needs_redraw: bool,
    frames: u64,
    fault: Option<RenderFault>,
    advisory: Option<String>,
}

impl<S: AssetSource> RenderLoopCoordinator<S> {
    /// Builds a coordinator and loads the highest-fidelity asset.
    pub fn new(config: ViewerConfig, mut source: S) -> Result<Self, ViewerError> {
        let catalog = config.asset_catalog()?;
        let signal = ControlSignalLane::new(config.signal)?;
        let context = RenderContext::new(
            catalog,
            Palette::from_preset(config.palette),
            config.quantization_steps,
            config.performance_mode,
        );
        let scene = source.load(context.quality.current_asset_path())?;

        let telemetry = TelemetryService::new(config.telemetry_interval());
        let metrics = ViewerMetrics::register(telemetry.metrics_registry())?;

        let camera = CameraPose::default();
        let input = SignalInput {
            mode: config.control_mode,
            scroll: None,
            pose: Some(camera.position),
        };

        log::info!(
            "Viewer started on '{}' ({} nodes, {} tracks, {:?} palette)",
            scene.path,
            scene.graph.len(),
            scene.tracks.len(),
            config.palette
        );

        Ok(Self {
            classifier: ClassificationLane::new(config.classification),
            sampler: FrameRateSampler::new(config.fps_window()),
            controller: QualityController::new(config.quality),
            timeline: TimelineLane::new(),
            events: EventBus::new(),
            config,
            source,
            context,
            scene,
            signal,
            telemetry,
            metrics,
            input,
            camera,
            surface: (0, 0),
            started: None,
            idle_since: None,
            progress: Progress::ZERO,
            classified_bucket: None,
            needs_redraw: true,
            frames: 0,
            fault: None,
            advisory: None,
        })
    }

    /// Queues an event for the next frame.
    pub fn dispatch(&self, event: ViewerEvent) {
        self.events.publish(event);
    }

    /// A sender that can be handed to input handlers.
    pub fn events(&self) -> flume::Sender<ViewerEvent> {
        self.events.sender()
    }

    /// Runs one frame at `now` if anything was invalidated.
    pub fn frame(&mut self, now: Instant) -> Result<FrameOutcome, ViewerError> {
        if let Some(fault) = self.fault {
            return Ok(FrameOutcome::Halted(fault));
        }

        let (inputs_changed, mut transition) = self.apply_events();
        if let Some(fault) = self.fault {
            return Ok(FrameOutcome::Halted(fault));
        }
        if !(self.needs_redraw || inputs_changed) {
            self.idle_since.get_or_insert(now);
            return Ok(FrameOutcome::Idle);
        }
        if let Some(since) = self.idle_since.take() {
            // A pause longer than a whole window must not count as slow frames.
            if now.saturating_duration_since(since) >= self.sampler.window() {
                self.sampler.restart();
            }
        }

        let started = *self.started.get_or_insert(now);
        let time = now.saturating_duration_since(started).as_secs_f32();

        let (progress, source) = self.signal.resolve(&self.input, time);
        self.progress = progress;
        self.timeline.drive(&mut self.scene.tracks, progress);

        let bucket = self.context.materials.quantize(progress);
        let classification = if self.classified_bucket != Some(bucket) {
            let report = self.classifier.classify(
                &mut self.scene.graph,
                progress,
                &mut self.context.materials,
            )?;
            self.classified_bucket = Some(bucket);
            Some(report)
        } else {
            None
        };

        let uniforms = FrameUniforms {
            time,
            progress: progress.get(),
        };

        self.frames += 1;
        self.metrics.frames.increment()?;

        let sample = self.sampler.tick(now);
        if let Some(sample) = sample {
            self.metrics.fps.set(sample.fps as f64)?;
            if let Some(downgrade) = self.controller.evaluate(sample, &mut self.context) {
                if self.swap_scene(&downgrade) {
                    self.metrics.downgrades.increment()?;
                    self.advisory = Some(format!(
                        "Switched to a lighter model after {} fps.",
                        sample.fps
                    ));
                    transition = Some(downgrade);
                }
            }
        }

        self.metrics
            .materials_cached
            .set(self.context.materials.len() as f64)?;
        if self.telemetry.tick_at(now) {
            log::info!(
                "{} fps ({:?}), '{}', {:?}, {} materials, {} frames",
                self.context.quality.fps(),
                self.context.quality.fps_band(),
                self.context.quality.current_asset_path(),
                self.context.quality.quality(),
                self.context.materials.len(),
                self.frames
            );
        }

        let redraw_requested =
            inputs_changed || source == SignalSource::Fallback || self.classified_bucket.is_none();
        self.needs_redraw = redraw_requested;
        log::trace!(
            "Frame {} at progress {:.3} ({source:?}), bucket {bucket}",
            self.frames,
            progress.get()
        );

        Ok(FrameOutcome::Rendered(FrameReport {
            frame: self.frames,
            progress,
            source,
            bucket,
            uniforms,
            classification,
            sample,
            transition,
            redraw_requested,
        }))
    }

    /// Applies queued events. Returns whether any input changed and the asset
    /// transition a selection caused, if any.
    ///
    /// A rejected event never stops the rest of the batch.
    fn apply_events(&mut self) -> (bool, Option<QualityTransition>) {
        let mut changed = false;
        let mut transition = None;

        for event in self.events.drain() {
            match event {
                ViewerEvent::ScrollChanged(fraction) => {
                    self.input.scroll = Some(fraction);
                    changed = true;
                }
                ViewerEvent::CameraMoved(pose) => {
                    self.camera = pose;
                    self.input.pose = Some(pose.position);
                    changed = true;
                }
                ViewerEvent::ControlModeChanged(mode) => {
                    if self.input.mode != mode {
                        log::info!("Control mode set to {mode:?}");
                        self.input.mode = mode;
                        changed = true;
                    }
                }
                ViewerEvent::PerformanceModeChanged(mode) => {
                    changed |= self.controller.set_performance_mode(mode, &mut self.context);
                }
                ViewerEvent::AssetSelected(path) => {
                    match self.controller.select_asset(&path, &self.context) {
                        Ok(Some(selected)) => {
                            if self.swap_scene(&selected) {
                                transition = Some(selected);
                                changed = true;
                            }
                        }
                        Ok(None) => {}
                        Err(err) => {
                            log::warn!("Ignoring asset selection: {err}");
                            self.advisory = Some(err.to_string());
                        }
                    }
                }
                ViewerEvent::Resized { width, height } => {
                    log::debug!("Surface resized to {width}x{height}");
                    self.surface = (width, height);
                    changed = true;
                }
                ViewerEvent::RedrawRequested => {
                    self.needs_redraw = true;
                }
                ViewerEvent::ContextLost => {
                    let fault = RenderFault::ContextLost;
                    log::warn!("{}", fault.advisory());
                    self.advisory = Some(fault.advisory().to_string());
                    self.fault = Some(fault);
                    break;
                }
            }
        }

        (changed, transition)
    }

    /// Loads the target of `transition` and, on success, commits it and
    /// replaces the current scene.
    ///
    /// On failure the current scene and quality state stay as they were and
    /// the error becomes the advisory. Returns whether the swap happened.
    fn swap_scene(&mut self, transition: &QualityTransition) -> bool {
        let path = transition.target();
        let scene = match self.source.load(path) {
            Ok(scene) => scene,
            Err(err) => {
                log::warn!("Keeping '{}': {err}", self.scene.path);
                self.advisory = Some(err.to_string());
                return false;
            }
        };

        self.controller.commit(transition, &mut self.context);
        self.scene = scene;
        self.classified_bucket = None;
        self.needs_redraw = true;
        self.sampler.restart();
        log::info!(
            "Active asset is now '{path}' ({} nodes)",
            self.scene.graph.len()
        );
        true
    }

    /// What the outer layer should display.
    pub fn status(&self) -> ViewerStatus {
        let quality = &self.context.quality;
        ViewerStatus {
            fps: quality.fps(),
            fps_band: quality.fps_band(),
            average_fps: self.sampler.average_fps(),
            min_fps: self.sampler.min_fps(),
            current_asset_path: quality.current_asset_path().to_string(),
            current_asset_label: self
                .context
                .catalog
                .get(quality.current_asset_path())
                .map(|v| v.label.clone()),
            quality: quality.quality(),
            performance_mode: quality.performance_mode(),
            control_mode: self.input.mode,
            progress: self.progress.get(),
            frames: self.frames,
            materials_cached: self.context.materials.len(),
            surface: self.surface,
            fault: self.fault,
            advisory: self.advisory.clone(),
        }
    }

    /// Renderer settings for the current performance mode.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings::for_mode(
            self.context.quality.performance_mode(),
            self.config.device_pixel_ratio,
        )
    }

    /// The loaded scene.
    pub fn scene(&self) -> &LoadedScene {
        &self.scene
    }

    /// The shared render state.
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Current camera pose.
    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    /// The asset source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Session metrics.
    pub fn metrics_registry(&self) -> &MetricsRegistry {
        self.telemetry.metrics_registry()
    }

    /// Active configuration.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }
}
