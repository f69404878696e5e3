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

//! Headless Shardlight runtime.
//!
//! Replays a scripted session against the in-memory demo scenes: a scroll
//! sweep at a healthy frame rate, then a stretch of slow frames long enough
//! to trigger the automatic downgrade. Prints the final status and metrics
//! as JSON.
//!
//! Usage: `shard-runtime [CONFIG.ron]`

use std::time::{Duration, Instant};

use anyhow::Context;
use serde::Serialize;
use shard_sdk::{
    FrameOutcome, MemoryAssetSource, RenderLoopCoordinator, ViewerConfig, ViewerEvent,
    ViewerStatus,
};
use shard_telemetry::{init_logging, MetricSnapshot};

const SWEEP_FRAMES: u32 = 240;
const SWEEP_STEP: Duration = Duration::from_millis(16);
const STALL_FRAMES: u32 = 48;
const STALL_STEP: Duration = Duration::from_millis(84);

#[derive(Serialize)]
struct SessionSummary {
    rendered: u32,
    idle: u32,
    transitions: Vec<String>,
    status: ViewerStatus,
    metrics: Vec<MetricSnapshot>,
}

fn main() -> anyhow::Result<()> {
    init_logging("info");

    let config = match std::env::args().nth(1) {
        Some(path) => ViewerConfig::load(&path)
            .with_context(|| format!("could not load configuration '{path}'"))?,
        None => ViewerConfig::default(),
    };

    let mut viewer = RenderLoopCoordinator::new(config, MemoryAssetSource::demo())
        .context("could not start the viewer")?;
    let events = viewer.events();

    let mut rendered = 0;
    let mut idle = 0;
    let mut transitions = Vec::new();
    let mut now = Instant::now();

    events.send(ViewerEvent::Resized {
        width: 1280,
        height: 720,
    })?;

    for frame in 0..SWEEP_FRAMES + STALL_FRAMES {
        let step = if frame < SWEEP_FRAMES {
            events.send(ViewerEvent::ScrollChanged(frame as f32 / SWEEP_FRAMES as f32))?;
            SWEEP_STEP
        } else {
            events.send(ViewerEvent::RedrawRequested)?;
            STALL_STEP
        };

        match viewer.frame(now)? {
            FrameOutcome::Rendered(report) => {
                rendered += 1;
                if let Some(transition) = report.transition {
                    transitions.push(format!("{transition:?}"));
                }
            }
            FrameOutcome::Idle => idle += 1,
            FrameOutcome::Halted(fault) => {
                log::error!("{}", fault.advisory());
                break;
            }
        }
        now += step;
    }

    let summary = SessionSummary {
        rendered,
        idle,
        transitions,
        status: viewer.status(),
        metrics: viewer.metrics_registry().snapshot(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
