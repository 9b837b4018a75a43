//! Renderers - turning trace records into output.
//!
//! Renderers only ever see shared references to engine output. They cannot
//! reach back into a running simulation.

use std::io::Write;

use chrono::Local;
use serde::Serialize;

use crate::common::Result;
use crate::engine::{Policy, ReplacementEngine, RunSummary, StepResult};

/// Static facts about a run, handed to [`Renderer::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunHeader {
    pub policy: Policy,
    pub frame_size: usize,
    pub references: usize,
}

impl RunHeader {
    pub fn from_engine(engine: &ReplacementEngine) -> Self {
        Self {
            policy: engine.policy(),
            frame_size: engine.frame_size(),
            references: engine.sequence().len(),
        }
    }
}

/// Consumes a run's output, one step at a time.
pub trait Renderer {
    /// Called once before the first step.
    fn begin(&mut self, _header: &RunHeader) -> Result<()> {
        Ok(())
    }

    fn render_step(&mut self, step: &StepResult) -> Result<()>;

    /// Called once after the last step.
    fn finish(&mut self, summary: &RunSummary) -> Result<()>;
}

/// Empty boxes drawn at most; the rest are summarized as a count.
pub const MAX_EMPTY_BOXES: usize = 16;

/// Human-readable log lines plus a row of frame boxes.
///
/// ```text
/// [14:02:11] Page 2 → MISS (Frames: [0, 1, 2])
///            [  0  ] [  1  ] [ 2*  ]   Frame 3 ← 2, evicted 7
/// ```
///
/// The referenced page is marked with `*`; empty frames are blank boxes.
pub struct TextRenderer<W: Write> {
    out: W,
    timestamps: bool,
    frame_size: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            timestamps: true,
            frame_size: 0,
        }
    }

    /// Turn the `[HH:MM:SS]` prefix on or off.
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn prefix(&self) -> String {
        if self.timestamps {
            Local::now().format("[%H:%M:%S] ").to_string()
        } else {
            String::new()
        }
    }
}

/// Draw one box per frame, filling them from `step.frames`.
///
/// Every occupied frame is drawn. Past [`MAX_EMPTY_BOXES`] empty frames the
/// row ends with a `(+N empty)` count instead.
pub fn frame_row(step: &StepResult, frame_size: usize) -> String {
    let occupied = step.frames.len();
    let empty = frame_size.saturating_sub(occupied);
    let drawn_empty = empty.min(MAX_EMPTY_BOXES);

    let mut boxes: Vec<String> = step
        .frames
        .iter()
        .map(|&page| {
            if page == step.page {
                let marked = format!("{}*", page);
                format!("[{:^5}]", marked)
            } else {
                format!("[{:^5}]", page)
            }
        })
        .collect();
    boxes.extend((0..drawn_empty).map(|_| format!("[{:^5}]", "")));

    let mut row = boxes.join(" ");
    if empty > drawn_empty {
        row.push_str(&format!(" (+{} empty)", empty - drawn_empty));
    }
    row
}

/// What happened to the frames on this step, if anything.
fn change_note(step: &StepResult) -> Option<String> {
    let slot = step.slot?;
    Some(match step.evicted {
        Some(evicted) => format!("{} ← {}, evicted {}", slot, step.page, evicted),
        None => format!("{} ← {}", slot, step.page),
    })
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn begin(&mut self, header: &RunHeader) -> Result<()> {
        self.frame_size = header.frame_size;
        writeln!(
            self.out,
            "{}Simulating {} with {} frames over {} references",
            self.prefix(),
            header.policy,
            header.frame_size,
            header.references
        )?;
        Ok(())
    }

    fn render_step(&mut self, step: &StepResult) -> Result<()> {
        let prefix = self.prefix();
        writeln!(self.out, "{}{}", prefix, step)?;

        let indent = " ".repeat(prefix.chars().count());
        let row = frame_row(step, self.frame_size);
        match change_note(step) {
            Some(note) => writeln!(self.out, "{}{}   {}", indent, row, note)?,
            None => writeln!(self.out, "{}{}", indent, row)?,
        }
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.out, "{}Total Page Faults: {}", self.prefix(), summary.faults)?;
        writeln!(self.out, "{}", summary)?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum JsonEvent<'a> {
    Start(&'a RunHeader),
    Step(&'a StepResult),
    Summary(&'a RunSummary),
}

/// One JSON object per line: a `start` event, one `step` event per
/// reference, then a `summary` event.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &JsonEvent<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn begin(&mut self, header: &RunHeader) -> Result<()> {
        self.emit(&JsonEvent::Start(header))
    }

    fn render_step(&mut self, step: &StepResult) -> Result<()> {
        self.emit(&JsonEvent::Step(step))
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        self.emit(&JsonEvent::Summary(summary))?;
        self.out.flush()?;
        Ok(())
    }
}
