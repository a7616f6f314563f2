//! Per-body time series capture
//!
//! Every tick produces one [`Sample`] per body. Where the samples go is up to
//! the [`SampleSink`] the simulation was built with:
//! - [`TimeSeries`] keeps everything in memory for later plotting/export
//! - [`NullSink`] drops them (long or streaming runs)
//! - any `FnMut(usize, &str, &Sample)` closure can stream them elsewhere

use super::states::NVec2;

/// Snapshot of one body right after its tick (integration + border)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub step: u64, // 1-based step index
    pub time: f64, // simulated time, already scaled
    pub center: NVec2,
    pub velocity: NVec2,
    pub acceleration: NVec2,
    pub angular_velocity: f64,
}

/// Destination for samples
pub trait SampleSink {
    /// `index` is the body's position in the simulation, `id` its identifier
    fn record(&mut self, index: usize, id: &str, sample: &Sample);
}

impl<F> SampleSink for F
where
    F: FnMut(usize, &str, &Sample),
{
    fn record(&mut self, index: usize, id: &str, sample: &Sample) {
        self(index, id, sample)
    }
}

/// Discards every sample
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SampleSink for NullSink {
    fn record(&mut self, _index: usize, _id: &str, _sample: &Sample) {}
}

/// Recorded history of a single body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodySeries {
    id: String,
    samples: Vec<Sample>,
}

impl BodySeries {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn positions(&self) -> impl Iterator<Item = NVec2> + '_ {
        self.samples.iter().map(|s| s.center)
    }

    pub fn velocities(&self) -> impl Iterator<Item = NVec2> + '_ {
        self.samples.iter().map(|s| s.velocity)
    }

    pub fn accelerations(&self) -> impl Iterator<Item = NVec2> + '_ {
        self.samples.iter().map(|s| s.acceleration)
    }
}

/// In-memory recorder, one [`BodySeries`] per body index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    series: Vec<BodySeries>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self, index: usize) -> Option<&BodySeries> {
        self.series.get(index)
    }

    pub fn series_by_id(&self, id: &str) -> Option<&BodySeries> {
        self.series.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodySeries> {
        self.series.iter()
    }

    /// Number of bodies with at least one sample
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }
}

impl SampleSink for TimeSeries {
    fn record(&mut self, index: usize, id: &str, sample: &Sample) {
        if index >= self.series.len() {
            self.series.resize_with(index + 1, BodySeries::default);
        }
        let entry = &mut self.series[index];
        if entry.id.is_empty() {
            entry.id = id.to_owned();
        }
        entry.samples.push(*sample);
    }
}
