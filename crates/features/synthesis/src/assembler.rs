//! Drives the pipeline for N buildings and packs the result into a
//! [`FeatureCollection`].

use crate::classifier::Classifier;
use crate::clock::{Clock, SystemClock};
use crate::error::{Result, SynthesisError};
use crate::polygon::PolygonSynthesizer;
use crate::rng::FootprintRng;
use crate::size::SizeSampler;
use crate::source::{BuildingSource, RawBuildingRow, SourceCapability, normalize_confidence};
use crate::spatial::SpatialSampler;
use fp_domain::config::GeneratorConfig;
use fp_domain::geojson::{Feature, FeatureCollection, Metadata, Origin, Summary};
use fp_domain::{Building, Category, ClassificationBreakdown};
use tracing::{debug, info, warn};

/// Progress is logged every this many buildings.
pub const PROGRESS_EVERY: usize = 2_500;

/// Owns the configuration, random source and clock for one run.
#[derive(Debug)]
pub struct DatasetAssembler {
    config: GeneratorConfig,
    classifier: Classifier,
    spatial: SpatialSampler,
    size: SizeSampler,
    polygon: PolygonSynthesizer,
    rng: FootprintRng,
    clock: Box<dyn Clock>,
}

#[derive(Debug, Default)]
pub struct DatasetAssemblerBuilder {
    config: GeneratorConfig,
    rng: Option<FootprintRng>,
    clock: Option<Box<dyn Clock>>,
}

impl DatasetAssemblerBuilder {
    #[must_use = "Sets the region, clusters and tables used for generation"]
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "Makes the run reproducible"]
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(FootprintRng::from_seed_u64(seed));
        self
    }

    #[must_use = "Replaces the random source"]
    pub fn rng(mut self, rng: FootprintRng) -> Self {
        self.rng = Some(rng);
        self
    }

    #[must_use = "Replaces the timestamp source"]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Validates the configuration and returns a ready assembler.
    ///
    /// # Errors
    /// [`SynthesisError::Configuration`] for an empty cluster list, a degenerate
    /// region, unusable cluster weights or an invalid classification table.
    pub fn build(self) -> Result<DatasetAssembler> {
        validate(&self.config)?;
        let classifier = Classifier::new(&self.config.classification)?;

        Ok(DatasetAssembler {
            polygon: PolygonSynthesizer::new(self.config.polygon.rotate),
            config: self.config,
            classifier,
            spatial: SpatialSampler,
            size: SizeSampler,
            rng: self.rng.unwrap_or_else(FootprintRng::from_entropy),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        })
    }
}

impl DatasetAssembler {
    #[must_use]
    pub fn builder() -> DatasetAssemblerBuilder {
        DatasetAssemblerBuilder::default()
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generates `count` synthetic buildings.
    ///
    /// Per building: spatial sample, size sample, classification, polygon.
    /// Ids run `building_1..=building_{count}`.
    ///
    /// # Errors
    /// [`SynthesisError::Configuration`] when `count` is zero.
    pub fn generate(&mut self, count: usize) -> Result<FeatureCollection> {
        ensure_count(count)?;
        info!(
            count,
            seed = self.rng.seed(),
            region = %self.config.labels.region,
            "Generating synthetic buildings"
        );

        let mut buildings = Vec::with_capacity(count);
        for n in 1..=count {
            let placement =
                self.spatial.sample_point(&self.config.clusters, &self.config.region, &mut self.rng)?;
            let area = self.size.sample_area(&mut self.rng);
            let (category, confidence) = self.classifier.classify(area, &mut self.rng);
            let footprint = self.polygon.build_rectangle(placement.center, area, &mut self.rng);

            buildings.push(Building {
                id: format!("building_{n}"),
                area,
                category,
                confidence,
                estimated_value: self.estimate_value(area, category),
                center: placement.center,
                footprint,
                location: placement.cluster.name.clone(),
                source: self.config.labels.feature_source.clone(),
                detected_at: self.clock.now(),
            });

            if n % PROGRESS_EVERY == 0 {
                debug!(generated = n, total = count, "Synthesis progress");
            }
        }

        Ok(self.finish(&buildings, Origin::Synthetic))
    }

    /// Uses the external source when one is available and yields rows inside
    /// the region, otherwise falls back to [`generate`](Self::generate).
    ///
    /// Source failures are logged and never abort the run.
    ///
    /// # Errors
    /// [`SynthesisError::Configuration`] when `count` is zero.
    pub fn assemble(
        &mut self,
        count: usize,
        capability: SourceCapability,
    ) -> Result<FeatureCollection> {
        ensure_count(count)?;

        match capability {
            SourceCapability::Available(source) => match self.from_source(count, source.as_ref()) {
                Ok(Some(collection)) => return Ok(collection),
                Ok(None) => {
                    warn!(source = source.name(), "No external buildings inside the region; falling back to synthesis");
                }
                Err(err) => {
                    warn!(
                        source = source.name(),
                        kind = err.kind(),
                        error = %err,
                        "External fetch failed; falling back to synthesis"
                    );
                }
            },
            SourceCapability::Unavailable(reason) => {
                info!(%reason, "External source unavailable; using synthesis");
            }
        }

        self.generate(count)
    }

    fn from_source(
        &self,
        count: usize,
        source: &dyn BuildingSource,
    ) -> Result<Option<FeatureCollection>> {
        let region = &self.config.region;
        let rows = source.fetch(region)?;
        let fetched = rows.len();

        let buildings: Vec<Building> = rows
            .iter()
            .filter(|row| region.contains(row.center()))
            .take(count)
            .enumerate()
            .map(|(idx, row)| self.reshape(idx + 1, row))
            .collect();

        info!(
            source = source.name(),
            fetched,
            kept = buildings.len(),
            "External rows filtered to region"
        );
        if buildings.is_empty() {
            return Ok(None);
        }

        Ok(Some(self.finish(&buildings, Origin::External)))
    }

    fn reshape(&self, n: usize, row: &RawBuildingRow) -> Building {
        let center = row.center();
        let area = row.area_in_meters;
        let category = self.classifier.category_for(area);

        Building {
            id: format!("ob_{n}"),
            area,
            category,
            confidence: normalize_confidence(row.confidence),
            estimated_value: self.estimate_value(area, category),
            center,
            footprint: row.geometry.clone(),
            location: self
                .config
                .clusters
                .nearest(center)
                .map_or_else(|| "Unknown".to_owned(), |c| c.name.clone()),
            source: self.config.labels.external_source.clone(),
            detected_at: self.clock.now(),
        }
    }

    // `as` saturates, so oversized external areas cap at `u64::MAX`.
    fn estimate_value(&self, area: f64, category: Category) -> u64 {
        (area * self.config.valuation.rate(category) as f64).round() as u64
    }

    fn finish(&self, buildings: &[Building], origin: Origin) -> FeatureCollection {
        let labels = &self.config.labels;
        let breakdown: ClassificationBreakdown = buildings.iter().map(|b| b.category).collect();

        let metadata = Metadata {
            title: labels.title.clone(),
            source: labels.source.clone(),
            region: labels.region.clone(),
            total_buildings: buildings.len(),
            bounds: self.config.region,
            generated_at: self.clock.now(),
            classification_breakdown: breakdown,
            detection_method: labels.detection_method.clone(),
            accuracy: labels.accuracy.clone(),
            coverage: labels.coverage.clone(),
            origin,
            seed: matches!(origin, Origin::Synthetic).then(|| self.rng.seed()),
            summary: Summary::from_buildings(buildings),
        };

        info!(
            total = metadata.total_buildings,
            residential = breakdown.residential,
            commercial = breakdown.commercial,
            industrial = breakdown.industrial,
            institutional = breakdown.institutional,
            "Feature collection assembled"
        );

        FeatureCollection { metadata, features: buildings.iter().map(Feature::from).collect() }
    }
}

fn ensure_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(SynthesisError::configuration("building count must be positive"));
    }
    Ok(())
}

fn validate(config: &GeneratorConfig) -> Result<()> {
    let region = &config.region;
    if !region.is_well_formed() {
        return Err(SynthesisError::configuration(format!(
            "region is degenerate: lon {}..{}, lat {}..{}",
            region.min_lon, region.max_lon, region.min_lat, region.max_lat
        )));
    }

    if config.clusters.is_empty() {
        return Err(SynthesisError::configuration("cluster list is empty"));
    }

    if let Some(bad) = config.clusters.iter().find(|c| !c.density.is_finite() || c.density < 0.0) {
        return Err(SynthesisError::configuration(format!(
            "cluster '{}' has an invalid density {}",
            bad.name, bad.density
        )));
    }

    let total = config.clusters.total_weight();
    if !total.is_finite() || total <= 0.0 {
        return Err(SynthesisError::configuration(format!(
            "cluster densities must sum to a finite positive weight, got {total}"
        )));
    }

    Ok(())
}
