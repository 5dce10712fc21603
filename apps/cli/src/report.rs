use footprint::domain::Category;
use footprint::domain::geojson::FeatureCollection;
use std::path::Path;
use tracing::info;

/// Share of `part` in `total`, in percent with one decimal.
pub(crate) fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 1000.0).round() / 10.0
}

pub(crate) fn megabytes(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 / 1024.0 * 100.0).round() / 100.0
}

/// Logs the classification breakdown and artifact size of a finished run.
pub(crate) fn log_summary(collection: &FeatureCollection, path: &Path, bytes: u64) {
    let meta = &collection.metadata;
    let total = meta.total_buildings;

    info!(
        path = %path.display(),
        total,
        origin = ?meta.origin,
        size_mb = megabytes(bytes),
        "Dataset ready"
    );

    for category in Category::ALL {
        let count = meta.classification_breakdown.get(category);
        info!(%category, count, percent = percent(count, total), "Classification");
    }

    info!(
        area_sq_km = meta.summary.total_area_sq_km,
        avg_confidence = meta.summary.average_confidence,
        avg_size_m2 = meta.summary.average_building_size,
        total_value = meta.summary.total_estimated_value,
        "Summary"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_round_to_one_decimal() {
        assert_eq!(percent(1, 3), 33.3);
        assert_eq!(percent(2, 3), 66.7);
        assert_eq!(percent(5, 0), 0.0);
    }

    #[test]
    fn sizes_in_megabytes() {
        assert_eq!(megabytes(0), 0.0);
        assert_eq!(megabytes(1_572_864), 1.5);
    }
}
