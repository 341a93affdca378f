use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Workbook loaded at startup when present in the working directory.
pub const DEFAULT_DATA_FILE: &str = "aticos_sevilla_1900.xlsx";

/// Static settings for one dashboard session.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Source opened on startup. Missing files are not an error; the user
    /// is asked to open one instead.
    pub data_path: PathBuf,
    /// Number of bins in the price histogram.
    pub histogram_bins: usize,
    /// Sample points along the KDE overlay.
    pub kde_points: usize,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            histogram_bins: 30,
            kde_points: 200,
            window_title: "Atico Dash – Seville Penthouses".to_string(),
            window_size: [1200.0, 900.0],
            min_window_size: [700.0, 500.0],
        }
    }
}

impl DashboardConfig {
    /// Override the startup data source.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_sevilla_workbook() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.histogram_bins, 30);
        assert_eq!(cfg.data_path, PathBuf::from("aticos_sevilla_1900.xlsx"));
    }

    #[test]
    fn data_path_override() {
        let cfg = DashboardConfig::default().with_data_path("listings.csv");
        assert_eq!(cfg.data_path, PathBuf::from("listings.csv"));
        assert_eq!(cfg.histogram_bins, 30);
    }
}
